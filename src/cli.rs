use std::path::PathBuf;

use clap::builder::styling::AnsiColor;
use clap::builder::Styles;
use clap::Parser;

use crate::preset::PresetTargets;

const fn extra_build_info() -> &'static str {
    match option_env!("CARGO_BUILD_DESC") {
        Some(e) => e,
        None => env!("CARGO_PKG_VERSION"),
    }
}
pub const VERSION: &str = extra_build_info();
const INFO_STRING: &str = "
🧬 genescoop version ";
const AFTER_STRING: &str = "
   ──────────────────────────────────
   pull coding sequences for a gene of interest out of GenBank files";

// colouring of the help
const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Yellow.on_default().bold())
    .usage(AnsiColor::BrightMagenta.on_default().bold())
    .literal(AnsiColor::BrightMagenta.on_default())
    .placeholder(AnsiColor::White.on_default());

#[derive(Parser, Debug)]
#[command(
    version = VERSION,
    about = format!("{}{}{}", INFO_STRING, VERSION, AFTER_STRING),
    arg_required_else_help = true,
    styles = STYLES
)]
pub struct Cli {
    /// directory containing the annotated genome files
    pub input: PathBuf,

    /// the output .fasta file
    #[arg(short, long)]
    pub output: PathBuf,

    /// the number of threads to use
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..))]
    pub threads: u16,

    /// which files in the input directory to read
    #[arg(long, default_value = "*.gbk")]
    pub pattern: String,

    /// built-in set of gene names and product/note keywords to search for
    #[arg(long, value_enum, default_value = "mcr-a")]
    pub preset: PresetTargets,

    /// gene name to match in the `gene` qualifier, replacing the preset's names. may be repeated
    #[arg(short, long = "gene")]
    pub genes: Vec<String>,

    /// text to match in the `product` or `note` qualifiers, replacing the preset's keywords.
    /// may be repeated
    #[arg(short, long = "keyword")]
    pub keywords: Vec<String>,

    /// residues per line in the output. 0 writes each sequence on one line
    #[arg(long, default_value_t = crate::io::DEFAULT_LINE_WIDTH)]
    pub line_width: usize,

    /// also write a JSON summary of the run to this file
    #[arg(long)]
    pub summary: Option<PathBuf>,
}

impl Cli {
    /// Gene names and keywords for this run: the preset's, unless overridden.
    pub fn search_terms(&self) -> (Vec<String>, Vec<String>) {
        let genes = if self.genes.is_empty() {
            self.preset.gene_names()
        } else {
            self.genes.clone()
        };
        let keywords = if self.keywords.is_empty() {
            self.preset.keywords()
        } else {
            self.keywords.clone()
        };
        (genes, keywords)
    }
}
