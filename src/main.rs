extern crate env_logger;
#[macro_use]
extern crate log;

use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;

mod cli;
mod error;
mod extract;
mod io;
mod matcher;
mod preset;
mod reader;
mod record;
mod scan;
mod search;
mod summary;

use cli::Cli;
use search::SearchTerms;

fn try_main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_target(false)
        .init();

    let cli = Cli::parse();
    let start = Instant::now();

    info!("genescoop v{}", cli::VERSION);

    let (genes, keywords) = cli.search_terms();
    let terms = SearchTerms::new(&genes, &keywords).context("Invalid search terms")?;
    info!(
        "Searching for {} gene name(s) and {} keyword(s)",
        terms.gene_names().len(),
        terms.keywords().len()
    );

    let files = scan::discover(&cli.input, &cli.pattern)?;
    info!(
        "Found {} files matching {} in {}",
        files.len(),
        cli.pattern,
        cli.input.display()
    );

    let report = scan::run(&files, &terms, cli.threads.into())?;

    if !report.failed_files.is_empty() {
        warn!("{} file(s) could not be read", report.failed_files.len());
    }
    if !report.failed_hits.is_empty() {
        warn!("{} matched feature(s) could not be extracted", report.failed_hits.len());
    }
    info!("Total extracted sequences: {}", report.records.len());

    io::write_output(&cli.output, &report.records, cli.line_width)?;
    info!("Sequences saved to {}", cli.output.display());

    if let Some(path) = &cli.summary {
        let summary = summary::RunSummary::new(
            &report,
            &cli.input,
            &cli.output,
            files.len(),
            start.elapsed().as_secs_f64(),
        );
        summary.write(path)?;
        info!("Summary saved to {}", path.display());
    }

    info!("Completed successfully.");
    Ok(())
}

fn main() {
    if let Err(err) = try_main() {
        error!("{}", err);

        // report any errors that are produced
        err.chain()
            .skip(1)
            .for_each(|cause| error!("  because: {}", cause));

        std::process::exit(1);
    }
}
