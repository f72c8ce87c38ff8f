use std::path::{Path, PathBuf};

use anyhow::{ensure, Context, Result};
use rayon::prelude::*;

use crate::error::{ConfigError, ParseError};
use crate::extract::{extract, ExtractedSequenceRecord, SkippedHit};
use crate::matcher::{find_hits, MatchReason};
use crate::reader::read_record;
use crate::search::SearchTerms;

/// What a single file contributed to the run.
#[derive(Debug)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub cds_count: usize,
    pub gene_hits: usize,
    pub product_or_note_hits: usize,
    pub records: Vec<ExtractedSequenceRecord>,
    pub skipped: Vec<SkippedHit>,
}

/// A file that could not be parsed, and why.
#[derive(Debug)]
pub struct FailedFile {
    pub path: PathBuf,
    pub reason: String,
}

/// A matched feature whose sequence could not be extracted, and why.
#[derive(Debug)]
pub struct FailedHit {
    pub path: PathBuf,
    pub identifier: String,
    pub reason: String,
}

/// Everything gathered from all files of a run.
#[derive(Debug, Default)]
pub struct RunReport {
    pub records: Vec<ExtractedSequenceRecord>,
    pub files_processed: usize,
    pub cds_count: usize,
    pub gene_hits: usize,
    pub product_or_note_hits: usize,
    pub failed_files: Vec<FailedFile>,
    pub failed_hits: Vec<FailedHit>,
}

impl RunReport {
    /// Folds the result of one task into the report.
    fn add(&mut self, outcome: Result<FileOutcome, ParseError>) {
        match outcome {
            Ok(outcome) => {
                self.files_processed += 1;
                self.cds_count += outcome.cds_count;
                self.gene_hits += outcome.gene_hits;
                self.product_or_note_hits += outcome.product_or_note_hits;
                self.records.extend(outcome.records);
                self.failed_hits.extend(outcome.skipped.into_iter().map(|s| FailedHit {
                    path: outcome.path.clone(),
                    identifier: s.identifier,
                    reason: s.reason.to_string(),
                }));
            }
            Err(e) => {
                self.failed_files.push(FailedFile {
                    path: e.path().to_path_buf(),
                    reason: e.to_string(),
                });
            }
        }
    }
}

/// Lists the files in `input` matching `pattern`, in sorted order.
pub fn discover(input: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    ensure!(input.is_dir(), "Input directory {} does not exist", input.display());

    let dir = glob::Pattern::escape(&input.to_string_lossy());
    let full = format!("{}/{}", dir.trim_end_matches('/'), pattern);
    let mut files: Vec<PathBuf> = glob::glob(&full)
        .with_context(|| format!("Invalid file pattern {pattern}"))?
        .filter_map(|entry| match entry {
            Ok(path) => Some(path),
            Err(e) => {
                warn!("Skipping unreadable entry: {e}");
                None
            }
        })
        .filter(|p| p.is_file())
        .collect();
    files.sort();
    Ok(files)
}

/// Reads one file, finds matching CDS features and extracts their sequences.
pub fn process_file(path: &Path, terms: &SearchTerms) -> Result<FileOutcome, ParseError> {
    let record = read_record(path)?;
    let hits = find_hits(&record, terms);
    let cds_count = record.cds_count();

    let gene_hits = hits.iter().filter(|h| h.reason == MatchReason::GeneName).count();
    let product_or_note_hits = hits.len() - gene_hits;

    info!(
        "{}: {} CDS features, {} matches",
        path.display(),
        cds_count,
        hits.len()
    );

    let extraction = extract(&record, &hits);

    Ok(FileOutcome {
        path: path.to_path_buf(),
        cds_count,
        gene_hits,
        product_or_note_hits,
        records: extraction.records,
        skipped: extraction.skipped,
    })
}

/// Processes every file as an independent task on a pool of `threads` workers, then gathers all
/// results on the calling thread. A file that fails to parse is logged and contributes nothing.
///
/// Records in the report follow the order of `files`.
pub fn run(files: &[PathBuf], terms: &SearchTerms, threads: usize) -> Result<RunReport> {
    if threads == 0 {
        return Err(ConfigError::NoThreads.into());
    }

    let outcomes: Vec<Result<FileOutcome, ParseError>> = if threads == 1 {
        // single threaded execution is easy!
        files.iter().map(|f| process_file(f, terms)).collect()
    } else {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .with_context(|| format!("Unable to set the number of threads to {threads}"))?;

        pool.install(|| files.par_iter().map(|f| process_file(f, terms)).collect())
    };

    let mut report = RunReport::default();
    for outcome in outcomes {
        if let Err(e) = &outcome {
            warn!("Skipping file: {e}");
        }
        report.add(outcome);
    }

    Ok(report)
}
