use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::scan::RunReport;

#[derive(Serialize, Debug, PartialEq)]
pub struct SkippedFile {
    pub path: String,
    pub reason: String,
}

#[derive(Serialize, Debug, PartialEq)]
pub struct SkippedHitEntry {
    pub path: String,
    pub identifier: String,
    pub reason: String,
}

/// Machine-readable account of a run, written with `--summary`.
#[derive(Serialize, Debug)]
pub struct RunSummary {
    pub genescoop_version: String,
    pub run_date: String,
    pub input_dir: String,
    pub output_file: String,
    pub elapsed: f64,
    pub files_found: usize,
    pub files_processed: usize,
    pub cds_features: usize,
    pub gene_hits: usize,
    pub product_or_note_hits: usize,
    pub records_written: usize,
    pub skipped_files: Vec<SkippedFile>,
    pub skipped_hits: Vec<SkippedHitEntry>,
}

impl RunSummary {
    pub fn new(
        report: &RunReport,
        input_dir: &Path,
        output_file: &Path,
        files_found: usize,
        elapsed: f64,
    ) -> Self {
        Self {
            genescoop_version: crate::cli::VERSION.to_string(),
            run_date: chrono::Local::now().to_rfc3339(),
            input_dir: input_dir.display().to_string(),
            output_file: output_file.display().to_string(),
            elapsed,
            files_found,
            files_processed: report.files_processed,
            cds_features: report.cds_count,
            gene_hits: report.gene_hits,
            product_or_note_hits: report.product_or_note_hits,
            records_written: report.records.len(),
            skipped_files: report
                .failed_files
                .iter()
                .map(|f| SkippedFile {
                    path: f.path.display().to_string(),
                    reason: f.reason.clone(),
                })
                .collect(),
            skipped_hits: report
                .failed_hits
                .iter()
                .map(|h| SkippedHitEntry {
                    path: h.path.display().to_string(),
                    identifier: h.identifier.clone(),
                    reason: h.reason.clone(),
                })
                .collect(),
        }
    }

    /// Writes the summary as pretty-printed JSON.
    pub fn write(&self, path: &Path) -> Result<()> {
        let file = std::fs::File::create(path)
            .with_context(|| format!("Unable to create summary file {}", path.display()))?;
        serde_json::to_writer_pretty(file, self).context("Could not serialize summary")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::{FailedFile, FailedHit};
    use std::path::PathBuf;

    #[test]
    fn serializes_report() {
        let report = RunReport {
            files_processed: 2,
            cds_count: 10,
            gene_hits: 1,
            failed_files: vec![FailedFile {
                path: PathBuf::from("in/bad.gbk"),
                reason: "no records found in in/bad.gbk".into(),
            }],
            failed_hits: vec![FailedHit {
                path: PathBuf::from("in/a.gbk"),
                identifier: "A_gene_2".into(),
                reason: "feature location has no segments that can be extracted".into(),
            }],
            ..Default::default()
        };

        let summary = RunSummary::new(&report, Path::new("in"), Path::new("out.fasta"), 3, 0.5);
        let json = serde_json::to_value(&summary).unwrap();

        assert_eq!(json["files_found"], 3);
        assert_eq!(json["files_processed"], 2);
        assert_eq!(json["records_written"], 0);
        assert_eq!(json["skipped_files"][0]["path"], "in/bad.gbk");
        assert_eq!(json["skipped_hits"][0]["identifier"], "A_gene_2");
        assert_eq!(
            summary.skipped_hits,
            vec![SkippedHitEntry {
                path: "in/a.gbk".into(),
                identifier: "A_gene_2".into(),
                reason: "feature location has no segments that can be extracted".into(),
            }]
        );
    }
}
