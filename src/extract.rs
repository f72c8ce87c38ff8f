use bio::alphabets::dna::revcomp;
use itertools::Itertools;

use crate::error::ExtractionError;
use crate::matcher::MatchedHit;
use crate::record::{GenomicRecord, LocationSegment, Strand};

const FALLBACK_ID: &str = "unknown_id";
const FALLBACK_DESCRIPTION: &str = "unknown description";
const FALLBACK_TAXONOMY: &str = "unknown taxonomy";

/// One output sequence. `identifier` and `description` are never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractedSequenceRecord {
    pub identifier: String,
    pub description: String,
    pub residues: Vec<u8>,
}

/// A matched feature whose sequence could not be derived.
#[derive(Debug)]
pub struct SkippedHit {
    /// The identifier the record would have been given.
    pub identifier: String,
    pub reason: ExtractionError,
}

#[derive(Debug, Default)]
pub struct Extraction {
    pub records: Vec<ExtractedSequenceRecord>,
    pub skipped: Vec<SkippedHit>,
}

fn segment_residues(sequence: &[u8], segment: &LocationSegment) -> Result<Vec<u8>, ExtractionError> {
    let out_of_bounds = || ExtractionError::OutOfBounds {
        start: segment.start,
        end: segment.end,
        len: sequence.len(),
    };

    let start = usize::try_from(segment.start).map_err(|_| out_of_bounds())?;
    let end = usize::try_from(segment.end).map_err(|_| out_of_bounds())?;
    let slice = sequence.get(start..end).ok_or_else(out_of_bounds)?;

    Ok(match segment.strand {
        Strand::Forward => slice.to_vec(),
        Strand::Reverse => revcomp(slice),
    })
}

/// Concatenates the residues of every segment in order, reverse-complementing reverse-strand
/// segments.
pub fn location_residues(sequence: &[u8], location: &[LocationSegment]) -> Result<Vec<u8>, ExtractionError> {
    if location.is_empty() {
        return Err(ExtractionError::EmptyLocation);
    }

    let mut residues = Vec::new();
    for segment in location {
        residues.extend(segment_residues(sequence, segment)?);
    }
    Ok(residues)
}

/// The id to prefix output identifiers with: the record id, else the file it came from.
fn record_label(record: &GenomicRecord) -> &str {
    record
        .id
        .as_deref()
        .filter(|id| !id.is_empty())
        .or_else(|| record.origin.as_deref().filter(|o| !o.is_empty()))
        .unwrap_or(FALLBACK_ID)
}

fn describe(record: &GenomicRecord, tag: &str) -> String {
    let definition = record
        .description
        .as_deref()
        .filter(|d| !d.is_empty())
        .unwrap_or(FALLBACK_DESCRIPTION);

    let taxonomy = if record.taxonomy.is_empty() {
        FALLBACK_TAXONOMY.to_string()
    } else {
        record.taxonomy.iter().join("; ")
    };

    format!("{tag} {definition}, {taxonomy}")
}

/// Builds one output record per hit. Hits are numbered from 1 in the order given, and a hit
/// whose sequence cannot be extracted keeps its number but is reported in `skipped` instead.
pub fn extract(record: &GenomicRecord, hits: &[MatchedHit]) -> Extraction {
    let label = record_label(record);
    let mut extraction = Extraction::default();

    for (idx, hit) in hits.iter().enumerate() {
        let tag = hit.reason.tag();
        let identifier = format!("{}_{}_{}", label, tag, idx + 1);

        match location_residues(&record.sequence, &hit.feature.location) {
            Ok(residues) => extraction.records.push(ExtractedSequenceRecord {
                identifier,
                description: describe(record, tag),
                residues,
            }),
            Err(reason) => {
                warn!("Skipping {identifier}: {reason}");
                extraction.skipped.push(SkippedHit { identifier, reason });
            }
        }
    }

    extraction
}
