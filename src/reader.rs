use std::fs::File;
use std::io::Read;
use std::path::Path;

use gb_io::reader::SeqReader;
use gb_io::seq::{Feature, Location, Seq};
use itertools::Itertools;

use crate::error::ParseError;
use crate::record::{AnnotatedFeature, GenomicRecord, LocationSegment, Qualifiers, Strand};

/// Placeholders some tools write instead of leaving a field out.
const UNKNOWN_ID: &str = "<unknown id>";
const UNKNOWN_DESCRIPTION: &str = "<unknown description>";

/// Reads the single GenBank record stored in `path`.
pub fn read_record(path: &Path) -> Result<GenomicRecord, ParseError> {
    let file = File::open(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let origin = path.file_stem().map(|s| s.to_string_lossy().into_owned());
    let mut record = parse_single(file, path)?;
    record.origin = origin;
    Ok(record)
}

/// Parses `data`, which must hold exactly one GenBank record.
pub fn parse_single<R: Read>(data: R, path: &Path) -> Result<GenomicRecord, ParseError> {
    let seqs: Vec<Seq> = SeqReader::new(data)
        .collect::<Result<_, _>>()
        .map_err(|e| ParseError::Syntax {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    match seqs.len() {
        0 => Err(ParseError::Empty { path: path.to_path_buf() }),
        1 => Ok(convert(seqs.into_iter().next().unwrap_or_else(Seq::empty))),
        count => Err(ParseError::MultipleRecords { path: path.to_path_buf(), count }),
    }
}

fn present(value: Option<&str>, placeholder: &str) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty() && *v != placeholder && *v != ".")
        .map(String::from)
}

/// VERSION, else ACCESSION, else the LOCUS name.
fn record_id(seq: &Seq) -> Option<String> {
    let first_token = |s: &String| s.split_whitespace().next().map(String::from);
    let id = seq
        .version
        .as_ref()
        .and_then(first_token)
        .or_else(|| seq.accession.as_ref().and_then(first_token))
        .or_else(|| seq.name.clone());
    present(id.as_deref(), UNKNOWN_ID)
}

/// DEFINITION on one line, without its closing full stop.
fn record_description(seq: &Seq) -> Option<String> {
    let definition = seq.definition.as_ref()?.split_whitespace().join(" ");
    let definition = definition.strip_suffix('.').unwrap_or(&definition);
    present(Some(definition), UNKNOWN_DESCRIPTION)
}

/// Lineages with a single rank, which carry no `;` to mark where the lineage starts.
const SINGLE_RANK_LINEAGES: &[&str] = &[
    "Archaea.",
    "Bacteria.",
    "Eukaryota.",
    "Unclassified.",
    "Viroids.",
    "Viruses.",
    "other sequences.",
    "unclassified sequences.",
];

/// The lineage lines that follow the organism name in the ORGANISM block. Long organism names
/// wrap, so the lineage starts at the first line holding a `;` or a lone single-rank lineage.
fn record_taxonomy(seq: &Seq) -> Vec<String> {
    let organism = match seq.source.as_ref().and_then(|s| s.organism.as_ref()) {
        Some(o) => o,
        None => return Vec::new(),
    };

    organism
        .lines()
        .skip(1)
        .skip_while(|line| {
            let line = line.trim();
            !line.contains(';') && !SINGLE_RANK_LINEAGES.contains(&line)
        })
        .join(" ")
        .split(';')
        .map(|rank| rank.trim().trim_end_matches('.').trim().to_string())
        .filter(|rank| !rank.is_empty())
        .collect()
}

/// Appends the segments of `location` to `out`. Returns `false` for anything that isn't a plain
/// range, complement, join or order.
fn flatten(location: &Location, out: &mut Vec<LocationSegment>) -> bool {
    match location {
        Location::Range((start, _), (end, _)) => {
            out.push(LocationSegment::forward(*start, *end));
            true
        }
        Location::Complement(inner) => {
            let mut segments = Vec::new();
            if !flatten(inner, &mut segments) {
                return false;
            }
            out.extend(segments.into_iter().rev().map(|s| match s.strand {
                Strand::Forward => LocationSegment::reverse(s.start, s.end),
                Strand::Reverse => LocationSegment::forward(s.start, s.end),
            }));
            true
        }
        Location::Join(parts) | Location::Order(parts) => {
            parts.iter().all(|part| flatten(part, out))
        }
        _ => false,
    }
}

pub fn location_segments(location: &Location) -> Vec<LocationSegment> {
    let mut segments = Vec::new();
    if flatten(location, &mut segments) {
        segments
    } else {
        debug!("Location {location:?} cannot be extracted");
        Vec::new()
    }
}

fn convert_feature(feature: &Feature) -> AnnotatedFeature {
    let mut qualifiers = Qualifiers::new();
    for (key, value) in feature.qualifiers.iter() {
        // wrapped values keep their line breaks
        if let Some(value) = value {
            qualifiers
                .entry(key.to_string())
                .or_default()
                .push(value.split_whitespace().join(" "));
        }
    }

    AnnotatedFeature {
        feature_type: feature.kind.to_string(),
        location: location_segments(&feature.location),
        qualifiers,
    }
}

pub fn convert(seq: Seq) -> GenomicRecord {
    GenomicRecord {
        id: record_id(&seq),
        description: record_description(&seq),
        taxonomy: record_taxonomy(&seq),
        features: seq.features.iter().map(convert_feature).collect(),
        sequence: seq.seq.to_ascii_uppercase(),
        origin: None,
    }
}
