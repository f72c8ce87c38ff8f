use std::collections::HashSet;

use crate::record::{AnnotatedFeature, GenomicRecord};
use crate::search::SearchTerms;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MatchReason {
    GeneName,
    ProductOrNote,
}

impl MatchReason {
    /// The tag used in output identifiers and descriptions.
    pub fn tag(&self) -> &'static str {
        match self {
            MatchReason::GeneName => "gene",
            MatchReason::ProductOrNote => "product_or_note",
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct MatchedHit<'a> {
    pub feature: &'a AnnotatedFeature,
    pub reason: MatchReason,
}

/// Finds the CDS features of `record` whose qualifiers mention one of the search terms.
///
/// A `gene` qualifier match wins over, and excludes, a `product`/`note` keyword match. Features
/// whose first location segment repeats that of an earlier hit are skipped, so the first
/// occurrence of a coordinate range is the only one reported. Hits come back in feature order.
pub fn find_hits<'a>(record: &'a GenomicRecord, terms: &SearchTerms) -> Vec<MatchedHit<'a>> {
    // coordinate keys of features that already produced a hit in this record
    let mut accepted: HashSet<(i64, i64)> = HashSet::new();
    let mut hits = Vec::new();

    for feature in record.features.iter().filter(|f| f.is_cds()) {
        let key = feature.coordinate_key();
        if let Some(key) = key {
            if accepted.contains(&key) {
                trace!("Skipping duplicate CDS at {}..{}", key.0, key.1);
                continue;
            }
        }

        let reason = if terms.matches_gene(&feature.qualifier_text(&["gene"])) {
            MatchReason::GeneName
        } else if terms.matches_keyword(&feature.qualifier_text(&["product", "note"])) {
            MatchReason::ProductOrNote
        } else {
            continue;
        };

        if let Some(key) = key {
            accepted.insert(key);
        }
        hits.push(MatchedHit { feature, reason });
    }

    hits
}
