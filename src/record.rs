use indexmap::IndexMap;
use itertools::Itertools;

/// Qualifier values keyed by qualifier name, in the order they appear in the file.
pub type Qualifiers = IndexMap<String, Vec<String>>;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Strand {
    Forward,
    Reverse,
}

/// A contiguous coordinate range on one strand. Coordinates are 0-based and `end` is exclusive,
/// so GenBank `1..9` is stored as `start = 0, end = 9`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LocationSegment {
    pub start: i64,
    pub end: i64,
    pub strand: Strand,
}

impl LocationSegment {
    pub fn forward(start: i64, end: i64) -> Self {
        Self { start, end, strand: Strand::Forward }
    }

    pub fn reverse(start: i64, end: i64) -> Self {
        Self { start, end, strand: Strand::Reverse }
    }
}

/// One annotation entry of a `GenomicRecord`.
#[derive(Clone, Debug, PartialEq)]
pub struct AnnotatedFeature {
    pub feature_type: String,
    /// Segments in the order they are joined. Empty when the source location could not be
    /// expressed as plain ranges.
    pub location: Vec<LocationSegment>,
    pub qualifiers: Qualifiers,
}

impl AnnotatedFeature {
    pub fn is_cds(&self) -> bool {
        self.feature_type == "CDS"
    }

    /// `(start, end)` of the first location segment.
    pub fn coordinate_key(&self) -> Option<(i64, i64)> {
        self.location.first().map(|s| (s.start, s.end))
    }

    /// All values of the given qualifiers, in key order, lowercased and joined by spaces. Missing
    /// keys contribute nothing.
    pub fn qualifier_text(&self, keys: &[&str]) -> String {
        keys.iter()
            .filter_map(|k| self.qualifiers.get(*k))
            .flatten()
            .join(" ")
            .to_lowercase()
    }
}

/// One parsed input unit, owned by the task that processes its file.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GenomicRecord {
    pub id: Option<String>,
    pub description: Option<String>,
    pub taxonomy: Vec<String>,
    pub sequence: Vec<u8>,
    pub features: Vec<AnnotatedFeature>,
    /// Name of the file the record came from, used when `id` is absent.
    pub origin: Option<String>,
}

impl GenomicRecord {
    pub fn cds_count(&self) -> usize {
        self.features.iter().filter(|f| f.is_cds()).count()
    }
}

#[cfg(test)]
pub(crate) mod test_util {
    use super::*;

    /// Builds a feature from `(key, value)` qualifier pairs.
    pub fn feature(kind: &str, location: Vec<LocationSegment>, qualifiers: &[(&str, &str)]) -> AnnotatedFeature {
        let mut map = Qualifiers::new();
        for (k, v) in qualifiers {
            map.entry(k.to_string()).or_default().push(v.to_string());
        }
        AnnotatedFeature {
            feature_type: kind.to_string(),
            location,
            qualifiers: map,
        }
    }
}
