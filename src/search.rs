use std::collections::BTreeSet;

use crate::error::ConfigError;

/// Gene names and product/note keywords to search for. Built once per run and shared read-only
/// between all tasks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchTerms {
    gene_names: BTreeSet<String>,
    keywords: BTreeSet<String>,
}

/// Trims and lowercases every term. An empty term would match any text, so it is refused.
fn normalise<I, S>(terms: I) -> Result<BTreeSet<String>, ConfigError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    terms
        .into_iter()
        .map(|t| {
            let t = t.as_ref().trim().to_lowercase();
            if t.is_empty() {
                Err(ConfigError::EmptyTerm)
            } else {
                Ok(t)
            }
        })
        .collect()
}

impl SearchTerms {
    pub fn new<G, K, S>(gene_names: G, keywords: K) -> Result<Self, ConfigError>
    where
        G: IntoIterator<Item = S>,
        K: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let gene_names = normalise(gene_names)?;
        let keywords = normalise(keywords)?;

        if gene_names.is_empty() && keywords.is_empty() {
            return Err(ConfigError::NoTerms);
        }

        Ok(Self { gene_names, keywords })
    }

    pub fn gene_names(&self) -> &BTreeSet<String> {
        &self.gene_names
    }

    pub fn keywords(&self) -> &BTreeSet<String> {
        &self.keywords
    }

    /// True if any gene name occurs in `text`. `text` must already be lowercase.
    pub fn matches_gene(&self, text: &str) -> bool {
        self.gene_names.iter().any(|g| text.contains(g.as_str()))
    }

    /// True if any keyword occurs in `text`. `text` must already be lowercase.
    pub fn matches_keyword(&self, text: &str) -> bool {
        self.keywords.iter().any(|k| text.contains(k.as_str()))
    }
}
