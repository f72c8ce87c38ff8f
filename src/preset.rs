/// Built-in target sets, selected with `--preset`.
#[derive(clap::ValueEnum, Clone, Copy, Debug)]
pub enum PresetTargets {
    /// methyl-coenzyme M reductase alpha subunit (mcrA), the methanogen marker gene
    McrA,
}

const MCRA_KEYWORDS: &[&str] = &[
    "coenzyme-b sulfoethylthiotransferase subunit alpha",
    "methylcoenzyme M reductase subunit A",
    "methyl coenzyme M reductase subunit A",
    "methyl coenzyme M reductase subunit alpha",
    "methyl coenzyme M reductase alpha subunit",
    "methyl-coenzyme M reductase subunit A",
    "methyl-coenzyme M reductase alpha subunit",
    "methyl coenzyme M reductase, subunit A",
    "methyl coenzyme M reductase, subunit alpha",
    "methyl coenzyme M reductase, alpha subunit",
    "methyl-coenzyme M reductase, subunit A",
    "methyl-coenzyme M reductase, alpha subunit",
    "methyl-coenzyme M reductase, subunit alpha",
];

impl PresetTargets {
    /// Gene names matched against the `gene` qualifier.
    pub fn gene_names(&self) -> Vec<String> {
        match self {
            PresetTargets::McrA => vec![String::from("mcrA")],
        }
    }

    /// Keywords matched against the `product` and `note` qualifiers.
    pub fn keywords(&self) -> Vec<String> {
        match self {
            PresetTargets::McrA => MCRA_KEYWORDS.iter().map(|k| k.to_string()).collect(),
        }
    }
}
