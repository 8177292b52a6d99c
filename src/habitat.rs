//! Habitat Matcher
//!
//! Fuzzy matching between a location's informal habitat vocabulary and a
//! species' ecological preferences. Two problems share one normalization
//! strategy (case-fold, trim): forest-type matching and tree-association
//! matching. The source data mixes English and German vernacular tree names,
//! so a curated synonym table sits between exact equality and substring
//! containment.
//!
//! Everything here is pure and total over arbitrary input strings.

use std::sync::OnceLock;

use rustc_hash::FxHashMap;

use crate::utils::normalize;

/// Recognized forest-type families. Labels within one family are treated as
/// the same habitat ("conifer" on the location, "softwood" on the species).
const FOREST_FAMILIES: &[&[&str]] = &[
    &["mixed", "mixed forest", "mischwald"],
    &[
        "conifer",
        "coniferous",
        "softwood",
        "evergreen",
        "nadelwald",
    ],
    &[
        "hardwood",
        "deciduous",
        "broadleaf",
        "broadleaved",
        "laubwald",
    ],
];

/// Cross-language synonym groups for tree names. Covers the common-name /
/// vernacular pairs that actually occur in the species records.
const TREE_SYNONYMS: &[&[&str]] = &[
    &["spruce", "fichte", "rottanne", "picea"],
    &["beech", "buche", "rotbuche", "fagus"],
    &["fir", "tanne", "weisstanne", "weißtanne", "abies"],
    &["pine", "kiefer", "föhre", "foehre", "pinus"],
    &["oak", "eiche", "quercus"],
    &["birch", "birke", "betula"],
    &["larch", "lärche", "laerche", "larix"],
];

fn forest_family_index() -> &'static FxHashMap<&'static str, usize> {
    static INDEX: OnceLock<FxHashMap<&'static str, usize>> = OnceLock::new();
    INDEX.get_or_init(|| {
        let mut map = FxHashMap::default();
        for (group, members) in FOREST_FAMILIES.iter().enumerate() {
            for member in *members {
                map.insert(*member, group);
            }
        }
        map
    })
}

fn tree_synonym_index() -> &'static FxHashMap<&'static str, usize> {
    static INDEX: OnceLock<FxHashMap<&'static str, usize>> = OnceLock::new();
    INDEX.get_or_init(|| {
        let mut map = FxHashMap::default();
        for (group, members) in TREE_SYNONYMS.iter().enumerate() {
            for member in *members {
                map.insert(*member, group);
            }
        }
        map
    })
}

/// Check whether two individual tree-name strings refer to the same tree.
///
/// Match order: exact (normalized) equality, synonym-table group, then
/// substring containment in either direction ("spruce forest" contains
/// "spruce").
pub fn trees_match(a: &str, b: &str) -> bool {
    let a = normalize(a);
    let b = normalize(b);

    if a.is_empty() || b.is_empty() {
        return false;
    }
    if a == b {
        return true;
    }

    let index = tree_synonym_index();
    if let (Some(ga), Some(gb)) = (index.get(a.as_str()), index.get(b.as_str())) {
        if ga == gb {
            return true;
        }
    }

    a.contains(&b) || b.contains(&a)
}

/// Check whether a location's forest type matches any of a species'
/// preferred forest types.
///
/// A hit is normalized equality or membership in the same forest family.
pub fn forest_type_matches(location_forest: &str, species_forest_types: &[String]) -> bool {
    let local = normalize(location_forest);
    if local.is_empty() {
        return false;
    }

    let index = forest_family_index();
    let local_family = index.get(local.as_str());

    species_forest_types.iter().any(|candidate| {
        let candidate = normalize(candidate);
        if candidate.is_empty() {
            return false;
        }
        if candidate == local {
            return true;
        }
        match (local_family, index.get(candidate.as_str())) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    })
}

/// Outcome of matching a location's tree list against a species' tree
/// associations.
///
/// "No data on either side" is deliberately distinct from "trees present but
/// none matched": the former gets a neutral factor default, the latter a
/// genuine low ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TreeMatch {
    /// Either the location or the species has no tree data
    NoData,

    /// Fraction of location trees with at least one association match,
    /// in [0.0, 1.0]
    Ratio(f64),
}

/// Compute the tree-association match ratio for a location/species pair
pub fn tree_match_ratio(location_trees: &[String], species_trees: &[String]) -> TreeMatch {
    if location_trees.is_empty() || species_trees.is_empty() {
        return TreeMatch::NoData;
    }

    let matched = location_trees
        .iter()
        .filter(|tree| species_trees.iter().any(|assoc| trees_match(tree, assoc)))
        .count();

    TreeMatch::Ratio(matched as f64 / location_trees.len() as f64)
}
