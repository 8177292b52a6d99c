//! Shared utilities: string normalization and geodesy

pub mod geo;

pub use geo::{haversine_km, nearest_location};

/// Case-fold and trim a free-text attribute for matching.
///
/// All fuzzy matching in the engine (seasons, forest types, tree names)
/// normalizes through here so the rules stay consistent.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}
