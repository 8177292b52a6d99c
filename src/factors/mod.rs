//! Factor Scorers
//!
//! Eight independent pure functions, each mapping one environmental
//! dimension to a bounded integer sub-score. Every factor has an explicit
//! maximum and an explicit "no data" default chosen as a plausible mid-range
//! value, so missing data neither penalizes nor rewards a species.
//!
//! Tiering is deliberately asymmetric: proximity is rewarded and scores only
//! reach zero at extreme mismatch, so small weather fluctuations around a
//! threshold never cause cliff-edge probability swings.

pub mod elevation;
pub mod humidity;
pub mod rainfall;
pub mod soil;
pub mod temperature;

pub use elevation::{score_elevation, ELEVATION_DEFAULT, ELEVATION_MAX};
pub use humidity::{score_humidity, HUMIDITY_DEFAULT, HUMIDITY_MAX};
pub use rainfall::{score_rainfall, RAINFALL_DEFAULT, RAINFALL_MAX};
pub use soil::{score_soil_temperature, SOIL_DEFAULT, SOIL_MAX};
pub use temperature::{score_temperature, TEMPERATURE_DEFAULT, TEMPERATURE_MAX};

use crate::config::SeasonTiers;
use crate::habitat::{self, TreeMatch};
use crate::season;

pub const FOREST_MAX: i32 = 10;
/// Consolation score on a miss; forest-type labeling is informal enough
/// that a non-match is weak evidence
pub const FOREST_MISS: i32 = 3;
pub const FOREST_DEFAULT: i32 = 5;

pub const TREES_MAX: i32 = 15;
pub const TREES_DEFAULT: i32 = 8;

pub const SEASON_MAX: i32 = 10;

/// Forest-type factor: full marks on a habitat-matcher hit, a small
/// consolation score otherwise, and the neutral default when either side
/// has no forest-type data.
pub fn score_forest_type(location_forest: Option<&str>, species_forest_types: &[String]) -> i32 {
    let Some(forest) = location_forest else {
        return FOREST_DEFAULT;
    };
    if forest.trim().is_empty() || species_forest_types.is_empty() {
        return FOREST_DEFAULT;
    }

    if habitat::forest_type_matches(forest, species_forest_types) {
        FOREST_MAX
    } else {
        FOREST_MISS
    }
}

/// Tree-species factor: tiered on the habitat matcher's match ratio.
///
/// "No data" (either list empty) gets the neutral default, which is not the
/// same thing as a 0.0 ratio over real data.
pub fn score_tree_species(location_trees: &[String], species_trees: &[String]) -> i32 {
    match habitat::tree_match_ratio(location_trees, species_trees) {
        TreeMatch::NoData => TREES_DEFAULT,
        TreeMatch::Ratio(ratio) => {
            if ratio >= 0.7 {
                15
            } else if ratio >= 0.5 {
                12
            } else if ratio >= 0.3 {
                9
            } else if ratio >= 0.1 {
                6
            } else {
                3
            }
        }
    }
}

/// Season factor: delegated entirely to the seasonal timing model.
/// Always computable, so it has no "no data" default.
pub fn score_season(label: &str, month: u32, tiers: &SeasonTiers) -> i32 {
    season::season_score(label, month, tiers)
}
