//! Scoring Configuration
//!
//! Design constants for the engine, kept in one injectable struct so the two
//! call sites (interactive preview and authoritative endpoint) and the test
//! suite all share the exact same numbers. `Default` yields the canonical
//! contract values; deployments may override them from JSON.

use serde::{Deserialize, Serialize};

/// Tier values for the seasonal timing model
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SeasonTiers {
    /// Current month inside the season's core range
    pub in_season: i32,

    /// Current month adjacent to the core range
    pub adjacent: i32,

    /// Anywhere else, including unrecognized labels
    pub off_season: i32,
}

impl Default for SeasonTiers {
    fn default() -> Self {
        Self {
            in_season: 10,
            adjacent: 6,
            off_season: 2,
        }
    }
}

/// All tunable constants of the suitability engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Season tier values (also the season factor's maximum)
    pub season_tiers: SeasonTiers,

    /// Minimum probability for a species to appear in `suitable_species`
    pub suitable_threshold: i32,

    /// How many species objects to return for display
    pub top_species_count: usize,

    /// Weights for the top three scores in the overall location probability.
    /// Must sum to 1.0.
    pub top_score_weights: [f64; 3],
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            season_tiers: SeasonTiers::default(),
            suitable_threshold: 35,
            top_species_count: 5,
            top_score_weights: [0.40, 0.35, 0.25],
        }
    }
}

impl ScoringConfig {
    /// Sum of the top-score weights, used to renormalize when fewer than
    /// three species exist.
    pub fn weight_sum(&self) -> f64 {
        self.top_score_weights.iter().sum()
    }
}
