//! Foray Engine
//!
//! Environmental suitability scoring for wild-mushroom foraging locations.
//! Scores how suitable a location and a point-in-time weather reading are
//! for each known species, then aggregates the per-species scores into a
//! single location ranking.
//!
//! Structure:
//! - `utils/`: string normalization and haversine distance
//! - `data`: domain records and JSON catalog loading
//! - `season`: seasonal timing model
//! - `habitat`: fuzzy forest-type and tree-association matching
//! - `factors/`: the eight bounded factor scorers
//! - `scorer`: per-species suitability calculation
//! - `aggregate`: location-level ranking
//!
//! The engine is pure and stateless: no I/O from inside the scorers, no
//! shared mutable state, safe to call concurrently. Both the interactive
//! preview and the authoritative endpoint consume these same two entry
//! points, so their rankings agree bit-for-bit.

pub mod aggregate;
pub mod config;
pub mod data;
pub mod factors;
pub mod habitat;
pub mod scorer;
pub mod season;
pub mod utils;

// Re-export the external contract
pub use aggregate::{rank_location, LocationRanking};
pub use config::{ScoringConfig, SeasonTiers};
pub use data::{
    Accessibility, CatalogError, Difficulty, ForagingLocation, MushroomSpecies, WeatherSnapshot,
};
pub use scorer::{score_species, ScoreBreakdown, SpeciesScore};
