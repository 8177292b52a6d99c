//! Location Aggregator
//!
//! Runs the species calculator over the whole catalog for one location,
//! ranks the results, and derives the location-level probability and the
//! filtered suitable-species list. The per-species loop is embarrassingly
//! parallel and runs on rayon; output is deterministic regardless.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::ScoringConfig;
use crate::data::{ForagingLocation, MushroomSpecies, WeatherSnapshot};
use crate::scorer::{score_species, SpeciesScore};

/// Ranked result for one location
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationRanking {
    pub location_id: String,

    /// Weighted blend of the top scores, in [0, 100]
    pub overall_probability: i32,

    /// Scientific names of all species at or above the inclusion threshold,
    /// in rank order
    pub suitable_species: Vec<String>,

    /// Top species with their full breakdowns, for display (at most
    /// `config.top_species_count`)
    pub top_species: Vec<SpeciesScore>,

    /// Every species score, ranked. Ties keep catalog order.
    pub ranked: Vec<SpeciesScore>,
}

/// Score every catalog species against a location and aggregate.
///
/// Degenerate case: an empty catalog yields probability 0 and empty lists.
pub fn rank_location(
    location: &ForagingLocation,
    catalog: &[MushroomSpecies],
    weather: Option<&WeatherSnapshot>,
    month: u32,
    config: &ScoringConfig,
) -> LocationRanking {
    let mut ranked: Vec<SpeciesScore> = catalog
        .par_iter()
        .map(|species| score_species(species, location, weather, month, config))
        .collect();

    // Stable sort on probability alone: equal scores keep catalog order,
    // which makes the ranking deterministic across runs and call sites.
    ranked.sort_by(|a, b| b.probability.cmp(&a.probability));

    let suitable_species: Vec<String> = ranked
        .iter()
        .filter(|score| score.probability >= config.suitable_threshold)
        .map(|score| score.scientific_name.clone())
        .collect();

    let top_species: Vec<SpeciesScore> = ranked
        .iter()
        .take(config.top_species_count)
        .cloned()
        .collect();

    let overall_probability = overall_probability(&ranked, config);

    tracing::debug!(
        location = %location.id,
        species = catalog.len(),
        suitable = suitable_species.len(),
        overall = overall_probability,
        "ranked location"
    );

    LocationRanking {
        location_id: location.id.clone(),
        overall_probability,
        suitable_species,
        top_species,
        ranked,
    }
}

/// Weighted average of the top three scores.
///
/// With fewer than three species the weights are renormalized over the
/// scores that exist, so a single-species catalog yields that species'
/// probability unchanged.
fn overall_probability(ranked: &[SpeciesScore], config: &ScoringConfig) -> i32 {
    if ranked.is_empty() {
        return 0;
    }

    let weights = &config.top_score_weights;
    let take = ranked.len().min(weights.len());

    let mut weighted = 0.0;
    let mut weight_sum = 0.0;
    for i in 0..take {
        weighted += ranked[i].probability as f64 * weights[i];
        weight_sum += weights[i];
    }

    if weight_sum <= 0.0 {
        return 0;
    }

    ((weighted / weight_sum).round() as i32).clamp(0, 100)
}
