//! Species Suitability Calculator
//!
//! Combines the eight factor sub-scores into one clamped 0-100 probability
//! for a (species, location, weather) triple, plus the per-factor breakdown
//! used for explanation text. Total over every input combination: absent
//! weather and absent optional fields resolve to the documented factor
//! defaults, never to an error. The UI and batch analysis must never have to
//! special-case missing data.

use serde::{Deserialize, Serialize};

use crate::config::ScoringConfig;
use crate::data::{ForagingLocation, MushroomSpecies, WeatherSnapshot};
use crate::factors;

/// Per-factor sub-scores plus the clamped total
///
/// Ephemeral: computed per call, never persisted. Every sub-score is bounded
/// by its factor's documented maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub temperature: i32,
    pub humidity: i32,
    pub soil_temperature: i32,
    pub rainfall: i32,
    pub elevation: i32,
    pub forest_type: i32,
    pub tree_species: i32,
    pub season: i32,

    /// clamp(sum of sub-scores, 0, 100)
    pub total: i32,
}

impl ScoreBreakdown {
    /// Unclamped sum of the eight sub-scores
    pub fn sum(&self) -> i32 {
        self.temperature
            + self.humidity
            + self.soil_temperature
            + self.rainfall
            + self.elevation
            + self.forest_type
            + self.tree_species
            + self.season
    }
}

/// Result of scoring one species at one location
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeciesScore {
    pub scientific_name: String,

    /// Heuristic suitability in [0, 100]; not a statistical probability
    pub probability: i32,

    pub breakdown: ScoreBreakdown,
}

/// Score one species against a location and an optional weather snapshot.
///
/// `month` is the current calendar month (1-12), injected by the caller so
/// the calculation stays deterministic.
pub fn score_species(
    species: &MushroomSpecies,
    location: &ForagingLocation,
    weather: Option<&WeatherSnapshot>,
    month: u32,
    config: &ScoringConfig,
) -> SpeciesScore {
    let breakdown = ScoreBreakdown {
        temperature: factors::score_temperature(species.optimal_temperature, weather),
        humidity: factors::score_humidity(species.optimal_humidity, weather),
        soil_temperature: factors::score_soil_temperature(species.min_soil_temperature, weather),
        rainfall: factors::score_rainfall(weather),
        elevation: factors::score_elevation(
            location.elevation,
            species.elevation_min,
            species.elevation_max,
        ),
        forest_type: factors::score_forest_type(
            location.forest_type.as_deref(),
            &species.forest_types,
        ),
        tree_species: factors::score_tree_species(&location.tree_species, &species.tree_associations),
        season: factors::score_season(&species.season, month, &config.season_tiers),
        total: 0,
    };

    let total = breakdown.sum().clamp(0, 100);
    let breakdown = ScoreBreakdown { total, ..breakdown };

    SpeciesScore {
        scientific_name: species.scientific_name.clone(),
        probability: total,
        breakdown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Accessibility, Difficulty};

    fn species() -> MushroomSpecies {
        MushroomSpecies {
            scientific_name: "Boletus edulis".to_string(),
            display_name: "Porcini".to_string(),
            description: String::new(),
            season: "All Year".to_string(),
            optimal_temperature: Some(18.0),
            optimal_humidity: Some(80.0),
            min_soil_temperature: None,
            tree_associations: vec!["Spruce".to_string()],
            forest_types: vec!["Conifer".to_string()],
            elevation_min: Some(400.0),
            elevation_max: Some(1200.0),
            edible: true,
            difficulty: Difficulty::Intermediate,
            safety_notes: String::new(),
        }
    }

    fn location() -> ForagingLocation {
        ForagingLocation {
            id: "loc-1".to_string(),
            name: "Testwald".to_string(),
            latitude: 47.0,
            longitude: 8.0,
            elevation: Some(800.0),
            forest_type: Some("Conifer".to_string()),
            tree_species: vec!["Fichte".to_string()],
            accessibility: Accessibility::Moderate,
        }
    }

    fn ideal_weather() -> WeatherSnapshot {
        WeatherSnapshot {
            temperature: 18.0,
            humidity: 80.0,
            soil_temperature: 14.0,
            days_since_rain: 1,
            wind_speed: None,
            pressure: None,
        }
    }

    #[test]
    fn test_ideal_scenario_maxes_factors_and_clamps() {
        let config = ScoringConfig::default();
        let score = score_species(&species(), &location(), Some(&ideal_weather()), 9, &config);

        assert_eq!(score.breakdown.temperature, 25);
        assert_eq!(score.breakdown.humidity, 20);
        assert_eq!(score.breakdown.rainfall, 15);
        assert_eq!(score.breakdown.elevation, 10);
        assert_eq!(score.breakdown.forest_type, 10);
        assert_eq!(score.breakdown.season, 10);
        // Fichte matches Spruce exactly through the synonym table
        assert_eq!(score.breakdown.tree_species, 15);

        // Raw sum exceeds 100 and clamps
        assert!(score.breakdown.sum() > 100);
        assert_eq!(score.probability, 100);
        assert_eq!(score.breakdown.total, 100);
    }

    #[test]
    fn test_all_defaults_when_everything_missing() {
        let mut bare_species = species();
        bare_species.optimal_temperature = None;
        bare_species.optimal_humidity = None;
        bare_species.min_soil_temperature = None;
        bare_species.tree_associations.clear();
        bare_species.forest_types.clear();
        bare_species.elevation_min = None;
        bare_species.elevation_max = None;

        let mut bare_location = location();
        bare_location.elevation = None;
        bare_location.forest_type = None;
        bare_location.tree_species.clear();

        let config = ScoringConfig::default();
        let score = score_species(&bare_species, &bare_location, None, 6, &config);

        assert_eq!(score.breakdown.temperature, factors::TEMPERATURE_DEFAULT);
        assert_eq!(score.breakdown.humidity, factors::HUMIDITY_DEFAULT);
        assert_eq!(score.breakdown.soil_temperature, factors::SOIL_DEFAULT);
        assert_eq!(score.breakdown.rainfall, factors::RAINFALL_DEFAULT);
        assert_eq!(score.breakdown.elevation, factors::ELEVATION_DEFAULT);
        assert_eq!(score.breakdown.forest_type, factors::FOREST_DEFAULT);
        assert_eq!(score.breakdown.tree_species, factors::TREES_DEFAULT);
        // "All Year" is always in season
        assert_eq!(score.breakdown.season, 10);

        assert_eq!(score.probability, score.breakdown.sum());
    }

    #[test]
    fn test_sub_scores_within_documented_maxima() {
        let config = ScoringConfig::default();
        let score = score_species(&species(), &location(), Some(&ideal_weather()), 10, &config);
        let b = &score.breakdown;

        assert!((0..=factors::TEMPERATURE_MAX).contains(&b.temperature));
        assert!((0..=factors::HUMIDITY_MAX).contains(&b.humidity));
        assert!((0..=factors::SOIL_MAX).contains(&b.soil_temperature));
        assert!((0..=factors::RAINFALL_MAX).contains(&b.rainfall));
        assert!((0..=factors::ELEVATION_MAX).contains(&b.elevation));
        assert!((0..=factors::FOREST_MAX).contains(&b.forest_type));
        assert!((0..=factors::TREES_MAX).contains(&b.tree_species));
        assert!((0..=factors::SEASON_MAX).contains(&b.season));
        assert!((0..=100).contains(&score.probability));
    }
}
