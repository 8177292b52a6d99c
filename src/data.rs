//! Domain Records and Catalog Loading
//!
//! Plain structured inputs to the scoring engine: the species catalog,
//! foraging locations, and point-in-time weather snapshots. The engine only
//! reads these; mutation (and the scraping pipeline that produces new
//! species records) lives outside this crate.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structural validation failure for a catalog record.
///
/// The scoring engine itself is total and never raises; this is the boundary
/// check that keeps malformed records out of it.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("species record {index} has an empty scientific name")]
    MissingScientificName { index: usize },

    #[error("species '{scientific_name}' has an empty season label")]
    MissingSeason { scientific_name: String },
}

/// Difficulty tier for identifying a species in the field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Expert,
}

/// How hard a location is to reach on foot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Accessibility {
    Easy,
    Moderate,
    Difficult,
}

/// A known mushroom species with its ecological preferences
///
/// Optional fields are genuinely optional in the source data; every scorer
/// has a documented mid-range default for the missing case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MushroomSpecies {
    /// Unique key, e.g. "Boletus edulis"
    pub scientific_name: String,

    /// Common display name, e.g. "Porcini"
    pub display_name: String,

    #[serde(default)]
    pub description: String,

    /// Single or comma-separated compound label, e.g. "Summer, Fall",
    /// or the sentinel "All Year"
    pub season: String,

    /// Optimal air temperature in deg C
    pub optimal_temperature: Option<f64>,

    /// Optimal relative humidity in percent
    pub optimal_humidity: Option<f64>,

    /// Minimum soil temperature in deg C for fruiting
    pub min_soil_temperature: Option<f64>,

    /// Tree genera/names this species associates with (mixed English and
    /// local vernacular in the source data)
    #[serde(default)]
    pub tree_associations: Vec<String>,

    /// Forest types this species prefers, e.g. "Mixed", "Conifer"
    #[serde(default)]
    pub forest_types: Vec<String>,

    /// Elevation range in meters where the species fruits
    pub elevation_min: Option<f64>,
    pub elevation_max: Option<f64>,

    pub edible: bool,

    pub difficulty: Difficulty,

    #[serde(default)]
    pub safety_notes: String,
}

impl MushroomSpecies {
    /// Formatted display label: "Scientific name (Common name)",
    /// or just the scientific name when no common name exists.
    pub fn display_label(&self) -> String {
        let common = self.display_name.trim();
        if common.is_empty() || common.eq_ignore_ascii_case(&self.scientific_name) {
            self.scientific_name.clone()
        } else {
            format!("{} ({})", self.scientific_name, common)
        }
    }
}

/// A foraging spot with whatever habitat attributes are known about it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForagingLocation {
    pub id: String,

    pub name: String,

    pub latitude: f64,
    pub longitude: f64,

    /// Elevation in meters, when surveyed
    pub elevation: Option<f64>,

    /// Informal vocabulary: "Mixed", "Conifer", "Hardwood", local names
    pub forest_type: Option<String>,

    /// Tree species observed at the location, informal vocabulary
    #[serde(default)]
    pub tree_species: Vec<String>,

    pub accessibility: Accessibility,
}

/// Point-in-time weather reading, already resolved by the caller
///
/// A scoring call receives zero or one of these; when absent, every
/// weather-dependent factor degrades to its documented mid-range default.
/// Wind and pressure are carried through for callers but unused by scoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// Air temperature in deg C
    pub temperature: f64,

    /// Relative humidity in percent
    pub humidity: f64,

    /// Soil temperature in deg C
    pub soil_temperature: f64,

    /// Days since the last significant rainfall
    pub days_since_rain: u32,

    pub wind_speed: Option<f64>,

    pub pressure: Option<f64>,
}

/// Validate structural invariants of a freshly loaded catalog
///
/// Only identity and season are required; everything else has scoring
/// defaults.
pub fn validate_catalog(catalog: &[MushroomSpecies]) -> Result<(), CatalogError> {
    for (index, species) in catalog.iter().enumerate() {
        if species.scientific_name.trim().is_empty() {
            return Err(CatalogError::MissingScientificName { index });
        }
        if species.season.trim().is_empty() {
            return Err(CatalogError::MissingSeason {
                scientific_name: species.scientific_name.clone(),
            });
        }
    }
    Ok(())
}

/// Load and validate a species catalog from a JSON array
pub fn load_catalog(path: &Path) -> Result<Vec<MushroomSpecies>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read species catalog: {:?}", path))?;

    let catalog: Vec<MushroomSpecies> = serde_json::from_str(&contents)
        .with_context(|| "Failed to parse species catalog JSON")?;

    validate_catalog(&catalog)
        .with_context(|| format!("Invalid species catalog: {:?}", path))?;

    tracing::debug!(species = catalog.len(), "loaded species catalog");

    Ok(catalog)
}

/// Load a list of foraging locations from a JSON array
pub fn load_locations(path: &Path) -> Result<Vec<ForagingLocation>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read locations file: {:?}", path))?;

    let locations: Vec<ForagingLocation> = serde_json::from_str(&contents)
        .with_context(|| "Failed to parse locations JSON")?;

    tracing::debug!(locations = locations.len(), "loaded foraging locations");

    Ok(locations)
}

/// Load an optional weather snapshot from a JSON object
pub fn load_weather(path: &Path) -> Result<WeatherSnapshot> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read weather file: {:?}", path))?;

    serde_json::from_str(&contents).with_context(|| "Failed to parse weather JSON")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_species(name: &str, season: &str) -> MushroomSpecies {
        MushroomSpecies {
            scientific_name: name.to_string(),
            display_name: String::new(),
            description: String::new(),
            season: season.to_string(),
            optimal_temperature: None,
            optimal_humidity: None,
            min_soil_temperature: None,
            tree_associations: Vec::new(),
            forest_types: Vec::new(),
            elevation_min: None,
            elevation_max: None,
            edible: true,
            difficulty: Difficulty::Beginner,
            safety_notes: String::new(),
        }
    }

    #[test]
    fn test_validate_catalog() {
        let good = vec![minimal_species("Boletus edulis", "Summer, Fall")];
        assert!(validate_catalog(&good).is_ok());

        let no_name = vec![minimal_species("  ", "Fall")];
        assert!(matches!(
            validate_catalog(&no_name),
            Err(CatalogError::MissingScientificName { index: 0 })
        ));

        let no_season = vec![minimal_species("Boletus edulis", "")];
        assert!(matches!(
            validate_catalog(&no_season),
            Err(CatalogError::MissingSeason { .. })
        ));
    }

    #[test]
    fn test_display_label() {
        let mut species = minimal_species("Cantharellus cibarius", "Summer");
        assert_eq!(species.display_label(), "Cantharellus cibarius");

        species.display_name = "Chanterelle".to_string();
        assert_eq!(
            species.display_label(),
            "Cantharellus cibarius (Chanterelle)"
        );
    }

    #[test]
    fn test_species_json_defaults() {
        // Optional lists may be absent entirely in scraped records
        let json = r#"{
            "scientific_name": "Morchella esculenta",
            "display_name": "Morel",
            "season": "Spring",
            "optimal_temperature": 15.0,
            "optimal_humidity": null,
            "min_soil_temperature": 8.0,
            "elevation_min": null,
            "elevation_max": null,
            "edible": true,
            "difficulty": "expert"
        }"#;

        let species: MushroomSpecies = serde_json::from_str(json).unwrap();
        assert_eq!(species.scientific_name, "Morchella esculenta");
        assert!(species.tree_associations.is_empty());
        assert!(species.forest_types.is_empty());
        assert_eq!(species.difficulty, Difficulty::Expert);
    }
}
