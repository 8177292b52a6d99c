//! Soil-temperature factor
//!
//! Fruiting is gated on the soil warming past a species-specific minimum, so
//! tiers key on how far the observed soil temperature exceeds that minimum.
//! Slightly-below-minimum still scores a little; fruiting bodies lag soil
//! warmth.

use crate::data::WeatherSnapshot;

pub const SOIL_MAX: i32 = 15;
pub const SOIL_DEFAULT: i32 = 8;

/// Score the soil-temperature fit for a species
pub fn score_soil_temperature(species_min: Option<f64>, weather: Option<&WeatherSnapshot>) -> i32 {
    let Some(weather) = weather else {
        return SOIL_DEFAULT;
    };
    let observed = weather.soil_temperature;

    match species_min {
        Some(min) => {
            let above = observed - min;
            if above >= 8.0 {
                15
            } else if above >= 5.0 {
                12
            } else if above >= 2.0 {
                9
            } else if above >= 0.0 {
                6
            } else if above >= -3.0 {
                3
            } else {
                0
            }
        }
        None => {
            if (10.0..=18.0).contains(&observed) {
                12
            } else if (6.0..=22.0).contains(&observed) {
                9
            } else if (2.0..=26.0).contains(&observed) {
                6
            } else {
                3
            }
        }
    }
}
