//! Air-temperature factor
//!
//! Two-path scorer: when the species has a known optimum, tiers widen with
//! the absolute deviation from it; without an optimum, flat bands over an
//! absolute comfort range apply. No weather at all yields the mid-range
//! default.

use crate::data::WeatherSnapshot;

pub const TEMPERATURE_MAX: i32 = 25;
pub const TEMPERATURE_DEFAULT: i32 = 15;

/// Score the air-temperature fit for a species
pub fn score_temperature(optimal: Option<f64>, weather: Option<&WeatherSnapshot>) -> i32 {
    let Some(weather) = weather else {
        return TEMPERATURE_DEFAULT;
    };
    let observed = weather.temperature;

    match optimal {
        Some(optimal) => {
            let diff = (observed - optimal).abs();
            if diff <= 2.0 {
                25
            } else if diff <= 5.0 {
                20
            } else if diff <= 8.0 {
                15
            } else if diff <= 12.0 {
                10
            } else {
                5
            }
        }
        None => {
            // Absolute comfort bands for fungi in general
            if (15.0..=22.0).contains(&observed) {
                20
            } else if (10.0..=25.0).contains(&observed) {
                15
            } else if (5.0..=30.0).contains(&observed) {
                10
            } else {
                5
            }
        }
    }
}
