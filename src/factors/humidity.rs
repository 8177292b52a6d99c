//! Relative-humidity factor
//!
//! Same two-path pattern as temperature: deviation tiers against a known
//! species optimum, absolute bands otherwise. Mushrooms generally want it
//! damp, so the absolute bands favor high humidity.

use crate::data::WeatherSnapshot;

pub const HUMIDITY_MAX: i32 = 20;
pub const HUMIDITY_DEFAULT: i32 = 12;

/// Score the humidity fit for a species
pub fn score_humidity(optimal: Option<f64>, weather: Option<&WeatherSnapshot>) -> i32 {
    let Some(weather) = weather else {
        return HUMIDITY_DEFAULT;
    };
    let observed = weather.humidity;

    match optimal {
        Some(optimal) => {
            let diff = (observed - optimal).abs();
            if diff <= 5.0 {
                20
            } else if diff <= 10.0 {
                16
            } else if diff <= 15.0 {
                12
            } else if diff <= 20.0 {
                8
            } else {
                4
            }
        }
        None => {
            if observed >= 80.0 {
                18
            } else if observed >= 65.0 {
                14
            } else if observed >= 50.0 {
                10
            } else {
                5
            }
        }
    }
}
