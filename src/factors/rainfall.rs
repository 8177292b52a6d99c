//! Recent-rainfall factor
//!
//! Fruiting follows rain. The score is strictly decreasing across the
//! days-since-rain tiers; fewer days is always at least as good.

use crate::data::WeatherSnapshot;

pub const RAINFALL_MAX: i32 = 15;
pub const RAINFALL_DEFAULT: i32 = 8;

/// Score recent rainfall by days since the last significant rain
pub fn score_rainfall(weather: Option<&WeatherSnapshot>) -> i32 {
    let Some(weather) = weather else {
        return RAINFALL_DEFAULT;
    };

    match weather.days_since_rain {
        0..=2 => 15,
        3..=4 => 12,
        5..=7 => 9,
        8..=14 => 6,
        15..=21 => 3,
        _ => 1,
    }
}
