//! Elevation factor
//!
//! Full marks inside the species' known elevation range, decreasing tiers by
//! distance to the nearer bound outside it. Without a species range, broad
//! Swiss-altitude bands apply (most productive foraging terrain sits between
//! 400 and 1200 m).

pub const ELEVATION_MAX: i32 = 10;
pub const ELEVATION_DEFAULT: i32 = 6;

/// Score the elevation fit for a species
pub fn score_elevation(
    location_elevation: Option<f64>,
    species_min: Option<f64>,
    species_max: Option<f64>,
) -> i32 {
    let Some(elevation) = location_elevation else {
        return ELEVATION_DEFAULT;
    };

    match (species_min, species_max) {
        (Some(min), Some(max)) => {
            if elevation >= min && elevation <= max {
                return ELEVATION_MAX;
            }
            let distance = if elevation < min {
                min - elevation
            } else {
                elevation - max
            };
            if distance <= 50.0 {
                8
            } else if distance <= 100.0 {
                6
            } else if distance <= 200.0 {
                4
            } else if distance <= 400.0 {
                2
            } else if distance <= 600.0 {
                1
            } else {
                0
            }
        }
        _ => {
            if (400.0..=1200.0).contains(&elevation) {
                8
            } else if (200.0..=1600.0).contains(&elevation) {
                6
            } else {
                4
            }
        }
    }
}
