//! Great-circle distance between foraging locations
//!
//! The only spatial operation the system needs: a haversine distance check
//! for "which stored location is nearest to the user". No spatial indexing.

use crate::data::ForagingLocation;

const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance in kilometers between two WGS84 coordinates
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let d_phi = (lat2 - lat1).to_radians();
    let d_lambda = (lon2 - lon1).to_radians();

    let a = libm::sin(d_phi / 2.0) * libm::sin(d_phi / 2.0)
        + libm::cos(phi1) * libm::cos(phi2) * libm::sin(d_lambda / 2.0) * libm::sin(d_lambda / 2.0);
    let c = 2.0 * libm::atan2(libm::sqrt(a), libm::sqrt(1.0 - a));

    EARTH_RADIUS_KM * c
}

/// Pick the stored location nearest to the given coordinate
///
/// Returns `None` for an empty list. Ties keep the earlier entry.
pub fn nearest_location<'a>(
    locations: &'a [ForagingLocation],
    lat: f64,
    lon: f64,
) -> Option<&'a ForagingLocation> {
    let mut best: Option<(&ForagingLocation, f64)> = None;

    for location in locations {
        let distance = haversine_km(lat, lon, location.latitude, location.longitude);
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((location, distance)),
        }
    }

    best.map(|(location, _)| location)
}
