//! Seasonal Timing Model
//!
//! Maps a species' season label and the current month to a discrete tier:
//! in-season, adjacent (boundary month), or out-of-season. The current month
//! is always an explicit parameter, never wall-clock time, so the model stays
//! pure and testable.

use smallvec::SmallVec;

use crate::config::SeasonTiers;
use crate::utils::normalize;

/// Sentinel label for species that fruit year-round
const ALL_YEAR: &str = "all year";

/// The four named seasons a label can resolve to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    /// Parse a normalized atomic label. Returns `None` for anything that is
    /// not one of the four known season names (typos, free text).
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "spring" => Some(Season::Spring),
            "summer" => Some(Season::Summer),
            "fall" | "autumn" => Some(Season::Fall),
            "winter" => Some(Season::Winter),
            _ => None,
        }
    }

    /// Core months of the season (three consecutive months; Winter wraps
    /// across the year boundary)
    pub fn core_months(&self) -> [u32; 3] {
        match self {
            Season::Spring => [3, 4, 5],
            Season::Summer => [6, 7, 8],
            Season::Fall => [9, 10, 11],
            Season::Winter => [12, 1, 2],
        }
    }

    /// Boundary months that degrade to the adjacent tier instead of zero
    pub fn adjacent_months(&self) -> [u32; 2] {
        match self {
            Season::Spring => [2, 6],
            Season::Summer => [5, 9],
            Season::Fall => [8, 12],
            Season::Winter => [11, 3],
        }
    }

    /// Classify a month against this season
    fn tier_for_month(&self, month: u32, tiers: &SeasonTiers) -> i32 {
        if self.core_months().contains(&month) {
            tiers.in_season
        } else if self.adjacent_months().contains(&month) {
            tiers.adjacent
        } else {
            tiers.off_season
        }
    }
}

/// Score a season label (possibly compound, comma-separated) against the
/// current month.
///
/// Rules:
/// - "All Year" returns the in-season tier unconditionally.
/// - Compound labels score each atom independently and take the maximum; a
///   species active in two seasons is judged by whichever applies best now.
/// - Unrecognized atoms fall to the off-season tier, never an error.
/// - Out-of-range months are treated as off-season for every atom.
pub fn season_score(label: &str, month: u32, tiers: &SeasonTiers) -> i32 {
    let normalized = normalize(label);

    if normalized == ALL_YEAR {
        return tiers.in_season;
    }

    if !(1..=12).contains(&month) {
        return tiers.off_season;
    }

    // Labels almost always carry one or two atoms
    let atoms: SmallVec<[&str; 4]> = normalized
        .split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();

    atoms
        .iter()
        .map(|atom| match Season::from_label(atom) {
            Some(season) => season.tier_for_month(month, tiers),
            None => tiers.off_season,
        })
        .max()
        .unwrap_or(tiers.off_season)
}
