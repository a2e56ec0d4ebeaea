use std::{env, fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Tuning for duplicate and match detection
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DetectorConfig {
    /// Minimum description word overlap (intersection over union)
    pub overlap_threshold: f64,
    /// Normalized edit distance below which two locations count as the same place
    pub location_distance_threshold: f64,
    /// Maximum number of candidates returned
    pub max_candidates: usize,
    /// Only lost reports this recent are duplicate candidates; 0 disables the window
    pub duplicate_window_days: u32,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            overlap_threshold: 0.3,
            location_distance_threshold: 0.25,
            max_candidates: 5,
            duplicate_window_days: 7,
        }
    }
}

impl DetectorConfig {
    /// Defaults, overridden by any `FINDIT_*` variables that are set
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            overlap_threshold: try_load("FINDIT_OVERLAP_THRESHOLD", defaults.overlap_threshold),
            location_distance_threshold: try_load(
                "FINDIT_LOCATION_DISTANCE",
                defaults.location_distance_threshold,
            ),
            max_candidates: try_load("FINDIT_MAX_CANDIDATES", defaults.max_candidates),
            duplicate_window_days: try_load(
                "FINDIT_DUPLICATE_WINDOW_DAYS",
                defaults.duplicate_window_days,
            ),
        }
    }
}

fn try_load<T>(key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|e| {
            warn!("Invalid {key} value {raw:?}: {e}, using default: {default}");
            default
        }),
        Err(_) => {
            info!("{key} not set, using default: {default}");
            default
        }
    }
}
