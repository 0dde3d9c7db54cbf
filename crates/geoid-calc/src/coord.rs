//! Geographic coordinate input.

use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in signed decimal degrees.
///
/// Values are not validated. The form service accepts longitudes in either
/// the -180..180 or the 0..360 convention, so both are passed through as-is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees, positive north.
    pub latitude: f64,
    /// Longitude in degrees, positive east.
    pub longitude: f64,
}

impl Coordinate {
    /// Create a new coordinate.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Whether the coordinate lies in the usual ranges
    /// (latitude -90..=90, longitude -180..360).
    pub fn is_in_range(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..360.0).contains(&self.longitude)
    }
}
