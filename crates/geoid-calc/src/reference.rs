//! NGA check points for verifying the service end to end.
//!
//! The values come from the `outintpt.dat` check data published with the
//! EGM96 interpolation program.

use crate::{Coordinate, GeoidClient};
use serde::Serialize;

/// Default tolerance in meters when comparing against the check data.
pub const DEFAULT_TOLERANCE: f64 = 0.01;

/// A coordinate with its published geoid undulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReferencePoint {
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees (0..360).
    pub longitude: f64,
    /// Published undulation in meters.
    pub undulation: f64,
}

impl ReferencePoint {
    /// The point as a [`Coordinate`].
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

/// Published check points.
pub const REFERENCE_POINTS: [ReferencePoint; 6] = [
    ReferencePoint { latitude: 38.628155, longitude: 269.779155, undulation: -31.628 },
    ReferencePoint { latitude: -14.621217, longitude: 305.021114, undulation: -2.969 },
    ReferencePoint { latitude: 46.874319, longitude: 102.448729, undulation: -43.575 },
    ReferencePoint { latitude: -23.617446, longitude: 133.874712, undulation: 15.871 },
    ReferencePoint { latitude: 38.625473, longitude: 359.999500, undulation: 50.066 },
    ReferencePoint { latitude: -0.466744, longitude: 0.002300, undulation: 17.329 },
];

/// Outcome of checking one reference point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReferenceCheck {
    /// The point that was queried.
    pub point: ReferencePoint,
    /// Height returned by the service, if any.
    pub observed: Option<f64>,
    /// Error message if the lookup failed.
    pub error: Option<String>,
    /// Whether the observed height is within tolerance.
    pub passed: bool,
}

impl ReferenceCheck {
    /// Difference between observed and published undulation.
    pub fn deviation(&self) -> Option<f64> {
        self.observed.map(|h| h - self.point.undulation)
    }
}

/// Query every reference point in turn and compare against the published value.
pub fn check_reference_points(client: &GeoidClient, tolerance: f64) -> Vec<ReferenceCheck> {
    REFERENCE_POINTS
        .iter()
        .map(|point| match client.geoid_height(&point.coordinate()) {
            Ok(observed) => ReferenceCheck {
                point: *point,
                observed: Some(observed),
                error: None,
                passed: (observed - point.undulation).abs() <= tolerance,
            },
            Err(e) => ReferenceCheck {
                point: *point,
                observed: None,
                error: Some(e.to_string()),
                passed: false,
            },
        })
        .collect()
}
