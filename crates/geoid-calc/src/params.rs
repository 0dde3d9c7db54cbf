//! Form parameters for the geoid height request.

use crate::dms::{Dms, SignRule};
use crate::Coordinate;

/// Units field appended to every request.
pub const UNITS: &str = "Units=meters";

/// Form-encoded request body for one coordinate.
///
/// Fields are emitted in the order the form declares them:
/// `LatitudeDeg`, `LatitudeMin`, `LatitudeSec`, `LongitudeDeg`, `LongitudeMin`,
/// `LongitudeSec`, then [`UNITS`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormParams {
    /// Encoded latitude.
    pub latitude: Dms,
    /// Encoded longitude.
    pub longitude: Dms,
}

impl FormParams {
    /// Encode a coordinate with the given sign rule.
    pub fn new(coord: &Coordinate, rule: SignRule) -> Self {
        Self {
            latitude: Dms::encode(coord.latitude, rule),
            longitude: Dms::encode(coord.longitude, rule),
        }
    }

    /// Name/value pairs in request order, excluding the units field.
    pub fn pairs(&self) -> [(&'static str, String); 6] {
        [
            ("LatitudeDeg", self.latitude.degrees.to_string()),
            ("LatitudeMin", self.latitude.minutes.to_string()),
            ("LatitudeSec", self.latitude.seconds.clone()),
            ("LongitudeDeg", self.longitude.degrees.to_string()),
            ("LongitudeMin", self.longitude.minutes.to_string()),
            ("LongitudeSec", self.longitude.seconds.clone()),
        ]
    }

    /// Render the `application/x-www-form-urlencoded` body.
    ///
    /// Values only contain digits, `-` and `.`, so no escaping is applied.
    pub fn encode(&self) -> String {
        let mut body = String::new();
        for (name, value) in self.pairs() {
            body.push_str(name);
            body.push('=');
            body.push_str(&value);
            body.push('&');
        }
        body.push_str(UNITS);
        body
    }
}
