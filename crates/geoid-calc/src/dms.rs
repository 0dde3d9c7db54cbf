//! Degrees-minutes-seconds encoding of decimal degrees.
//!
//! The form service takes each angle as three separate fields. The encoding
//! here produces exactly the strings sent in those fields:
//!
//! - degrees = floor(|v|), re-signed with `signum(v)`
//! - minutes = floor(60 × (|v| − degrees)), re-signed with the [`SignRule`]
//! - seconds = 3600 × (|v| − degrees − minutes / 60), re-signed with the
//!   [`SignRule`] and rendered with at most [`SECONDS_MAX_CHARS`] characters
//!
//! Under [`SignRule::Legacy`] the degrees and the minutes/seconds use two
//! different sign conventions: only values strictly between -1 and 0 give
//! negative minutes and seconds. `-14.5` therefore encodes as `-14, 30, 0`
//! while `-0.5` encodes as `0, -30, -0`.

use serde::{Deserialize, Serialize};

/// Maximum number of characters in the seconds field (sign and decimal point included).
pub const SECONDS_MAX_CHARS: usize = 11;

/// Sign convention applied to the minutes and seconds fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum SignRule {
    /// Negative only for values strictly between -1 and 0.
    ///
    /// This is the convention the service client has always sent. It is
    /// inconsistent with the degrees field for values at or below -1 and is
    /// pending review.
    #[default]
    Legacy,
    /// Same sign as the degrees field (`signum(v)`).
    Signum,
}

impl SignRule {
    /// Sign multiplier for the minutes and seconds of `value`.
    fn multiplier(self, value: f64) -> i32 {
        let negative = match self {
            SignRule::Legacy => value > -1.0 && value < 0.0,
            SignRule::Signum => value < 0.0,
        };
        if negative {
            -1
        } else {
            1
        }
    }
}

/// An angle split into the three form fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dms {
    /// Whole degrees, signed.
    pub degrees: i32,
    /// Whole minutes, signed per the [`SignRule`].
    pub minutes: i32,
    /// Seconds as sent to the service, truncated to [`SECONDS_MAX_CHARS`].
    pub seconds: String,
}

impl Dms {
    /// Encode a decimal-degree value.
    pub fn encode(value: f64, rule: SignRule) -> Self {
        let abs = value.abs();
        let whole = abs.floor();
        let minutes = (60.0 * (abs - whole)).floor();
        let seconds = 3600.0 * (abs - whole - minutes / 60.0);

        let sign = rule.multiplier(value);

        Self {
            // f64::signum(0.0) is 1.0 but the product is still zero.
            degrees: (value.signum() * whole) as i32,
            minutes: sign * minutes as i32,
            seconds: truncate_chars(&(f64::from(sign) * seconds).to_string(), SECONDS_MAX_CHARS),
        }
    }

    /// Parsed value of the (truncated) seconds field.
    pub fn seconds_value(&self) -> Option<f64> {
        self.seconds.parse().ok()
    }

    /// Unsigned decimal degrees represented by the three fields.
    ///
    /// Returns `None` if the seconds field does not parse.
    pub fn magnitude(&self) -> Option<f64> {
        let seconds = self.seconds_value()?;
        Some(
            f64::from(self.degrees.unsigned_abs())
                + f64::from(self.minutes.unsigned_abs()) / 60.0
                + seconds.abs() / 3600.0,
        )
    }
}

/// Keep at most `max` characters of `s`.
fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
