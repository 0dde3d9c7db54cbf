//! Command-line arguments.

use clap::{ArgAction, Parser};
use geoid_calc::{Coordinate, GeoidConfig, SignRule, DEFAULT_ENDPOINT};
use std::time::Duration;

/// Look up the EGM96 geoid height for a WGS84 coordinate.
///
/// Prints the geoid undulation N in meters, or the orthometric (mean sea
/// level) altitude when `--altitude` is given. Prints -9999.99 when the
/// service returns no height.
#[derive(Debug, Clone, Parser)]
#[command(name = "geoid", version)]
pub struct Cli {
    /// Latitude in decimal degrees (positive north)
    #[arg(
        allow_negative_numbers = true,
        required_unless_present = "check_reference",
        value_name = "LATITUDE"
    )]
    pub latitude: Option<f64>,

    /// Longitude in decimal degrees (positive east, 0..360 or -180..180)
    #[arg(
        allow_negative_numbers = true,
        required_unless_present = "check_reference",
        value_name = "LONGITUDE"
    )]
    pub longitude: Option<f64>,

    /// WGS84 ellipsoidal altitude in meters; prints the EGM96 altitude instead of N
    #[arg(long, allow_negative_numbers = true, value_name = "METERS")]
    pub altitude: Option<f64>,

    /// Form endpoint to query
    #[arg(long, value_name = "URL", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS", default_value_t = 30)]
    pub timeout: u64,

    /// Sign convention for the minutes and seconds form fields
    #[arg(long, value_enum, default_value_t = SignRule::Legacy)]
    pub sign_rule: SignRule,

    /// Print a JSON report instead of the bare number
    #[arg(long)]
    pub json: bool,

    /// Query the NGA check points and report deviations
    #[arg(long, conflicts_with_all = ["latitude", "longitude", "altitude"])]
    pub check_reference: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Client configuration from the flags.
    pub fn config(&self) -> GeoidConfig {
        GeoidConfig::default()
            .with_endpoint(self.endpoint.clone())
            .with_timeout(Duration::from_secs(self.timeout))
            .with_sign_rule(self.sign_rule)
    }

    /// The requested coordinate, if both positionals were given.
    pub fn coordinate(&self) -> Option<Coordinate> {
        Some(Coordinate::new(self.latitude?, self.longitude?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use clap::CommandFactory;

    #[test]
    fn test_command_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["geoid", "38.625473", "359.9995"]).unwrap();
        assert_eq!(cli.coordinate(), Some(Coordinate::new(38.625473, 359.9995)));
        assert_eq!(cli.altitude, None);
        assert!(!cli.json);
        assert_eq!(cli.config(), GeoidConfig::default());
    }

    #[test]
    fn test_missing_positionals() {
        let err = Cli::try_parse_from(["geoid"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert_eq!(err.exit_code(), 2);

        let err = Cli::try_parse_from(["geoid", "38.6"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_too_many_positionals() {
        let err = Cli::try_parse_from(["geoid", "1", "2", "3"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_negative_positionals_and_flags() {
        let cli = Cli::try_parse_from(["geoid", "-v", "-14.621217", "-54.978886", "--altitude", "-3.5"]).unwrap();
        assert_eq!(cli.latitude, Some(-14.621217));
        assert_eq!(cli.longitude, Some(-54.978886));
        assert_eq!(cli.altitude, Some(-3.5));
        assert_eq!(cli.verbose, 1);
    }

    #[test]
    fn test_options() {
        let cli = Cli::try_parse_from([
            "geoid",
            "--endpoint",
            "http://localhost:8080/intpt.cgi",
            "--timeout",
            "5",
            "--sign-rule",
            "signum",
            "--json",
            "-vv",
            "0",
            "0",
        ])
        .unwrap();
        let config = cli.config();
        assert_eq!(config.endpoint, "http://localhost:8080/intpt.cgi");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.sign_rule, SignRule::Signum);
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_check_reference() {
        let cli = Cli::try_parse_from(["geoid", "--check-reference"]).unwrap();
        assert!(cli.check_reference);
        assert_eq!(cli.coordinate(), None);

        let err = Cli::try_parse_from(["geoid", "--check-reference", "1", "2"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }
}
