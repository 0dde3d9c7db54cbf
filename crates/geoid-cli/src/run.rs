//! Command execution and output formatting.

use crate::args::Cli;
use crate::error::{CliError, CliResult};
use geoid_calc::{
    check_reference_points, GeoidClient, GeoidError, ReferenceCheck, DEFAULT_TOLERANCE,
    SENTINEL_HEIGHT,
};
use serde::Serialize;
use std::io::Write;
use tracing::info;

/// How a completed command ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A height was printed.
    Height,
    /// The sentinel was printed.
    Sentinel,
    /// Every reference point matched.
    ReferencePassed,
    /// At least one reference point failed or deviated.
    ReferenceFailed,
}

impl Outcome {
    /// Process exit code.
    pub fn code(self) -> u8 {
        match self {
            Outcome::Height | Outcome::ReferencePassed => 0,
            Outcome::Sentinel | Outcome::ReferenceFailed => 1,
        }
    }
}

/// JSON report for a single lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeightReport {
    /// Requested latitude.
    pub latitude: f64,
    /// Requested longitude.
    pub longitude: f64,
    /// Ellipsoidal altitude, when converting an altitude.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ellipsoidal_height: Option<f64>,
    /// Printed value: undulation or orthometric altitude, or the sentinel.
    pub height: f64,
    /// `ok`, `no_data`, `malformed`, `transport_error` or `http_error`.
    pub status: &'static str,
    /// Error message when the lookup failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Short status label for a lookup result.
pub fn status_label(result: &Result<f64, GeoidError>) -> &'static str {
    match result {
        Ok(_) => "ok",
        Err(GeoidError::NoData) => "no_data",
        Err(GeoidError::MalformedHeight { .. }) => "malformed",
        Err(GeoidError::HttpStatus { .. }) => "http_error",
        Err(GeoidError::Transport(_)) => "transport_error",
        Err(GeoidError::InvalidEndpoint(_)) => "invalid_endpoint",
    }
}

/// Run the command, writing the result to `out`.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> CliResult<Outcome> {
    let client = GeoidClient::new(cli.config())?;
    info!(?client, "geoid client ready");

    if cli.check_reference {
        return run_reference_check(&client, cli.json, out);
    }

    let coord = cli.coordinate().ok_or(CliError::MissingCoordinate)?;
    let result = match cli.altitude {
        Some(altitude) => client.orthometric_height(&coord, altitude),
        None => client.geoid_height(&coord),
    };
    let height = result.as_ref().copied().unwrap_or(SENTINEL_HEIGHT);

    if cli.json {
        let report = HeightReport {
            latitude: coord.latitude,
            longitude: coord.longitude,
            ellipsoidal_height: cli.altitude,
            height,
            status: status_label(&result),
            error: result.as_ref().err().map(|e| e.to_string()),
        };
        writeln!(out, "{}", serde_json::to_string(&report)?)?;
    } else {
        writeln!(out, "{}", height)?;
    }

    Ok(if result.is_ok() {
        Outcome::Height
    } else {
        Outcome::Sentinel
    })
}

fn run_reference_check<W: Write>(client: &GeoidClient, json: bool, out: &mut W) -> CliResult<Outcome> {
    let checks = check_reference_points(client, DEFAULT_TOLERANCE);

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&checks)?)?;
    } else {
        for check in &checks {
            writeln!(out, "{}", format_check(check))?;
        }
    }

    let passed = checks.iter().filter(|c| c.passed).count();
    info!(passed, total = checks.len(), "reference check complete");

    Ok(if passed == checks.len() {
        Outcome::ReferencePassed
    } else {
        Outcome::ReferenceFailed
    })
}

/// One line of the reference check table.
fn format_check(check: &ReferenceCheck) -> String {
    let verdict = if check.passed { "PASS" } else { "FAIL" };
    let observed = match (check.observed, &check.error) {
        (Some(h), _) => format!("{:>9.3}", h),
        (None, Some(e)) => format!("{:>9} ({})", "-", e),
        (None, None) => format!("{:>9}", "-"),
    };
    format!(
        "{} {:>11.6} {:>11.6} expected {:>9.3} observed {}",
        verdict, check.point.latitude, check.point.longitude, check.point.undulation, observed
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use geoid_calc::REFERENCE_POINTS;

    #[test]
    fn test_outcome_codes() {
        assert_eq!(Outcome::Height.code(), 0);
        assert_eq!(Outcome::ReferencePassed.code(), 0);
        assert_eq!(Outcome::Sentinel.code(), 1);
        assert_eq!(Outcome::ReferenceFailed.code(), 1);
    }

    #[test]
    fn test_status_label() {
        assert_eq!(status_label(&Ok(1.0)), "ok");
        assert_eq!(status_label(&Err(GeoidError::NoData)), "no_data");
        assert_eq!(status_label(&Err(GeoidError::HttpStatus { status: 502 })), "http_error");
        assert_eq!(
            status_label(&Err(GeoidError::MalformedHeight { text: "?".into() })),
            "malformed"
        );
    }

    #[test]
    fn test_format_check() {
        let check = ReferenceCheck {
            point: REFERENCE_POINTS[4],
            observed: Some(50.066),
            error: None,
            passed: true,
        };
        assert_eq!(
            format_check(&check),
            "PASS   38.625473  359.999500 expected    50.066 observed    50.066"
        );

        let failed = ReferenceCheck {
            point: REFERENCE_POINTS[0],
            observed: None,
            error: Some("No geoid height found in service response".into()),
            passed: false,
        };
        assert_eq!(
            format_check(&failed),
            "FAIL   38.628155  269.779155 expected   -31.628 observed         - (No geoid height found in service response)"
        );
    }

    #[test]
    fn test_report_skips_empty_fields() {
        let report = HeightReport {
            latitude: 1.0,
            longitude: 2.0,
            ellipsoidal_height: None,
            height: 3.5,
            status: "ok",
            error: None,
        };
        assert_eq!(
            serde_json::to_string(&report).unwrap(),
            r#"{"latitude":1.0,"longitude":2.0,"height":3.5,"status":"ok"}"#
        );
    }
}
