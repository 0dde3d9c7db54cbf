//! Blocking HTTP client for the geoid form service.
//!
//! One lookup is one POST of the form-encoded coordinate followed by a scrape
//! of the returned HTML. There is no retry and no caching; every call opens a
//! request, writes the body, reads the full response and releases it.

use crate::extract::{extract_height, SENTINEL_HEIGHT};
use crate::params::FormParams;
use crate::{Coordinate, GeoidConfig, GeoidError, Result};
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, warn};

/// Content type of the request body.
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Geoid height client for one form endpoint.
pub struct GeoidClient {
    /// Endpoint, timeout and encoding settings.
    config: GeoidConfig,
    /// HTTP client for the form requests.
    client: reqwest::blocking::Client,
}

impl std::fmt::Debug for GeoidClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeoidClient")
            .field("endpoint", &self.config.endpoint)
            .field("timeout", &self.config.timeout)
            .field("sign_rule", &self.config.sign_rule)
            .finish()
    }
}

impl GeoidClient {
    /// Create a client for the default NGA endpoint.
    pub fn with_defaults() -> Result<Self> {
        Self::new(GeoidConfig::default())
    }

    /// Create a client from a configuration.
    pub fn new(config: GeoidConfig) -> Result<Self> {
        reqwest::Url::parse(&config.endpoint)
            .map_err(|e| GeoidError::InvalidEndpoint(format!("{}: {}", config.endpoint, e)))?;

        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self { config, client })
    }

    /// Get the configuration.
    pub fn config(&self) -> &GeoidConfig {
        &self.config
    }

    /// Post the coordinate to the form and return the response body.
    ///
    /// Line terminators are removed, so the body is the concatenation of its
    /// lines.
    pub fn fetch_page(&self, coord: &Coordinate) -> Result<String> {
        if !coord.is_in_range() {
            warn!(
                latitude = coord.latitude,
                longitude = coord.longitude,
                "coordinate outside the usual range, sending anyway"
            );
        }

        let body = FormParams::new(coord, self.config.sign_rule).encode();
        debug!(endpoint = %self.config.endpoint, %body, "posting geoid request");

        let response = self
            .client
            .post(&self.config.endpoint)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(body)
            .send()
            .map_err(|e| {
                warn!(endpoint = %self.config.endpoint, error = %e, "geoid request failed");
                GeoidError::Transport(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(endpoint = %self.config.endpoint, %status, "geoid service returned an error status");
            return Err(GeoidError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let text = response.text().map_err(|e| {
            warn!(endpoint = %self.config.endpoint, error = %e, "failed to read geoid response");
            GeoidError::Transport(e)
        })?;
        debug!(bytes = text.len(), "received geoid response");

        Ok(join_lines(&text))
    }

    /// Look up the geoid undulation (EGM96 height above the WGS84 ellipsoid) in meters.
    pub fn geoid_height(&self, coord: &Coordinate) -> Result<f64> {
        let html = self.fetch_page(coord)?;
        match extract_height(&html) {
            Ok(height) => {
                debug!(latitude = coord.latitude, longitude = coord.longitude, height, "geoid height");
                Ok(height)
            }
            Err(e) => {
                warn!(latitude = coord.latitude, longitude = coord.longitude, error = %e, "no usable geoid height");
                Err(e)
            }
        }
    }

    /// Look up the geoid undulation, returning [`SENTINEL_HEIGHT`] on any failure.
    ///
    /// Failures are logged by [`geoid_height`](Self::geoid_height).
    pub fn geoid_height_or_sentinel(&self, coord: &Coordinate) -> f64 {
        self.geoid_height(coord).unwrap_or(SENTINEL_HEIGHT)
    }

    /// Convert a WGS84 ellipsoidal altitude to an EGM96 orthometric altitude.
    ///
    /// Returns `ellipsoidal_height - N` where `N` is the geoid undulation.
    pub fn orthometric_height(&self, coord: &Coordinate, ellipsoidal_height: f64) -> Result<f64> {
        let undulation = self.geoid_height(coord)?;
        Ok(ellipsoidal_height - undulation)
    }
}

/// Concatenate the lines of `text`, dropping `\r` and `\n`.
fn join_lines(text: &str) -> String {
    text.chars().filter(|c| *c != '\r' && *c != '\n').collect()
}
