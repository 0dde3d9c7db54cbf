//! # geoid-calc
//!
//! EGM96 geoid height lookup for WGS84 coordinates.
//!
//! GPS receivers report altitude above the WGS84 ellipsoid. Altitude above
//! mean sea level is measured from the EGM96 geoid instead, and the offset
//! between the two surfaces (the geoid undulation `N`) varies by more than
//! 100 meters across the globe. This crate asks the NGA point interpolation
//! form service for `N` at a coordinate:
//!
//! 1. the latitude and longitude are split into degree, minute and second
//!    form fields ([`Dms`], [`FormParams`]),
//! 2. the fields are POSTed to the form endpoint ([`GeoidClient`]),
//! 3. the height is scraped from the returned HTML ([`extract_height`]).
//!
//! The model itself is not evaluated locally; every lookup is one HTTP round
//! trip. Lookups that fail can be reported either as a typed [`GeoidError`] or
//! as the [`SENTINEL_HEIGHT`] value.
//!
//! ## Example
//!
//! ```no_run
//! use geoid_calc::{Coordinate, GeoidClient};
//!
//! let client = GeoidClient::with_defaults()?;
//! let coord = Coordinate::new(38.625473, 359.9995);
//!
//! let undulation = client.geoid_height(&coord)?;
//! println!("N = {} meters", undulation);
//!
//! // GPS altitude to altitude above the geoid
//! let msl = client.orthometric_height(&coord, 120.0)?;
//! println!("MSL altitude: {} meters", msl);
//! # Ok::<(), geoid_calc::GeoidError>(())
//! ```

mod client;
mod config;
mod coord;
mod dms;
mod error;
mod extract;
mod params;
mod reference;

pub use client::GeoidClient;
pub use config::{GeoidConfig, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT};
pub use coord::Coordinate;
pub use dms::{Dms, SignRule, SECONDS_MAX_CHARS};
pub use error::GeoidError;
pub use extract::{extract_height, extract_height_or_sentinel, HEIGHT_PATTERN, SENTINEL_HEIGHT};
pub use params::{FormParams, UNITS};
pub use reference::{check_reference_points, ReferenceCheck, ReferencePoint, DEFAULT_TOLERANCE, REFERENCE_POINTS};

/// Result type for geoid operations.
pub type Result<T> = std::result::Result<T, GeoidError>;
