//! # geoid-cli
//!
//! Command-line front end for [`geoid_calc`].
//!
//! ```text
//! geoid <LATITUDE> <LONGITUDE> [--altitude METERS] [--json]
//! geoid --check-reference
//! ```
//!
//! Only the result is written to stdout; logs go to stderr. Exit codes are
//! `0` when a height was printed, `1` when the sentinel was printed or a
//! reference check failed, and `2` for usage errors.

pub mod args;
pub mod error;
pub mod logging;
pub mod run;

pub use args::Cli;
pub use error::{CliError, CliResult};
pub use run::{run, HeightReport, Outcome};
