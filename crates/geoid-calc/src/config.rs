//! Client configuration.

use crate::dms::SignRule;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// NGA EGM96 point interpolation form endpoint.
pub const DEFAULT_ENDPOINT: &str = "http://earth-info.nga.mil/nga-bin/gandg-bin/intpt.cgi";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for a [`GeoidClient`](crate::GeoidClient).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoidConfig {
    /// Form endpoint the request is posted to.
    pub endpoint: String,
    /// Overall request timeout (connect, write and read).
    pub timeout: Duration,
    /// Sign convention for the minutes and seconds fields.
    pub sign_rule: SignRule,
}

impl Default for GeoidConfig {
    fn default() -> Self {
        GeoidConfig {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT,
            sign_rule: SignRule::default(),
        }
    }
}

impl GeoidConfig {
    /// Use a different endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Use a different request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Use a different sign rule.
    pub fn with_sign_rule(mut self, sign_rule: SignRule) -> Self {
        self.sign_rule = sign_rule;
        self
    }
}
