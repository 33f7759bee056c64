//! Survey backend configuration.
//!
//! The base URL is resolved once at startup and injected into
//! [`crate::SurveyService`]; nothing downstream reads process state.

use crate::error::ConfigError;

/// Path under the backend root where the survey API is mounted.
pub const SURVEYS_API_PATH: &str = "/api/surveys";
pub const BACKEND_URL_VAR: &str = "SURVEY_BACKEND_URL";
pub const REQUEST_TIMEOUT_VAR: &str = "SURVEY_REQUEST_TIMEOUT_SECS";
pub const CONNECT_TIMEOUT_VAR: &str = "SURVEY_CONNECT_TIMEOUT_SECS";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Native transport timeouts. Ignored on `wasm32`, where the browser owns them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurveyTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl Default for SurveyTimeouts {
    fn default() -> Self {
        Self { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurveyConfig {
    /// Fully qualified API base, e.g. `http://localhost:8080/api/surveys`.
    pub api_base: String,
    pub timeouts: SurveyTimeouts,
}

impl SurveyConfig {
    /// Use `api_base` as-is (minus trailing slashes) as the survey API root.
    #[must_use]
    pub fn new(api_base: impl Into<String>) -> Self {
        let api_base = api_base.into().trim_end_matches('/').to_owned();
        Self { api_base, timeouts: SurveyTimeouts::default() }
    }

    /// Derive the API base from a backend root URL by appending [`SURVEYS_API_PATH`].
    #[must_use]
    pub fn from_backend_url(backend_url: &str) -> Self {
        Self::new(format!("{}{SURVEYS_API_PATH}", backend_url.trim_end_matches('/')))
    }

    #[must_use]
    pub fn with_timeouts(mut self, timeouts: SurveyTimeouts) -> Self {
        self.timeouts = timeouts;
        self
    }

    /// Build config from environment variables.
    ///
    /// Required:
    /// - `SURVEY_BACKEND_URL`: backend root, `http://` or `https://`
    ///
    /// Optional:
    /// - `SURVEY_REQUEST_TIMEOUT_SECS`: default 30
    /// - `SURVEY_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] when the backend URL is unset or blank,
    /// and [`ConfigError::Invalid`] when it is not an HTTP(S) URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env_var)
    }

    /// Same as [`Self::from_env`] with a caller-supplied variable source.
    ///
    /// # Errors
    ///
    /// See [`Self::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let backend_url = lookup(BACKEND_URL_VAR)
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| ConfigError::Missing { var: BACKEND_URL_VAR.into() })?;
        if !(backend_url.starts_with("http://") || backend_url.starts_with("https://")) {
            return Err(ConfigError::Invalid { var: BACKEND_URL_VAR.into(), value: backend_url });
        }

        let timeouts = SurveyTimeouts {
            request_secs: parse_u64_or(lookup(REQUEST_TIMEOUT_VAR), DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_secs: parse_u64_or(lookup(CONNECT_TIMEOUT_VAR), DEFAULT_CONNECT_TIMEOUT_SECS),
        };

        Ok(Self::from_backend_url(&backend_url).with_timeouts(timeouts))
    }
}

fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn parse_u64_or(raw: Option<String>, default: u64) -> u64 {
    match raw.map(|v| v.trim().parse::<u64>()) {
        Some(Ok(value)) if value > 0 => value,
        Some(_) => {
            tracing::warn!(default, "invalid timeout value, using default");
            default
        }
        None => default,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
