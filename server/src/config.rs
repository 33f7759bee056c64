//! Host server configuration parsed from environment variables.

use surveys::{ConfigError, SurveyConfig};

pub const PORT_VAR: &str = "PORT";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Where `/api/surveys/*` is proxied to.
    pub survey: SurveyConfig,
}

impl ServerConfig {
    /// Build config from environment variables.
    ///
    /// - `PORT`: default 3000
    /// - `SURVEY_BACKEND_URL` and timeouts: see [`SurveyConfig::from_env`]
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for an unparseable port or a missing/invalid
    /// backend URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// # Errors
    ///
    /// See [`Self::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup(PORT_VAR) {
            None => DEFAULT_PORT,
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid { var: PORT_VAR.into(), value: raw.clone() })?,
        };
        let survey = SurveyConfig::from_lookup(&lookup)?;
        Ok(Self { port, survey })
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
