//! Errors produced by survey configuration and backend calls.

/// Failure of a survey backend operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SurveyError {
    /// The request never reached the backend or no response came back.
    #[error("network error: {0}")]
    Network(String),

    /// The backend answered with a status the operation does not accept.
    #[error("failed to fetch survey data: status {status}")]
    Fetch { status: u16, body: String },

    /// The response body did not match the expected schema.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// The survey id is empty or is not a single URL path segment.
    #[error("invalid survey id: {0:?}")]
    InvalidSurveyId(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

impl SurveyError {
    /// HTTP status carried by the error, if the backend answered at all.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Fetch { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// `true` when the backend reported that the survey does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

/// Failure to assemble a [`crate::SurveyConfig`] from the environment.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("missing config: env var {var} not set")]
    Missing { var: String },

    #[error("invalid config: {var}={value:?}")]
    Invalid { var: String, value: String },
}
