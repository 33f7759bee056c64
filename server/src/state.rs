//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds one pooled HTTP client for the backend proxy and the resolved
//! survey API base. Nothing in it changes after startup.

use std::sync::Arc;
use std::time::Duration;

use surveys::SurveyConfig;

#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    /// e.g. `http://localhost:8080/api/surveys`, no trailing slash.
    pub api_base: Arc<str>,
}

impl AppState {
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(config: &SurveyConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            // Redirects are relayed to the browser, not followed.
            .redirect(reqwest::redirect::Policy::none())
            .build()?;
        Ok(Self { http, api_base: Arc::from(config.api_base.as_str()) })
    }
}
