//! Backend selection for the survey service.
//!
//! Client-side (hydrate): the backend root comes from `SURVEY_BACKEND_URL`
//! at compile time, falling back to the page origin, where the host server
//! proxies `/api/surveys`.
//! Server-side (SSR): pages never call the backend while rendering, so the
//! config only needs to be well-formed.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use surveys::{SurveyConfig, SurveyError, SurveyService};

/// Backend root baked in at build time, if any.
const BUILD_BACKEND_URL: Option<&str> = option_env!("SURVEY_BACKEND_URL");

/// Origin used when no browser window is available.
const FALLBACK_ORIGIN: &str = "http://localhost:3000";

/// Pick the backend root: an explicit non-blank URL wins, else `origin`.
fn backend_root<'a>(configured: Option<&'a str>, origin: &'a str) -> &'a str {
    configured
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .unwrap_or(origin)
}

fn config_for(configured: Option<&str>, origin: &str) -> SurveyConfig {
    SurveyConfig::from_backend_url(backend_root(configured, origin))
}

fn page_origin() -> String {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .filter(|origin| origin != "null")
            .unwrap_or_else(|| FALLBACK_ORIGIN.to_owned())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        FALLBACK_ORIGIN.to_owned()
    }
}

/// Config for the running page.
#[must_use]
pub fn client_config() -> SurveyConfig {
    config_for(BUILD_BACKEND_URL, &page_origin())
}

/// Build the service shared through Leptos context.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be constructed.
pub fn survey_service() -> Result<SurveyService, SurveyError> {
    SurveyService::new(client_config())
}
