//! Route table for the survey app.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` declares these routes to `leptos_router`. [`AppRoute::resolve`]
//! applies the same matching outside the reactive tree so the server can
//! tag not-found renders with a 404; [`survey_path`] builds links.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Static segment preceding the survey id.
pub const SURVEYS_SEGMENT: &str = "surveys";
/// Route parameter bound to the survey id.
pub const SURVEY_ID_PARAM: &str = "id";

/// A resolved navigation target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppRoute {
    /// `/surveys/:id`
    SurveyView { id: String },
    /// Anything else.
    NotFound,
}

impl AppRoute {
    /// Resolve a URL path (query and fragment are ignored). One trailing
    /// slash is tolerated; empty segments elsewhere do not match.
    #[must_use]
    pub fn resolve(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = path.strip_suffix('/').unwrap_or(path);
        let mut segments = path.strip_prefix('/').unwrap_or(path).split('/');

        match (segments.next(), segments.next(), segments.next()) {
            (Some(SURVEYS_SEGMENT), Some(id), None) if !id.is_empty() => Self::SurveyView { id: id.to_owned() },
            _ => Self::NotFound,
        }
    }
}

/// Path of the survey view for `id`.
#[must_use]
pub fn survey_path(id: &str) -> String {
    format!("/{SURVEYS_SEGMENT}/{id}")
}
