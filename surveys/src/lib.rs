//! Survey backend client shared by the browser app and the host server.
//!
//! SYSTEM CONTEXT
//! ==============
//! `service` wraps the three backend calls (fetch survey, fetch results,
//! submit answers), `types` owns the typed wire schema, `config` builds the
//! injected base URL, and `error` defines the failure taxonomy.
//!
//! The crate compiles for both native targets and `wasm32`; `reqwest` picks
//! the browser `fetch` transport on the latter.

pub mod config;
pub mod error;
pub mod service;
pub mod types;

pub use config::{SurveyConfig, SurveyTimeouts};
pub use error::{ConfigError, SurveyError};
pub use service::SurveyService;
pub use types::{
    Answers, DEFAULT_LIKERT_SCALE, Question, QuestionResult, SubmitAnswersRequest, SubmitReceipt, Survey, SurveyId,
    SurveyResults, SurveySummary,
};
