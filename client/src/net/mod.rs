//! Networking for the browser app.
//!
//! SYSTEM CONTEXT
//! ==============
//! HTTP calls live in the `surveys` crate; `api` only decides which backend
//! the browser talks to and builds the shared `SurveyService` from it.

pub mod api;
