//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render one survey question or one results table. They take
//! plain props and callbacks; the survey page owns all state.

pub mod question_card;
pub mod results_panel;
