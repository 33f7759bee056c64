//! Page-local reactive state.
//!
//! ARCHITECTURE
//! ============
//! State structs are plain data with pure transition methods; pages wrap
//! them in `RwSignal`s. Keeping transitions out of components keeps them
//! testable without a DOM.

pub mod survey;
