//! Pure domain types with minimal dependencies
//!
//! This module contains the persisted drawing model used throughout the
//! application. Types here should have no framework dependencies (egui,
//! reqwest, etc.) so the wire contract stays independent of the UI.

pub mod drawing;

pub use drawing::*;
