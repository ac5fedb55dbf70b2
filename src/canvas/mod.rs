//! The interactive editing surface and its geometry mapping
//!
//! This module provides:
//! - `Surface`: the retained object graph of primitives being edited
//! - `adapter`: load/extract translation between `Surface` and the
//!   persisted geometry model
//! - `widget`: egui rendering and pointer handling for the surface

pub mod adapter;
pub mod surface;
pub mod widget;

pub use surface::{Brush, Primitive, Surface};
