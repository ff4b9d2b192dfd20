//! HTTP handlers for the API surface.

pub mod dock;
pub mod health;
pub mod reference;
pub mod structures;
