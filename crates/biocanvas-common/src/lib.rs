//! biocanvas-common — Shared errors, configuration, and the capped HTTP
//! client used across all BioCanvas crates.

pub mod config;
pub mod error;
pub mod net;

pub use config::Config;
pub use error::{BiocanvasError, Result};
