//! biocanvas-supervisor — Owns the lifecycle of the BioCanvas API child
//! process: launch, health polling with bounded retries, and graceful
//! (then forced) teardown.

pub mod supervisor;

pub use supervisor::{ApiCommand, StartupError, Supervisor, SupervisorState};
