//! biocanvas-docking — Educational docking "engine".
//!
//! Scores come from a fixed table of biologically sensible protein-ligand
//! pairs; any other combination gets a randomized weak-binding result. There
//! is no physical computation here, by intent.

pub mod engine;

pub use engine::{dock, BindingStrength, DockingResult};
