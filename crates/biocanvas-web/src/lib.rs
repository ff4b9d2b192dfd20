//! biocanvas-web — HTTP API surface for the BioCanvas demo.
//! Serves the reference collections, the structure gateway, and the
//! scripted docking endpoint to the presentation layer.

pub mod handlers;
pub mod router;
pub mod state;
