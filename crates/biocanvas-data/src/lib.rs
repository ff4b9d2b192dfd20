//! biocanvas-data — Static reference collections for the BioCanvas demo:
//! curated proteins and small-molecule ligands, loaded from disk once and
//! served from an in-process cache.

pub mod records;
pub mod store;

pub use records::{LigandRecord, ProteinRecord};
pub use store::ReferenceStore;
