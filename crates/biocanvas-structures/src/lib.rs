//! biocanvas-structures — Gateway to the two upstream structure databases:
//! AlphaFold for predicted protein models, PubChem for small-molecule 3D
//! coordinates. Requests are read-only and bounded-timeout; protein
//! resolution never fails (fallback URL), ligand retrieval reports a typed
//! outcome the API maps to distinct status codes.

pub mod alphafold;
pub mod pubchem;

pub use alphafold::{ResolvedStructure, StructureResolver};
pub use pubchem::{LigandStructureError, PubChemClient};
