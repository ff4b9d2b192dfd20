//! Shared application state for the API server.

use std::sync::Arc;

use biocanvas_common::config::Config;
use biocanvas_common::BiocanvasError;
use biocanvas_data::ReferenceStore;
use biocanvas_structures::{PubChemClient, StructureResolver};

/// State injected into every Axum handler. Reference data is read-only
/// after load; the upstream clients are stateless.
pub struct AppState {
    pub store: ReferenceStore,
    pub resolver: StructureResolver,
    pub pubchem: PubChemClient,
}

impl AppState {
    pub fn from_config(config: &Config) -> Result<Self, BiocanvasError> {
        Ok(Self {
            store: ReferenceStore::new(&config.data.dir),
            resolver: StructureResolver::new(&config.gateway)?,
            pubchem: PubChemClient::new(&config.gateway)?,
        })
    }
}

pub type SharedState = Arc<AppState>;
