//! Axum router — maps all URL paths to handlers.

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers::{
    dock::dock,
    health::health,
    reference::{ligands, proteins},
    structures::{ligand_structure, protein_structure},
};
use crate::state::{AppState, SharedState};

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let shared: SharedState = Arc::new(state);

    Router::new()
        .route("/health", get(health))
        .route("/proteins", get(proteins))
        .route("/ligands", get(ligands))
        .route("/structure/{uniprot_id}", get(protein_structure))
        .route("/ligand-structure/{cid}", get(ligand_structure))
        .route("/dock", post(dock))
        // The presentation layer runs on a different origin.
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}
