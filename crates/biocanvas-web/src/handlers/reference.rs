//! Reference collection endpoints, served from the read-through cache.

use axum::{extract::State, Json};

use biocanvas_data::{LigandRecord, ProteinRecord};

use crate::state::SharedState;

/// GET /proteins - the curated protein list.
pub async fn proteins(State(state): State<SharedState>) -> Json<Vec<ProteinRecord>> {
    Json(state.store.proteins().as_ref().clone())
}

/// GET /ligands - the small-molecule library.
pub async fn ligands(State(state): State<SharedState>) -> Json<Vec<LigandRecord>> {
    Json(state.store.ligands().as_ref().clone())
}
