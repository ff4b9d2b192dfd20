//! Educational docking endpoint. Never fails: unknown pairs resolve to a
//! weak-binding default instead of an error.

use axum::{extract::State, Json};
use serde::Deserialize;

use biocanvas_docking::DockingResult;

use crate::state::SharedState;

#[derive(Debug, Deserialize)]
pub struct DockingRequest {
    pub protein_id: i64,
    pub ligand_id: i64,
    /// Optional seed for a reproducible fallback draw (testing aid).
    #[serde(default)]
    pub seed: Option<u64>,
}

/// POST /dock - scripted docking simulation.
pub async fn dock(
    State(_state): State<SharedState>,
    Json(request): Json<DockingRequest>,
) -> Json<DockingResult> {
    Json(biocanvas_docking::dock(
        request.protein_id,
        request.ligand_id,
        request.seed,
    ))
}
