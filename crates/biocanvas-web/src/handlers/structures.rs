//! Structure gateway endpoints.
//!
//! Protein resolution is best-effort and never 5xx; ligand retrieval maps
//! each upstream failure class to its own status code so the presentation
//! layer can distinguish "no 3D model" from a degraded upstream.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use biocanvas_structures::{LigandStructureError, ResolvedStructure};

use crate::state::SharedState;

/// GET /structure/{uniprot_id} - AlphaFold model URL with version fallback.
pub async fn protein_structure(
    State(state): State<SharedState>,
    Path(uniprot_id): Path<String>,
) -> Json<ResolvedStructure> {
    Json(state.resolver.resolve(&uniprot_id).await)
}

/// GET /ligand-structure/{cid} - raw 3D SDF data from PubChem.
pub async fn ligand_structure(
    State(state): State<SharedState>,
    Path(cid): Path<i64>,
) -> impl IntoResponse {
    match state.pubchem.fetch_sdf(cid).await {
        Ok(sdf_data) => (
            StatusCode::OK,
            Json(serde_json::json!({ "cid": cid, "sdf_data": sdf_data })),
        ),
        Err(e) => (
            ligand_failure_status(&e),
            Json(serde_json::json!({ "cid": cid, "error": e.to_string() })),
        ),
    }
}

/// Each upstream failure class gets its own status: a compound without a 3D
/// record is the caller's problem (404), a degraded upstream is ours
/// (504 timeout, 503 otherwise).
fn ligand_failure_status(error: &LigandStructureError) -> StatusCode {
    match error {
        LigandStructureError::NoModel(_) => StatusCode::NOT_FOUND,
        LigandStructureError::UpstreamTimeout(_) => StatusCode::GATEWAY_TIMEOUT,
        LigandStructureError::UpstreamUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}
