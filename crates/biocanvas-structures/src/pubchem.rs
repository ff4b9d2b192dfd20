//! PubChem 3D structure retrieval with a typed outcome per failure class.

use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

use biocanvas_common::config::GatewayConfig;
use biocanvas_common::net::CappedClient;
use biocanvas_common::BiocanvasError;

const PUG_REST: &str = "https://pubchem.ncbi.nlm.nih.gov/rest/pug";

/// Failure classes for ligand structure retrieval. Each maps to a distinct
/// HTTP status at the API surface.
#[derive(Debug, Error)]
pub enum LigandStructureError {
    /// PubChem answered, but the compound has no 3D conformer record.
    #[error("Compound {0} has no 3D structure record")]
    NoModel(i64),

    /// The request exceeded the configured upstream timeout.
    #[error("PubChem timed out for compound {0}")]
    UpstreamTimeout(i64),

    /// Any other network-level failure reaching PubChem.
    #[error("PubChem unavailable: {0}")]
    UpstreamUnavailable(String),
}

/// 3D SDF download URL for a compound id.
pub fn sdf_url(cid: i64) -> String {
    format!("{}/compound/cid/{}/SDF?record_type=3d", PUG_REST, cid)
}

/// Client for the PubChem PUG REST compound endpoint.
pub struct PubChemClient {
    client: CappedClient,
}

impl PubChemClient {
    pub fn new(gateway: &GatewayConfig) -> Result<Self, BiocanvasError> {
        Ok(Self {
            client: CappedClient::new(Duration::from_secs(gateway.pubchem_timeout_secs))?,
        })
    }

    /// Fetch the raw 3D SDF block for a compound.
    pub async fn fetch_sdf(&self, cid: i64) -> Result<String, LigandStructureError> {
        let url = sdf_url(cid);
        let builder = self
            .client
            .get(&url)
            .map_err(|e| LigandStructureError::UpstreamUnavailable(e.to_string()))?;

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                warn!("PubChem timeout for CID {}", cid);
                LigandStructureError::UpstreamTimeout(cid)
            } else {
                warn!("PubChem request failed for CID {}: {}", cid, e);
                LigandStructureError::UpstreamUnavailable(e.to_string())
            }
        })?;

        if !response.status().is_success() {
            debug!("No 3D record for CID {} (status {})", cid, response.status());
            return Err(LigandStructureError::NoModel(cid));
        }

        response.text().await.map_err(|e| {
            if e.is_timeout() {
                LigandStructureError::UpstreamTimeout(cid)
            } else {
                LigandStructureError::UpstreamUnavailable(e.to_string())
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sdf_url_requests_3d_record() {
        assert_eq!(
            sdf_url(2244),
            "https://pubchem.ncbi.nlm.nih.gov/rest/pug/compound/cid/2244/SDF?record_type=3d"
        );
    }

    #[test]
    fn test_error_messages_name_the_compound() {
        let not_found = LigandStructureError::NoModel(444098);
        assert!(not_found.to_string().contains("444098"));

        let timeout = LigandStructureError::UpstreamTimeout(702);
        assert!(timeout.to_string().contains("702"));
    }
}
