//! AlphaFold structure URL resolution with version fallback.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, warn};

use biocanvas_common::config::GatewayConfig;
use biocanvas_common::net::CappedClient;
use biocanvas_common::BiocanvasError;

const PREDICTION_API: &str = "https://alphafold.ebi.ac.uk/api/prediction";
const FILES_BASE: &str = "https://alphafold.ebi.ac.uk/files";

/// Best-effort resolution of a protein accession to a downloadable model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedStructure {
    pub uniprot_id: String,
    pub pdb_url: String,
    pub model_version: u32,
    /// True when a HEAD request confirmed the URL is reachable. Verification
    /// is best-effort; a false value does not invalidate the URL.
    pub verified: bool,
}

#[derive(Debug, Deserialize)]
struct Prediction {
    #[serde(rename = "latestVersion")]
    latest_version: u32,
}

/// Resolves UniProt accessions to AlphaFold model download URLs.
pub struct StructureResolver {
    client: CappedClient,
    verify: bool,
    fallback_version: u32,
}

/// Versioned AlphaFold model file URL for an accession.
pub fn model_url(uniprot_id: &str, version: u32) -> String {
    format!("{}/AF-{}-F1-model_v{}.pdb", FILES_BASE, uniprot_id, version)
}

impl StructureResolver {
    pub fn new(gateway: &GatewayConfig) -> Result<Self, BiocanvasError> {
        Ok(Self {
            client: CappedClient::new(Duration::from_secs(gateway.alphafold_timeout_secs))?,
            verify: gateway.verify_structure_urls,
            fallback_version: gateway.fallback_model_version,
        })
    }

    /// Resolve the latest model URL for an accession. Any upstream failure
    /// (network error, missing version field, unreachable URL) degrades to
    /// the fallback model version; this never returns an error.
    pub async fn resolve(&self, uniprot_id: &str) -> ResolvedStructure {
        match self.latest_version(uniprot_id).await {
            Ok(version) => {
                let url = model_url(uniprot_id, version);
                if !self.verify {
                    return ResolvedStructure {
                        uniprot_id: uniprot_id.to_string(),
                        pdb_url: url,
                        model_version: version,
                        verified: false,
                    };
                }
                if self.head_ok(&url).await {
                    debug!("Resolved {} to model v{} (verified)", uniprot_id, version);
                    return ResolvedStructure {
                        uniprot_id: uniprot_id.to_string(),
                        pdb_url: url,
                        model_version: version,
                        verified: true,
                    };
                }
                warn!(
                    "Model v{} for {} not reachable, falling back to v{}",
                    version, uniprot_id, self.fallback_version
                );
            }
            Err(e) => {
                info!(
                    "AlphaFold prediction lookup failed for {} ({}), using fallback v{}",
                    uniprot_id, e, self.fallback_version
                );
            }
        }

        let url = model_url(uniprot_id, self.fallback_version);
        let verified = self.verify && self.head_ok(&url).await;
        ResolvedStructure {
            uniprot_id: uniprot_id.to_string(),
            pdb_url: url,
            model_version: self.fallback_version,
            verified,
        }
    }

    async fn latest_version(&self, uniprot_id: &str) -> Result<u32> {
        let url = format!("{}/{}", PREDICTION_API, uniprot_id);
        let response = self.client.get(&url)?.send().await?.error_for_status()?;
        let predictions: Vec<Prediction> = response.json().await?;
        predictions
            .first()
            .map(|p| p.latest_version)
            .ok_or_else(|| anyhow::anyhow!("empty prediction list for {}", uniprot_id))
    }

    async fn head_ok(&self, url: &str) -> bool {
        let builder = match self.client.head(url) {
            Ok(builder) => builder,
            Err(_) => return false,
        };
        match builder.send().await {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }
}
