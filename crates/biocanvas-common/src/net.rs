use reqwest::{Client, ClientBuilder};
use std::collections::HashSet;
use std::time::Duration;
use url::Url;

use crate::error::BiocanvasError;

/// An allowlist-capped HTTP client. Outbound requests are restricted to the
/// two upstream structure databases plus loopback (health probes).
#[derive(Debug, Clone)]
pub struct CappedClient {
    client: Client,
    allowlist: HashSet<String>,
}

impl CappedClient {
    /// Creates a client with the default BioCanvas allowlist and a bounded
    /// request timeout.
    pub fn new(timeout: Duration) -> Result<Self, BiocanvasError> {
        let mut allowlist = HashSet::new();
        let domains = vec![
            "alphafold.ebi.ac.uk",      // AlphaFold prediction API + model files
            "pubchem.ncbi.nlm.nih.gov", // PubChem PUG REST
            "localhost",                // supervised API health probes
            "127.0.0.1",                // loopback alt
        ];
        for d in domains {
            allowlist.insert(d.to_string());
        }

        let client = ClientBuilder::new()
            .timeout(timeout)
            .build()
            .map_err(|e| BiocanvasError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, allowlist })
    }

    /// Appends an exact hostname to the allowlist.
    pub fn allow_domain(&mut self, domain: &str) {
        self.allowlist.insert(domain.to_string());
    }

    /// Validates a URL against the allowlist (exact host or subdomain).
    pub fn is_allowed(&self, url: &str) -> bool {
        if let Ok(parsed) = Url::parse(url) {
            if let Some(host) = parsed.host_str() {
                for allowed in &self.allowlist {
                    if host == allowed || host.ends_with(&format!(".{}", allowed)) {
                        return true;
                    }
                }
            }
        }
        false
    }

    pub fn get(&self, url: &str) -> Result<reqwest::RequestBuilder, BiocanvasError> {
        self.check(url)?;
        Ok(self.client.get(url))
    }

    pub fn head(&self, url: &str) -> Result<reqwest::RequestBuilder, BiocanvasError> {
        self.check(url)?;
        Ok(self.client.head(url))
    }

    fn check(&self, url: &str) -> Result<(), BiocanvasError> {
        if !self.is_allowed(url) {
            return Err(BiocanvasError::Security(format!(
                "domain not in allowlist for URL {}",
                url
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> CappedClient {
        CappedClient::new(Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_upstream_hosts_allowed() {
        let c = client();
        assert!(c.is_allowed("https://alphafold.ebi.ac.uk/api/prediction/P69905"));
        assert!(c.is_allowed(
            "https://pubchem.ncbi.nlm.nih.gov/rest/pug/compound/cid/2244/SDF?record_type=3d"
        ));
        assert!(c.is_allowed("http://127.0.0.1:8000/health"));
    }

    #[test]
    fn test_unknown_host_rejected() {
        let c = client();
        assert!(!c.is_allowed("https://example.com/payload"));
        assert!(c.get("https://example.com/payload").is_err());
    }

    #[test]
    fn test_allow_domain_extends_list() {
        let mut c = client();
        assert!(!c.is_allowed("https://files.rcsb.org/download/1crn.pdb"));
        c.allow_domain("files.rcsb.org");
        assert!(c.is_allowed("https://files.rcsb.org/download/1crn.pdb"));
    }
}
