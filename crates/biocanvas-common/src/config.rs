//! Configuration loading for BioCanvas.
//! Reads biocanvas.toml from the current directory or the path in the
//! BIOCANVAS_CONFIG env var; every field has a serde default so a missing
//! file yields a fully usable configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::error::{BiocanvasError, Result};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub gateway: GatewayConfig,
    #[serde(default)]
    pub supervisor: SupervisorConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 8000 }

impl Default for ApiConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_data_dir")]
    pub dir: String,
}

fn default_data_dir() -> String { "data".to_string() }

impl Default for DataConfig {
    fn default() -> Self {
        Self { dir: default_data_dir() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    #[serde(default = "default_alphafold_timeout")]
    pub alphafold_timeout_secs: u64,
    #[serde(default = "default_pubchem_timeout")]
    pub pubchem_timeout_secs: u64,
    #[serde(default = "default_verify_urls")]
    pub verify_structure_urls: bool,
    #[serde(default = "default_model_version")]
    pub fallback_model_version: u32,
}

fn default_alphafold_timeout() -> u64 { 10 }
fn default_pubchem_timeout()   -> u64 { 30 }
fn default_verify_urls()       -> bool { true }
fn default_model_version()     -> u32 { 4 }

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            alphafold_timeout_secs: default_alphafold_timeout(),
            pubchem_timeout_secs: default_pubchem_timeout(),
            verify_structure_urls: default_verify_urls(),
            fallback_model_version: default_model_version(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupervisorConfig {
    #[serde(default = "default_poll_interval")]
    pub health_poll_interval_ms: u64,
    #[serde(default = "default_max_attempts")]
    pub max_health_attempts: u32,
    #[serde(default = "default_grace_period")]
    pub stop_grace_period_ms: u64,
}

fn default_poll_interval() -> u64 { 500 }
fn default_max_attempts() -> u32 { 15 }
fn default_grace_period() -> u64 { 1000 }

impl Default for SupervisorConfig {
    fn default() -> Self {
        Self {
            health_poll_interval_ms: default_poll_interval(),
            max_health_attempts: default_max_attempts(),
            stop_grace_period_ms: default_grace_period(),
        }
    }
}

impl Config {
    /// Load configuration from BIOCANVAS_CONFIG or ./biocanvas.toml.
    /// A missing file is not an error; defaults apply.
    pub fn load() -> Result<Self> {
        let path = std::env::var("BIOCANVAS_CONFIG")
            .unwrap_or_else(|_| "biocanvas.toml".to_string());
        debug!("Loading configuration from {}", path);
        Self::load_from(Path::new(&path))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("{} not found, using defaults", path.display());
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        toml::from_str(&raw)
            .map_err(|e| BiocanvasError::Config(format!("{}: {}", path.display(), e)))
    }
}
