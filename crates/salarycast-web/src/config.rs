//! Server configuration

use crate::cli::ServeArgs;
use salarycast_pipeline::artifacts::{ArtifactPaths, DEFAULT_ARTIFACTS_DIR};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Settings for `salarycast serve`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_address")]
    pub address: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory holding the model, encoders and scaler
    #[serde(default = "default_artifacts_dir")]
    pub artifacts_dir: PathBuf,

    /// Permit cross-origin calls from any origin
    #[serde(default)]
    pub allow_any_origin: bool,

    /// Install the Prometheus recorder and expose `/metrics`
    #[serde(default = "default_metrics_enabled")]
    pub metrics_enabled: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
            port: default_port(),
            artifacts_dir: default_artifacts_dir(),
            allow_any_origin: false,
            metrics_enabled: default_metrics_enabled(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from file with CLI overrides
    pub fn load(config_path: &str, cli: &ServeArgs) -> anyhow::Result<Self> {
        let mut config = if Path::new(config_path).exists() {
            let content = std::fs::read_to_string(config_path)?;
            serde_yaml::from_str(&content)?
        } else {
            Self::default()
        };

        if let Some(address) = &cli.address {
            config.address = address.clone();
        }
        if let Some(port) = cli.port {
            config.port = port;
        }
        if let Some(artifacts) = &cli.artifacts {
            config.artifacts_dir = artifacts.clone();
        }

        Ok(config)
    }

    /// Artifact file locations under the configured directory
    pub fn artifact_paths(&self) -> ArtifactPaths {
        ArtifactPaths::in_dir(&self.artifacts_dir)
    }
}

fn default_address() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8501
}

fn default_artifacts_dir() -> PathBuf {
    PathBuf::from(DEFAULT_ARTIFACTS_DIR)
}

fn default_metrics_enabled() -> bool {
    true
}
