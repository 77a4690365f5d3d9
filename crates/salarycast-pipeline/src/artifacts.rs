//! Startup loading of the four serialized artifacts

use crate::encoder::OneHotEncoder;
use crate::model_loader::DenseRegressor;
use crate::regressor::Regressor;
use crate::scaler::StandardScaler;
use salarycast_core::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

/// Default directory holding the artifacts, relative to the working directory
pub const DEFAULT_ARTIFACTS_DIR: &str = "artifacts";

/// Locations of the model, both encoders, and the scaler
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactPaths {
    /// Directory with `config.json` and `model.safetensors`
    pub model: PathBuf,

    /// Geography one-hot encoder
    pub geography_encoder: PathBuf,

    /// Gender one-hot encoder
    pub gender_encoder: PathBuf,

    /// Standard scaler
    pub scaler: PathBuf,
}

impl ArtifactPaths {
    /// Standard file names under `dir`
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            model: dir.join("model_salary"),
            geography_encoder: dir.join("onehot_encoder_geo.json"),
            gender_encoder: dir.join("onehot_encoder_gender.json"),
            scaler: dir.join("scaler_salary.json"),
        }
    }
}

impl Default for ArtifactPaths {
    fn default() -> Self {
        Self::in_dir(DEFAULT_ARTIFACTS_DIR)
    }
}

/// Loaded, immutable artifacts shared for the lifetime of the process
#[derive(Clone)]
pub struct Artifacts {
    pub model: Arc<dyn Regressor>,
    pub geography: Arc<OneHotEncoder>,
    pub gender: Arc<OneHotEncoder>,
    pub scaler: Arc<StandardScaler>,
}

impl Artifacts {
    /// Load every artifact; any failure is fatal to startup
    pub fn load(paths: &ArtifactPaths) -> Result<Self> {
        info!("Loading model from {}", paths.model.display());
        let model = DenseRegressor::load(&paths.model)?;
        info!(
            model = model.name(),
            input_width = model.input_width(),
            "Model loaded"
        );

        let geography = OneHotEncoder::from_file(&paths.geography_encoder)?;
        info!(
            feature = geography.feature(),
            categories = ?geography.categories(),
            "Geography encoder loaded"
        );

        let gender = OneHotEncoder::from_file(&paths.gender_encoder)?;
        info!(
            feature = gender.feature(),
            categories = ?gender.categories(),
            "Gender encoder loaded"
        );

        let scaler = StandardScaler::from_file(&paths.scaler)?;
        info!(columns = scaler.width(), "Scaler loaded");

        Ok(Self {
            model: Arc::new(model),
            geography: Arc::new(geography),
            gender: Arc::new(gender),
            scaler: Arc::new(scaler),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let paths = ArtifactPaths::default();
        assert_eq!(paths.model, PathBuf::from("artifacts/model_salary"));
        assert_eq!(paths.geography_encoder, PathBuf::from("artifacts/onehot_encoder_geo.json"));
        assert_eq!(paths.gender_encoder, PathBuf::from("artifacts/onehot_encoder_gender.json"));
        assert_eq!(paths.scaler, PathBuf::from("artifacts/scaler_salary.json"));
    }

    #[test]
    fn test_load_fails_on_empty_dir() {
        let dir = tempfile::tempdir().unwrap();
        let result = Artifacts::load(&ArtifactPaths::in_dir(dir.path()));
        assert!(matches!(result, Err(salarycast_core::Error::Artifact(_))));
    }
}
