//! SalaryCast Pipeline
//!
//! Inference-time feature assembly and prediction.
//!
//! A request flows through a fixed sequence of stages:
//! - the numeric record is laid out in model column order
//! - gender and geography are one-hot encoded with the training-time vocabularies
//! - the row is standardised with the training-time scaler
//! - a feed-forward regression model produces a single scalar
//!
//! All artifacts are loaded once at startup and shared read-only.

pub mod artifacts;
pub mod assembly;
pub mod encoder;
pub mod model_config;
pub mod model_loader;
pub mod predictor;
pub mod regressor;
pub mod scaler;

pub use artifacts::{ArtifactPaths, Artifacts};
pub use assembly::{AssembledFeatures, FeatureAssembler};
pub use encoder::OneHotEncoder;
pub use model_config::{Activation, LayerConfig, ModelConfig};
pub use model_loader::DenseRegressor;
pub use predictor::SalaryPredictor;
pub use regressor::Regressor;
pub use scaler::StandardScaler;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::artifacts::{ArtifactPaths, Artifacts};
    pub use crate::encoder::OneHotEncoder;
    pub use crate::predictor::SalaryPredictor;
    pub use crate::regressor::Regressor;
    pub use crate::scaler::StandardScaler;
}
