//! SalaryCast Core
//!
//! Core types shared across SalaryCast components.
//!
//! This crate provides:
//! - The customer feature record and its bounded field types
//! - The form snapshot consumed by the prediction pipeline
//! - The ordered feature schema that ties encoders, scaler, and model together
//! - Error types and result handling

pub mod error;
pub mod schema;
pub mod types;

pub use error::{Error, Result};
pub use schema::{FeatureSchema, NUMERIC_FEATURES, NUMERIC_FIELD_COUNT};
pub use types::{Age, CustomerRecord, Flag, FormSnapshot, Prediction, ProductCount, Tenure};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::schema::FeatureSchema;
    pub use crate::types::{Age, CustomerRecord, Flag, FormSnapshot, Prediction, ProductCount, Tenure};
}
