//! End-to-end prediction: snapshot in, salary out

use crate::artifacts::Artifacts;
use crate::assembly::{AssembledFeatures, FeatureAssembler};
use crate::regressor::Regressor;
use salarycast_core::{FeatureSchema, FormSnapshot, Prediction, Result};
use std::sync::Arc;
use std::time::Instant;

/// Feature assembly plus one forward pass, with every dependency injected
pub struct SalaryPredictor {
    assembler: FeatureAssembler,
    model: Arc<dyn Regressor>,
}

impl SalaryPredictor {
    /// Create a predictor, checking the model width against the feature schema
    pub fn new(assembler: FeatureAssembler, model: Arc<dyn Regressor>) -> Result<Self> {
        assembler
            .schema()
            .ensure_width(model.input_width(), &format!("model '{}'", model.name()))?;

        Ok(Self { assembler, model })
    }

    /// Wire up the loaded artifacts
    pub fn from_artifacts(artifacts: Artifacts) -> Result<Self> {
        let assembler = FeatureAssembler::new(
            artifacts.gender,
            artifacts.geography,
            artifacts.scaler,
        )?;
        Self::new(assembler, artifacts.model)
    }

    /// Assemble the scaled row for `snapshot` and run the model on it
    pub fn assemble_and_predict(&self, snapshot: &FormSnapshot) -> Result<Prediction> {
        let start = Instant::now();

        let features = self.assembler.assemble(snapshot)?;
        let value = self.model.predict(&features.scaled)?;

        let prediction = Prediction::new(value, start.elapsed().as_micros() as u64);
        tracing::debug!(
            geography = %snapshot.geography,
            gender = %snapshot.gender,
            value = prediction.value,
            latency_us = prediction.latency_us,
            "Prediction computed"
        );
        Ok(prediction)
    }

    /// Assembled features without running the model
    pub fn assemble(&self, snapshot: &FormSnapshot) -> Result<AssembledFeatures> {
        self.assembler.assemble(snapshot)
    }

    /// Geography choices offered by the form
    pub fn geography_categories(&self) -> &[String] {
        self.assembler.geography().categories()
    }

    /// Gender choices offered by the form
    pub fn gender_categories(&self) -> &[String] {
        self.assembler.gender().categories()
    }

    /// Column order of the assembled row
    pub fn schema(&self) -> &FeatureSchema {
        self.assembler.schema()
    }

    /// Feature assembler
    pub fn assembler(&self) -> &FeatureAssembler {
        &self.assembler
    }

    /// Name of the loaded model
    pub fn model_name(&self) -> &str {
        self.model.name()
    }
}
