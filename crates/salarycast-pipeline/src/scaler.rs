//! Fitted standard scaler: `(x - mean) / scale` per column

use salarycast_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Per-column affine transform frozen at training time
///
/// Artifact format:
///
/// ```json
/// {
///   "feature_names": ["CreditScore", "Age", "..."],
///   "mean": [650.5, 38.9, ...],
///   "scale": [96.6, 10.4, ...]
/// }
/// ```
///
/// `feature_names` is optional. When present the assembly step checks it
/// against its own column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    feature_names: Option<Vec<String>>,
    mean: Vec<f64>,
    scale: Vec<f64>,
}

impl StandardScaler {
    /// Create a scaler from fitted parameters
    pub fn new(mean: Vec<f64>, scale: Vec<f64>) -> Result<Self> {
        let mut scaler = Self {
            feature_names: None,
            mean,
            scale,
        };
        scaler.validate()?;
        Ok(scaler)
    }

    /// Attach the column names the scaler was fitted on
    pub fn with_feature_names(mut self, names: Vec<String>) -> Result<Self> {
        self.feature_names = Some(names);
        self.validate()?;
        Ok(self)
    }

    /// Load a fitted scaler from a JSON artifact
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            Error::artifact(format!("failed to read scaler {}: {}", path.display(), e))
        })?;
        let mut scaler: Self = serde_json::from_str(&contents).map_err(|e| {
            Error::artifact(format!("failed to parse scaler {}: {}", path.display(), e))
        })?;
        scaler
            .validate()
            .map_err(|e| Error::artifact(format!("invalid scaler {}: {}", path.display(), e)))?;
        Ok(scaler)
    }

    /// Check shapes and replace zero scales with 1 (constant training columns)
    fn validate(&mut self) -> Result<()> {
        if self.mean.is_empty() {
            return Err(Error::artifact("scaler has no columns"));
        }
        if self.mean.len() != self.scale.len() {
            return Err(Error::artifact(format!(
                "scaler mean has {} columns but scale has {}",
                self.mean.len(),
                self.scale.len()
            )));
        }
        if let Some(names) = &self.feature_names {
            if names.len() != self.mean.len() {
                return Err(Error::artifact(format!(
                    "scaler lists {} feature names for {} columns",
                    names.len(),
                    self.mean.len()
                )));
            }
        }
        if self
            .mean
            .iter()
            .chain(&self.scale)
            .any(|v| !v.is_finite())
        {
            return Err(Error::artifact("scaler parameters must be finite"));
        }

        for s in &mut self.scale {
            if *s == 0.0 {
                *s = 1.0;
            }
        }
        Ok(())
    }

    /// Number of columns the scaler was fitted on
    pub fn width(&self) -> usize {
        self.mean.len()
    }

    /// Fitted column names, if the artifact recorded them
    pub fn feature_names(&self) -> Option<&[String]> {
        self.feature_names.as_deref()
    }

    /// Standardise one row
    pub fn transform(&self, row: &[f64]) -> Result<Vec<f64>> {
        self.check_width(row)?;
        Ok(row
            .iter()
            .zip(self.mean.iter().zip(&self.scale))
            .map(|(x, (m, s))| (x - m) / s)
            .collect())
    }

    /// Undo [`transform`](Self::transform)
    pub fn inverse_transform(&self, row: &[f64]) -> Result<Vec<f64>> {
        self.check_width(row)?;
        Ok(row
            .iter()
            .zip(self.mean.iter().zip(&self.scale))
            .map(|(z, (m, s))| z * s + m)
            .collect())
    }

    fn check_width(&self, row: &[f64]) -> Result<()> {
        if row.len() != self.width() {
            return Err(Error::schema(format!(
                "scaler expects {} columns, got {}",
                self.width(),
                row.len()
            )));
        }
        Ok(())
    }
}
