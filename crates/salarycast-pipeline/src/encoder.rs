//! Fitted one-hot encoder for a single categorical field

use salarycast_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One-hot encoder with a closed vocabulary fixed at training time
///
/// The artifact is a JSON object:
///
/// ```json
/// { "feature": "Geography", "categories": ["France", "Germany", "Spain"] }
/// ```
///
/// Category order is the column order of the indicator block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OneHotEncoder {
    feature: String,
    categories: Vec<String>,
}

impl OneHotEncoder {
    /// Create an encoder, validating the vocabulary
    pub fn new(feature: impl Into<String>, categories: Vec<String>) -> Result<Self> {
        let encoder = Self {
            feature: feature.into(),
            categories,
        };
        encoder.validate()?;
        Ok(encoder)
    }

    /// Load a fitted encoder from a JSON artifact
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            Error::artifact(format!("failed to read encoder {}: {}", path.display(), e))
        })?;
        let encoder: Self = serde_json::from_str(&contents).map_err(|e| {
            Error::artifact(format!("failed to parse encoder {}: {}", path.display(), e))
        })?;
        encoder
            .validate()
            .map_err(|e| Error::artifact(format!("invalid encoder {}: {}", path.display(), e)))?;
        Ok(encoder)
    }

    fn validate(&self) -> Result<()> {
        if self.feature.is_empty() {
            return Err(Error::artifact("encoder feature name is empty"));
        }
        if self.categories.is_empty() {
            return Err(Error::artifact(format!(
                "encoder for '{}' has no categories",
                self.feature
            )));
        }
        for (i, category) in self.categories.iter().enumerate() {
            if self.categories[..i].contains(category) {
                return Err(Error::artifact(format!(
                    "encoder for '{}' lists '{}' twice",
                    self.feature, category
                )));
            }
        }
        Ok(())
    }

    /// Name of the encoded input field
    pub fn feature(&self) -> &str {
        &self.feature
    }

    /// Known categories in column order
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Width of the indicator block
    pub fn width(&self) -> usize {
        self.categories.len()
    }

    /// Output column names, `<feature>_<category>`
    pub fn feature_names(&self) -> Vec<String> {
        self.categories
            .iter()
            .map(|c| format!("{}_{}", self.feature, c))
            .collect()
    }

    /// Encode one value into its indicator block
    pub fn transform(&self, value: &str) -> Result<Vec<f64>> {
        let hot = self
            .categories
            .iter()
            .position(|c| c == value)
            .ok_or_else(|| Error::unknown_category(&self.feature, value))?;

        let mut block = vec![0.0; self.width()];
        block[hot] = 1.0;
        Ok(block)
    }
}
