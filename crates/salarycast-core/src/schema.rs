//! Ordered feature schema shared by the assembly step, the scaler, and the model
//!
//! The scaler and the model were fitted on columns in one specific order.
//! Nothing in the numbers themselves reveals a column swap, so every stage
//! that touches a row checks it against the same [`FeatureSchema`].

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Number of numeric columns at the front of every row
pub const NUMERIC_FIELD_COUNT: usize = 8;

/// Numeric column names in model order
pub const NUMERIC_FEATURES: [&str; NUMERIC_FIELD_COUNT] = [
    "CreditScore",
    "Age",
    "Tenure",
    "Balance",
    "NumOfProducts",
    "HasCrCard",
    "IsActiveMember",
    "Exited",
];

/// Named, ordered list of the columns fed to the scaler
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureSchema {
    columns: Vec<String>,
}

impl FeatureSchema {
    /// Start a schema with the numeric columns only
    pub fn numeric() -> Self {
        Self {
            columns: NUMERIC_FEATURES.iter().map(|c| c.to_string()).collect(),
        }
    }

    /// Append an indicator block (one column per category)
    pub fn with_block<I, S>(mut self, names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns.extend(names.into_iter().map(Into::into));
        self.ensure_unique()?;
        Ok(self)
    }

    /// Ordered column names
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Total number of columns
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Fail if a row of the given width cannot belong to this schema
    pub fn ensure_width(&self, width: usize, stage: &str) -> Result<()> {
        if width != self.width() {
            return Err(Error::schema(format!(
                "{} expects {} columns but the feature schema has {}",
                stage,
                width,
                self.width()
            )));
        }
        Ok(())
    }

    /// Fail unless `names` lists exactly the same columns in the same order
    pub fn ensure_matches(&self, names: &[String], stage: &str) -> Result<()> {
        self.ensure_width(names.len(), stage)?;

        if let Some((pos, (ours, theirs))) = self
            .columns
            .iter()
            .zip(names)
            .enumerate()
            .find(|(_, (a, b))| a != b)
        {
            return Err(Error::schema(format!(
                "{} column {} is '{}' but the feature schema has '{}'",
                stage, pos, theirs, ours
            )));
        }
        Ok(())
    }

    fn ensure_unique(&self) -> Result<()> {
        for (i, name) in self.columns.iter().enumerate() {
            if self.columns[..i].contains(name) {
                return Err(Error::schema(format!("duplicate column '{}'", name)));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_schema() -> FeatureSchema {
        FeatureSchema::numeric()
            .with_block(["Gender_Female", "Gender_Male"])
            .unwrap()
            .with_block(["Geography_France", "Geography_Germany", "Geography_Spain"])
            .unwrap()
    }

    #[test]
    fn test_numeric_prefix() {
        let schema = full_schema();
        assert_eq!(schema.width(), 13);
        assert_eq!(&schema.columns()[..NUMERIC_FIELD_COUNT], NUMERIC_FEATURES);
        assert_eq!(schema.columns()[8], "Gender_Female");
        assert_eq!(schema.columns()[12], "Geography_Spain");
    }

    #[test]
    fn test_duplicate_columns_rejected() {
        let result = FeatureSchema::numeric().with_block(["Age"]);
        assert!(matches!(result, Err(Error::Schema(_))));
    }

    #[test]
    fn test_ensure_matches_detects_swapped_blocks() {
        let schema = full_schema();
        let mut swapped: Vec<String> = NUMERIC_FEATURES.iter().map(|c| c.to_string()).collect();
        swapped.extend(
            ["Geography_France", "Geography_Germany", "Geography_Spain", "Gender_Female", "Gender_Male"]
                .iter()
                .map(|c| c.to_string()),
        );

        let err = schema.ensure_matches(&swapped, "scaler").unwrap_err();
        assert!(err.to_string().contains("column 8"));
    }

    #[test]
    fn test_ensure_width() {
        let schema = full_schema();
        assert!(schema.ensure_width(13, "model").is_ok());
        assert!(schema.ensure_width(12, "model").is_err());
    }
}
