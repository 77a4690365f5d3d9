//! Feature assembly: record + one-hot blocks, concatenated and scaled

use crate::encoder::OneHotEncoder;
use crate::scaler::StandardScaler;
use salarycast_core::{FeatureSchema, FormSnapshot, Result, NUMERIC_FIELD_COUNT};
use std::sync::Arc;

/// Raw and scaled versions of one assembled row
#[derive(Debug, Clone, PartialEq)]
pub struct AssembledFeatures {
    /// Numeric fields, gender block, geography block
    pub raw: Vec<f64>,

    /// `raw` after the scaler
    pub scaled: Vec<f64>,
}

/// Turns a form snapshot into the scaled row the model consumes
///
/// Column order is numeric record, gender block, geography block. The
/// scaler was fitted on that order, so [`FeatureAssembler::new`] refuses
/// to build an assembler whose encoders and scaler disagree about it.
#[derive(Debug, Clone)]
pub struct FeatureAssembler {
    gender: Arc<OneHotEncoder>,
    geography: Arc<OneHotEncoder>,
    scaler: Arc<StandardScaler>,
    schema: FeatureSchema,
}

impl FeatureAssembler {
    /// Build an assembler, checking the column contract against the scaler
    pub fn new(
        gender: Arc<OneHotEncoder>,
        geography: Arc<OneHotEncoder>,
        scaler: Arc<StandardScaler>,
    ) -> Result<Self> {
        let schema = FeatureSchema::numeric()
            .with_block(gender.feature_names())?
            .with_block(geography.feature_names())?;

        match scaler.feature_names() {
            Some(names) => schema.ensure_matches(names, "scaler")?,
            None => {
                tracing::warn!(
                    "Scaler artifact has no feature names; only the column count is checked"
                );
                schema.ensure_width(scaler.width(), "scaler")?;
            }
        }

        tracing::debug!(columns = ?schema.columns(), "Feature schema established");

        Ok(Self {
            gender,
            geography,
            scaler,
            schema,
        })
    }

    /// Ordered column names of the assembled row
    pub fn schema(&self) -> &FeatureSchema {
        &self.schema
    }

    /// Geography encoder (its categories are the form's options)
    pub fn geography(&self) -> &OneHotEncoder {
        &self.geography
    }

    /// Gender encoder (its categories are the form's options)
    pub fn gender(&self) -> &OneHotEncoder {
        &self.gender
    }

    /// Steps 1-4: numeric record, gender block, geography block
    pub fn assemble_raw(&self, snapshot: &FormSnapshot) -> Result<Vec<f64>> {
        let gender_block = self.gender.transform(&snapshot.gender)?;
        let geography_block = self.geography.transform(&snapshot.geography)?;

        let mut row = Vec::with_capacity(self.schema.width());
        row.extend_from_slice(&snapshot.record.numeric_values());
        row.extend(gender_block);
        row.extend(geography_block);

        self.schema.ensure_width(row.len(), "assembled row")?;
        Ok(row)
    }

    /// Steps 1-5: assemble and scale
    pub fn assemble(&self, snapshot: &FormSnapshot) -> Result<AssembledFeatures> {
        let raw = self.assemble_raw(snapshot)?;
        let scaled = self.scaler.transform(&raw)?;
        Ok(AssembledFeatures { raw, scaled })
    }

    /// Gender indicator block of an assembled raw row
    pub fn gender_block<'a>(&self, raw: &'a [f64]) -> &'a [f64] {
        &raw[NUMERIC_FIELD_COUNT..NUMERIC_FIELD_COUNT + self.gender.width()]
    }

    /// Geography indicator block of an assembled raw row
    pub fn geography_block<'a>(&self, raw: &'a [f64]) -> &'a [f64] {
        let start = NUMERIC_FIELD_COUNT + self.gender.width();
        &raw[start..start + self.geography.width()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use salarycast_core::{CustomerRecord, Error};

    fn encoders() -> (Arc<OneHotEncoder>, Arc<OneHotEncoder>) {
        let gender = OneHotEncoder::new("Gender", vec!["Female".into(), "Male".into()]).unwrap();
        let geography = OneHotEncoder::new(
            "Geography",
            vec!["France".into(), "Germany".into(), "Spain".into()],
        )
        .unwrap();
        (Arc::new(gender), Arc::new(geography))
    }

    fn identity_scaler(width: usize) -> Arc<StandardScaler> {
        Arc::new(StandardScaler::new(vec![0.0; width], vec![1.0; width]).unwrap())
    }

    #[test]
    fn test_raw_row_layout() {
        let (gender, geography) = encoders();
        let assembler = FeatureAssembler::new(gender, geography, identity_scaler(13)).unwrap();

        let snapshot = FormSnapshot::new("Germany", "Female", CustomerRecord::default());
        let raw = assembler.assemble_raw(&snapshot).unwrap();

        assert_eq!(raw.len(), 13);
        assert_eq!(&raw[8..10], &[1.0, 0.0]);
        assert_eq!(&raw[10..13], &[0.0, 1.0, 0.0]);
        assert_eq!(assembler.gender_block(&raw), &[1.0, 0.0]);
        assert_eq!(assembler.geography_block(&raw), &[0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_scaler_width_mismatch() {
        let (gender, geography) = encoders();
        let result = FeatureAssembler::new(gender, geography, identity_scaler(12));
        assert!(matches!(result, Err(Error::Schema(_))));
    }

    #[test]
    fn test_scaler_fitted_on_other_order() {
        let (gender, geography) = encoders();
        let mut names: Vec<String> = salarycast_core::NUMERIC_FEATURES
            .iter()
            .map(|c| c.to_string())
            .collect();
        names.extend(geography.feature_names());
        names.extend(gender.feature_names());

        let scaler = StandardScaler::new(vec![0.0; 13], vec![1.0; 13])
            .unwrap()
            .with_feature_names(names)
            .unwrap();

        let result = FeatureAssembler::new(gender, geography, Arc::new(scaler));
        assert!(matches!(result, Err(Error::Schema(_))));
    }

    #[test]
    fn test_unknown_category() {
        let (gender, geography) = encoders();
        let assembler = FeatureAssembler::new(gender, geography, identity_scaler(13)).unwrap();

        let snapshot = FormSnapshot::new("Italy", "Male", CustomerRecord::default());
        assert!(matches!(
            assembler.assemble(&snapshot),
            Err(Error::UnknownCategory { .. })
        ));
    }
}
