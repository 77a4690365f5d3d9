//! Shared fixtures for pipeline integration tests

#![allow(dead_code)]

use salarycast_core::{Age, CustomerRecord, Flag, FormSnapshot, ProductCount, Tenure};
use salarycast_pipeline::{FeatureAssembler, OneHotEncoder, StandardScaler};
use std::sync::Arc;

pub const GEOGRAPHIES: [&str; 3] = ["France", "Germany", "Spain"];
pub const GENDERS: [&str; 2] = ["Female", "Male"];

/// Column names in the order the scaler was fitted on
pub const FITTED_COLUMNS: [&str; 13] = [
    "CreditScore",
    "Age",
    "Tenure",
    "Balance",
    "NumOfProducts",
    "HasCrCard",
    "IsActiveMember",
    "Exited",
    "Gender_Female",
    "Gender_Male",
    "Geography_France",
    "Geography_Germany",
    "Geography_Spain",
];

pub const FITTED_MEAN: [f64; 13] = [
    650.53, 38.92, 5.01, 76485.89, 1.53, 0.71, 0.52, 0.20, 0.45, 0.55, 0.50, 0.25, 0.25,
];

pub const FITTED_SCALE: [f64; 13] = [
    96.65, 10.49, 2.89, 62397.41, 0.58, 0.46, 0.50, 0.40, 0.50, 0.50, 0.50, 0.43, 0.43,
];

pub fn gender_encoder() -> Arc<OneHotEncoder> {
    Arc::new(
        OneHotEncoder::new("Gender", GENDERS.iter().map(|s| s.to_string()).collect()).unwrap(),
    )
}

pub fn geography_encoder() -> Arc<OneHotEncoder> {
    Arc::new(
        OneHotEncoder::new("Geography", GEOGRAPHIES.iter().map(|s| s.to_string()).collect())
            .unwrap(),
    )
}

pub fn fitted_scaler() -> Arc<StandardScaler> {
    Arc::new(
        StandardScaler::new(FITTED_MEAN.to_vec(), FITTED_SCALE.to_vec())
            .unwrap()
            .with_feature_names(FITTED_COLUMNS.iter().map(|s| s.to_string()).collect())
            .unwrap(),
    )
}

pub fn assembler() -> FeatureAssembler {
    FeatureAssembler::new(gender_encoder(), geography_encoder(), fitted_scaler()).unwrap()
}

/// CreditScore=650, Age=40, Tenure=5, Balance=50000, two products, card, active, no churn
pub fn scenario_record() -> CustomerRecord {
    CustomerRecord {
        credit_score: 650,
        age: Age::new(40).unwrap(),
        tenure: Tenure::new(5).unwrap(),
        balance: 50_000.0,
        num_of_products: ProductCount::new(2).unwrap(),
        has_cr_card: Flag::Yes,
        is_active_member: Flag::Yes,
        exited: Flag::No,
    }
}

pub fn scenario_snapshot() -> FormSnapshot {
    FormSnapshot::new("France", "Male", scenario_record())
}
