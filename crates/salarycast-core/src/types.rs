//! Core types for SalaryCast

use crate::error::{Error, Result};
use crate::schema::NUMERIC_FIELD_COUNT;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Declares an integer field that can only hold values inside a closed range.
///
/// The range mirrors the slider bounds of the input form, so a constructed
/// value is always one the form could have produced.
macro_rules! bounded_field {
    ($(#[$meta:meta])* $name:ident, $label:literal, $min:literal ..= $max:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(try_from = "i64", into = "i64")]
        pub struct $name(u8);

        impl $name {
            /// Smallest accepted value
            pub const MIN: u8 = $min;
            /// Largest accepted value
            pub const MAX: u8 = $max;
            /// Form label for this field
            pub const LABEL: &'static str = $label;

            /// Create a value, rejecting anything outside the range
            pub fn new(value: i64) -> Result<Self> {
                if value < i64::from(Self::MIN) || value > i64::from(Self::MAX) {
                    return Err(Error::form(format!(
                        "{} must be within {}..={}, got {}",
                        Self::LABEL,
                        Self::MIN,
                        Self::MAX,
                        value
                    )));
                }
                Ok(Self(value as u8))
            }

            /// Get the raw value
            pub fn get(self) -> u8 {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self(Self::MIN)
            }
        }

        impl TryFrom<i64> for $name {
            type Error = Error;

            fn try_from(value: i64) -> Result<Self> {
                Self::new(value)
            }
        }

        impl From<$name> for i64 {
            fn from(value: $name) -> Self {
                i64::from(value.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

bounded_field!(
    /// Customer age in years
    Age, "Age", 18..=100
);

bounded_field!(
    /// Years the customer has been with the bank
    Tenure, "Tenure", 0..=10
);

bounded_field!(
    /// Number of bank products held
    ProductCount, "Number of Products", 1..=4
);

/// A binary 0/1 form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Flag {
    #[default]
    No,
    Yes,
}

impl Flag {
    /// Parse from the 0/1 encoding
    pub fn new(value: i64) -> Result<Self> {
        match value {
            0 => Ok(Self::No),
            1 => Ok(Self::Yes),
            other => Err(Error::form(format!("flag must be 0 or 1, got {}", other))),
        }
    }

    /// Value fed to the model
    pub fn as_f64(self) -> f64 {
        match self {
            Self::No => 0.0,
            Self::Yes => 1.0,
        }
    }
}

impl TryFrom<u8> for Flag {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(i64::from(value))
    }
}

impl From<Flag> for u8 {
    fn from(flag: Flag) -> Self {
        match flag {
            Flag::No => 0,
            Flag::Yes => 1,
        }
    }
}

impl From<bool> for Flag {
    fn from(value: bool) -> Self {
        if value {
            Self::Yes
        } else {
            Self::No
        }
    }
}

/// Numeric customer attributes collected by the form
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CustomerRecord {
    pub credit_score: i32,
    pub age: Age,
    pub tenure: Tenure,
    pub balance: f64,
    pub num_of_products: ProductCount,
    pub has_cr_card: Flag,
    pub is_active_member: Flag,

    /// Churn flag. Fed to the model as the `Exited` column.
    pub exited: Flag,
}

impl CustomerRecord {
    /// Numeric features in model column order
    /// (`CreditScore, Age, Tenure, Balance, NumOfProducts, HasCrCard, IsActiveMember, Exited`)
    pub fn numeric_values(&self) -> [f64; NUMERIC_FIELD_COUNT] {
        [
            f64::from(self.credit_score),
            f64::from(self.age.get()),
            f64::from(self.tenure.get()),
            self.balance,
            f64::from(self.num_of_products.get()),
            self.has_cr_card.as_f64(),
            self.is_active_member.as_f64(),
            self.exited.as_f64(),
        ]
    }
}

/// Everything the form holds at one moment: the record plus both categorical choices
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormSnapshot {
    pub geography: String,
    pub gender: String,

    #[serde(flatten)]
    pub record: CustomerRecord,
}

impl FormSnapshot {
    /// Create a snapshot from its parts
    pub fn new(
        geography: impl Into<String>,
        gender: impl Into<String>,
        record: CustomerRecord,
    ) -> Self {
        Self {
            geography: geography.into(),
            gender: gender.into(),
            record,
        }
    }
}

/// A single point estimate produced by the model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Predicted salary
    pub value: f64,

    /// Assembly plus inference time in microseconds
    pub latency_us: u64,
}

impl Prediction {
    pub fn new(value: f64, latency_us: u64) -> Self {
        Self { value, latency_us }
    }

    /// The output line shown under the form
    pub fn display(&self) -> String {
        format!("Salary Prediction: {:.2}", self.value)
    }
}
