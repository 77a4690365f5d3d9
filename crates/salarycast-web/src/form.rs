//! Declarative input form: one bounded widget per feature
//!
//! Submitted values are accepted only if the widget could have produced
//! them, which is the sole validation the prediction path relies on.

use salarycast_core::{
    Age, CustomerRecord, Error, Flag, FormSnapshot, ProductCount, Result, Tenure,
};
use salarycast_pipeline::SalaryPredictor;
use serde::Serialize;
use std::collections::HashMap;

/// Page title
pub const TITLE: &str = "Customer Salary Prediction: ";

pub const GEOGRAPHY: &str = "geography";
pub const GENDER: &str = "gender";
pub const AGE: &str = "age";
pub const BALANCE: &str = "balance";
pub const CREDIT_SCORE: &str = "credit_score";
pub const CHURN: &str = "exited";
pub const TENURE: &str = "tenure";
pub const NUM_OF_PRODUCTS: &str = "num_of_products";
pub const HAS_CR_CARD: &str = "has_cr_card";
pub const IS_ACTIVE_MEMBER: &str = "is_active_member";

/// What kind of control a widget is and which values it can produce
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WidgetKind {
    /// Dropdown over a closed option list
    Select { options: Vec<String> },
    /// Integer slider over a closed range
    Slider { min: i64, max: i64 },
    /// Free numeric entry
    Number { integer: bool },
}

/// One form control
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WidgetSpec {
    /// Query-string key
    pub name: &'static str,
    pub label: &'static str,
    #[serde(flatten)]
    pub kind: WidgetKind,
    /// Value shown before the user touches the control
    pub default: String,
}

impl WidgetSpec {
    fn select(name: &'static str, label: &'static str, options: Vec<String>) -> Self {
        let default = options.first().cloned().unwrap_or_default();
        Self {
            name,
            label,
            kind: WidgetKind::Select { options },
            default,
        }
    }

    fn flag(name: &'static str, label: &'static str) -> Self {
        Self::select(name, label, vec!["0".to_string(), "1".to_string()])
    }

    fn slider(name: &'static str, label: &'static str, min: u8, max: u8) -> Self {
        Self {
            name,
            label,
            kind: WidgetKind::Slider {
                min: i64::from(min),
                max: i64::from(max),
            },
            default: min.to_string(),
        }
    }

    fn number(name: &'static str, label: &'static str, integer: bool) -> Self {
        Self {
            name,
            label,
            kind: WidgetKind::Number { integer },
            default: if integer { "0" } else { "0.0" }.to_string(),
        }
    }

    /// Options of a select widget
    pub fn options(&self) -> Option<&[String]> {
        match &self.kind {
            WidgetKind::Select { options } => Some(options),
            _ => None,
        }
    }
}

/// The full form, in display order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputForm {
    pub title: &'static str,
    pub widgets: Vec<WidgetSpec>,
}

impl InputForm {
    /// Build the form with categorical options taken from the encoders
    pub fn from_vocabularies(geography: &[String], gender: &[String]) -> Self {
        let widgets = vec![
            WidgetSpec::select(GEOGRAPHY, "Geography", geography.to_vec()),
            WidgetSpec::select(GENDER, "Gender", gender.to_vec()),
            WidgetSpec::slider(AGE, Age::LABEL, Age::MIN, Age::MAX),
            WidgetSpec::number(BALANCE, "Balance", false),
            WidgetSpec::number(CREDIT_SCORE, "Credit Score", true),
            WidgetSpec::flag(CHURN, "Churn"),
            WidgetSpec::slider(TENURE, Tenure::LABEL, Tenure::MIN, Tenure::MAX),
            WidgetSpec::slider(
                NUM_OF_PRODUCTS,
                ProductCount::LABEL,
                ProductCount::MIN,
                ProductCount::MAX,
            ),
            WidgetSpec::flag(HAS_CR_CARD, "Has Credit Card"),
            WidgetSpec::flag(IS_ACTIVE_MEMBER, "Is Active Member"),
        ];

        Self {
            title: TITLE,
            widgets,
        }
    }

    /// Build the form for a loaded predictor
    pub fn from_predictor(predictor: &SalaryPredictor) -> Self {
        Self::from_vocabularies(predictor.geography_categories(), predictor.gender_categories())
    }

    /// Look up a widget by its query key
    pub fn widget(&self, name: &str) -> Option<&WidgetSpec> {
        self.widgets.iter().find(|w| w.name == name)
    }

    /// Snapshot with every widget at its default
    pub fn default_snapshot(&self) -> Result<FormSnapshot> {
        self.parse(&HashMap::new())
    }

    /// Read submitted values through the widgets; missing values take defaults
    pub fn parse(&self, values: &HashMap<String, String>) -> Result<FormSnapshot> {
        let record = CustomerRecord {
            credit_score: i32::try_from(self.integer(values, CREDIT_SCORE)?)
                .map_err(|_| Error::form("Credit Score is out of range"))?,
            age: Age::new(self.integer(values, AGE)?)?,
            tenure: Tenure::new(self.integer(values, TENURE)?)?,
            balance: self.real(values, BALANCE)?,
            num_of_products: ProductCount::new(self.integer(values, NUM_OF_PRODUCTS)?)?,
            has_cr_card: Flag::new(self.integer(values, HAS_CR_CARD)?)?,
            is_active_member: Flag::new(self.integer(values, IS_ACTIVE_MEMBER)?)?,
            exited: Flag::new(self.integer(values, CHURN)?)?,
        };

        Ok(FormSnapshot::new(
            self.choice(values, GEOGRAPHY)?,
            self.choice(values, GENDER)?,
            record,
        ))
    }

    /// Control values that reproduce `snapshot`, keyed by widget name
    pub fn snapshot_values(&self, snapshot: &FormSnapshot) -> HashMap<String, String> {
        self.widgets
            .iter()
            .filter_map(|w| Self::current_value(snapshot, w.name).map(|v| (w.name.to_string(), v)))
            .collect()
    }

    fn current_value(snapshot: &FormSnapshot, name: &str) -> Option<String> {
        let record = &snapshot.record;
        let value = match name {
            GEOGRAPHY => snapshot.geography.clone(),
            GENDER => snapshot.gender.clone(),
            AGE => record.age.to_string(),
            BALANCE => record.balance.to_string(),
            CREDIT_SCORE => record.credit_score.to_string(),
            CHURN => u8::from(record.exited).to_string(),
            TENURE => record.tenure.to_string(),
            NUM_OF_PRODUCTS => record.num_of_products.to_string(),
            HAS_CR_CARD => u8::from(record.has_cr_card).to_string(),
            IS_ACTIVE_MEMBER => u8::from(record.is_active_member).to_string(),
            _ => return None,
        };
        Some(value)
    }

    fn raw<'a>(
        &'a self,
        values: &'a HashMap<String, String>,
        name: &str,
    ) -> Result<(&'a WidgetSpec, &'a str)> {
        let widget = self
            .widget(name)
            .ok_or_else(|| Error::form(format!("no widget named '{}'", name)))?;
        let raw = values
            .get(name)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
            .unwrap_or(widget.default.as_str());
        Ok((widget, raw))
    }

    fn choice(&self, values: &HashMap<String, String>, name: &str) -> Result<String> {
        let (widget, raw) = self.raw(values, name)?;
        match &widget.kind {
            WidgetKind::Select { options } if options.iter().any(|o| o == raw) => {
                Ok(raw.to_string())
            }
            _ => Err(Error::form(format!(
                "'{}' is not an option for {}",
                raw, widget.label
            ))),
        }
    }

    fn integer(&self, values: &HashMap<String, String>, name: &str) -> Result<i64> {
        let (widget, raw) = self.raw(values, name)?;
        let parsed: i64 = raw.parse().map_err(|_| {
            Error::form(format!("{} must be a whole number, got '{}'", widget.label, raw))
        })?;

        match &widget.kind {
            WidgetKind::Slider { min, max } if !(*min..=*max).contains(&parsed) => {
                Err(Error::form(format!(
                    "{} must be within {}..={}, got {}",
                    widget.label, min, max, parsed
                )))
            }
            WidgetKind::Select { options } if !options.iter().any(|o| o == raw) => Err(
                Error::form(format!("'{}' is not an option for {}", raw, widget.label)),
            ),
            WidgetKind::Number { integer: false } => Err(Error::form(format!(
                "{} is not an integer widget",
                widget.label
            ))),
            _ => Ok(parsed),
        }
    }

    fn real(&self, values: &HashMap<String, String>, name: &str) -> Result<f64> {
        let (widget, raw) = self.raw(values, name)?;
        let parsed: f64 = raw
            .parse()
            .ok()
            .filter(|v: &f64| v.is_finite())
            .ok_or_else(|| Error::form(format!("{} must be a number, got '{}'", widget.label, raw)))?;

        match widget.kind {
            WidgetKind::Number { integer: false } => Ok(parsed),
            _ => Err(Error::form(format!("{} is not a real-valued widget", widget.label))),
        }
    }
}
