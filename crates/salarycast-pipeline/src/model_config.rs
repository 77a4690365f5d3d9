//! Architecture description stored next to the model weights

use salarycast_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Feed-forward regression network layout (`config.json`)
///
/// ```json
/// {
///   "name": "model_salary",
///   "input_dim": 13,
///   "layers": [
///     { "units": 64, "activation": "relu" },
///     { "units": 32, "activation": "relu" },
///     { "units": 1,  "activation": "linear" }
///   ]
/// }
/// ```
///
/// Layer `i` reads its weights from `dense_<i>.weight` (shape `[units, in]`)
/// and `dense_<i>.bias` (shape `[units]`) in `model.safetensors`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Model name
    #[serde(default = "default_name")]
    pub name: String,

    /// Width of the scaled feature row
    pub input_dim: usize,

    /// Dense layers, input to output
    pub layers: Vec<LayerConfig>,
}

fn default_name() -> String {
    "model_salary".to_string()
}

/// One dense layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerConfig {
    pub units: usize,

    #[serde(default)]
    pub activation: Activation,
}

/// Activation applied after a dense layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Activation {
    Relu,
    Tanh,
    Sigmoid,
    #[default]
    Linear,
}

impl LayerConfig {
    pub fn new(units: usize, activation: Activation) -> Self {
        Self { units, activation }
    }
}

impl ModelConfig {
    /// Load and validate `config.json`
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            Error::artifact(format!("failed to read model config {}: {}", path.display(), e))
        })?;
        let config: Self = serde_json::from_str(&contents).map_err(|e| {
            Error::artifact(format!("failed to parse model config {}: {}", path.display(), e))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// The network must be non-empty, every layer non-zero, and end in one unit
    pub fn validate(&self) -> Result<()> {
        if self.input_dim == 0 {
            return Err(Error::artifact("model input_dim must be positive"));
        }
        let last = self
            .layers
            .last()
            .ok_or_else(|| Error::artifact("model has no layers"))?;
        if let Some(pos) = self.layers.iter().position(|l| l.units == 0) {
            return Err(Error::artifact(format!("model layer {} has zero units", pos)));
        }
        if last.units != 1 {
            return Err(Error::artifact(format!(
                "regression model must end in 1 unit, found {}",
                last.units
            )));
        }
        Ok(())
    }

    /// `(in, out)` dimensions of every layer
    pub fn layer_shapes(&self) -> Vec<(usize, usize)> {
        let mut input = self.input_dim;
        self.layers
            .iter()
            .map(|layer| {
                let shape = (input, layer.units);
                input = layer.units;
                shape
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let json = r#"{
            "input_dim": 13,
            "layers": [
                { "units": 64, "activation": "relu" },
                { "units": 32, "activation": "relu" },
                { "units": 1 }
            ]
        }"#;

        let config: ModelConfig = serde_json::from_str(json).unwrap();
        config.validate().unwrap();
        assert_eq!(config.name, "model_salary");
        assert_eq!(config.layers[2].activation, Activation::Linear);
        assert_eq!(config.layer_shapes(), vec![(13, 64), (64, 32), (32, 1)]);
    }

    #[test]
    fn test_rejects_multi_output() {
        let config = ModelConfig {
            name: "m".into(),
            input_dim: 4,
            layers: vec![LayerConfig::new(2, Activation::Sigmoid)],
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_empty() {
        let config = ModelConfig {
            name: "m".into(),
            input_dim: 4,
            layers: vec![],
        };
        assert!(config.validate().is_err());

        let config = ModelConfig {
            name: "m".into(),
            input_dim: 0,
            layers: vec![LayerConfig::new(1, Activation::Linear)],
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_activation() {
        let json = r#"{ "input_dim": 2, "layers": [{ "units": 1, "activation": "softmax" }] }"#;
        assert!(serde_json::from_str::<ModelConfig>(json).is_err());
    }
}
