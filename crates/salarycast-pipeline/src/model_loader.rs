//! Candle-based feed-forward regression model

use crate::model_config::{Activation, ModelConfig};
use crate::regressor::Regressor;
use candle_core::{DType, Device, Tensor};
use candle_nn::{Linear, Module, VarBuilder};
use salarycast_core::{Error, Result};
use std::collections::HashMap;
use std::path::Path;

/// File holding the layer layout inside a model directory
pub const CONFIG_FILE: &str = "config.json";

/// File holding the dense weights inside a model directory
pub const WEIGHTS_FILE: &str = "model.safetensors";

/// Stack of dense layers evaluated on CPU
pub struct DenseRegressor {
    config: ModelConfig,
    layers: Vec<(Linear, Activation)>,
    device: Device,
}

impl DenseRegressor {
    /// Load a model directory containing `config.json` and `model.safetensors`
    pub fn load(model_dir: impl AsRef<Path>) -> Result<Self> {
        let model_dir = model_dir.as_ref();
        if !model_dir.is_dir() {
            return Err(Error::artifact(format!(
                "model directory not found: {}",
                model_dir.display()
            )));
        }

        let config = ModelConfig::from_file(model_dir.join(CONFIG_FILE))?;

        let weights_path = model_dir.join(WEIGHTS_FILE);
        let device = Device::Cpu;
        let tensors = candle_core::safetensors::load(&weights_path, &device).map_err(|e| {
            Error::artifact(format!(
                "failed to load weights {}: {}",
                weights_path.display(),
                e
            ))
        })?;

        Self::from_tensors(config, tensors)
    }

    /// Build the network from an in-memory tensor map
    pub fn from_tensors(config: ModelConfig, tensors: HashMap<String, Tensor>) -> Result<Self> {
        config.validate()?;

        let device = Device::Cpu;
        let vb = VarBuilder::from_tensors(tensors, DType::F32, &device);

        let layers = config
            .layer_shapes()
            .into_iter()
            .zip(&config.layers)
            .enumerate()
            .map(|(i, ((input, output), layer))| {
                candle_nn::linear(input, output, vb.pp(format!("dense_{}", i)))
                    .map(|linear| (linear, layer.activation))
                    .map_err(|e| Error::artifact(format!("failed to build layer dense_{}: {}", i, e)))
            })
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(
            model = %config.name,
            input_dim = config.input_dim,
            layers = layers.len(),
            "Dense regressor built"
        );

        Ok(Self {
            config,
            layers,
            device,
        })
    }

    fn forward(&self, row: &[f64]) -> candle_core::Result<Vec<f32>> {
        let input: Vec<f32> = row.iter().map(|v| *v as f32).collect();
        let mut xs = Tensor::from_vec(input, (1, row.len()), &self.device)?;

        for (linear, activation) in &self.layers {
            xs = linear.forward(&xs)?;
            xs = match activation {
                Activation::Relu => xs.relu()?,
                Activation::Tanh => xs.tanh()?,
                Activation::Sigmoid => candle_nn::ops::sigmoid(&xs)?,
                Activation::Linear => xs,
            };
        }

        xs.flatten_all()?.to_vec1::<f32>()
    }
}

impl Regressor for DenseRegressor {
    fn predict(&self, row: &[f64]) -> Result<f64> {
        if row.len() != self.config.input_dim {
            return Err(Error::schema(format!(
                "model expects {} inputs, got {}",
                self.config.input_dim,
                row.len()
            )));
        }

        let output = self
            .forward(row)
            .map_err(|e| Error::inference(format!("forward pass failed: {}", e)))?;

        match output.as_slice() {
            [value] => Ok(f64::from(*value)),
            other => Err(Error::inference(format!(
                "expected a single output, got {}",
                other.len()
            ))),
        }
    }

    fn name(&self) -> &str {
        &self.config.name
    }

    fn input_width(&self) -> usize {
        self.config.input_dim
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model_config::LayerConfig;

    fn tensor(data: &[f32], shape: &[usize]) -> Tensor {
        Tensor::from_vec(data.to_vec(), shape, &Device::Cpu).unwrap()
    }

    /// 3 -> 2 (relu) -> 1 (linear) with hand-picked weights
    fn tiny_model() -> DenseRegressor {
        let config = ModelConfig {
            name: "tiny".into(),
            input_dim: 3,
            layers: vec![
                LayerConfig::new(2, Activation::Relu),
                LayerConfig::new(1, Activation::Linear),
            ],
        };

        let mut tensors = HashMap::new();
        tensors.insert("dense_0.weight".to_string(), tensor(&[1.0, 0.0, 0.0, 0.0, 1.0, -1.0], &[2, 3]));
        tensors.insert("dense_0.bias".to_string(), tensor(&[0.0, 0.0], &[2]));
        tensors.insert("dense_1.weight".to_string(), tensor(&[2.0, 3.0], &[1, 2]));
        tensors.insert("dense_1.bias".to_string(), tensor(&[10.0], &[1]));

        DenseRegressor::from_tensors(config, tensors).unwrap()
    }

    #[test]
    fn test_forward_pass() {
        let model = tiny_model();
        // hidden = relu([1, 2 - 5]) = [1, 0]; out = 2*1 + 3*0 + 10
        assert_eq!(model.predict(&[1.0, 2.0, 5.0]).unwrap(), 12.0);
        // hidden = relu([-1, 4]) = [0, 4]; out = 12 + 10
        assert_eq!(model.predict(&[-1.0, 4.0, 0.0]).unwrap(), 22.0);
    }

    #[test]
    fn test_wrong_input_width() {
        let model = tiny_model();
        assert!(matches!(model.predict(&[1.0, 2.0]), Err(Error::Schema(_))));
    }

    #[test]
    fn test_missing_weights() {
        let config = ModelConfig {
            name: "broken".into(),
            input_dim: 3,
            layers: vec![LayerConfig::new(1, Activation::Linear)],
        };
        let result = DenseRegressor::from_tensors(config, HashMap::new());
        assert!(matches!(result, Err(Error::Artifact(_))));
    }

    #[test]
    fn test_load_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE),
            r#"{"name":"saved","input_dim":2,"layers":[{"units":1,"activation":"linear"}]}"#,
        )
        .unwrap();

        let mut tensors = HashMap::new();
        tensors.insert("dense_0.weight".to_string(), tensor(&[0.5, -0.5], &[1, 2]));
        tensors.insert("dense_0.bias".to_string(), tensor(&[1.0], &[1]));
        candle_core::safetensors::save(&tensors, dir.path().join(WEIGHTS_FILE)).unwrap();

        let model = DenseRegressor::load(dir.path()).unwrap();
        assert_eq!(model.name(), "saved");
        assert_eq!(model.input_width(), 2);
        assert_eq!(model.predict(&[4.0, 2.0]).unwrap(), 2.0);
    }

    #[test]
    fn test_load_missing_directory() {
        let result = DenseRegressor::load("/nonexistent/model_salary");
        assert!(matches!(result, Err(Error::Artifact(_))));
    }
}
