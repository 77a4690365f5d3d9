//! Regressor trait

use salarycast_core::Result;

/// A model that maps one scaled feature row to a single scalar
pub trait Regressor: Send + Sync {
    /// Run one forward pass
    fn predict(&self, row: &[f64]) -> Result<f64>;

    /// Get the model name
    fn name(&self) -> &str;

    /// Number of input columns the model was trained on
    fn input_width(&self) -> usize;
}
