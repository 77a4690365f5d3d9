//! Error types for SalaryCast

/// Result type alias using SalaryCast's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for SalaryCast operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A serialized artifact is missing or cannot be decoded
    #[error("artifact error: {0}")]
    Artifact(String),

    /// A categorical value is outside the encoder vocabulary
    #[error("category '{value}' not recognized for field '{field}'")]
    UnknownCategory { field: String, value: String },

    /// Column order or width disagreement between pipeline stages
    #[error("schema error: {0}")]
    Schema(String),

    /// A form value the widget cannot produce
    #[error("form error: {0}")]
    Form(String),

    /// Model forward pass errors
    #[error("inference error: {0}")]
    Inference(String),
}

impl Error {
    /// Create a new artifact error
    pub fn artifact(msg: impl Into<String>) -> Self {
        Self::Artifact(msg.into())
    }

    /// Create a new unknown-category error
    pub fn unknown_category(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::UnknownCategory {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Create a new schema error
    pub fn schema(msg: impl Into<String>) -> Self {
        Self::Schema(msg.into())
    }

    /// Create a new form error
    pub fn form(msg: impl Into<String>) -> Self {
        Self::Form(msg.into())
    }

    /// Create a new inference error
    pub fn inference(msg: impl Into<String>) -> Self {
        Self::Inference(msg.into())
    }

    /// Whether the error was caused by the submitted input rather than the server
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Form(_) | Self::UnknownCategory { .. })
    }
}
