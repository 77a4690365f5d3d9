//! SalaryCast Web
//!
//! The interactive prediction page, a small JSON API over the same
//! pipeline, and the `salarycast` command line.

pub mod cli;
pub mod config;
pub mod form;
pub mod metrics;
pub mod server;
pub mod state;

pub use cli::*;
pub use config::ServerConfig;
pub use form::{InputForm, WidgetKind, WidgetSpec};
pub use server::*;
pub use state::AppState;
