pub mod app;
pub mod error;
pub mod page;
pub mod routes;
pub mod static_files;

pub use app::*;
pub use error::{status_for, ApiError};
pub use routes::*;
pub use static_files::*;
