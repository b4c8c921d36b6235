pub mod config;
pub mod error;

pub use config::AegisConfig;
pub use error::{AegisError, Result};
