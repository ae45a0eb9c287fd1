//! Typed error definitions for the dashboard UI.
//!
//! Every error here is presentation-level: callers log it and carry on,
//! nothing is surfaced to the user.

mod api;
mod config;
mod dom;

pub use api::ApiError;
pub use config::ConfigError;
pub use dom::DomError;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type that wraps all domain-specific errors.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "domain", content = "error")]
pub enum UiError {
    /// Wraps a failed API read
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Wraps a failed page operation
    #[error("DOM error: {0}")]
    Dom(#[from] DomError),

    /// Wraps a configuration error
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Standard Result type using UiError.
pub type Result<T> = std::result::Result<T, UiError>;
