//! Page (DOM and local storage) errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by the page seam.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum DomError {
    /// A browser API threw
    #[error("JS exception: {message}")]
    Js {
        /// Debug rendering of the thrown value
        message: String,
    },

    /// An element the markup should carry is absent
    #[error("Element not found: #{id}")]
    MissingElement {
        /// Identifier that was looked up
        id: String,
    },

    /// No window/document (not running in a browser)
    #[error("No document available")]
    NoDocument,
}
