//! Errors from the JSON API read.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while reading an API endpoint.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum ApiError {
    /// The request could not be built or the fetch itself rejected
    #[error("Request failed: {message}")]
    Request {
        /// Description of the failure reported by the browser
        message: String,
    },

    /// The server answered with a non-2xx status
    #[error("HTTP error: {status}")]
    Http {
        /// HTTP status code
        status: u16,
    },

    /// The body was not the expected JSON shape
    #[error("Decode failed: {message}")]
    Decode {
        /// Description of the decode failure
        message: String,
    },
}
