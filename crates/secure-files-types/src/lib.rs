//! # Secure Files Types
//!
//! Core models and error definitions for the Secure Files dashboard UI.
//!
//! - **`error`** - Typed error hierarchy for the API read, the page seam and config
//! - **`format`** - Human-readable byte sizes
//! - **`models`** - Theme preference, password strength, stats snapshot, UI config
//!
//! ## Architecture Role
//!
//! ```text
//!        secure-files-types (this crate, no web-sys)
//!                  │
//!                  ▼
//!        secure-files-leptos (WASM enhancer)
//! ```
//!
//! Everything here is pure and runs natively, so the formatting and scoring
//! rules are tested without a browser.

pub mod error;
pub mod format;
pub mod models;

pub use error::{ApiError, ConfigError, DomError, Result, UiError};
pub use format::{format_bytes, format_bytes_default};
pub use models::{strength_score, StatsSnapshot, Strength, Theme, UiConfig};
