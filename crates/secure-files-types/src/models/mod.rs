//! Domain models for the dashboard UI.
//!
//! All of these are transient presentation state; only [`Theme`] is persisted,
//! and only as a single string in the browser's local storage.

mod config;
mod password;
mod stats;
mod theme;

pub use config::UiConfig;
pub use password::{strength_score, Strength};
pub use stats::{StatsSnapshot, STAT_ELEMENT_IDS};
pub use theme::Theme;
