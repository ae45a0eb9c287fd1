//! Storage and document counters reported by `GET /api/stats`.

use crate::format::format_bytes;
use serde::{Deserialize, Serialize};

/// Element ids the dashboard reserves for the stats widgets, in render order.
pub const STAT_ELEMENT_IDS: [&str; 5] = [
    "files-count",
    "docs-count",
    "storage-used",
    "storage-limit",
    "storage-percentage",
];

/// One response from the stats endpoint. Not cached; each read replaces the
/// values on screen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct StatsSnapshot {
    /// Number of uploaded files
    pub files_count: u64,
    /// Number of stored documents
    pub docs_count: u64,
    /// Bytes used by the account
    pub used_storage: u64,
    /// Byte quota of the account
    pub storage_limit: u64,
}

impl StatsSnapshot {
    /// Whole-number share of the quota in use. A zero limit reports 0.
    /// Not clamped: an account over quota reports more than 100.
    pub fn usage_percentage(&self) -> u64 {
        if self.storage_limit == 0 {
            return 0;
        }
        (self.used_storage as f64 / self.storage_limit as f64 * 100.0).round() as u64
    }

    /// `(element id, text)` pairs for every stats widget, in
    /// [`STAT_ELEMENT_IDS`] order.
    pub fn display_fields(&self, decimals: u32) -> [(&'static str, String); 5] {
        let [files, docs, used, limit, percentage] = STAT_ELEMENT_IDS;
        [
            (files, self.files_count.to_string()),
            (docs, self.docs_count.to_string()),
            (used, format_bytes(self.used_storage, decimals)),
            (limit, format_bytes(self.storage_limit, decimals)),
            (percentage, self.usage_percentage().to_string()),
        ]
    }
}
