//! Dashboard counters filled from the stats endpoint.

use super::progress::{set_progress_width, PROGRESS_BAR_CLASS};
use crate::dom::{Page, Selector};
use secure_files_types::{ApiError, StatsSnapshot};
use std::future::Future;

/// Write every counter whose element is on the page, then size the first
/// progress bar to the storage usage. Returns how many counters were written.
pub fn render_stats<P: Page>(page: &P, stats: &StatsSnapshot, decimals: u32) -> usize {
    let mut written = 0;
    for (id, text) in stats.display_fields(decimals) {
        match page.element_by_id(id) {
            Some(element) => {
                page.set_text(&element, &text);
                written += 1;
            },
            None => log::debug!("#{} not on this page, skipping", id),
        }
    }

    if let Some(bar) = page.query_first(Selector::Class(PROGRESS_BAR_CLASS)) {
        set_progress_width(page, &bar, stats.usage_percentage() as f64);
    }

    written
}

/// Await one stats read and render it. On failure the error is logged and
/// the page keeps whatever it showed before. No retry.
pub async fn refresh_stats<P, F>(page: &P, decimals: u32, fetch: F) -> Option<StatsSnapshot>
where
    P: Page,
    F: Future<Output = Result<StatsSnapshot, ApiError>>,
{
    match fetch.await {
        Ok(stats) => {
            let written = render_stats(page, &stats, decimals);
            log::debug!("Stats refreshed ({} counters on page)", written);
            Some(stats)
        },
        Err(e) => {
            log::error!("Error fetching stats: {}", e);
            None
        },
    }
}
