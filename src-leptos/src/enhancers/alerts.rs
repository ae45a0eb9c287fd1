//! Auto-dismissal of server flash alerts.

use crate::dom::{warn_on_err, Page, Selector, WebPage};
use gloo_timers::future::TimeoutFuture;
use leptos::task::spawn_local;

pub const ALERT_CLASS: &str = "alert";

/// Hide every `.alert`. Returns how many were hidden.
pub fn hide_alerts<P: Page>(page: &P) -> usize {
    let alerts = page.query_all(Selector::Class(ALERT_CLASS));
    for alert in &alerts {
        warn_on_err(page.set_style(alert, "display", "none"), "hide alert");
    }
    alerts.len()
}

/// Hide the alerts once, `delay_ms` after boot.
pub fn schedule_alert_dismissal(page: WebPage, delay_ms: u32) {
    spawn_local(async move {
        TimeoutFuture::new(delay_ms).await;
        let hidden = hide_alerts(&page);
        log::debug!("Dismissed {} alerts", hidden);
    });
}
