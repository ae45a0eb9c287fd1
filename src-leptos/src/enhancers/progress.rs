//! Progress bars sized from their `data-percentage` attribute.

use crate::dom::{warn_on_err, Page, Selector};

pub const PROGRESS_BAR_CLASS: &str = "progress-bar";

const PERCENTAGE_ATTR: &str = "data-percentage";

/// Parse an attribute value into a width in `[0, 100]`.
pub fn parse_percentage(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .map(|value| value.clamp(0.0, 100.0))
}

/// Set a bar's width, clamped to `[0, 100]` percent.
pub fn set_progress_width<P: Page>(page: &P, bar: &P::Element, percentage: f64) {
    let width = format!("{}%", percentage.clamp(0.0, 100.0));
    warn_on_err(page.set_style(bar, "width", &width), "set progress width");
}

/// Size every `.progress-bar`. Bars without a numeric percentage are left
/// as rendered. Returns how many bars were sized.
pub fn update_progress_bars<P: Page>(page: &P) -> usize {
    let mut sized = 0;
    for bar in page.query_all(Selector::Class(PROGRESS_BAR_CLASS)) {
        let raw = page.attribute(&bar, PERCENTAGE_ATTR);
        match raw.as_deref().and_then(parse_percentage) {
            Some(percentage) => {
                set_progress_width(page, &bar, percentage);
                sized += 1;
            },
            None => log::debug!("Skipping progress bar with {}={:?}", PERCENTAGE_ATTR, raw),
        }
    }
    sized
}
