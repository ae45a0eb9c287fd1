//! Full-screen loading overlay.

use crate::dom::Page;

pub const LOADING_ID: &str = "loading-overlay";

const OVERLAY_CLASS: &str =
    "fixed inset-0 bg-black bg-opacity-50 flex items-center justify-center z-50";

const OVERLAY_HTML: &str = r#"<div class="loading-spinner"></div>
<p class="text-white mt-4">جاري التحميل...</p>"#;

/// Cover the page with the overlay. Showing it while it is already up is a
/// no-op, so there is never more than one. Returns `true` if it was inserted.
pub fn show_loading<P: Page>(page: &P) -> bool {
    let Some(body) = page.body() else {
        log::warn!("No <body>, loading overlay not shown");
        return false;
    };

    match page.get_or_create_child(&body, "div", LOADING_ID) {
        Ok((overlay, true)) => {
            page.set_class_name(&overlay, OVERLAY_CLASS);
            page.set_inner_html(&overlay, OVERLAY_HTML);
            true
        },
        Ok((_, false)) => false,
        Err(e) => {
            log::warn!("Failed to show loading overlay: {}", e);
            false
        },
    }
}

/// Remove the overlay if it is up. Returns `true` if one was removed.
pub fn hide_loading<P: Page>(page: &P) -> bool {
    match page.element_by_id(LOADING_ID) {
        Some(overlay) => {
            page.remove(&overlay);
            true
        },
        None => false,
    }
}
