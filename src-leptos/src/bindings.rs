//! Functions exposed to inline page scripts (`onclick="switchTab(...)"`).
//!
//! Each call binds to the live document afresh; failures are logged.

use crate::config::load_config;
use crate::dom::{LocalStore, WebPage};
use crate::enhancers;
use wasm_bindgen::prelude::*;
use web_sys::Element;

fn page() -> Option<WebPage> {
    WebPage::new()
        .map_err(|e| log::error!("No page to enhance: {}", e))
        .ok()
}

#[wasm_bindgen(js_name = showLoading)]
pub fn show_loading() {
    if let Some(page) = page() {
        enhancers::show_loading(&page);
    }
}

#[wasm_bindgen(js_name = hideLoading)]
pub fn hide_loading() {
    if let Some(page) = page() {
        enhancers::hide_loading(&page);
    }
}

/// `trigger` is the button that was clicked; pass `this` from the handler.
#[wasm_bindgen(js_name = switchTab)]
pub fn switch_tab(tab_name: &str, trigger: Option<Element>) -> bool {
    page().is_some_and(|page| enhancers::switch_tab(&page, tab_name, trigger.as_ref()))
}

#[wasm_bindgen(js_name = applyTheme)]
pub fn apply_theme(theme: &str) -> String {
    let Some(page) = page() else {
        return theme.to_string();
    };
    let config = load_config(&page);
    enhancers::apply_theme(&page, &LocalStore::new(), &config.theme_storage_key, theme)
        .to_string()
}

#[wasm_bindgen(js_name = toggleTheme)]
pub fn toggle_theme() -> Option<String> {
    let page = page()?;
    let config = load_config(&page);
    let theme = enhancers::toggle_theme(&page, &LocalStore::new(), &config.theme_storage_key);
    Some(theme.to_string())
}

/// Returns the feedback level, 0 (very weak) to 4 (very strong).
#[wasm_bindgen(js_name = checkPasswordStrength)]
pub fn check_password_strength(password: &str, input: Element) -> u8 {
    let strength = match page() {
        Some(page) => enhancers::check_password_strength(&page, password, &input),
        None => secure_files_types::Strength::of(password),
    };
    strength as u8
}

/// Calls `callback` with no arguments if the user confirms.
#[wasm_bindgen(js_name = confirmAction)]
pub fn confirm_action(message: &str, callback: &js_sys::Function) -> bool {
    enhancers::confirm_action(message, || {
        if let Err(e) = callback.call0(&JsValue::NULL) {
            log::error!("Confirmed action failed: {:?}", e);
        }
    })
}

#[wasm_bindgen(js_name = formatBytes)]
pub fn format_bytes(bytes: f64, decimals: Option<u32>) -> String {
    let bytes = if bytes.is_finite() && bytes > 0.0 { bytes as u64 } else { 0 };
    let decimals = decimals.unwrap_or(secure_files_types::format::DEFAULT_DECIMALS);
    secure_files_types::format_bytes(bytes, decimals)
}
