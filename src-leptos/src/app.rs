//! Boot sequence: wire every enhancer to the server-rendered page.

use crate::api::fetch_stats;
use crate::config::load_config;
use crate::dom::{listen, LocalStore, WebPage};
use crate::enhancers::{
    apply_theme, attach_password_listeners, attach_tab_listeners, attach_theme_toggles,
    decorate_cards, load_theme, refresh_stats, schedule_alert_dismissal, update_progress_bars,
};
use leptos::task::{spawn_local, Executor};

/// Enhance the page now if it is parsed, otherwise on `DOMContentLoaded`.
pub fn start() {
    // Nothing is mounted, so the task executor is not set up for us.
    drop(Executor::init_wasm_bindgen());

    let page = match WebPage::new() {
        Ok(page) => page,
        Err(e) => {
            log::error!("Cannot enhance page: {}", e);
            return;
        },
    };

    if page.document().ready_state() != "loading" {
        enhance(page);
        return;
    }

    let document = page.document().clone();
    let mut pending = Some(page);
    let wired = listen(&document, "DOMContentLoaded", move |_| {
        if let Some(page) = pending.take() {
            enhance(page);
        }
    });
    if let Err(e) = wired {
        log::error!("Cannot wait for DOMContentLoaded: {}", e);
    }
}

fn enhance(page: WebPage) {
    let config = load_config(&page);
    let store = LocalStore::new();
    let key = config.theme_storage_key.as_str();

    let theme = load_theme(&store, key);
    apply_theme(&page, &store, key, theme.as_str());

    let bars = update_progress_bars(&page);
    let cards = decorate_cards(&page);
    let password_inputs = attach_password_listeners(&page);
    let tab_buttons = attach_tab_listeners(&page);
    let toggles = attach_theme_toggles(&page, &store, key);

    schedule_alert_dismissal(page.clone(), config.alert_dismiss_ms);

    log::info!(
        "Page enhanced: theme={}, {} progress bars, {} cards, {} password inputs, {} tab buttons, {} theme toggles",
        theme,
        bars,
        cards,
        password_inputs,
        tab_buttons,
        toggles
    );

    spawn_local(async move {
        let decimals = config.byte_decimals;
        refresh_stats(&page, decimals, fetch_stats(&config)).await;
    });
}
