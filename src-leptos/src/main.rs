//! Secure Files - page enhancer
//!
//! Runs inside the server-rendered dashboard pages and adds theme switching,
//! password feedback, live storage stats and tab switching on top of them.

// Dependencies used in lib.rs submodules, acknowledged here for bin target
use gloo_timers as _;
use js_sys as _;
use leptos as _;
use secure_files_types as _;
use serde as _;
use serde_wasm_bindgen as _;
use wasm_bindgen as _;
use wasm_bindgen_futures as _;
use web_sys as _;

fn main() {
    // Initialize panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging (ignore error if already initialized)
    drop(console_log::init_with_level(log::Level::Debug));

    log::info!("Secure Files UI {} starting...", env!("GIT_VERSION"));

    secure_files_leptos::app::start();
}
