//! HTTP API bindings for the enhancer
//!
//! Type-safe wrappers around `fetch` for the dashboard's JSON endpoints.
//! Session cookies ride along with the same-origin default.

mod stats;

pub use stats::fetch_stats;

use secure_files_types::ApiError;
use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

fn request_error(e: JsValue) -> ApiError {
    ApiError::Request { message: format!("{:?}", e) }
}

fn decode_error(e: JsValue) -> ApiError {
    ApiError::Decode { message: format!("{:?}", e) }
}

/// Make a GET request to `base` + `endpoint` and decode the JSON body.
pub async fn api_get<R: DeserializeOwned>(base: &str, endpoint: &str) -> Result<R, ApiError> {
    let url = format!("{}{}", base, endpoint);

    let opts = RequestInit::new();
    opts.set_method("GET");

    let request = Request::new_with_str_and_init(&url, &opts).map_err(request_error)?;

    request
        .headers()
        .set("Accept", "application/json")
        .map_err(request_error)?;

    let window = web_sys::window()
        .ok_or_else(|| ApiError::Request { message: "No window".to_string() })?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(request_error)?;

    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| ApiError::Request { message: "Response is not a Response".to_string() })?;

    if !resp.ok() {
        return Err(ApiError::Http { status: resp.status() });
    }

    let json = JsFuture::from(resp.json().map_err(decode_error)?)
        .await
        .map_err(decode_error)?;

    serde_wasm_bindgen::from_value(json).map_err(|e| ApiError::Decode { message: e.to_string() })
}
