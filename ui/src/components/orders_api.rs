//! HTTP client for the external ordering service.
//!
//! The storefront front end only reads: a single `GET` returning the
//! order-history envelope. The service base URL defaults to the
//! same-origin `/api` prefix and can be overridden at compile time via
//! `ORCHARD_API_URL`.

use orchard_common::history::OrdersResponse;

const DEFAULT_API_URL: &str = "/api";

/// Resolve the ordering-service base URL from compile-time env vars.
fn api_base_url() -> String {
    match option_env!("ORCHARD_API_URL") {
        Some(url) if !url.is_empty() => url.to_string(),
        _ => DEFAULT_API_URL.to_string(),
    }
}

/// Ordering-service client. Only functional in WASM builds.
pub struct OrdersClient {
    base_url: String,
}

impl OrdersClient {
    pub fn from_env() -> Self {
        Self {
            base_url: api_base_url(),
        }
    }

    /// Fetch the order history for a linked client account.
    ///
    /// `Ok` carries the service envelope, including application-level
    /// errors the service reports in-band. `Err` is a transport, HTTP,
    /// or decode failure; callers show a generic message for those.
    pub async fn get_orders(&self, client_id: &str) -> Result<OrdersResponse, String> {
        let url = format!("{}/v1/clients/{}/orders", self.base_url, client_id);
        let body = get_json(&url).await.map_err(|e| {
            tracing::warn!("Order fetch failed: {e}");
            e
        })?;
        serde_json::from_str(&body).map_err(|e| {
            tracing::warn!("Order fetch returned malformed body: {e}");
            format!("Parse orders response: {e}")
        })
    }
}

// ─── HTTP helper (WASM) ──────────────────────────────────────────────────────

#[cfg(target_family = "wasm")]
async fn get_json(url: &str) -> Result<String, String> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;

    let opts = web_sys::RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(web_sys::RequestMode::Cors);

    let request = web_sys::Request::new_with_str_and_init(url, &opts)
        .map_err(|e| format!("Failed to create request: {:?}", e))?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| format!("Failed to set header: {:?}", e))?;

    let window = web_sys::window().ok_or("No window")?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("Fetch failed: {:?}", e))?;

    let resp: web_sys::Response = resp_value
        .dyn_into()
        .map_err(|_| "Response is not a Response object".to_string())?;

    let text = JsFuture::from(
        resp.text()
            .map_err(|e| format!("Failed to get text: {:?}", e))?,
    )
    .await
    .map_err(|e| format!("Failed to read body: {:?}", e))?;

    let text_str = text
        .as_string()
        .ok_or("Response body is not a string".to_string())?;

    let status = resp.status();
    if status >= 400 {
        return Err(format!("HTTP {} from {}: {}", status, url, text_str));
    }

    Ok(text_str)
}

// Non-WASM stub for type checking
#[cfg(not(target_family = "wasm"))]
async fn get_json(_url: &str) -> Result<String, String> {
    Err("Orders client only available in WASM".to_string())
}
