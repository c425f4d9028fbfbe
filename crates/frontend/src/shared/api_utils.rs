//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and making requests.

use futures::future::{select, Either};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use web_sys::{Request, Response};

/// Предел ожидания ответа бэкенда
pub const REQUEST_TIMEOUT_MS: u32 = 10_000;

/// Get the base URL for API requests
///
/// The REST backend listens on port 8080 of the same host.
/// For local setups the base can be overridden via the
/// localStorage key "api_base".
///
/// # Returns
/// - API base URL like "http://localhost:8080" or "https://example.com:8080"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };

    if let Ok(Some(storage)) = window.local_storage() {
        if let Ok(Some(base)) = storage.get_item("api_base") {
            if !base.trim().is_empty() {
                return base.trim().trim_end_matches('/').to_string();
            }
        }
    }

    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:8080", protocol, hostname)
}

/// Build a full API URL from a path
///
/// # Example
/// ```no_run
/// use frontend::shared::api_utils::api_url;
///
/// let url = api_url("/invoices");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Выполнить запрос с пределом ожидания.
///
/// По истечении REQUEST_TIMEOUT_MS возвращается ошибка; сам fetch
/// при этом не отменяется.
pub async fn fetch_with_timeout(request: &Request) -> Result<Response, String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let fetch = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(request));

    match select(
        Box::pin(fetch),
        Box::pin(TimeoutFuture::new(REQUEST_TIMEOUT_MS)),
    )
    .await
    {
        Either::Left((result, _)) => {
            let resp_value = result.map_err(|e| format!("{e:?}"))?;
            let resp: Response = resp_value.dyn_into().map_err(|e| format!("{e:?}"))?;
            Ok(resp)
        }
        Either::Right(_) => Err(format!("Таймаут запроса ({} мс)", REQUEST_TIMEOUT_MS)),
    }
}

/// Прочитать тело ответа как строку
pub async fn response_text(resp: &Response) -> Result<String, String> {
    let text = wasm_bindgen_futures::JsFuture::from(resp.text().map_err(|e| format!("{e:?}"))?)
        .await
        .map_err(|e| format!("{e:?}"))?;
    text.as_string().ok_or_else(|| "bad text".to_string())
}
