use leptos::prelude::*;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{CustomEvent, CustomEventInit, HtmlElement, Request, RequestInit, RequestMode, Response, console};

use crate::config::WidgetConfig;
use crate::models::{SlotState, StatsPayload};

/// Bubbling CustomEvent dispatched on the host element when the fetch fails,
/// for pages that want to react to a degraded widget. The event detail is the
/// error message.
pub const ERROR_EVENT: &str = "d2d-stats-error";

#[derive(Debug, Clone, Error)]
pub enum FetchError {
    #[error("failed to build request: {0}")]
    Request(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("invalid response body: {0}")]
    Body(String),
}

/// Generic JSON fetch over the browser's fetch API.
///
/// Non-OK HTTP statuses are deliberately not treated as errors: the widget's
/// contract is that only transport and body/parse failures surface. A 404
/// with an HTML body still fails, but at the parse step.
async fn fetch_json<T>(url: &str) -> Result<T, FetchError>
where
    T: serde::de::DeserializeOwned,
{
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|e| FetchError::Request(format!("{e:?}")))?;

    let window = web_sys::window().ok_or_else(|| FetchError::Request("no window object".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| FetchError::Network(format!("{e:?}")))?;

    let resp: Response = resp_value
        .dyn_into()
        .map_err(|e| FetchError::Network(format!("{e:?}")))?;

    let json = JsFuture::from(resp.json().map_err(|e| FetchError::Body(format!("{e:?}")))?)
        .await
        .map_err(|e| FetchError::Body(format!("{e:?}")))?;

    serde_wasm_bindgen::from_value(json).map_err(|e| FetchError::Body(e.to_string()))
}

/// One GET for the public stats document. No retry, no timeout, no caching;
/// each widget instance fetches independently.
pub async fn fetch_stats(url: &str) -> Result<StatsPayload, FetchError> {
    fetch_json::<StatsPayload>(url).await
}

/// Run one widget instance's load: fetch the stats document and settle the
/// slot signals. Each signal transitions at most once.
///
/// On success, a slot resolves only if its field is visible and present in
/// the payload; anything missing keeps its placeholder. On failure, only the
/// MRR slot shows the `$?` glyph (see `SlotState`); the error is logged to
/// the console and announced on the host element, and nothing propagates to
/// the page. If the host was detached meanwhile, the signal writes land in a
/// detached subtree and that is the end of it.
pub async fn load_stats(
    config: WidgetConfig,
    set_mrr: WriteSignal<SlotState>,
    set_customers: WriteSignal<SlotState>,
    host: HtmlElement,
) {
    match fetch_stats(&config.stats_url).await {
        Ok(payload) => {
            if config.fields.mrr {
                if let Some(text) = payload.mrr_text() {
                    set_mrr.set(SlotState::Resolved(text));
                }
            }
            if config.fields.customers {
                if let Some(text) = payload.customers_text() {
                    set_customers.set(SlotState::Resolved(text));
                }
            }
        }
        Err(err) => {
            console::warn_1(&format!("d2d-stats: {err}").into());
            if config.fields.mrr {
                set_mrr.set(SlotState::Failed);
            }
            dispatch_error(&host, &err.to_string());
        }
    }
}

fn dispatch_error(host: &HtmlElement, detail: &str) {
    let init = CustomEventInit::new();
    init.set_bubbles(true);
    init.set_detail(&JsValue::from_str(detail));
    if let Ok(event) = CustomEvent::new_with_event_init_dict(ERROR_EVENT, &init) {
        let _ = host.dispatch_event(&event);
    }
}
