use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

pub mod components;
pub mod config;
pub mod models;
pub mod services;
pub mod utils;

use components::StatsWidget;
use config::WidgetConfig;
use models::SlotState;

/// The host-page tag the widget mounts into:
/// `<d2d-stats theme="light" show="mrr,customers"></d2d-stats>`
pub const WIDGET_TAG: &str = "d2d-stats";

/// Marker attribute set on a host once a widget is mounted into it, so
/// repeated scans never stack a second widget (or a second fetch) on it.
const MOUNTED_MARKER: &str = "data-d2d-mounted";

#[wasm_bindgen(start)]
fn start() {
    console_error_panic_hook::set_once();
    mount_all();
}

/// Scan the document for `<d2d-stats>` tags and mount a widget into each one
/// that does not already have one. Runs automatically at module start; also
/// exported so pages that insert tags dynamically can call it again.
#[wasm_bindgen]
pub fn mount_all() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Ok(hosts) = document.query_selector_all(WIDGET_TAG) else {
        return;
    };
    for index in 0..hosts.length() {
        if let Some(host) = hosts
            .get(index)
            .and_then(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
        {
            mount_widget(host);
        }
    }
}

/// Mount one widget into `host`. The `theme`, `show`, and `src` attributes
/// are read once here; later attribute mutation is not observed. Exactly one
/// fetch is issued per mount, wired to the slot signals the view renders
/// from.
#[wasm_bindgen]
pub fn mount_widget(host: web_sys::HtmlElement) {
    if host.has_attribute(MOUNTED_MARKER) {
        return;
    }
    let _ = host.set_attribute(MOUNTED_MARKER, "");

    let config = WidgetConfig::from_element(&host);
    let loader_host = host.clone();

    // The widget lives as long as the page; leak the unmount handle.
    leptos::mount::mount_to(host, move || {
        let (mrr, set_mrr) = signal(SlotState::Pending);
        let (customers, set_customers) = signal(SlotState::Pending);
        spawn_local(services::load_stats(
            config.clone(),
            set_mrr,
            set_customers,
            loader_host,
        ));
        view! { <StatsWidget config=config mrr=mrr customers=customers/> }
    })
    .forget();
}
