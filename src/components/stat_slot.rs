use leptos::prelude::*;

use crate::config::Palette;
use crate::models::SlotState;

/// One centered label stack: the live value above a muted caption. The value
/// node's id is the coupling point between render and load and must stay
/// stable.
#[component]
pub fn StatSlot(
    value_id: &'static str,
    caption: &'static str,
    state: ReadSignal<SlotState>,
    palette: Palette,
) -> impl IntoView {
    view! {
        <div style="text-align: center;">
            <div id=value_id style=format!("font-size: 20px; color: {};", palette.foreground)>
                {move || state.get().text()}
            </div>
            <div style=format!("font-size: 10px; color: {};", palette.muted)>{caption}</div>
        </div>
    }
}
