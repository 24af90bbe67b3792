use leptos::prelude::*;

use crate::components::StatSlot;
use crate::config::WidgetConfig;
use crate::models::SlotState;

pub const MRR_SLOT_ID: &str = "d2d-w-mrr";
pub const CUSTOMERS_SLOT_ID: &str = "d2d-w-customers";

/// The inline stats panel. Purely presentational: the slot signals are fed
/// by `services::api::load_stats`, wired up at mount time.
///
/// Slots appear in fixed MRR-then-customers order; a field excluded from the
/// configuration gets no DOM node at all. The customers caption reads
/// "MEMBERS" on purpose.
#[component]
pub fn StatsWidget(
    config: WidgetConfig,
    mrr: ReadSignal<SlotState>,
    customers: ReadSignal<SlotState>,
) -> impl IntoView {
    let palette = config.theme.palette();
    let fields = config.fields;

    view! {
        <div style=format!(
            "display: inline-flex; gap: 20px; background: {}; border: 1px solid {}; padding: 12px 20px; font-family: monospace; font-size: 14px;",
            palette.background, palette.border,
        )>
            <Show when=move || fields.mrr>
                <StatSlot value_id=MRR_SLOT_ID caption="MRR" state=mrr palette=palette/>
            </Show>
            <Show when=move || fields.customers>
                <StatSlot value_id=CUSTOMERS_SLOT_ID caption="MEMBERS" state=customers palette=palette/>
            </Show>
        </div>
    }
}
