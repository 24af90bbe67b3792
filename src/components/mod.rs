pub mod stat_slot;
pub mod stats_widget;

pub use stat_slot::StatSlot;
pub use stats_widget::{CUSTOMERS_SLOT_ID, MRR_SLOT_ID, StatsWidget};
