use serde::{Deserialize, Serialize};

use crate::utils::display_number;

/// The public stats document, as published to the raw-content endpoint by the
/// MRR cron job. Every field is optional: the document is untrusted and the
/// widget only does presence checks, leaving placeholders for anything
/// missing. Unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatsPayload {
    #[serde(default)]
    pub mrr_cents: Option<i64>,
    #[serde(default)]
    pub mrr_dollars: Option<f64>,
    #[serde(default)]
    pub customers: Option<f64>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl StatsPayload {
    /// Display text for the MRR slot: "$" + the raw number. No currency
    /// formatting, no separators, no rounding.
    pub fn mrr_text(&self) -> Option<String> {
        self.mrr_dollars.map(|v| format!("${}", display_number(v)))
    }

    /// Display text for the customers slot: the bare number.
    pub fn customers_text(&self) -> Option<String> {
        self.customers.map(display_number)
    }
}

/// Lifecycle of one slot's displayed value. Created pending at mount,
/// transitioned at most once when the fetch settles.
///
/// Only the MRR slot ever enters `Failed`; the customers slot keeps its
/// placeholder on a failed fetch. That asymmetry (like the MEMBERS caption)
/// is inherited behavior, kept deliberately.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SlotState {
    #[default]
    Pending,
    Resolved(String),
    Failed,
}

impl SlotState {
    pub fn text(&self) -> String {
        match self {
            SlotState::Pending => "...".to_string(),
            SlotState::Resolved(value) => value.clone(),
            SlotState::Failed => "$?".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_state_display_text() {
        assert_eq!(SlotState::Pending.text(), "...");
        assert_eq!(SlotState::Resolved("$1234".into()).text(), "$1234");
        assert_eq!(SlotState::Failed.text(), "$?");
    }

    #[test]
    fn decodes_full_payload() {
        let payload: StatsPayload = serde_json::from_str(
            r#"{"mrr_cents":123400,"mrr_dollars":1234.0,"customers":56,"updated_at":"2026-08-01T00:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(payload.mrr_text().as_deref(), Some("$1234"));
        assert_eq!(payload.customers_text().as_deref(), Some("56"));
    }

    #[test]
    fn missing_fields_stay_none() {
        let payload: StatsPayload = serde_json::from_str(r#"{"customers":7}"#).unwrap();
        assert_eq!(payload.mrr_text(), None);
        assert_eq!(payload.customers_text().as_deref(), Some("7"));
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let payload: StatsPayload =
            serde_json::from_str(r#"{"mrr_dollars":99.5,"arr_dollars":1194}"#).unwrap();
        assert_eq!(payload.mrr_text().as_deref(), Some("$99.5"));
    }

    #[test]
    fn empty_document_is_all_placeholders() {
        let payload: StatsPayload = serde_json::from_str("{}").unwrap();
        assert_eq!(payload, StatsPayload::default());
        assert_eq!(payload.mrr_text(), None);
        assert_eq!(payload.customers_text(), None);
    }
}
