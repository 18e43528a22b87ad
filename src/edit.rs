//! Attribute Edit Controller
//!
//! Collects the three text attributes as one draft and persists them as a
//! single batched write.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::console;

use crate::api;
use crate::models::TextsPayload;

/// How long the failure banner stays on screen.
const NOTICE_MS: u32 = 4000;

/// Field indices: title, description, price.
pub const FIELD_COUNT: usize = 3;

/// In-memory draft of the three attributes. Any string is acceptable,
/// including empty; there is no client-side validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeDraft {
    fields: [String; FIELD_COUNT],
}

impl AttributeDraft {
    pub fn field(&self, index: usize) -> &str {
        &self.fields[index]
    }

    pub fn set_field(&mut self, index: usize, value: String) {
        self.fields[index] = value;
    }

    /// All three fields in one body. Unchanged fields are sent too, which
    /// keeps the write idempotent without per-field dirty tracking.
    pub fn to_payload(&self) -> TextsPayload {
        TextsPayload {
            text1: self.fields[0].clone(),
            text2: self.fields[1].clone(),
            text3: self.fields[2].clone(),
        }
    }

    pub fn clear(&mut self) {
        self.fields = Default::default();
    }
}

/// Signal-backed controller for the edit view.
#[derive(Clone, Copy)]
pub struct AttributeEdit {
    draft: RwSignal<AttributeDraft>,
    saving: RwSignal<bool>,
    notice: RwSignal<Option<String>>,
}

impl AttributeEdit {
    pub fn new() -> Self {
        Self {
            draft: RwSignal::new(AttributeDraft::default()),
            saving: RwSignal::new(false),
            notice: RwSignal::new(None),
        }
    }

    pub fn field(&self, index: usize) -> String {
        self.draft.with(|d| d.field(index).to_string())
    }

    pub fn set_field(&self, index: usize, value: String) {
        self.draft.update(|d| d.set_field(index, value));
    }

    pub fn saving(&self) -> bool {
        self.saving.get()
    }

    pub fn notice(&self) -> Option<String> {
        self.notice.get()
    }

    /// Persist the whole draft as one write.
    ///
    /// On 2xx the draft is cleared and `on_saved` fires (the app
    /// navigates back to the map view, which re-fetches on mount). On any
    /// failure the draft is left intact for retry and a banner is shown.
    /// `saving` is cleared on every path so the button re-enables.
    pub fn save(self, on_saved: impl Fn() + 'static) {
        if self.saving.get_untracked() {
            return;
        }
        self.saving.set(true);
        let payload = self.draft.with_untracked(|d| d.to_payload());
        spawn_local(async move {
            match api::put_texts(&payload).await {
                Ok(()) => {
                    let _ = self.draft.try_update(|d| d.clear());
                    let _ = self.saving.try_set(false);
                    on_saved();
                }
                Err(err) => {
                    console::error_1(&format!("attribute save failed: {}", err).into());
                    let _ = self.saving.try_set(false);
                    self.show_notice("Save failed. Check the connection and try again.");
                }
            }
        });
    }

    fn show_notice(self, message: &str) {
        let _ = self.notice.try_set(Some(message.to_string()));
        spawn_local(async move {
            TimeoutFuture::new(NOTICE_MS).await;
            let _ = self.notice.try_set(None);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_starts_empty() {
        let draft = AttributeDraft::default();
        assert_eq!(draft.field(0), "");
        assert_eq!(draft.field(1), "");
        assert_eq!(draft.field(2), "");
    }

    #[test]
    fn set_field_is_a_plain_local_mutation() {
        let mut draft = AttributeDraft::default();
        draft.set_field(0, "A".to_string());
        draft.set_field(2, "₺50".to_string());
        assert_eq!(draft.field(0), "A");
        assert_eq!(draft.field(1), "");
        assert_eq!(draft.field(2), "₺50");
    }

    #[test]
    fn payload_carries_all_three_fields() {
        let mut draft = AttributeDraft::default();
        draft.set_field(0, "A".to_string());
        draft.set_field(1, "B".to_string());
        draft.set_field(2, "₺50".to_string());
        let payload = draft.to_payload();
        assert_eq!(payload.text1, "A");
        assert_eq!(payload.text2, "B");
        assert_eq!(payload.text3, "₺50");
    }

    #[test]
    fn unchanged_draft_produces_identical_payloads() {
        // Two saves of the same draft send byte-identical bodies.
        let mut draft = AttributeDraft::default();
        draft.set_field(0, "A".to_string());
        let first = serde_json::to_string(&draft.to_payload()).unwrap();
        let second = serde_json::to_string(&draft.to_payload()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn clear_resets_every_field() {
        let mut draft = AttributeDraft::default();
        draft.set_field(0, "A".to_string());
        draft.set_field(1, "B".to_string());
        draft.clear();
        assert_eq!(draft, AttributeDraft::default());
    }

    #[test]
    fn empty_fields_are_sent_as_empty_strings() {
        let payload = AttributeDraft::default().to_payload();
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"text1": "", "text2": "", "text3": ""})
        );
    }
}
