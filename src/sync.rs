//! Marker Sync Controller
//!
//! Owns the displayed marker position and label, reconciles them with the
//! remote record, and turns drag gestures into background writes.

use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::console;

use crate::api;
use crate::models::{LatLng, LocationPayload, LocationRecord};

/// Shown when the backend is unreachable or the record is malformed.
pub const FALLBACK_POSITION: LatLng = LatLng::new(41.015137, 28.97953);

/// Gates rendering of the map and panel. One-way: every initialize
/// outcome ends in `Ready`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
}

/// View-facing marker state. Plain value with explicit transitions so the
/// state machine can be exercised without a reactive runtime.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerViewState {
    pub position: LatLng,
    pub label_text: String,
    pub load_state: LoadState,
}

impl MarkerViewState {
    pub fn new() -> Self {
        Self {
            position: FALLBACK_POSITION,
            label_text: String::new(),
            load_state: LoadState::Loading,
        }
    }

    /// Fold the initial fetch result into the view state. Both arms end
    /// `Ready`: a failed fetch keeps the fallback position and an empty
    /// label so the view stays usable with the backend down.
    pub fn apply_fetch(&mut self, result: Result<LocationRecord, String>) {
        match result {
            Ok(record) => {
                self.position = record.position();
                self.label_text = record.text1;
            }
            Err(_) => {
                self.position = FALLBACK_POSITION;
                self.label_text.clear();
            }
        }
        self.load_state = LoadState::Ready;
    }

    /// Optimistic update for a finished drag. Applied before the write is
    /// even issued; never rolled back.
    pub fn apply_drag(&mut self, target: LatLng) {
        self.position = target;
    }

    /// The label bubble renders iff there is a title.
    pub fn show_label(&self) -> bool {
        !self.label_text.is_empty()
    }
}

impl Default for MarkerViewState {
    fn default() -> Self {
        Self::new()
    }
}

/// Signal-backed controller for the map view. `Copy` so event handlers
/// can capture it freely.
#[derive(Clone, Copy)]
pub struct MarkerSync {
    state: RwSignal<MarkerViewState>,
    /// Description and price. The title lives in the marker state only;
    /// `texts()` re-joins it so it cannot diverge from the label.
    details: RwSignal<[String; 2]>,
}

impl MarkerSync {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(MarkerViewState::new()),
            details: RwSignal::new(Default::default()),
        }
    }

    pub fn load_state(&self) -> LoadState {
        self.state.with(|s| s.load_state)
    }

    pub fn position(&self) -> LatLng {
        self.state.with(|s| s.position)
    }

    /// Current position without registering a reactive dependency.
    pub fn position_untracked(&self) -> LatLng {
        self.state.with_untracked(|s| s.position)
    }

    pub fn label_text(&self) -> String {
        self.state.with(|s| s.label_text.clone())
    }

    pub fn show_label(&self) -> bool {
        self.state.with(|s| s.show_label())
    }

    /// Title, description and price as fetched, for the info panel. The
    /// title is read back out of the marker state.
    pub fn texts(&self) -> [String; 3] {
        let [description, price] = self.details.get();
        [self.label_text(), description, price]
    }

    /// Fetch the record and seed position, label and panel texts.
    pub fn initialize(self) {
        spawn_local(async move {
            let result = api::fetch_record().await;
            if let Err(err) = &result {
                console::error_1(&format!("record fetch failed: {}", err).into());
            }
            self.apply_result(result);
        });
    }

    /// Fold a fetch outcome into the signals. Completions landing after
    /// the view unmounted are dropped via the `try_` writers rather than
    /// panicking on a disposed signal.
    fn apply_result(self, result: Result<LocationRecord, String>) {
        let details = match &result {
            Ok(record) => [record.text2.clone(), record.text3.clone()],
            Err(_) => Default::default(),
        };
        let _ = self.details.try_set(details);
        let _ = self.state.try_update(|s| s.apply_fetch(result));
    }

    /// Move the marker immediately, then persist in the background.
    ///
    /// The write is fire-and-forget: a failure is logged, the optimistic
    /// position is kept, and no retry is scheduled. Overlapping drags
    /// each spawn their own write with no sequencing token; the record is
    /// last-write-wins and this is a single-operator tool.
    pub fn on_drag_end(self, target: LatLng) {
        self.state.update(|s| s.apply_drag(target));
        spawn_local(async move {
            let payload = LocationPayload {
                latitude: target.lat,
                longitude: target.lng,
            };
            match api::put_location(&payload).await {
                Ok(()) => console::log_1(&"marker position saved".into()),
                Err(err) => {
                    console::error_1(&format!("position save failed: {}", err).into());
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LocationRecord;

    fn record(lat: f64, lng: f64, title: &str) -> LocationRecord {
        LocationRecord {
            latitude: lat,
            longitude: lng,
            text1: title.to_string(),
            text2: "Desc".to_string(),
            text3: "₺100".to_string(),
        }
    }

    #[test]
    fn starts_loading_at_fallback() {
        let state = MarkerViewState::new();
        assert_eq!(state.load_state, LoadState::Loading);
        assert_eq!(state.position, FALLBACK_POSITION);
        assert!(!state.show_label());
    }

    #[test]
    fn successful_fetch_seeds_position_and_label() {
        let mut state = MarkerViewState::new();
        state.apply_fetch(Ok(record(41.0, 29.0, "Shop")));
        assert_eq!(state.load_state, LoadState::Ready);
        assert_eq!(state.position, LatLng::new(41.0, 29.0));
        assert_eq!(state.label_text, "Shop");
        assert!(state.show_label());
    }

    #[test]
    fn failed_fetch_still_reaches_ready_with_defaults() {
        let mut state = MarkerViewState::new();
        state.apply_fetch(Err("connection refused".to_string()));
        assert_eq!(state.load_state, LoadState::Ready);
        assert_eq!(state.position, FALLBACK_POSITION);
        assert!(!state.show_label());
    }

    #[test]
    fn failed_fetch_after_success_clears_label() {
        // A remount whose fetch fails falls back rather than keeping
        // stale text from a previous life of the view.
        let mut state = MarkerViewState::new();
        state.apply_fetch(Ok(record(41.0, 29.0, "Shop")));
        state.apply_fetch(Err("timeout".to_string()));
        assert_eq!(state.position, FALLBACK_POSITION);
        assert_eq!(state.label_text, "");
    }

    #[test]
    fn drag_updates_position_immediately() {
        let mut state = MarkerViewState::new();
        state.apply_fetch(Ok(record(41.0, 29.0, "Shop")));
        state.apply_drag(LatLng::new(40.5, 28.5));
        assert_eq!(state.position, LatLng::new(40.5, 28.5));
        // The write outcome never touches the state: nothing to roll back.
        assert_eq!(state.load_state, LoadState::Ready);
        assert_eq!(state.label_text, "Shop");
    }

    #[test]
    fn empty_title_suppresses_label() {
        let mut state = MarkerViewState::new();
        state.apply_fetch(Ok(record(41.0, 29.0, "")));
        assert!(!state.show_label());
    }

    #[test]
    fn controller_title_has_one_source_of_truth() {
        let sync = MarkerSync::new();
        sync.apply_result(Ok(record(41.0, 29.0, "Shop")));
        // The panel title and the bubble label come from the same field.
        assert_eq!(sync.label_text(), "Shop");
        assert_eq!(
            sync.texts(),
            ["Shop".to_string(), "Desc".to_string(), "₺100".to_string()]
        );
        assert_eq!(sync.load_state(), LoadState::Ready);
        assert_eq!(sync.position_untracked(), LatLng::new(41.0, 29.0));
    }

    #[test]
    fn controller_failed_fetch_clears_all_texts() {
        let sync = MarkerSync::new();
        sync.apply_result(Ok(record(41.0, 29.0, "Shop")));
        sync.apply_result(Err("timeout".to_string()));
        assert_eq!(sync.texts(), [String::new(), String::new(), String::new()]);
        assert!(!sync.show_label());
        assert_eq!(sync.position_untracked(), FALLBACK_POSITION);
    }
}
