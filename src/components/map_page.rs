//! Map Page
//!
//! Loading-gated map view: info panel plus map surface, arranged by the
//! current layout mode.

use leptos::prelude::*;

use crate::components::{InfoPanel, MapSurface};
use crate::layout::{use_layout_mode, LayoutMode};
use crate::sync::{LoadState, MarkerSync};

#[component]
pub fn MapPage() -> impl IntoView {
    let sync = MarkerSync::new();
    let mode = use_layout_mode();

    // Fetch on mount. Tracks nothing, so it runs once per mount.
    Effect::new(move |_| {
        sync.initialize();
    });

    // Memoized so drag updates to the marker state do not re-render the
    // whole page; only the Loading -> Ready edge does.
    let load_state = Memo::new(move |_| sync.load_state());

    let container_style = move || {
        let direction = match mode.get() {
            LayoutMode::Stacked => "column",
            LayoutMode::SideBySide => "row",
        };
        format!(
            "display: flex; flex-direction: {}; height: 100vh; background: #f0f4f8;",
            direction
        )
    };

    view! {
        {move || match load_state.get() {
            LoadState::Loading => view! {
                <div
                    class="loading-screen"
                    style="display: flex; justify-content: center; align-items: center; height: 100vh; background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);"
                >
                    <h2 style="color: white; font-weight: 300;">"Loading..."</h2>
                </div>
            }.into_any(),
            LoadState::Ready => view! {
                <div class="map-page" style=container_style>
                    <InfoPanel sync=sync mode=mode />
                    <MapSurface sync=sync mode=mode />
                </div>
            }.into_any(),
        }}
    }
}
