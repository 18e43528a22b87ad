//! Application Shell
//!
//! Two views toggled by a signal. The map view is recreated on every
//! return, so it re-fetches the record after an edit.

use leptos::prelude::*;

use crate::components::{EditPage, MapPage};

/// Which page is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Map,
    Edit,
}

/// Navigation handle provided via context to all components.
#[derive(Clone, Copy)]
pub struct AppContext {
    set_view: WriteSignal<View>,
}

impl AppContext {
    pub fn navigate(&self, view: View) {
        self.set_view.set(view);
    }
}

#[component]
pub fn App() -> impl IntoView {
    let (view, set_view) = signal(View::Map);
    provide_context(AppContext { set_view });

    view! {
        {move || match view.get() {
            View::Map => view! { <MapPage /> }.into_any(),
            View::Edit => view! { <EditPage /> }.into_any(),
        }}
    }
}
