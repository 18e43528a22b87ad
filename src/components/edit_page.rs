//! Edit Page
//!
//! Three-field attribute form with a single batched save.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::app::{AppContext, View};
use crate::edit::AttributeEdit;

const LABEL_STYLE: &str =
    "display: block; margin-bottom: 8px; font-weight: 600; color: #555;";
const INPUT_STYLE: &str =
    "width: 100%; padding: 12px; font-size: 16px; border: 2px solid #e5e7eb; border-radius: 8px; box-sizing: border-box;";

#[component]
pub fn EditPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let edit = AttributeEdit::new();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        // On success the app returns to the map view, which re-fetches.
        edit.save(move || ctx.navigate(View::Map));
    };

    view! {
        <div
            class="edit-page"
            style="max-width: 600px; margin: 50px auto; padding: 30px; background: #fff; border-radius: 12px; box-shadow: 0 4px 20px rgba(0,0,0,0.1);"
        >
            <h2 style="margin-bottom: 30px; color: #1a1a1a;">"Attribute Entry"</h2>

            {move || edit.notice().map(|msg| view! {
                <div
                    class="save-notice"
                    style="background: #fef2f2; border: 1px solid #fca5a5; color: #b91c1c; padding: 12px; border-radius: 8px; margin-bottom: 20px;"
                >
                    {msg}
                </div>
            })}

            <form on:submit=on_submit>
                <div style="margin-bottom: 20px;">
                    <label style=LABEL_STYLE>"Title"</label>
                    <input
                        type="text"
                        placeholder="Listing title"
                        style=INPUT_STYLE
                        prop:value=move || edit.field(0)
                        on:input=move |ev| edit.set_field(0, event_target_value(&ev))
                    />
                </div>

                <div style="margin-bottom: 20px;">
                    <label style=LABEL_STYLE>"Description"</label>
                    <textarea
                        placeholder="Listing description"
                        style=format!("{} min-height: 100px; resize: vertical;", INPUT_STYLE)
                        prop:value=move || edit.field(1)
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let textarea = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
                            edit.set_field(1, textarea.value());
                        }
                    ></textarea>
                </div>

                <div style="margin-bottom: 30px;">
                    <label style=LABEL_STYLE>"Price"</label>
                    <input
                        type="text"
                        placeholder="₺0"
                        style=INPUT_STYLE
                        prop:value=move || edit.field(2)
                        on:input=move |ev| edit.set_field(2, event_target_value(&ev))
                    />
                </div>

                <button
                    type="submit"
                    disabled=move || edit.saving()
                    style=move || format!(
                        "width: 100%; padding: 14px; background: {}; color: white; border: none; border-radius: 8px; font-size: 16px; font-weight: 600; cursor: {};",
                        if edit.saving() { "#9ca3af" } else { "#10b981" },
                        if edit.saving() { "not-allowed" } else { "pointer" },
                    )
                >
                    {move || if edit.saving() { "Saving..." } else { "Save and return to map" }}
                </button>
            </form>
        </div>
    }
}
