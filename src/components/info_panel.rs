//! Info Panel
//!
//! Left/top panel showing the three attributes, with skeleton blocks for
//! missing title and description and a price card only when one is set.

use leptos::prelude::*;

use crate::app::{AppContext, View};
use crate::layout::LayoutMode;
use crate::sync::MarkerSync;

#[component]
pub fn InfoPanel(sync: MarkerSync, mode: ReadSignal<LayoutMode>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let title = move || sync.texts()[0].clone();
    let description = move || sync.texts()[1].clone();
    let price = move || sync.texts()[2].clone();

    let panel_style = move || match mode.get() {
        LayoutMode::Stacked => {
            "width: 100%; max-height: 50vh; background: #ffffff; padding: 16px; \
             display: flex; flex-direction: column; overflow: auto; \
             box-shadow: 0 4px 24px rgba(0,0,0,0.08);"
        }
        LayoutMode::SideBySide => {
            "width: 420px; max-height: 100vh; background: #ffffff; padding: 32px; \
             display: flex; flex-direction: column; overflow: auto; \
             box-shadow: 4px 0 24px rgba(0,0,0,0.08);"
        }
    };

    view! {
        <div class="info-panel" style=panel_style>
            <div
                class="panel-header"
                style="display: flex; justify-content: space-between; align-items: center; margin-bottom: 16px; padding-bottom: 12px; border-bottom: 2px solid #e5e7eb;"
            >
                <div>
                    <h1 style="margin: 0; font-size: 20px; font-weight: 700; color: #1f2937;">
                        "Business Map"
                    </h1>
                    <p style="margin: 0; font-size: 12px; color: #6b7280;">"Location panel"</p>
                </div>
                <button
                    class="edit-btn"
                    style="padding: 8px 16px; background: #4285f4; color: white; border: none; border-radius: 8px; cursor: pointer; font-weight: 600;"
                    on:click=move |_| ctx.navigate(View::Edit)
                >
                    "Edit"
                </button>
            </div>

            <div
                class="info-card"
                style="background: #ffffff; border-radius: 16px; padding: 20px; flex-grow: 1; border: 1px solid #e5e7eb; box-shadow: 0 4px 16px rgba(0,0,0,0.06);"
            >
                <div
                    class="location-badge"
                    style="display: inline-flex; align-items: center; gap: 6px; background: #4285f4; color: white; padding: 6px 14px; border-radius: 20px; font-size: 11px; font-weight: 700; margin-bottom: 16px;"
                >
                    "📍 Business location"
                </div>

                {move || {
                    let text = title();
                    if text.is_empty() {
                        // Skeleton block while no title is set
                        view! {
                            <div style="height: 32px; background: #f3f4f6; border-radius: 8px; margin-bottom: 12px;"></div>
                        }.into_any()
                    } else {
                        view! {
                            <h2 style="margin: 0 0 12px 0; font-size: 26px; font-weight: 700; color: #111827;">
                                {text}
                            </h2>
                        }.into_any()
                    }
                }}

                {move || {
                    let text = description();
                    if text.is_empty() {
                        view! {
                            <div>
                                <div style="height: 14px; background: #f3f4f6; border-radius: 6px; margin-bottom: 6px;"></div>
                                <div style="height: 14px; background: #f3f4f6; border-radius: 6px; width: 80%;"></div>
                            </div>
                        }.into_any()
                    } else {
                        view! {
                            <p style="margin: 0 0 16px 0; color: #4b5563; line-height: 1.6; font-size: 15px;">
                                {text}
                            </p>
                        }.into_any()
                    }
                }}

                // Price card only renders when a price is set
                {move || {
                    let text = price();
                    (!text.is_empty()).then(|| view! {
                        <div
                            class="price-card"
                            style="background: #f0fdf4; border: 2px solid #86efac; border-radius: 14px; padding: 20px; margin-top: 24px;"
                        >
                            <div style="font-size: 11px; letter-spacing: 1px; color: #166534; font-weight: 700; margin-bottom: 6px;">
                                "PRICE"
                            </div>
                            <div style="font-size: 32px; font-weight: 800; color: #15803d;">
                                {text}
                            </div>
                        </div>
                    })
                }}
            </div>

            <div
                class="panel-footer"
                style="text-align: center; margin-top: 16px; padding: 12px 0; font-size: 12px; color: #9ca3af; border-top: 1px solid #e5e7eb;"
            >
                "📍 Placecard"
            </div>
        </div>
    }
}
