//! Map Surface
//!
//! Fixed-zoom slippy layer with the single draggable marker and its label
//! bubble. The viewport centers on the position the record loaded with;
//! drags move the marker, not the map. Gesture tracking uses
//! document-level mouse listeners so a fast drag that leaves the marker
//! keeps working; both listeners are removed on cleanup.

use leptos::prelude::*;
use send_wrapper::SendWrapper;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::geo::{project, tile_at, tile_count, tile_url, unproject, WorldPx, TILE_SIZE};
use crate::layout::LayoutMode;
use crate::sync::MarkerSync;

const MAP_ZOOM: u8 = 13;

/// Tiles rendered either side of the center tile. 9x7 covers a 2304px
/// wide viewport without measuring the container.
const TILE_SPAN_X: i32 = 4;
const TILE_SPAN_Y: i32 = 3;

const MARKER_ICON_URL: &str = "https://unpkg.com/leaflet@1.9.4/dist/images/marker-icon.png";

/// An in-progress marker drag, in client and world pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
struct DragGesture {
    start_x: i32,
    start_y: i32,
    origin: WorldPx,
    current: WorldPx,
}

#[component]
pub fn MapSurface(sync: MarkerSync, mode: ReadSignal<LayoutMode>) -> impl IntoView {
    let center_px = project(sync.position_untracked(), MAP_ZOOM);
    let (center_tx, center_ty) = tile_at(center_px);

    let (drag, set_drag) = signal(None::<DragGesture>);

    // Displayed marker position: a gesture in progress wins over the
    // synced position.
    let marker_px = move || {
        drag.get()
            .map(|d| d.current)
            .unwrap_or_else(|| project(sync.position(), MAP_ZOOM))
    };

    let on_marker_mousedown = move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        ev.prevent_default();
        let origin = project(sync.position_untracked(), MAP_ZOOM);
        set_drag.set(Some(DragGesture {
            start_x: ev.client_x(),
            start_y: ev.client_y(),
            origin,
            current: origin,
        }));
    };

    let on_mousemove =
        Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
            if drag.get_untracked().is_none() {
                return;
            }
            let _ = set_drag.try_update(|d| {
                if let Some(d) = d {
                    d.current = d.origin.offset(
                        f64::from(ev.client_x() - d.start_x),
                        f64::from(ev.client_y() - d.start_y),
                    );
                }
            });
        });
    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_| {
        if let Some(gesture) = drag.get_untracked() {
            let _ = set_drag.try_set(None);
            // Optimistic: the controller moves the marker now and
            // persists in the background.
            sync.on_drag_end(unproject(gesture.current, MAP_ZOOM));
        }
    });
    if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
        let _ = doc
            .add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
        let _ =
            doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
    }
    // `on_cleanup` demands `Send + Sync`; the closures stay on the main
    // thread and only need to cross the bound.
    let on_mousemove = SendWrapper::new(on_mousemove);
    let on_mouseup = SendWrapper::new(on_mouseup);
    on_cleanup(move || {
        let on_mousemove = on_mousemove.take();
        let on_mouseup = on_mouseup.take();
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            let _ = doc.remove_event_listener_with_callback(
                "mousemove",
                on_mousemove.as_ref().unchecked_ref(),
            );
            let _ = doc.remove_event_listener_with_callback(
                "mouseup",
                on_mouseup.as_ref().unchecked_ref(),
            );
        }
    });

    // Static tile grid around the load-time center.
    let tiles = (-TILE_SPAN_X..=TILE_SPAN_X)
        .flat_map(|dx| (-TILE_SPAN_Y..=TILE_SPAN_Y).map(move |dy| (center_tx + dx, center_ty + dy)))
        .filter(|&(_, ty)| ty >= 0 && ty < tile_count(MAP_ZOOM))
        .map(|(tx, ty)| {
            let left = f64::from(tx) * TILE_SIZE - center_px.x;
            let top = f64::from(ty) * TILE_SIZE - center_px.y;
            view! {
                <img
                    class="map-tile"
                    src=tile_url(tx, ty, MAP_ZOOM)
                    style=format!(
                        "position: absolute; left: {}px; top: {}px; width: 256px; height: 256px; user-select: none; pointer-events: none;",
                        left, top
                    )
                    draggable="false"
                    alt=""
                />
            }
        })
        .collect_view();

    let marker_style = move || {
        let px = marker_px();
        let grabbing = drag.get().is_some();
        format!(
            "position: absolute; left: {}px; top: {}px; transform: translate(-50%, -100%); cursor: {}; z-index: 10;",
            px.x - center_px.x,
            px.y - center_px.y,
            if grabbing { "grabbing" } else { "grab" }
        )
    };

    let surface_style = move || {
        let height = match mode.get() {
            LayoutMode::Stacked => "50vh",
            LayoutMode::SideBySide => "100vh",
        };
        format!(
            "position: relative; overflow: hidden; flex: 1; height: {}; background: #dde8f0;",
            height
        )
    };

    let label = move || sync.label_text();

    view! {
        <div class="map-surface" style=surface_style>
            <div class="map-origin" style="position: absolute; left: 50%; top: 50%;">
                {tiles}
                <div class="map-marker" style=marker_style on:mousedown=on_marker_mousedown>
                    {move || {
                        let text = label();
                        sync.show_label().then(|| view! {
                            <div
                                class="marker-bubble"
                                style="position: absolute; bottom: 47px; left: 50%; transform: translateX(-50%); background: #ffffff; padding: 8px 14px; border-radius: 10px; border: 2px solid #4285f4; box-shadow: 0 6px 20px rgba(0,0,0,0.15); font-size: 14px; font-weight: 700; color: #1f2937; white-space: nowrap;"
                            >
                                {format!("📍 {}", text)}
                            </div>
                        })
                    }}
                    <img
                        src=MARKER_ICON_URL
                        draggable="false"
                        style="width: 25px; height: 41px; user-select: none;"
                        alt="marker"
                    />
                </div>
            </div>
            <div
                class="map-attribution"
                style="position: absolute; right: 4px; bottom: 2px; font-size: 11px; color: #555; background: rgba(255,255,255,0.7); padding: 0 4px; z-index: 11;"
            >
                "© OpenStreetMap contributors"
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gesture_listener_captures_satisfy_the_cleanup_bound() {
        // Same constraint as the resize listener: `on_cleanup` requires
        // `Send + Sync`, which the wrapped closures provide.
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SendWrapper<Closure<dyn FnMut(web_sys::MouseEvent)>>>();
    }
}
