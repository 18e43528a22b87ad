//! Responsive Layout Selection
//!
//! Pure width-to-mode derivation plus a hook that tracks window resizes.

use leptos::prelude::*;
use send_wrapper::SendWrapper;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Panel/map arrangement, a function of viewport width alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// Narrow viewport: panel stacked above the map.
    Stacked,
    /// Wide viewport: fixed-width panel beside the map.
    SideBySide,
}

/// Widths at or below this render stacked.
pub const STACKED_MAX_WIDTH: i32 = 768;

pub fn layout_for_width(width: i32) -> LayoutMode {
    if width <= STACKED_MAX_WIDTH {
        LayoutMode::Stacked
    } else {
        LayoutMode::SideBySide
    }
}

/// Current viewport width, if a window is available.
fn viewport_width() -> Option<i32> {
    web_sys::window()?
        .inner_width()
        .ok()?
        .as_f64()
        .map(|w| w as i32)
}

/// Layout mode signal that recomputes on every window resize.
///
/// The listener is removed on cleanup so remounting the map view does not
/// accumulate subscriptions. No debounce: the derivation is O(1).
pub fn use_layout_mode() -> ReadSignal<LayoutMode> {
    let initial = viewport_width()
        .map(layout_for_width)
        .unwrap_or(LayoutMode::SideBySide);
    let (mode, set_mode) = signal(initial);

    let on_resize = Closure::<dyn FnMut()>::new(move || {
        if let Some(width) = viewport_width() {
            // A resize firing mid-teardown is dropped, not a panic.
            let _ = set_mode.try_set(layout_for_width(width));
        }
    });
    if let Some(win) = web_sys::window() {
        let _ = win
            .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
    }
    // `on_cleanup` demands `Send + Sync`; the closure never leaves the
    // main thread, it just has to cross the bound.
    let on_resize = SendWrapper::new(on_resize);
    on_cleanup(move || {
        let on_resize = on_resize.take();
        if let Some(win) = web_sys::window() {
            let _ = win
                .remove_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
        }
    });

    mode
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_widths_are_stacked() {
        assert_eq!(layout_for_width(0), LayoutMode::Stacked);
        assert_eq!(layout_for_width(320), LayoutMode::Stacked);
        assert_eq!(layout_for_width(STACKED_MAX_WIDTH), LayoutMode::Stacked);
    }

    #[test]
    fn wide_widths_are_side_by_side() {
        assert_eq!(layout_for_width(STACKED_MAX_WIDTH + 1), LayoutMode::SideBySide);
        assert_eq!(layout_for_width(1920), LayoutMode::SideBySide);
        assert_eq!(layout_for_width(i32::MAX), LayoutMode::SideBySide);
    }

    #[test]
    fn resize_listener_capture_satisfies_the_cleanup_bound() {
        // `on_cleanup` requires `Send + Sync`; a bare `Closure` is
        // neither, so it must go through `SendWrapper`.
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SendWrapper<Closure<dyn FnMut()>>>();
    }
}
