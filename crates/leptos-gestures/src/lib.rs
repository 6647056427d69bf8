//! Leptos Gesture Utilities
//!
//! Pointer gestures for list rows: horizontal pan (swipe) and long-press drag.
//! Uses movement thresholds to distinguish a tap from a pan or a scroll.
//! Gestures are reported through callbacks; no list state lives here.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// How a pointer-down on a row may develop
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PressKind {
    /// Horizontal pan after the movement threshold
    Swipe,
    /// Drag after holding still for the given milliseconds
    LongPress(u32),
}

/// Gesture callbacks supplied by the list
#[derive(Clone, Copy)]
pub struct GestureHandlers {
    /// (row id, dx, dy) cumulative since pointer-down
    pub on_pan: Callback<(u32, f64, f64)>,
    /// (row id, final dx); a cancelled pointer reports 0
    pub on_pan_end: Callback<(u32, f64)>,
    /// Row id; returns false when the list refuses the drag
    pub on_drag_start: Callback<u32, bool>,
    /// (row id, target slot)
    pub on_drag_move: Callback<(u32, usize)>,
    /// (row id, committed); false when the pointer was cancelled
    pub on_drag_end: Callback<(u32, bool)>,
}

/// Gesture state signals
#[derive(Clone, Copy)]
pub struct GestureSignals {
    /// Row under a pointer-down that has not become a gesture yet
    pub pending_id_read: ReadSignal<Option<u32>>,
    pub pending_id_write: WriteSignal<Option<u32>>,
    pub press_kind_read: ReadSignal<PressKind>,
    pub press_kind_write: WriteSignal<PressKind>,
    /// Row currently being swiped
    pub panning_id_read: ReadSignal<Option<u32>>,
    pub panning_id_write: WriteSignal<Option<u32>>,
    /// Row currently being dragged
    pub dragging_id_read: ReadSignal<Option<u32>>,
    pub dragging_id_write: WriteSignal<Option<u32>>,
    /// Index the dragged row started at, and the last slot reported
    pub origin_index_read: ReadSignal<usize>,
    pub origin_index_write: WriteSignal<usize>,
    pub slot_read: ReadSignal<Option<usize>>,
    pub slot_write: WriteSignal<Option<usize>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
    /// Bumped on every pointer-down so stale long-press timers do nothing
    pub press_seq_read: ReadSignal<u32>,
    pub press_seq_write: WriteSignal<u32>,
    /// True briefly after a gesture so the trailing click is ignored
    pub gesture_just_ended_read: ReadSignal<bool>,
    pub gesture_just_ended_write: WriteSignal<bool>,
}

pub fn create_gesture_signals() -> GestureSignals {
    let (pending_id_read, pending_id_write) = signal(None::<u32>);
    let (press_kind_read, press_kind_write) = signal(PressKind::Swipe);
    let (panning_id_read, panning_id_write) = signal(None::<u32>);
    let (dragging_id_read, dragging_id_write) = signal(None::<u32>);
    let (origin_index_read, origin_index_write) = signal(0usize);
    let (slot_read, slot_write) = signal(None::<usize>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    let (press_seq_read, press_seq_write) = signal(0u32);
    let (gesture_just_ended_read, gesture_just_ended_write) = signal(false);
    GestureSignals {
        pending_id_read,
        pending_id_write,
        press_kind_read,
        press_kind_write,
        panning_id_read,
        panning_id_write,
        dragging_id_read,
        dragging_id_write,
        origin_index_read,
        origin_index_write,
        slot_read,
        slot_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
        press_seq_read,
        press_seq_write,
        gesture_just_ended_read,
        gesture_just_ended_write,
    }
}

/// Slot a dragged row lands on after moving `dy` pixels from `origin`.
///
/// Not clamped at the top end; the list clamps.
pub fn drag_slot(origin: usize, dy: i32, row_height: f64) -> usize {
    let rows = (f64::from(dy) / row_height).round() as i64;
    (origin as i64 + rows).max(0) as usize
}

/// True once a press has travelled more than `threshold_px` on either axis
pub fn press_moved(dx: i32, dy: i32, threshold_px: i32) -> bool {
    dx.abs() > threshold_px || dy.abs() > threshold_px
}

fn set_timeout(ms: u32, f: impl FnOnce() + 'static) {
    if let Some(win) = web_sys::window() {
        let cb = wasm_bindgen::closure::Closure::once(f);
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.as_ref().unchecked_ref(),
            ms as i32,
        );
        cb.forget();
    }
}

/// Clear all gesture state
pub fn end_gesture(gs: &GestureSignals) {
    let was_gesture =
        gs.panning_id_read.get_untracked().is_some() || gs.dragging_id_read.get_untracked().is_some();
    gs.pending_id_write.set(None);
    gs.panning_id_write.set(None);
    gs.dragging_id_write.set(None);
    gs.slot_write.set(None);

    if was_gesture {
        gs.gesture_just_ended_write.set(true);
        let clear = gs.gesture_just_ended_write;
        set_timeout(100, move || clear.set(false));
    }
}

/// Turn a held press into a drag if the list accepts it
fn start_drag(gs: &GestureSignals, handlers: &GestureHandlers, item_id: u32, index: usize) -> bool {
    gs.pending_id_write.set(None);
    if !handlers.on_drag_start.run(item_id) {
        return false;
    }
    gs.dragging_id_write.set(Some(item_id));
    gs.slot_write.set(Some(index));
    true
}

/// Create pointerdown handler for a row
/// Records a pending press; a long press arms a timer that starts the drag
pub fn make_on_pointerdown(
    gs: GestureSignals,
    handlers: GestureHandlers,
    item_id: u32,
    index: usize,
    kind: PressKind,
) -> impl Fn(web_sys::PointerEvent) + Copy + 'static {
    move |ev: web_sys::PointerEvent| {
        if ev.button() != 0 || !ev.is_primary() {
            return;
        }
        // Ignore presses on controls inside the row
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
            if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
        }
        if gs.dragging_id_read.get_untracked().is_some() || gs.panning_id_read.get_untracked().is_some() {
            return;
        }

        gs.pending_id_write.set(Some(item_id));
        gs.press_kind_write.set(kind);
        gs.origin_index_write.set(index);
        gs.start_x_write.set(ev.client_x());
        gs.start_y_write.set(ev.client_y());
        gs.press_seq_write.update(|s| *s = s.wrapping_add(1));

        if let PressKind::LongPress(ms) = kind {
            let seq = gs.press_seq_read.get_untracked();
            set_timeout(ms, move || {
                let still_held = gs.press_seq_read.get_untracked() == seq
                    && gs.pending_id_read.get_untracked() == Some(item_id);
                if still_held {
                    start_drag(&gs, &handlers, item_id, index);
                }
            });
        }
    }
}

/// Bind document pointermove: advances pans and drags
fn bind_global_pointermove(gs: GestureSignals, handlers: GestureHandlers, row_height: f64, move_threshold_px: i32) {
    use wasm_bindgen::closure::Closure;

    let on_pointermove = Closure::<dyn FnMut(web_sys::PointerEvent)>::new(move |ev: web_sys::PointerEvent| {
        let dx = ev.client_x() - gs.start_x_read.get_untracked();
        let dy = ev.client_y() - gs.start_y_read.get_untracked();

        if let Some(id) = gs.dragging_id_read.get_untracked() {
            let slot = drag_slot(gs.origin_index_read.get_untracked(), dy, row_height);
            if gs.slot_read.get_untracked() != Some(slot) {
                gs.slot_write.set(Some(slot));
                handlers.on_drag_move.run((id, slot));
            }
            return;
        }

        if let Some(id) = gs.panning_id_read.get_untracked() {
            handlers.on_pan.run((id, f64::from(dx), f64::from(dy)));
            return;
        }

        let Some(id) = gs.pending_id_read.get_untracked() else { return; };
        if !press_moved(dx, dy, move_threshold_px) {
            return;
        }
        match gs.press_kind_read.get_untracked() {
            // Moving before the hold completes is a scroll, not a drag
            PressKind::LongPress(_) => gs.pending_id_write.set(None),
            PressKind::Swipe => {
                gs.pending_id_write.set(None);
                gs.panning_id_write.set(Some(id));
                handlers.on_pan.run((id, f64::from(dx), f64::from(dy)));
            }
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("pointermove", on_pointermove.as_ref().unchecked_ref());
        }
    }
    on_pointermove.forget();
}

/// Bind document pointerup/pointercancel: finishes pans and drags
///
/// `move_threshold_px` is the travel before a press becomes a pan or is
/// dropped as a scroll.
pub fn bind_global_pointer_handlers(
    gs: GestureSignals,
    handlers: GestureHandlers,
    row_height: f64,
    move_threshold_px: i32,
) {
    use wasm_bindgen::closure::Closure;

    let finish = move |ev: web_sys::PointerEvent, committed: bool| {
        let panning = gs.panning_id_read.get_untracked();
        let dragging = gs.dragging_id_read.get_untracked();
        let dx = ev.client_x() - gs.start_x_read.get_untracked();
        end_gesture(&gs);

        if let Some(id) = dragging {
            handlers.on_drag_end.run((id, committed));
        } else if let Some(id) = panning {
            let dx = if committed { f64::from(dx) } else { 0.0 };
            handlers.on_pan_end.run((id, dx));
        }
        // A plain press falls through to the row's click handler
    };

    let on_pointerup = Closure::<dyn FnMut(web_sys::PointerEvent)>::new(move |ev: web_sys::PointerEvent| {
        finish(ev, true);
    });
    let on_pointercancel = Closure::<dyn FnMut(web_sys::PointerEvent)>::new(move |ev: web_sys::PointerEvent| {
        finish(ev, false);
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("pointerup", on_pointerup.as_ref().unchecked_ref());
            let _ = doc.add_event_listener_with_callback("pointercancel", on_pointercancel.as_ref().unchecked_ref());
        }
    }
    on_pointerup.forget();
    on_pointercancel.forget();

    // Also bind global pointermove
    bind_global_pointermove(gs, handlers, row_height, move_threshold_px);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_slot_rounds_to_nearest_row() {
        assert_eq!(drag_slot(2, 0, 60.0), 2);
        assert_eq!(drag_slot(2, 29, 60.0), 2);
        assert_eq!(drag_slot(2, 31, 60.0), 3);
        assert_eq!(drag_slot(2, 125, 60.0), 4);
    }

    #[test]
    fn test_drag_slot_stops_at_top() {
        assert_eq!(drag_slot(1, -200, 60.0), 0);
    }

    #[test]
    fn test_press_moved_uses_given_threshold() {
        assert!(!press_moved(5, -5, 5));
        assert!(press_moved(6, 0, 5));
        assert!(!press_moved(10, 3, 12));
        assert!(press_moved(0, -13, 12));
    }

    fn handlers(accept: bool) -> GestureHandlers {
        GestureHandlers {
            on_pan: Callback::new(|_: (u32, f64, f64)| {}),
            on_pan_end: Callback::new(|_: (u32, f64)| {}),
            on_drag_start: Callback::new(move |_: u32| accept),
            on_drag_move: Callback::new(|_: (u32, usize)| {}),
            on_drag_end: Callback::new(|_: (u32, bool)| {}),
        }
    }

    #[test]
    fn test_refused_drag_leaves_no_gesture() {
        Owner::new().with(|| {
            let gs = create_gesture_signals();
            gs.pending_id_write.set(Some(7));

            assert!(!start_drag(&gs, &handlers(false), 7, 2));
            assert_eq!(gs.dragging_id_read.get_untracked(), None);
            assert_eq!(gs.pending_id_read.get_untracked(), None);
            assert_eq!(gs.slot_read.get_untracked(), None);
        });
    }

    #[test]
    fn test_accepted_drag_starts_at_origin_slot() {
        Owner::new().with(|| {
            let gs = create_gesture_signals();
            gs.pending_id_write.set(Some(7));

            assert!(start_drag(&gs, &handlers(true), 7, 2));
            assert_eq!(gs.dragging_id_read.get_untracked(), Some(7));
            assert_eq!(gs.slot_read.get_untracked(), Some(2));
        });
    }
}
