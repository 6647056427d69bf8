//! Swipe Row Component
//!
//! Browse-mode row: swipe left to reveal the delete button, press it to
//! collapse and remove the row. A plain tap opens the edit sheet.

use editable_list::{RowPhase, Workout};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos_gestures::{make_on_pointerdown, PressKind};

use crate::components::WorkoutLabel;
use crate::context::use_list_context;
use crate::store::{
    store_begin_removal, store_cancel_delete, store_finish_removal, store_open_sheet, use_app_store,
    AppStateStoreFields,
};

#[component]
pub fn SwipeRow(workout: Workout) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_list_context();
    let id = workout.id;

    let (row_height, button_width, threshold) = {
        let list = store.list().read_untracked();
        let config = list.config();
        (config.row_height, config.delete_button_width, config.reveal_threshold())
    };

    let phase = move || store.list().read().row_phase(id);
    let offset = move || store.list().read().row_offset(id);

    // Swipe rows never drag, so the index is unused
    let on_pointerdown = make_on_pointerdown(ctx.gestures, ctx.handlers, id, 0, PressKind::Swipe);

    let on_delete = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        if store_begin_removal(&store, id) {
            Timeout::new(ctx.collapse_ms(), move || store_finish_removal(&store, id)).forget();
        }
    };

    let on_click = move |_| {
        if ctx.gesture_just_ended() {
            return;
        }
        match store.list().read_untracked().row_phase(id) {
            RowPhase::Resting => store_open_sheet(&store, id),
            // Tapping an open row closes it
            RowPhase::Revealed => store_cancel_delete(&store, id),
            _ => {}
        }
    };

    let container_style = move || {
        let collapse = format!("transition: height {ms}ms, opacity {ms}ms;", ms = ctx.collapse_ms());
        if phase() == RowPhase::Removing {
            format!("height: 0px; opacity: 0; {}", collapse)
        } else {
            format!("height: {}px; opacity: 1; {}", row_height, collapse)
        }
    };

    let row_style = move || {
        let transform = match phase() {
            RowPhase::Removing => "translateX(-100%)".to_string(),
            _ => format!("translateX({}px)", offset()),
        };
        // Follow the finger without easing while tracking
        let transition = if phase().is_tracking() { "none" } else { "transform 200ms ease-out" };
        format!("transform: {}; transition: {}; touch-action: pan-y;", transform, transition)
    };

    let delete_style = move || {
        let opacity = if offset() < -threshold { 1.0 } else { 0.5 };
        format!("width: {}px; opacity: {};", button_width, opacity)
    };

    view! {
        <div class="row-container" style=container_style>
            <div class="delete-container" style=delete_style>
                <button class="delete-button" on:click=on_delete>"🗑"</button>
            </div>
            <div
                class="row"
                style=row_style
                on:pointerdown=on_pointerdown
                on:click=on_click
            >
                <WorkoutLabel workout=workout />
            </div>
        </div>
    }
}
