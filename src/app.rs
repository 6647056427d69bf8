//! Workout List App
//!
//! Root component: header with the Edit/Done toggle, the list and the
//! edit sheet.

use leptos::prelude::*;
use reactive_stores::Store;

use leptos_gestures::{bind_global_pointer_handlers, create_gesture_signals, GestureHandlers};

use crate::components::{EditSheet, ModeToggle, WorkoutList};
use crate::context::ListContext;
use crate::models;
use crate::store::{
    store_begin_drag, store_end_drag, store_reorder, store_swipe_end, store_swipe_move, AppState,
    AppStateStoreFields,
};

#[component]
pub fn App() -> impl IntoView {
    let config = models::load_config();
    let row_height = config.row_height;
    let move_threshold_px = config.drag_threshold_px;
    let long_press_ms = config.long_press_ms;
    let collapse_ms = config.collapse_ms;

    // Seeded once at mount
    let store = Store::new(AppState::new(models::load_workouts(config)));
    provide_context(store);

    let handlers = GestureHandlers {
        on_pan: Callback::new(move |(id, dx, dy): (u32, f64, f64)| store_swipe_move(&store, id, dx, dy)),
        on_pan_end: Callback::new(move |(id, dx): (u32, f64)| store_swipe_end(&store, id, dx)),
        on_drag_start: Callback::new(move |id: u32| store_begin_drag(&store, id)),
        on_drag_move: Callback::new(move |(id, slot): (u32, usize)| store_reorder(&store, id, slot)),
        on_drag_end: Callback::new(move |(_id, committed): (u32, bool)| store_end_drag(&store, committed)),
    };
    let gestures = create_gesture_signals();
    bind_global_pointer_handlers(gestures, handlers, row_height, move_threshold_px);

    provide_context(ListContext::new(gestures, handlers, long_press_ms, collapse_ms));

    view! {
        <div class="workout-screen">
            <header class="screen-header">
                <h1>"Workouts"</h1>
                <ModeToggle />
            </header>

            <WorkoutList />

            <p class="item-count">{move || format!("{} workouts", store.list().read().len())}</p>

            <EditSheet />
        </div>
    }
}
