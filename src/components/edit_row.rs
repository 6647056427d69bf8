//! Edit Row Component
//!
//! Edit-mode row: long-press anywhere on it to drag, or use the delete
//! affordance on the left.

use editable_list::Workout;
use leptos::prelude::*;
use leptos_gestures::make_on_pointerdown;

use crate::components::{DeleteConfirmButton, WorkoutLabel};
use crate::context::use_list_context;
use crate::store::{
    store_cancel_delete, store_confirm_delete, store_request_delete, use_app_store, AppStateStoreFields,
};

#[component]
pub fn EditRow(workout: Workout) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_list_context();
    let id = workout.id;

    let is_dragging = move || store.list().read().dragging() == Some(id);
    let armed = Signal::derive(move || store.list().read().row_phase(id).is_pending_removal());

    // Rows move during a drag, so the starting index is looked up at press time
    let on_pointerdown = move |ev: web_sys::PointerEvent| {
        let (index, kind) = {
            let list = store.list().read_untracked();
            let index = list.display_order().iter().position(|w| w.id == id);
            (index, ctx.press_kind(list.mode()))
        };
        if let Some(index) = index {
            make_on_pointerdown(ctx.gestures, ctx.handlers, id, index, kind)(ev);
        }
    };

    let row_class = move || {
        let mut c = String::from("row edit-row");
        if is_dragging() { c.push_str(" dragging"); }
        if armed.get() { c.push_str(" armed"); }
        c
    };

    view! {
        <div class=row_class style="touch-action: none;" on:pointerdown=on_pointerdown>
            // Hidden while this row is being dragged
            <Show when=move || !is_dragging()>
                <DeleteConfirmButton
                    armed=armed
                    on_request=move |_| store_request_delete(&store, id)
                    on_confirm=move |_| store_confirm_delete(&store, id)
                    on_cancel=move |_| store_cancel_delete(&store, id)
                />
            </Show>
            <WorkoutLabel workout=workout />
            <span class="drag-handle">"☰"</span>
        </div>
    }
}
