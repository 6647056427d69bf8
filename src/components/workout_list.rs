//! Workout List Component
//!
//! Renders the rows in display order, switching row type with the mode.
//! Gestures reach the list through the handlers bound in `App`.

use editable_list::{Mode, Workout};
use leptos::prelude::*;

use crate::components::{EditRow, SwipeRow};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn WorkoutList() -> impl IntoView {
    let store = use_app_store();

    // Rows rebuild only when the mode flips
    let mode = Memo::new(move |_| store.list().read().mode());
    let rows = move || {
        store
            .list()
            .read()
            .display_order()
            .into_iter()
            .cloned()
            .collect::<Vec<Workout>>()
    };

    view! {
        <div class="workout-list">
            <Show when=move || store.list().read().is_empty()>
                <p class="empty-list">"No workouts"</p>
            </Show>
            {move || {
                let mode = mode.get();
                view! {
                    <For
                        each=rows
                        key=|workout| {
                            // Display fields are part of the key so a saved edit re-renders the row
                            (
                                workout.id,
                                workout.name.clone(),
                                workout.icon_name.clone(),
                                workout.color_hex.clone(),
                            )
                        }
                        children=move |workout| match mode {
                            Mode::Browse => view! { <SwipeRow workout=workout /> }.into_any(),
                            Mode::Edit => view! { <EditRow workout=workout /> }.into_any(),
                        }
                    />
                }
            }}
        </div>
    }
}
