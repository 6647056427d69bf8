//! Type Selector Component
//!
//! Segmented control for the workout type.

use editable_list::WorkoutType;
use leptos::prelude::*;

#[component]
pub fn TypeSelector(
    #[prop(into)] current_type: Signal<WorkoutType>,
    #[prop(into)] accent: Signal<String>,
    on_change: impl Fn(WorkoutType) + Copy + 'static,
) -> impl IntoView {
    view! {
        <div class="segmented-control">
            {WorkoutType::ALL.iter().map(|workout_type| {
                let workout_type = *workout_type;
                let is_selected = move || current_type.get() == workout_type;
                let style = move || if is_selected() {
                    let accent = accent.get();
                    format!("border-color: {accent}; color: {accent}; background-color: {accent}20;")
                } else {
                    String::new()
                };
                view! {
                    <button
                        class=move || if is_selected() { "segment-btn active" } else { "segment-btn" }
                        style=style
                        on:click=move |_| on_change(workout_type)
                    >
                        {workout_type.as_str()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
