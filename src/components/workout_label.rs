//! Workout Label Component
//!
//! Icon badge plus name, shared by browse and edit rows.

use editable_list::{IconLookup, Workout};
use leptos::prelude::*;

use crate::context::use_list_context;

#[component]
pub fn WorkoutLabel(workout: Workout) -> impl IntoView {
    let ctx = use_list_context();
    let glyph = ctx.icons.glyph(&workout.icon_name);
    let badge_style = format!("background-color: {};", workout.accent());

    view! {
        <div class="workout-info">
            <span class="icon-badge" style=badge_style data-icon=glyph.name>
                {glyph.symbol}
            </span>
            <span class="workout-name">{workout.name}</span>
        </div>
    }
}
