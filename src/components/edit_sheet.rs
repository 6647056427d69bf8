//! Edit Sheet Component
//!
//! Bottom sheet editing a copy of the selected workout. Nothing reaches the
//! list until Save.

use chrono::{DateTime, NaiveDateTime, Utc};
use editable_list::{WorkoutDraft, PRESET_COLORS};
use leptos::prelude::*;

use crate::components::{Gauge, TypeSelector};
use crate::store::{
    store_close_sheet, store_edit_draft, store_save_sheet, use_app_store, AppStateStoreFields,
};

const STEP: i32 = 5;
const DATETIME_INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";

fn to_input_value(at: Option<DateTime<Utc>>) -> String {
    at.map(|t| t.format(DATETIME_INPUT_FORMAT).to_string()).unwrap_or_default()
}

fn from_input_value(value: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(value, DATETIME_INPUT_FORMAT)
        .ok()
        .map(|naive| naive.and_utc())
}

#[component]
pub fn EditSheet() -> impl IntoView {
    let store = use_app_store();

    let is_open = move || store.editing().read().is_some();
    // Reads the open draft; only called while the sheet is shown
    let draft_with = move |f: fn(&WorkoutDraft) -> String| {
        store.editing().read().as_ref().map(f).unwrap_or_default()
    };

    let name = move || draft_with(|d| d.workout().name.clone());
    let accent = Signal::derive(move || draft_with(|d| d.workout().accent().to_string()));
    let minutes = Signal::derive(move || draft_with(|d| d.workout().minutes.to_string()));
    let intensity = Signal::derive(move || draft_with(|d| format!("{}%", d.workout().intensity)));
    let reps = move || draft_with(|d| d.workout().reps.clone());
    let scheduled = move || draft_with(|d| to_input_value(d.workout().next_scheduled_time));

    let read_draft = move || store.editing().read().clone();
    let minutes_progress = Signal::derive(move || read_draft().map(|d| d.minutes_progress()).unwrap_or(0.0));
    let intensity_progress = Signal::derive(move || read_draft().map(|d| d.intensity_progress()).unwrap_or(0.0));
    let workout_type = Signal::derive(move || read_draft().map(|d| d.workout().workout_type).unwrap_or_default());
    let needs_cooldown = move || read_draft().map(|d| d.workout().needs_cooldown).unwrap_or(false);
    let is_changed = move || read_draft().map(|d| d.is_changed()).unwrap_or(false);

    view! {
        <Show when=is_open>
            <div class="sheet-backdrop" on:click=move |_| store_close_sheet(&store)></div>
            <div class="bottom-sheet">
                <div class="sheet-indicator"></div>
                <h2 class="sheet-title">{name}</h2>

                <section class="sheet-section">
                    <h3>"Duration & Intensity"</h3>
                    <div class="gauges">
                        <div class="gauge-item">
                            <Gauge progress=minutes_progress text=minutes color=accent label="Minutes" />
                            <div class="adjust-buttons">
                                <button on:click=move |_| store_edit_draft(&store, |d| d.step_minutes(-STEP))>"−"</button>
                                <button on:click=move |_| store_edit_draft(&store, |d| d.step_minutes(STEP))>"+"</button>
                            </div>
                        </div>
                        <div class="gauge-item">
                            <Gauge progress=intensity_progress text=intensity color=accent label="Intensity" />
                            <div class="adjust-buttons">
                                <button on:click=move |_| store_edit_draft(&store, |d| d.step_intensity(-STEP))>"−"</button>
                                <button on:click=move |_| store_edit_draft(&store, |d| d.step_intensity(STEP))>"+"</button>
                            </div>
                        </div>
                    </div>
                </section>

                <section class="sheet-section">
                    <h3>"Next Scheduled Time"</h3>
                    <input
                        type="datetime-local"
                        prop:value=scheduled
                        on:change=move |ev| {
                            let at = from_input_value(&event_target_value(&ev));
                            store_edit_draft(&store, |d| d.set_next_scheduled(at));
                        }
                    />
                </section>

                <section class="sheet-section">
                    <h3>"Workout Type"</h3>
                    <TypeSelector
                        current_type=workout_type
                        accent=accent
                        on_change=move |t| store_edit_draft(&store, |d| d.set_workout_type(t))
                    />
                </section>

                <section class="sheet-section">
                    <h3>"Options"</h3>
                    <label class="option-row">
                        <span>"Reps (if applicable)"</span>
                        <input
                            type="text"
                            placeholder="e.g. 3x10"
                            prop:value=reps
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                store_edit_draft(&store, |d| d.set_reps(value));
                            }
                        />
                    </label>
                    <label class="option-row">
                        <span>"Needs Cooldown"</span>
                        <input
                            type="checkbox"
                            prop:checked=needs_cooldown
                            on:change=move |ev| {
                                let checked = event_target_checked(&ev);
                                store_edit_draft(&store, |d| d.set_needs_cooldown(checked));
                            }
                        />
                    </label>
                </section>

                <section class="sheet-section">
                    <h3>"Color"</h3>
                    <div class="swatches">
                        {PRESET_COLORS.iter().copied().map(|hex| {
                            let selected = move || accent.get().eq_ignore_ascii_case(hex);
                            view! {
                                <button
                                    class=move || if selected() { "swatch selected" } else { "swatch" }
                                    style=format!("background-color: {};", hex)
                                    on:click=move |_| store_edit_draft(&store, |d| d.set_color(hex))
                                ></button>
                            }
                        }).collect_view()}
                    </div>
                </section>

                <div class="sheet-actions">
                    <button class="cancel-btn" on:click=move |_| store_close_sheet(&store)>"Close"</button>
                    <button
                        class="save-btn"
                        style=move || format!("background-color: {};", accent.get())
                        disabled=move || !is_changed()
                        on:click=move |_| store_save_sheet(&store)
                    >
                        "Save Changes"
                    </button>
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_datetime_input_round_trip() {
        let at = from_input_value("2025-03-10T07:30");
        assert!(at.is_some());
        assert_eq!(to_input_value(at), "2025-03-10T07:30");
    }

    #[test]
    fn test_empty_datetime_input_clears() {
        assert_eq!(from_input_value(""), None);
        assert_eq!(to_input_value(None), "");
    }
}
