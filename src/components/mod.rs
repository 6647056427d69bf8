//! UI Components
//!
//! Leptos components for the workout screen.

mod delete_confirm_button;
mod edit_row;
mod edit_sheet;
mod gauge;
mod mode_toggle;
mod swipe_row;
mod type_selector;
mod workout_label;
mod workout_list;

pub use delete_confirm_button::DeleteConfirmButton;
pub use edit_row::EditRow;
pub use edit_sheet::EditSheet;
pub use gauge::Gauge;
pub use mode_toggle::ModeToggle;
pub use swipe_row::SwipeRow;
pub use type_selector::TypeSelector;
pub use workout_label::WorkoutLabel;
pub use workout_list::WorkoutList;
