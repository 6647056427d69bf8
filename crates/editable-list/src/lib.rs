//! Editable List
//!
//! In-memory list state for the workout screen:
//! - `list`: the ordered collection and its named transitions
//! - `row`: per-row swipe phases
//! - `workout`: the concrete row type and its edit draft
//!
//! Nothing here touches the DOM; the UI crate feeds gestures in as messages.

mod config;
mod entity;
mod icon;
mod list;
mod mode;
mod row;
mod workout;

pub use config::ListConfig;
pub use entity::{Entity, ListError, ListResult};
pub use icon::{Glyph, IconLookup, SymbolIcons, FALLBACK_GLYPH};
pub use list::EditableList;
pub use mode::Mode;
pub use row::RowPhase;
pub use workout::{
    is_hex_color, Workout, WorkoutDraft, WorkoutType, DEFAULT_ACCENT, MAX_INTENSITY, MAX_MINUTES,
    PRESET_COLORS,
};
