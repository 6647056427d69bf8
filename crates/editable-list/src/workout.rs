//! Workout Entity
//!
//! The row type shown on the workout screen, plus the draft the edit sheet
//! works on.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::Entity;

/// Accent used when a record carries an unusable color
pub const DEFAULT_ACCENT: &str = "#007AFF";

/// Swatches offered by the edit sheet
pub const PRESET_COLORS: &[&str] = &[
    "#FF2D55", "#FF9500", "#FFCC00", "#4CD964", "#5AC8FA", "#007AFF", "#5856D6", "#AF52DE",
];

pub const MAX_MINUTES: u32 = 120;
pub const MAX_INTENSITY: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WorkoutType {
    Cardio,
    Strength,
    #[default]
    #[serde(other)]
    Other,
}

impl WorkoutType {
    pub const ALL: [WorkoutType; 3] = [WorkoutType::Cardio, WorkoutType::Strength, WorkoutType::Other];

    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutType::Cardio => "Cardio",
            WorkoutType::Strength => "Strength",
            WorkoutType::Other => "Other",
        }
    }
}

/// A workout row (matches the bundled seed file)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    pub id: u32,
    /// Display label
    pub name: String,
    /// Abstract icon reference (SF Symbol name)
    pub icon_name: String,
    #[serde(default)]
    pub next_scheduled_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub workout_type: WorkoutType,
    #[serde(default)]
    pub needs_cooldown: bool,
    #[serde(default)]
    pub reps: String,
    #[serde(default)]
    pub minutes: u32,
    #[serde(default)]
    pub intensity: u32,
    pub color_hex: String,
}

impl Workout {
    pub fn label(&self) -> &str {
        &self.name
    }

    /// The accent color, or the default when `color_hex` is not a hex color.
    pub fn accent(&self) -> &str {
        if is_hex_color(&self.color_hex) {
            &self.color_hex
        } else {
            DEFAULT_ACCENT
        }
    }
}

impl Entity for Workout {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }
}

/// `#RGB` or `#RRGGBB`
pub fn is_hex_color(s: &str) -> bool {
    match s.strip_prefix('#') {
        Some(digits) => {
            matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
        }
        None => false,
    }
}

/// Private copy of a workout under edit.
///
/// The list's record is untouched until the caller takes `finish()` and
/// hands it to `EditableList::replace_item`.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutDraft {
    original: Workout,
    edited: Workout,
}

impl WorkoutDraft {
    pub fn new(workout: &Workout) -> Self {
        Self {
            original: workout.clone(),
            edited: workout.clone(),
        }
    }

    pub fn workout(&self) -> &Workout {
        &self.edited
    }

    pub fn id(&self) -> u32 {
        self.edited.id
    }

    pub fn is_changed(&self) -> bool {
        self.original != self.edited
    }

    pub fn set_workout_type(&mut self, workout_type: WorkoutType) {
        self.edited.workout_type = workout_type;
    }

    /// Ignores anything that is not a hex color.
    pub fn set_color(&mut self, hex: &str) {
        if is_hex_color(hex) {
            self.edited.color_hex = hex.to_uppercase();
        }
    }

    pub fn set_minutes(&mut self, minutes: u32) {
        self.edited.minutes = minutes.min(MAX_MINUTES);
    }

    pub fn set_intensity(&mut self, intensity: u32) {
        self.edited.intensity = intensity.min(MAX_INTENSITY);
    }

    /// Stepper for the minutes gauge; saturates instead of wrapping.
    pub fn step_minutes(&mut self, delta: i32) {
        self.set_minutes(self.edited.minutes.saturating_add_signed(delta));
    }

    pub fn step_intensity(&mut self, delta: i32) {
        self.set_intensity(self.edited.intensity.saturating_add_signed(delta));
    }

    pub fn set_needs_cooldown(&mut self, needs_cooldown: bool) {
        self.edited.needs_cooldown = needs_cooldown;
    }

    pub fn set_reps(&mut self, reps: String) {
        self.edited.reps = reps;
    }

    pub fn set_next_scheduled(&mut self, at: Option<DateTime<Utc>>) {
        self.edited.next_scheduled_time = at;
    }

    /// Gauge fill for minutes, 0.0..=1.0
    pub fn minutes_progress(&self) -> f64 {
        f64::from(self.edited.minutes.min(MAX_MINUTES)) / f64::from(MAX_MINUTES)
    }

    /// Gauge fill for intensity, 0.0..=1.0
    pub fn intensity_progress(&self) -> f64 {
        f64::from(self.edited.intensity.min(MAX_INTENSITY)) / f64::from(MAX_INTENSITY)
    }

    pub fn finish(self) -> Workout {
        self.edited
    }
}
