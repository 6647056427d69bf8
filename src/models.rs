//! Frontend Models
//!
//! Bundled seed data and list configuration.

use editable_list::{EditableList, ListConfig, Workout};

const SEED_JSON: &str = include_str!("../data/workouts.json");
const CONFIG_JSON: &str = include_str!("../data/list_config.json");

/// Load the list config, falling back to defaults on a bad document
pub fn load_config() -> ListConfig {
    ListConfig::from_json(CONFIG_JSON).unwrap_or_else(|e| {
        web_sys::console::error_1(&format!("[LIST] bad list_config.json, using defaults: {}", e).into());
        ListConfig::default()
    })
}

/// Seed the workout list once at mount; an unreadable seed gives an empty list
pub fn load_workouts(config: ListConfig) -> EditableList<Workout> {
    match EditableList::from_json(SEED_JSON, config.clone()) {
        Ok(list) => {
            web_sys::console::log_1(&format!("[LIST] Loaded {} workouts", list.len()).into());
            list
        }
        Err(e) => {
            web_sys::console::error_1(&format!("[LIST] bad workouts.json: {}", e).into());
            EditableList::new(Vec::new(), config)
        }
    }
}
