//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! Components never touch the list directly; they call the helpers below,
//! each of which runs one named transition on the list.

use leptos::prelude::*;
use reactive_stores::Store;

use editable_list::{EditableList, ListError, RowPhase, Workout, WorkoutDraft};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Workout rows and their gesture state
    pub list: EditableList<Workout>,
    /// Draft open in the edit sheet, if any
    pub editing: Option<WorkoutDraft>,
}

impl AppState {
    pub fn new(list: EditableList<Workout>) -> Self {
        Self { list, editing: None }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

fn log_ignored(tag: &str, op: &str, err: &ListError) {
    web_sys::console::log_1(&format!("[{}] {} ignored: {}", tag, op, err).into());
}

// ========================
// Mode
// ========================

pub fn store_toggle_mode(store: &AppStore) {
    let mode = store.list().write().toggle_mode();
    web_sys::console::log_1(&format!("[LIST] mode -> {:?}", mode).into());
}

// ========================
// Drag reorder
// ========================

/// Start a drag; returns false if the list refused it
pub fn store_begin_drag(store: &AppStore, id: u32) -> bool {
    match store.list().write().begin_drag(id) {
        Ok(()) => true,
        Err(e) => {
            log_ignored("DRAG", "begin_drag", &e);
            false
        }
    }
}

pub fn store_reorder(store: &AppStore, id: u32, slot: usize) {
    if let Err(e) = store.list().write().reorder(id, slot) {
        log_ignored("DRAG", "reorder", &e);
    }
}

/// Commit or discard the pending order
pub fn store_end_drag(store: &AppStore, committed: bool) {
    let result = if committed {
        store.list().write().end_drag()
    } else {
        store.list().write().cancel_drag()
    };
    if let Err(e) = result {
        log_ignored("DRAG", "end_drag", &e);
    }
}

// ========================
// Swipe
// ========================

pub fn store_swipe_move(store: &AppStore, id: u32, dx: f64, dy: f64) {
    if let Err(e) = store.list().write().swipe_move(id, dx, dy) {
        log_ignored("SWIPE", "swipe_move", &e);
    }
}

pub fn store_swipe_end(store: &AppStore, id: u32, dx: f64) {
    match store.list().write().swipe_end(id, dx) {
        Ok(RowPhase::Revealed) => {
            web_sys::console::log_1(&format!("[SWIPE] row {} revealed", id).into());
        }
        Ok(_) => {}
        Err(e) => log_ignored("SWIPE", "swipe_end", &e),
    }
}

// ========================
// Deletion
// ========================

pub fn store_request_delete(store: &AppStore, id: u32) {
    if let Err(e) = store.list().write().request_delete(id) {
        log_ignored("LIST", "request_delete", &e);
    }
}

pub fn store_cancel_delete(store: &AppStore, id: u32) {
    if let Err(e) = store.list().write().cancel_delete(id) {
        log_ignored("LIST", "cancel_delete", &e);
    }
}

/// Start the collapse; returns false if the row was not armed
pub fn store_begin_removal(store: &AppStore, id: u32) -> bool {
    match store.list().write().begin_removal(id) {
        Ok(()) => true,
        Err(e) => {
            log_ignored("LIST", "begin_removal", &e);
            false
        }
    }
}

/// Collapse animation finished
pub fn store_finish_removal(store: &AppStore, id: u32) {
    match store.list().write().finish_removal(id) {
        Ok(removed) => {
            web_sys::console::log_1(&format!("[LIST] removed {} ({})", removed.id, removed.name).into());
            close_sheet_for(store, id);
        }
        Err(e) => log_ignored("LIST", "finish_removal", &e),
    }
}

pub fn store_confirm_delete(store: &AppStore, id: u32) {
    match store.list().write().confirm_delete(id) {
        Ok(removed) => {
            web_sys::console::log_1(&format!("[LIST] removed {} ({})", removed.id, removed.name).into());
            close_sheet_for(store, id);
        }
        Err(e) => log_ignored("LIST", "confirm_delete", &e),
    }
}

fn close_sheet_for(store: &AppStore, id: u32) {
    let open_on_removed = store.editing().read_untracked().as_ref().map(WorkoutDraft::id) == Some(id);
    if open_on_removed {
        store.editing().set(None);
    }
}

// ========================
// Edit sheet
// ========================

/// Open the sheet on a copy of `id`; no-op if the row is gone
pub fn store_open_sheet(store: &AppStore, id: u32) {
    let draft = store.list().read_untracked().get(id).map(WorkoutDraft::new);
    match draft {
        Some(draft) => store.editing().set(Some(draft)),
        None => web_sys::console::log_1(&format!("[SHEET] open ignored: no workout {}", id).into()),
    }
}

pub fn store_close_sheet(store: &AppStore) {
    store.editing().set(None);
}

/// Apply an edit to the open draft; no-op when the sheet is closed
pub fn store_edit_draft(store: &AppStore, edit: impl FnOnce(&mut WorkoutDraft)) {
    if let Some(draft) = store.editing().write().as_mut() {
        edit(draft);
    }
}

/// Write the draft back into the list and close the sheet
pub fn store_save_sheet(store: &AppStore) {
    let Some(draft) = store.editing().write().take() else {
        return;
    };
    if let Err(e) = store.list().write().replace_item(draft.finish()) {
        log_ignored("SHEET", "save", &e);
    }
}
