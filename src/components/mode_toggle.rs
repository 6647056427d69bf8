//! Mode Toggle Component
//!
//! Header button switching the list between browse and edit.

use leptos::prelude::*;

use crate::store::{store_toggle_mode, use_app_store, AppStateStoreFields};

#[component]
pub fn ModeToggle() -> impl IntoView {
    let store = use_app_store();
    let label = move || store.list().read().mode().toggle_label();

    view! {
        <button class="edit-btn" on:click=move |_| store_toggle_mode(&store)>
            {label}
        </button>
    }
}
