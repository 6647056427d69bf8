//! Delete Confirm Button Component
//!
//! Edit-mode delete affordance with confirm/cancel actions.

use leptos::prelude::*;

/// Inline delete confirmation button
///
/// Shows a ⊖ button initially. Pressing it arms the row (pending removal);
/// while armed, shows "Delete" with a cancel button.
///
/// # Arguments
/// * `armed` - Whether the row is pending removal
/// * `on_request` - Arm the row
/// * `on_confirm` - Remove the row
/// * `on_cancel` - Disarm the row
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] armed: Signal<bool>,
    #[prop(into)] on_request: Callback<()>,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || !armed.get()>
            <button
                class="remove-btn"
                on:click=move |ev| {
                    ev.stop_propagation();
                    on_request.run(());
                }
            >
                "⊖"
            </button>
        </Show>
        <Show when=move || armed.get()>
            <span class="delete-confirm">
                <button
                    class="cancel-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        on_cancel.run(());
                    }
                >
                    "✗"
                </button>
                <button
                    class="confirm-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        on_confirm.run(());
                    }
                >
                    "Delete"
                </button>
            </span>
        </Show>
    }
}
