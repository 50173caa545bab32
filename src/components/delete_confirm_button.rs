//! Delete Confirm Button Component
//!
//! Inline delete button with confirm/cancel actions.

use leptos::prelude::*;

/// Inline delete confirmation button
///
/// Shows "削除" initially. When clicked, shows "削除?" with ✓/✗ buttons.
///
/// # Arguments
/// * `on_confirm` - Callback to execute when user confirms deletion
#[component]
pub fn DeleteConfirmButton(#[prop(into)] on_confirm: Callback<()>) -> impl IntoView {
    let (confirm_delete, set_confirm_delete) = signal(false);

    view! {
        <Show when=move || !confirm_delete.get()>
            <button class="delete-btn" on:click=move |_| set_confirm_delete.set(true)>
                "削除"
            </button>
        </Show>
        <Show when=move || confirm_delete.get()>
            <span class="delete-confirm">
                <span class="delete-confirm-text">"削除?"</span>
                <button class="confirm-btn" on:click=move |_| on_confirm.run(())>
                    "✓"
                </button>
                <button class="cancel-btn" on:click=move |_| set_confirm_delete.set(false)>
                    "✗"
                </button>
            </span>
        </Show>
    }
}
