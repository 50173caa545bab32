//! Item Row Component
//!
//! Read-only view of one item with edit/delete actions.

use leptos::prelude::*;

use crate::components::DeleteConfirmButton;
use crate::models::ItemRow;
use crate::store::{store_begin_edit, store_delete_item, use_app_store};

#[component]
pub fn ItemRowView(row: ItemRow) -> impl IntoView {
    let store = use_app_store();
    let id = row.id;

    view! {
        <div class="item-card">
            <strong class="item-headline">{row.headline}</strong>
            <br />
            <small class="item-tags">{row.tags}</small>
        </div>
        <div class="item-actions">
            <button class="edit-btn" on:click=move |_| store_begin_edit(&store, id)>"編集"</button>
            <DeleteConfirmButton on_confirm=move |_| store_delete_item(&store, id) />
        </div>
    }
}
