//! Item List Component
//!
//! One entry per item in sequence order; the entry being edited is
//! swapped for the inline edit form.

use leptos::prelude::*;

use crate::components::{ItemEditRow, ItemRowView};
use crate::models::ItemRow;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ItemList() -> impl IntoView {
    let store = use_app_store();
    let rows = move || store.inventory().read().rows();

    view! {
        <ul class="item-list">
            <For
                each=rows
                // Whole row as key so saved edits re-render the entry
                key=|row| row.clone()
                children=move |row: ItemRow| {
                    let id = row.id;
                    let is_editing = move || store.editing().get() == Some(id);
                    view! {
                        <li class="item-entry">
                            {move || if is_editing() {
                                view! { <ItemEditRow id=id /> }.into_any()
                            } else {
                                view! { <ItemRowView row=row.clone() /> }.into_any()
                            }}
                        </li>
                    }
                }
            />
        </ul>
        <Show when=move || store.inventory().read().is_empty()>
            <p class="empty-list">"商品がまだありません"</p>
        </Show>
    }
}
