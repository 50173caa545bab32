//! New Item Form Component
//!
//! Form for registering a purchased item. Values are stored exactly as
//! typed; the tag fields suggest the usual options but accept free text.

use leptos::prelude::*;

use crate::models::{ItemDraft, CATEGORIES, PURCHASE_SOURCES, SALE_PLATFORMS};
use crate::store::{store_create_item, use_app_store};

/// Text input with a datalist of suggested tags
#[component]
fn SuggestInput(
    list_id: &'static str,
    label: &'static str,
    options: &'static [&'static str],
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <label class="form-field">
            <span>{label}</span>
            <input
                type="text"
                list=list_id
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            <datalist id=list_id>
                {options.iter().map(|opt| view! { <option value=*opt></option> }).collect_view()}
            </datalist>
        </label>
    }
}

/// Form for creating new items
#[component]
pub fn NewItemForm() -> impl IntoView {
    let store = use_app_store();

    let name = RwSignal::new(String::new());
    let purchase_price = RwSignal::new(String::new());
    let sale_price = RwSignal::new(String::new());
    let shipping = RwSignal::new(String::new());
    let purchase_date = RwSignal::new(String::new());
    let sale_date = RwSignal::new(String::new());
    let purchase_source = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());
    let sale_platform = RwSignal::new(String::new());

    let fields = [
        name,
        purchase_price,
        sale_price,
        shipping,
        purchase_date,
        sale_date,
        purchase_source,
        category,
        sale_platform,
    ];

    let create_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = ItemDraft {
            name: name.get(),
            purchase_price: purchase_price.get(),
            sale_price: sale_price.get(),
            shipping: shipping.get(),
            purchase_date: purchase_date.get(),
            sale_date: sale_date.get(),
            purchase_source: purchase_source.get(),
            category: category.get(),
            sale_platform: sale_platform.get(),
        };
        // Appended even when saving failed, so a resubmit would duplicate it
        if store_create_item(&store, draft) {
            for field in fields {
                field.set(String::new());
            }
        }
    };

    view! {
        <form class="new-item-form" on:submit=create_item>
            <label class="form-field">
                <span>"商品名"</span>
                <input
                    type="text"
                    required=true
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
            </label>
            <label class="form-field">
                <span>"仕入れ価格"</span>
                <input
                    type="number"
                    prop:value=move || purchase_price.get()
                    on:input=move |ev| purchase_price.set(event_target_value(&ev))
                />
            </label>
            <label class="form-field">
                <span>"販売価格"</span>
                <input
                    type="number"
                    prop:value=move || sale_price.get()
                    on:input=move |ev| sale_price.set(event_target_value(&ev))
                />
            </label>
            <label class="form-field">
                <span>"送料"</span>
                <input
                    type="number"
                    prop:value=move || shipping.get()
                    on:input=move |ev| shipping.set(event_target_value(&ev))
                />
            </label>
            <label class="form-field">
                <span>"購入日"</span>
                <input
                    type="date"
                    prop:value=move || purchase_date.get()
                    on:input=move |ev| purchase_date.set(event_target_value(&ev))
                />
            </label>
            <label class="form-field">
                <span>"売却日"</span>
                <input
                    type="date"
                    prop:value=move || sale_date.get()
                    on:input=move |ev| sale_date.set(event_target_value(&ev))
                />
            </label>
            <SuggestInput list_id="purchase-source-options" label="購入先" options=PURCHASE_SOURCES value=purchase_source />
            <SuggestInput list_id="category-options" label="カテゴリ" options=CATEGORIES value=category />
            <SuggestInput list_id="sale-platform-options" label="販売先" options=SALE_PLATFORMS value=sale_platform />
            <button type="submit">"追加"</button>
        </form>
    }
}
