//! Item Edit Row Component
//!
//! Inline editing form replacing a row: text inputs for name, prices and
//! shipping, dropdowns for the tag fields, save/cancel actions.

use leptos::prelude::*;

use crate::components::TagSelect;
use crate::models::{ItemEdit, ItemId, CATEGORIES, PURCHASE_SOURCES, SALE_PLATFORMS};
use crate::stats::{self, Suggestion};
use crate::store::{store_cancel_edit, store_save_edit, use_app_store, AppStateStoreFields};

#[component]
pub fn ItemEditRow(id: ItemId) -> impl IntoView {
    let store = use_app_store();
    let current = store.inventory().read_untracked().get(id).cloned();
    let Some(current) = current else {
        return ().into_any();
    };
    let config = store.config().get_untracked();

    let name = RwSignal::new(current.name.clone());
    let purchase_price = RwSignal::new(current.purchase_price.clone());
    let sale_price = RwSignal::new(current.sale_price.clone());
    let shipping = RwSignal::new(current.shipping.clone());
    let purchase_source = RwSignal::new(current.purchase_source.clone());
    let category = RwSignal::new(current.category.clone());
    let sale_platform = RwSignal::new(current.sale_platform.clone());

    let save = move |_| {
        let edit = ItemEdit {
            name: name.get(),
            purchase_price: purchase_price.get(),
            sale_price: sale_price.get(),
            shipping: shipping.get(),
            purchase_source: purchase_source.get(),
            category: category.get(),
            sale_platform: sale_platform.get(),
        };
        store_save_edit(&store, id, edit);
    };

    // Suggestion follows the price and category being typed
    let suggestion = move || {
        let mut draft = current.clone();
        draft.purchase_price = purchase_price.get();
        draft.category = category.get();
        let inventory = store.inventory().read();
        stats::suggest(&draft, inventory.items(), &config)
    };

    view! {
        <div class="edit-area">
            <input
                type="text"
                prop:value=move || name.get()
                on:input=move |ev| name.set(event_target_value(&ev))
            />
            <input
                type="number"
                prop:value=move || purchase_price.get()
                on:input=move |ev| purchase_price.set(event_target_value(&ev))
            />
            <input
                type="number"
                prop:value=move || sale_price.get()
                on:input=move |ev| sale_price.set(event_target_value(&ev))
            />
            <input
                type="number"
                placeholder="送料"
                prop:value=move || shipping.get()
                on:input=move |ev| shipping.set(event_target_value(&ev))
            />

            <TagSelect options=PURCHASE_SOURCES value=purchase_source />
            <TagSelect options=CATEGORIES value=category />
            <TagSelect options=SALE_PLATFORMS value=sale_platform />

            <div class="suggestion">
                {move || {
                    let s = suggestion();
                    let category = category.get();
                    view! {
                        <p>{format!(
                            "提案価格: {}円 (見込み利益 {}円 / {}%)",
                            s.price, s.expected_profit, s.expected_rate
                        )}</p>
                        <p class="analysis">{analysis_line(&category, &s)}</p>
                        <p class="advice">{s.advice.message()}</p>
                        {s.average_days.map(|days| view! {
                            <p class="days">{format!("このカテゴリの平均売却期間は約{}日です", days)}</p>
                        })}
                    }
                }}
            </div>

            <button on:click=save>"保存"</button>
            <button on:click=move |_| store_cancel_edit(&store)>"戻る"</button>
        </div>
    }
    .into_any()
}

/// History summary shown above the advice
fn analysis_line(category: &str, s: &Suggestion) -> String {
    if s.history == 0 {
        return format!("「{}」カテゴリの販売実績がまだありません。一般的な利益率から算出しています", category);
    }
    let mut line = format!(
        "「{}」の過去{}件の販売実績: 平均{:.1}倍 / 平均利益率{:.1}%",
        category, s.history, s.multiplier, s.average_rate
    );
    if let Some((min, max)) = s.price_range {
        line.push_str(&format!(" / 価格帯 {}〜{}円", min, max));
    }
    line
}
