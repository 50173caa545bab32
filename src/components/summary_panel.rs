//! Summary Panel Component
//!
//! Profit totals, average rate per purchase source and the category mix
//! per sale platform.

use leptos::prelude::*;

use crate::stats;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn SummaryPanel() -> impl IntoView {
    let store = use_app_store();
    let config = store.config().get_untracked();
    let config_rates = config.clone();

    let summary = Memo::new(move |_| stats::summarize(store.inventory().read().items(), &config));
    let rates = move || stats::rate_by_source(store.inventory().read().items(), &config_rates);
    let mix = move || stats::category_mix(store.inventory().read().items());

    view! {
        <section class="summary-panel">
            <div class="stats">
                <div class="stat-box">
                    <div class="stat-label">"総利益（売却済み）"</div>
                    <div class="stat-value">{move || format!("{}円", summary.get().total_profit)}</div>
                    <div class="stat-sublabel">{move || format!("{}件売却 / {}件", summary.get().sold, summary.get().count)}</div>
                </div>
                <div class="stat-box expected-profit">
                    <div class="stat-label">"見込み利益"</div>
                    <div class="stat-value">{move || format!("{}円", summary.get().expected_profit.round())}</div>
                    <div class="stat-sublabel">"全商品売却時"</div>
                </div>
            </div>

            <h3>"購入先別 平均利益率"</h3>
            <ul class="rate-list">
                {move || rates().into_iter().map(|(source, rate)| view! {
                    <li>{format!("{}: {}%", source, rate)}</li>
                }).collect_view()}
            </ul>

            <h3>"販売サイト別 商品分類"</h3>
            <ul class="mix-list">
                {move || mix().into_iter().map(|(platform, categories)| {
                    let parts: Vec<String> = categories
                        .iter()
                        .map(|(category, count)| format!("{} {}件", category, count))
                        .collect();
                    view! { <li>{format!("{}: {}", platform, parts.join(" / "))}</li> }
                }).collect_view()}
            </ul>
        </section>
    }
}
