//! Furima Ledger App
//!
//! Main application component: registration form, item list, summary.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{BackupControls, ItemList, NewItemForm, NoticeBar, SummaryPanel};
use crate::config::AppConfig;
use crate::store::{AppState, AppStateStoreFields, AppStore};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let store: AppStore = Store::new(AppState::new(config));
    provide_context(store);

    view! {
        <div class="mobile-container">
            <header class="header">
                <h1>"フリマ損益計算"</h1>
                <div class="db-status">
                    {move || format!("ローカル保存 | 登録件数: {}件", store.inventory().read().len())}
                </div>
            </header>

            <NoticeBar />

            <main class="main-content">
                <NewItemForm />
                <ItemList />
                <SummaryPanel />
                <BackupControls />
            </main>
        </div>
    }
}
