//! Notice Bar Component
//!
//! Shows the latest store notice and hides it after a few seconds.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::store::{store_clear_notice, use_app_store, AppStateStoreFields};

#[component]
pub fn NoticeBar() -> impl IntoView {
    let store = use_app_store();
    let millis = store.config().get_untracked().notice_seconds.saturating_mul(1000);

    Effect::new(move |_| {
        let Some(message) = store.notice().get() else {
            return;
        };
        spawn_local(async move {
            TimeoutFuture::new(millis).await;
            // A newer notice gets its own timer
            if store.notice().get_untracked().as_deref() == Some(message.as_str()) {
                store_clear_notice(&store);
            }
        });
    });

    view! {
        {move || store.notice().get().map(|message| view! {
            <div class="notice-bar" on:click=move |_| store_clear_notice(&store)>{message}</div>
        })}
    }
}
