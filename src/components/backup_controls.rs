//! Backup Controls Component
//!
//! Download the item list as a JSON backup, or restore it from one.

use chrono::Local;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::backup::{self, Backup};
use crate::store::{store_restore, store_set_notice, use_app_store, AppStateStoreFields};

/// Offer `contents` as a file download through a temporary anchor
fn download(file_name: &str, contents: &str) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let parts = js_sys::Array::of1(&JsValue::from_str(contents));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("application/json");
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;

    let anchor: web_sys::HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();

    web_sys::Url::revoke_object_url(&url)
}

#[component]
pub fn BackupControls() -> impl IntoView {
    let store = use_app_store();

    let export = move |_| {
        let now = Local::now();
        let json = Backup::new(store.inventory().read_untracked().items(), &now).to_json();
        match json {
            Ok(json) => {
                if let Err(e) = download(&backup::file_name(&now), &json) {
                    log::error!("[BACKUP] Download failed: {:?}", e);
                    store_set_notice(&store, "バックアップに失敗しました");
                }
            }
            Err(e) => {
                log::error!("[BACKUP] Serialize failed: {}", e);
                store_set_notice(&store, "バックアップに失敗しました");
            }
        }
    };

    let import = move |ev: web_sys::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        input.set_value("");

        spawn_local(async move {
            let text = match JsFuture::from(file.text()).await {
                Ok(value) => value.as_string().unwrap_or_default(),
                Err(e) => {
                    log::error!("[BACKUP] Reading {} failed: {:?}", file.name(), e);
                    store_set_notice(&store, "ファイルを読み込めませんでした");
                    return;
                }
            };
            match Backup::parse(&text) {
                Ok(items) => store_restore(&store, items),
                Err(e) => {
                    log::warn!("[BACKUP] {}", e);
                    store_set_notice(&store, format!("復元できませんでした: {}", e));
                }
            }
        });
    };

    view! {
        <section class="backup-controls">
            <button type="button" on:click=export>"バックアップ"</button>
            <label class="restore-btn">
                "復元"
                <input type="file" accept="application/json" on:change=import />
            </label>
        </section>
    }
}
