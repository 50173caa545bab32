//! Frontend Models
//!
//! Resale item records as stored in browser local storage.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Purchase source options offered by the edit form
pub const PURCHASE_SOURCES: &[&str] = &["店舗", "ネット", "その他"];

/// Category options offered by the edit form
pub const CATEGORIES: &[&str] = &["家電", "衣服", "雑貨"];

/// Sale platform options offered by the edit form
pub const SALE_PLATFORMS: &[&str] = &["メルカリ", "ラクマ", "ヤフオク"];

/// Stable item handle, assigned once at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub Uuid);

impl ItemId {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Item data structure (matches the `furima_data` JSON layout)
///
/// Prices and dates stay text exactly as the inputs produced them.
/// Records written before ids existed get a fresh id on load.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub purchase_price: String,
    pub sale_price: String,
    pub shipping: String,
    pub purchase_date: String,
    pub sale_date: String,
    pub purchase_source: String,
    pub category: String,
    pub sale_platform: String,
}

impl Item {
    /// Build a new item from submitted form values
    pub fn from_draft(draft: ItemDraft) -> Self {
        Self {
            id: ItemId::new(),
            name: draft.name,
            purchase_price: draft.purchase_price,
            sale_price: draft.sale_price,
            shipping: draft.shipping,
            purchase_date: draft.purchase_date,
            sale_date: draft.sale_date,
            purchase_source: draft.purchase_source,
            category: draft.category,
            sale_platform: draft.sale_platform,
        }
    }

    /// Overwrite the fields covered by the inline edit form
    pub fn apply(&mut self, edit: ItemEdit) {
        self.name = edit.name;
        self.purchase_price = edit.purchase_price;
        self.sale_price = edit.sale_price;
        self.shipping = edit.shipping;
        self.purchase_source = edit.purchase_source;
        self.category = edit.category;
        self.sale_platform = edit.sale_platform;
    }

    /// Values for pre-filling the inline edit form
    pub fn to_edit(&self) -> ItemEdit {
        ItemEdit {
            name: self.name.clone(),
            purchase_price: self.purchase_price.clone(),
            sale_price: self.sale_price.clone(),
            shipping: self.shipping.clone(),
            purchase_source: self.purchase_source.clone(),
            category: self.category.clone(),
            sale_platform: self.sale_platform.clone(),
        }
    }
}

/// Values read from the creation form
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ItemDraft {
    pub name: String,
    pub purchase_price: String,
    pub sale_price: String,
    pub shipping: String,
    pub purchase_date: String,
    pub sale_date: String,
    pub purchase_source: String,
    pub category: String,
    pub sale_platform: String,
}

/// Values read from the inline edit form (dates are not editable there)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ItemEdit {
    pub name: String,
    pub purchase_price: String,
    pub sale_price: String,
    pub shipping: String,
    pub purchase_source: String,
    pub category: String,
    pub sale_platform: String,
}

/// Read-only row as shown in the item list
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemRow {
    pub id: ItemId,
    /// "{name} - {salePrice}円"
    pub headline: String,
    /// "{purchaseSource} / {category} / {salePlatform}"
    pub tags: String,
}

impl ItemRow {
    pub fn new(item: &Item) -> Self {
        Self {
            id: item.id,
            headline: format!("{} - {}円", item.name, item.sale_price),
            tags: format!("{} / {} / {}", item.purchase_source, item.category, item.sale_platform),
        }
    }
}

/// Value kept as an additional dropdown entry when it is not one of `options`
///
/// Editing must not rewrite a tag typed freely at creation.
pub fn extra_option(options: &[&str], current: &str) -> Option<String> {
    (!current.is_empty() && !options.contains(&current)).then(|| current.to_string())
}
