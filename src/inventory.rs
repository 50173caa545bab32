//! Inventory Store
//!
//! Owns the ordered item sequence and mirrors it to durable storage.
//! Every mutation persists the whole sequence; reading rows never writes.
//! A storage error returned by a mutation means the mutation itself was
//! applied in memory and only the write failed.

use std::collections::HashSet;

use crate::error::{StoreError, StoreResult};
use crate::models::{Item, ItemDraft, ItemEdit, ItemId, ItemRow};
use crate::storage::Storage;

/// Ordered item sequence backed by one storage key
#[derive(Debug)]
pub struct Inventory<S> {
    items: Vec<Item>,
    storage: S,
    key: String,
}

impl<S: Storage> Inventory<S> {
    /// Load the sequence stored under `key`
    ///
    /// Absent, unreadable or malformed data yields an empty sequence.
    /// Nothing is written back until the first mutation.
    pub fn load(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let mut items = match storage.read(&key) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<Item>>(&raw) {
                Ok(items) => items,
                Err(e) => {
                    log::warn!("[STORE] Ignoring malformed data under '{}': {}", key, e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                log::warn!("[STORE] Could not read '{}': {}", key, e);
                Vec::new()
            }
        };
        reassign_duplicate_ids(&mut items);
        log::info!("[STORE] Loaded {} items", items.len());
        Self { items, storage, key }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Current position of an item
    pub fn position(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Rows for the list view, in sequence order
    pub fn rows(&self) -> Vec<ItemRow> {
        self.items.iter().map(ItemRow::new).collect()
    }

    /// Append a new item built verbatim from the draft
    pub fn create(&mut self, draft: ItemDraft) -> StoreResult<ItemId> {
        let item = Item::from_draft(draft);
        let id = item.id;
        self.items.push(item);
        log::debug!("[STORE] Created {} at position {}", id, self.items.len() - 1);
        self.persist()?;
        Ok(id)
    }

    /// Overwrite the editable fields of one item in place
    pub fn update(&mut self, id: ItemId, edit: ItemEdit) -> StoreResult<()> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(StoreError::NotFound(id))?;
        item.apply(edit);
        log::debug!("[STORE] Updated {}", id);
        self.persist()
    }

    /// Remove one item, shifting later items down by one
    pub fn delete(&mut self, id: ItemId) -> StoreResult<Item> {
        let position = self.position(id).ok_or(StoreError::NotFound(id))?;
        let removed = self.items.remove(position);
        log::debug!("[STORE] Deleted {} from position {}", id, position);
        self.persist()?;
        Ok(removed)
    }

    /// Replace the whole sequence (backup import)
    pub fn restore(&mut self, mut items: Vec<Item>) -> StoreResult<()> {
        log::info!("[STORE] Restoring {} items", items.len());
        reassign_duplicate_ids(&mut items);
        self.items = items;
        self.persist()
    }

    fn persist(&self) -> StoreResult<()> {
        let json = serde_json::to_string(&self.items)?;
        self.storage.write(&self.key, &json)
    }
}

/// Give every repeated id a fresh one so each row stays addressable
fn reassign_duplicate_ids(items: &mut [Item]) {
    let mut seen = HashSet::with_capacity(items.len());
    for (position, item) in items.iter_mut().enumerate() {
        if !seen.insert(item.id) {
            let fresh = ItemId::new();
            log::warn!("[STORE] Duplicate id {} at position {}, reassigned {}", item.id, position, fresh);
            item.id = fresh;
            seen.insert(fresh);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use proptest::prelude::*;

    const KEY: &str = "furima_data";

    fn draft(name: &str) -> ItemDraft {
        ItemDraft {
            name: name.to_string(),
            purchase_price: "1000".into(),
            sale_price: "3000".into(),
            purchase_source: "店舗".into(),
            category: "衣服".into(),
            sale_platform: "メルカリ".into(),
            ..Default::default()
        }
    }

    fn names<S: Storage>(inv: &Inventory<S>) -> Vec<String> {
        inv.items().iter().map(|item| item.name.clone()).collect()
    }

    #[test]
    fn test_load_absent_is_empty() {
        let storage = MemoryStorage::new();
        let inv = Inventory::load(storage.clone(), KEY);
        assert!(inv.is_empty());
        assert_eq!(storage.write_count(), 0);
    }

    #[test]
    fn test_load_malformed_is_empty_and_untouched() {
        let storage = MemoryStorage::with(KEY, "{not json");
        let inv = Inventory::load(storage.clone(), KEY);
        assert!(inv.is_empty());
        assert_eq!(storage.raw(KEY).as_deref(), Some("{not json"));
    }

    #[test]
    fn test_load_legacy_array() {
        let raw = r#"[
            {"name":"A","purchasePrice":"1","salePrice":"2","purchaseDate":"","saleDate":"","purchaseSource":"店舗","category":"家電","salePlatform":"ラクマ"},
            {"name":"B","purchasePrice":"3","salePrice":"4","purchaseDate":"","saleDate":"","purchaseSource":"ネット","category":"雑貨","salePlatform":"メルカリ"}
        ]"#;
        let inv = Inventory::load(MemoryStorage::with(KEY, raw), KEY);
        assert_eq!(names(&inv), vec!["A", "B"]);
        assert_ne!(inv.items()[0].id, inv.items()[1].id);
    }

    #[test]
    fn test_jacket_scenario() {
        let mut inv = Inventory::load(MemoryStorage::new(), KEY);

        let id = inv.create(draft("Jacket")).unwrap();
        let rows = inv.rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].headline, "Jacket - 3000円");

        inv.delete(id).unwrap();
        assert!(inv.rows().is_empty());

        let first = inv.create(draft("First")).unwrap();
        let second = inv.create(draft("Second")).unwrap();
        inv.delete(first).unwrap();
        assert_eq!(names(&inv), vec!["Second"]);
        assert_eq!(inv.position(second), Some(0));
    }

    #[test]
    fn test_ids_survive_earlier_delete() {
        let mut inv = Inventory::load(MemoryStorage::new(), KEY);
        let a = inv.create(draft("A")).unwrap();
        let _b = inv.create(draft("B")).unwrap();
        let c = inv.create(draft("C")).unwrap();

        inv.delete(a).unwrap();
        let mut edit = inv.get(c).unwrap().to_edit();
        edit.name = "C2".into();
        inv.update(c, edit).unwrap();

        assert_eq!(names(&inv), vec!["B", "C2"]);
    }

    #[test]
    fn test_unknown_id() {
        let mut inv = Inventory::load(MemoryStorage::new(), KEY);
        inv.create(draft("A")).unwrap();
        let stranger = ItemId::new();

        assert!(matches!(inv.delete(stranger), Err(StoreError::NotFound(id)) if id == stranger));
        assert!(matches!(inv.update(stranger, ItemEdit::default()), Err(StoreError::NotFound(_))));
        assert_eq!(inv.len(), 1);
    }

    #[test]
    fn test_every_mutation_persists() {
        let storage = MemoryStorage::new();
        let mut inv = Inventory::load(storage.clone(), KEY);

        let id = inv.create(draft("A")).unwrap();
        assert_eq!(storage.write_count(), 1);
        inv.update(id, ItemEdit::default()).unwrap();
        assert_eq!(storage.write_count(), 2);
        inv.delete(id).unwrap();
        assert_eq!(storage.write_count(), 3);
        assert_eq!(storage.raw(KEY).as_deref(), Some("[]"));
    }

    #[test]
    fn test_rows_are_pure() {
        let storage = MemoryStorage::new();
        let mut inv = Inventory::load(storage.clone(), KEY);
        inv.create(draft("A")).unwrap();
        inv.create(draft("B")).unwrap();
        let before = storage.raw(KEY);
        let writes = storage.write_count();

        assert_eq!(inv.rows(), inv.rows());
        assert_eq!(storage.raw(KEY), before);
        assert_eq!(storage.write_count(), writes);
    }

    #[test]
    fn test_failed_write_keeps_memory_state() {
        let mut inv = Inventory::load(MemoryStorage::failing(), KEY);
        let err = inv.create(draft("A")).unwrap_err();
        assert!(matches!(err, StoreError::Storage(_)));
        assert!(err.was_applied());
        assert_eq!(names(&inv), vec!["A"]);

        let id = inv.items()[0].id;
        let err = inv.delete(id).unwrap_err();
        assert!(err.was_applied());
        assert!(inv.is_empty());

        let err = inv.delete(id).unwrap_err();
        assert!(!err.was_applied());
    }

    #[test]
    fn test_load_reassigns_duplicate_ids() {
        let raw = r#"[
            {"id":"01890a5d-ac96-774b-bcce-b302099a8057","name":"First"},
            {"id":"01890a5d-ac96-774b-bcce-b302099a8057","name":"Second"}
        ]"#;
        let mut inv = Inventory::load(MemoryStorage::with(KEY, raw), KEY);
        let rows = inv.rows();
        assert_eq!(inv.items()[0].id.to_string(), "01890a5d-ac96-774b-bcce-b302099a8057");
        assert_ne!(rows[0].id, rows[1].id);

        inv.delete(rows[1].id).unwrap();
        assert_eq!(names(&inv), vec!["First"]);
    }

    #[test]
    fn test_restore_reassigns_duplicate_ids() {
        let mut inv = Inventory::load(MemoryStorage::new(), KEY);
        let a = Item::from_draft(draft("A"));
        let mut b = Item::from_draft(draft("B"));
        b.id = a.id;
        inv.restore(vec![a, b]).unwrap();

        let second = inv.rows()[1].id;
        let mut edit = inv.get(second).unwrap().to_edit();
        edit.name = "B2".into();
        inv.update(second, edit).unwrap();

        assert_eq!(names(&inv), vec!["A", "B2"]);
    }

    #[test]
    fn test_restore_replaces_sequence() {
        let storage = MemoryStorage::new();
        let mut inv = Inventory::load(storage.clone(), KEY);
        inv.create(draft("Old")).unwrap();

        let replacement = vec![Item::from_draft(draft("X")), Item::from_draft(draft("Y"))];
        inv.restore(replacement.clone()).unwrap();

        let reloaded = Inventory::load(storage, KEY);
        assert_eq!(reloaded.items(), replacement.as_slice());
    }

    #[derive(Debug, Clone)]
    enum Op {
        Create(String),
        Edit(usize, String),
        Delete(usize),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            "[a-zA-Z0-9 ]{0,12}".prop_map(Op::Create),
            (0usize..16, "[a-z]{1,8}").prop_map(|(k, name)| Op::Edit(k, name)),
            (0usize..16).prop_map(Op::Delete),
        ]
    }

    proptest! {
        #[test]
        fn prop_creates_render_in_order(list in proptest::collection::vec("[a-zA-Z0-9]{0,10}", 0..20)) {
            let mut inv = Inventory::load(MemoryStorage::new(), KEY);
            for name in &list {
                inv.create(draft(name)).unwrap();
            }
            let rows = inv.rows();
            prop_assert_eq!(rows.len(), list.len());
            for (row, name) in rows.iter().zip(&list) {
                prop_assert_eq!(&row.headline, &format!("{} - 3000円", name));
            }
        }

        #[test]
        fn prop_delete_shifts_down(count in 1usize..12, pick in 0usize..12) {
            let mut inv = Inventory::load(MemoryStorage::new(), KEY);
            for i in 0..count {
                inv.create(draft(&i.to_string())).unwrap();
            }
            let k = pick % count;
            let before = inv.items().to_vec();

            inv.delete(before[k].id).unwrap();

            prop_assert_eq!(inv.len(), count - 1);
            prop_assert_eq!(&inv.items()[..k], &before[..k]);
            prop_assert_eq!(&inv.items()[k..], &before[k + 1..]);
        }

        #[test]
        fn prop_edit_touches_one_position(count in 1usize..12, pick in 0usize..12, name in "[a-z]{1,8}") {
            let mut inv = Inventory::load(MemoryStorage::new(), KEY);
            for i in 0..count {
                inv.create(draft(&i.to_string())).unwrap();
            }
            let k = pick % count;
            let before = inv.items().to_vec();
            let edit = ItemEdit {
                name: name.clone(),
                purchase_price: "1".into(),
                sale_price: "2".into(),
                shipping: "0".into(),
                purchase_source: "ネット".into(),
                category: "家電".into(),
                sale_platform: "ヤフオク".into(),
            };

            inv.update(before[k].id, edit.clone()).unwrap();

            for (i, (after, old)) in inv.items().iter().zip(&before).enumerate() {
                if i == k {
                    prop_assert_eq!(after.to_edit(), edit.clone());
                    prop_assert_eq!(after.id, old.id);
                } else {
                    prop_assert_eq!(after, old);
                }
            }
        }

        #[test]
        fn prop_reload_round_trip(ops in proptest::collection::vec(op(), 0..30)) {
            let storage = MemoryStorage::new();
            let mut inv = Inventory::load(storage.clone(), KEY);
            for op in ops {
                match op {
                    Op::Create(name) => { inv.create(draft(&name)).unwrap(); }
                    Op::Edit(k, name) if !inv.is_empty() => {
                        let id = inv.items()[k % inv.len()].id;
                        let mut edit = inv.get(id).unwrap().to_edit();
                        edit.name = name;
                        inv.update(id, edit).unwrap();
                    }
                    Op::Delete(k) if !inv.is_empty() => {
                        let id = inv.items()[k % inv.len()].id;
                        inv.delete(id).unwrap();
                    }
                    _ => {}
                }
            }
            let reloaded = Inventory::load(storage, KEY);
            prop_assert_eq!(reloaded.items(), inv.items());
        }
    }
}
