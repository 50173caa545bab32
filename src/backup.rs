//! JSON Backup
//!
//! Export envelope `{ "backup_date": ..., "items": [...] }`. Import also
//! accepts a bare item array, which is what `furima_data` itself holds.

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};

use crate::error::{StoreError, StoreResult};
use crate::models::Item;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Backup {
    pub backup_date: String,
    pub items: Vec<Item>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum BackupInput {
    Envelope(Backup),
    Items(Vec<Item>),
}

impl Backup {
    pub fn new<Tz: TimeZone>(items: &[Item], at: &DateTime<Tz>) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        Self {
            backup_date: at.to_rfc3339(),
            items: items.to_vec(),
        }
    }

    pub fn to_json(&self) -> StoreResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse an uploaded backup file
    pub fn parse(raw: &str) -> StoreResult<Vec<Item>> {
        match serde_json::from_str::<BackupInput>(raw) {
            Ok(BackupInput::Envelope(backup)) => Ok(backup.items),
            Ok(BackupInput::Items(items)) => Ok(items),
            Err(e) => Err(StoreError::Backup(e.to_string())),
        }
    }
}

/// Download file name, e.g. `furima_backup_20250102_030405.json`
pub fn file_name<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("furima_backup_{}.json", at.format("%Y%m%d_%H%M%S"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ItemDraft;
    use chrono::{FixedOffset, TimeZone};

    fn at() -> DateTime<FixedOffset> {
        FixedOffset::east_opt(9 * 3600)
            .unwrap()
            .with_ymd_and_hms(2025, 1, 2, 3, 4, 5)
            .unwrap()
    }

    fn items() -> Vec<Item> {
        ["Jacket", "Lamp"]
            .iter()
            .map(|name| Item::from_draft(ItemDraft { name: name.to_string(), ..Default::default() }))
            .collect()
    }

    #[test]
    fn test_file_name() {
        assert_eq!(file_name(&at()), "furima_backup_20250102_030405.json");
    }

    #[test]
    fn test_export_envelope() {
        let json = Backup::new(&items(), &at()).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["backup_date"], "2025-01-02T03:04:05+09:00");
        assert_eq!(value["items"][1]["name"], "Lamp");
    }

    #[test]
    fn test_import_envelope() {
        let original = items();
        let json = Backup::new(&original, &at()).to_json().unwrap();
        assert_eq!(Backup::parse(&json).unwrap(), original);
    }

    #[test]
    fn test_import_bare_array() {
        let parsed = Backup::parse(r#"[{"name":"A"},{"name":"B","salePrice":"10"}]"#).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[1].sale_price, "10");
    }

    #[test]
    fn test_import_rejects_garbage() {
        assert!(matches!(Backup::parse("hello"), Err(StoreError::Backup(_))));
        assert!(matches!(Backup::parse(r#"{"items": 3}"#), Err(StoreError::Backup(_))));
    }
}
