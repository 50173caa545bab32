//! Store Errors

use thiserror::Error;

use crate::models::ItemId;

/// Common result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised by the inventory store and its storage backend
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("item {0} not found")]
    NotFound(ItemId),
    #[error("storage error: {0}")]
    Storage(String),
    #[error(transparent)]
    Serialize(#[from] serde_json::Error),
    #[error("invalid backup: {0}")]
    Backup(String),
}

impl StoreError {
    /// Whether the mutation that raised this error still took effect in memory
    ///
    /// Storage and serialization errors come from the write that follows
    /// an applied mutation; a missing item or a rejected backup changes nothing.
    pub fn was_applied(&self) -> bool {
        matches!(self, StoreError::Storage(_) | StoreError::Serialize(_))
    }
}
