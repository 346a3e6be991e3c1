use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};

use crate::server::error::store::StoreError;

/// Table holding player profiles, keyed by identity id
pub static PROFILE_TABLE: &str = "profiles";
/// Table holding matches, keyed by (owner id, zero-padded timestamp)
pub static MATCH_TABLE: &str = "matches";
/// Table holding analyses, keyed by (`{owner}#{timestamp}`, phase)
pub static ANALYSIS_TABLE: &str = "match_analyses";

/// A stored JSON document
pub type Item = Map<String, Value>;

/// Address of a stored record: a partition component plus an optional sort
/// component for composite keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordKey {
    pub partition: String,
    pub sort: Option<String>,
}

impl RecordKey {
    /// Key with only a partition component
    pub fn partition(partition: impl Into<String>) -> Self {
        Self {
            partition: partition.into(),
            sort: None,
        }
    }

    /// Composite key with partition and sort components
    pub fn composite(partition: impl Into<String>, sort: impl Into<String>) -> Self {
        Self {
            partition: partition.into(),
            sort: Some(sort.into()),
        }
    }
}

/// Sort-key encoding for match timestamps.
///
/// Zero-padded so lexicographic order matches numeric order.
pub fn timestamp_sort_key(timestamp: i64) -> String {
    format!("{timestamp:020}")
}

/// Serializes a typed record into a stored item
pub fn to_item<T: Serialize>(record: &T) -> Result<Item, StoreError> {
    match serde_json::to_value(record) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(StoreError::Backend(
            "record did not serialize to an object".to_string(),
        )),
        Err(err) => Err(StoreError::Backend(err.to_string())),
    }
}

/// Deserializes a stored item into a typed record
pub fn from_item<T: DeserializeOwned>(item: Item) -> Result<T, StoreError> {
    serde_json::from_value(Value::Object(item))
        .map_err(|err| StoreError::Backend(format!("corrupt stored record: {err}")))
}

/// Narrow key-value interface to the managed record store.
///
/// This is the sole mutator of persisted state. Writes are last-write-wins;
/// no coordination beyond [`RecordStore::put_if_absent`] is offered.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Fetches a record, `None` when absent
    async fn get(&self, table: &str, key: &RecordKey) -> Result<Option<Item>, StoreError>;

    /// Writes a record unconditionally, replacing any previous value
    async fn put(&self, table: &str, key: &RecordKey, item: Item) -> Result<(), StoreError>;

    /// Writes a record only when the key is vacant; `Ok(false)` when it
    /// already exists
    async fn put_if_absent(
        &self,
        table: &str,
        key: &RecordKey,
        item: Item,
    ) -> Result<bool, StoreError>;

    /// Applies the (field, value) pairs to an existing record, returning
    /// only the updated fields. Fails with [`StoreError::NotFound`] when the
    /// record is absent.
    async fn update(
        &self,
        table: &str,
        key: &RecordKey,
        fields: &[(String, Value)],
    ) -> Result<Item, StoreError>;

    /// All records sharing the partition component, in sort-key order
    async fn query(&self, table: &str, partition: &str) -> Result<Vec<Item>, StoreError>;

    /// Full table scan; only used for low-cardinality uniqueness checks
    async fn scan(&self, table: &str) -> Result<Vec<Item>, StoreError>;

    /// Removes a record; succeeds whether or not the key existed
    async fn delete(&self, table: &str, key: &RecordKey) -> Result<(), StoreError>;
}
