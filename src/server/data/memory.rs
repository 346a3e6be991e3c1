use std::{
    collections::{BTreeMap, HashMap},
    sync::RwLock,
};

use async_trait::async_trait;
use serde_json::Value;

use crate::server::{
    data::store::{Item, RecordKey, RecordStore},
    error::store::StoreError,
};

/// In-memory reference implementation of [`RecordStore`].
///
/// Backs the service in development and tests. Keys are ordered so queries
/// return records in sort-key order, matching the managed store's behavior.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<HashMap<String, BTreeMap<(String, String), Item>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn flat_key(key: &RecordKey) -> (String, String) {
        (
            key.partition.clone(),
            key.sort.clone().unwrap_or_default(),
        )
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn get(&self, table: &str, key: &RecordKey) -> Result<Option<Item>, StoreError> {
        let tables = self.tables.read().map_err(poisoned)?;

        Ok(tables
            .get(table)
            .and_then(|records| records.get(&Self::flat_key(key)))
            .cloned())
    }

    async fn put(&self, table: &str, key: &RecordKey, item: Item) -> Result<(), StoreError> {
        let mut tables = self.tables.write().map_err(poisoned)?;

        tables
            .entry(table.to_string())
            .or_default()
            .insert(Self::flat_key(key), item);

        Ok(())
    }

    async fn put_if_absent(
        &self,
        table: &str,
        key: &RecordKey,
        item: Item,
    ) -> Result<bool, StoreError> {
        let mut tables = self.tables.write().map_err(poisoned)?;
        let records = tables.entry(table.to_string()).or_default();
        let flat = Self::flat_key(key);

        if records.contains_key(&flat) {
            return Ok(false);
        }

        records.insert(flat, item);
        Ok(true)
    }

    async fn update(
        &self,
        table: &str,
        key: &RecordKey,
        fields: &[(String, Value)],
    ) -> Result<Item, StoreError> {
        let mut tables = self.tables.write().map_err(poisoned)?;

        let record = tables
            .get_mut(table)
            .and_then(|records| records.get_mut(&Self::flat_key(key)))
            .ok_or(StoreError::NotFound)?;

        let mut updated = Item::new();
        for (field, value) in fields {
            record.insert(field.clone(), value.clone());
            updated.insert(field.clone(), value.clone());
        }

        Ok(updated)
    }

    async fn query(&self, table: &str, partition: &str) -> Result<Vec<Item>, StoreError> {
        let tables = self.tables.read().map_err(poisoned)?;

        Ok(tables
            .get(table)
            .map(|records| {
                records
                    .iter()
                    .filter(|((p, _), _)| p == partition)
                    .map(|(_, item)| item.clone())
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn scan(&self, table: &str) -> Result<Vec<Item>, StoreError> {
        let tables = self.tables.read().map_err(poisoned)?;

        Ok(tables
            .get(table)
            .map(|records| records.values().cloned().collect())
            .unwrap_or_default())
    }

    async fn delete(&self, table: &str, key: &RecordKey) -> Result<(), StoreError> {
        let mut tables = self.tables.write().map_err(poisoned)?;

        if let Some(records) = tables.get_mut(table) {
            records.remove(&Self::flat_key(key));
        }

        Ok(())
    }
}

fn poisoned<T>(_: std::sync::PoisonError<T>) -> StoreError {
    StoreError::Backend("store lock poisoned".to_string())
}
