use serde_json::{Map, Value};
use uuid::Uuid;

use crate::{
    model::match_record::MatchRecord,
    server::{
        data::store::{
            from_item, timestamp_sort_key, to_item, RecordKey, RecordStore, MATCH_TABLE,
        },
        error::{match_record::MatchError, schema::SchemaError, store::StoreError, Error},
        model::{app::AppState, identity::Caller},
        schema::{field::validate_field, update::build_patch, MATCH_FIELDS},
    },
};

pub struct MatchService<'a> {
    store: &'a dyn RecordStore,
}

impl<'a> MatchService<'a> {
    /// Creates a new instance of [`MatchService`]
    pub fn new(state: &'a AppState) -> Self {
        Self {
            store: state.store.as_ref(),
        }
    }

    /// Creates a match for the caller with only a title; the record id and
    /// start timestamp are assigned by the server.
    pub async fn create(
        &self,
        caller: &Caller,
        payload: &Map<String, Value>,
    ) -> Result<MatchRecord, Error> {
        let title = payload
            .get("title")
            .ok_or(SchemaError::MissingField("title"))?;
        validate_field("title", title)?;

        let record = MatchRecord {
            id: Uuid::new_v4().to_string(),
            user_id: caller.id.clone(),
            timestamp: chrono::Utc::now().timestamp_millis(),
            title: title.as_str().unwrap_or_default().trim().to_string(),
            date: None,
            shots: None,
            turnovers: None,
            assists: None,
            rebounds: None,
            points: None,
        };

        self.store
            .put(
                MATCH_TABLE,
                &RecordKey::composite(&caller.id, timestamp_sort_key(record.timestamp)),
                to_item(&record)?,
            )
            .await?;

        Ok(record)
    }

    /// All matches owned by the caller, oldest first
    pub async fn list(&self, caller: &Caller) -> Result<Vec<MatchRecord>, Error> {
        let items = self.store.query(MATCH_TABLE, &caller.id).await?;

        items
            .into_iter()
            .map(|item| from_item(item).map_err(Error::from))
            .collect()
    }

    /// Applies a partial update to one of the caller's matches.
    ///
    /// The payload must carry the match `timestamp`; the remaining fields
    /// go through the all-or-nothing update builder. Only the applied
    /// fields are echoed back.
    pub async fn update(
        &self,
        caller: &Caller,
        payload: &Map<String, Value>,
    ) -> Result<Map<String, Value>, Error> {
        let timestamp = self.required_timestamp(payload)?;

        let patch = build_patch(payload, MATCH_FIELDS)?;

        let key = RecordKey::composite(&caller.id, timestamp_sort_key(timestamp));

        self.store
            .get(MATCH_TABLE, &key)
            .await?
            .ok_or(MatchError::NotFound)?;

        let updated = self
            .store
            .update(MATCH_TABLE, &key, &patch.fields)
            .await
            .map_err(|err| match err {
                StoreError::NotFound => Error::from(MatchError::NotFound),
                other => other.into(),
            })?;

        Ok(updated)
    }

    /// Deletes one of the caller's matches by its start timestamp
    pub async fn delete(
        &self,
        caller: &Caller,
        payload: &Map<String, Value>,
    ) -> Result<(), Error> {
        let timestamp = self.required_timestamp(payload)?;
        let key = RecordKey::composite(&caller.id, timestamp_sort_key(timestamp));

        self.store
            .get(MATCH_TABLE, &key)
            .await?
            .ok_or(MatchError::NotFound)?;

        self.store.delete(MATCH_TABLE, &key).await?;

        Ok(())
    }

    fn required_timestamp(&self, payload: &Map<String, Value>) -> Result<i64, SchemaError> {
        let timestamp = payload
            .get("timestamp")
            .ok_or(SchemaError::MissingField("timestamp"))?;
        validate_field("timestamp", timestamp)?;

        timestamp
            .as_i64()
            .ok_or_else(|| SchemaError::invalid("timestamp", "expected an integer timestamp"))
    }
}
