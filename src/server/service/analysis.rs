use crate::{
    model::analysis::{AnalysisRecord, AnalyzeMatchDto},
    server::{
        data::store::{from_item, to_item, RecordKey, RecordStore, ANALYSIS_TABLE},
        error::{schema::SchemaError, Error},
        llm::{
            client::AdvisorClient,
            parse::parse_advice,
            prompt::{build_prompt, MatchStats},
        },
        model::{app::AppState, identity::Caller},
    },
};

/// Partition component addressing all analyses of one match
fn analysis_partition(owner: &str, timestamp: i64) -> String {
    format!("{owner}#{timestamp}")
}

/// Orchestrates the match analysis pipeline.
///
/// Each request runs the stage sequence prompt → model call → parse →
/// persist, terminal on the first failure; no stage is retried and a
/// failure discards all prior work for the request. Persistence is an
/// unconditional put, so re-analyzing the same (owner, timestamp, phase)
/// replaces the stored item.
pub struct AnalysisService<'a> {
    store: &'a dyn RecordStore,
    advisor: &'a AdvisorClient,
}

impl<'a> AnalysisService<'a> {
    /// Creates a new instance of [`AnalysisService`]
    pub fn new(state: &'a AppState) -> Self {
        Self {
            store: state.store.as_ref(),
            advisor: state.advisor.as_ref(),
        }
    }

    /// Runs a full analysis for the caller and returns the stored item.
    ///
    /// `timestamp` and `phase` are required; the stat fields are optional
    /// and handed to the model exactly as submitted.
    pub async fn analyze(
        &self,
        caller: &Caller,
        request: AnalyzeMatchDto,
    ) -> Result<AnalysisRecord, Error> {
        let (timestamp, phase) = match (
            request.timestamp,
            request.phase.as_deref().map(str::trim).filter(|p| !p.is_empty()),
        ) {
            (Some(timestamp), Some(phase)) => (timestamp, phase.to_string()),
            _ => return Err(SchemaError::MissingAnalysisKey.into()),
        };

        let stats = MatchStats::from_parts(
            request.shots.clone(),
            request.points.clone(),
            request.rebounds.clone(),
            request.assists.clone(),
            request.turnovers.clone(),
        );
        let prompt = build_prompt(&stats);
        tracing::debug!(owner = %caller.id, timestamp, phase = %phase, "analysis prompt built");

        let reply = self.advisor.chat(&prompt).await?;
        tracing::debug!(owner = %caller.id, timestamp, phase = %phase, "model reply received");

        let advice = parse_advice(&reply)?;

        let record = AnalysisRecord {
            phase: phase.clone(),
            timestamp,
            shots: request.shots,
            turnovers: request.turnovers,
            assists: request.assists,
            rebounds: request.rebounds,
            points: request.points,
            result: advice,
        };

        self.store
            .put(
                ANALYSIS_TABLE,
                &RecordKey::composite(analysis_partition(&caller.id, timestamp), &phase),
                to_item(&record)?,
            )
            .await?;

        tracing::info!(owner = %caller.id, timestamp, phase = %record.phase, "analysis stored");

        Ok(record)
    }

    /// All stored analyses for one of the caller's matches
    pub async fn list(
        &self,
        caller: &Caller,
        timestamp: Option<&str>,
    ) -> Result<Vec<AnalysisRecord>, Error> {
        let timestamp: i64 = timestamp
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(SchemaError::MissingField("timestamp"))?
            .parse()
            .map_err(|_| SchemaError::invalid("timestamp", "expected an integer timestamp"))?;

        let items = self
            .store
            .query(ANALYSIS_TABLE, &analysis_partition(&caller.id, timestamp))
            .await?;

        items
            .into_iter()
            .map(|item| from_item(item).map_err(Error::from))
            .collect()
    }
}
