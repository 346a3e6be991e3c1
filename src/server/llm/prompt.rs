use serde_json::{json, Value};

/// The raw statistics an analysis request carries, normalized for
/// prompting: absent inputs become an empty list or map, never null.
///
/// Values are kept uninterpreted so the model sees exactly what the caller
/// submitted.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchStats {
    pub shots: Value,
    pub points: Value,
    pub rebounds: Value,
    pub assists: Value,
    pub turnovers: Value,
}

impl MatchStats {
    pub fn from_parts(
        shots: Option<Value>,
        points: Option<Value>,
        rebounds: Option<Value>,
        assists: Option<Value>,
        turnovers: Option<Value>,
    ) -> Self {
        Self {
            shots: shots.unwrap_or_else(|| json!([])),
            points: points.unwrap_or_else(|| json!({})),
            rebounds: rebounds.unwrap_or_else(|| json!({})),
            assists: assists.unwrap_or_else(|| json!({})),
            turnovers: turnovers.unwrap_or_else(|| json!({})),
        }
    }
}

/// Renders the analysis prompt for the model.
///
/// Identical inputs produce a byte-identical prompt: the embedded data is
/// pretty-printed with `serde_json`, whose object keys are stored ordered,
/// and the instruction block is fixed text.
pub fn build_prompt(stats: &MatchStats) -> String {
    format!(
        r#"You are an expert in basketball strategy.

Here is the match data (some of it may be partial):

- Shots: a list of shot events with their coordinates (x, y) and whether each was made or missed:
{shots}

- Points per quarter:
{points}

- Rebounds per quarter:
{rebounds}

- Assists per quarter:
{assists}

- Turnovers per quarter:
{turnovers}

Important instructions:
- Base the analysis strictly on this data (no generalities).
- Identify trends, strengths, and weaknesses.
- Give one main piece of advice and zero or more secondary pieces of advice, focused on what the player can improve.
- Every piece of advice must carry a title, an explanation, a justification, and a non-empty tag list.
- Reply with exactly one JSON object in the format below (strict, no surrounding text):

{{
  "mainAdvice": {{
    "title": "Short title",
    "text": "Explanation of the main advice",
    "comment": "Observation or justification",
    "tag": ["offense", "defense", "positioning"]
  }},
  "secondaryAdvices": [
    {{
      "title": "...",
      "text": "...",
      "comment": "...",
      "tag": ["..."]
    }}
  ]
}}"#,
        shots = pretty(&stats.shots),
        points = pretty(&stats.points),
        rebounds = pretty(&stats.rebounds),
        assists = pretty(&stats.assists),
        turnovers = pretty(&stats.turnovers),
    )
}

fn pretty(value: &Value) -> String {
    // Stat values were already parsed from JSON, so serialization cannot fail
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
