use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::server::error::analysis::AnalysisError;

static SYSTEM_PROMPT: &str = "You are an expert basketball strategy coach.";

const TEMPERATURE: f64 = 0.5;
const MAX_TOKENS: u32 = 1200;

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f64,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

/// HTTP client for the OpenAI-compatible chat completion API.
///
/// The request timeout doubles as the analysis pipeline's upper bound on a
/// model call; expiry surfaces as [`AnalysisError::Upstream`]. Calls are
/// never retried at this layer.
pub struct AdvisorClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl AdvisorClient {
    pub fn new(
        base_url: &str,
        api_key: &str,
        model: &str,
        timeout: Duration,
    ) -> Result<Self, AnalysisError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| AnalysisError::Upstream(err.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
        })
    }

    /// Sends the analysis prompt and returns the model's raw text reply.
    pub async fn chat(&self, prompt: &str) -> Result<String, AnalysisError> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let response = self
            .http
            .post(format!("{}/v1/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AnalysisError::Upstream(format!(
                "model provider returned status {status}"
            )));
        }

        let completion = response.json::<ChatResponse>().await?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .filter(|content| !content.is_empty())
            .ok_or_else(|| {
                AnalysisError::Upstream("model returned no completion content".to_string())
            })?;

        Ok(content)
    }
}
