/// LLM Client — the single point of entry for all OpenAI API calls.
///
/// ARCHITECTURAL RULE: No other module may call the OpenAI API directly.
/// All model interactions MUST go through this module.
///
/// Model: gpt-4o-mini (hardcoded — do not make configurable to prevent drift)
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";
/// The model used for all completion calls.
/// Intentionally hardcoded to prevent accidental drift.
pub const MODEL: &str = "gpt-4o-mini";
/// Low temperature — we want deterministic-leaning, JSON-shaped output.
const TEMPERATURE: f32 = 0.3;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The reply had no assistant content field at all (no choices, or a
    /// null `content`). An empty string is NOT this error — the reconciler
    /// treats it as a structure miss and falls back.
    #[error("LLM returned empty content")]
    EmptyContent,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    prompt_tokens: u32,
    completion_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct OpenAiError {
    error: OpenAiErrorBody,
}

#[derive(Debug, Deserialize)]
struct OpenAiErrorBody {
    message: String,
}

/// Seam between the reconciler and the hosted model, so tests can inject a
/// scripted upstream. Production code has exactly one implementor.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Sends a single user-role message and returns the raw reply text.
    async fn complete(&self, prompt: &str) -> Result<String, LlmError>;
}

/// The single OpenAI client shared across all requests.
/// One attempt per call: no retry, no backoff, no client-side timeout — an
/// unresponsive upstream stalls that request (known gap, kept deliberately).
#[derive(Clone)]
pub struct OpenAiClient {
    client: Client,
    api_key: String,
}

impl OpenAiClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
        }
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        let request_body = ChatRequest {
            model: MODEL,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: TEMPERATURE,
        };

        let response = self
            .client
            .post(OPENAI_API_URL)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Try to parse the structured error message
            let message = serde_json::from_str::<OpenAiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let chat_response: ChatResponse = response.json().await?;

        if let Some(usage) = &chat_response.usage {
            debug!(
                "LLM call succeeded: prompt_tokens={}, completion_tokens={}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        content_from_response(chat_response)
    }
}

/// Pulls the assistant text out of a 2xx reply. Only a missing or null
/// content field is an error; an empty string passes through so the
/// reconciler can apply its no-JSON fallback instead of hard-failing.
fn content_from_response(response: ChatResponse) -> Result<String, LlmError> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .map(|text| text.trim().to_string())
        .ok_or(LlmError::EmptyContent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_response_deserializes() {
        let json = r#"{
            "choices": [{"message": {"role": "assistant", "content": "hello"}}],
            "usage": {"prompt_tokens": 12, "completion_tokens": 3, "total_tokens": 15}
        }"#;
        let parsed: ChatResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.choices[0].message.content.as_deref(), Some("hello"));
        assert_eq!(parsed.usage.as_ref().unwrap().completion_tokens, 3);
    }

    #[test]
    fn test_chat_response_tolerates_missing_usage() {
        let json = r#"{"choices": [{"message": {"content": "ok"}}]}"#;
        let parsed: ChatResponse = serde_json::from_str(json).unwrap();
        assert!(parsed.usage.is_none());
    }

    #[test]
    fn test_empty_string_content_passes_through() {
        let json = r#"{"choices": [{"message": {"content": ""}}]}"#;
        let parsed: ChatResponse = serde_json::from_str(json).unwrap();
        // Not an error: the reconciler handles structureless replies.
        assert_eq!(content_from_response(parsed).unwrap(), "");
    }

    #[test]
    fn test_whitespace_only_content_trims_to_empty() {
        let json = r#"{"choices": [{"message": {"content": "  \n  "}}]}"#;
        let parsed: ChatResponse = serde_json::from_str(json).unwrap();
        assert_eq!(content_from_response(parsed).unwrap(), "");
    }

    #[test]
    fn test_null_content_is_empty_content_error() {
        let json = r#"{"choices": [{"message": {"content": null}}]}"#;
        let parsed: ChatResponse = serde_json::from_str(json).unwrap();
        assert!(matches!(
            content_from_response(parsed),
            Err(LlmError::EmptyContent)
        ));
    }

    #[test]
    fn test_no_choices_is_empty_content_error() {
        let json = r#"{"choices": []}"#;
        let parsed: ChatResponse = serde_json::from_str(json).unwrap();
        assert!(matches!(
            content_from_response(parsed),
            Err(LlmError::EmptyContent)
        ));
    }

    #[test]
    fn test_error_body_parses() {
        let json = r#"{"error": {"message": "Incorrect API key provided", "type": "invalid_request_error"}}"#;
        let parsed: OpenAiError = serde_json::from_str(json).unwrap();
        assert!(parsed.error.message.contains("Incorrect API key"));
    }
}
