//! Rewrite service adapter
//!
//! Sends (text, instruction) to an OpenAI-compatible chat completions
//! endpoint. The adapter itself returns a plain `AppResult<String>`; the
//! session layer folds that into an [`ImprovementOutcome`] so that every
//! fault becomes displayable text and nothing propagates past this boundary.

use async_trait::async_trait;
use keyring::Entry;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::shared::error::{AppError, AppResult};
use crate::shared::settings::ProviderSettings;

/// Output ceiling and creativity are fixed constants, identical for every
/// style. Matches the historical behavior of the tool.
pub const MAX_OUTPUT_TOKENS: u32 = 500;
pub const TEMPERATURE: f32 = 0.7;

const REQUEST_TIMEOUT_SECS: u64 = 30;
const KEYRING_SERVICE: &str = "text-improver";
const KEYRING_ACCOUNT: &str = "openai_api_key";

/// Fixed wrapper around the captured text in the user role.
const IMPROVE_WRAPPER: &str = "Please improve the following text:";

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

/// The single pluggable "improve text" capability.
#[async_trait]
pub trait ImproveProvider: Send + Sync {
    async fn improve(&self, text: &str, instruction: &str) -> AppResult<String>;
}

/// OpenAI-compatible chat completions provider.
pub struct OpenAiImprover {
    http: Client,
    model: String,
    api_base: String,
}

impl OpenAiImprover {
    pub fn new(settings: &ProviderSettings) -> AppResult<Self> {
        let http = Client::builder()
            .user_agent("text-improver/improver")
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| AppError::Network(e.to_string()))?;

        Ok(Self {
            http,
            model: settings.model.clone(),
            api_base: settings.api_base.trim_end_matches('/').to_string(),
        })
    }

    /// The key is process-wide configuration: environment variable first,
    /// then the OS keyring. It never lives in the settings file.
    fn get_api_key() -> AppResult<String> {
        if let Ok(env_key) = std::env::var("OPENAI_API_KEY") {
            if !env_key.trim().is_empty() {
                return Ok(env_key);
            }
        }
        let entry = Entry::new(KEYRING_SERVICE, KEYRING_ACCOUNT)
            .map_err(|e| AppError::System(e.to_string()))?;
        match entry.get_password() {
            Ok(p) => Ok(p),
            Err(keyring::Error::NoEntry) => {
                Err(AppError::Validation("Missing API key".to_string()))
            }
            Err(err) => Err(AppError::System(err.to_string())),
        }
    }

    fn parse_reply(response: ChatResponse) -> AppResult<String> {
        response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content.trim().to_string())
            .ok_or_else(|| {
                AppError::Provider("Response contained no choices".to_string())
            })
    }
}

#[async_trait]
impl ImproveProvider for OpenAiImprover {
    async fn improve(&self, text: &str, instruction: &str) -> AppResult<String> {
        let api_key = Self::get_api_key()?;

        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: instruction.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: format!("{}\n\n{}", IMPROVE_WRAPPER, text),
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_OUTPUT_TOKENS,
        };

        let url = format!("{}/chat/completions", self.api_base);
        let response = self
            .http
            .post(&url)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            eprintln!("[Improver] API returned error {}: {}", status, body);
            return Err(AppError::Provider(format!("API error {}: {}", status, body)));
        }

        let parsed = response
            .json::<ChatResponse>()
            .await
            .map_err(|e| AppError::Provider(format!("Malformed response: {}", e)))?;

        Self::parse_reply(parsed)
    }
}

/// Result of one improvement cycle. Success and failure both end up in the
/// improved-text pane; failures render as `Error: <description>`. The
/// tagged variant keeps the two paths testable without changing that
/// externally visible behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImprovementOutcome {
    Improved(String),
    Failed(String),
}

impl ImprovementOutcome {
    pub fn from_result(result: AppResult<String>) -> Self {
        match result {
            Ok(text) => ImprovementOutcome::Improved(text),
            Err(e) => ImprovementOutcome::Failed(e.to_string()),
        }
    }

    /// Text rendered verbatim into the improved pane.
    pub fn display_text(&self) -> String {
        match self {
            ImprovementOutcome::Improved(text) => text.clone(),
            ImprovementOutcome::Failed(description) => format!("Error: {}", description),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_first_choice_and_trims() {
        let response: ChatResponse = serde_json::from_str(
            r#"{"choices":[{"message":{"role":"assistant","content":"  Hello world \n"}}]}"#,
        )
        .expect("valid response json");
        assert_eq!(
            OpenAiImprover::parse_reply(response).unwrap(),
            "Hello world"
        );
    }

    #[test]
    fn empty_choices_is_a_provider_error() {
        let response: ChatResponse =
            serde_json::from_str(r#"{"choices":[]}"#).expect("valid response json");
        let err = OpenAiImprover::parse_reply(response).unwrap_err();
        assert!(matches!(err, AppError::Provider(_)));
    }

    #[test]
    fn failed_outcome_renders_with_error_prefix() {
        let outcome =
            ImprovementOutcome::from_result(Err(AppError::Network("connection refused".into())));
        assert_eq!(
            outcome.display_text(),
            "Error: Network Error: connection refused"
        );
    }

    #[test]
    fn improved_outcome_renders_verbatim() {
        let outcome = ImprovementOutcome::from_result(Ok("Hello world".into()));
        assert_eq!(outcome.display_text(), "Hello world");
    }
}
