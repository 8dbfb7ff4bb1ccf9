use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::SUMMARY_MAX_TOKENS;
use crate::{Error, Result};

const AI_REQUEST_TIMEOUT_SECS: u64 = 30;
const ANTHROPIC_MESSAGES_URL: &str = "https://api.anthropic.com/v1/messages";

#[derive(Serialize)]
struct ClaudeRequest {
    model: String,
    max_tokens: u32,
    messages: Vec<ClaudeMessage>,
}

#[derive(Serialize)]
struct ClaudeMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ClaudeResponse {
    content: Option<Vec<ClaudeContent>>,
    error: Option<ClaudeError>,
}

#[derive(Deserialize)]
struct ClaudeContent {
    text: String,
}

#[derive(Deserialize)]
struct ClaudeError {
    message: String,
}

/// Claude/Anthropic API provider
pub struct ClaudeApiProvider {
    client: Client,
    api_key: String,
    model: String,
}

impl ClaudeApiProvider {
    pub fn new(api_key: &str, model: &str) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(AI_REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build Claude HTTP client");

        Self {
            client,
            api_key: api_key.to_string(),
            model: model.to_string(),
        }
    }

    /// Send a single user message and return the first text block of the reply
    pub(crate) async fn chat(&self, prompt: &str) -> Result<String> {
        let request = ClaudeRequest {
            model: self.model.clone(),
            max_tokens: SUMMARY_MAX_TOKENS,
            messages: vec![ClaudeMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
        };

        let response = self
            .client
            .post(ANTHROPIC_MESSAGES_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", "2023-06-01")
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::AiProvider(format!("Claude API request failed: {}", e)))?;

        let claude_response: ClaudeResponse = response
            .json()
            .await
            .map_err(|e| Error::AiProvider(format!("Failed to parse Claude response: {}", e)))?;

        if let Some(error) = claude_response.error {
            return Err(Error::AiProvider(format!("Claude API error: {}", error.message)));
        }

        let content = claude_response
            .content
            .and_then(|c| c.into_iter().next())
            .map(|c| c.text)
            .unwrap_or_default();

        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_matches_anthropic_wire_shape() {
        let request = ClaudeRequest {
            model: "claude-sonnet-4-20250514".to_string(),
            max_tokens: SUMMARY_MAX_TOKENS,
            messages: vec![ClaudeMessage {
                role: "user".to_string(),
                content: "hello".to_string(),
            }],
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "claude-sonnet-4-20250514");
        assert_eq!(value["max_tokens"], 500);
        assert_eq!(value["messages"][0]["role"], "user");
        assert_eq!(value["messages"][0]["content"], "hello");
    }

    #[test]
    fn response_parser_takes_first_text_block() {
        let json = r#"{
            "id": "msg_01",
            "type": "message",
            "role": "assistant",
            "content": [
                {"type": "text", "text": "第一段摘要"},
                {"type": "text", "text": "second block"}
            ],
            "model": "claude-sonnet-4-20250514",
            "stop_reason": "end_turn"
        }"#;

        let response: ClaudeResponse = serde_json::from_str(json).unwrap();
        let text = response
            .content
            .and_then(|c| c.into_iter().next())
            .map(|c| c.text)
            .unwrap_or_default();
        assert_eq!(text, "第一段摘要");
    }

    #[test]
    fn response_parser_surfaces_api_errors() {
        let json = r#"{
            "type": "error",
            "error": {"type": "authentication_error", "message": "invalid x-api-key"}
        }"#;

        let response: ClaudeResponse = serde_json::from_str(json).unwrap();
        let error = response.error.unwrap();
        assert_eq!(error.message, "invalid x-api-key");
    }
}
