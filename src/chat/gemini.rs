//! Gemini generateContent client
//!
//! Single blocking request per conversation turn against the
//! generativelanguage REST API. The API key is resolved from an
//! environment variable at construction and sent as a header, so it
//! never appears in URLs, config files, or error output.

use crate::chat::{ChatBackend, ChatMessage};
use crate::config::Config;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

const API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    role: &'static str,
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
struct ApiErrorResponse {
    error: Option<ApiErrorDetails>,
}

#[derive(Deserialize)]
struct ApiErrorDetails {
    message: Option<String>,
}

/// Blocking Gemini API client
#[derive(Debug)]
pub struct GeminiClient {
    client: reqwest::blocking::Client,
    api_key: String,
    model: String,
}

impl GeminiClient {
    /// Build a client from configuration. Fails if the configured API key
    /// environment variable is unset or empty.
    pub fn from_config(config: &Config) -> Result<Self> {
        let api_key = std::env::var(&config.api_key_env)
            .ok()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| Error::ApiKeyMissing(config.api_key_env.clone()))?;

        let client = reqwest::blocking::Client::builder()
            .user_agent(format!("footprint-calc/{}", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_key,
            model: config.model.clone(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn request_body(history: &[ChatMessage]) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: history
                .iter()
                .map(|message| Content {
                    role: message.role.wire_name(),
                    parts: vec![Part {
                        text: message.text.clone(),
                    }],
                })
                .collect(),
        }
    }
}

impl ChatBackend for GeminiClient {
    fn generate(&self, history: &[ChatMessage]) -> Result<String> {
        let url = format!("{}/{}:generateContent", API_BASE_URL, self.model);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&Self::request_body(history))
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ApiErrorResponse>()
                .ok()
                .and_then(|body| body.error)
                .and_then(|details| details.message)
                .unwrap_or_else(|| "no specific error message provided".to_string());

            return Err(Error::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: GenerateContentResponse = response.json()?;
        extract_text(body)
    }
}

/// Walk candidates -> content -> parts and pull out the reply text
fn extract_text(body: GenerateContentResponse) -> Result<String> {
    let candidate = body
        .candidates
        .into_iter()
        .next()
        .ok_or(Error::NoCandidates)?;

    let text = candidate
        .content
        .and_then(|content| content.parts.into_iter().next())
        .map(|part| part.text)
        .filter(|text| !text.is_empty())
        .ok_or(Error::EmptyResponse)?;

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response_with(candidates: Vec<Candidate>) -> GenerateContentResponse {
        GenerateContentResponse { candidates }
    }

    #[test]
    fn test_extract_text_happy_path() {
        let body = response_with(vec![Candidate {
            content: Some(CandidateContent {
                parts: vec![Part {
                    text: "reply".to_string(),
                }],
            }),
        }]);
        assert_eq!(extract_text(body).unwrap(), "reply");
    }

    #[test]
    fn test_extract_text_no_candidates() {
        let err = extract_text(response_with(vec![])).unwrap_err();
        assert!(matches!(err, Error::NoCandidates));
    }

    #[test]
    fn test_extract_text_empty_parts() {
        let body = response_with(vec![Candidate {
            content: Some(CandidateContent { parts: vec![] }),
        }]);
        assert!(matches!(extract_text(body).unwrap_err(), Error::EmptyResponse));
    }

    #[test]
    fn test_request_body_maps_roles() {
        let history = vec![
            ChatMessage::user("hello"),
            ChatMessage::assistant("hi"),
            ChatMessage::user("follow-up"),
        ];

        let body = GeminiClient::request_body(&history);
        assert_eq!(body.contents.len(), 3);
        assert_eq!(body.contents[0].role, "user");
        assert_eq!(body.contents[1].role, "model");
        assert_eq!(body.contents[2].role, "user");
        assert_eq!(body.contents[2].parts[0].text, "follow-up");
    }

    #[test]
    fn test_response_parses_from_api_json() {
        let json = r#"{
            "candidates": [
                {"content": {"role": "model", "parts": [{"text": "analysis text"}]}}
            ]
        }"#;
        let body: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(extract_text(body).unwrap(), "analysis text");
    }
}
