//! Chat module - AI-powered analysis of computed footprints
//!
//! This module provides:
//! - An explicit conversation history (`ChatSession`) owned by the caller,
//!   passed to each turn; nothing lives in ambient state
//! - A backend seam (`ChatBackend`) with a Gemini HTTP implementation

pub mod gemini;

pub use gemini::GeminiClient;

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Who authored a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatRole {
    /// Role string expected by the Gemini API
    pub fn wire_name(&self) -> &'static str {
        match self {
            ChatRole::User => "user",
            ChatRole::Assistant => "model",
        }
    }
}

/// A single conversation turn
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
            timestamp: chrono::Utc::now(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            text: text.into(),
            timestamp: chrono::Utc::now(),
        }
    }
}

/// Text-generation backend for a chat session.
///
/// One blocking request per turn; the full history is sent each time.
/// No retry, no streaming.
pub trait ChatBackend {
    fn generate(&self, history: &[ChatMessage]) -> Result<String>;
}

/// Conversation history for one analysis session.
///
/// The session lives only as long as the caller keeps it; saving is an
/// explicit step (`into_transcript`).
#[derive(Debug, Default)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Send a user message and append the model's reply to the history.
    ///
    /// On error the user message is kept so the caller can retry the turn
    /// without losing what was typed.
    pub fn ask(&mut self, backend: &dyn ChatBackend, text: impl Into<String>) -> Result<String> {
        self.messages.push(ChatMessage::user(text));
        let reply = backend.generate(&self.messages)?;
        self.messages.push(ChatMessage::assistant(reply.clone()));
        Ok(reply)
    }

    /// Consume the session into a persistable transcript
    pub fn into_transcript(self, model: String) -> ChatTranscript {
        let started_at = self
            .messages
            .first()
            .map(|message| message.timestamp)
            .unwrap_or_else(chrono::Utc::now);

        ChatTranscript {
            started_at,
            model,
            messages: self.messages,
        }
    }
}

/// A chat session persisted to disk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTranscript {
    pub started_at: chrono::DateTime<chrono::Utc>,
    pub model: String,
    pub messages: Vec<ChatMessage>,
}
