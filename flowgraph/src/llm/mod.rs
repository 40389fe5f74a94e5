//! LLM client abstraction used by pipeline nodes.
//!
//! Nodes depend on `Arc<dyn LlmClient>`; the concrete backend (`ChatOpenAI` for OpenAI or
//! Groq, `MockLlm` in tests) is chosen once at startup from [`LlmProvider`].

mod mock;
mod provider;

#[cfg(feature = "openai")]
mod openai;

pub use mock::MockLlm;
pub use provider::LlmProvider;

#[cfg(feature = "openai")]
pub use openai::ChatOpenAI;

use async_trait::async_trait;

use crate::error::FlowError;
use crate::message::Message;

/// Requested shape of the completion text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ResponseFormat {
    /// Free text.
    #[default]
    Text,
    /// The provider is asked to return a single JSON object.
    JsonObject,
}

/// Per-call options. Unset fields fall back to the client's defaults.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CallOptions {
    /// Sampling temperature 0–2, lower is more deterministic.
    pub temperature: Option<f32>,
    pub response_format: ResponseFormat,
}

impl CallOptions {
    /// JSON-object output at the given temperature.
    pub fn json(temperature: f32) -> Self {
        Self {
            temperature: Some(temperature),
            response_format: ResponseFormat::JsonObject,
        }
    }
}

/// Response from an LLM completion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LlmResponse {
    /// Assistant message content (plain text; JSON when `ResponseFormat::JsonObject`).
    pub content: String,
}

/// LLM client: given messages, returns the assistant text.
///
/// Implementations: `MockLlm` (scripted responses), `ChatOpenAI` (real API, feature `openai`).
/// Aligns with LangChain's single-call `invoke`.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Invoke one completion turn.
    async fn invoke(
        &self,
        messages: &[Message],
        options: &CallOptions,
    ) -> Result<LlmResponse, FlowError>;
}
