//! OpenAI Chat Completions client implementing `LlmClient` (ChatOpenAI).
//!
//! Works with any OpenAI-compatible endpoint; the Groq backend is the same client pointed
//! at `LlmProvider::Groq.default_api_base()`.
//!
//! **Interaction**: Implements `LlmClient`; used by pipeline nodes like `MockLlm`.
//! Depends on `async_openai` (feature `openai`).

use async_trait::async_trait;

use crate::error::FlowError;
use crate::llm::{CallOptions, LlmClient, LlmProvider, LlmResponse, ResponseFormat};
use crate::message::Message;

use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessage,
        ChatCompletionRequestUserMessage, CreateChatCompletionRequestArgs,
        ResponseFormat as OpenAiResponseFormat,
    },
    Client,
};

/// OpenAI Chat Completions client implementing `LlmClient` (aligns with LangChain ChatOpenAI).
///
/// Build with `ChatOpenAI::with_config` (custom key / base URL) or `ChatOpenAI::for_provider`.
/// The client temperature is the default for calls whose `CallOptions` leave it unset.
pub struct ChatOpenAI {
    client: Client<OpenAIConfig>,
    model: String,
    temperature: Option<f32>,
}

impl ChatOpenAI {
    /// Build client with custom config (e.g. custom API key or base URL).
    pub fn with_config(config: OpenAIConfig, model: impl Into<String>) -> Self {
        Self {
            client: Client::with_config(config),
            model: model.into(),
            temperature: None,
        }
    }

    /// Build a client for `provider` with the given key; `api_base` overrides the provider default.
    pub fn for_provider(
        provider: LlmProvider,
        api_key: &str,
        api_base: Option<&str>,
        model: impl Into<String>,
    ) -> Self {
        let base = api_base
            .filter(|s| !s.is_empty())
            .unwrap_or(provider.default_api_base())
            .trim_end_matches('/');
        let config = OpenAIConfig::new()
            .with_api_key(api_key)
            .with_api_base(base);
        Self::with_config(config, model)
    }

    /// Set the default temperature (0–2). Lower values are more deterministic.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Model name sent with every request.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Convert our `Message` list to OpenAI request messages.
    fn messages_to_request(messages: &[Message]) -> Vec<ChatCompletionRequestMessage> {
        messages
            .iter()
            .map(|m| match m {
                Message::System(s) => ChatCompletionRequestMessage::System(
                    ChatCompletionRequestSystemMessage::from(s.as_str()),
                ),
                Message::User(s) => ChatCompletionRequestMessage::User(
                    ChatCompletionRequestUserMessage::from(s.as_str()),
                ),
                Message::Assistant(s) => {
                    ChatCompletionRequestMessage::Assistant((s.as_str()).into())
                }
            })
            .collect()
    }
}

#[async_trait]
impl LlmClient for ChatOpenAI {
    async fn invoke(
        &self,
        messages: &[Message],
        options: &CallOptions,
    ) -> Result<LlmResponse, FlowError> {
        let mut args = CreateChatCompletionRequestArgs::default();
        args.model(self.model.clone());
        args.messages(Self::messages_to_request(messages));

        if let Some(t) = options.temperature.or(self.temperature) {
            args.temperature(t);
        }
        if options.response_format == ResponseFormat::JsonObject {
            args.response_format(OpenAiResponseFormat::JsonObject);
        }

        let request = args
            .build()
            .map_err(|e| FlowError::Llm(format!("OpenAI request build failed: {}", e)))?;

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|e| FlowError::Llm(format!("OpenAI API error: {}", e)))?;

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| FlowError::Llm("OpenAI returned no choices".to_string()))?;

        Ok(LlmResponse {
            content: choice.message.content.unwrap_or_default(),
        })
    }
}
