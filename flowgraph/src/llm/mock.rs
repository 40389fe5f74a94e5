//! Mock LLM for tests: scripted responses, recorded calls.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use super::{CallOptions, LlmClient, LlmResponse};
use crate::error::FlowError;
use crate::message::Message;

/// Mock LLM: returns scripted responses in order, then repeats the last one.
///
/// Every call is recorded (messages and options) so tests can assert how often and with
/// what prompt the model was invoked. `MockLlm::failing` returns `FlowError::Llm` on every call.
///
/// **Interaction**: Implements `LlmClient`; injected into pipeline nodes in tests.
pub struct MockLlm {
    responses: Mutex<VecDeque<String>>,
    last: Mutex<Option<String>>,
    calls: Mutex<Vec<(Vec<Message>, CallOptions)>>,
    fail_with: Option<String>,
}

impl MockLlm {
    /// Mock that always answers `content`.
    pub fn new(content: impl Into<String>) -> Self {
        Self::sequence(vec![content.into()])
    }

    /// Mock that answers each entry once, in order; the last entry repeats.
    pub fn sequence(responses: Vec<String>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            last: Mutex::new(None),
            calls: Mutex::new(Vec::new()),
            fail_with: None,
        }
    }

    /// Mock whose every call fails with `FlowError::Llm(message)`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            fail_with: Some(message.into()),
            ..Self::sequence(Vec::new())
        }
    }

    /// Number of `invoke` calls so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|c| c.len()).unwrap_or_default()
    }

    /// Recorded calls: messages and options, oldest first.
    pub fn calls(&self) -> Vec<(Vec<Message>, CallOptions)> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    /// Text of the last user message of each call, oldest first.
    pub fn prompts(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|(messages, _)| {
                messages.into_iter().rev().find_map(|m| match m {
                    Message::User(s) => Some(s),
                    _ => None,
                })
            })
            .collect()
    }
}

#[async_trait]
impl LlmClient for MockLlm {
    async fn invoke(
        &self,
        messages: &[Message],
        options: &CallOptions,
    ) -> Result<LlmResponse, FlowError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push((messages.to_vec(), *options));
        }
        if let Some(message) = &self.fail_with {
            return Err(FlowError::Llm(message.clone()));
        }

        let next = self.responses.lock().ok().and_then(|mut q| q.pop_front());
        let mut last = self
            .last
            .lock()
            .map_err(|_| FlowError::Llm("mock state poisoned".into()))?;
        if let Some(content) = next {
            *last = Some(content);
        }
        let content = last
            .clone()
            .ok_or_else(|| FlowError::Llm("mock has no scripted response".into()))?;
        Ok(LlmResponse { content })
    }
}
