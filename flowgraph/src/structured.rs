//! Structured model output: parse-with-fallback and schema-constrained completions.
//!
//! Two policies live here. [`parse_or_fallback`] never fails: an unparseable completion
//! becomes a [`ParseOutcome::Fallback`] built from a deterministic template.
//! [`complete_structured`] is all-or-nothing: the completion must deserialize into the
//! requested type or the call returns [`FlowError::StructuredOutput`].

use schemars::JsonSchema;
use serde::de::DeserializeOwned;

use crate::error::FlowError;
use crate::llm::{CallOptions, LlmClient};
use crate::message::Message;

/// Result of parsing a model response that has a deterministic fallback.
#[derive(Clone, Debug, PartialEq)]
pub enum ParseOutcome<T> {
    /// The response parsed.
    Parsed(T),
    /// The response did not parse; the value comes from the fallback template.
    Fallback(T),
}

impl<T> ParseOutcome<T> {
    pub fn is_fallback(&self) -> bool {
        matches!(self, ParseOutcome::Fallback(_))
    }

    pub fn value(&self) -> &T {
        match self {
            ParseOutcome::Parsed(v) | ParseOutcome::Fallback(v) => v,
        }
    }

    pub fn into_inner(self) -> T {
        match self {
            ParseOutcome::Parsed(v) | ParseOutcome::Fallback(v) => v,
        }
    }
}

/// Parses `raw` as JSON into `T`; on failure logs the error and returns `fallback()`.
pub fn parse_or_fallback<T, F>(raw: &str, fallback: F) -> ParseOutcome<T>
where
    T: DeserializeOwned,
    F: FnOnce() -> T,
{
    match serde_json::from_str::<T>(raw.trim()) {
        Ok(v) => ParseOutcome::Parsed(v),
        Err(e) => {
            tracing::warn!(error = %e, response = %raw, "JSON decode error, using fallback");
            ParseOutcome::Fallback(fallback())
        }
    }
}

/// Strips one surrounding Markdown code fence (```json ... ```), if present.
pub fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let Some(body) = rest.strip_suffix("```") else {
        return trimmed;
    };
    match body.find('\n') {
        Some(i) if body[..i].trim().chars().all(|c| c.is_ascii_alphanumeric()) => {
            body[i + 1..].trim()
        }
        _ => body.trim(),
    }
}

/// Short schema name for `T` (e.g. `BusinessAnalysis`).
pub fn schema_name<T: JsonSchema>() -> String {
    T::schema_name().into_owned()
}

/// System instruction constraining a completion to the JSON Schema of `T`.
pub fn schema_instruction<T: JsonSchema>() -> String {
    let schema = schemars::schema_for!(T);
    let schema_json = serde_json::to_string_pretty(&schema).unwrap_or_else(|_| "{}".to_string());
    format!(
        "Respond with a single JSON object that conforms to this JSON Schema. \
         Do not add commentary or Markdown fences.\n\n{}",
        schema_json
    )
}

/// Asks `llm` for a completion of `prompt` constrained to `T` and deserializes it.
///
/// Sends the schema of `T` as a system message and requests JSON output. A transport error
/// propagates as-is; a response that does not match `T` is `FlowError::StructuredOutput`.
pub async fn complete_structured<T>(
    llm: &dyn LlmClient,
    prompt: &str,
    temperature: f32,
) -> Result<T, FlowError>
where
    T: JsonSchema + DeserializeOwned,
{
    let messages = [
        Message::system(schema_instruction::<T>()),
        Message::user(prompt),
    ];
    let response = llm.invoke(&messages, &CallOptions::json(temperature)).await?;
    serde_json::from_str::<T>(strip_code_fence(&response.content)).map_err(|e| {
        FlowError::StructuredOutput {
            schema: schema_name::<T>(),
            message: e.to_string(),
        }
    })
}
