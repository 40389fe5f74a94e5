//! Supported LLM backends, selected by the `LLM_PROVIDER` setting.

use std::fmt;

/// LLM backend. Both speak the OpenAI Chat Completions protocol and are served by `ChatOpenAI`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LlmProvider {
    #[default]
    OpenAi,
    Groq,
}

impl LlmProvider {
    /// API base URL used when no override is configured.
    pub fn default_api_base(&self) -> &'static str {
        match self {
            LlmProvider::OpenAi => "https://api.openai.com/v1",
            LlmProvider::Groq => "https://api.groq.com/openai/v1",
        }
    }

    /// Model used when `LLM_MODEL` is not set.
    pub fn default_model(&self) -> &'static str {
        match self {
            LlmProvider::OpenAi => "gpt-4o-mini",
            LlmProvider::Groq => "llama-3.3-70b-versatile",
        }
    }

    /// Environment variable holding this provider's API key.
    pub fn api_key_var(&self) -> &'static str {
        match self {
            LlmProvider::OpenAi => "OPENAI_API_KEY",
            LlmProvider::Groq => "GROQ_API_KEY",
        }
    }
}

impl std::str::FromStr for LlmProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "openai" => Ok(Self::OpenAi),
            "groq" => Ok(Self::Groq),
            _ => Err(format!("unknown llm provider: {} (use openai or groq)", s)),
        }
    }
}

impl fmt::Display for LlmProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LlmProvider::OpenAi => write!(f, "openai"),
            LlmProvider::Groq => write!(f, "groq"),
        }
    }
}
