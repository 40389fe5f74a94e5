//! LLM backend configuration, read from env (and `.env`) once at startup.

use std::fmt;

use flowgraph::LlmProvider;

use super::{Error, RunOptions};

/// Which backend to call, with which key and model.
///
/// Built by [`from_env`](Self::from_env) or [`from_env_with_options`](Self::from_env_with_options).
/// The provider decides the key variable (`OPENAI_API_KEY` or `GROQ_API_KEY`) and the
/// default model and base URL.
#[derive(Clone, PartialEq)]
pub struct LlmConfig {
    pub provider: LlmProvider,
    pub api_key: String,
    /// Base URL override; `None` uses the provider default.
    pub api_base: Option<String>,
    pub model: String,
}

impl fmt::Debug for LlmConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LlmConfig")
            .field("provider", &self.provider)
            .field("api_key", &"***")
            .field("api_base", &self.api_base)
            .field("model", &self.model)
            .finish()
    }
}

impl LlmConfig {
    /// Fill config from env vars.
    ///
    /// `LLM_PROVIDER` (default `openai`), the provider's key variable (required),
    /// `LLM_MODEL` (default per provider), `OPENAI_API_BASE` (OpenAI only).
    pub fn from_env() -> Result<Self, Error> {
        Self::from_env_with_options(&RunOptions::default())
    }

    /// Like [`from_env`](Self::from_env); provider and model from `options` win over env.
    pub fn from_env_with_options(options: &RunOptions) -> Result<Self, Error> {
        Self::from_lookup(|key| std::env::var(key).ok(), options)
    }

    /// Resolves config through `lookup`. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F, options: &RunOptions) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let provider = match options.provider {
            Some(p) => p,
            None => match get("LLM_PROVIDER") {
                Some(name) => name.parse::<LlmProvider>()?,
                None => LlmProvider::default(),
            },
        };
        let key_var = provider.api_key_var();
        let api_key = get(key_var).ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("{} is not set; please configure it in .env", key_var),
            )
        })?;
        let api_base = match provider {
            LlmProvider::OpenAi => get("OPENAI_API_BASE"),
            LlmProvider::Groq => None,
        };
        let model = options
            .model
            .clone()
            .filter(|m| !m.trim().is_empty())
            .or_else(|| get("LLM_MODEL"))
            .unwrap_or_else(|| provider.default_model().to_string());

        Ok(Self {
            provider,
            api_key,
            api_base,
            model,
        })
    }

    /// Base URL the client will call.
    pub fn effective_api_base(&self) -> &str {
        self.api_base
            .as_deref()
            .unwrap_or(self.provider.default_api_base())
    }

    /// One-line description for logs; never includes the key.
    pub fn summary(&self) -> String {
        format!(
            "provider={} model={} api_base={}",
            self.provider,
            self.model,
            self.effective_api_base()
        )
    }
}
