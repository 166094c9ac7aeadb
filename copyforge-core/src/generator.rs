//! The generation client: one call to the Gemini endpoint with fixed
//! sampling parameters, returning generated copy or a generic failure.

use crate::catalog::Framework;
use crate::config::constants::generation;
use crate::gemini::{
    Client, ClientConfig, Content, GenerateContentRequest, GenerationConfig, SystemInstruction,
};
use crate::prompt::{self, BuiltPrompt, ContentRequest};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

pub use crate::gemini::GenerateError;

/// One piece of generated copy. Ephemeral: the session holds at most one
/// at a time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedResponse {
    pub content: String,
    pub framework: Framework,
    pub timestamp: DateTime<Utc>,
}

/// Seam between the session/CLI and the hosted endpoint, so tests can run
/// against a scripted generator.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, request: &ContentRequest) -> Result<GeneratedResponse, GenerateError>;
}

/// Production generator backed by the Gemini `generateContent` endpoint.
pub struct ContentGenerator {
    client: Client,
}

impl ContentGenerator {
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            client: Client::new(api_key, model),
        }
    }

    pub fn with_config(api_key: String, model: String, config: ClientConfig) -> Self {
        Self {
            client: Client::with_config(api_key, model, config),
        }
    }

    pub fn model(&self) -> &str {
        self.client.model()
    }

    fn wire_request(built: &BuiltPrompt) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content::user_text(built.prompt.clone())],
            system_instruction: Some(SystemInstruction::from_text(
                built.system_instruction.clone(),
            )),
            generation_config: Some(GenerationConfig {
                temperature: generation::TEMPERATURE,
                top_k: generation::TOP_K,
                top_p: generation::TOP_P,
                max_output_tokens: generation::MAX_OUTPUT_TOKENS,
            }),
        }
    }

    /// Empty model output is not an error; it maps to the fixed fallback.
    fn fallback_if_empty(text: String) -> String {
        if text.trim().is_empty() {
            tracing::warn!("model returned empty output, using fallback text");
            generation::EMPTY_OUTPUT_FALLBACK.to_string()
        } else {
            text
        }
    }
}

#[async_trait]
impl TextGenerator for ContentGenerator {
    async fn generate(&self, request: &ContentRequest) -> Result<GeneratedResponse, GenerateError> {
        let built = prompt::build(request);
        let wire = Self::wire_request(&built);

        let response = self.client.generate(&wire).await.inspect_err(|err| {
            tracing::error!(error = %err, model = self.client.model(), "content generation failed");
        })?;

        Ok(GeneratedResponse {
            content: Self::fallback_if_empty(response.concatenated_text()),
            framework: request.framework,
            timestamp: Utc::now(),
        })
    }
}
