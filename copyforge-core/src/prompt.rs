//! Prompt assembly: a content request in, one instruction string plus one
//! system-instruction string out.
//!
//! Assembly is pure string concatenation over the catalog tables. No field
//! is validated; empty strings pass through verbatim.

use crate::brand::BrandProfile;
use crate::catalog::{Framework, OutputLanguage, Pillar, Tone};
use crate::config::constants::prompts;
use serde::{Deserialize, Serialize};

/// Role preamble sent as the Gemini system instruction.
pub const SYSTEM_INSTRUCTION: &str =
    "You are a senior social-media copywriter. You write marketing copy that \
     is specific, on-brand, and ready to post without editing. Respond with \
     the copy only: no preamble, no explanations, no markdown fences.";

/// Brand block used when no brand profile is selected.
const NO_BRAND_PLACEHOLDER: &str =
    "No brand profile selected; write in a clear, brand-neutral voice.";

/// The current form state, replaced wholesale on each field edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentRequest {
    pub topic: String,
    pub description: String,
    pub framework: Framework,
    pub pillar: Pillar,
    pub language: OutputLanguage,
    pub tone: Tone,
    pub target_audience: Option<String>,
    pub brand: Option<BrandProfile>,
}

impl ContentRequest {
    /// Audience line for the prompt: the explicit value, else the brand's
    /// default audience, else the fixed fallback.
    pub fn resolved_audience(&self) -> &str {
        if let Some(audience) = &self.target_audience {
            if !audience.trim().is_empty() {
                return audience;
            }
        }
        if let Some(brand) = &self.brand {
            if !brand.default_audience.trim().is_empty() {
                return &brand.default_audience;
            }
        }
        prompts::FALLBACK_AUDIENCE
    }
}

/// The assembled prompt pair handed to the generation client.
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltPrompt {
    pub prompt: String,
    pub system_instruction: String,
}

/// Assemble the prompt for a content request.
pub fn build(request: &ContentRequest) -> BuiltPrompt {
    let mut prompt = String::new();

    prompt.push_str("== Brand identity ==\n");
    match &request.brand {
        Some(brand) => {
            prompt.push_str(&format!("Brand: {}\n", brand.name));
            prompt.push_str(&format!("Industry: {}\n", brand.industry));
            prompt.push_str(&format!("About the brand: {}\n", brand.description));
            prompt.push_str(&format!("House audience: {}\n", brand.default_audience));
        }
        None => {
            prompt.push_str(NO_BRAND_PLACEHOLDER);
            prompt.push('\n');
        }
    }

    prompt.push_str("\n== Content request ==\n");
    prompt.push_str(&format!("Topic: {}\n", request.topic));
    prompt.push_str(&format!("Details: {}\n", request.description));
    prompt.push_str(&format!("Target audience: {}\n", request.resolved_audience()));
    prompt.push_str(&format!(
        "Tone of voice: {}\n",
        request.tone.label(OutputLanguage::English)
    ));
    prompt.push_str(&format!(
        "Content pillar: {}\n",
        request.pillar.label(OutputLanguage::English)
    ));

    prompt.push('\n');
    prompt.push_str(request.framework.instruction());
    prompt.push_str("\n\n");
    prompt.push_str(request.pillar.instruction());
    prompt.push_str("\n\n");
    prompt.push_str(request.language.instruction());
    prompt.push('\n');

    BuiltPrompt {
        prompt,
        system_instruction: SYSTEM_INSTRUCTION.to_string(),
    }
}
