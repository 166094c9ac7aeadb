pub mod request;
pub mod response;

pub use request::{GenerateContentRequest, GenerationConfig, SystemInstruction};
pub use response::{Candidate, GenerateContentResponse};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    pub role: String,
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    pub fn user_text(text: impl Into<String>) -> Self {
        Content {
            role: "user".into(),
            parts: vec![Part::text(text)],
        }
    }
}

/// One part of a content payload. Only text parts are used; other part
/// kinds in responses deserialize with `text: None` and are skipped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Part {
            text: Some(text.into()),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}
