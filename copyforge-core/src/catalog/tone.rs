//! Tone of voice options for generated copy.

use super::OutputLanguage;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stylistic register requested for the generated text. Unlike frameworks
/// and pillars, tones carry no instructional fragment; the tone label is
/// written directly into the content-request block of the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tone {
    Professional,
    Friendly,
    Witty,
    Inspirational,
    Authoritative,
    Casual,
}

impl Tone {
    pub const ALL: [Tone; 6] = [
        Tone::Professional,
        Tone::Friendly,
        Tone::Witty,
        Tone::Inspirational,
        Tone::Authoritative,
        Tone::Casual,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Professional => "professional",
            Tone::Friendly => "friendly",
            Tone::Witty => "witty",
            Tone::Inspirational => "inspirational",
            Tone::Authoritative => "authoritative",
            Tone::Casual => "casual",
        }
    }

    pub fn label(&self, locale: OutputLanguage) -> &'static str {
        use OutputLanguage::*;
        match (self, locale) {
            (Tone::Professional, English) => "Professional",
            (Tone::Professional, Vietnamese) => "Chuyên nghiệp",
            (Tone::Professional, Spanish) => "Profesional",
            (Tone::Friendly, English) => "Friendly",
            (Tone::Friendly, Vietnamese) => "Thân thiện",
            (Tone::Friendly, Spanish) => "Amigable",
            (Tone::Witty, English) => "Witty",
            (Tone::Witty, Vietnamese) => "Dí dỏm",
            (Tone::Witty, Spanish) => "Ingenioso",
            (Tone::Inspirational, English) => "Inspirational",
            (Tone::Inspirational, Vietnamese) => "Truyền cảm hứng",
            (Tone::Inspirational, Spanish) => "Inspirador",
            (Tone::Authoritative, English) => "Authoritative",
            (Tone::Authoritative, Vietnamese) => "Uy tín",
            (Tone::Authoritative, Spanish) => "Autoritativo",
            (Tone::Casual, English) => "Casual",
            (Tone::Casual, Vietnamese) => "Gần gũi",
            (Tone::Casual, Spanish) => "Informal",
        }
    }
}

impl Default for Tone {
    fn default() -> Self {
        Tone::Friendly
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "professional" => Ok(Tone::Professional),
            "friendly" => Ok(Tone::Friendly),
            "witty" | "humorous" => Ok(Tone::Witty),
            "inspirational" => Ok(Tone::Inspirational),
            "authoritative" => Ok(Tone::Authoritative),
            "casual" => Ok(Tone::Casual),
            other => Err(format!(
                "unknown tone '{other}' (expected one of: professional, friendly, witty, inspirational, authoritative, casual)"
            )),
        }
    }
}
