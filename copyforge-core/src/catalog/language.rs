//! Supported output locales and their prompt instructions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Output language for generated copy.
///
/// Anything the catalog cannot recognize falls back to English, so the
/// prompt always carries exactly one language instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputLanguage {
    English,
    Vietnamese,
    Spanish,
}

impl OutputLanguage {
    pub const ALL: [OutputLanguage; 3] = [
        OutputLanguage::English,
        OutputLanguage::Vietnamese,
        OutputLanguage::Spanish,
    ];

    /// Stable identifier used in config files and CLI flags.
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputLanguage::English => "english",
            OutputLanguage::Vietnamese => "vietnamese",
            OutputLanguage::Spanish => "spanish",
        }
    }

    /// Human-readable label in the given locale.
    pub fn label(&self, locale: OutputLanguage) -> &'static str {
        match (self, locale) {
            (OutputLanguage::English, OutputLanguage::English) => "English",
            (OutputLanguage::English, OutputLanguage::Vietnamese) => "Tiếng Anh",
            (OutputLanguage::English, OutputLanguage::Spanish) => "Inglés",
            (OutputLanguage::Vietnamese, OutputLanguage::English) => "Vietnamese",
            (OutputLanguage::Vietnamese, OutputLanguage::Vietnamese) => "Tiếng Việt",
            (OutputLanguage::Vietnamese, OutputLanguage::Spanish) => "Vietnamita",
            (OutputLanguage::Spanish, OutputLanguage::English) => "Spanish",
            (OutputLanguage::Spanish, OutputLanguage::Vietnamese) => "Tiếng Tây Ban Nha",
            (OutputLanguage::Spanish, OutputLanguage::Spanish) => "Español",
        }
    }

    /// Language instruction embedded verbatim into the prompt.
    pub fn instruction(&self) -> &'static str {
        match self {
            OutputLanguage::English => "Write the copy in English.",
            OutputLanguage::Vietnamese => {
                "Write the copy in Vietnamese (tiếng Việt), natural and idiomatic \
                 for a Vietnamese audience."
            }
            OutputLanguage::Spanish => {
                "Write the copy in Spanish, natural and idiomatic for a \
                 Spanish-speaking audience."
            }
        }
    }

    /// Resolve a language tag, falling back to English for anything
    /// unrecognized.
    pub fn from_tag(tag: &str) -> OutputLanguage {
        match tag.trim().to_lowercase().as_str() {
            "vi" | "vn" | "vietnamese" | "tiếng việt" => OutputLanguage::Vietnamese,
            "es" | "spanish" | "español" | "espanol" => OutputLanguage::Spanish,
            _ => OutputLanguage::English,
        }
    }
}

impl Default for OutputLanguage {
    fn default() -> Self {
        OutputLanguage::English
    }
}

impl fmt::Display for OutputLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputLanguage {
    type Err = String;

    // Never errors: unknown tags resolve to English.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(OutputLanguage::from_tag(s))
    }
}
