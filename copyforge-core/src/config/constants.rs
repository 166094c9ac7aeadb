/// Model ID constants for the Gemini endpoint
pub mod models {
    pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
    pub const SUPPORTED_MODELS: &[&str] = &[
        "gemini-2.5-flash",
        "gemini-2.5-flash-lite",
        "gemini-2.5-pro",
    ];

    /// Whether a model id is in the known-good set. Unknown ids are still
    /// sent to the endpoint; callers use this to warn, not to reject.
    pub fn is_supported(model: &str) -> bool {
        SUPPORTED_MODELS.contains(&model)
    }
}

/// URL constants for API endpoints
pub mod urls {
    pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
}

/// Default configuration values
pub mod defaults {
    use super::models;

    pub const DEFAULT_MODEL: &str = models::DEFAULT_MODEL;
    pub const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";
    pub const FALLBACK_API_KEY_ENV: &str = "GOOGLE_API_KEY";
    pub const CONFIG_FILE_NAME: &str = "copyforge.toml";
    pub const CONFIG_HOME_DIR: &str = ".copyforge";
}

/// Fixed sampling configuration for every generation request
pub mod generation {
    pub const TEMPERATURE: f32 = 0.9;
    pub const TOP_K: u32 = 40;
    pub const TOP_P: f32 = 0.95;
    pub const MAX_OUTPUT_TOKENS: u32 = 2048;

    /// Shown in place of an empty model response. Empty output is not an
    /// error; it maps to this placeholder.
    pub const EMPTY_OUTPUT_FALLBACK: &str =
        "No content was generated. Please adjust the request and try again.";
}

/// Prompt assembly constants
pub mod prompts {
    /// Audience line used when neither the request nor the brand supplies one.
    pub const FALLBACK_AUDIENCE: &str = "General Audience";
}

/// Terminal UI constants
pub mod ui {
    /// How long the transient "copied" indicator stays visible.
    pub const COPY_INDICATOR_MILLIS: u64 = 2_000;
}
