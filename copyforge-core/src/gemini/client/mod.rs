pub mod config;

pub use config::ClientConfig;

use crate::config::constants::urls;
use crate::gemini::error::GenerateError;
use crate::gemini::models::{GenerateContentRequest, GenerateContentResponse};
use reqwest::Client as ReqwestClient;

/// Thin transport around the Gemini `generateContent` endpoint: one POST
/// per call, no retry, no streaming.
#[derive(Clone)]
pub struct Client {
    api_key: String,
    model: String,
    base_url: String,
    http: ReqwestClient,
}

impl Client {
    pub fn new(api_key: String, model: String) -> Self {
        Self::with_config(api_key, model, ClientConfig::default())
    }

    pub fn with_config(api_key: String, model: String, config: ClientConfig) -> Self {
        let http = ReqwestClient::builder()
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            .pool_idle_timeout(config.pool_idle_timeout)
            .tcp_keepalive(config.tcp_keepalive)
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            api_key,
            model,
            base_url: urls::GEMINI_API_BASE.to_string(),
            http,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Generate content with the Gemini API.
    pub async fn generate(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GenerateError> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        let response = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| GenerateError::Transport(format!("failed to send request: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(GenerateError::Api {
                status: status.as_u16(),
                message: error_text,
            });
        }

        response
            .json()
            .await
            .map_err(|e| GenerateError::Transport(format!("failed to parse response: {e}")))
    }
}
