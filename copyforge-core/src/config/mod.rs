//! Configuration: constants, API key retrieval, and the `copyforge.toml`
//! loader.

pub mod api_keys;
pub mod constants;
pub mod loader;

pub use api_keys::{ApiKeySources, get_api_key, load_dotenv};
pub use loader::{AgentConfig, CopyforgeConfig, RequestDefaults};
