//! # copyforge-core
//!
//! Core library for copyforge, a terminal marketing-copy generator backed
//! by the Gemini API. It provides the building blocks the CLI composes:
//!
//! - `catalog/`: static lookup tables mapping form categories (persuasion
//!   framework, content pillar, tone, output language) to multi-locale
//!   labels and the instructional fragments the prompt builder embeds.
//! - `brand`: brand profiles and the in-memory registry holding them.
//! - `prompt`: pure prompt assembly from a content request.
//! - `gemini/`: wire models and the HTTP transport for the
//!   `generateContent` endpoint.
//! - `generator`: the generation client with its fixed sampling parameters
//!   and empty-output fallback, behind the [`TextGenerator`] seam.
//! - `session`: the front-end-independent state container: form values,
//!   lifecycle phases, request-id tagging, clear and copy actions.
//! - `config/`: constants, API key retrieval, and the `copyforge.toml`
//!   loader.
//!
//! Nothing here persists: brands, form state, and generated output live
//! for one session only.

pub mod brand;
pub mod catalog;
pub mod config;
pub mod gemini;
pub mod generator;
pub mod prompt;
pub mod session;
pub mod ui;

pub use brand::{BrandProfile, BrandRegistry};
pub use catalog::{Framework, OutputLanguage, Pillar, Tone};
pub use config::{ApiKeySources, CopyforgeConfig, RequestDefaults};
pub use generator::{ContentGenerator, GenerateError, GeneratedResponse, TextGenerator};
pub use prompt::{BuiltPrompt, ContentRequest};
pub use session::{Phase, Session, SessionError};
