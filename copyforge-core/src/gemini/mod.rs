//! Gemini API wire layer: HTTP client configuration, request/response
//! models, and the error type shared with the generation client.

pub mod client;
pub mod error;
pub mod models;

pub use client::{Client, ClientConfig};
pub use error::GenerateError;
pub use models::{
    Candidate, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part,
    SystemInstruction,
};
