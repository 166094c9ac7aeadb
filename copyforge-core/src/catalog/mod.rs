//! Static lookup tables mapping form categories to human-readable labels
//! and to the instructional fragments consumed by the prompt builder.
//!
//! Each category is a closed enum, so fragment dispatch is exhaustive at
//! compile time. The one open edge, free-form language tags, resolves
//! through [`OutputLanguage::from_tag`] with English as the fallback.

pub mod framework;
pub mod language;
pub mod pillar;
pub mod tone;

pub use framework::Framework;
pub use language::OutputLanguage;
pub use pillar::Pillar;
pub use tone::Tone;
