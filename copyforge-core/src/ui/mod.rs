//! Terminal UI helpers shared with the binary.

pub mod spinner;

pub use spinner::Spinner;
