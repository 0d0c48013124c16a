//! Unified error types for the deck exporter.
//!
//! Layout compilation itself is infallible; errors only arise while loading
//! the content table, serializing the deck, or saving the artifact.

// Submodule declarations
pub mod conversions;
pub mod types;

// Re-exports
pub use types::{Error, Result};
