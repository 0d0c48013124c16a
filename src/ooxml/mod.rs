//! Office Open XML output.
//!
//! Only PresentationML writing is supported: the compiled deck is serialized
//! into a minimal `.pptx` package with one master, one blank layout and one
//! theme.

pub mod error;
pub mod pptx;

pub use error::{OoxmlError, Result};
