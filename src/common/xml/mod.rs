//! XML helpers for the PresentationML writer.

mod escape;

pub use escape::escape_xml;
