//! PowerPoint (`.pptx`) output.
//!
//! [`MutablePresentation`] implements [`DeckWriter`](crate::export::DeckWriter):
//! each compiled slide becomes one slide part whose shape tree holds the
//! placement commands in paint order.

pub mod format;
pub mod package;
pub mod template;
pub mod writer;

pub use format::{ParagraphFormat, TextFormat};
pub use writer::{MutablePresentation, MutableShape, MutableSlide};
