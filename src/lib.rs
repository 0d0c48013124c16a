//! Acid-Fast Deck - layout compiler and PowerPoint exporter for the
//! Acid-Fast Staining showcase.
//!
//! The crate turns a fixed, data-driven slide deck into an editable `.pptx`
//! file. Each slide is compiled into absolutely positioned shapes and text
//! boxes on a 10 x 5.625 inch canvas and then serialized as PresentationML.
//!
//! # Pipeline
//!
//! - [`content`]: the slide content table (slides made of typed sections)
//! - [`layout`]: height estimation, the slide compiler and archetype renderers
//! - [`export`]: the single-flight [`ExportController`](export::ExportController)
//!   and the [`DeckWriter`](export::DeckWriter) boundary
//! - [`ooxml`]: the PresentationML deck writer
//!
//! # Example
//!
//! ```no_run
//! use acid_fast_deck::content::Deck;
//! use acid_fast_deck::export::{ExportController, ExportOutcome};
//! use acid_fast_deck::ooxml::pptx::MutablePresentation;
//!
//! # fn main() -> acid_fast_deck::Result<()> {
//! let deck = Deck::builtin()?;
//! let controller = ExportController::default();
//! let mut writer = MutablePresentation::new();
//!
//! if let ExportOutcome::Completed(artifact) = controller.export(&deck, &mut writer)? {
//!     let path = artifact.save_in(".")?;
//!     println!("saved {}", path.display());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Layout alone is a pure function and needs no writer:
//!
//! ```
//! use acid_fast_deck::content::Deck;
//! use acid_fast_deck::layout::SlideCompiler;
//!
//! let deck = Deck::builtin().unwrap();
//! let compiled = SlideCompiler::default().compile(0, &deck.slides()[0]);
//! assert!(!compiled.commands.is_empty());
//! ```

pub mod common;
pub mod config;
pub mod content;
pub mod export;
pub mod layout;
pub mod ooxml;

pub use common::{Error, Result};
pub use config::ExportConfig;
pub use content::{Deck, Section, Slide};
pub use export::{Artifact, DeckWriter, ExportController, ExportOutcome};
pub use layout::{CompiledSlide, PlacementCommand, SlideCompiler};
