use crate::common::Result;
use crate::layout::{Canvas, Color, PlacementCommand};

/// Sink for compiled slides.
///
/// The controller calls `begin_deck` once, then `begin_slide` followed by
/// `place` for every command of that slide, and finally `finish`. Commands
/// arrive in paint order.
pub trait DeckWriter {
    /// Prepare for a new deck on `canvas`, discarding any earlier state.
    fn begin_deck(&mut self, canvas: Canvas) -> Result<()> {
        let _ = canvas;
        Ok(())
    }

    /// Start a new slide with a solid `background`.
    fn begin_slide(&mut self, background: Color) -> Result<()>;

    /// Place one primitive on the current slide.
    fn place(&mut self, command: &PlacementCommand) -> Result<()>;

    /// Serialize everything written so far.
    fn finish(&mut self) -> Result<Vec<u8>>;
}
