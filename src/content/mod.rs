//! Content Model: the fixed slide table the deck is built from.
//!
//! Slides and sections are plain immutable data. The layout compiler reads
//! them; nothing writes back.

mod deck;
mod types;

pub use deck::Deck;
pub use types::{
    Bullets, ChecklistEntry, Checklist, Column, Comparison, DualColumn, ImageCallout, Quote,
    Section, Slide, Stat, StatBlock, Timeline, TimelineStep,
};
