//! Export pipeline.
//!
//! The [`ExportController`] compiles every slide of a deck and streams the
//! placement commands into a [`DeckWriter`]. Only one export may be in flight
//! at a time; a second request while one is running is answered with
//! [`ExportOutcome::Busy`] instead of queuing.

mod artifact;
mod controller;
mod writer;

pub use artifact::{Artifact, DECK_FILE_NAME};
pub use controller::{ExportController, ExportOutcome, ExportState};
pub use writer::DeckWriter;
