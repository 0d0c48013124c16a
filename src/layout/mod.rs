//! Slide layout.
//!
//! Turns a [`Slide`](crate::content::Slide) into an ordered list of
//! [`PlacementCommand`]s positioned on a fixed 16:9 canvas measured in inches.
//! Layout is a pure function of the slide, its index and the canvas width.

pub mod archetype;
pub mod command;
pub mod compiler;
pub mod geometry;
pub mod height;
pub mod palette;

pub use command::{Align, Color, PlacementCommand, ShapeCommand, ShapeKind, TextCommand, TextStyle};
pub use compiler::{CompiledSlide, SectionPlacement, SlideCompiler, compile};
pub use geometry::{CANVAS_HEIGHT, CANVAS_WIDTH, Canvas, LayoutBox, Rect};
pub use height::section_height;
