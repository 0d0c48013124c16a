//! Mutable presentation writer components for PPTX.

pub mod pres;
pub mod shape;
pub mod slide;

pub use pres::MutablePresentation;
pub use shape::MutableShape;
pub use slide::MutableSlide;
