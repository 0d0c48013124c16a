//! Canvas geometry in canvas units (inches).

/// Width of the 16:9 slide surface.
pub const CANVAS_WIDTH: f64 = 10.0;
/// Height of the 16:9 slide surface.
pub const CANVAS_HEIGHT: f64 = 5.625;

/// The fixed slide surface commands are placed on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
}

impl Canvas {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(CANVAS_WIDTH, CANVAS_HEIGHT)
    }
}

/// An axis-aligned rectangle.
///
/// Extents are never negative: [`Rect::new`] clamps width and height at zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self {
            x,
            y,
            w: w.max(0.0),
            h: h.max(0.0),
        }
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    /// Shrink the rectangle by `margin` on every side.
    pub fn inset(&self, margin: f64) -> Self {
        Self::new(
            self.x + margin,
            self.y + margin,
            self.w - margin * 2.0,
            self.h - margin * 2.0,
        )
    }
}

/// The inset content rectangle of one section plus the slide's accent color.
///
/// Derived per section during a single compilation and discarded afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutBox {
    pub rect: Rect,
    pub accent: super::Color,
}

impl LayoutBox {
    pub fn new(rect: Rect, accent: super::Color) -> Self {
        Self { rect, accent }
    }
}
