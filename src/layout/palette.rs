//! Colors, type styles and the accent lookup table.

use super::command::{Color, TextStyle};
use super::geometry::Rect;
use crate::common::unit::pt_to_units;
use phf::phf_map;

pub const FONT_FACE: &str = "Calibri";

pub const BACKGROUND: Color = Color::new("0B1120");
pub const FALLBACK_ACCENT: Color = Color::new("22D3EE");
pub const WHITE: Color = Color::new("FFFFFF");

pub const CONTAINER_FILL: Color = Color::new("152033");
pub const CONTAINER_LINE: Color = Color::new("1F2937");
pub const PANEL_DARK: Color = Color::new("111827");
pub const PANEL_SLATE: Color = Color::new("1E293B");
pub const CARD_FILL: Color = Color::new("F8FAFC");
pub const CARD_LINE: Color = Color::new("CBD5F5");

pub const INK: Color = Color::new("0F172A");
pub const INK_SOFT: Color = Color::new("1E293B");
pub const HEADING_TEXT: Color = Color::new("E0F2FE");
pub const BODY_TEXT: Color = Color::new("93C5FD");
pub const DETAIL_TEXT: Color = Color::new("BFDBFE");
pub const COLUMN_HEADING_TEXT: Color = Color::new("7DD3FC");
pub const SOURCE_TEXT: Color = Color::new("2563EB");

/// Section and item headings.
pub const HEADING: TextStyle = TextStyle::new(16.0, HEADING_TEXT).bold().with_face(FONT_FACE);
/// Body copy and bullet lists.
pub const BODY: TextStyle = TextStyle::new(13.0, BODY_TEXT).with_face(FONT_FACE);
/// Secondary lines under timeline steps and checklist items.
pub const DETAIL: TextStyle = BODY.with_size(11.0).with_color(DETAIL_TEXT);

// Accent tokens double as the preview's gradient classes.
static ACCENTS: phf::Map<&'static str, &'static str> = phf_map! {
    "from-cyan-400 via-sky-500 to-purple-500" => "6A5EF5",
    "from-pink-500 via-rose-500 to-rose-600" => "EC4899",
    "from-emerald-400 via-teal-400 to-cyan-500" => "34D399",
    "from-indigo-400 via-sky-500 to-sky-500" => "6366F1",
    "from-orange-400 via-amber-400 to-amber-500" => "F97316",
    "from-purple-400 via-fuchsia-500 to-fuchsia-500" => "A855F7",
    "from-rose-500 via-pink-500 to-red-500" => "F43F5E",
    "from-sky-400 via-sky-500 to-indigo-500" => "38BDF8",
};

/// Resolve an accent token, falling back to [`FALLBACK_ACCENT`] for unknown tokens.
pub fn accent_color(token: &str) -> Color {
    match ACCENTS.get(token) {
        Some(hex) => Color::new(*hex),
        None => {
            tracing::warn!(token, "unknown accent token, using fallback color");
            FALLBACK_ACCENT
        },
    }
}

/// Height of a single-line text box at `font_size` points.
///
/// Line height is 1.2 em plus the default 0.05 top and bottom insets.
#[inline]
pub fn line_height(font_size: f64) -> f64 {
    pt_to_units(font_size) * 1.2 + 0.1
}

/// A decorative ellipse in the header band, anchored to the right canvas edge.
#[derive(Debug, Clone, Copy)]
pub struct HeroShape {
    /// Distance from the right canvas edge to the shape's left edge
    pub right_offset: f64,
    pub y: f64,
    pub size: f64,
    pub fill: Color,
    pub rotation: f64,
}

impl HeroShape {
    pub fn rect(&self, canvas_width: f64) -> Rect {
        Rect::new(canvas_width - self.right_offset, self.y, self.size, self.size)
    }
}

pub const HERO_SHAPES: [HeroShape; 3] = [
    HeroShape {
        right_offset: 1.6,
        y: 0.2,
        size: 1.1,
        fill: Color::new("22D3EE"),
        rotation: 12.0,
    },
    HeroShape {
        right_offset: 1.1,
        y: 0.9,
        size: 0.6,
        fill: Color::new("A855F7"),
        rotation: -24.0,
    },
    HeroShape {
        right_offset: 2.4,
        y: 0.3,
        size: 0.7,
        fill: Color::new("F472B6"),
        rotation: 35.0,
    },
];
