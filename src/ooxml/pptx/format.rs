//! Run and paragraph formatting for PPTX text bodies.

use crate::common::unit::pt_to_centipoints;
use crate::layout::{Align, TextStyle};

/// Character formatting applied to every run of a text box.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextFormat {
    /// Font family
    pub font: Option<String>,
    /// Font size in points
    pub size: Option<f64>,
    /// Bold text
    pub bold: Option<bool>,
    /// Italic text
    pub italic: Option<bool>,
    /// Text color in hex RGB (e.g., "FF0000" for red)
    pub color: Option<String>,
}

impl TextFormat {
    /// Font size in hundredths of a point, as stored in `a:rPr/@sz`.
    pub fn size_centipoints(&self) -> Option<u32> {
        self.size.map(pt_to_centipoints)
    }
}

/// Paragraph formatting applied to every paragraph of a text box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParagraphFormat {
    /// Value of `a:pPr/@algn`
    pub align: Option<&'static str>,
    /// Line spacing in thousandths of a percent (120000 = 1.2 lines)
    pub line_spacing: Option<u32>,
}

impl ParagraphFormat {
    pub fn is_empty(&self) -> bool {
        self.align.is_none() && self.line_spacing.is_none()
    }
}

fn align_value(align: Align) -> &'static str {
    match align {
        Align::Left => "l",
        Align::Center => "ctr",
        Align::Right => "r",
    }
}

impl From<&TextStyle> for TextFormat {
    fn from(style: &TextStyle) -> Self {
        Self {
            font: style.font_face.map(str::to_string),
            size: Some(style.font_size),
            bold: Some(style.bold),
            italic: Some(style.italic),
            color: Some(style.color.hex().to_string()),
        }
    }
}

impl From<&TextStyle> for ParagraphFormat {
    fn from(style: &TextStyle) -> Self {
        Self {
            align: style.align.map(align_value),
            line_spacing: style
                .line_spacing
                .map(|multiple| (multiple * 100_000.0).round() as u32),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::palette::{BODY, HEADING};

    #[test]
    fn test_text_format_from_style() {
        let format = TextFormat::from(&HEADING);
        assert_eq!(format.font.as_deref(), Some("Calibri"));
        assert_eq!(format.size_centipoints(), Some(1600));
        assert_eq!(format.bold, Some(true));
        assert_eq!(format.italic, Some(false));
        assert_eq!(format.color.as_deref(), Some(HEADING.color.hex()));
    }

    #[test]
    fn test_paragraph_format_from_style() {
        assert!(ParagraphFormat::from(&BODY).is_empty());

        let styled = BODY.with_line_spacing(1.2).centered();
        let format = ParagraphFormat::from(&styled);
        assert_eq!(format.align, Some("ctr"));
        assert_eq!(format.line_spacing, Some(120_000));
    }
}
