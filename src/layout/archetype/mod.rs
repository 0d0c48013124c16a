//! Archetype renderers.
//!
//! Each renderer maps one section payload and its inset content box to the
//! primitives drawn inside the section container. Renderers only append to
//! the output list; they never look at the cursor or other sections.

pub mod bullets;
pub mod callout;
pub mod cards;
pub mod columns;
pub mod sequence;

use super::command::{PlacementCommand, TextCommand, TextStyle};
use super::geometry::{LayoutBox, Rect};
use super::palette::{HEADING, line_height};
use crate::content::Section;

/// Glyph that prefixes every bullet line.
pub const BULLET: &str = "•";

/// Emit the primitives for `section` into `out`.
///
/// Returns `false`, emitting nothing, for unsupported sections.
pub fn render(section: &Section, area: &LayoutBox, out: &mut Vec<PlacementCommand>) -> bool {
    match section {
        Section::Bullets(s) => bullets::render(s, area, out),
        Section::DualColumn(s) => columns::render_dual_column(s, area, out),
        Section::Timeline(s) => sequence::render_timeline(s, area, out),
        Section::StatBlock(s) => cards::render_stat_block(s, area, out),
        Section::ImageCallout(s) => callout::render(s, area, out),
        Section::Comparison(s) => columns::render_comparison(s, area, out),
        Section::Checklist(s) => sequence::render_checklist(s, area, out),
        Section::Quote(s) => cards::render_quote(s, area, out),
        Section::Unsupported { .. } => return false,
    }
    true
}

/// A text command one line tall for the style's font size.
pub(crate) fn single_line(
    content: impl Into<String>,
    x: f64,
    y: f64,
    w: f64,
    style: TextStyle,
) -> PlacementCommand {
    let rect = Rect::new(x, y, w, line_height(style.font_size));
    TextCommand::new(content, rect, style).into()
}

/// The section title across the top of the content box.
pub(crate) fn section_heading(title: &str, area: &LayoutBox) -> PlacementCommand {
    single_line(title, area.rect.x, area.rect.y, area.rect.w, HEADING)
}

/// Join items into one paragraph per item, each prefixed with [`BULLET`].
pub(crate) fn bullet_list(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("{BULLET} {item}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::super::command::PlacementCommand;
    use super::super::geometry::{LayoutBox, Rect};
    use super::super::palette::FALLBACK_ACCENT;

    pub fn area(x: f64, y: f64, w: f64, h: f64) -> LayoutBox {
        LayoutBox::new(Rect::new(x, y, w, h), FALLBACK_ACCENT)
    }

    pub fn texts(commands: &[PlacementCommand]) -> Vec<&str> {
        commands
            .iter()
            .filter_map(PlacementCommand::as_text)
            .map(|t| t.content.as_str())
            .collect()
    }

    pub fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::area;
    use super::*;

    #[test]
    fn test_bullet_list() {
        let items = vec!["one".to_string(), "two".to_string()];
        assert_eq!(bullet_list(&items), "• one\n• two");
        assert_eq!(bullet_list(&[]), "");
    }

    #[test]
    fn test_unsupported_emits_nothing() {
        let mut out = Vec::new();
        let section = Section::Unsupported {
            kind: "carousel".to_string(),
        };
        assert!(!render(&section, &area(0.9, 2.1, 8.2, 1.2), &mut out));
        assert!(out.is_empty());
    }
}
