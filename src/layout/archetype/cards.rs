//! Light-card archetypes: stat block and quote.

use super::single_line;
use crate::content::{Quote, StatBlock};
use crate::layout::command::{PlacementCommand, ShapeCommand, ShapeKind, TextCommand, TextStyle};
use crate::layout::geometry::{LayoutBox, Rect};
use crate::layout::palette::{
    CARD_FILL, CARD_LINE, FONT_FACE, INK, INK_SOFT, SOURCE_TEXT, line_height,
};

pub const STAT_GUTTER: f64 = 0.3;
const CARD_PADDING: f64 = 0.2;

const STAT_LABEL: TextStyle = TextStyle::new(11.0, INK).bold().with_face(FONT_FACE);
const STAT_VALUE: TextStyle = TextStyle::new(18.0, INK).bold().with_face(FONT_FACE);
const STAT_DESCRIPTION: TextStyle = TextStyle::new(11.0, INK_SOFT).with_face(FONT_FACE);

const QUOTE_PADDING_X: f64 = 0.4;
const QUOTE_PADDING_TOP: f64 = 0.15;
const QUOTE_PADDING_BOTTOM: f64 = 0.1;
const QUOTE_TEXT: TextStyle = TextStyle::new(18.0, INK).italic().with_face(FONT_FACE);
const QUOTE_SOURCE: TextStyle = TextStyle::new(12.0, SOURCE_TEXT).bold().with_face(FONT_FACE);

/// Width of each of `count` stat cards sharing `content_width`.
///
/// Gutters sit only between cards so the row always spans exactly the content width.
pub fn stat_card_width(content_width: f64, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    (content_width - STAT_GUTTER * (count - 1) as f64) / count as f64
}

pub fn render_stat_block(section: &StatBlock, area: &LayoutBox, out: &mut Vec<PlacementCommand>) {
    let r = area.rect;
    let width = stat_card_width(r.w, section.stats.len());
    let text_width = width - CARD_PADDING * 2.0;
    for (idx, stat) in section.stats.iter().enumerate() {
        let x = r.x + idx as f64 * (width + STAT_GUTTER);
        out.push(
            ShapeCommand::new(
                ShapeKind::RoundedRectangle { radius: 0.25 },
                Rect::new(x, r.y, width, r.h),
                CARD_FILL,
            )
            .with_line(CARD_LINE)
            .into(),
        );
        let text_x = x + CARD_PADDING;
        out.push(single_line(stat.label.as_str(), text_x, r.y + 0.3, text_width, STAT_LABEL));
        out.push(single_line(stat.value.as_str(), text_x, r.y + 0.9, text_width, STAT_VALUE));
        out.push(single_line(
            stat.description.as_str(),
            text_x,
            r.y + 1.4,
            text_width,
            STAT_DESCRIPTION,
        ));
    }
}

pub fn render_quote(section: &Quote, area: &LayoutBox, out: &mut Vec<PlacementCommand>) {
    let r = area.rect;
    out.push(
        ShapeCommand::new(ShapeKind::RoundedRectangle { radius: 0.3 }, r, CARD_FILL)
            .with_line(CARD_LINE)
            .into(),
    );

    let source_height = line_height(QUOTE_SOURCE.font_size);
    let source_y = r.bottom() - QUOTE_PADDING_BOTTOM - source_height;
    let text_width = r.w - QUOTE_PADDING_X * 2.0;
    out.push(
        TextCommand::new(
            format!("\u{201C}{}\u{201D}", section.text),
            Rect::new(
                r.x + QUOTE_PADDING_X,
                r.y + QUOTE_PADDING_TOP,
                text_width,
                source_y - r.y - QUOTE_PADDING_TOP,
            ),
            QUOTE_TEXT,
        )
        .into(),
    );
    out.push(single_line(
        section.source.as_str(),
        r.x + QUOTE_PADDING_X,
        source_y,
        text_width,
        QUOTE_SOURCE,
    ));
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{area, assert_close, texts};
    use super::*;
    use crate::content::Stat;

    fn stats(n: usize) -> StatBlock {
        StatBlock {
            stats: (0..n)
                .map(|i| Stat {
                    label: format!("L{i}"),
                    value: format!("V{i}"),
                    description: format!("D{i}"),
                })
                .collect(),
        }
    }

    #[test]
    fn test_three_stat_cards() {
        let mut out = Vec::new();
        render_stat_block(&stats(3), &area(0.9, 2.1, 8.2, 1.8), &mut out);
        let cards: Vec<_> = out.iter().filter_map(PlacementCommand::as_shape).collect();
        assert_eq!(cards.len(), 3);
        assert_close(cards[0].rect.w, (8.2 - 0.6) / 3.0);
        assert_close(cards[2].rect.right(), 9.1);
        assert_eq!(texts(&out)[..3], ["L0", "V0", "D0"]);
    }

    #[test]
    fn test_stat_row_never_exceeds_content_width() {
        for n in 1..8 {
            let mut out = Vec::new();
            render_stat_block(&stats(n), &area(0.9, 2.1, 8.2, 1.8), &mut out);
            let last = out
                .iter()
                .filter_map(PlacementCommand::as_shape)
                .last()
                .unwrap();
            assert!(last.rect.right() <= 9.1 + 1e-9, "{n} cards overflow");
        }
    }

    #[test]
    fn test_empty_stat_block() {
        let mut out = Vec::new();
        render_stat_block(&stats(0), &area(0.9, 2.1, 8.2, 1.8), &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn test_quote_card_layout() {
        let quote = Quote {
            text: "Wax betrays the bacillus.".to_string(),
            source: "Teaching note".to_string(),
        };
        let mut out = Vec::new();
        // Content box of the fixed 1.6-high quote container
        render_quote(&quote, &area(0.9, 2.1, 8.2, 1.0), &mut out);

        assert_eq!(texts(&out), vec!["“Wax betrays the bacillus.”", "Teaching note"]);
        let card = out[0].as_shape().unwrap();
        let text = out[1].as_text().unwrap();
        let source = out[2].as_text().unwrap();

        assert!(text.style.italic);
        assert!(text.rect.h > 0.0);
        assert!(text.rect.bottom() <= source.rect.y + 1e-9);
        assert_close(source.rect.bottom(), card.rect.bottom() - 0.1);
    }
}
