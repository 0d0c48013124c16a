//! Image callout: a text column beside a purely decorative illustration.

use super::{section_heading, single_line};
use crate::content::ImageCallout;
use crate::layout::command::{PlacementCommand, ShapeCommand, ShapeKind, TextCommand, TextStyle};
use crate::layout::geometry::{LayoutBox, Rect};
use crate::layout::palette::{BODY, CARD_FILL, FONT_FACE, HEADING_TEXT, PANEL_SLATE};

/// Share of the content width given to the text column.
pub const TEXT_COLUMN_SHARE: f64 = 0.58;
const COLUMN_GAP: f64 = 0.4;

pub const BADGE_TEXT: &str = "Stylized\nAFB";
pub const BADGE_CAPTION: &str = "Hot pink bacilli\nCool blue background";

const BADGE_STYLE: TextStyle = TextStyle::new(18.0, CARD_FILL).bold().centered();
const BADGE_CAPTION_STYLE: TextStyle = TextStyle::new(11.0, HEADING_TEXT).centered();

pub fn render(section: &ImageCallout, area: &LayoutBox, out: &mut Vec<PlacementCommand>) {
    let r = area.rect;
    let left_width = r.w * TEXT_COLUMN_SHARE;
    let right_width = r.w - left_width - COLUMN_GAP;

    let mut heading = section_heading(&section.title, area);
    if let PlacementCommand::Text(text) = &mut heading {
        text.rect.w = left_width;
    }
    out.push(heading);
    out.push(single_line(
        section.caption.as_str(),
        r.x,
        r.y + 0.5,
        left_width,
        TextStyle::new(12.0, area.accent)
            .bold()
            .italic()
            .with_face(FONT_FACE),
    ));
    out.push(
        TextCommand::new(
            section.description.as_str(),
            Rect::new(r.x, r.y + 0.9, left_width, r.h - 1.1),
            BODY.with_line_spacing(1.2),
        )
        .into(),
    );

    // Decorative column: accent disc behind a dark panel with badge text
    let art_x = r.x + left_width + COLUMN_GAP;
    let panel_x = art_x + 0.2;
    let panel_width = right_width - 0.4;
    out.push(
        ShapeCommand::solid(
            ShapeKind::Ellipse,
            Rect::new(art_x, r.y, right_width, right_width),
            area.accent,
        )
        .into(),
    );
    out.push(
        ShapeCommand::solid(
            ShapeKind::Rectangle,
            Rect::new(panel_x, r.y + 0.4, panel_width, r.h - 0.8),
            PANEL_SLATE,
        )
        .into(),
    );
    out.push(
        TextCommand::new(
            BADGE_TEXT,
            Rect::new(panel_x, r.y + 0.9, panel_width, 1.4),
            BADGE_STYLE,
        )
        .into(),
    );
    out.push(single_line(
        BADGE_CAPTION,
        panel_x,
        r.y + 2.1,
        panel_width,
        BADGE_CAPTION_STYLE,
    ));
}
