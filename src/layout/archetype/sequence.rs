//! Stacked-row archetypes: timeline and checklist.
//!
//! The height left under the heading is divided evenly across the rows. Each
//! row has an accent marker on the left and two lines of text to its right.

use super::{section_heading, single_line};
use crate::content::{Checklist, Timeline};
use crate::layout::command::{PlacementCommand, ShapeCommand, ShapeKind, TextStyle};
use crate::layout::geometry::{LayoutBox, Rect};
use crate::layout::palette::{BACKGROUND, DETAIL, HEADING};

const ROWS_TOP: f64 = 0.5;
const DETAIL_OFFSET: f64 = 0.3;

const STEP_MARKER: f64 = 0.45;
const STEP_TEXT_OFFSET: f64 = 0.6;
const STEP_NUMBER: TextStyle = TextStyle::new(12.0, BACKGROUND).bold().centered();

const CHECK_BADGE: f64 = 0.6;
const CHECK_TEXT_OFFSET: f64 = 0.8;
const CHECK_MARK: &str = "✓";
const CHECK_MARK_STYLE: TextStyle = TextStyle::new(20.0, BACKGROUND).bold().centered();

/// Vertical space per row when `rows` rows share `content_height`.
///
/// `reserved` is the space taken by the heading and bottom padding.
pub fn row_height(content_height: f64, reserved: f64, rows: usize) -> f64 {
    if rows == 0 {
        return 0.0;
    }
    (content_height - reserved) / rows as f64
}

/// Zero-padded ordinal shown in a timeline marker: `01`, `02`, ...
pub fn ordinal(idx: usize) -> String {
    format!("{:02}", idx + 1)
}

pub fn render_timeline(section: &Timeline, area: &LayoutBox, out: &mut Vec<PlacementCommand>) {
    let r = area.rect;
    out.push(section_heading(&section.title, area));

    let step_height = row_height(r.h, 0.8, section.steps.len());
    for (idx, step) in section.steps.iter().enumerate() {
        let y = r.y + ROWS_TOP + idx as f64 * step_height;
        out.push(
            ShapeCommand::solid(
                ShapeKind::Ellipse,
                Rect::new(r.x, y, STEP_MARKER, STEP_MARKER),
                area.accent,
            )
            .into(),
        );
        out.push(single_line(ordinal(idx), r.x, y + 0.1, STEP_MARKER, STEP_NUMBER));
        out.push(single_line(
            step.label.as_str(),
            r.x + STEP_TEXT_OFFSET,
            y,
            r.w - 0.7,
            HEADING,
        ));
        out.push(single_line(
            step.detail.as_str(),
            r.x + STEP_TEXT_OFFSET,
            y + DETAIL_OFFSET,
            r.w - 0.7,
            DETAIL,
        ));
    }
}

pub fn render_checklist(section: &Checklist, area: &LayoutBox, out: &mut Vec<PlacementCommand>) {
    let r = area.rect;
    out.push(section_heading(&section.title, area));

    let entry_height = row_height(r.h, 0.7, section.entries.len());
    for (idx, entry) in section.entries.iter().enumerate() {
        let y = r.y + ROWS_TOP + idx as f64 * entry_height;
        out.push(
            ShapeCommand::solid(
                ShapeKind::RoundedRectangle { radius: 0.2 },
                Rect::new(r.x, y, CHECK_BADGE, CHECK_BADGE),
                area.accent,
            )
            .into(),
        );
        out.push(single_line(CHECK_MARK, r.x, y + 0.1, CHECK_BADGE, CHECK_MARK_STYLE));
        out.push(single_line(
            entry.item.as_str(),
            r.x + CHECK_TEXT_OFFSET,
            y,
            r.w - 1.0,
            HEADING,
        ));
        out.push(single_line(
            entry.detail.as_str(),
            r.x + CHECK_TEXT_OFFSET,
            y + DETAIL_OFFSET,
            r.w - 1.0,
            DETAIL,
        ));
    }
}
