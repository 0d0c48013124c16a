//! Two-panel archetypes: dual column and comparison.
//!
//! Both split the content width into two equal panels separated by a fixed
//! gutter. Each panel carries a heading and a bullet list.

use super::{bullet_list, section_heading, single_line};
use crate::content::{Column, Comparison, DualColumn};
use crate::layout::command::{
    Color, PlacementCommand, ShapeCommand, ShapeKind, TextCommand, TextStyle,
};
use crate::layout::geometry::{LayoutBox, Rect};
use crate::layout::palette::{
    BODY, COLUMN_HEADING_TEXT, CONTAINER_LINE, HEADING, PANEL_DARK, PANEL_SLATE,
};

pub const GUTTER: f64 = 0.5;
const PANEL_RADIUS: f64 = 0.2;
const PANEL_TOP: f64 = 0.6;
const PANEL_PADDING: f64 = 0.2;

struct PanelStyle {
    /// Subtracted from the content height to get the panel height
    height_trim: f64,
    heading: TextStyle,
    fill: fn(usize) -> Color,
}

pub fn render_dual_column(section: &DualColumn, area: &LayoutBox, out: &mut Vec<PlacementCommand>) {
    let [first, second] = &section.columns;
    let style = PanelStyle {
        height_trim: 1.0,
        heading: HEADING.with_color(COLUMN_HEADING_TEXT),
        fill: |_| PANEL_DARK,
    };
    render_panels(&section.title, [first, second], &style, area, out);
}

pub fn render_comparison(section: &Comparison, area: &LayoutBox, out: &mut Vec<PlacementCommand>) {
    let style = PanelStyle {
        height_trim: 0.8,
        heading: HEADING,
        fill: |idx| if idx % 2 == 0 { PANEL_SLATE } else { PANEL_DARK },
    };
    render_panels(&section.title, [&section.left, &section.right], &style, area, out);
}

/// Width of one panel inside a content box `content_width` wide.
pub fn panel_width(content_width: f64) -> f64 {
    (content_width - GUTTER) / 2.0
}

fn render_panels(
    title: &str,
    columns: [&Column; 2],
    style: &PanelStyle,
    area: &LayoutBox,
    out: &mut Vec<PlacementCommand>,
) {
    let r = area.rect;
    out.push(section_heading(title, area));

    let width = panel_width(r.w);
    for (idx, column) in columns.into_iter().enumerate() {
        let x = r.x + idx as f64 * (width + GUTTER);
        out.push(
            ShapeCommand::new(
                ShapeKind::RoundedRectangle {
                    radius: PANEL_RADIUS,
                },
                Rect::new(x, r.y + PANEL_TOP, width, r.h - style.height_trim),
                (style.fill)(idx),
            )
            .with_line(CONTAINER_LINE)
            .into(),
        );
        out.push(single_line(
            column.heading.as_str(),
            x + PANEL_PADDING,
            r.y + 0.8,
            width - PANEL_PADDING * 2.0,
            style.heading,
        ));
        if column.points.is_empty() {
            continue;
        }
        out.push(
            TextCommand::new(
                bullet_list(&column.points),
                Rect::new(
                    x + PANEL_PADDING,
                    r.y + 1.2,
                    width - PANEL_PADDING * 2.0,
                    r.h - 1.6,
                ),
                BODY.with_line_spacing(1.1),
            )
            .into(),
        );
    }
}
