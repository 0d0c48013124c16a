//! Bullets: a heading over one multi-line bullet list.

use super::{bullet_list, section_heading};
use crate::content::Bullets;
use crate::layout::command::{PlacementCommand, TextCommand};
use crate::layout::geometry::{LayoutBox, Rect};
use crate::layout::palette::BODY;

pub fn render(section: &Bullets, area: &LayoutBox, out: &mut Vec<PlacementCommand>) {
    let r = area.rect;
    out.push(section_heading(&section.title, area));
    if section.items.is_empty() {
        return;
    }
    out.push(
        TextCommand::new(
            bullet_list(&section.items),
            Rect::new(r.x, r.y + 0.5, r.w, r.h - 0.7),
            BODY.with_line_spacing(1.2),
        )
        .into(),
    );
}
