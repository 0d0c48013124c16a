//! Height estimator: vertical extent of a section container.
//!
//! Every archetype grows linearly with its item count above a floor that keeps
//! near-empty sections from collapsing.

use crate::content::Section;

/// Height used for sections the compiler does not place.
pub const FALLBACK_HEIGHT: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeightRule {
    pub base: f64,
    pub per_item: f64,
    pub floor: f64,
}

impl HeightRule {
    const fn linear(base: f64, per_item: f64, floor: f64) -> Self {
        Self {
            base,
            per_item,
            floor,
        }
    }

    const fn fixed(height: f64) -> Self {
        Self::linear(height, 0.0, height)
    }

    pub fn apply(&self, items: usize) -> f64 {
        (self.base + self.per_item * items as f64).max(self.floor)
    }
}

/// The height rule for a section's tag, or `None` for unsupported sections.
pub fn height_rule(section: &Section) -> Option<HeightRule> {
    let rule = match section {
        Section::Bullets(_) => HeightRule::linear(1.1, 0.45, 1.8),
        Section::DualColumn(_) => HeightRule::linear(1.4, 0.4, 2.4),
        Section::Timeline(_) => HeightRule::linear(1.3, 0.5, 2.8),
        Section::StatBlock(_) => HeightRule::fixed(2.4),
        Section::ImageCallout(_) => HeightRule::fixed(2.4),
        Section::Comparison(_) => HeightRule::linear(1.3, 0.4, 2.2),
        Section::Checklist(_) => HeightRule::linear(1.1, 0.5, 2.2),
        Section::Quote(_) => HeightRule::fixed(1.6),
        Section::Unsupported { .. } => return None,
    };
    Some(rule)
}

/// Container height of `section` in canvas units.
pub fn section_height(section: &Section) -> f64 {
    height_rule(section)
        .map(|rule| rule.apply(section.item_count()))
        .unwrap_or(FALLBACK_HEIGHT)
}
