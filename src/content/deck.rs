//! The deck: an ordered, read-only list of slides.

use super::types::Slide;
use crate::common::Result;
use serde::Deserialize;

const BUILTIN_DECK: &str = include_str!("acid_fast.json");

/// An ordered sequence of slides.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Deck {
    slides: Vec<Slide>,
}

impl Deck {
    /// Load the Acid-Fast Staining showcase deck shipped with the crate.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_DECK)
    }

    /// Parse a deck from its JSON content table.
    ///
    /// Sections with unknown or malformed tags are kept as
    /// [`Section::Unsupported`](super::Section::Unsupported); only a table
    /// that is not a list of slides is rejected.
    pub fn from_json(json: &str) -> Result<Self> {
        let deck: Self = serde_json::from_str(json)?;
        let unsupported = deck
            .slides
            .iter()
            .flat_map(|s| &s.sections)
            .filter(|s| !s.is_supported())
            .count();
        tracing::debug!(
            slides = deck.slides.len(),
            unsupported,
            "loaded slide content table"
        );
        Ok(deck)
    }

    pub fn from_slides(slides: Vec<Slide>) -> Self {
        Self { slides }
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Section;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_deck_loads() {
        let deck = Deck::builtin().unwrap();
        assert_eq!(deck.len(), 8);
        assert_eq!(deck.slides()[0].id, "overview");
    }

    #[test]
    fn test_builtin_deck_is_fully_supported() {
        let deck = Deck::builtin().unwrap();
        for slide in deck.slides() {
            for section in &slide.sections {
                assert!(section.is_supported(), "{} has {:?}", slide.id, section);
            }
        }
    }

    #[test]
    fn test_builtin_deck_covers_every_archetype() {
        let deck = Deck::builtin().unwrap();
        let kinds: HashSet<&str> = deck
            .slides()
            .iter()
            .flat_map(|s| s.sections.iter().map(Section::kind))
            .collect();
        for kind in [
            "bullets",
            "dualColumn",
            "timeline",
            "statBlock",
            "imageCallout",
            "comparison",
            "checklist",
            "quote",
        ] {
            assert!(kinds.contains(kind), "missing {kind}");
        }
    }

    #[test]
    fn test_builtin_ids_are_unique() {
        let deck = Deck::builtin().unwrap();
        let ids: HashSet<&str> = deck.slides().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids.len(), deck.len());
    }

    #[test]
    fn test_non_list_table_is_rejected() {
        assert!(Deck::from_json(r#"{"slides":[]}"#).is_err());
    }

    #[test]
    fn test_unknown_section_does_not_fail_load() {
        let deck = Deck::from_json(
            r#"[{"id":"a","title":"A","accent":"x","sections":[
                {"type":"hologram"},
                {"type":"quote","text":"t","source":"s"}]}]"#,
        )
        .unwrap();
        let sections = &deck.slides()[0].sections;
        assert!(!sections[0].is_supported());
        assert!(sections[1].is_supported());
    }
}
