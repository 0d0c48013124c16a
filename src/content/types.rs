//! Slide and section types.

use serde::Deserialize;

/// One slide of the deck.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Slide {
    /// Stable identity key
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    /// Accent token selecting the header and highlight color
    pub accent: String,
    #[serde(default)]
    pub sections: Vec<Section>,
}

/// A heading with its bullet points. Used by both dual-column and comparison sections.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Column {
    pub heading: String,
    #[serde(default)]
    pub points: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Bullets {
    pub title: String,
    #[serde(default)]
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DualColumn {
    pub title: String,
    pub columns: [Column; 2],
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TimelineStep {
    pub label: String,
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Timeline {
    pub title: String,
    #[serde(default)]
    pub steps: Vec<TimelineStep>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatBlock {
    #[serde(default)]
    pub stats: Vec<Stat>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ImageCallout {
    pub title: String,
    pub caption: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Comparison {
    pub title: String,
    pub left: Column,
    pub right: Column,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChecklistEntry {
    pub item: String,
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Checklist {
    pub title: String,
    #[serde(default, rename = "checklist")]
    pub entries: Vec<ChecklistEntry>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Quote {
    pub text: String,
    pub source: String,
}

/// A typed slide section.
///
/// The tag fully determines which payload is present. Sections whose tag is
/// unknown, missing, or whose payload does not match the tag are kept as
/// [`Section::Unsupported`] so that one bad entry never fails the whole deck.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawSection")]
pub enum Section {
    Bullets(Bullets),
    DualColumn(DualColumn),
    Timeline(Timeline),
    StatBlock(StatBlock),
    ImageCallout(ImageCallout),
    Comparison(Comparison),
    Checklist(Checklist),
    Quote(Quote),
    Unsupported { kind: String },
}

impl Section {
    /// The tag name as it appears in the content table.
    pub fn kind(&self) -> &str {
        match self {
            Self::Bullets(_) => "bullets",
            Self::DualColumn(_) => "dualColumn",
            Self::Timeline(_) => "timeline",
            Self::StatBlock(_) => "statBlock",
            Self::ImageCallout(_) => "imageCallout",
            Self::Comparison(_) => "comparison",
            Self::Checklist(_) => "checklist",
            Self::Quote(_) => "quote",
            Self::Unsupported { kind } => kind,
        }
    }

    /// Number of items that drive the section's vertical extent.
    ///
    /// Multi-column sections report their longest column.
    pub fn item_count(&self) -> usize {
        match self {
            Self::Bullets(s) => s.items.len(),
            Self::DualColumn(s) => s.columns.iter().map(|c| c.points.len()).max().unwrap_or(0),
            Self::Timeline(s) => s.steps.len(),
            Self::StatBlock(s) => s.stats.len(),
            Self::Comparison(s) => s.left.points.len().max(s.right.points.len()),
            Self::Checklist(s) => s.entries.len(),
            Self::ImageCallout(_) | Self::Quote(_) | Self::Unsupported { .. } => 0,
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, Self::Unsupported { .. })
    }
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
enum TaggedSection {
    Bullets(Bullets),
    DualColumn(DualColumn),
    Timeline(Timeline),
    StatBlock(StatBlock),
    ImageCallout(ImageCallout),
    Comparison(Comparison),
    Checklist(Checklist),
    Quote(Quote),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawSection {
    Tagged(TaggedSection),
    Other {
        #[serde(rename = "type", default)]
        kind: Option<String>,
    },
    // Not even an object
    Malformed(serde::de::IgnoredAny),
}

impl From<RawSection> for Section {
    fn from(raw: RawSection) -> Self {
        match raw {
            RawSection::Tagged(TaggedSection::Bullets(s)) => Self::Bullets(s),
            RawSection::Tagged(TaggedSection::DualColumn(s)) => Self::DualColumn(s),
            RawSection::Tagged(TaggedSection::Timeline(s)) => Self::Timeline(s),
            RawSection::Tagged(TaggedSection::StatBlock(s)) => Self::StatBlock(s),
            RawSection::Tagged(TaggedSection::ImageCallout(s)) => Self::ImageCallout(s),
            RawSection::Tagged(TaggedSection::Comparison(s)) => Self::Comparison(s),
            RawSection::Tagged(TaggedSection::Checklist(s)) => Self::Checklist(s),
            RawSection::Tagged(TaggedSection::Quote(s)) => Self::Quote(s),
            RawSection::Other { kind } => Self::Unsupported {
                kind: kind.unwrap_or_else(|| "<untagged>".to_string()),
            },
            RawSection::Malformed(_) => Self::Unsupported {
                kind: "<malformed>".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Section {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_bullets_section() {
        let section = parse(r#"{"type":"bullets","title":"Why","items":["a","b"]}"#);
        assert_eq!(section.kind(), "bullets");
        assert_eq!(section.item_count(), 2);
        assert!(section.is_supported());
    }

    #[test]
    fn test_checklist_uses_checklist_field() {
        let section = parse(
            r#"{"type":"checklist","title":"QC","checklist":[{"item":"Smear","detail":"thin"}]}"#,
        );
        match section {
            Section::Checklist(c) => assert_eq!(c.entries[0].item, "Smear"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_dual_column_counts_longest_column() {
        let section = parse(
            r#"{"type":"dualColumn","title":"Walls","columns":[
                {"heading":"AFB","points":["a","b","c"]},
                {"heading":"Other","points":["d"]}]}"#,
        );
        assert_eq!(section.item_count(), 3);
    }

    #[test]
    fn test_comparison_counts_longer_side() {
        let section = parse(
            r#"{"type":"comparison","title":"Read",
                "left":{"heading":"Pos","points":["a","b"]},
                "right":{"heading":"Neg","points":["c","d","e","f","g"]}}"#,
        );
        assert_eq!(section.item_count(), 5);
    }

    #[test]
    fn test_unknown_tag_is_unsupported() {
        let section = parse(r#"{"type":"carousel","frames":[1,2]}"#);
        assert_eq!(
            section,
            Section::Unsupported {
                kind: "carousel".to_string()
            }
        );
    }

    #[test]
    fn test_malformed_known_tag_is_unsupported() {
        // quote without its text
        let section = parse(r#"{"type":"quote","source":"Anon"}"#);
        assert_eq!(section.kind(), "quote");
        assert!(!section.is_supported());
    }

    #[test]
    fn test_missing_tag_and_non_objects() {
        assert_eq!(parse(r#"{"title":"x"}"#).kind(), "<untagged>");
        assert_eq!(parse("42").kind(), "<malformed>");
    }

    #[test]
    fn test_empty_lists_default() {
        let section = parse(r#"{"type":"timeline","title":"Steps"}"#);
        assert_eq!(section.item_count(), 0);
        assert!(section.is_supported());
    }

    #[test]
    fn test_slide_without_subtitle() {
        let slide: Slide =
            serde_json::from_str(r#"{"id":"s","title":"T","accent":"x","sections":[]}"#).unwrap();
        assert!(slide.subtitle.is_none());
        assert!(slide.sections.is_empty());
    }
}
