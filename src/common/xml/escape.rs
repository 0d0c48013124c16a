use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;

// Static initialization: automaton is built only once, thread-safe
static XML_ESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .build(["&", "<", ">", "\"", "'"])
        .expect("Failed to build XML escaper")
});

/// Escape XML special characters in attribute values and text runs.
///
/// # Examples
///
/// ```
/// use acid_fast_deck::common::xml::escape_xml;
/// assert_eq!(escape_xml("Ziehl & Neelsen"), "Ziehl &amp; Neelsen");
/// assert_eq!(escape_xml("<5 AFB/field>"), "&lt;5 AFB/field&gt;");
/// ```
#[inline]
pub fn escape_xml(s: &str) -> String {
    XML_ESCAPER.replace_all(s, &["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_quotes() {
        assert_eq!(escape_xml("\"hot\" 'pink'"), "&quot;hot&quot; &apos;pink&apos;");
    }

    #[test]
    fn test_escape_leaves_unicode_alone() {
        assert_eq!(escape_xml("• ✓ “quoted”"), "• ✓ “quoted”");
    }
}
