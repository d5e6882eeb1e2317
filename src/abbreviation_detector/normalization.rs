// WHY: flatten container markup into searchable text before candidate extraction
// Every tag span collapses to one space; nothing else in the text is touched

use regex_automata::meta::Regex;
use regex_automata::util::syntax;

use super::compile;
use crate::error::Result;

/// Non-greedy tag span; may cross line breaks
const TAG_PATTERN: &str = r"<.*?>";

/// Strips markup tags from raw document text
pub struct MarkupNormalizer {
    tag: Regex,
}

impl MarkupNormalizer {
    pub fn new() -> Result<Self> {
        let tag = compile(TAG_PATTERN, syntax::Config::new().dot_matches_new_line(true))?;
        Ok(Self { tag })
    }

    /// Replace every `<...>` span with a single space
    pub fn normalize(&self, raw: &str) -> String {
        let mut result = String::with_capacity(raw.len());
        self.normalize_into(raw, &mut result);
        result
    }

    /// Normalize into a supplied buffer, clearing it first
    pub fn normalize_into(&self, raw: &str, buffer: &mut String) {
        buffer.clear();
        buffer.reserve(raw.len());

        let mut last = 0;
        for tag in self.tag.find_iter(raw) {
            buffer.push_str(&raw[last..tag.start()]);
            buffer.push(' ');
            last = tag.end();
        }
        // unterminated `<` and any trailing text are kept verbatim
        buffer.push_str(&raw[last..]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalizer() -> MarkupNormalizer {
        MarkupNormalizer::new().unwrap()
    }

    #[test]
    fn test_normalize_docx_runs() {
        let raw = r#"<w:p><w:r><w:t>the (MAB) pathway</w:t></w:r></w:p>"#;
        assert_eq!(normalizer().normalize(raw), "   the (MAB) pathway   ");
    }

    #[test]
    fn test_normalize_multiline_tag() {
        let raw = "before<w:t\n xml:space=\"preserve\">inside</w:t>after";
        assert_eq!(normalizer().normalize(raw), "before inside after");
    }

    #[test]
    fn test_normalize_without_markup_is_identity() {
        let raw = "Plain text with (GEF) and 3 > 2 comparisons.";
        assert_eq!(normalizer().normalize(raw), raw);
    }

    #[test]
    fn test_normalize_unterminated_tag() {
        let raw = "<b>bold</b> and a dangling < bracket";
        assert_eq!(normalizer().normalize(raw), " bold  and a dangling < bracket");
    }

    #[test]
    fn test_normalize_nested_brackets_leave_no_tags() {
        let normalizer = normalizer();
        for raw in ["<<a>>", "<a<b>c>", "x<\n>y<z>", "<>", "a<b\nc\nd>e"] {
            let out = normalizer.normalize(raw);
            assert!(
                normalizer.tag.find(&out).is_none(),
                "tag left behind in {:?} -> {:?}",
                raw,
                out
            );
        }
    }

    #[test]
    fn test_normalize_into_buffer_reuse() {
        let normalizer = normalizer();
        let mut buffer = String::new();

        normalizer.normalize_into("<p>one</p>", &mut buffer);
        assert_eq!(buffer, " one ");

        normalizer.normalize_into("two", &mut buffer);
        assert_eq!(buffer, "two");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalizer().normalize(""), "");
    }
}
