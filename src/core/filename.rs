use once_cell::sync::Lazy;
use regex::Regex;

pub const DEFAULT_MAX_LEN: usize = 200;
pub const DEFAULT_PLACEHOLDER: &str = "untitled";

static SEPARATOR_RUNS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s\-_]+").expect("separator pattern is valid"));

fn is_reserved(c: char) -> bool {
    matches!(c, '<' | '>' | ':' | '"' | '/' | '\\' | '|' | '?' | '*')
        || (c.is_control() && !c.is_whitespace())
}

/// Rules for turning page titles into file names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilenameRules {
    pub max_len: usize,
    pub placeholder: String,
}

impl Default for FilenameRules {
    fn default() -> Self {
        Self {
            max_len: DEFAULT_MAX_LEN,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }
}

impl FilenameRules {
    pub fn new(max_len: usize, placeholder: impl Into<String>) -> Self {
        Self {
            max_len,
            placeholder: placeholder.into(),
        }
    }

    /// Lowercase, hyphen-separated, at most `max_len` characters.
    ///
    /// Reserved characters are dropped, runs of whitespace, `-` and `_`
    /// become one `-`, and the result never starts or ends with `-`.
    /// Falls back to the placeholder when nothing is left.
    pub fn sanitize(&self, name: &str) -> String {
        let stripped: String = name.chars().filter(|c| !is_reserved(*c)).collect();
        let collapsed = SEPARATOR_RUNS.replace_all(&stripped, "-").to_lowercase();
        let trimmed = collapsed.trim_matches('-');

        let truncated = match trimmed.char_indices().nth(self.max_len) {
            Some((cut, _)) => trimmed[..cut].trim_end_matches('-'),
            None => trimmed,
        };

        if truncated.is_empty() {
            self.placeholder.clone()
        } else {
            truncated.to_string()
        }
    }

    /// Sanitized stem joined with a sanitized extension, e.g. `my-page.md`.
    ///
    /// The stem is shortened so the whole name fits in `max_len`. When the
    /// extension leaves no room for a stem, only the sanitized name is
    /// returned.
    pub fn with_extension(&self, name: &str, ext: &str) -> String {
        let ext = ext.trim_start_matches('.');
        let ext = Self::new(self.max_len, "").sanitize(ext);
        let ext_len = ext.chars().count();
        if ext.is_empty() || ext_len + 1 >= self.max_len {
            return self.sanitize(name);
        }

        let stem = Self::new(self.max_len - ext_len - 1, self.placeholder.clone()).sanitize(name);
        let full = format!("{}.{}", stem, ext);
        if full.chars().count() > self.max_len {
            // Placeholder longer than the room left for the stem.
            return self.sanitize(name);
        }
        full
    }
}

/// Sanitizes `name` with the default rules (200 characters, `untitled`).
pub fn sanitize_filename(name: &str) -> String {
    FilenameRules::default().sanitize(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_title() {
        assert_eq!(sanitize_filename("My Great Page"), "my-great-page");
        assert_eq!(sanitize_filename("Q&A: What's next?"), "q&a-what's-next");
    }

    #[test]
    fn test_collapses_separators() {
        assert_eq!(sanitize_filename("a  -  b__c\t\nd"), "a-b-c-d");
        assert_eq!(sanitize_filename("--hello--"), "hello");
        assert_eq!(sanitize_filename("_ leading and trailing _"), "leading-and-trailing");
    }

    #[test]
    fn test_removes_reserved_characters() {
        assert_eq!(sanitize_filename(r#"a<b>c:d"e/f\g|h?i*j"#), "abcdefghij");
        assert_eq!(sanitize_filename("null\0byte"), "nullbyte");
    }

    #[test]
    fn test_removal_happens_before_collapsing() {
        // "a - / - b" loses the slash first, then the two hyphen runs merge.
        assert_eq!(sanitize_filename("a - / - b"), "a-b");
    }

    #[test]
    fn test_placeholder() {
        assert_eq!(sanitize_filename(""), "untitled");
        assert_eq!(sanitize_filename("   "), "untitled");
        assert_eq!(sanitize_filename("???***"), "untitled");
        assert_eq!(sanitize_filename("-_-"), "untitled");
    }

    #[test]
    fn test_unicode_lowercase() {
        assert_eq!(sanitize_filename("Über Café"), "über-café");
        assert_eq!(sanitize_filename("日本語 タイトル"), "日本語-タイトル");
    }

    #[test]
    fn test_truncates_by_characters() {
        let long = "é".repeat(250);
        let result = sanitize_filename(&long);
        assert_eq!(result.chars().count(), DEFAULT_MAX_LEN);
    }

    #[test]
    fn test_truncation_does_not_leave_trailing_hyphen() {
        let name = format!("{} tail", "a".repeat(199));
        let result = sanitize_filename(&name);
        assert_eq!(result, "a".repeat(199));
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            "My Great Page",
            "  weird__Name -- with / slashes ",
            "",
            "***",
            "Ünïcödé Tïtle",
        ];
        for input in inputs {
            let once = sanitize_filename(input);
            assert_eq!(sanitize_filename(&once), once, "input: {:?}", input);
        }

        let long = format!("{} tail", "x".repeat(199));
        let once = sanitize_filename(&long);
        assert_eq!(sanitize_filename(&once), once);
    }

    #[test]
    fn test_custom_rules() {
        let rules = FilenameRules::new(5, "page");
        assert_eq!(rules.sanitize("Hello World"), "hello");
        assert_eq!(rules.sanitize("::"), "page");
    }

    #[test]
    fn test_with_extension() {
        let rules = FilenameRules::default();
        assert_eq!(rules.with_extension("My Page", "md"), "my-page.md");
        assert_eq!(rules.with_extension("My Page", ".MD"), "my-page.md");
        assert_eq!(rules.with_extension("???", "md"), "untitled.md");
        assert_eq!(rules.with_extension("My Page", ""), "my-page");

        let long = "b".repeat(300);
        let name = rules.with_extension(&long, "md");
        assert_eq!(name.chars().count(), DEFAULT_MAX_LEN);
        assert!(name.ends_with(".md"));
    }

    #[test]
    fn test_with_extension_never_exceeds_max_len() {
        let rules = FilenameRules::new(3, "x");
        assert_eq!(rules.with_extension("abc", "md"), "abc");
        assert_eq!(rules.with_extension("abcdef", "md"), "abc");

        let rules = FilenameRules::new(4, "x");
        assert_eq!(rules.with_extension("abc", "md"), "a.md");

        let rules = FilenameRules::new(6, "untitled");
        assert_eq!(rules.with_extension("???", "md"), "untitled");

        for max_len in 1..10 {
            let rules = FilenameRules::new(max_len, "p");
            let name = rules.with_extension("Some Long Title", "markdown");
            assert!(name.chars().count() <= max_len, "max_len {}: {}", max_len, name);
        }
    }
}
