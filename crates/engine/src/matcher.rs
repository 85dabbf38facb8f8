use crate::error::Result;
use regex::Regex;

/// A single line recognized as a heading, before file context is attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingLine {
    /// Number of leading `*` characters.
    pub depth: usize,
    /// Captured heading text, trimmed of surrounding whitespace.
    pub name: String,
}

/// Recognizes outline headings of the form `** <name> tidbits`.
///
/// The whole line must consist of a run of `*`, whitespace, the heading
/// text, whitespace, and the literal word `tidbits` at end of line. Both
/// the text and the marker word match case-insensitively.
#[derive(Debug, Clone)]
pub struct HeadingMatcher {
    pattern: Regex,
}

impl HeadingMatcher {
    pub fn new() -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(r"(?i)^(\*+)\s+(.*)\s+tidbits$")?,
        })
    }

    /// Match one line. Returns `None` for non-headings and for headings
    /// whose captured name trims down to nothing.
    pub fn match_line(&self, line: &str) -> Option<HeadingLine> {
        let caps = self.pattern.captures(line)?;
        let depth = caps[1].len();
        let name = caps[2].trim();
        if name.is_empty() {
            return None;
        }
        Some(HeadingLine {
            depth,
            name: name.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher() -> HeadingMatcher {
        HeadingMatcher::new().unwrap()
    }

    #[test]
    fn matches_basic_heading() {
        let hit = matcher().match_line("* Alpha tidbits").unwrap();
        assert_eq!(hit.depth, 1);
        assert_eq!(hit.name, "Alpha");
    }

    #[test]
    fn depth_equals_leading_star_count() {
        for depth in 1..=6 {
            let line = format!("{} beta tidbits", "*".repeat(depth));
            let hit = matcher().match_line(&line).unwrap();
            assert_eq!(hit.depth, depth);
            assert_eq!(hit.name, "beta");
        }
    }

    #[test]
    fn marker_word_is_case_insensitive() {
        let hit = matcher().match_line("** beta TIDBITS").unwrap();
        assert_eq!(hit.depth, 2);
        assert_eq!(hit.name, "beta");
    }

    #[test]
    fn preserves_name_casing() {
        let hit = matcher().match_line("* MiXeD CaSe tidbits").unwrap();
        assert_eq!(hit.name, "MiXeD CaSe");
    }

    #[test]
    fn extraction_is_idempotent() {
        // Re-wrapping an extracted name in the minimal heading form must
        // extract the same name again.
        let m = matcher();
        let hit = m.match_line("***   Some Topic   tidbits").unwrap();
        let rewrapped = format!("* {} tidbits", hit.name);
        let again = m.match_line(&rewrapped).unwrap();
        assert_eq!(again.name, hit.name);
        assert_eq!(again.depth, 1);
    }

    #[test]
    fn rejects_lines_without_trailing_marker() {
        let m = matcher();
        assert!(m.match_line("* Alpha").is_none());
        assert!(m.match_line("* Alpha tidbits trailing").is_none());
        assert!(m.match_line("* tidbits Alpha").is_none());
        assert!(m.match_line("not a heading").is_none());
    }

    #[test]
    fn rejects_missing_star_run_or_spacing() {
        let m = matcher();
        assert!(m.match_line("Alpha tidbits").is_none());
        assert!(m.match_line("*Alpha tidbits").is_none());
        assert!(m.match_line("* Alphatidbits").is_none());
    }

    #[test]
    fn rejects_empty_name_after_trim() {
        let m = matcher();
        assert!(m.match_line("*  tidbits").is_none());
        assert!(m.match_line("*   \t tidbits").is_none());
    }

    #[test]
    fn never_panics_on_odd_input() {
        let m = matcher();
        assert!(m.match_line("").is_none());
        assert!(m.match_line("\u{0}\u{1}\u{2}").is_none());
        assert!(m.match_line("****").is_none());
        // control characters are ordinary name bytes, not whitespace
        assert!(m.match_line("* a\u{7}b tidbits").is_some());
    }

    #[test]
    fn name_may_contain_the_marker_word() {
        let hit = matcher().match_line("* foo tidbits tidbits").unwrap();
        assert_eq!(hit.name, "foo tidbits");
    }
}
