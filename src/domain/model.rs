use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Number of coupon sources cross-referenced per run.
pub const SOURCE_COUNT: usize = 3;

pub const DEFAULT_SOURCE_FILES: [&str; SOURCE_COUNT] =
    ["couponbase1.gz", "couponbase2.gz", "couponbase3.gz"];
pub const DEFAULT_OUTPUT_FILE: &str = "valid_coupons.txt";
pub const DEFAULT_PROGRESS_INTERVAL: u64 = 5_000_000;

/// Inclusive length bound a trimmed line must satisfy to count as a code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeRules {
    pub min_length: usize,
    pub max_length: usize,
}

impl CodeRules {
    pub fn new(min_length: usize, max_length: usize) -> Self {
        Self {
            min_length,
            max_length,
        }
    }

    /// Returns the trimmed code if its length in chars is within bounds.
    pub fn accept<'a>(&self, line: &'a str) -> Option<&'a str> {
        let code = line.trim_matches(is_line_space);
        let len = code.chars().count();
        (self.min_length..=self.max_length)
            .contains(&len)
            .then_some(code)
    }
}

/// Unicode whitespace plus the file, group, record and unit separators
/// (U+001C..=U+001F), which line-oriented text tools also strip.
fn is_line_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

impl Default for CodeRules {
    fn default() -> Self {
        Self::new(8, 10)
    }
}

/// Unique valid codes found in one input file.
#[derive(Debug, Clone, Default)]
pub struct SourceCodes {
    pub name: String,
    pub codes: HashSet<String>,
    pub lines_read: u64,
}

/// Sizes of the three pairwise intersections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PairwiseOverlap {
    pub first_second: usize,
    pub first_third: usize,
    pub second_third: usize,
}

#[derive(Debug, Clone, Default)]
pub struct MatchOutcome {
    pub overlap: PairwiseOverlap,
    pub valid_codes: HashSet<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accept_within_bounds() {
        let rules = CodeRules::default();
        assert_eq!(rules.accept("ABCDEFGH"), Some("ABCDEFGH"));
        assert_eq!(rules.accept("ABCDEFGHIJ"), Some("ABCDEFGHIJ"));
        assert_eq!(rules.accept("  ABCDEFGH\t"), Some("ABCDEFGH"));
    }

    #[test]
    fn test_reject_out_of_bounds() {
        let rules = CodeRules::default();
        assert_eq!(rules.accept(""), None);
        assert_eq!(rules.accept("AB"), None);
        assert_eq!(rules.accept("ABCDEFG"), None);
        assert_eq!(rules.accept("ABCDEFGHIJK"), None);
        assert_eq!(rules.accept("          "), None);
    }

    #[test]
    fn test_separator_controls_are_trimmed() {
        let rules = CodeRules::default();
        assert_eq!(rules.accept("\u{1f}ABCDEFGH"), Some("ABCDEFGH"));
        assert_eq!(rules.accept("ABCDEFGHI\u{1c}\u{1d}"), Some("ABCDEFGHI"));
        // interior separators are part of the code
        assert_eq!(rules.accept("ABCD\u{1e}EFGH"), Some("ABCD\u{1e}EFGH"));
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        let rules = CodeRules::default();
        // 8 chars, 16 bytes
        assert_eq!(rules.accept("ÄÖÜßäöüé"), Some("ÄÖÜßäöüé"));
    }
}
