//! Line replacement rules

use std::fmt;

use maint_fs::TextEncoding;
use regex::{Captures, Regex};

use crate::Result;

/// Computes a replacement line from the captures of a matching line.
pub type LineHandler = Box<dyn Fn(&Captures<'_>) -> String>;

/// What a matching line is replaced with.
pub enum Replacement {
    /// A fixed line.
    Literal(String),
    /// A line derived from the match, which may reproduce the original.
    Derived(LineHandler),
}

impl fmt::Debug for Replacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(line) => f.debug_tuple("Literal").field(line).finish(),
            Self::Derived(_) => f.write_str("Derived(..)"),
        }
    }
}

/// A pattern anchored at the start of a line, the replacement for lines it
/// matches, and the encoding of the file it applies to.
#[derive(Debug)]
pub struct ReplacementRule {
    source: String,
    pattern: Regex,
    replacement: Replacement,
    encoding: TextEncoding,
}

impl ReplacementRule {
    /// Build a rule. `pattern` only matches at the start of a line.
    pub fn new(pattern: &str, replacement: Replacement) -> Result<Self> {
        Ok(Self {
            source: pattern.to_string(),
            pattern: Regex::new(&format!("^(?:{pattern})"))?,
            replacement,
            encoding: TextEncoding::Utf8,
        })
    }

    pub fn literal(pattern: &str, line: impl Into<String>) -> Result<Self> {
        Self::new(pattern, Replacement::Literal(line.into()))
    }

    pub fn derived(
        pattern: &str,
        handler: impl Fn(&Captures<'_>) -> String + 'static,
    ) -> Result<Self> {
        Self::new(pattern, Replacement::Derived(Box::new(handler)))
    }

    pub fn with_encoding(mut self, encoding: TextEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// The pattern as given, without the start anchor.
    pub fn pattern(&self) -> &str {
        &self.source
    }

    pub fn encoding(&self) -> TextEncoding {
        self.encoding
    }

    /// Rewrite one line (terminator included).
    ///
    /// Returns `None` if the line does not match. The pattern sees the line
    /// without its terminator. A replacement that lacks a trailing newline
    /// gets the original terminator, or `\n` if the line had none.
    pub fn rewrite(&self, line: &str) -> Option<String> {
        let (body, terminator) = split_terminator(line);
        let caps = self.pattern.captures(body)?;

        let mut replaced = match &self.replacement {
            Replacement::Literal(text) => text.clone(),
            Replacement::Derived(handler) => handler(&caps),
        };
        if !replaced.ends_with('\n') {
            replaced.push_str(if terminator.is_empty() { "\n" } else { terminator });
        }
        Some(replaced)
    }
}

fn split_terminator(line: &str) -> (&str, &str) {
    if let Some(body) = line.strip_suffix("\r\n") {
        (body, "\r\n")
    } else if let Some(body) = line.strip_suffix('\n') {
        (body, "\n")
    } else {
        (line, "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_rule_replaces_matching_line() {
        let rule = ReplacementRule::literal(r"#define VERSION .*", "#define VERSION \"2\"").unwrap();
        assert_eq!(
            rule.rewrite("#define VERSION \"1\"\n").as_deref(),
            Some("#define VERSION \"2\"\n")
        );
    }

    #[test]
    fn test_pattern_is_anchored_at_line_start() {
        let rule = ReplacementRule::literal(r"#define VERSION .*", "x").unwrap();
        assert_eq!(rule.rewrite("/* #define VERSION \"1\" */\n"), None);
        assert_eq!(rule.rewrite("  #define VERSION \"1\"\n"), None);
    }

    #[test]
    fn test_crlf_terminator_is_preserved() {
        let rule = ReplacementRule::literal(r"!define VERSION .*", "!define VERSION \"2\"").unwrap();
        assert_eq!(
            rule.rewrite("!define VERSION \"1\"\r\n").as_deref(),
            Some("!define VERSION \"2\"\r\n")
        );
    }

    #[test]
    fn test_unterminated_last_line_gains_newline() {
        let rule = ReplacementRule::literal(r"#define VERSION .*", "#define VERSION \"2\"").unwrap();
        assert_eq!(
            rule.rewrite("#define VERSION \"1\"").as_deref(),
            Some("#define VERSION \"2\"\n")
        );
    }

    #[test]
    fn test_derived_rule_sees_captures_without_terminator() {
        let rule = ReplacementRule::derived(r"NAME=(.*)", |caps| format!("NAME=<{}>", &caps[1])).unwrap();
        assert_eq!(rule.rewrite("NAME=tor\n").as_deref(), Some("NAME=<tor>\n"));
    }

    #[test]
    fn test_derived_rule_can_reproduce_line() {
        let rule = ReplacementRule::derived(r"KEEP .*", |caps| caps[0].to_string()).unwrap();
        assert_eq!(rule.rewrite("KEEP me\r\n").as_deref(), Some("KEEP me\r\n"));
    }

    #[test]
    fn test_alternation_is_anchored_as_a_whole() {
        let rule = ReplacementRule::literal(r"a|b", "c").unwrap();
        assert_eq!(rule.rewrite("xb\n"), None);
        assert_eq!(rule.rewrite("b\n").as_deref(), Some("c\n"));
    }

    #[test]
    fn test_invalid_pattern_is_rejected() {
        assert!(ReplacementRule::literal(r"AC_DEFINE(", "x").is_err());
    }

    #[test]
    fn test_default_encoding_is_utf8() {
        let rule = ReplacementRule::literal("x", "y").unwrap();
        assert_eq!(rule.encoding(), TextEncoding::Utf8);
        assert_eq!(
            rule.with_encoding(TextEncoding::Latin1).encoding(),
            TextEncoding::Latin1
        );
    }
}
