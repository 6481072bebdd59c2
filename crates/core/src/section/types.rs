//! Heading references and matched sections.

use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use regex::Regex;
use serde::{Deserialize, Deserializer};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SectionError {
    #[error("invalid heading reference '{0}': {1}")]
    InvalidPattern(String, #[source] regex::Error),
}

/// A heading reference such as `"## Title"` or a bare `"Title"`.
///
/// The level is the length of the leading `#` run. Level 0 matches the
/// heading text at any level.
#[derive(Debug, Clone)]
pub struct HeadingRef {
    raw: String,
    level: usize,
    text: String,
    line_re: Regex,
}

impl HeadingRef {
    pub fn new(raw: &str) -> Result<Self, SectionError> {
        let raw = raw.trim();
        let level = raw.bytes().take_while(|&b| b == b'#').count();
        let text = raw[level..].trim_start();
        Self::build(raw, level, text)
    }

    /// A level-0 reference matching `text` at any heading level.
    ///
    /// Leading `#` characters belong to the text, so `"#Sub"` matches the
    /// heading line `### #Sub`.
    pub fn text_only(text: &str) -> Result<Self, SectionError> {
        let text = text.trim();
        Self::build(text, 0, text)
    }

    fn build(raw: &str, level: usize, text: &str) -> Result<Self, SectionError> {
        // A heading line swallows the whitespace run (blank lines included)
        // that ends in its line break.
        let pattern = if level > 0 {
            format!(r"(?m)^{}\s*\n", regex::escape(raw))
        } else {
            format!(r"(?m)^#+\s*{}\s*\n", regex::escape(raw))
        };
        let line_re = Regex::new(&pattern)
            .map_err(|e| SectionError::InvalidPattern(raw.to_string(), e))?;

        Ok(Self { raw: raw.to_string(), level, text: text.to_string(), line_re })
    }

    /// Parse a list of references, failing on the first invalid entry.
    pub fn parse_all<I, S>(items: I) -> Result<Vec<Self>, SectionError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        items.into_iter().map(|s| Self::new(s.as_ref())).collect()
    }

    pub fn level(&self) -> usize {
        self.level
    }

    /// Heading text without the `#` prefix.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub(crate) fn line_regex(&self) -> &Regex {
        &self.line_re
    }
}

impl PartialEq for HeadingRef {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for HeadingRef {}

impl fmt::Display for HeadingRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for HeadingRef {
    type Err = SectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl<'de> Deserialize<'de> for HeadingRef {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::new(&raw).map_err(serde::de::Error::custom)
    }
}

/// A heading line plus its body, borrowed from the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section<'a> {
    source: &'a str,
    start: usize,
    heading_end: usize,
    end: usize,
}

impl<'a> Section<'a> {
    pub(crate) fn new(source: &'a str, start: usize, heading_end: usize, end: usize) -> Self {
        Self { source, start, heading_end, end }
    }

    /// The full section text, heading line included.
    pub fn as_str(&self) -> &'a str {
        &self.source[self.start..self.end]
    }

    /// The matched heading line, including its trailing line break.
    pub fn heading(&self) -> &'a str {
        &self.source[self.start..self.heading_end]
    }

    pub fn body(&self) -> &'a str {
        &self.source[self.heading_end..self.end]
    }

    /// Byte range of the section within the source text.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_is_leading_hash_run() {
        let h = HeadingRef::new("## Title").unwrap();
        assert_eq!(h.level(), 2);
        assert_eq!(h.text(), "Title");
        assert_eq!(h.as_str(), "## Title");
    }

    #[test]
    fn bare_text_is_level_zero() {
        let h = HeadingRef::new("Title").unwrap();
        assert_eq!(h.level(), 0);
        assert_eq!(h.text(), "Title");
    }

    #[test]
    fn hash_inside_text_does_not_count() {
        let h = HeadingRef::new("Notes on C#").unwrap();
        assert_eq!(h.level(), 0);
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let h: HeadingRef = "  ### Deep  ".parse().unwrap();
        assert_eq!(h.as_str(), "### Deep");
        assert_eq!(h.level(), 3);
    }

    #[test]
    fn equality_by_raw_text() {
        assert_eq!(HeadingRef::new("# A").unwrap(), HeadingRef::new(" # A").unwrap());
        assert_ne!(HeadingRef::new("# A").unwrap(), HeadingRef::new("## A").unwrap());
    }

    #[test]
    fn text_only_keeps_leading_hashes_in_text() {
        let h = HeadingRef::text_only("#Sub").unwrap();
        assert_eq!(h.level(), 0);
        assert_eq!(h.text(), "#Sub");
        assert!(h.line_regex().is_match("### #Sub\n"));
    }
}
