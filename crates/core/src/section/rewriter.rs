//! In-place heading line replacement.

use regex::NoExpand;

use super::types::HeadingRef;

/// Replace every heading line matching `heading` with `replacement`.
///
/// Only the heading line (and the whitespace run ending in its line break)
/// is touched; the section body stays where it is. An empty replacement
/// deletes the heading. Returns the input unchanged when nothing matches.
pub fn replace_heading_line(text: &str, heading: &HeadingRef, replacement: &str) -> String {
    heading.line_regex().replace_all(text, NoExpand(replacement)).into_owned()
}

/// Delete every heading line named in `headings`.
pub fn suppress_headings(text: &str, headings: &[HeadingRef]) -> String {
    headings
        .iter()
        .fold(text.to_string(), |acc, h| replace_heading_line(&acc, h, ""))
}
