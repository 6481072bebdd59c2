//! Heading-delimited section matching and heading line rewriting.
//!
//! Sections are located by boundary scanning rather than by parsing the
//! document: a section starts at a heading line and runs up to the next
//! heading line of the same or higher precedence, or to the end of text.
//! Fenced code blocks are not recognised, so a `#` line inside a fence is
//! treated as a heading.

pub mod matcher;
pub mod rewriter;
pub mod types;

pub use matcher::{extract_section, find_boundary};
pub use rewriter::{replace_heading_line, suppress_headings};
pub use types::{HeadingRef, Section, SectionError};
