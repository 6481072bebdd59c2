//! Binds linked markdown notes into one composite document.
//!
//! The pipeline extracts heading-delimited sections, resolves `![[embed]]`
//! transclusions against a corpus of notes, collapses `[[wikilinks]]` to their
//! display text, and concatenates the processed notes into a single stream.

pub mod compose;
pub mod config;
pub mod corpus;
pub mod export;
pub mod frontmatter;
pub mod links;
pub mod section;
pub mod selection;
pub mod vault;

pub use compose::{ComposeError, ComposeOptions, Document, compose, render};
pub use corpus::{Corpus, MemoryCorpus, VaultCorpus};
pub use section::{HeadingRef, Section, extract_section, replace_heading_line};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
