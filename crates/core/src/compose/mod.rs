//! Composite document assembly.
//!
//! Each selected note goes through the same pipeline: front matter is
//! stripped, include and exclude filters narrow the body, embeds and
//! wikilinks are resolved, listed headings are suppressed, and the result is
//! appended to the output with an optional title and separator.

pub mod types;

use std::path::PathBuf;

use tracing::debug;

use crate::corpus::Corpus;
use crate::frontmatter::strip_front_matter;
use crate::links::resolve_links;
use crate::section::{HeadingRef, extract_section, suppress_headings};
use crate::selection::expand_selection;

pub use types::{ComposeError, ComposeOptions, Document};

/// Written at the top of every composed output.
pub const OUTPUT_PREAMBLE: &str = "---\n\n---\n\n";

/// Expand `selection`, read every document, and compose them.
///
/// All documents are read before anything is rendered, so an unreadable
/// file aborts the run without partial output.
pub fn compose<C: Corpus + ?Sized>(
    selection: &[PathBuf],
    options: &ComposeOptions,
    corpus: &C,
) -> Result<String, ComposeError> {
    let documents = expand_selection(selection)?
        .iter()
        .map(|path| Document::load(path))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(render(&documents, options, corpus))
}

/// Compose already-loaded documents in the given order.
pub fn render<C: Corpus + ?Sized>(
    documents: &[Document],
    options: &ComposeOptions,
    corpus: &C,
) -> String {
    let mut out = String::from(OUTPUT_PREAMBLE);

    for doc in documents {
        debug!(path = %doc.path.display(), "composing document");
        let body = process_body(&doc.body, options, corpus);

        if options.show_file_title {
            out.push_str("# ");
            out.push_str(&doc.title());
            out.push_str("\n\n");
        }
        out.push_str(&body);
        out.push_str("\n\n");
        if options.show_separator {
            out.push_str("---\n\n");
        }
    }

    out
}

/// Run the per-document pipeline on a single body.
pub fn process_body<C: Corpus + ?Sized>(
    body: &str,
    options: &ComposeOptions,
    corpus: &C,
) -> String {
    let body = strip_front_matter(body);
    let body = apply_include(body, &options.include);
    let body = apply_exclude(&body, &options.exclude);
    // Links resolve after filtering so excluded sections never pull in embeds.
    let body = resolve_links(&body, corpus);
    suppress_headings(&body, &options.suppress)
}

/// Keep only the listed sections, joined by a blank line in list order.
///
/// When no entry matches, the body is returned unchanged.
pub fn apply_include(body: &str, include: &[HeadingRef]) -> String {
    let sections: Vec<&str> = include
        .iter()
        .filter_map(|h| extract_section(body, h))
        .map(|s| s.as_str())
        .collect();

    if sections.is_empty() {
        body.to_string()
    } else {
        sections.join("\n\n")
    }
}

/// Remove the listed sections.
///
/// Sections are located against the incoming body first, then each matched
/// text is removed everywhere it occurs, so byte-identical duplicates of a
/// matched section disappear as well.
pub fn apply_exclude(body: &str, exclude: &[HeadingRef]) -> String {
    let sections: Vec<&str> = exclude
        .iter()
        .filter_map(|h| extract_section(body, h))
        .map(|s| s.as_str())
        .collect();

    sections
        .into_iter()
        .fold(body.to_string(), |acc, section| acc.replace(section, ""))
}
