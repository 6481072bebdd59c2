//! Front matter stripping.

/// Remove a leading `---`-delimited metadata block.
///
/// The body must start with `---`. It is split into at most three parts on
/// `---`; with all three present, everything after the closing marker is
/// kept, minus the line break ending the marker line. Anything else is
/// returned unchanged.
///
/// ```
/// use mdbind_core::frontmatter::strip_front_matter;
///
/// assert_eq!(strip_front_matter("---\nkey: val\n---\nBody"), "Body");
/// assert_eq!(strip_front_matter("No metadata"), "No metadata");
/// ```
pub fn strip_front_matter(body: &str) -> &str {
    if !body.starts_with("---") {
        return body;
    }

    let mut parts = body.splitn(3, "---");
    match (parts.next(), parts.next(), parts.next()) {
        (Some(_), Some(_), Some(rest)) => rest
            .strip_prefix("\r\n")
            .or_else(|| rest.strip_prefix('\n'))
            .unwrap_or(rest),
        _ => body,
    }
}
