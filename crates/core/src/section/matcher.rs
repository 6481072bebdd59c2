//! Section extraction by heading reference.

use super::types::{HeadingRef, Section};

/// Find the first section introduced by `heading`, scanning top to bottom.
///
/// With a level L > 0 the heading line must equal the reference text, and the
/// section ends before the next line opening with 1..=L `#` followed by a
/// space. With level 0 the reference is matched as heading text at any level
/// and the section ends before the next line starting with `#`.
pub fn extract_section<'a>(text: &'a str, heading: &HeadingRef) -> Option<Section<'a>> {
    let m = heading.line_regex().find(text)?;
    let end = find_boundary(text, m.end(), heading.level()).unwrap_or(text.len());
    Some(Section::new(text, m.start(), m.end(), end))
}

/// Offset of the first line start at or after `from` that closes a section of
/// the given level. `from` must itself be a line start.
pub fn find_boundary(text: &str, from: usize, level: usize) -> Option<usize> {
    let rest = text.get(from..)?;
    std::iter::once(from)
        .chain(rest.match_indices('\n').map(|(i, _)| from + i + 1))
        .find(|&pos| closes_section(&text[pos..], level))
}

fn closes_section(line: &str, level: usize) -> bool {
    let hashes = line.bytes().take_while(|&b| b == b'#').count();
    if level == 0 {
        return hashes > 0;
    }
    (1..=level).contains(&hashes) && line.as_bytes().get(hashes) == Some(&b' ')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heading(s: &str) -> HeadingRef {
        HeadingRef::new(s).unwrap()
    }

    const DOC: &str = "# Top\nintro\n## A\na body\n### A.1\nnested\n## B\nb body\n";

    #[test]
    fn extracts_until_same_level() {
        let s = extract_section(DOC, &heading("## A")).unwrap();
        assert_eq!(s.as_str(), "## A\na body\n### A.1\nnested\n");
        assert_eq!(s.heading(), "## A\n");
        assert_eq!(s.body(), "a body\n### A.1\nnested\n");
    }

    #[test]
    fn extracts_until_end_of_text() {
        let s = extract_section(DOC, &heading("## B")).unwrap();
        assert_eq!(s.as_str(), "## B\nb body\n");
        assert_eq!(s.range().end, DOC.len());
    }

    #[test]
    fn higher_level_heading_closes_section() {
        let text = "### Deep\nx\n# Top\ny\n";
        let s = extract_section(text, &heading("### Deep")).unwrap();
        assert_eq!(s.as_str(), "### Deep\nx\n");
    }

    #[test]
    fn level_zero_stops_at_any_heading() {
        let s = extract_section(DOC, &heading("A")).unwrap();
        assert_eq!(s.as_str(), "## A\na body\n");
    }

    #[test]
    fn level_zero_matches_any_depth() {
        let s = extract_section(DOC, &heading("A.1")).unwrap();
        assert_eq!(s.as_str(), "### A.1\nnested\n");
    }

    #[test]
    fn exact_level_required_when_given() {
        assert!(extract_section(DOC, &heading("### A")).is_none());
        assert!(extract_section(DOC, &heading("# A")).is_none());
    }

    #[test]
    fn match_is_case_sensitive() {
        assert!(extract_section(DOC, &heading("## a")).is_none());
    }

    #[test]
    fn heading_needs_trailing_line_break() {
        assert!(extract_section("## Last", &heading("## Last")).is_none());
    }

    #[test]
    fn first_match_wins() {
        let text = "## Dup\none\n## Dup\ntwo\n";
        let s = extract_section(text, &heading("## Dup")).unwrap();
        assert_eq!(s.as_str(), "## Dup\none\n");
    }

    #[test]
    fn blank_lines_after_heading_belong_to_heading_line() {
        let text = "## A\n\n\nbody\n## B\n";
        let s = extract_section(text, &heading("## A")).unwrap();
        assert_eq!(s.heading(), "## A\n\n\n");
        assert_eq!(s.body(), "body\n");
    }

    #[test]
    fn hash_without_space_does_not_close_leveled_section() {
        let text = "## A\n#hashtag\nmore\n## B\n";
        let s = extract_section(text, &heading("## A")).unwrap();
        assert_eq!(s.as_str(), "## A\n#hashtag\nmore\n");
    }

    #[test]
    fn tag_line_at_end_stays_in_section() {
        let text = "## A\n#tag\nx\n";
        let s = extract_section(text, &heading("## A")).unwrap();
        assert_eq!(s.as_str(), text);
    }

    #[test]
    fn code_fence_comment_is_treated_as_heading() {
        let text = "## Script\n```sh\n# comment\necho hi\n```\n";
        let s = extract_section(text, &heading("## Script")).unwrap();
        assert_eq!(s.as_str(), "## Script\n```sh\n");
    }

    #[test]
    fn empty_section_body() {
        let text = "## A\n## B\nb\n";
        let s = extract_section(text, &heading("## A")).unwrap();
        assert_eq!(s.as_str(), "## A\n");
    }

    #[test]
    fn regex_metacharacters_are_literal() {
        let text = "## What (and why)?\nanswer\n";
        let s = extract_section(text, &heading("## What (and why)?")).unwrap();
        assert_eq!(s.body(), "answer\n");
    }
}
