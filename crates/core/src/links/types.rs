//! Parsed link tokens.

/// Target of an embed token `![[file#section]]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedRef {
    /// File name to look up, always ending in `.md`.
    pub file_name: String,
    /// Heading text to transclude instead of the whole file.
    pub section: Option<String>,
}

impl EmbedRef {
    /// Parse the inner content of an embed token.
    ///
    /// The content is split on the first `#`; an empty section part counts
    /// as no section.
    pub fn parse(inner: &str) -> Self {
        let (file, section) = match inner.split_once('#') {
            Some((file, section)) => (file, Some(section)),
            None => (inner, None),
        };

        let file_name = if file.ends_with(".md") {
            file.to_string()
        } else {
            format!("{file}.md")
        };

        Self {
            file_name,
            section: section.filter(|s| !s.is_empty()).map(ToString::to_string),
        }
    }
}

/// A wikilink `[[target]]` or `[[target|alias]]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WikiLink {
    pub target: String,
    pub alias: Option<String>,
}

impl WikiLink {
    /// Text the link collapses to: the alias when present, else the target.
    pub fn display_text(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.target)
    }
}
