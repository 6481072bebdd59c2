//! Link substitution passes.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use tracing::debug;

use super::types::{EmbedRef, WikiLink};
use crate::corpus::Corpus;
use crate::section::{HeadingRef, extract_section};

static EMBED_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"!\[\[(.+?)\]\]").unwrap());

// The optional leading `!` lets unresolved embeds pass through untouched.
static WIKILINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(!?)\[\[([^\[\]|]+)\|?([^\[\]]*)\]\]").unwrap());

/// Resolve embeds against `corpus`, then collapse wikilinks to display text.
pub fn resolve_links<C: Corpus + ?Sized>(text: &str, corpus: &C) -> String {
    let embedded = resolve_embeds(text, corpus);
    simplify_wikilinks(&embedded)
}

/// Replace each `![[file]]` / `![[file#section]]` with the referenced content.
///
/// Tokens whose file is missing from the corpus, or whose section cannot be
/// found, are left as written.
pub fn resolve_embeds<C: Corpus + ?Sized>(text: &str, corpus: &C) -> String {
    let mut tokens: Vec<&str> = Vec::new();
    for cap in EMBED_RE.captures_iter(text) {
        let inner = cap.get(1).map_or("", |m| m.as_str());
        if !tokens.contains(&inner) {
            tokens.push(inner);
        }
    }

    let resolved: Vec<(String, String)> = tokens
        .into_iter()
        .filter_map(|inner| {
            let content = resolve_embed(&EmbedRef::parse(inner), corpus)?;
            Some((format!("![[{inner}]]"), content))
        })
        .collect();

    let mut out = text.to_string();
    for (token, content) in resolved {
        out = out.replace(&token, &content);
    }
    out
}

fn resolve_embed<C: Corpus + ?Sized>(embed: &EmbedRef, corpus: &C) -> Option<String> {
    let Some(body) = corpus.lookup(&embed.file_name) else {
        debug!(file = %embed.file_name, "embed target not found");
        return None;
    };

    match &embed.section {
        None => Some(body),
        Some(section) => {
            let heading = HeadingRef::text_only(section).ok()?;
            let found = extract_section(&body, &heading).map(|s| s.as_str().to_string());
            if found.is_none() {
                debug!(file = %embed.file_name, section = %section, "embed section not found");
            }
            found
        }
    }
}

/// Replace `[[target|alias]]` with `alias` and `[[target]]` with `target`.
///
/// This strips link syntax only; targets are not looked up.
pub fn simplify_wikilinks(text: &str) -> String {
    WIKILINK_RE
        .replace_all(text, |caps: &Captures| {
            if !caps[1].is_empty() {
                return caps[0].to_string();
            }
            let alias = &caps[3];
            let link = WikiLink {
                target: caps[2].to_string(),
                alias: (!alias.is_empty()).then(|| alias.to_string()),
            };
            link.display_text().to_string()
        })
        .into_owned()
}
