//! Embed (`![[...]]`) resolution and wikilink (`[[...]]`) simplification.

pub mod resolver;
pub mod types;

pub use resolver::{resolve_embeds, resolve_links, simplify_wikilinks};
pub use types::{EmbedRef, WikiLink};
