//! Vault file discovery.
//!
//! Walks a vault directory for markdown notes. Used both to expand directory
//! selections and to back the embed lookup corpus.

pub mod walker;

pub use walker::{VaultWalker, VaultWalkerError, WalkedFile};
