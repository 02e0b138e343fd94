//! Symbol identity
//!
//! A [`Symbol`] is the canonical string identifier of a declaration: either a
//! global descriptor built from its owner chain (`sample/Banana#foo().`) or a
//! synthetic per-file local id (`local0`). [`codec`] builds the descriptors,
//! [`cache`] memoizes them.

pub mod cache;
pub mod codec;

use serde::{Deserialize, Serialize};

pub use cache::{GlobalSymbolIndex, LocalSymbolIndex, SymbolResolver};

const LOCAL_PREFIX: &str = "local";

/// Canonical string identifier of a declaration.
///
/// Global and local symbols live in disjoint string spaces and never compare
/// equal. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    pub fn global(descriptor: impl Into<String>) -> Self {
        Self(descriptor.into())
    }

    pub fn local(id: u32) -> Self {
        Self(format!("{LOCAL_PREFIX}{id}"))
    }

    pub fn is_local(&self) -> bool {
        self.0.starts_with(LOCAL_PREFIX)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
