use serde::{Deserialize, Serialize};

use crate::decl::DeclKind;
use crate::symbols::Symbol;

/// Schema generation of the documents this crate produces.
pub const SCHEMA_VERSION: u32 = 4;

/// Source language of a declaration or document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Kotlin,
    Java,
}

impl Language {
    /// Tag used for fenced code blocks in rendered documentation.
    pub fn as_str(self) -> &'static str {
        match self {
            Language::Kotlin => "kotlin",
            Language::Java => "java",
        }
    }
}

/// Half-open source range, 0-based, character units.
///
/// Ranges are single-line by construction: `LineMap::range` collapses spans
/// that cross a line boundary to the start line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Range {
    pub start_line: u32,
    pub start_character: u32,
    pub end_line: u32,
    pub end_character: u32,
}

/// Whether an occurrence defines its symbol or merely mentions it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Definition,
    Reference,
}

/// One (symbol, range, role) fact recorded at a source position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Occurrence {
    pub symbol: Symbol,
    pub range: Range,
    pub role: Role,
}

/// Symbol kind in the produced document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SymbolKind {
    Interface,
    Class,
    Constructor,
    TypeParameter,
    Parameter,
    Field,
    Local,
    Method,
    Package,
    Unknown,
}

impl SymbolKind {
    /// Classifies a declaration kind.
    ///
    /// The arms are an ordered list evaluated top to bottom, first match
    /// wins; in particular `Interface` is decided before the class-like
    /// group. Total over the closed kind set, so this never fails.
    pub fn of(kind: DeclKind) -> SymbolKind {
        match kind {
            DeclKind::Interface => SymbolKind::Interface,
            DeclKind::Class | DeclKind::Object | DeclKind::Enum | DeclKind::TypeAlias => {
                SymbolKind::Class
            }
            DeclKind::Constructor => SymbolKind::Constructor,
            DeclKind::TypeParameter => SymbolKind::TypeParameter,
            DeclKind::Parameter => SymbolKind::Parameter,
            DeclKind::Property | DeclKind::EnumEntry => SymbolKind::Field,
            DeclKind::LocalVariable => SymbolKind::Local,
            DeclKind::Function => SymbolKind::Method,
            DeclKind::Package => SymbolKind::Package,
            DeclKind::Unknown => SymbolKind::Unknown,
        }
    }
}

/// Format of a documentation message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DocFormat {
    Markdown,
}

/// Rendered documentation: fenced signature block, optionally followed by
/// the normalized doc comment after a `----` marker line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Documentation {
    pub format: DocFormat,
    pub message: String,
}

impl Documentation {
    pub fn markdown(message: impl Into<String>) -> Self {
        Self { format: DocFormat::Markdown, message: message.into() }
    }
}

/// Descriptive record for one defined symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolInformation {
    pub symbol: Symbol,
    pub display_name: String,
    pub kind: SymbolKind,
    /// Symbol of the enclosing declaration; `None` for top-level symbols.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enclosing_symbol: Option<Symbol>,
    /// Symbols this definition overrides, in declaration order, no
    /// duplicates.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub overridden_symbols: Vec<Symbol>,
    pub documentation: Documentation,
    pub language: Language,
}

/// The per-file semantic index document.
///
/// Immutable once produced: occurrences are sorted by
/// (start_line, start_character) and symbols are deduplicated by symbol
/// value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextDocument {
    pub uri: String,
    pub text: String,
    /// Uppercase hex MD5 of the raw text bytes.
    pub md5: String,
    pub schema: u32,
    pub language: Language,
    pub occurrences: Vec<Occurrence>,
    pub symbols: Vec<SymbolInformation>,
}

impl TextDocument {
    /// JSON projection of the document's logical shape.
    pub fn to_json(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
