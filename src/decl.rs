//! Host-facing declaration model
//!
//! The frontend that resolves source code registers every declaration it
//! encounters in a [`DeclarationTable`] and refers back to it by [`DeclId`].
//! The indexing core only ever reads this data: identity for cache keys,
//! shape for classification and symbol encoding.

use crate::document::Language;

/// Identity of a declaration within one compilation run.
///
/// Two declarations are the same declaration iff their ids are equal. Ids are
/// the cache keys for symbol lookup; they are never derived from names, so
/// distinct declarations that happen to share a descriptor string (overloads)
/// stay distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DeclId(u32);

impl DeclId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Closed set of declaration shapes the core understands.
///
/// Anything the frontend cannot map onto one of these registers as `Unknown`;
/// that is not an error, it just classifies to an unknown symbol kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclKind {
    Package,
    Class,
    Interface,
    /// Named or companion-style singleton. A companion without an explicit
    /// name gets the default name `Companion`.
    Object,
    Enum,
    TypeAlias,
    Constructor,
    Function,
    Property,
    EnumEntry,
    Parameter,
    TypeParameter,
    LocalVariable,
    Unknown,
}

impl DeclKind {
    /// Whether declarations of this kind take value/type parameters.
    pub fn is_callable(self) -> bool {
        matches!(self, DeclKind::Constructor | DeclKind::Function)
    }
}

/// One declaration as reported by the frontend.
#[derive(Debug, Clone)]
pub struct Declaration {
    pub kind: DeclKind,
    pub name: Option<String>,
    pub owner: Option<DeclId>,
    /// Declarations this one overrides, in declaration order.
    pub overrides: Vec<DeclId>,
    /// Pretty-printed signature, as the frontend renders it.
    pub signature: Option<String>,
    /// Raw doc comment, delimiters included.
    pub doc_comment: Option<String>,
    pub language: Language,
}

impl Declaration {
    pub fn new(kind: DeclKind) -> Self {
        Self {
            kind,
            name: None,
            owner: None,
            overrides: Vec::new(),
            signature: None,
            doc_comment: None,
            language: Language::Kotlin,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_owner(mut self, owner: DeclId) -> Self {
        self.owner = Some(owner);
        self
    }

    pub fn with_overrides(mut self, overrides: Vec<DeclId>) -> Self {
        self.overrides = overrides;
        self
    }

    pub fn with_signature(mut self, signature: impl Into<String>) -> Self {
        self.signature = Some(signature.into());
        self
    }

    pub fn with_doc_comment(mut self, doc: impl Into<String>) -> Self {
        self.doc_comment = Some(doc.into());
        self
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Name used for display and descriptor encoding. Companion singletons
    /// and constructors have well-known defaults; anything else without a
    /// name has no stable display name.
    pub fn effective_name(&self) -> Option<&str> {
        match (&self.name, self.kind) {
            (Some(name), _) => Some(name),
            (None, DeclKind::Object) => Some("Companion"),
            (None, DeclKind::Constructor) => Some("<init>"),
            (None, _) => None,
        }
    }
}

/// Append-only arena of declarations for one compilation run.
///
/// Built by the frontend before (or while) files are visited, then shared
/// read-only across all files of the run.
#[derive(Debug, Default)]
pub struct DeclarationTable {
    decls: Vec<Declaration>,
}

impl DeclarationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a declaration and returns its identity.
    pub fn insert(&mut self, decl: Declaration) -> DeclId {
        let id = DeclId(self.decls.len() as u32);
        self.decls.push(decl);
        id
    }

    pub fn get(&self, id: DeclId) -> Option<&Declaration> {
        self.decls.get(id.index())
    }

    /// Mutable access for hosts that patch declarations after registration
    /// (e.g. override edges discovered in a later resolution phase).
    pub fn get_mut(&mut self, id: DeclId) -> Option<&mut Declaration> {
        self.decls.get_mut(id.index())
    }

    pub fn len(&self) -> usize {
        self.decls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = DeclId> + '_ {
        (0..self.decls.len() as u32).map(DeclId)
    }
}
