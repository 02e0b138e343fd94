pub mod decl;
pub mod docs;
pub mod document;
pub mod error;
pub mod source;
pub mod symbols;
pub mod visitor;

pub use decl::{DeclId, DeclKind, Declaration, DeclarationTable};
pub use docs::{render_documentation, strip_doc_comment, strip_doc_lines};
pub use document::{
    DocFormat, Documentation, DocumentBuilder, Language, Occurrence, Range, Role,
    SymbolInformation, SymbolKind, TextDocument, SCHEMA_VERSION,
};
pub use error::{IndexError, Result};
pub use source::{LineMap, SourceFile};
pub use symbols::{GlobalSymbolIndex, LocalSymbolIndex, Symbol, SymbolResolver};
pub use visitor::DocumentVisitor;
