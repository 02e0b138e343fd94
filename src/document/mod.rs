//! Semantic index document model and assembly
//!
//! [`models`] defines the value types of the produced document;
//! [`builder`] accumulates emitted facts and assembles the final
//! [`TextDocument`].

pub mod builder;
pub mod models;

pub use builder::DocumentBuilder;
pub use models::{
    DocFormat, Documentation, Language, Occurrence, Range, Role, SymbolInformation, SymbolKind,
    TextDocument, SCHEMA_VERSION,
};
