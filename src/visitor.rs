//! Per-file visitation facade
//!
//! The host frontend walks its resolved declaration tree once per file and
//! calls [`DocumentVisitor::visit_definition`] /
//! [`DocumentVisitor::visit_reference`] for every declaration or reference
//! node, then [`DocumentVisitor::finish`]. Symbol resolution, kind
//! classification, documentation rendering, and document assembly all hang
//! off these two entry points.

use rustc_hash::FxHashSet;

use crate::decl::{DeclId, Declaration, DeclarationTable};
use crate::docs::render_documentation;
use crate::document::{DocumentBuilder, Language, Role, SymbolInformation, SymbolKind, TextDocument};
use crate::error::{IndexError, Result};
use crate::source::{LineMap, SourceFile};
use crate::symbols::{GlobalSymbolIndex, Symbol, SymbolResolver};

pub struct DocumentVisitor<'a> {
    resolver: SymbolResolver<'a>,
    line_map: LineMap,
    builder: DocumentBuilder,
}

impl<'a> DocumentVisitor<'a> {
    /// One visitor per file. The global index is shared across the
    /// compilation run; the local symbol counter starts fresh here.
    pub fn new(
        file: &SourceFile,
        language: Language,
        table: &'a DeclarationTable,
        globals: &'a GlobalSymbolIndex,
    ) -> Self {
        Self {
            resolver: SymbolResolver::new(table, globals),
            line_map: LineMap::new(file.text()),
            builder: DocumentBuilder::new(file, language),
        }
    }

    /// Records a definition occurrence at the byte span of the identifier
    /// token, along with the symbol's descriptive record.
    pub fn visit_definition(&mut self, id: DeclId, start: usize, end: usize) -> Result<Symbol> {
        let decl = self.declaration(id)?;
        let symbol = self.resolver.resolve(id);
        let info = self.symbol_information(decl, &symbol);
        let range = self.line_map.range(start, end);
        self.builder.emit(symbol.clone(), range, Role::Definition, Some(info));
        Ok(symbol)
    }

    /// Records a reference occurrence at the byte span of the referencing
    /// token.
    pub fn visit_reference(&mut self, id: DeclId, start: usize, end: usize) -> Result<Symbol> {
        self.declaration(id)?;
        let symbol = self.resolver.resolve(id);
        let range = self.line_map.range(start, end);
        self.builder.emit(symbol.clone(), range, Role::Reference, None);
        Ok(symbol)
    }

    /// Assembles the finished document. May be called repeatedly; already
    /// emitted data is never discarded by a failed visit.
    pub fn finish(&mut self) -> TextDocument {
        self.builder.finish()
    }

    fn declaration(&self, id: DeclId) -> Result<&'a Declaration> {
        self.resolver
            .table()
            .get(id)
            .ok_or(IndexError::UnknownDeclaration(id))
    }

    fn symbol_information(&mut self, decl: &Declaration, symbol: &Symbol) -> SymbolInformation {
        let enclosing_symbol = decl.owner.map(|owner| self.resolver.resolve(owner));
        // flatten override edges in declaration order, dropping duplicates
        let mut seen = FxHashSet::default();
        let mut overridden_symbols = Vec::new();
        for &overridden in &decl.overrides {
            let symbol = self.resolver.resolve(overridden);
            if seen.insert(symbol.clone()) {
                overridden_symbols.push(symbol);
            }
        }
        SymbolInformation {
            symbol: symbol.clone(),
            display_name: decl.effective_name().unwrap_or_default().to_string(),
            kind: SymbolKind::of(decl.kind),
            enclosing_symbol,
            overridden_symbols,
            documentation: render_documentation(decl),
            language: decl.language,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decl::DeclKind;

    #[test]
    fn test_unknown_declaration_fails_without_discarding_data() {
        let mut table = DeclarationTable::new();
        let pkg = table.insert(Declaration::new(DeclKind::Package).with_name("sample"));

        // an id minted by a larger table, unknown to ours
        let mut bogus = DeclarationTable::new();
        bogus.insert(Declaration::new(DeclKind::Class).with_name("X"));
        let bogus_id = bogus.insert(Declaration::new(DeclKind::Class).with_name("Y"));

        let file = SourceFile::new("sample.kt", "package sample\n");
        let globals = GlobalSymbolIndex::new();
        let mut visitor = DocumentVisitor::new(&file, Language::Kotlin, &table, &globals);

        visitor.visit_definition(pkg, 8, 14).unwrap();
        assert!(matches!(
            visitor.visit_reference(bogus_id, 0, 1),
            Err(IndexError::UnknownDeclaration(_))
        ));

        let doc = visitor.finish();
        assert_eq!(doc.occurrences.len(), 1);
        assert_eq!(doc.symbols.len(), 1);
    }

    #[test]
    fn test_override_edges_resolved_in_order_without_duplicates() {
        let mut table = DeclarationTable::new();
        let pkg = table.insert(Declaration::new(DeclKind::Package).with_name("sample"));
        let iface = table.insert(
            Declaration::new(DeclKind::Interface).with_name("Fruit").with_owner(pkg),
        );
        let base = table.insert(
            Declaration::new(DeclKind::Interface).with_name("Edible").with_owner(pkg),
        );
        let class = table.insert(
            Declaration::new(DeclKind::Class)
                .with_name("Banana")
                .with_owner(pkg)
                .with_overrides(vec![iface, base, iface]),
        );

        let file = SourceFile::new("sample.kt", "class Banana : Fruit, Edible\n");
        let globals = GlobalSymbolIndex::new();
        let mut visitor = DocumentVisitor::new(&file, Language::Kotlin, &table, &globals);
        visitor.visit_definition(class, 6, 12).unwrap();

        let doc = visitor.finish();
        let overridden: Vec<&str> =
            doc.symbols[0].overridden_symbols.iter().map(Symbol::as_str).collect();
        assert_eq!(overridden, vec!["sample/Fruit#", "sample/Edible#"]);
        assert_eq!(doc.symbols[0].enclosing_symbol.as_ref().unwrap().as_str(), "sample/");
    }
}
