//! Symbol memoization
//!
//! Two tiers: [`GlobalSymbolIndex`] memoizes global descriptors for a whole
//! compilation run and may be shared across files indexed in parallel;
//! [`LocalSymbolIndex`] hands out per-file `local<N>` ids in first-seen
//! order. [`SymbolResolver`] fronts both.

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::decl::{DeclId, DeclarationTable};
use crate::symbols::{codec, Symbol};

/// Compilation-wide cache of global symbol descriptors.
///
/// Keyed by declaration identity, never by name: overloads sharing one
/// descriptor string remain distinct cache entries. Safe for concurrent use;
/// get-or-insert never overwrites an existing entry, so a declaration id
/// observed by two threads always resolves to the same symbol.
#[derive(Debug, Default)]
pub struct GlobalSymbolIndex {
    symbols: RwLock<FxHashMap<DeclId, Symbol>>,
}

impl GlobalSymbolIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up or computes the global symbol for a declaration.
    ///
    /// Returns `None` when the declaration is not globally encodable; the
    /// caller falls back to a local symbol.
    pub fn get(&self, table: &DeclarationTable, id: DeclId) -> Option<Symbol> {
        if let Some(symbol) = self.symbols.read().get(&id) {
            return Some(symbol.clone());
        }
        let descriptor = codec::encode(table, id)?;
        let mut symbols = self.symbols.write();
        Some(
            symbols
                .entry(id)
                .or_insert_with(|| Symbol::global(descriptor))
                .clone(),
        )
    }

    pub fn len(&self) -> usize {
        self.symbols.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.read().is_empty()
    }
}

/// Per-file cache of synthetic local symbols.
///
/// The counter is owned by this index alone, so numbering always starts at
/// `local0` for a fresh file and grows in first-touch order.
#[derive(Debug, Default)]
pub struct LocalSymbolIndex {
    symbols: FxHashMap<DeclId, Symbol>,
    next_id: u32,
}

impl LocalSymbolIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the local symbol for a declaration, assigning the next id on
    /// first touch.
    pub fn get(&mut self, id: DeclId) -> Symbol {
        if let Some(symbol) = self.symbols.get(&id) {
            return symbol.clone();
        }
        let symbol = Symbol::local(self.next_id);
        self.next_id += 1;
        self.symbols.insert(id, symbol.clone());
        symbol
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }
}

/// Facade over the global and local indexes for one file.
pub struct SymbolResolver<'a> {
    table: &'a DeclarationTable,
    globals: &'a GlobalSymbolIndex,
    locals: LocalSymbolIndex,
}

impl<'a> SymbolResolver<'a> {
    pub fn new(table: &'a DeclarationTable, globals: &'a GlobalSymbolIndex) -> Self {
        Self { table, globals, locals: LocalSymbolIndex::new() }
    }

    /// Resolves the symbol for a declaration: global when its whole owner
    /// chain is encodable, local otherwise. Stable for the resolver's
    /// lifetime.
    pub fn resolve(&mut self, id: DeclId) -> Symbol {
        match self.globals.get(self.table, id) {
            Some(symbol) => symbol,
            None => {
                let symbol = self.locals.get(id);
                tracing::debug!(?id, symbol = %symbol, "not globally encodable");
                symbol
            }
        }
    }

    pub fn table(&self) -> &'a DeclarationTable {
        self.table
    }
}
