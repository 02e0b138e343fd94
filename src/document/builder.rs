use rustc_hash::FxHashSet;

use crate::document::models::{
    Language, Occurrence, Range, Role, SymbolInformation, TextDocument, SCHEMA_VERSION,
};
use crate::source::SourceFile;
use crate::symbols::Symbol;

/// Accumulates the occurrences and symbol records the frontend emits for one
/// file and assembles the final document.
///
/// Emitting the same fact twice is a no-op, so re-visited nodes cannot
/// inflate the document; ordering of emission does not matter because
/// [`finish`](DocumentBuilder::finish) re-sorts.
pub struct DocumentBuilder {
    uri: String,
    text: String,
    md5: String,
    language: Language,
    occurrences: Vec<Occurrence>,
    seen_occurrences: FxHashSet<Occurrence>,
    symbols: Vec<SymbolInformation>,
    seen_symbols: FxHashSet<Symbol>,
}

impl DocumentBuilder {
    pub fn new(file: &SourceFile, language: Language) -> Self {
        Self {
            uri: file.uri().to_string(),
            text: file.text().to_string(),
            md5: md5_hex(file.text().as_bytes()),
            language,
            occurrences: Vec::new(),
            seen_occurrences: FxHashSet::default(),
            symbols: Vec::new(),
            seen_symbols: FxHashSet::default(),
        }
    }

    /// Records one occurrence fact, and for definitions the symbol's
    /// descriptive record.
    ///
    /// Duplicate occurrences are dropped; a symbol's record is stored at
    /// most once, keyed by symbol value, and only for definitions. Never
    /// fails: partially-known declarations arrive already classified as
    /// unknown rather than aborting the file.
    pub fn emit(
        &mut self,
        symbol: Symbol,
        range: Range,
        role: Role,
        info: Option<SymbolInformation>,
    ) {
        let occurrence = Occurrence { symbol, range, role };
        if self.seen_occurrences.insert(occurrence.clone()) {
            self.occurrences.push(occurrence);
        }
        if role == Role::Definition {
            if let Some(info) = info {
                if self.seen_symbols.insert(info.symbol.clone()) {
                    self.symbols.push(info);
                }
            }
        }
    }

    /// Assembles the document: occurrences stable-sorted by
    /// (start_line, start_character), symbols in first-emission order.
    /// Idempotent; calling it again yields an equivalent document.
    pub fn finish(&mut self) -> TextDocument {
        self.occurrences
            .sort_by_key(|occ| (occ.range.start_line, occ.range.start_character));
        tracing::debug!(
            uri = %self.uri,
            occurrences = self.occurrences.len(),
            symbols = self.symbols.len(),
            "document assembled"
        );
        TextDocument {
            uri: self.uri.clone(),
            text: self.text.clone(),
            md5: self.md5.clone(),
            schema: SCHEMA_VERSION,
            language: self.language,
            occurrences: self.occurrences.clone(),
            symbols: self.symbols.clone(),
        }
    }
}

/// Uppercase hex MD5 digest of the raw source bytes.
fn md5_hex(bytes: &[u8]) -> String {
    md5::compute(bytes)
        .iter()
        .map(|b| format!("{b:02X}"))
        .collect()
}
