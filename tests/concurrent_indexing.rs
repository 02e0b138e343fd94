//! Concurrent use of the shared global symbol index.
//!
//! Many files are indexed in parallel against one GlobalSymbolIndex; every
//! thread must observe the same symbol for the same declaration and the
//! produced documents must not depend on scheduling.

use rayon::prelude::*;
use semanticdb_indexer::{
    DeclId, DeclKind, Declaration, DeclarationTable, DocumentVisitor, GlobalSymbolIndex, Language,
    SourceFile, Symbol,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn wide_table(classes: usize, methods_per_class: usize) -> (DeclarationTable, Vec<DeclId>) {
    let mut table = DeclarationTable::new();
    let pkg = table.insert(Declaration::new(DeclKind::Package).with_name("sample"));
    let mut ids = vec![pkg];
    for c in 0..classes {
        let class = table.insert(
            Declaration::new(DeclKind::Class).with_name(format!("Class{c}")).with_owner(pkg),
        );
        ids.push(class);
        for m in 0..methods_per_class {
            ids.push(table.insert(
                Declaration::new(DeclKind::Function).with_name(format!("m{m}")).with_owner(class),
            ));
        }
    }
    (table, ids)
}

#[test]
fn test_parallel_resolution_is_consistent() {
    init_tracing();
    let (table, ids) = wide_table(40, 5);
    let globals = GlobalSymbolIndex::new();

    let rounds: Vec<Vec<Symbol>> = (0..16usize)
        .into_par_iter()
        .map(|_| {
            ids.iter()
                .map(|&id| globals.get(&table, id).expect("globally encodable"))
                .collect()
        })
        .collect();

    for round in &rounds[1..] {
        assert_eq!(round, &rounds[0]);
    }
    assert_eq!(globals.len(), ids.len());
}

#[test]
fn test_parallel_files_produce_deterministic_documents() {
    init_tracing();
    let (table, ids) = wide_table(10, 3);
    let globals = GlobalSymbolIndex::new();
    let source = "package sample\n".to_string() + &"x".repeat(200);

    let docs: Vec<_> = (0..8usize)
        .into_par_iter()
        .map(|file_no| {
            let file =
                SourceFile::new(format!("sample/File{file_no}.kt"), source.as_str());
            let mut visitor = DocumentVisitor::new(&file, Language::Kotlin, &table, &globals);
            for (n, &id) in ids.iter().enumerate() {
                // spread occurrences over the text so sorting has work to do
                let offset = (n * 3) % 200;
                visitor.visit_reference(id, offset, offset + 2).unwrap();
            }
            visitor.finish()
        })
        .collect();

    for doc in &docs[1..] {
        assert_eq!(doc.occurrences, docs[0].occurrences);
        assert_eq!(doc.md5, docs[0].md5);
    }
}
