//! Global symbol descriptor encoding
//!
//! Builds the canonical descriptor for a declaration by rendering its owner
//! chain outermost to innermost, each link with the suffix its kind dictates:
//! packages compound to `a/b/`, a nested class reads `a/b/Outer#Inner#`, a
//! method `a/b/Outer#foo().`, its parameter `a/b/Outer#foo().(x)`.
//!
//! Overloaded callables sharing a name under one owner collide on the same
//! descriptor. That is a known property of the scheme and downstream tooling
//! depends on the exact strings, so no signature-based disambiguation is
//! added here.

use std::borrow::Cow;

use rustc_hash::FxHashSet;

use crate::decl::{DeclId, DeclKind, Declaration, DeclarationTable};

/// Encodes the global descriptor for a declaration.
///
/// Returns `None` when the declaration has no stable global identity: an
/// anonymous shape, a declaration nested in a callable body, a nameless
/// segment anywhere in its owner chain, or a cyclic owner chain. Callers fall
/// back to a per-file local symbol in that case.
pub fn encode(table: &DeclarationTable, id: DeclId) -> Option<String> {
    let chain = owner_chain(table, id)?;
    for pair in chain.windows(2) {
        let parent = table.get(pair[0])?;
        let child = table.get(pair[1])?;
        // only parameters and type parameters of a callable are globally
        // addressable; everything else in its body is file-local
        if parent.kind.is_callable()
            && !matches!(child.kind, DeclKind::Parameter | DeclKind::TypeParameter)
        {
            return None;
        }
    }

    let mut descriptor = String::new();
    for &link in &chain {
        descriptor.push_str(&segment(table.get(link)?)?);
    }
    Some(descriptor)
}

/// Owner chain from the outermost owner down to the declaration itself.
/// A revisited id means the host handed us a cyclic chain; bail out so the
/// caller falls back to a local symbol instead of looping.
fn owner_chain(table: &DeclarationTable, id: DeclId) -> Option<Vec<DeclId>> {
    let mut visited = FxHashSet::default();
    let mut chain = Vec::new();
    let mut current = Some(id);
    while let Some(link) = current {
        if !visited.insert(link) {
            tracing::warn!(?id, "cyclic owner chain, falling back to local symbol");
            return None;
        }
        chain.push(link);
        current = table.get(link)?.owner;
    }
    chain.reverse();
    Some(chain)
}

fn segment(decl: &Declaration) -> Option<String> {
    let name = decl.effective_name();
    match decl.kind {
        DeclKind::Package => Some(format!("{}/", escape(name?))),
        DeclKind::Class
        | DeclKind::Interface
        | DeclKind::Object
        | DeclKind::Enum
        | DeclKind::TypeAlias => Some(format!("{}#", escape(name?))),
        DeclKind::Constructor | DeclKind::Function => Some(format!("{}().", escape(name?))),
        DeclKind::Property | DeclKind::EnumEntry => Some(format!("{}.", escape(name?))),
        DeclKind::Parameter => Some(format!("({})", escape(name?))),
        DeclKind::TypeParameter => Some(format!("[{}]", escape(name?))),
        DeclKind::LocalVariable | DeclKind::Unknown => None,
    }
}

/// Names that are not plain identifiers are wrapped in backticks, so
/// `<init>` renders as `` `<init>` `` and operator-like names stay parseable.
fn escape(name: &str) -> Cow<'_, str> {
    if is_identifier(name) {
        Cow::Borrowed(name)
    } else {
        Cow::Owned(format!("`{name}`"))
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> (DeclarationTable, DeclId, DeclId, DeclId) {
        let mut table = DeclarationTable::new();
        let pkg = table.insert(Declaration::new(DeclKind::Package).with_name("sample"));
        let class = table.insert(
            Declaration::new(DeclKind::Class).with_name("Banana").with_owner(pkg),
        );
        let method = table.insert(
            Declaration::new(DeclKind::Function).with_name("foo").with_owner(class),
        );
        (table, pkg, class, method)
    }

    #[test]
    fn test_package_class_method_chain() {
        let (table, pkg, class, method) = sample_table();
        assert_eq!(encode(&table, pkg).as_deref(), Some("sample/"));
        assert_eq!(encode(&table, class).as_deref(), Some("sample/Banana#"));
        assert_eq!(encode(&table, method).as_deref(), Some("sample/Banana#foo()."));
    }

    #[test]
    fn test_nested_packages_compound() {
        let mut table = DeclarationTable::new();
        let a = table.insert(Declaration::new(DeclKind::Package).with_name("a"));
        let b = table.insert(Declaration::new(DeclKind::Package).with_name("b").with_owner(a));
        let outer =
            table.insert(Declaration::new(DeclKind::Class).with_name("Outer").with_owner(b));
        let inner =
            table.insert(Declaration::new(DeclKind::Class).with_name("Inner").with_owner(outer));
        assert_eq!(encode(&table, inner).as_deref(), Some("a/b/Outer#Inner#"));
    }

    #[test]
    fn test_constructor_parameter_and_type_parameter() {
        let (mut table, _, class, method) = sample_table();
        let ctor = table.insert(Declaration::new(DeclKind::Constructor).with_owner(class));
        let param = table.insert(
            Declaration::new(DeclKind::Parameter).with_name("count").with_owner(method),
        );
        let tparam = table.insert(
            Declaration::new(DeclKind::TypeParameter).with_name("T").with_owner(class),
        );
        assert_eq!(encode(&table, ctor).as_deref(), Some("sample/Banana#`<init>`()."));
        assert_eq!(encode(&table, param).as_deref(), Some("sample/Banana#foo().(count)"));
        assert_eq!(encode(&table, tparam).as_deref(), Some("sample/Banana#[T]"));
    }

    #[test]
    fn test_companion_object_default_name() {
        let (mut table, _, class, _) = sample_table();
        let companion = table.insert(Declaration::new(DeclKind::Object).with_owner(class));
        assert_eq!(encode(&table, companion).as_deref(), Some("sample/Banana#Companion#"));
    }

    #[test]
    fn test_declarations_in_callable_bodies_are_not_encodable() {
        let (mut table, _, _, method) = sample_table();
        let local = table.insert(
            Declaration::new(DeclKind::LocalVariable).with_name("x").with_owner(method),
        );
        let local_class = table.insert(
            Declaration::new(DeclKind::Class).with_name("Helper").with_owner(method),
        );
        assert_eq!(encode(&table, local), None);
        assert_eq!(encode(&table, local_class), None);
    }

    #[test]
    fn test_anonymous_class_is_not_encodable() {
        let (mut table, pkg, _, _) = sample_table();
        let anon = table.insert(Declaration::new(DeclKind::Class).with_owner(pkg));
        assert_eq!(encode(&table, anon), None);
    }

    #[test]
    fn test_non_identifier_names_are_backticked() {
        let (mut table, _, class, _) = sample_table();
        let op = table.insert(
            Declaration::new(DeclKind::Function).with_name("is-empty?").with_owner(class),
        );
        assert_eq!(encode(&table, op).as_deref(), Some("sample/Banana#`is-empty?`()."));
    }

    #[test]
    fn test_cyclic_owner_chain_falls_back() {
        let mut table = DeclarationTable::new();
        let a = table.insert(Declaration::new(DeclKind::Class).with_name("A"));
        let b = table.insert(Declaration::new(DeclKind::Class).with_name("B").with_owner(a));
        table.get_mut(a).unwrap().owner = Some(b);
        assert_eq!(encode(&table, a), None);
        assert_eq!(encode(&table, b), None);
    }

    #[test]
    fn test_overloads_share_a_descriptor() {
        let (mut table, _, class, _) = sample_table();
        let f1 = table.insert(
            Declaration::new(DeclKind::Function).with_name("bar").with_owner(class),
        );
        let f2 = table.insert(
            Declaration::new(DeclKind::Function).with_name("bar").with_owner(class),
        );
        assert_eq!(encode(&table, f1), encode(&table, f2));
    }
}
