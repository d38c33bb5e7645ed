use super::*;
use crate::TypeInterner;

#[test]
fn test_def_id_validity() {
    assert!(!DefId::INVALID.is_valid());
    assert!(DefId(1).is_valid());
    assert!(DefId(100).is_valid());
}

#[test]
fn test_definition_store_basic() {
    let mut store = DefinitionStore::new();
    assert!(store.is_empty());

    let def_id = store.register(DefinitionInfo::class("Subject", 1));
    assert!(def_id.is_valid());
    assert!(store.contains(def_id));
    assert_eq!(store.len(), 1);

    let retrieved = store.get(def_id).expect("definition exists");
    assert_eq!(retrieved.kind, DefKind::Class);
    assert_eq!(retrieved.name, "Subject");
    assert!(retrieved.is_generic());
}

#[test]
fn test_invalid_def_id_lookup() {
    let store = DefinitionStore::new();
    assert!(store.get(DefId::INVALID).is_none());
    assert!(store.get(DefId(42)).is_none());
}

#[test]
fn test_find_by_name_returns_first() {
    let mut store = DefinitionStore::new();
    let first = store.register(DefinitionInfo::interface("Observer", 1));
    let _second = store.register(DefinitionInfo::class("Observer", 1));
    assert_eq!(store.find_by_name("Observer"), Some(first));
    assert_eq!(store.find_by_name("Missing"), None);
}

#[test]
fn test_builder_helpers() {
    let info = DefinitionInfo::type_alias("Events", 0)
        .with_base(TypeId::OBJECT)
        .with_file_id(3);
    assert_eq!(info.kind, DefKind::TypeAlias);
    assert_eq!(info.bases, vec![TypeId::OBJECT]);
    assert_eq!(info.file_id, Some(3));
    assert!(!info.is_generic());
}

#[test]
fn test_interner_records_bases() {
    let mut interner = TypeInterner::new();
    let subject = interner.declare_class("Subject", 1);
    let behavior = interner.declare_class("BehaviorSubject", 1);
    let t = interner.type_param("T");
    let base = interner.reference(subject, &[t]);
    interner.add_base_type(behavior, base);

    let info = interner.definitions().get(behavior).expect("registered");
    assert_eq!(info.bases, vec![base]);
}
