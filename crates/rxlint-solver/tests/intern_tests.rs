use super::*;
use crate::TypeDatabase;
use crate::types::TypeFlags;

#[test]
fn test_intrinsics_are_preinterned() {
    let interner = TypeInterner::new();
    assert_eq!(interner.len(), TypeId::FIRST_USER as usize);
    assert_eq!(
        interner.lookup(TypeId::VOID),
        Some(&TypeData::Intrinsic(IntrinsicKind::Void))
    );
    assert_eq!(
        interner.lookup(TypeId::OBJECT),
        Some(&TypeData::Intrinsic(IntrinsicKind::Object))
    );
}

#[test]
fn test_interning_is_idempotent() {
    let mut interner = TypeInterner::new();
    let subject = interner.declare_class("Subject", 1);
    let a = interner.reference(subject, &[TypeId::NUMBER]);
    let b = interner.reference(subject, &[TypeId::NUMBER]);
    let c = interner.reference(subject, &[TypeId::STRING]);
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_reference_without_args_is_object() {
    let mut interner = TypeInterner::new();
    let foo = interner.declare_class("Foo", 0);
    assert_eq!(interner.reference(foo, &[]), interner.object(foo));
}

#[test]
fn test_union_flattens_and_dedupes() {
    let mut interner = TypeInterner::new();
    let inner = interner.union(&[TypeId::NUMBER, TypeId::VOID]);
    let outer = interner.union(&[inner, TypeId::STRING, TypeId::NUMBER]);

    match interner.lookup(outer) {
        Some(TypeData::Union(members)) => {
            assert_eq!(members.as_slice(), &[TypeId::NUMBER, TypeId::VOID, TypeId::STRING]);
        }
        other => panic!("expected union, got {other:?}"),
    }
}

#[test]
fn test_union_absorbing_members() {
    let mut interner = TypeInterner::new();
    assert_eq!(interner.union(&[TypeId::NUMBER, TypeId::ANY]), TypeId::ANY);
    assert_eq!(interner.union(&[TypeId::NUMBER, TypeId::UNKNOWN]), TypeId::UNKNOWN);
    assert_eq!(interner.union(&[TypeId::ERROR, TypeId::UNKNOWN]), TypeId::ANY);
    assert_eq!(interner.union(&[TypeId::NUMBER, TypeId::NEVER]), TypeId::NUMBER);
    assert_eq!(interner.union(&[]), TypeId::NEVER);
    assert_eq!(interner.union(&[TypeId::VOID]), TypeId::VOID);
}

#[test]
fn test_intersection_normalization() {
    let mut interner = TypeInterner::new();
    let a = interner.declare_interface("A", 0);
    let a = interner.object(a);
    assert_eq!(interner.intersection(&[a, TypeId::UNKNOWN]), a);
    assert_eq!(interner.intersection(&[a, TypeId::NEVER]), TypeId::NEVER);
    assert_eq!(interner.intersection(&[a, TypeId::ANY]), TypeId::ANY);
    assert_eq!(interner.intersection(&[]), TypeId::UNKNOWN);
}

#[test]
fn test_type_flags_look_through_aliases() {
    let mut interner = TypeInterner::new();
    let maybe = interner.declare_type_alias("Maybe", 0);
    let union = interner.union(&[TypeId::NUMBER, TypeId::VOID]);
    let alias = interner.alias(maybe, &[], union);

    assert!(interner.type_flags(alias).contains(TypeFlags::UNION));
    assert!(interner.type_flags(TypeId::ERROR).contains(TypeFlags::ANY));
    assert_eq!(interner.nominal_name(alias), None, "aliases have no nominal name");
}

#[test]
fn test_unknown_type_id_answers_like_error() {
    let interner = TypeInterner::new();
    let bogus = TypeId(9_999);
    assert_eq!(interner.type_flags(bogus), TypeFlags::ANY);
    assert!(interner.type_arguments(bogus).is_empty());
    assert!(interner.base_types(bogus).is_empty());
    assert_eq!(interner.nominal_name(bogus), None);
}

#[test]
fn test_display_type() {
    let mut interner = TypeInterner::new();
    let subject = interner.declare_class("Subject", 1);
    let arg = interner.union(&[TypeId::NUMBER, TypeId::VOID]);
    let ty = interner.reference(subject, &[arg]);
    assert_eq!(interner.display_type(ty), "Subject<number | void>");

    let hello = interner.literal_string("hello");
    assert_eq!(interner.display_type(hello), "\"hello\"");
}

#[test]
fn test_union_and_intersection_expand_alias_members() {
    let mut interner = TypeInterner::new();
    let maybe_def = interner.declare_type_alias("MaybeVoid", 0);
    let number_or_void = interner.union(&[TypeId::NUMBER, TypeId::VOID]);
    let maybe = interner.alias(maybe_def, &[], number_or_void);

    let outer = interner.union(&[maybe, TypeId::STRING]);
    match interner.lookup(outer) {
        Some(TypeData::Union(members)) => {
            assert_eq!(members.as_slice(), &[TypeId::NUMBER, TypeId::VOID, TypeId::STRING]);
        }
        other => panic!("expected union, got {other:?}"),
    }

    let loose_def = interner.declare_type_alias("Loose", 0);
    let loose = interner.alias(loose_def, &[], TypeId::ANY);
    assert_eq!(interner.union(&[loose, TypeId::NUMBER]), TypeId::ANY);
    assert_eq!(interner.intersection(&[loose, TypeId::NUMBER]), TypeId::ANY);

    let nothing_def = interner.declare_type_alias("Nothing", 0);
    let nothing = interner.alias(nothing_def, &[], TypeId::NEVER);
    assert_eq!(interner.union(&[nothing, TypeId::STRING]), TypeId::STRING);
    assert_eq!(interner.intersection(&[nothing, TypeId::STRING]), TypeId::NEVER);
}
