use super::*;
use crate::{DefId, TypeInterner};

struct Fixture {
    interner: TypeInterner,
    subject: DefId,
    behavior_subject: DefId,
    observable: DefId,
}

/// `class Subject<T>`, `class BehaviorSubject<T> extends Subject<T>`,
/// `class Observable<T>`.
fn fixture() -> Fixture {
    let mut interner = TypeInterner::new();
    let subject = interner.declare_class("Subject", 1);
    let behavior_subject = interner.declare_class("BehaviorSubject", 1);
    let observable = interner.declare_class("Observable", 1);
    let t = interner.type_param("T");
    let base = interner.reference(subject, &[t]);
    interner.add_base_type(behavior_subject, base);
    Fixture {
        interner,
        subject,
        behavior_subject,
        observable,
    }
}

fn subject_pattern() -> TypePattern {
    TypePattern::name("Subject")
}

#[test]
fn test_could_be_type_direct_name() {
    let mut f = fixture();
    let ty = f.interner.reference(f.subject, &[TypeId::NUMBER]);
    assert!(could_be_type(&f.interner, ty, &subject_pattern()));

    let obs = f.interner.reference(f.observable, &[TypeId::NUMBER]);
    assert!(!could_be_type(&f.interner, obs, &subject_pattern()));
}

#[test]
fn test_could_be_type_through_base_class() {
    let mut f = fixture();
    let ty = f.interner.reference(f.behavior_subject, &[TypeId::NUMBER]);
    assert!(
        could_be_type(&f.interner, ty, &subject_pattern()),
        "BehaviorSubject extends Subject"
    );
}

#[test]
fn test_could_be_type_union_any_member() {
    let mut f = fixture();
    let subj = f.interner.reference(f.subject, &[TypeId::NUMBER]);
    let union = f.interner.union(&[subj, TypeId::UNDEFINED]);
    assert!(could_be_type(&f.interner, union, &subject_pattern()));
    assert!(!could_be_type_with(
        &f.interner,
        union,
        &subject_pattern(),
        UnionMatch::All
    ));
}

#[test]
fn test_could_be_type_union_all_members() {
    let mut f = fixture();
    let a = f.interner.reference(f.subject, &[TypeId::NUMBER]);
    let b = f.interner.reference(f.behavior_subject, &[TypeId::STRING]);
    let union = f.interner.union(&[a, b]);
    assert!(could_be_type_with(
        &f.interner,
        union,
        &subject_pattern(),
        UnionMatch::All
    ));
}

#[test]
fn test_could_be_type_intersection() {
    let mut f = fixture();
    let tagged = f.interner.declare_interface("Tagged", 0);
    let tagged = f.interner.object(tagged);
    let subj = f.interner.reference(f.subject, &[TypeId::NUMBER]);
    let both = f.interner.intersection(&[tagged, subj]);
    assert!(could_be_type(&f.interner, both, &subject_pattern()));
}

#[test]
fn test_could_be_type_sees_through_alias() {
    let mut f = fixture();
    let subj = f.interner.reference(f.subject, &[TypeId::NUMBER]);
    let alias_def = f.interner.declare_type_alias("NumberSubject", 0);
    let alias = f.interner.alias(alias_def, &[], subj);
    assert!(could_be_type(&f.interner, alias, &subject_pattern()));

    // The alias name itself never matches.
    let by_alias_name = TypePattern::name("NumberSubject");
    assert!(!could_be_type(&f.interner, alias, &by_alias_name));
}

#[test]
fn test_could_be_type_regex_is_unanchored() {
    let mut f = fixture();
    let ty = f.interner.reference(f.behavior_subject, &[TypeId::NUMBER]);
    let unanchored = TypePattern::regex("Subject").expect("valid regex");
    let anchored = TypePattern::regex("^Behavior").expect("valid regex");
    let miss = TypePattern::regex("^Subject$").expect("valid regex");

    assert!(unanchored.matches_name("BehaviorSubject"));
    assert!(could_be_type(&f.interner, ty, &anchored));
    // `^Subject$` still matches through the base class.
    assert!(could_be_type(&f.interner, ty, &miss));
    assert!(!miss.matches_name("BehaviorSubject"));
}

#[test]
fn test_could_be_type_intrinsics_never_match() {
    let f = fixture();
    for ty in [TypeId::ANY, TypeId::UNKNOWN, TypeId::ERROR, TypeId::NEVER] {
        assert!(
            !could_be_type(&f.interner, ty, &subject_pattern()),
            "{} should not match",
            f.interner.display_type(ty)
        );
    }
}

#[test]
fn test_could_be_type_terminates_on_cyclic_bases() {
    let mut interner = TypeInterner::new();
    let a = interner.declare_class("A", 0);
    let b = interner.declare_class("B", 0);
    let a_ty = interner.object(a);
    let b_ty = interner.object(b);
    interner.add_base_type(a, b_ty);
    interner.add_base_type(b, a_ty);

    assert!(!could_be_type(&interner, a_ty, &subject_pattern()));
    assert!(could_be_type(&interner, a_ty, &TypePattern::name("B")));
}

#[test]
fn test_resolve_alias_chain() {
    let mut interner = TypeInterner::new();
    let c = interner.declare_type_alias("C", 0);
    let b = interner.declare_type_alias("B", 0);
    let c_ty = interner.alias(c, &[], TypeId::NUMBER);
    let b_ty = interner.alias(b, &[], c_ty);
    assert_eq!(resolve_alias(&interner, b_ty), TypeId::NUMBER);
    assert_eq!(resolve_alias(&interner, TypeId::STRING), TypeId::STRING);
}

#[test]
fn test_resolve_alias_overlong_chain_is_error() {
    let mut interner = TypeInterner::new();
    let mut current = TypeId::NUMBER;
    for i in 0..(rxlint_common::limits::MAX_ALIAS_RESOLUTION_DEPTH + 4) {
        let def = interner.declare_type_alias(&format!("A{i}"), 0);
        current = interner.alias(def, &[], current);
    }
    assert_eq!(resolve_alias(&interner, current), TypeId::ERROR);
}

#[test]
fn test_type_arguments_and_reference() {
    let mut f = fixture();
    let arg = f.interner.union(&[TypeId::NUMBER, TypeId::VOID]);
    let ty = f.interner.reference(f.subject, &[arg]);
    assert!(is_reference_type(&f.interner, ty));
    assert_eq!(type_arguments(&f.interner, ty).as_slice(), &[arg]);

    let plain = f.interner.declare_class("Plain", 0);
    let plain = f.interner.object(plain);
    assert!(!is_reference_type(&f.interner, plain));
    assert!(type_arguments(&f.interner, plain).is_empty());
}

#[test]
fn test_has_flag_and_union_member_flags() {
    let mut f = fixture();
    let maybe = f.interner.union(&[TypeId::NUMBER, TypeId::VOID]);
    assert!(has_flag(&f.interner, TypeId::VOID, TypeFlags::VOID));
    assert!(has_flag(&f.interner, TypeId::ERROR, TypeFlags::ANY));
    assert!(!has_flag(&f.interner, maybe, TypeFlags::VOID));
    assert!(union_has_member_with_flag(&f.interner, maybe, TypeFlags::VOID));
    assert!(!union_has_member_with_flag(&f.interner, TypeId::VOID, TypeFlags::VOID));

    let subj = f.interner.reference(f.subject, &[TypeId::NUMBER]);
    assert!(has_flag(&f.interner, subj, TypeFlags::REFERENCE));
    assert!(!has_flag(&f.interner, subj, TypeFlags::ANY_OR_UNKNOWN));
}

/// A host database that reports one extra union exactly as written,
/// without expanding its alias members.
struct UnexpandedUnion {
    interner: TypeInterner,
    union_id: TypeId,
    members: crate::TypeList,
}

impl TypeDatabase for UnexpandedUnion {
    fn type_flags(&self, type_id: TypeId) -> TypeFlags {
        if type_id == self.union_id {
            return TypeFlags::UNION;
        }
        self.interner.type_flags(type_id)
    }
    fn alias_target(&self, type_id: TypeId) -> Option<TypeId> {
        self.interner.alias_target(type_id)
    }
    fn union_members(&self, type_id: TypeId) -> Option<crate::TypeList> {
        if type_id == self.union_id {
            return Some(self.members.clone());
        }
        self.interner.union_members(type_id)
    }
    fn intersection_members(&self, type_id: TypeId) -> Option<crate::TypeList> {
        self.interner.intersection_members(type_id)
    }
    fn nominal_name(&self, type_id: TypeId) -> Option<&str> {
        self.interner.nominal_name(type_id)
    }
    fn is_reference(&self, type_id: TypeId) -> bool {
        self.interner.is_reference(type_id)
    }
    fn type_arguments(&self, type_id: TypeId) -> crate::TypeList {
        self.interner.type_arguments(type_id)
    }
    fn base_types(&self, type_id: TypeId) -> crate::TypeList {
        self.interner.base_types(type_id)
    }
}

#[test]
fn test_union_member_flags_search_unions_behind_aliases() {
    let mut interner = TypeInterner::new();
    let maybe_def = interner.declare_type_alias("MaybeVoid", 0);
    let number_or_void = interner.union(&[TypeId::NUMBER, TypeId::VOID]);
    let maybe = interner.alias(maybe_def, &[], number_or_void);
    let count_def = interner.declare_type_alias("Count", 0);
    let count = interner.alias(count_def, &[], TypeId::NUMBER);
    // Any id the interner does not use as a union stands in for the host's.
    let union_id = interner.literal_string("host union");

    let db = UnexpandedUnion {
        interner,
        union_id,
        members: [maybe, TypeId::STRING].into_iter().collect(),
    };
    assert!(union_has_member_with_flag(&db, union_id, TypeFlags::VOID));
    assert!(!union_has_member_with_flag(&db, union_id, TypeFlags::ANY));

    let db = UnexpandedUnion {
        members: [count, TypeId::STRING].into_iter().collect(),
        ..db
    };
    assert!(!union_has_member_with_flag(&db, union_id, TypeFlags::VOID));
}
