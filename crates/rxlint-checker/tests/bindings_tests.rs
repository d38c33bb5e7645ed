use crate::bindings::*;
use rxlint_parser::{ModifierFlags, NodeArena, NodeIndex};

const NONE: NodeIndex = NodeIndex::NONE;

fn names(arena: &NodeArena, root: NodeIndex) -> Vec<(String, BindingKind)> {
    collect_bindings(arena, root)
        .into_iter()
        .map(|occ| {
            let name = arena
                .name_text(occ.name)
                .map(|text| text.into_owned())
                .unwrap_or_default();
            (name, occ.kind)
        })
        .collect()
}

#[test]
fn test_variable_declarator_and_destructuring() {
    // const a = x; const [b, , c = 1, ...d] = y; const { e, f: g, h = 2 } = z;
    let mut arena = NodeArena::new();
    let a = arena.add_identifier("a");
    let x = arena.add_identifier("x");
    let decl_a = arena.add_variable_declaration(a, x);

    let b = arena.add_identifier("b");
    let b_el = arena.add_binding_element(false, NONE, b, NONE);
    let hole = arena.add_omitted_expression();
    let c = arena.add_identifier("c");
    let one = arena.add_numeric_literal("1");
    let c_el = arena.add_binding_element(false, NONE, c, one);
    let d = arena.add_identifier("d");
    let d_el = arena.add_binding_element(true, NONE, d, NONE);
    let array = arena.add_array_binding_pattern(vec![b_el, hole, c_el, d_el]);
    let y = arena.add_identifier("y");
    let decl_array = arena.add_variable_declaration(array, y);

    let e = arena.add_identifier("e");
    let e_el = arena.add_binding_element(false, NONE, e, NONE);
    let f = arena.add_identifier("f");
    let g = arena.add_identifier("g");
    let g_el = arena.add_binding_element(false, f, g, NONE);
    let h = arena.add_identifier("h");
    let two = arena.add_numeric_literal("2");
    let h_el = arena.add_binding_element(false, NONE, h, two);
    let object = arena.add_object_binding_pattern(vec![e_el, g_el, h_el]);
    let z = arena.add_identifier("z");
    let decl_object = arena.add_variable_declaration(object, z);

    let stmt = arena.add_variable_statement(vec![decl_a, decl_array, decl_object]);
    let root = arena.add_source_file(vec![stmt]);

    let variable = BindingOwner::Variable;
    assert_eq!(
        names(&arena, root),
        vec![
            ("a".to_string(), BindingKind::VariableDeclarator),
            ("b".to_string(), BindingKind::ArrayDestructure { owner: variable }),
            ("e".to_string(), BindingKind::ObjectDestructure { owner: variable }),
            ("g".to_string(), BindingKind::ObjectDestructure { owner: variable }),
        ]
    );
}

#[test]
fn test_function_parameters() {
    // function f(a, b = 1, ...c, [d]) {}  and  (e) => e
    let mut arena = NodeArena::new();
    let f = arena.add_identifier("f");
    let a = arena.add_identifier("a");
    let pa = arena.add_simple_parameter(a);
    let b = arena.add_identifier("b");
    let one = arena.add_numeric_literal("1");
    let pb = arena.add_parameter(ModifierFlags::empty(), false, b, one);
    let c = arena.add_identifier("c");
    let pc = arena.add_parameter(ModifierFlags::empty(), true, c, NONE);
    let d = arena.add_identifier("d");
    let d_el = arena.add_binding_element(false, NONE, d, NONE);
    let pattern = arena.add_array_binding_pattern(vec![d_el]);
    let pd = arena.add_simple_parameter(pattern);
    let body = arena.add_block(vec![]);
    let func = arena.add_function_declaration(f, vec![pa, pb, pc, pd], body);

    let e = arena.add_identifier("e");
    let pe = arena.add_simple_parameter(e);
    let e_body = arena.add_identifier("e");
    let arrow = arena.add_arrow_function(vec![pe], e_body);
    let arrow_stmt = arena.add_expression_statement(arrow);

    let root = arena.add_source_file(vec![func, arrow_stmt]);

    assert_eq!(
        names(&arena, root),
        vec![
            ("a".to_string(), BindingKind::Parameter),
            (
                "d".to_string(),
                BindingKind::ArrayDestructure {
                    owner: BindingOwner::Function
                }
            ),
            ("e".to_string(), BindingKind::Parameter),
        ],
        "function names, defaulted and rest parameters and arrow bodies are not bindings"
    );
}

#[test]
fn test_destructuring_owner_is_nearest_construct() {
    // const f = ([a]) => { const [b] = a; };
    let mut arena = NodeArena::new();
    let f = arena.add_identifier("f");
    let a = arena.add_identifier("a");
    let a_el = arena.add_binding_element(false, NONE, a, NONE);
    let a_pattern = arena.add_array_binding_pattern(vec![a_el]);
    let pa = arena.add_simple_parameter(a_pattern);
    let b = arena.add_identifier("b");
    let b_el = arena.add_binding_element(false, NONE, b, NONE);
    let b_pattern = arena.add_array_binding_pattern(vec![b_el]);
    let a_ref = arena.add_identifier("a");
    let inner = arena.add_variable_declaration(b_pattern, a_ref);
    let inner_stmt = arena.add_variable_statement(vec![inner]);
    let body = arena.add_block(vec![inner_stmt]);
    let arrow = arena.add_arrow_function(vec![pa], body);
    let outer = arena.add_variable_declaration(f, arrow);
    let stmt = arena.add_variable_statement(vec![outer]);
    let root = arena.add_source_file(vec![stmt]);

    let found = collect_bindings(&arena, root);
    let kind_of = |name: NodeIndex| found.iter().find(|occ| occ.name == name).map(|occ| occ.kind);

    assert_eq!(
        kind_of(a),
        Some(BindingKind::ArrayDestructure {
            owner: BindingOwner::Function
        })
    );
    assert_eq!(
        kind_of(b),
        Some(BindingKind::ArrayDestructure {
            owner: BindingOwner::Variable
        })
    );
}

#[test]
fn test_destructuring_without_owner_is_ignored() {
    let mut arena = NodeArena::new();
    let a = arena.add_identifier("a");
    let a_el = arena.add_binding_element(false, NONE, a, NONE);
    let pattern = arena.add_array_binding_pattern(vec![a_el]);
    let stmt = arena.add_expression_statement(pattern);
    let root = arena.add_source_file(vec![stmt]);

    assert!(collect_bindings(&arena, root).is_empty());
}

#[test]
fn test_class_members() {
    // class C {
    //   a; b$; #c; [d];
    //   constructor(private e, f) {}
    //   get g() {} set h(i) {}
    //   m(j) {}
    // }
    let mut arena = NodeArena::new();
    let class_name = arena.add_identifier("C");
    let a = arena.add_identifier("a");
    let pa = arena.add_property_declaration(ModifierFlags::empty(), a, NONE);
    let b = arena.add_identifier("b$");
    let pb = arena.add_property_declaration(ModifierFlags::empty(), b, NONE);
    let c = arena.add_private_identifier("c");
    let pc = arena.add_property_declaration(ModifierFlags::empty(), c, NONE);
    let d = arena.add_identifier("d");
    let computed = arena.add_computed_property_name(d);
    let pd = arena.add_property_declaration(ModifierFlags::empty(), computed, NONE);

    let e = arena.add_identifier("e");
    let pe = arena.add_parameter(ModifierFlags::PRIVATE, false, e, NONE);
    let f = arena.add_identifier("f");
    let pf = arena.add_simple_parameter(f);
    let ctor_body = arena.add_block(vec![]);
    let ctor = arena.add_constructor(vec![pe, pf], ctor_body);

    let g = arena.add_identifier("g");
    let g_body = arena.add_block(vec![]);
    let getter = arena.add_get_accessor(ModifierFlags::empty(), g, g_body);
    let h = arena.add_identifier("h");
    let i = arena.add_identifier("i");
    let pi = arena.add_simple_parameter(i);
    let h_body = arena.add_block(vec![]);
    let setter = arena.add_set_accessor(ModifierFlags::empty(), h, pi, h_body);

    let m = arena.add_identifier("m");
    let j = arena.add_identifier("j");
    let pj = arena.add_simple_parameter(j);
    let m_body = arena.add_block(vec![]);
    let method = arena.add_method_declaration(ModifierFlags::empty(), m, vec![pj], m_body);

    let class = arena.add_class_declaration(
        class_name,
        vec![pa, pb, pc, pd, ctor, getter, setter, method],
    );
    let root = arena.add_source_file(vec![class]);

    let found = collect_bindings(&arena, root);
    let summary: Vec<(String, BindingKind)> = names(&arena, root);
    assert_eq!(
        summary,
        vec![
            ("a".to_string(), BindingKind::ClassProperty),
            ("#c".to_string(), BindingKind::ClassProperty),
            ("e".to_string(), BindingKind::ParameterProperty),
            ("f".to_string(), BindingKind::Parameter),
            ("g".to_string(), BindingKind::Accessor),
            ("h".to_string(), BindingKind::Accessor),
            ("i".to_string(), BindingKind::Parameter),
            ("j".to_string(), BindingKind::Parameter),
        ]
    );

    let getter_occurrence = found
        .iter()
        .find(|occ| occ.kind == BindingKind::Accessor)
        .expect("getter collected");
    assert_eq!(getter_occurrence.type_node, getter, "accessor type comes from the declaration");
}

#[test]
fn test_interface_members_and_signatures() {
    // interface I { a; b$; m(c); (d); new (e); }
    let mut arena = NodeArena::new();
    let iface_name = arena.add_identifier("I");
    let a = arena.add_identifier("a");
    let pa = arena.add_property_signature(a);
    let b = arena.add_identifier("b$");
    let pb = arena.add_property_signature(b);
    let m = arena.add_identifier("m");
    let c = arena.add_identifier("c");
    let pc = arena.add_simple_parameter(c);
    let method = arena.add_method_signature(m, vec![pc]);
    let d = arena.add_identifier("d");
    let pd = arena.add_simple_parameter(d);
    let call = arena.add_call_signature(vec![pd]);
    let e = arena.add_identifier("e");
    let pe = arena.add_simple_parameter(e);
    let construct = arena.add_construct_signature(vec![pe]);
    let iface = arena.add_interface_declaration(iface_name, vec![pa, pb, method, call, construct]);
    let root = arena.add_source_file(vec![iface]);

    assert_eq!(
        names(&arena, root),
        vec![
            ("a".to_string(), BindingKind::PropertySignature),
            ("c".to_string(), BindingKind::SignatureParameter),
            ("d".to_string(), BindingKind::SignatureParameter),
            ("e".to_string(), BindingKind::SignatureParameter),
        ]
    );
}

#[test]
fn test_object_literal_keys() {
    // const o = { a: x, b, "c": y };
    let mut arena = NodeArena::new();
    let o = arena.add_identifier("o");
    let a = arena.add_identifier("a");
    let x = arena.add_identifier("x");
    let pa = arena.add_property_assignment(a, x);
    let b = arena.add_identifier("b");
    let pb = arena.add_shorthand_property_assignment(b);
    let c = arena.add_string_literal("\"c\"");
    let y = arena.add_identifier("y");
    let pc = arena.add_property_assignment(c, y);
    let literal = arena.add_object_literal(vec![pa, pb, pc]);
    let decl = arena.add_variable_declaration(o, literal);
    let stmt = arena.add_variable_statement(vec![decl]);
    let root = arena.add_source_file(vec![stmt]);

    assert_eq!(
        names(&arena, root),
        vec![
            ("o".to_string(), BindingKind::VariableDeclarator),
            ("a".to_string(), BindingKind::ObjectLiteralKey),
            ("b".to_string(), BindingKind::ObjectLiteralKey),
        ]
    );
}

#[test]
fn test_object_literal_accessors_are_keys() {
    // const o = { get events() {}, set events(v) {}, get ["x"]() {} };
    let mut arena = NodeArena::new();
    let o = arena.add_identifier("o");
    let get_key = arena.add_identifier("events");
    let get_body = arena.add_block(vec![]);
    let getter = arena.add_get_accessor(ModifierFlags::empty(), get_key, get_body);
    let set_key = arena.add_identifier("events");
    let v = arena.add_identifier("v");
    let pv = arena.add_simple_parameter(v);
    let set_body = arena.add_block(vec![]);
    let setter = arena.add_set_accessor(ModifierFlags::empty(), set_key, pv, set_body);
    let x = arena.add_string_literal("\"x\"");
    let computed = arena.add_computed_property_name(x);
    let computed_body = arena.add_block(vec![]);
    let computed_getter = arena.add_get_accessor(ModifierFlags::empty(), computed, computed_body);
    let literal = arena.add_object_literal(vec![getter, setter, computed_getter]);
    let decl = arena.add_variable_declaration(o, literal);
    let stmt = arena.add_variable_statement(vec![decl]);
    let root = arena.add_source_file(vec![stmt]);

    assert_eq!(
        names(&arena, root),
        vec![
            ("o".to_string(), BindingKind::VariableDeclarator),
            ("events".to_string(), BindingKind::ObjectLiteralKey),
            ("events".to_string(), BindingKind::ObjectLiteralKey),
            ("v".to_string(), BindingKind::Parameter),
        ]
    );
    let occurrences = collect_bindings(&arena, root);
    assert_eq!(occurrences[1].type_node, getter);
    assert_eq!(occurrences[2].type_node, setter);
}

#[test]
fn test_bindings_inside_statement_containers() {
    // namespace app {
    //     export type Events = { a; };
    //     for (const s of list) {
    //         try {} catch (e) { const { f } = e; }
    //     }
    // }
    let mut arena = NodeArena::new();
    let app = arena.add_identifier("app");
    let events = arena.add_identifier("Events");
    let a = arena.add_identifier("a");
    let pa = arena.add_property_signature(a);
    let type_literal = arena.add_type_literal(vec![pa]);
    let alias = arena.add_type_alias_declaration(events, type_literal);
    let export = arena.add_export_declaration(false, alias);

    let s = arena.add_identifier("s");
    let s_decl = arena.add_variable_declaration(s, NONE);
    let s_list = arena.add_variable_declaration_list(vec![s_decl]);
    let list = arena.add_identifier("list");
    let try_block = arena.add_block(vec![]);
    let e = arena.add_identifier("e");
    let e_decl = arena.add_variable_declaration(e, NONE);
    let f = arena.add_identifier("f");
    let f_el = arena.add_binding_element(false, NONE, f, NONE);
    let pattern = arena.add_object_binding_pattern(vec![f_el]);
    let e_ref = arena.add_identifier("e");
    let f_decl = arena.add_variable_declaration(pattern, e_ref);
    let f_stmt = arena.add_variable_statement(vec![f_decl]);
    let catch_block = arena.add_block(vec![f_stmt]);
    let catch = arena.add_catch_clause(e_decl, catch_block);
    let try_stmt = arena.add_try_statement(try_block, catch, NONE);
    let loop_body = arena.add_block(vec![try_stmt]);
    let for_of = arena.add_for_of_statement(false, s_list, list, loop_body);

    let body = arena.add_module_block(vec![export, for_of]);
    let module = arena.add_module_declaration(app, body);
    let root = arena.add_source_file(vec![module]);

    assert_eq!(
        names(&arena, root),
        vec![
            ("a".to_string(), BindingKind::PropertySignature),
            ("s".to_string(), BindingKind::VariableDeclarator),
            (
                "f".to_string(),
                BindingKind::ObjectDestructure {
                    owner: BindingOwner::Variable
                }
            ),
        ]
    );
}

#[test]
fn test_caught_value_destructuring_belongs_to_enclosing_function() {
    // function g() { try {} catch ({ h }) {} }
    let mut arena = NodeArena::new();
    let g = arena.add_identifier("g");
    let try_block = arena.add_block(vec![]);
    let h = arena.add_identifier("h");
    let h_el = arena.add_binding_element(false, NONE, h, NONE);
    let pattern = arena.add_object_binding_pattern(vec![h_el]);
    let caught = arena.add_variable_declaration(pattern, NONE);
    let catch_block = arena.add_block(vec![]);
    let catch = arena.add_catch_clause(caught, catch_block);
    let try_stmt = arena.add_try_statement(try_block, catch, NONE);
    let body = arena.add_block(vec![try_stmt]);
    let func = arena.add_function_declaration(g, vec![], body);
    let root = arena.add_source_file(vec![func]);

    assert_eq!(
        names(&arena, root),
        vec![(
            "h".to_string(),
            BindingKind::ObjectDestructure {
                owner: BindingOwner::Function
            }
        )]
    );
}

#[test]
fn test_switches() {
    let all_off = BindingSwitches {
        parameters: false,
        properties: false,
        variables: false,
    };
    let only_properties = BindingSwitches {
        properties: true,
        ..all_off
    };
    let only_variables = BindingSwitches {
        variables: true,
        ..all_off
    };

    assert!(BindingKind::ParameterProperty.is_enabled(only_properties));
    assert!(!BindingKind::Parameter.is_enabled(only_properties));
    assert!(BindingKind::Accessor.is_enabled(only_properties));
    assert!(
        BindingKind::ArrayDestructure {
            owner: BindingOwner::Variable
        }
        .is_enabled(only_variables)
    );
    assert!(
        !BindingKind::ObjectDestructure {
            owner: BindingOwner::Function
        }
        .is_enabled(only_variables)
    );
    assert!(!BindingKind::VariableDeclarator.is_enabled(all_off));
    assert!(BindingKind::SignatureParameter.is_enabled(BindingSwitches::default()));
}
