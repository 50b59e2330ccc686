use super::*;
use crate::enums::{EnumValue, ResolvedValue};
use crate::transforms::ir_printer::IRPrinter;
use enumlower_ast::{BinaryOperator, ModifierFlags};

fn constant(name: &str, value: EnumValue) -> ResolvedMember {
    ResolvedMember {
        name: name.to_string(),
        value: ResolvedValue::Constant(value),
        node: NodeIndex::NONE,
    }
}

fn print(node: &IRNode) -> String {
    IRPrinter::emit_to_string(node)
}

#[test]
fn test_numeric_member_gets_reverse_mapping() {
    let member = constant("A", EnumValue::Number(0.0));
    assert_eq!(
        print(&build_member_assignment("E", &member)),
        "E[E[\"A\"] = 0] = \"A\";"
    );
}

#[test]
fn test_string_member_gets_forward_mapping_only() {
    let member = constant("A", EnumValue::String("a".to_string()));
    assert_eq!(
        print(&build_member_assignment("E", &member)),
        "E[\"A\"] = \"a\";"
    );
}

#[test]
fn test_dynamic_members() {
    let call = ResolvedMember {
        name: "B".to_string(),
        value: ResolvedValue::Dynamic(IRNode::call(IRNode::id("f"), vec![])),
        node: NodeIndex::NONE,
    };
    assert_eq!(
        print(&build_member_assignment("E", &call)),
        "E[E[\"B\"] = f()] = \"B\";"
    );

    let template = ResolvedMember {
        name: "T".to_string(),
        value: ResolvedValue::Dynamic(IRNode::TemplateLiteral {
            head: "t".to_string(),
            spans: Vec::new(),
        }),
        node: NodeIndex::NONE,
    };
    assert_eq!(
        print(&build_member_assignment("E", &template)),
        "E[\"T\"] = `t`;"
    );
}

#[test]
fn test_non_integer_values_print_like_javascript() {
    let half = constant("Half", EnumValue::Number(0.5));
    assert_eq!(
        print(&build_member_assignment("E", &half)),
        "E[E[\"Half\"] = 0.5] = \"Half\";"
    );
    let inf = constant("Inf", EnumValue::Number(f64::INFINITY));
    assert_eq!(
        print(&build_member_assignment("E", &inf)),
        "E[E[\"Inf\"] = Infinity] = \"Inf\";"
    );
}

#[test]
fn test_fill_wrapper_shape() {
    let members = vec![
        constant("A", EnumValue::Number(0.0)),
        constant("S", EnumValue::String("s".to_string())),
    ];
    assert_eq!(
        print(&build_fill_wrapper("Color", &members)),
        "(function (Color) {\n    Color[Color[\"A\"] = 0] = \"A\";\n    Color[\"S\"] = \"s\";\n})(Color || (Color = {}));"
    );
}

#[test]
fn test_fill_wrapper_for_empty_enum() {
    assert_eq!(
        print(&build_fill_wrapper("E", &[])),
        "(function (E) { })(E || (E = {}));"
    );
}

#[test]
fn test_transform_enum_resolves_and_builds() {
    // enum Flags { None, Read = 1 << 0, Write = 1 << 1 }
    let mut arena = NodeArena::new("test.ts");
    let none_name = arena.add_identifier("None");
    let none = arena.add_enum_member(none_name, NodeIndex::NONE);
    let one = arena.add_numeric_literal("1");
    let zero = arena.add_numeric_literal("0");
    let read_init = arena.add_binary(one, BinaryOperator::LessThanLessThan, zero);
    let read_name = arena.add_identifier("Read");
    let read = arena.add_enum_member(read_name, read_init);
    let one = arena.add_numeric_literal("1");
    let one_b = arena.add_numeric_literal("1");
    let write_init = arena.add_binary(one, BinaryOperator::LessThanLessThan, one_b);
    let write_name = arena.add_identifier("Write");
    let write = arena.add_enum_member(write_name, write_init);
    let name = arena.add_identifier("Flags");
    let decl = arena.add_enum_declaration(ModifierFlags::empty(), name, vec![none, read, write]);

    let lowered = EnumES5Transformer::new(&arena)
        .transform_enum(decl)
        .unwrap()
        .unwrap();
    assert_eq!(lowered.name, "Flags");
    assert_eq!(lowered.members.len(), 3);
    assert_eq!(lowered.members[1].node, read);
    assert_eq!(
        print(&lowered.fill),
        "(function (Flags) {\n    Flags[Flags[\"None\"] = 0] = \"None\";\n    Flags[Flags[\"Read\"] = 1] = \"Read\";\n    Flags[Flags[\"Write\"] = 2] = \"Write\";\n})(Flags || (Flags = {}));"
    );
}

#[test]
fn test_transform_enum_ignores_other_nodes() {
    let mut arena = NodeArena::new("test.ts");
    let id = arena.add_identifier("x");
    assert_eq!(EnumES5Transformer::new(&arena).transform_enum(id), Ok(None));
    assert_eq!(
        EnumES5Transformer::new(&arena).transform_enum(NodeIndex::NONE),
        Ok(None)
    );
}

#[test]
fn test_transform_enum_propagates_missing_initializer() {
    let mut arena = NodeArena::new("test.ts");
    let a_name = arena.add_identifier("A");
    let lit = arena.add_string_literal("a");
    let a = arena.add_enum_member(a_name, lit);
    let b_name = arena.add_identifier("B");
    let b = arena.add_enum_member(b_name, NodeIndex::NONE);
    let name = arena.add_identifier("E");
    let decl = arena.add_enum_declaration(ModifierFlags::empty(), name, vec![a, b]);

    let err = EnumES5Transformer::new(&arena)
        .transform_enum(decl)
        .unwrap_err();
    assert!(matches!(
        err,
        LoweringError::MissingInitializer { ref member, .. } if member == "B"
    ));
}
