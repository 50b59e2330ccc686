use enumlower::ast::{BinaryOperator, ModifierFlags, VarKind};
use enumlower::{DiagnosticCategory, EnumLoweringOptions, NodeArena, NodeIndex, lower_source_file};

fn member(arena: &mut NodeArena, name: &str, init: NodeIndex) -> NodeIndex {
    let name = arena.add_identifier(name);
    arena.add_enum_member(name, init)
}

fn declare(arena: &mut NodeArena, name: &str, members: Vec<NodeIndex>) -> NodeIndex {
    let name = arena.add_identifier(name);
    arena.add_enum_declaration(ModifierFlags::empty(), name, members)
}

#[test]
fn test_lower_source_file_mixed_program() {
    // let base = 10;
    // enum E { A = 1, B = base * 2, C }
    // export enum E2 { X = "x" }
    let mut arena = NodeArena::new("mixed.ts");
    let base = arena.add_identifier("base");
    let ten = arena.add_numeric_literal("10");
    let var = arena.add_variable_statement(VarKind::Let, vec![(base, ten)]);

    let one = arena.add_numeric_literal("1");
    let a = member(&mut arena, "A", one);
    let base_ref = arena.add_identifier("base");
    let two = arena.add_numeric_literal("2");
    let product = arena.add_binary(base_ref, BinaryOperator::Asterisk, two);
    let b = member(&mut arena, "B", product);
    let c = member(&mut arena, "C", NodeIndex::NONE);
    let e = declare(&mut arena, "E", vec![a, b, c]);

    let x_init = arena.add_string_literal("x");
    let x = member(&mut arena, "X", x_init);
    let e2 = declare(&mut arena, "E2", vec![x]);
    let export = arena.add_export_declaration(e2);

    let file = arena.add_source_file(vec![var, e, export]);

    let output = lower_source_file(&arena, file, &EnumLoweringOptions::default()).unwrap();
    assert_eq!(
        output,
        r#"let base = 10;
var E;
(function (E) {
    E[E["A"] = 1] = "A";
    E[E["B"] = base * 2] = "B";
    E[E["C"] = 1 + E["B"]] = "C";
})(E || (E = {}));
export var E2;
(function (E2) {
    E2["X"] = "x";
})(E2 || (E2 = {}));
"#
    );
}

#[test]
fn test_lower_source_file_reports_diagnostic() {
    let mut arena = NodeArena::new("broken.ts");
    let s_init = arena.add_string_literal("s");
    let s = member(&mut arena, "S", s_init);
    let next = member(&mut arena, "Next", NodeIndex::NONE);
    let e = declare(&mut arena, "E", vec![s, next]);
    let file = arena.add_source_file(vec![e]);

    let diag = lower_source_file(&arena, file, &EnumLoweringOptions::default()).unwrap_err();
    assert_eq!(diag.file, "broken.ts");
    assert_eq!(diag.code, 1061);
    assert_eq!(diag.category, DiagnosticCategory::Error);
}

#[test]
fn test_lower_source_file_json() {
    let mut arena = NodeArena::new("json.ts");
    let a = member(&mut arena, "A", NodeIndex::NONE);
    let e = declare(&mut arena, "E", vec![a]);
    let block = arena.add_block(vec![e]);
    let file = arena.add_source_file(vec![block]);

    let json = enumlower::lower_source_file_json(&arena, file, r#"{"targetEs5": true}"#).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert!(value["diagnostics"].as_array().unwrap().is_empty());
    assert!(
        value["output"]
            .as_str()
            .unwrap()
            .starts_with("{\n    var E;\n")
    );
}

#[test]
fn test_lower_source_file_json_error_and_bad_options() {
    let mut arena = NodeArena::new("json.ts");
    let a = member(&mut arena, "A", NodeIndex::NONE);
    let e = declare(&mut arena, "E", vec![a]);
    let label = arena.add_labeled_statement("l", e);
    let file = arena.add_source_file(vec![label]);

    let json = enumlower::lower_source_file_json(&arena, file, "{}").unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert!(value["output"].is_null());
    assert_eq!(value["diagnostics"][0]["code"], 18061);
    assert_eq!(
        value["diagnostics"][0]["message_text"],
        "Unexpected enum parent 'LabeledStatement'."
    );

    assert!(enumlower::lower_source_file_json(&arena, file, "not json").is_err());
}
