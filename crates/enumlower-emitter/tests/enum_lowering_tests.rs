//! End-to-end enum lowering through the public API.

use enumlower_ast::{BinaryOperator, ModifierFlags, NodeArena, NodeIndex, PrefixOperator};
use enumlower_common::Span;
use enumlower_emitter::enums::{EnumValue, ResolvedValue};
use enumlower_emitter::transforms::EnumES5Transformer;
use enumlower_emitter::{EnumLoweringOptions, LoweringError, LoweringPass};

/// Small helper for building enum declarations.
struct EnumBuilder<'a> {
    arena: &'a mut NodeArena,
    members: Vec<NodeIndex>,
}

impl<'a> EnumBuilder<'a> {
    fn new(arena: &'a mut NodeArena) -> Self {
        Self {
            arena,
            members: Vec::new(),
        }
    }

    fn auto(mut self, name: &str) -> Self {
        let name = self.arena.add_identifier(name);
        self.members
            .push(self.arena.add_enum_member(name, NodeIndex::NONE));
        self
    }

    fn init(mut self, name: &str, build: impl FnOnce(&mut NodeArena) -> NodeIndex) -> Self {
        let init = build(&mut *self.arena);
        let name = self.arena.add_identifier(name);
        self.members.push(self.arena.add_enum_member(name, init));
        self
    }

    fn finish(self, name: &str, modifiers: ModifierFlags) -> NodeIndex {
        let name = self.arena.add_identifier(name);
        self.arena
            .add_enum_declaration(modifiers, name, self.members)
    }
}

fn lower(arena: &NodeArena, root: NodeIndex, options: &EnumLoweringOptions) -> String {
    LoweringPass::new(arena, options)
        .run(root)
        .unwrap()
        .to_javascript()
}

#[test]
fn test_flags_enum_folds_references() {
    // enum Flags { None, Read = 1 << 0, Write = 1 << 1, ReadWrite = Read | Write, Mask = ~None }
    let mut arena = NodeArena::new("flags.ts");
    let decl = EnumBuilder::new(&mut arena)
        .auto("None")
        .init("Read", |a| {
            let l = a.add_numeric_literal("1");
            let r = a.add_numeric_literal("0");
            a.add_binary(l, BinaryOperator::LessThanLessThan, r)
        })
        .init("Write", |a| {
            let l = a.add_numeric_literal("1");
            let r = a.add_numeric_literal("1");
            a.add_binary(l, BinaryOperator::LessThanLessThan, r)
        })
        .init("ReadWrite", |a| {
            let l = a.add_identifier("Read");
            let r = a.add_identifier("Write");
            a.add_binary(l, BinaryOperator::Bar, r)
        })
        .init("Mask", |a| {
            let operand = a.add_identifier("None");
            a.add_prefix_unary(PrefixOperator::Tilde, operand)
        })
        .finish("Flags", ModifierFlags::empty());
    let file = arena.add_source_file(vec![decl]);

    assert_eq!(
        lower(&arena, file, &EnumLoweringOptions::default()),
        r#"var Flags;
(function (Flags) {
    Flags[Flags["None"] = 0] = "None";
    Flags[Flags["Read"] = 1] = "Read";
    Flags[Flags["Write"] = 2] = "Write";
    Flags[Flags["ReadWrite"] = 3] = "ReadWrite";
    Flags[Flags["Mask"] = -1] = "Mask";
})(Flags || (Flags = {}));
"#
    );
}

#[test]
fn test_string_enum_has_no_reverse_mapping() {
    let mut arena = NodeArena::new("dir.ts");
    let decl = EnumBuilder::new(&mut arena)
        .init("Up", |a| a.add_string_literal("UP"))
        .init("Down", |a| a.add_string_literal("DOWN"))
        .init("Count", |a| a.add_numeric_literal("2"))
        .finish("Dir", ModifierFlags::empty());
    let file = arena.add_source_file(vec![decl]);

    assert_eq!(
        lower(&arena, file, &EnumLoweringOptions::default()),
        r#"var Dir;
(function (Dir) {
    Dir["Up"] = "UP";
    Dir["Down"] = "DOWN";
    Dir[Dir["Count"] = 2] = "Count";
})(Dir || (Dir = {}));
"#
    );
}

#[test]
fn test_repeat_declarations_in_block_share_one_object() {
    // { enum E { A } enum E { B = 5, C } }
    let mut arena = NodeArena::new("merge.ts");
    let first = EnumBuilder::new(&mut arena)
        .auto("A")
        .finish("E", ModifierFlags::empty());
    let second = EnumBuilder::new(&mut arena)
        .init("B", |a| a.add_numeric_literal("5"))
        .auto("C")
        .finish("E", ModifierFlags::empty());
    let block = arena.add_block(vec![first, second]);
    let file = arena.add_source_file(vec![block]);

    let program = LoweringPass::new(&arena, &EnumLoweringOptions::default())
        .run(file)
        .unwrap();
    assert_eq!(program.scopes.bindings(block).len(), 1);
    assert!(program.scopes.bindings(file).is_empty());
    assert_eq!(
        program.to_javascript(),
        r#"{
    let E;
    (function (E) {
        E[E["A"] = 0] = "A";
    })(E || (E = {}));
    (function (E) {
        E[E["B"] = 5] = "B";
        E[E["C"] = 6] = "C";
    })(E || (E = {}));
}
"#
    );
}

#[test]
fn test_ambient_enum_produces_nothing() {
    let mut arena = NodeArena::new("ambient.ts");
    let decl = EnumBuilder::new(&mut arena)
        .auto("A")
        .finish("E", ModifierFlags::DECLARE);
    let file = arena.add_source_file(vec![decl]);

    let program = LoweringPass::new(&arena, &EnumLoweringOptions::default())
        .run(file)
        .unwrap();
    assert!(program.statements.is_empty());
    assert!(program.scopes.is_empty());
}

#[test]
fn test_const_enum_options_from_json() {
    let mut arena = NodeArena::new("const.ts");
    let decl = EnumBuilder::new(&mut arena)
        .auto("A")
        .finish("C", ModifierFlags::CONST);
    let file = arena.add_source_file(vec![decl]);

    let erased = EnumLoweringOptions::from_json(r#"{ "target": "es2015" }"#).unwrap();
    assert_eq!(lower(&arena, file, &erased), "");

    let preserved =
        EnumLoweringOptions::from_json(r#"{ "preserveConstEnums": true, "targetEs5": true }"#)
            .unwrap();
    assert_eq!(
        lower(&arena, file, &preserved),
        "var C;\n(function (C) {\n    C[C[\"A\"] = 0] = \"A\";\n})(C || (C = {}));\n"
    );
}

#[test]
fn test_missing_initializer_diagnostic() {
    let mut arena = NodeArena::new("bad.ts");
    let decl = EnumBuilder::new(&mut arena)
        .init("A", |a| a.add_string_literal("a"))
        .auto("B")
        .finish("S", ModifierFlags::empty());
    let member_b = match arena.get_enum(arena.get(decl).unwrap()) {
        Some(data) => data.members.nodes[1],
        None => unreachable!(),
    };
    arena.set_span(member_b, Span::new(22, 23));
    let file = arena.add_source_file(vec![decl]);

    let err = LoweringPass::new(&arena, &EnumLoweringOptions::default())
        .run(file)
        .unwrap_err();
    let diag = err.to_diagnostic(arena.file_name());
    assert_eq!(diag.code, 1061);
    assert_eq!(diag.file, "bad.ts");
    assert_eq!(diag.start, 22);
    assert_eq!(diag.length, 1);
    assert_eq!(diag.message_text, "Enum member must have initializer.");
}

#[test]
fn test_unexpected_parent_diagnostic() {
    let mut arena = NodeArena::new("bad.ts");
    let decl = EnumBuilder::new(&mut arena)
        .auto("A")
        .finish("E", ModifierFlags::empty());
    let labeled = arena.add_labeled_statement("l", decl);
    let file = arena.add_source_file(vec![labeled]);

    let err = LoweringPass::new(&arena, &EnumLoweringOptions::default())
        .run(file)
        .unwrap_err();
    assert!(matches!(err, LoweringError::UnexpectedParent { .. }));
    let diag = err.to_diagnostic(arena.file_name());
    assert_eq!(diag.code, 18061);
    assert_eq!(diag.message_text, "Unexpected enum parent 'LabeledStatement'.");
}

#[test]
fn test_transformer_exposes_resolved_members() {
    // enum E { A = 1, B = f(), C }
    let mut arena = NodeArena::new("dyn.ts");
    let decl = EnumBuilder::new(&mut arena)
        .init("A", |a| a.add_numeric_literal("1"))
        .init("B", |a| {
            let f = a.add_identifier("f");
            a.add_call(f, vec![])
        })
        .auto("C")
        .finish("E", ModifierFlags::empty());

    let lowered = EnumES5Transformer::new(&arena)
        .transform_enum(decl)
        .unwrap()
        .unwrap();
    let values: Vec<_> = lowered.members.iter().map(|m| &m.value).collect();
    assert_eq!(values[0], &ResolvedValue::Constant(EnumValue::Number(1.0)));
    assert!(matches!(values[1], ResolvedValue::Dynamic(_)));
    assert!(matches!(values[2], ResolvedValue::Dynamic(_)));
}
