use super::*;

#[test]
fn test_parse_numeric_literal_forms() {
    assert_eq!(parse_numeric_literal("42"), Some(42.0));
    assert_eq!(parse_numeric_literal("1.5"), Some(1.5));
    assert_eq!(parse_numeric_literal("1e3"), Some(1000.0));
    assert_eq!(parse_numeric_literal("0x1F"), Some(31.0));
    assert_eq!(parse_numeric_literal("0b101"), Some(5.0));
    assert_eq!(parse_numeric_literal("0o17"), Some(15.0));
    assert_eq!(parse_numeric_literal("1_000"), Some(1000.0));
    assert_eq!(parse_numeric_literal("0x"), None);
    assert_eq!(parse_numeric_literal("0b2"), None);
}

#[test]
fn test_children_record_their_parent() {
    let mut arena = NodeArena::new("test.ts");
    let name = arena.add_identifier("E");
    let member_name = arena.add_identifier("A");
    let init = arena.add_numeric_literal("1");
    let member = arena.add_enum_member(member_name, init);
    let decl = arena.add_enum_declaration(ModifierFlags::empty(), name, vec![member]);
    let export = arena.add_export_declaration(decl);
    let root = arena.add_source_file(vec![export]);

    assert_eq!(arena.parent(init), member);
    assert_eq!(arena.parent(member), decl);
    assert_eq!(arena.parent(name), decl);
    assert_eq!(arena.parent(decl), export);
    assert_eq!(arena.parent(export), root);
    assert_eq!(arena.parent(root), NodeIndex::NONE);
    assert_eq!(arena.parent(NodeIndex::NONE), NodeIndex::NONE);
}

#[test]
fn test_missing_initializer_is_none() {
    let mut arena = NodeArena::new("test.ts");
    let member_name = arena.add_identifier("A");
    let member = arena.add_enum_member(member_name, NodeIndex::NONE);

    let node = arena.get(member).unwrap();
    let data = arena.get_enum_member(node).unwrap();
    assert!(data.initializer.is_none());
    assert!(arena.get(data.initializer).is_none());
}

#[test]
fn test_kind_predicates() {
    assert!(NodeKind::SourceFile.is_statement_container());
    assert!(NodeKind::Block.is_statement_container());
    assert!(!NodeKind::IfStatement.is_statement_container());
    assert!(NodeKind::ExportDeclaration.is_export_declaration());
    assert_eq!(NodeKind::LabeledStatement.name(), "LabeledStatement");
}

#[test]
fn test_modifier_flags() {
    let mut arena = NodeArena::new("test.ts");
    let name = arena.add_identifier("E");
    let decl = arena.add_enum_declaration(ModifierFlags::DECLARE, name, vec![]);
    let data = arena.get_enum(arena.get(decl).unwrap()).unwrap();
    assert!(data.is_ambient());
    assert!(!data.is_const());
}

#[test]
fn test_property_name_text_accepts_string_literal() {
    let mut arena = NodeArena::new("test.ts");
    let ident = arena.add_identifier("Foo");
    let string = arena.add_string_literal("a-b");
    let call = arena.add_call(ident, vec![]);
    assert_eq!(arena.property_name_text(ident), Some("Foo"));
    assert_eq!(arena.property_name_text(string), Some("a-b"));
    assert_eq!(arena.property_name_text(call), None);
    assert_eq!(arena.identifier_text(string), None);
}

#[test]
fn test_set_span() {
    let mut arena = NodeArena::new("test.ts");
    let ident = arena.add_identifier("A");
    arena.set_span(ident, Span::new(4, 5));
    assert_eq!(arena.get(ident).unwrap().span, Span::new(4, 5));
    assert_eq!(arena.file_name(), "test.ts");
}

#[test]
fn test_typed_accessors_borrow_from_the_node() {
    let mut arena = NodeArena::new("test.ts");
    let name = arena.add_identifier("E");
    let member_name = arena.add_identifier("A");
    let member = arena.add_enum_member(member_name, NodeIndex::NONE);
    let decl = arena.add_enum_declaration(ModifierFlags::empty(), name, vec![member]);
    let block = arena.add_block(vec![decl]);
    let detached_decl = arena.get(decl).cloned().unwrap();
    let detached_block = arena.get(block).cloned().unwrap();

    // The returned data outlives the arena used for the lookup.
    let (members, statements) = {
        let lookup = NodeArena::new("other.ts");
        (
            lookup.get_enum(&detached_decl).map(|data| &data.members),
            lookup.get_statements(&detached_block),
        )
    };
    assert_eq!(members.unwrap().nodes, vec![member]);
    assert_eq!(statements.unwrap().nodes, vec![decl]);
}
