use assert_matches::assert_matches;
use enum_indexer::lexer::tokenize;
use enum_indexer::parser::parse_translation_unit;
use enum_indexer::{Cursor, CursorKind, IndexError};
use std::path::Path;

fn parse(source: &str) -> Cursor {
    let file = Path::new("test.cpp");
    let tokens = tokenize(source, file).expect("tokenize");
    parse_translation_unit(tokens, file).expect("parse")
}

fn parse_err(source: &str) -> IndexError {
    let file = Path::new("test.cpp");
    let tokens = tokenize(source, file).expect("tokenize");
    parse_translation_unit(tokens, file).unwrap_err()
}

#[test]
fn nested_namespaces_form_a_tree() {
    let root = parse("namespace outer { namespace inner { enum class Types { A } } }");
    assert_eq!(root.kind, CursorKind::TranslationUnit);
    let outer = &root.children[0];
    assert_eq!((outer.kind, outer.spelling.as_str()), (CursorKind::Namespace, "outer"));
    let inner = &outer.children[0];
    assert_eq!((inner.kind, inner.spelling.as_str()), (CursorKind::Namespace, "inner"));
    let decl = &inner.children[0];
    assert_eq!((decl.kind, decl.spelling.as_str()), (CursorKind::EnumDecl, "Types"));
    assert_eq!(decl.children.len(), 1);
}

#[test]
fn compact_namespace_expands_to_nested_cursors() {
    let root = parse("namespace a::b::c { enum class E { X } }");
    let a = &root.children[0];
    assert_eq!(a.spelling, "a");
    let b = &a.children[0];
    assert_eq!(b.spelling, "b");
    let c = &b.children[0];
    assert_eq!(c.spelling, "c");
    assert_eq!(c.children[0].kind, CursorKind::EnumDecl);
}

#[test]
fn enum_values_continue_from_explicit_initializers() {
    let root = parse("namespace n { enum class E { A = 100, B, C, D = 0x10, E2, F = -3, G } }");
    let decl = &root.children[0].children[0];
    let values: Vec<i64> = decl.children.iter().map(|c| c.value.unwrap()).collect();
    assert_eq!(values, vec![100, 101, 102, 16, 17, -3, -2]);
}

#[test]
fn first_constant_defaults_to_zero() {
    let root = parse("namespace n { enum class E { A, B } }");
    let decl = &root.children[0].children[0];
    assert_eq!(decl.children[0].value, Some(0));
    assert_eq!(decl.children[1].value, Some(1));
}

#[test]
fn underlying_type_and_trailing_semicolon_are_accepted() {
    let root = parse("namespace n { enum class E : uint32_t { A = 1 }; }");
    let decl = &root.children[0].children[0];
    assert_eq!(decl.spelling, "E");
    assert_eq!(decl.children[0].value, Some(1));
}

#[test]
fn missing_trailing_semicolon_is_tolerated() {
    // The fixture corpus omits the `;` after namespace-scoped enum bodies.
    let root = parse("namespace n { enum class E { A = 1, } }");
    assert_eq!(root.children[0].children[0].children.len(), 1);
}

#[test]
fn plain_enum_is_an_enum_decl() {
    let root = parse("namespace n { enum Legacy { OLD = 9 }; }");
    let decl = &root.children[0].children[0];
    assert_eq!((decl.kind, decl.spelling.as_str()), (CursorKind::EnumDecl, "Legacy"));
}

#[test]
fn opaque_enum_declaration_has_no_children() {
    let root = parse("namespace n { enum class E : int; }");
    let decl = &root.children[0].children[0];
    assert_eq!(decl.kind, CursorKind::EnumDecl);
    assert!(decl.children.is_empty());
}

#[test]
fn class_scoped_enum_is_a_child_of_the_class() {
    let root = parse("class Holder { enum class Types { A, B }; };");
    let class = &root.children[0];
    assert_eq!((class.kind, class.spelling.as_str()), (CursorKind::ClassDecl, "Holder"));
    assert_eq!(class.children[0].kind, CursorKind::EnumDecl);
}

#[test]
fn templated_class_still_yields_a_class_cursor() {
    let root = parse("template <class T, int N> class Holder { enum class Types { A }; };");
    let class = &root.children[0];
    assert_eq!((class.kind, class.spelling.as_str()), (CursorKind::ClassDecl, "Holder"));
    assert_eq!(class.children[0].kind, CursorKind::EnumDecl);
}

#[test]
fn struct_gets_its_own_kind() {
    let root = parse("struct Bag { enum class Types { A }; };");
    assert_eq!(root.children[0].kind, CursorKind::StructDecl);
}

#[test]
fn access_specifiers_do_not_swallow_declarations() {
    let root = parse("class C { private: enum class Types { A }; public: enum class More { B }; };");
    let class = &root.children[0];
    let enums: Vec<&str> = class
        .children
        .iter()
        .filter(|c| c.kind == CursorKind::EnumDecl)
        .map(|c| c.spelling.as_str())
        .collect();
    assert_eq!(enums, vec!["Types", "More"]);
}

#[test]
fn unrelated_declarations_are_skipped() {
    let source = r#"
namespace n {
    int counter = 0;
    void helper() { if (counter) { counter = 0; } }
    using id_t = unsigned;
    enum class E { A = 7 }
}
"#;
    let root = parse(source);
    let ns = &root.children[0];
    assert_eq!(ns.children.len(), 1);
    assert_eq!(ns.children[0].spelling, "E");
}

#[test]
fn forward_declarations_produce_no_cursor() {
    let root = parse("class Fwd; namespace n { enum class E { A } }");
    assert_eq!(root.children.len(), 1);
    assert_eq!(root.children[0].kind, CursorKind::Namespace);
}

#[test]
fn constant_locations_are_recorded() {
    let root = parse("namespace n {\n    enum class E {\n        A = 5,\n    }\n}");
    let constant = &root.children[0].children[0].children[0];
    assert_eq!((constant.line, constant.col), (3, 9));
}

#[test]
fn non_literal_initializer_is_rejected() {
    let err = parse_err("namespace n { enum class E { A = SOME_BASE } }");
    assert_matches!(err, IndexError::UnsupportedInitializer { constant, .. } => {
        assert_eq!(constant, "A");
    });
}

#[test]
fn expression_initializer_is_rejected() {
    let err = parse_err("namespace n { enum class E { A = 1 << 4 } }");
    assert_matches!(err, IndexError::UnsupportedInitializer { .. });
    assert_eq!(err.category(), "parse_error");
}

#[test]
fn unbalanced_braces_are_a_parse_error() {
    let err = parse_err("namespace n { enum class E { A ");
    assert_matches!(err, IndexError::Parse { .. });
}

#[test]
fn dump_renders_indented_cursor_lines() {
    let root = parse("namespace n { enum class E { A = 1 } }");
    let mut out = Vec::new();
    root.dump(&mut out).expect("dump");
    let text = String::from_utf8(out).expect("utf8");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "TranslationUnit: test.cpp: [line=1, col=1]");
    assert_eq!(lines[1], "  Namespace: n: [line=1, col=11]");
    assert_eq!(lines[2], "    EnumDecl: E: [line=1, col=26]");
    assert_eq!(lines[3], "      EnumConstantDecl: A: [line=1, col=30]");
}
