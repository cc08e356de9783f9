use enum_indexer::EnumIndexer;
use std::path::Path;

fn index(source: &str, target_enum: &str, target_namespace: &str) -> enum_indexer::EnumIndex {
    let mut indexer = EnumIndexer::new(target_enum, target_namespace);
    indexer
        .index_source(source, Path::new("unit.cpp"))
        .expect("index");
    indexer.into_index()
}

#[test]
fn records_fully_qualified_names_and_values() {
    let source = r#"
namespace device {
    namespace IDs {
        enum class Types {
            NONE = 100,
            FIRST,
        }
    }
}
"#;
    let index = index(source, "Types", "IDs");
    let names: Vec<&str> = index.constants().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["::device::IDs::Types::NONE", "::device::IDs::Types::FIRST"]
    );
    assert_eq!(index.constants()[0].value, 100);
    assert_eq!(index.constants()[1].value, 101);
    assert_eq!(index.constants()[0].file, "unit.cpp");
    assert_eq!(index.constants()[0].line, 5);
}

#[test]
fn target_namespace_may_be_any_ancestor() {
    let source = r#"
namespace room {
    namespace IDs {
        namespace app {
            enum class Types { NONE = 200, DOOR }
        }
    }
}
"#;
    let index = index(source, "Types", "IDs");
    assert_eq!(index.len(), 2);
    assert_eq!(index.constants()[0].name, "::room::IDs::app::Types::NONE");
}

#[test]
fn enum_name_must_match_exactly() {
    let source = "namespace IDs { enum class Kinds { A = 1 } }";
    assert!(index(source, "Types", "IDs").is_empty());
    assert_eq!(index(source, "Kinds", "IDs").len(), 1);
}

#[test]
fn namespace_must_be_an_ancestor() {
    let source = "namespace other { enum class Types { A = 1 } }";
    assert!(index(source, "Types", "IDs").is_empty());
}

#[test]
fn look_alike_namespace_names_do_not_match() {
    // Ancestry matching is on whole `::name::` segments, so a prefix or
    // suffix collision must not count.
    let source = r#"
namespace XIDs { enum class Types { A = 1 } }
namespace IDs2 { enum class Types { B = 2 } }
"#;
    assert!(index(source, "Types", "IDs").is_empty());
}

#[test]
fn anonymous_namespace_contributes_an_empty_segment() {
    let source = "namespace IDs { namespace { enum class Types { A = 1 } } }";
    let index = index(source, "Types", "IDs");
    assert_eq!(index.len(), 1);
    assert_eq!(index.constants()[0].name, "::IDs::::Types::A");
}

#[test]
fn class_scoped_enums_are_never_matched() {
    let source = r#"
namespace IDs {
    class Holder {
        enum class Types { A = 1, B };
    };
    struct Pod {
        enum class Types { C = 3 };
    };
}
"#;
    assert!(index(source, "Types", "IDs").is_empty());
}

#[test]
fn template_scoped_enums_are_never_matched() {
    let source = r#"
namespace IDs {
    template <class T>
    class Holder {
        enum class Types { A = 1 };
    };
}
"#;
    assert!(index(source, "Types", "IDs").is_empty());
}

#[test]
fn top_level_enum_without_namespace_is_not_matched() {
    let source = "enum class Types { A = 1 };";
    assert!(index(source, "Types", "IDs").is_empty());
}

#[test]
fn enums_behind_a_class_in_the_scope_chain_are_not_matched() {
    // A namespace nested inside a class body does not make the enum's
    // ancestry a pure namespace chain back to the target.
    let source = r#"
namespace IDs {
    enum class Types { A = 1 }
    class Holder {
        enum class Types { B = 2 };
    };
}
"#;
    let index = index(source, "Types", "IDs");
    assert_eq!(index.len(), 1);
    assert_eq!(index.constants()[0].value, 1);
}

#[test]
fn compact_namespace_declarations_match() {
    let source = "namespace telemetry::IDs { enum class Types { PING = 10 } }";
    let index = index(source, "Types", "IDs");
    assert_eq!(index.len(), 1);
    assert_eq!(index.constants()[0].name, "::telemetry::IDs::Types::PING");
}

#[test]
fn duplicate_values_resolve_last_wins_by_value() {
    let source = r#"
namespace a { namespace IDs { enum class Types { FIRST = 5 } } }
namespace b { namespace IDs { enum class Types { SECOND = 5 } } }
"#;
    let index = index(source, "Types", "IDs");
    assert_eq!(index.len(), 2);
    let winner = index.lookup_value(5).expect("value recorded");
    assert_eq!(winner.name, "::b::IDs::Types::SECOND");
}

#[test]
fn multiple_files_accumulate_into_one_index() {
    let mut indexer = EnumIndexer::new("Types", "IDs");
    indexer
        .index_source(
            "namespace a { namespace IDs { enum class Types { X = 1 } } }",
            Path::new("a.cpp"),
        )
        .expect("first file");
    indexer
        .index_source(
            "namespace b { namespace IDs { enum class Types { Y = 2 } } }",
            Path::new("b.cpp"),
        )
        .expect("second file");
    let index = indexer.into_index();
    assert_eq!(index.len(), 2);
    assert_eq!(index.constants()[0].file, "a.cpp");
    assert_eq!(index.constants()[1].file, "b.cpp");
}

#[test]
fn lookup_by_fully_qualified_name() {
    let source = "namespace a { namespace IDs { enum class Types { X = 1 } } }";
    let index = index(source, "Types", "IDs");
    let hit = index.lookup_name("::a::IDs::Types::X").expect("by name");
    assert_eq!(hit.value, 1);
    assert!(index.lookup_name("::a::IDs::Types::Y").is_none());
}
