//! Round-trip properties: parsing a rendered tree yields a tree that renders
//! to the same text, and rendering is deterministic regardless of how the
//! tree was built.

use jsontree::{parse, parse_lenient, render, render_indented, JsonObject};

fn assert_roundtrip(input: &str) {
    let tree = parse(input).unwrap_or_else(|e| panic!("parse failed for {input:?}: {e}"));
    let text = render(&tree);
    let reparsed = parse(&text)
        .unwrap_or_else(|e| panic!("reparse failed for {text:?}: {e}"));
    assert_eq!(render(&reparsed), text, "compact render is not idempotent");
    assert_eq!(reparsed, tree, "reparsed tree differs structurally");
}

// ============================================================================
// Idempotence over parsed documents
// ============================================================================

#[test]
fn roundtrip_scalars() {
    assert_roundtrip("null");
    assert_roundtrip("true");
    assert_roundtrip("false");
    assert_roundtrip("42");
    assert_roundtrip("-7");
    assert_roundtrip("3.14");
    assert_roundtrip("\"hello world\"");
    assert_roundtrip("\"\"");
}

#[test]
fn roundtrip_containers() {
    assert_roundtrip("[]");
    assert_roundtrip("{}");
    assert_roundtrip("[false,true,111]");
    assert_roundtrip("{\"a\":1,\"b\":[1,2]}");
    assert_roundtrip("{\"nested\":{\"deep\":[[{\"x\":null}]]}}");
}

#[test]
fn roundtrip_escaped_strings() {
    assert_roundtrip("\"line1\\nline2\"");
    assert_roundtrip("\"tab\\there\"");
    assert_roundtrip("\"quote \\\" backslash \\\\\"");
    assert_roundtrip("\"\\u0442\\u0435\\u0441\\u0442\"");
    assert_roundtrip("\"\\ud83d\\ude00\"");
}

#[test]
fn roundtrip_of_indented_output() {
    let tree = parse("{\"a\":1,\"b\":[1,2],\"c\":{}}").unwrap();
    let pretty = render_indented(&tree);
    let reparsed = parse(&pretty).unwrap();
    assert_eq!(render(&reparsed), render(&tree));
}

#[test]
fn backspace_escape_survives_roundtrip() {
    let tree = parse("\"test\\bsymbols\"").unwrap();
    assert_eq!(tree.string_value(), "test\u{0008}symbols");
    // The rendered form carries the two-character escape, not a raw 0x08.
    assert_eq!(render(&tree), "\"test\\bsymbols\"");
}

#[test]
fn relaxed_input_normalizes_to_strict_json() {
    // Bare keys and trailing commas disappear on the way out.
    let tree = parse("{key: 1, list: [1, 2,],}").unwrap();
    assert_eq!(render(&tree), "{\"key\":1,\"list\":[1,2]}");
    assert_roundtrip(&render(&tree));
}

// ============================================================================
// Determinism
// ============================================================================

#[test]
fn key_order_is_independent_of_insertion_order() {
    let forward = JsonObject::new();
    forward.create_number("a", 1.0);
    forward.create_number("b", 2.0);
    forward.create_number("c", 3.0);

    let backward = JsonObject::new();
    backward.create_number("c", 3.0);
    backward.create_number("b", 2.0);
    backward.create_number("a", 1.0);

    assert_eq!(render(&forward.as_element()), render(&backward.as_element()));
    assert_eq!(render(&forward.as_element()), "{\"a\":1,\"b\":2,\"c\":3}");
}

#[test]
fn unsorted_source_renders_sorted() {
    let tree = parse("{\"z\":1,\"a\":2}").unwrap();
    assert_eq!(render(&tree), "{\"a\":2,\"z\":1}");
}

// ============================================================================
// Both parse modes agree on valid input
// ============================================================================

#[test]
fn strict_and_lenient_build_identical_trees() {
    let inputs = [
        "{\"a\":1,\"b\":[true,null,\"s\"]}",
        "[1.5,-2,[],{}]",
        "{relaxed: \"keys\",}",
    ];
    for input in inputs {
        let strict = parse(input).unwrap();
        let lenient = parse_lenient(input).unwrap();
        assert_eq!(strict, lenient);
        assert_eq!(render(&strict), render(&lenient));
    }
}
