use jsontree::{parse, parse_lenient, render};

// ============================================================================
// Scalar documents
// ============================================================================

#[test]
fn parse_null() {
    let element = parse("null").unwrap();
    assert!(element.is_null());
}

#[test]
fn parse_bool_true() {
    let element = parse("true").unwrap();
    assert!(element.is_boolean());
    assert!(element.bool_value());
}

#[test]
fn parse_bool_false() {
    let element = parse("false").unwrap();
    assert!(element.is_boolean());
    assert!(!element.bool_value());
}

#[test]
fn parse_string() {
    let element = parse("\"Parser\"").unwrap();
    assert!(element.is_string());
    assert_eq!(element.string_value(), "Parser");
}

#[test]
fn parse_int_number() {
    let element = parse("123").unwrap();
    assert!(element.is_number());
    assert_eq!(element.int_value(), 123);
}

#[test]
fn parse_negative_number() {
    let element = parse("-123").unwrap();
    assert_eq!(element.int_value(), -123);
}

#[test]
fn parse_float_number() {
    let element = parse("12.370").unwrap();
    assert_eq!(element.double_value(), 12.37);
}

#[test]
fn parse_long_number() {
    let element = parse("922337203685").unwrap();
    assert!(element.is_long_integer());
    assert!(!element.is_integer());
    assert_eq!(element.long_value(), 922_337_203_685);
}

#[test]
fn parse_number_with_trailing_dot() {
    let element = parse("123.").unwrap();
    assert_eq!(element.double_value(), 123.0);
}

#[test]
fn parse_hex_escapes() {
    let element = parse("\"\\u000F \\u001e\"").unwrap();
    assert_eq!(element.string_value(), "\u{000F} \u{001E}");
}

#[test]
fn parse_surrogate_pair_escape() {
    let element = parse("\"\\ud83d\\ude00\"").unwrap();
    assert_eq!(element.string_value(), "\u{1F600}");
}

#[test]
fn parse_short_escapes() {
    let element = parse(r#""a\"b\\c\/d\be\ff\ng\rh\ti""#).unwrap();
    assert_eq!(
        element.string_value(),
        "a\"b\\c/d\u{0008}e\u{000C}f\ng\rh\ti"
    );
}

// ============================================================================
// Containers
// ============================================================================

#[test]
fn parse_nested_object() {
    let input = concat!(
        "{\n",
        "  \"name\" : \"Ivan Ivanov\",\n",
        "  \"years\" : 25,\n",
        "  \"PhD\" : null,\n",
        "  \"skills\" :\n",
        "  [\n",
        "    \"Java\",\n",
        "    \"C++\",\n",
        "    \"Assembler\",\n",
        "    \"Linux\"\n",
        "  ],\n",
        "  \"testPassed\" : true,\n",
        "  \"research work\" :\n",
        "  {\n",
        "  \"papers\" : 3,\n",
        "  \"publications\" : 1\n",
        "  }\n",
        "}"
    );
    let element = parse_lenient(input).unwrap();
    let object = element.as_object().unwrap();
    assert!(!object.is_empty());

    let name = object.get("name").unwrap();
    assert!(name.is_string());
    assert_eq!(name.string_value(), "Ivan Ivanov");

    let years = object.get("years").unwrap();
    assert!(years.is_number());
    assert!(years.is_integer());
    assert_eq!(years.int_value(), 25);

    assert!(object.get("PhD").unwrap().is_null());

    let skills = object.get("skills").unwrap().as_array().unwrap();
    assert_eq!(skills.size(), 4);
    assert_eq!(skills.element_at(0).unwrap().string_value(), "Java");
    assert_eq!(skills.element_at(1).unwrap().string_value(), "C++");
    assert_eq!(skills.element_at(2).unwrap().string_value(), "Assembler");
    assert_eq!(skills.element_at(3).unwrap().string_value(), "Linux");
    assert!(skills.element_at(4).is_none());

    assert!(object.get("testPassed").unwrap().bool_value());

    let research = object.get("research work").unwrap().as_object().unwrap();
    assert_eq!(research.size(), 2);
    assert_eq!(research.get("papers").unwrap().int_value(), 3);
    assert_eq!(research.get("publications").unwrap().int_value(), 1);
}

#[test]
fn parse_array_of_scalars() {
    let element = parse_lenient("[false,true,111]").unwrap();
    let array = element.as_array().unwrap();
    assert_eq!(array.size(), 3);
    assert_eq!(render(&element), "[false,true,111]");
}

#[test]
fn parse_empty_containers() {
    assert_eq!(render(&parse("{}").unwrap()), "{}");
    assert_eq!(render(&parse("[ ]").unwrap()), "[]");
}

#[test]
fn parse_bare_identifier_keys() {
    let element = parse("{key : \"value\", other2 : 1}").unwrap();
    let object = element.as_object().unwrap();
    assert_eq!(object.get("key").unwrap().string_value(), "value");
    assert_eq!(object.get("other2").unwrap().int_value(), 1);
}

#[test]
fn parse_trailing_comma_in_object() {
    let element = parse("{\"key\": \"value\",}").unwrap();
    let object = element.as_object().unwrap();
    assert_eq!(object.size(), 1);
    assert_eq!(object.get("key").unwrap().string_value(), "value");
}

#[test]
fn parse_trailing_comma_in_array() {
    let element = parse("[1, 2, 3,]").unwrap();
    let array = element.as_array().unwrap();
    assert_eq!(array.size(), 3);
}

#[test]
fn parse_duplicate_keys_last_wins() {
    let element = parse("{\"k\": 1, \"k\": 2}").unwrap();
    let object = element.as_object().unwrap();
    assert_eq!(object.size(), 1);
    assert_eq!(object.get("k").unwrap().int_value(), 2);
}

// ============================================================================
// Parent wiring
// ============================================================================

#[test]
fn parsed_root_has_no_parent() {
    let element = parse("{\"a\": 1}").unwrap();
    assert!(element.parent().is_none());
}

#[test]
fn parsed_children_point_at_their_container() {
    let element = parse("{\"a\": [1, {\"b\": true}]}").unwrap();
    let object = element.as_object().unwrap();
    let array = object.get("a").unwrap();
    assert_eq!(array.parent().unwrap(), element);

    let inner = array.as_array().unwrap().element_at(1).unwrap();
    assert_eq!(inner.parent().unwrap(), array);
    let leaf = inner.as_object().unwrap().get("b").unwrap();
    assert_eq!(leaf.parent().unwrap(), inner);
}

// ============================================================================
// Termination behavior
// ============================================================================

#[test]
fn root_number_must_be_whole_document() {
    assert!(parse("123PU").is_err());
    // A root number preceded by whitespace no longer starts at offset zero
    // and is rejected by the embedded-terminator rule.
    assert!(parse(" 123").is_err());
}

#[test]
fn trailing_text_after_non_number_root_is_ignored() {
    assert!(parse("[1, 2] trailing").is_ok());
    assert!(parse("\"text\" trailing").is_ok());
    assert!(parse("true trailing").is_ok());
}

#[test]
fn bare_identifier_before_closing_brace_is_dropped() {
    let element = parse("{stray}").unwrap();
    assert!(element.as_object().unwrap().is_empty());
}
