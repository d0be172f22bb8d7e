//! Recursive-descent JSON parser.
//!
//! One grammar, two entry points: [`parse`] fails fast with a typed
//! [`ParseError`], [`parse_lenient`] turns any violation into `None`. Both
//! run over the same recursive functions; strictness is decided at the
//! boundary, not by a second copy of the grammar.
//!
//! The grammar is deliberately relaxed beyond strict JSON in two places:
//! object keys may be bare identifiers (`{key: 1}`), and a trailing comma
//! before `]` or `}` is tolerated. Exponent notation is not supported.
//!
//! # Quirks that are contract, not accident
//!
//! - A number is only required to terminate cleanly: end-of-input when it is
//!   the whole document (detected by its start offset), otherwise `,`, `}` or
//!   `]`. Other root values ignore trailing text: `parse("[1] junk")`
//!   succeeds, `parse("1 junk")` does not.
//! - A root number preceded by whitespace no longer starts at offset 0 and is
//!   therefore held to the embedded-terminator rule, so `" 123"` is rejected
//!   while `"123"` parses.
//! - A bare identifier immediately followed by `}` is dropped without error.
//!
//! Recursion depth equals input nesting depth; there is no depth guard, so
//! adversarially nested input can exhaust the stack.

use crate::cursor::{hex_value, is_digit, is_letter, Cursor, END};
use crate::error::{ParseError, Result};
use crate::types::{JsonArray, JsonElement, JsonObject, NodeKind};

/// Parse JSON text into a document tree, surfacing the first grammar
/// violation as a [`ParseError`].
pub fn parse(text: &str) -> Result<JsonElement> {
    let mut cursor = Cursor::new(text);
    parse_value(&mut cursor, None)
}

/// Parse JSON text into a document tree, returning `None` on any grammar
/// violation. Same grammar as [`parse`]; all partial progress is discarded.
pub fn parse_lenient(text: &str) -> Option<JsonElement> {
    let mut cursor = Cursor::new(text);
    parse_value(&mut cursor, None).ok()
}

/// `value := object | array | string | number | "true" | "false" | "null"`
///
/// Every node constructed here is wired to `parent` (its enclosing container)
/// through the back-reference; the document root gets none.
fn parse_value(cursor: &mut Cursor, parent: Option<&JsonElement>) -> Result<JsonElement> {
    let mut c = cursor.current_skipping_space();

    match c {
        END => return Err(ParseError::ExpectedElement),
        '{' => {
            cursor.advance();
            return parse_object(cursor, parent);
        }
        '[' => {
            cursor.advance();
            return parse_array(cursor, parent);
        }
        '"' => {
            cursor.advance();
            let value = parse_string(cursor)?;
            return Ok(JsonElement::from_kind(NodeKind::String(value), parent));
        }
        '-' => {
            c = cursor.advance();
            if is_digit(c) {
                return parse_number(cursor, parent, true);
            }
            // fall through: whatever follows the bare '-' decides the error
        }
        _ => {}
    }

    if is_digit(c) {
        return parse_number(cursor, parent, false);
    }

    if is_letter(c) {
        let mut word = String::new();
        while is_letter(c) {
            word.push(c);
            c = cursor.advance();
        }
        return match word.as_str() {
            "true" => Ok(JsonElement::from_kind(NodeKind::Boolean(true), parent)),
            "false" => Ok(JsonElement::from_kind(NodeKind::Boolean(false), parent)),
            "null" => Ok(JsonElement::from_kind(NodeKind::Null, parent)),
            _ => Err(ParseError::InvalidStructure),
        };
    }

    Err(ParseError::ExpectedElement)
}

/// Parse an object body; the cursor is just past the opening `{`.
fn parse_object(cursor: &mut Cursor, parent: Option<&JsonElement>) -> Result<JsonElement> {
    let object = JsonObject::with_parent(parent);
    let object_element = object.as_element();
    let mut count = 0;

    loop {
        let mut c = cursor.current_skipping_space();

        if c == END {
            return Err(ParseError::InvalidStructure);
        }
        if c == '}' {
            cursor.advance();
            return Ok(object_element);
        }
        if count > 0 {
            if c != ',' {
                return Err(ParseError::InvalidStructure);
            }
            c = cursor.advance_skipping_space();
            if c == END {
                return Err(ParseError::InvalidStructure);
            }
        }

        // Key: quoted string or bare identifier.
        let mut name = None;
        if c == '"' {
            cursor.advance();
            name = Some(parse_string(cursor)?);
        } else if is_letter(c) {
            let mut ident = String::new();
            while is_letter(c) || is_digit(c) {
                ident.push(c);
                c = cursor.advance();
            }
            name = Some(ident);
        }
        // Closing brace straight after a comma (or a bare identifier) ends
        // the object; a pending identifier is dropped.
        if c == '}' {
            continue;
        }
        let name = name.ok_or(ParseError::InvalidStructure)?;

        if cursor.current_skipping_space() != ':' {
            return Err(ParseError::InvalidStructure);
        }
        if cursor.advance_skipping_space() == END {
            return Err(ParseError::InvalidStructure);
        }

        let element = parse_value(cursor, Some(&object_element))
            .map_err(|_| ParseError::ExpectedElement)?;
        object.add(name, &element);
        count += 1;
    }
}

/// Parse an array body; the cursor is just past the opening `[`.
fn parse_array(cursor: &mut Cursor, parent: Option<&JsonElement>) -> Result<JsonElement> {
    let array = JsonArray::with_parent(parent);
    let array_element = array.as_element();
    let mut count = 0;

    loop {
        let mut c = cursor.current_skipping_space();

        if c == ']' {
            cursor.advance();
            return Ok(array_element);
        }
        if c == END {
            return Err(ParseError::ExpectedArray);
        }
        if count > 0 {
            if c != ',' {
                return Err(ParseError::InvalidStructure);
            }
            c = cursor.advance_skipping_space();
            if c == END {
                return Err(ParseError::ExpectedArray);
            }
        }
        // Closing bracket straight after a comma ends the array.
        if c == ']' {
            continue;
        }

        let element =
            parse_value(cursor, Some(&array_element)).map_err(|_| ParseError::ExpectedArray)?;
        array.add(&element);
        count += 1;
    }
}

/// Parse a string body; the cursor is just past the opening quote. On
/// success the cursor is past the closing quote.
fn parse_string(cursor: &mut Cursor) -> Result<String> {
    let mut out = String::new();
    let mut c = cursor.current();
    while c != '"' && c != END {
        if c == '\\' {
            c = cursor.advance();
            match c {
                '"' | '\\' | '/' => out.push(c),
                'b' => out.push('\u{0008}'),
                'f' => out.push('\u{000C}'),
                'n' => out.push('\n'),
                'r' => out.push('\r'),
                't' => out.push('\t'),
                'u' => out.push(parse_unicode_escape(cursor)?),
                _ => return Err(ParseError::ExpectedString),
            }
        } else {
            out.push(c);
        }
        c = cursor.advance();
    }
    if c == END {
        return Err(ParseError::ExpectedString);
    }
    cursor.advance();
    Ok(out)
}

/// Parse the hex run of a `\uXXXX` escape; the cursor is on the `u`.
///
/// A high surrogate must be immediately followed by a `\uXXXX` low surrogate;
/// the pair is combined into one scalar value. Lone surrogates are rejected;
/// they have no `char` representation.
fn parse_unicode_escape(cursor: &mut Cursor) -> Result<char> {
    let unit = parse_hex4(cursor)?;
    if (0xD800..=0xDBFF).contains(&unit) {
        if cursor.advance() != '\\' || cursor.advance() != 'u' {
            return Err(ParseError::ExpectedString);
        }
        let low = parse_hex4(cursor)?;
        if !(0xDC00..=0xDFFF).contains(&low) {
            return Err(ParseError::ExpectedString);
        }
        let code = 0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00);
        return char::from_u32(code).ok_or(ParseError::ExpectedString);
    }
    char::from_u32(unit).ok_or(ParseError::ExpectedString)
}

/// Consume exactly four hex digits (case-insensitive) after the cursor.
fn parse_hex4(cursor: &mut Cursor) -> Result<u32> {
    let mut value = 0;
    for _ in 0..4 {
        let digit = hex_value(cursor.advance()).ok_or(ParseError::ExpectedString)?;
        value = (value << 4) | digit;
    }
    Ok(value)
}

/// Parse a number; the cursor is on the first digit (any `-` sign already
/// consumed, reported through `negative`).
fn parse_number(cursor: &mut Cursor, parent: Option<&JsonElement>, negative: bool) -> Result<JsonElement> {
    // A number starting at the very beginning of the input must be the whole
    // document; anything else must terminate like a container entry.
    let whole_document = cursor.position() == usize::from(negative);

    let mut text = String::new();
    let mut c = cursor.current();
    loop {
        text.push(c);
        c = cursor.advance();
        if !is_digit(c) {
            break;
        }
    }
    if c == '.' {
        text.push(c);
        c = cursor.advance();
        while is_digit(c) {
            text.push(c);
            c = cursor.advance();
        }
    }

    let terminator = cursor.current_skipping_space();
    if whole_document {
        if terminator != END {
            return Err(ParseError::ExpectedNumber);
        }
    } else if terminator != ',' && terminator != '}' && terminator != ']' {
        return Err(ParseError::ExpectedNumber);
    }

    let value: f64 = text.parse().map_err(|_| ParseError::ExpectedNumber)?;
    if !value.is_finite() {
        return Err(ParseError::ExpectedNumber);
    }
    let value = if negative { -value } else { value };
    Ok(JsonElement::from_kind(NodeKind::Number(value), parent))
}
