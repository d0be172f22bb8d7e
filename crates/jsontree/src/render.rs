//! Serialization of the document tree back to JSON text.
//!
//! Two depth-first renderers share the escaping and number-formatting rules:
//!
//! - [`render`]: compact, no inserted whitespace, object entries in
//!   ascending key order.
//! - [`render_indented`]: pretty-printed with a fixed 2-space unit. Empty
//!   containers stay inline as `[ ]` / `{ }`; a non-empty container value in
//!   an object moves to its own line after `" :\n"`.
//!
//! Escaping keeps an ASCII-only pass-through window: anything below 0x20 or
//! above 0x7F is emitted as a lowercase `\uXXXX` escape, per UTF-16 code
//! unit, so characters outside the BMP become surrogate-pair escapes. In
//! compact form object keys are emitted raw; the indented form escapes them.
//!
//! Both renderers are byte-exact contracts: fixtures and round-trip tests
//! depend on the precise output shape.

use crate::types::{JsonElement, NodeKind};

/// Render the compact text form.
pub fn render(element: &JsonElement) -> String {
    let mut out = String::new();
    build(element, &mut out);
    out
}

/// Render the pretty-printed text form (2-space indentation).
pub fn render_indented(element: &JsonElement) -> String {
    let mut out = String::new();
    build_indented(element, 0, &mut out);
    out
}

fn build(element: &JsonElement, out: &mut String) {
    element.with_kind(|kind| match kind {
        NodeKind::Null => out.push_str("null"),
        NodeKind::Boolean(value) => out.push_str(if *value { "true" } else { "false" }),
        NodeKind::Number(value) => out.push_str(&format_number(*value)),
        NodeKind::String(value) => build_json_string(value, out),
        NodeKind::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                build(item, out);
            }
            out.push(']');
        }
        NodeKind::Object(entries) => {
            out.push('{');
            for (i, (key, value)) in entries.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push('"');
                out.push_str(key);
                out.push_str("\":");
                build(value, out);
            }
            out.push('}');
        }
    });
}

fn build_indented(element: &JsonElement, indent: usize, out: &mut String) {
    element.with_kind(|kind| match kind {
        NodeKind::Array(items) => {
            if items.is_empty() {
                out.push_str("[ ]");
                return;
            }
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push('\n');
                push_indent(indent + 1, out);
                build_indented(item, indent + 1, out);
            }
            out.push('\n');
            push_indent(indent, out);
            out.push(']');
        }
        NodeKind::Object(entries) => {
            if entries.is_empty() {
                out.push_str("{ }");
                return;
            }
            out.push('{');
            for (i, (key, value)) in entries.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push('\n');
                push_indent(indent + 1, out);
                build_json_string(key, out);
                let non_empty_container = value
                    .as_container()
                    .map(|container| !container.is_empty())
                    .unwrap_or(false);
                if non_empty_container {
                    out.push_str(" :\n");
                    push_indent(indent + 1, out);
                } else {
                    out.push_str(" : ");
                }
                build_indented(value, indent + 1, out);
            }
            out.push('\n');
            push_indent(indent, out);
            out.push('}');
        }
        // Scalars render identically in both modes.
        _ => build(element, out),
    });
}

/// Append a quoted, escaped string literal.
fn build_json_string(value: &str, out: &mut String) {
    out.push('"');
    let mut units = [0u16; 2];
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{0008}' => out.push_str("\\b"),
            '\u{000C}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 || (c as u32) > 0x7F => {
                for unit in c.encode_utf16(&mut units).iter() {
                    out.push_str(&format!("\\u{:04x}", unit));
                }
            }
            c => out.push(c),
        }
    }
    out.push('"');
}

/// Numbers that survive truncation to `i64` render as bare integers;
/// everything else goes through the standard `f64` formatting.
fn format_number(value: f64) -> String {
    if (value as i64) as f64 == value {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

fn push_indent(indent: usize, out: &mut String) {
    for _ in 0..indent {
        out.push_str("  ");
    }
}
