//! # jsontree
//!
//! A mutable in-memory JSON document tree with a relaxed recursive-descent
//! parser and deterministic text rendering.
//!
//! The parser accepts standard JSON plus two deliberate relaxations: bare
//! identifiers as object keys (`{key: 1}`) and trailing commas before a
//! closing bracket. It comes in a strict flavor ([`parse`], typed errors) and
//! a lenient flavor ([`parse_lenient`], `None` on any violation). The tree
//! can be built and mutated programmatically through container factories, and
//! rendered back either compact or pretty-printed; object keys always come
//! out in ascending order, so output is deterministic.
//!
//! ## Quick start
//!
//! ```rust
//! use jsontree::{parse, render, render_indented};
//!
//! let tree = parse(r#"{"b":[1,2],"a":1}"#).unwrap();
//! assert_eq!(render(&tree), r#"{"a":1,"b":[1,2]}"#);
//!
//! // Navigate and mutate, then re-render.
//! let obj = tree.as_object().unwrap();
//! obj.create_string("c", "three");
//! assert_eq!(render(&tree), r#"{"a":1,"b":[1,2],"c":"three"}"#);
//! ```
//!
//! ## Modules
//!
//! - [`types`]: the document model: [`JsonElement`] and the container
//!   handles [`JsonArray`] / [`JsonObject`]
//! - [`parser`]: strict and lenient parsing over one shared grammar
//! - [`render`]: compact and indented text generation
//! - [`error`]: the [`ParseError`] taxonomy

mod cursor;
pub mod error;
pub mod parser;
pub mod render;
pub mod types;

pub use error::ParseError;
pub use parser::{parse, parse_lenient};
pub use render::{render, render_indented};
pub use types::{JsonArray, JsonContainer, JsonElement, JsonObject};
