//! The mutable JSON document tree.
//!
//! A [`JsonElement`] is a cheap, cloneable handle (`Rc<RefCell<..>>`) to one
//! node of the tree. Containers own their children through the handle; every
//! node additionally carries a non-owning `Weak` back-reference to its current
//! container, used only by [`JsonElement::parent`] for navigation. The
//! back-reference is never serialized and never consulted for destruction.
//!
//! Object entries live in a `BTreeMap`, so iteration (and therefore rendered
//! key order) is always ascending lexicographic, regardless of insertion
//! order. A repeated key overwrites the previous entry.
//!
//! The tree is plain single-threaded mutable data. Concurrent mutation, or
//! mutation while rendering, from multiple threads is unsupported; callers
//! needing that must provide their own exclusion. Inserting an ancestor into
//! its own descendant is not guarded against and makes traversal undefined.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::render::render;

/// Tagged payload of a single tree node.
pub(crate) enum NodeKind {
    Null,
    Boolean(bool),
    Number(f64),
    String(String),
    Array(Vec<JsonElement>),
    Object(BTreeMap<String, JsonElement>),
}

struct NodeData {
    parent: Weak<RefCell<NodeData>>,
    kind: NodeKind,
}

/// Handle to a node of a JSON document tree.
///
/// Cloning a `JsonElement` clones the handle, not the node: both handles see
/// the same mutations. Equality ([`PartialEq`]) is structural and ignores the
/// parent back-reference.
pub struct JsonElement {
    inner: Rc<RefCell<NodeData>>,
}

impl JsonElement {
    pub(crate) fn from_kind(kind: NodeKind, parent: Option<&JsonElement>) -> JsonElement {
        let parent = match parent {
            Some(p) => Rc::downgrade(&p.inner),
            None => Weak::new(),
        };
        JsonElement {
            inner: Rc::new(RefCell::new(NodeData { parent, kind })),
        }
    }

    /// Create a standalone `null` node.
    pub fn null() -> JsonElement {
        JsonElement::from_kind(NodeKind::Null, None)
    }

    /// Create a standalone boolean node.
    pub fn boolean(value: bool) -> JsonElement {
        JsonElement::from_kind(NodeKind::Boolean(value), None)
    }

    /// Create a standalone number node.
    pub fn number(value: f64) -> JsonElement {
        JsonElement::from_kind(NodeKind::Number(value), None)
    }

    /// Create a standalone string node.
    pub fn string(value: impl Into<String>) -> JsonElement {
        JsonElement::from_kind(NodeKind::String(value.into()), None)
    }

    /// The container this node currently belongs to, if any.
    pub fn parent(&self) -> Option<JsonElement> {
        self.inner
            .borrow()
            .parent
            .upgrade()
            .map(|inner| JsonElement { inner })
    }

    pub(crate) fn set_parent(&self, container: &JsonElement) {
        self.inner.borrow_mut().parent = Rc::downgrade(&container.inner);
    }

    pub(crate) fn with_kind<R>(&self, f: impl FnOnce(&NodeKind) -> R) -> R {
        f(&self.inner.borrow().kind)
    }

    fn with_kind_mut<R>(&self, f: impl FnOnce(&mut NodeKind) -> R) -> R {
        f(&mut self.inner.borrow_mut().kind)
    }

    /// `true` if this node is a string.
    pub fn is_string(&self) -> bool {
        self.with_kind(|k| matches!(k, NodeKind::String(_)))
    }

    /// `true` if this node is a number.
    pub fn is_number(&self) -> bool {
        self.with_kind(|k| matches!(k, NodeKind::Number(_)))
    }

    /// `true` if this node is a number that survives truncation to `i32`.
    pub fn is_integer(&self) -> bool {
        self.with_kind(|k| match k {
            NodeKind::Number(v) => (*v as i32) as f64 == *v,
            _ => false,
        })
    }

    /// `true` if this node is a number that survives truncation to `i64`.
    pub fn is_long_integer(&self) -> bool {
        self.with_kind(|k| match k {
            NodeKind::Number(v) => (*v as i64) as f64 == *v,
            _ => false,
        })
    }

    /// `true` if this node is a boolean.
    pub fn is_boolean(&self) -> bool {
        self.with_kind(|k| matches!(k, NodeKind::Boolean(_)))
    }

    /// `true` if this node is `null`.
    pub fn is_null(&self) -> bool {
        self.with_kind(|k| matches!(k, NodeKind::Null))
    }

    /// The string content of a string node; for every other kind, the node's
    /// compact rendering.
    pub fn string_value(&self) -> String {
        let direct = self.with_kind(|k| match k {
            NodeKind::String(s) => Some(s.clone()),
            _ => None,
        });
        direct.unwrap_or_else(|| render(self))
    }

    /// The value as `i32` if this is a number exactly representable in `i32`,
    /// otherwise `0`.
    pub fn int_value(&self) -> i32 {
        self.with_kind(|k| match k {
            NodeKind::Number(v) => {
                let truncated = *v as i32;
                if truncated as f64 == *v {
                    truncated
                } else {
                    0
                }
            }
            _ => 0,
        })
    }

    /// The value as `i64` if this is a number exactly representable in `i64`,
    /// otherwise `0`.
    pub fn long_value(&self) -> i64 {
        self.with_kind(|k| match k {
            NodeKind::Number(v) => {
                let truncated = *v as i64;
                if truncated as f64 == *v {
                    truncated
                } else {
                    0
                }
            }
            _ => 0,
        })
    }

    /// The value as `f64` for number nodes, otherwise `0.0`.
    pub fn double_value(&self) -> f64 {
        self.with_kind(|k| match k {
            NodeKind::Number(v) => *v,
            _ => 0.0,
        })
    }

    /// The value for boolean nodes, otherwise `false`.
    pub fn bool_value(&self) -> bool {
        self.with_kind(|k| match k {
            NodeKind::Boolean(b) => *b,
            _ => false,
        })
    }

    /// This node as an array handle, if it is an array.
    pub fn as_array(&self) -> Option<JsonArray> {
        self.with_kind(|k| matches!(k, NodeKind::Array(_)))
            .then(|| JsonArray(self.clone()))
    }

    /// This node as an object handle, if it is an object.
    pub fn as_object(&self) -> Option<JsonObject> {
        self.with_kind(|k| matches!(k, NodeKind::Object(_)))
            .then(|| JsonObject(self.clone()))
    }

    /// This node as a container handle, if it is an array or an object.
    pub fn as_container(&self) -> Option<JsonContainer> {
        self.with_kind(|k| matches!(k, NodeKind::Array(_) | NodeKind::Object(_)))
            .then(|| JsonContainer(self.clone()))
    }
}

impl Clone for JsonElement {
    fn clone(&self) -> Self {
        JsonElement {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl PartialEq for JsonElement {
    fn eq(&self, other: &Self) -> bool {
        self.with_kind(|a| other.with_kind(|b| kinds_eq(a, b)))
    }
}

fn kinds_eq(a: &NodeKind, b: &NodeKind) -> bool {
    match (a, b) {
        (NodeKind::Null, NodeKind::Null) => true,
        (NodeKind::Boolean(x), NodeKind::Boolean(y)) => x == y,
        (NodeKind::Number(x), NodeKind::Number(y)) => x == y,
        (NodeKind::String(x), NodeKind::String(y)) => x == y,
        (NodeKind::Array(x), NodeKind::Array(y)) => x == y,
        (NodeKind::Object(x), NodeKind::Object(y)) => x == y,
        _ => false,
    }
}

impl fmt::Display for JsonElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self))
    }
}

impl fmt::Debug for JsonElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JsonElement({})", render(self))
    }
}

/// Handle to an array node. Wraps the same shared node as its
/// [`JsonElement`]; obtained from [`JsonArray::new`], a `create_array`
/// factory, or [`JsonElement::as_array`].
pub struct JsonArray(pub(crate) JsonElement);

impl JsonArray {
    /// Create a standalone empty array.
    pub fn new() -> JsonArray {
        JsonArray::with_parent(None)
    }

    pub(crate) fn with_parent(parent: Option<&JsonElement>) -> JsonArray {
        JsonArray(JsonElement::from_kind(NodeKind::Array(Vec::new()), parent))
    }

    /// The underlying element handle.
    pub fn as_element(&self) -> JsonElement {
        self.0.clone()
    }

    fn with_items<R>(&self, f: impl FnOnce(&mut Vec<JsonElement>) -> R) -> R {
        self.0.with_kind_mut(|k| match k {
            NodeKind::Array(items) => f(items),
            // The wrapper is only ever constructed over an array node.
            _ => unreachable!("JsonArray handle over a non-array node"),
        })
    }

    pub fn size(&self) -> usize {
        self.with_items(|items| items.len())
    }

    pub fn is_empty(&self) -> bool {
        self.with_items(|items| items.is_empty())
    }

    /// The element at `index`, or `None` when out of range.
    pub fn element_at(&self, index: usize) -> Option<JsonElement> {
        self.with_items(|items| items.get(index).cloned())
    }

    /// Snapshot of the element handles in array order.
    pub fn elements(&self) -> Vec<JsonElement> {
        self.with_items(|items| items.clone())
    }

    /// Create a string element and append it.
    pub fn create_string(&self, value: impl Into<String>) -> JsonElement {
        self.insert_new(NodeKind::String(value.into()))
    }

    /// Create a number element and append it.
    pub fn create_number(&self, value: f64) -> JsonElement {
        self.insert_new(NodeKind::Number(value))
    }

    /// Create a boolean element and append it.
    pub fn create_boolean(&self, value: bool) -> JsonElement {
        self.insert_new(NodeKind::Boolean(value))
    }

    /// Create a null element and append it.
    pub fn create_null(&self) -> JsonElement {
        self.insert_new(NodeKind::Null)
    }

    /// Create an empty object element and append it.
    pub fn create_object(&self) -> JsonObject {
        let obj = JsonObject::with_parent(Some(&self.0));
        self.with_items(|items| items.push(obj.as_element()));
        obj
    }

    /// Create an empty array element and append it.
    pub fn create_array(&self) -> JsonArray {
        let arr = JsonArray::with_parent(Some(&self.0));
        self.with_items(|items| items.push(arr.as_element()));
        arr
    }

    /// Append an existing element, making this array its parent.
    pub fn append(&self, element: &JsonElement) {
        element.set_parent(&self.0);
        self.with_items(|items| items.push(element.clone()));
    }

    /// Append an existing element without touching its parent back-reference.
    ///
    /// The element keeps whatever parent it had (possibly none). This is the
    /// contractual counterpart of [`JsonArray::append`], not an oversight.
    pub fn add(&self, element: &JsonElement) {
        self.with_items(|items| items.push(element.clone()));
    }

    fn insert_new(&self, kind: NodeKind) -> JsonElement {
        let element = JsonElement::from_kind(kind, Some(&self.0));
        self.with_items(|items| items.push(element.clone()));
        element
    }
}

impl Default for JsonArray {
    fn default() -> Self {
        JsonArray::new()
    }
}

/// Handle to an object node. Entries iterate in ascending key order; writing
/// an existing key replaces its value.
pub struct JsonObject(pub(crate) JsonElement);

impl JsonObject {
    /// Create a standalone empty object.
    pub fn new() -> JsonObject {
        JsonObject::with_parent(None)
    }

    pub(crate) fn with_parent(parent: Option<&JsonElement>) -> JsonObject {
        JsonObject(JsonElement::from_kind(
            NodeKind::Object(BTreeMap::new()),
            parent,
        ))
    }

    /// The underlying element handle.
    pub fn as_element(&self) -> JsonElement {
        self.0.clone()
    }

    fn with_entries<R>(&self, f: impl FnOnce(&mut BTreeMap<String, JsonElement>) -> R) -> R {
        self.0.with_kind_mut(|k| match k {
            NodeKind::Object(entries) => f(entries),
            // The wrapper is only ever constructed over an object node.
            _ => unreachable!("JsonObject handle over a non-object node"),
        })
    }

    pub fn size(&self) -> usize {
        self.with_entries(|entries| entries.len())
    }

    pub fn is_empty(&self) -> bool {
        self.with_entries(|entries| entries.is_empty())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.with_entries(|entries| entries.contains_key(key))
    }

    /// The value stored under `key`, or `None` when the key is absent.
    pub fn get(&self, key: &str) -> Option<JsonElement> {
        self.with_entries(|entries| entries.get(key).cloned())
    }

    /// Snapshot of the keys in ascending order.
    pub fn keys(&self) -> Vec<String> {
        self.with_entries(|entries| entries.keys().cloned().collect())
    }

    /// Snapshot of the entries in ascending key order.
    pub fn entries(&self) -> Vec<(String, JsonElement)> {
        self.with_entries(|entries| {
            entries
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect()
        })
    }

    /// Create a string element and store it under `key`.
    pub fn create_string(&self, key: impl Into<String>, value: impl Into<String>) -> JsonElement {
        self.insert_new(key.into(), NodeKind::String(value.into()))
    }

    /// Create a number element and store it under `key`.
    pub fn create_number(&self, key: impl Into<String>, value: f64) -> JsonElement {
        self.insert_new(key.into(), NodeKind::Number(value))
    }

    /// Create a boolean element and store it under `key`.
    pub fn create_boolean(&self, key: impl Into<String>, value: bool) -> JsonElement {
        self.insert_new(key.into(), NodeKind::Boolean(value))
    }

    /// Create a null element and store it under `key`.
    pub fn create_null(&self, key: impl Into<String>) -> JsonElement {
        self.insert_new(key.into(), NodeKind::Null)
    }

    /// Create an empty object element and store it under `key`.
    pub fn create_object(&self, key: impl Into<String>) -> JsonObject {
        let obj = JsonObject::with_parent(Some(&self.0));
        self.with_entries(|entries| entries.insert(key.into(), obj.as_element()));
        obj
    }

    /// Create an empty array element and store it under `key`.
    pub fn create_array(&self, key: impl Into<String>) -> JsonArray {
        let arr = JsonArray::with_parent(Some(&self.0));
        self.with_entries(|entries| entries.insert(key.into(), arr.as_element()));
        arr
    }

    /// Store an existing element under `key`, making this object its parent.
    pub fn append(&self, key: impl Into<String>, element: &JsonElement) {
        element.set_parent(&self.0);
        self.with_entries(|entries| entries.insert(key.into(), element.clone()));
    }

    /// Store an existing element under `key` without touching its parent
    /// back-reference (see [`JsonArray::add`]).
    pub fn add(&self, key: impl Into<String>, element: &JsonElement) {
        self.with_entries(|entries| entries.insert(key.into(), element.clone()));
    }

    fn insert_new(&self, key: String, kind: NodeKind) -> JsonElement {
        let element = JsonElement::from_kind(kind, Some(&self.0));
        self.with_entries(|entries| entries.insert(key, element.clone()));
        element
    }
}

impl Default for JsonObject {
    fn default() -> Self {
        JsonObject::new()
    }
}

/// Handle to a container node of either kind, exposing the operations shared
/// by arrays and objects. Used by the indented renderer to special-case
/// non-empty containers.
pub struct JsonContainer(JsonElement);

impl JsonContainer {
    /// The underlying element handle.
    pub fn as_element(&self) -> JsonElement {
        self.0.clone()
    }

    pub fn size(&self) -> usize {
        self.0.with_kind(|k| match k {
            NodeKind::Array(items) => items.len(),
            NodeKind::Object(entries) => entries.len(),
            _ => 0,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }
}
