//! Deferred value tree: mutable builder storage shared through handles
//! until the whole tree is finalized bottom-up into an immutable [`Value`].

use std::cell::RefCell;
use std::mem;
use std::rc::Rc;

use crate::path::CodingPath;
use crate::value::Value;

pub(crate) type ArrayHandle = Rc<RefCell<ArraySlots>>;
pub(crate) type ObjectHandle = Rc<RefCell<ObjectSlots>>;

/// What one encoding scope accumulated: nothing yet, a single terminal
/// value, or exactly one container. At most one of these ever holds.
pub(crate) enum Slot {
    Empty,
    Single(Value),
    Array(ArrayHandle),
    Object(ObjectHandle),
}

impl Slot {
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Slot::Empty => "nothing",
            Slot::Single(_) => "a single value",
            Slot::Array(_) => "an array container",
            Slot::Object(_) => "an object container",
        }
    }
}

/// A not-yet-finalized child of a builder.
pub(crate) enum Node {
    /// Terminal value stored directly.
    Value(Value),
    /// Result of a completed sub-scope; its containers may still be
    /// reachable through handles until finalization.
    Scoped(Slot),
    /// Nested array builder handed out for incremental population.
    Array(ArrayHandle),
    /// Nested object builder handed out for incremental population.
    Object(ObjectHandle),
}

impl Node {
    fn kind(&self) -> &'static str {
        match self {
            Node::Value(_) => "a terminal value",
            Node::Scoped(_) => "an encoded value",
            Node::Array(_) => "a nested array",
            Node::Object(_) => "a nested object",
        }
    }
}

#[derive(Default)]
pub(crate) struct ArraySlots {
    items: Vec<Node>,
}

impl ArraySlots {
    pub(crate) fn push(&mut self, node: Node) {
        self.items.push(node);
    }

    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }
}

/// Insertion-ordered key/node storage with per-key claim rules: re-claiming
/// a key with the same kind overwrites (terminal, scoped) or returns the
/// existing builder (array, object); claiming it with a different kind is a
/// contract violation and panics.
#[derive(Default)]
pub(crate) struct ObjectSlots {
    entries: Vec<(String, Node)>,
}

impl ObjectSlots {
    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }

    pub(crate) fn put_value(&mut self, path: &CodingPath, key: &str, value: Value) {
        match self.position(key) {
            None => self.entries.push((key.to_string(), Node::Value(value))),
            Some(i) => match &self.entries[i].1 {
                Node::Value(_) => self.entries[i].1 = Node::Value(value),
                other => conflict(path, key, other.kind(), "a terminal value"),
            },
        }
    }

    pub(crate) fn put_scoped(&mut self, path: &CodingPath, key: &str, slot: Slot) {
        match self.position(key) {
            None => self.entries.push((key.to_string(), Node::Scoped(slot))),
            Some(i) => match &self.entries[i].1 {
                Node::Scoped(_) => self.entries[i].1 = Node::Scoped(slot),
                other => conflict(path, key, other.kind(), "an encoded value"),
            },
        }
    }

    pub(crate) fn claim_array(&mut self, path: &CodingPath, key: &str) -> ArrayHandle {
        match self.position(key) {
            None => {
                let handle = ArrayHandle::default();
                self.entries.push((key.to_string(), Node::Array(handle.clone())));
                handle
            }
            Some(i) => match &self.entries[i].1 {
                Node::Array(handle) => handle.clone(),
                other => conflict(path, key, other.kind(), "a nested array"),
            },
        }
    }

    pub(crate) fn claim_object(&mut self, path: &CodingPath, key: &str) -> ObjectHandle {
        match self.position(key) {
            None => {
                let handle = ObjectHandle::default();
                self.entries.push((key.to_string(), Node::Object(handle.clone())));
                handle
            }
            Some(i) => match &self.entries[i].1 {
                Node::Object(handle) => handle.clone(),
                other => conflict(path, key, other.kind(), "a nested object"),
            },
        }
    }
}

fn conflict(path: &CodingPath, key: &str, held: &'static str, requested: &'static str) -> ! {
    panic!(
        "container kind conflict at {path}: key {key:?} already holds {held}, requested {requested}"
    );
}

/// Resolve a completed scope slot. `None` means the scope was never written
/// to; the caller maps that to an empty object (nested position) or an
/// error (root).
pub(crate) fn finalize_slot(slot: Slot) -> Option<Value> {
    match slot {
        Slot::Empty => None,
        Slot::Single(v) => Some(v),
        Slot::Array(handle) => Some(finalize_array(&handle)),
        Slot::Object(handle) => Some(finalize_object(&handle)),
    }
}

fn finalize_node(node: Node) -> Value {
    match node {
        Node::Value(v) => v,
        Node::Scoped(slot) => finalize_slot(slot).unwrap_or(Value::Object(Vec::new())),
        Node::Array(handle) => finalize_array(&handle),
        Node::Object(handle) => finalize_object(&handle),
    }
}

fn finalize_array(handle: &ArrayHandle) -> Value {
    let items = mem::take(&mut handle.borrow_mut().items);
    Value::Array(items.into_iter().map(finalize_node).collect())
}

fn finalize_object(handle: &ObjectHandle) -> Value {
    let entries = mem::take(&mut handle.borrow_mut().entries);
    Value::Object(
        entries
            .into_iter()
            .map(|(k, node)| (k, finalize_node(node)))
            .collect(),
    )
}
