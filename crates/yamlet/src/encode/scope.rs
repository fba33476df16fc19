//! Per-value encoding scopes and the builder handles they hand out.
//!
//! A [`Scope`] accepts exactly one container request over its lifetime: a
//! single terminal value, an array builder, or an object builder.
//! Re-requesting the established container returns the same builder;
//! requesting a different kind is a contract violation and panics.

use std::rc::Rc;

use crate::encode::Encodable;
use crate::encode::tree::{ArrayHandle, Node, ObjectHandle, Slot};
use crate::error::Result;
use crate::options::Options;
use crate::path::CodingPath;
use crate::value::Value;

/// The encoding scope for one value position (root or nested). Passed as
/// the sink to [`Encodable::encode`].
pub struct Scope {
    options: Rc<Options>,
    path: CodingPath,
    slot: Slot,
}

impl Scope {
    pub(crate) fn new(options: Rc<Options>, path: CodingPath) -> Self {
        Scope {
            options,
            path,
            slot: Slot::Empty,
        }
    }

    pub(crate) fn root(options: Rc<Options>) -> Self {
        Scope::new(options, CodingPath::root())
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// The keys/indices taken from the root to reach this scope.
    pub fn path(&self) -> &CodingPath {
        &self.path
    }

    /// Store this position's result as a single terminal value.
    pub fn put(&mut self, value: Value) {
        match &self.slot {
            Slot::Empty => self.slot = Slot::Single(value),
            Slot::Single(_) => panic!("single value at {} written twice", self.path),
            other => panic!(
                "container kind conflict at {}: scope already holds {}, requested a single value",
                self.path,
                other.kind()
            ),
        }
    }

    /// Claim (or re-request) this position's array builder.
    pub fn array(&mut self) -> ArrayBuilder {
        let handle = match &self.slot {
            Slot::Empty => {
                let handle = ArrayHandle::default();
                self.slot = Slot::Array(handle.clone());
                handle
            }
            Slot::Array(handle) => handle.clone(),
            other => panic!(
                "container kind conflict at {}: scope already holds {}, requested an array container",
                self.path,
                other.kind()
            ),
        };
        ArrayBuilder {
            handle,
            options: self.options.clone(),
            path: self.path.clone(),
        }
    }

    /// Claim (or re-request) this position's object builder.
    pub fn object(&mut self) -> ObjectBuilder {
        let handle = match &self.slot {
            Slot::Empty => {
                let handle = ObjectHandle::default();
                self.slot = Slot::Object(handle.clone());
                handle
            }
            Slot::Object(handle) => handle.clone(),
            other => panic!(
                "container kind conflict at {}: scope already holds {}, requested an object container",
                self.path,
                other.kind()
            ),
        };
        ObjectBuilder {
            handle,
            options: self.options.clone(),
            path: self.path.clone(),
        }
    }

    pub(crate) fn into_slot(self) -> Slot {
        self.slot
    }
}

/// Growable, ordered sequence of deferred nodes. Cloning shares the
/// underlying storage; every clone stays valid and mutable until the owning
/// encode call finalizes.
#[derive(Clone)]
pub struct ArrayBuilder {
    handle: ArrayHandle,
    options: Rc<Options>,
    path: CodingPath,
}

impl ArrayBuilder {
    /// Append a terminal value.
    pub fn push(&mut self, value: impl Into<Value>) {
        self.handle.borrow_mut().push(Node::Value(value.into()));
    }

    /// Append the encoding of `value`, expanded in a fresh sub-scope at
    /// this element's position.
    pub fn encode<T: Encodable + ?Sized>(&mut self, value: &T) -> Result<()> {
        let index = self.handle.borrow().len();
        let mut scope = Scope::new(self.options.clone(), self.path.child_index(index));
        value.encode(&mut scope)?;
        self.handle.borrow_mut().push(Node::Scoped(scope.into_slot()));
        Ok(())
    }

    /// Insert an empty array at the current append position and return its
    /// builder; later writes through the returned builder are reflected
    /// when the tree is finalized, regardless of sibling appends.
    pub fn nested_array(&mut self) -> ArrayBuilder {
        let index = self.handle.borrow().len();
        let child = ArrayHandle::default();
        self.handle.borrow_mut().push(Node::Array(child.clone()));
        ArrayBuilder {
            handle: child,
            options: self.options.clone(),
            path: self.path.child_index(index),
        }
    }

    /// Insert an empty object at the current append position and return its
    /// builder.
    pub fn nested_object(&mut self) -> ObjectBuilder {
        let index = self.handle.borrow().len();
        let child = ObjectHandle::default();
        self.handle.borrow_mut().push(Node::Object(child.clone()));
        ObjectBuilder {
            handle: child,
            options: self.options.clone(),
            path: self.path.child_index(index),
        }
    }
}

/// Key-addressed deferred container. Keys pass through the configured key
/// strategy at the point of use; two raw keys collapsing to one transformed
/// key address the same slot.
#[derive(Clone)]
pub struct ObjectBuilder {
    handle: ObjectHandle,
    options: Rc<Options>,
    path: CodingPath,
}

impl ObjectBuilder {
    fn transformed(&self, key: &str) -> String {
        self.options.key_strategy.apply(key)
    }

    /// Store a terminal value under `key`. Overwrites an earlier terminal
    /// value at the same slot.
    pub fn set(&mut self, key: &str, value: impl Into<Value>) {
        let key = self.transformed(key);
        self.handle
            .borrow_mut()
            .put_value(&self.path, &key, value.into());
    }

    /// Encode `value` in a fresh sub-scope and store the result under
    /// `key`.
    pub fn encode<T: Encodable + ?Sized>(&mut self, key: &str, value: &T) -> Result<()> {
        let key = self.transformed(key);
        let mut scope = Scope::new(self.options.clone(), self.path.child_key(&key));
        value.encode(&mut scope)?;
        self.handle
            .borrow_mut()
            .put_scoped(&self.path, &key, scope.into_slot());
        Ok(())
    }

    /// Claim `key` as a nested array; returns the existing builder when the
    /// key is already established as one.
    pub fn nested_array(&mut self, key: &str) -> ArrayBuilder {
        let key = self.transformed(key);
        let child = self.handle.borrow_mut().claim_array(&self.path, &key);
        ArrayBuilder {
            handle: child,
            options: self.options.clone(),
            path: self.path.child_key(&key),
        }
    }

    /// Claim `key` as a nested object; returns the existing builder when
    /// the key is already established as one.
    pub fn nested_object(&mut self, key: &str) -> ObjectBuilder {
        let key = self.transformed(key);
        let child = self.handle.borrow_mut().claim_object(&self.path, &key);
        ObjectBuilder {
            handle: child,
            options: self.options.clone(),
            path: self.path.child_key(&key),
        }
    }
}
