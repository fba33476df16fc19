//! Encoding pipeline: root scope creation, recursive expansion through
//! [`Encodable`], bottom-up finalization, rendering.

mod encodable;
mod scope;
pub(crate) mod tree;

pub use encodable::{Bytes, Encodable};
pub use scope::{ArrayBuilder, ObjectBuilder, Scope};

use std::rc::Rc;

use crate::error::{Error, Result};
use crate::options::Options;
use crate::render;
use crate::value::Value;

/// Top-level driver owning one immutable configuration snapshot.
///
/// Recursion depth is bounded only by the input structure; a cyclic value
/// graph reached through an `Encodable` implementation recurses without
/// limit.
pub struct Encoder {
    options: Options,
}

impl Encoder {
    pub fn new() -> Self {
        Encoder {
            options: Options::default(),
        }
    }

    pub fn with_options(options: Options) -> Self {
        Encoder { options }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Expand `value` into a finalized tree. Fails with
    /// [`Error::NoValuesEncoded`] when the value's encode wrote nothing.
    pub fn encode_to_value<T: Encodable + ?Sized>(&self, value: &T) -> Result<Value> {
        let options = Rc::new(self.options.clone());
        let mut root = Scope::root(options);
        value.encode(&mut root)?;
        tree::finalize_slot(root.into_slot()).ok_or(Error::NoValuesEncoded)
    }

    pub fn encode_to_string<T: Encodable + ?Sized>(&self, value: &T) -> Result<String> {
        let tree = self.encode_to_value(value)?;
        Ok(render::render(&tree, &self.options))
    }

    /// Entry point per the external interface: value in, UTF-8 bytes out.
    pub fn encode<T: Encodable + ?Sized>(&self, value: &T) -> Result<Vec<u8>> {
        Ok(self.encode_to_string(value)?.into_bytes())
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new()
    }
}
