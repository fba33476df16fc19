use std::rc::Rc;

use chrono::{DateTime, Utc};

use crate::Result;
use crate::encode::Scope;

/// Hook invoked for dates under [`DateStrategy::Custom`]. Receives the date
/// and a fresh scope; writing nothing yields an empty object at that
/// position.
pub type DateHook = Rc<dyn Fn(&DateTime<Utc>, &mut Scope) -> Result<()>>;

/// Hook invoked for binary blobs under [`BinaryStrategy::Custom`].
pub type BinaryHook = Rc<dyn Fn(&[u8], &mut Scope) -> Result<()>>;

/// How date/time values are represented.
#[derive(Clone, Default)]
pub enum DateStrategy {
    /// Expand the date into its structural form: `{secs, nanos}` since the
    /// Unix epoch.
    #[default]
    Structural,
    SecondsSince1970,
    MillisecondsSince1970,
    /// RFC 3339 calendar string.
    Rfc3339,
    Custom(DateHook),
}

impl core::fmt::Debug for DateStrategy {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DateStrategy::Structural => f.write_str("Structural"),
            DateStrategy::SecondsSince1970 => f.write_str("SecondsSince1970"),
            DateStrategy::MillisecondsSince1970 => f.write_str("MillisecondsSince1970"),
            DateStrategy::Rfc3339 => f.write_str("Rfc3339"),
            DateStrategy::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// How binary blobs are represented.
#[derive(Clone, Default)]
pub enum BinaryStrategy {
    /// Expand into an array of byte values.
    Structural,
    /// Standard base64 text with padding.
    #[default]
    Base64,
    Custom(BinaryHook),
}

impl core::fmt::Debug for BinaryStrategy {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BinaryStrategy::Structural => f.write_str("Structural"),
            BinaryStrategy::Base64 => f.write_str("Base64"),
            BinaryStrategy::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Policy for floats with no numeric literal (NaN, ±infinity).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum NonFiniteFloatStrategy {
    /// Fail the encode with an error naming the coding path.
    #[default]
    Reject,
    /// Emit the configured literal as a string value, verbatim.
    Substitute {
        pos_inf: String,
        neg_inf: String,
        nan: String,
    },
}

/// Transformation applied to object keys at the point of use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyStrategy {
    #[default]
    Identity,
    /// Uppercase the first character, leave the rest unchanged.
    UppercaseFirst,
}

impl KeyStrategy {
    pub(crate) fn apply(&self, key: &str) -> String {
        match self {
            KeyStrategy::Identity => key.to_string(),
            KeyStrategy::UppercaseFirst => {
                let mut chars = key.chars();
                match chars.next() {
                    Some(first) => {
                        let mut out = String::with_capacity(key.len());
                        out.extend(first.to_uppercase());
                        out.push_str(chars.as_str());
                        out
                    }
                    None => String::new(),
                }
            }
        }
    }
}

/// Immutable configuration snapshot for one encode call.
#[derive(Debug, Clone)]
pub struct Options {
    /// Render object entries in lexicographic key order.
    pub sorted_keys: bool,
    /// Escape `/` as `\/` in string scalars (default: off).
    pub escape_slashes: bool,
    /// Spaces per indentation level (default: 3).
    pub indent: usize,
    pub date_strategy: DateStrategy,
    pub binary_strategy: BinaryStrategy,
    pub non_finite_floats: NonFiniteFloatStrategy,
    pub key_strategy: KeyStrategy,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            sorted_keys: false,
            escape_slashes: false,
            indent: 3,
            date_strategy: DateStrategy::default(),
            binary_strategy: BinaryStrategy::default(),
            non_finite_floats: NonFiniteFloatStrategy::default(),
            key_strategy: KeyStrategy::default(),
        }
    }
}
