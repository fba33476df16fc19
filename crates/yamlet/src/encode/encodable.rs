//! The encode capability and the built-in representations: primitives,
//! collections, and the specially-handled shapes (dates, binary blobs,
//! URLs, exact decimals) whose form is chosen by the configured strategy.

use std::collections::{BTreeMap, HashMap};

use base64::Engine as _;
use base64::engine::general_purpose;
use chrono::{DateTime, SecondsFormat, Utc};

use crate::encode::Scope;
use crate::error::{Error, Result};
use crate::number::{Decimal, finite_literal, format_f32, format_f64};
use crate::options::{BinaryStrategy, DateStrategy, NonFiniteFloatStrategy};
use crate::value::Value;

/// A value that can expand itself into an encoding scope. The scope accepts
/// one container request: a single value, an array builder, or an object
/// builder.
pub trait Encodable {
    fn encode(&self, scope: &mut Scope) -> Result<()>;
}

macro_rules! encode_integers {
    ($($t:ty)*) => {$(
        impl Encodable for $t {
            fn encode(&self, scope: &mut Scope) -> Result<()> {
                scope.put(Value::Number(self.to_string()));
                Ok(())
            }
        }
    )*};
}

encode_integers!(i8 i16 i32 i64 u8 u16 u32 u64);

impl Encodable for f64 {
    fn encode(&self, scope: &mut Scope) -> Result<()> {
        match format_f64(*self) {
            Some(literal) => {
                scope.put(Value::Number(literal));
                Ok(())
            }
            None => put_non_finite(*self, scope),
        }
    }
}

impl Encodable for f32 {
    fn encode(&self, scope: &mut Scope) -> Result<()> {
        match format_f32(*self) {
            Some(literal) => {
                scope.put(Value::Number(literal));
                Ok(())
            }
            None => put_non_finite(f64::from(*self), scope),
        }
    }
}

fn put_non_finite(value: f64, scope: &mut Scope) -> Result<()> {
    let substituted = match &scope.options().non_finite_floats {
        NonFiniteFloatStrategy::Reject => None,
        NonFiniteFloatStrategy::Substitute {
            pos_inf,
            neg_inf,
            nan,
        } => Some(if value.is_nan() {
            nan.clone()
        } else if value.is_sign_positive() {
            pos_inf.clone()
        } else {
            neg_inf.clone()
        }),
    };
    match substituted {
        Some(text) => {
            scope.put(Value::String(text));
            Ok(())
        }
        None => Err(Error::NonFiniteFloat {
            path: scope.path().clone(),
            value,
        }),
    }
}

impl Encodable for bool {
    fn encode(&self, scope: &mut Scope) -> Result<()> {
        scope.put(Value::Bool(*self));
        Ok(())
    }
}

impl Encodable for str {
    fn encode(&self, scope: &mut Scope) -> Result<()> {
        scope.put(Value::String(self.to_string()));
        Ok(())
    }
}

impl Encodable for String {
    fn encode(&self, scope: &mut Scope) -> Result<()> {
        self.as_str().encode(scope)
    }
}

impl Encodable for char {
    fn encode(&self, scope: &mut Scope) -> Result<()> {
        scope.put(Value::String(self.to_string()));
        Ok(())
    }
}

impl<T: Encodable + ?Sized> Encodable for &T {
    fn encode(&self, scope: &mut Scope) -> Result<()> {
        (**self).encode(scope)
    }
}

impl<T: Encodable> Encodable for Option<T> {
    fn encode(&self, scope: &mut Scope) -> Result<()> {
        match self {
            Some(value) => value.encode(scope),
            None => {
                scope.put(Value::Null);
                Ok(())
            }
        }
    }
}

impl<T: Encodable> Encodable for [T] {
    fn encode(&self, scope: &mut Scope) -> Result<()> {
        let mut items = scope.array();
        for item in self {
            items.encode(item)?;
        }
        Ok(())
    }
}

impl<T: Encodable> Encodable for Vec<T> {
    fn encode(&self, scope: &mut Scope) -> Result<()> {
        self.as_slice().encode(scope)
    }
}

impl<V: Encodable> Encodable for BTreeMap<String, V> {
    fn encode(&self, scope: &mut Scope) -> Result<()> {
        let mut object = scope.object();
        for (key, value) in self {
            object.encode(key, value)?;
        }
        Ok(())
    }
}

impl<V: Encodable> Encodable for HashMap<String, V> {
    fn encode(&self, scope: &mut Scope) -> Result<()> {
        let mut object = scope.object();
        for (key, value) in self {
            object.encode(key, value)?;
        }
        Ok(())
    }
}

/// A finalized tree re-enters the pipeline through the builders, so key
/// transformation and entry ordering still apply.
impl Encodable for Value {
    fn encode(&self, scope: &mut Scope) -> Result<()> {
        match self {
            Value::Null => scope.put(Value::Null),
            Value::Bool(b) => scope.put(Value::Bool(*b)),
            Value::Number(literal) => scope.put(Value::Number(literal.clone())),
            Value::String(s) => scope.put(Value::String(s.clone())),
            Value::Array(items) => {
                let mut out = scope.array();
                for item in items {
                    out.encode(item)?;
                }
            }
            Value::Object(entries) => {
                let mut out = scope.object();
                for (key, value) in entries {
                    out.encode(key, value)?;
                }
            }
        }
        Ok(())
    }
}

impl Encodable for DateTime<Utc> {
    fn encode(&self, scope: &mut Scope) -> Result<()> {
        let strategy = scope.options().date_strategy.clone();
        match strategy {
            DateStrategy::Structural => {
                let mut object = scope.object();
                object.set("secs", Value::Number(self.timestamp().to_string()));
                object.set(
                    "nanos",
                    Value::Number(self.timestamp_subsec_nanos().to_string()),
                );
                Ok(())
            }
            DateStrategy::SecondsSince1970 => {
                let nanos = self.timestamp_subsec_nanos();
                let literal = if nanos == 0 {
                    self.timestamp().to_string()
                } else {
                    finite_literal(self.timestamp() as f64 + f64::from(nanos) / 1e9)
                };
                scope.put(Value::Number(literal));
                Ok(())
            }
            DateStrategy::MillisecondsSince1970 => {
                let nanos = self.timestamp_subsec_nanos();
                let literal = if nanos % 1_000_000 == 0 {
                    self.timestamp_millis().to_string()
                } else {
                    finite_literal(self.timestamp() as f64 * 1e3 + f64::from(nanos) / 1e6)
                };
                scope.put(Value::Number(literal));
                Ok(())
            }
            DateStrategy::Rfc3339 => {
                scope.put(Value::String(
                    self.to_rfc3339_opts(SecondsFormat::AutoSi, true),
                ));
                Ok(())
            }
            DateStrategy::Custom(hook) => {
                let hook = hook.as_ref();
                hook(self, scope)
            }
        }
    }
}

/// Borrowed binary blob. A dedicated wrapper rather than `&[u8]` so byte
/// payloads and generic element slices stay distinct types.
#[derive(Debug, Clone, Copy)]
pub struct Bytes<'a>(pub &'a [u8]);

impl Encodable for Bytes<'_> {
    fn encode(&self, scope: &mut Scope) -> Result<()> {
        let strategy = scope.options().binary_strategy.clone();
        match strategy {
            BinaryStrategy::Structural => {
                let mut items = scope.array();
                for byte in self.0 {
                    items.push(Value::Number(byte.to_string()));
                }
                Ok(())
            }
            BinaryStrategy::Base64 => {
                scope.put(Value::String(general_purpose::STANDARD.encode(self.0)));
                Ok(())
            }
            BinaryStrategy::Custom(hook) => {
                let hook = hook.as_ref();
                hook(self.0, scope)
            }
        }
    }
}

impl Encodable for url::Url {
    fn encode(&self, scope: &mut Scope) -> Result<()> {
        scope.put(Value::String(self.as_str().to_string()));
        Ok(())
    }
}

impl Encodable for Decimal {
    fn encode(&self, scope: &mut Scope) -> Result<()> {
        scope.put(Value::Number(self.as_str().to_string()));
        Ok(())
    }
}

#[cfg(feature = "json")]
impl Encodable for serde_json::Value {
    fn encode(&self, scope: &mut Scope) -> Result<()> {
        match self {
            serde_json::Value::Null => scope.put(Value::Null),
            serde_json::Value::Bool(b) => scope.put(Value::Bool(*b)),
            serde_json::Value::Number(n) => scope.put(Value::Number(n.to_string())),
            serde_json::Value::String(s) => scope.put(Value::String(s.clone())),
            serde_json::Value::Array(items) => {
                let mut out = scope.array();
                for item in items {
                    out.encode(item)?;
                }
            }
            serde_json::Value::Object(map) => {
                let mut out = scope.object();
                for (key, value) in map {
                    out.encode(key, value)?;
                }
            }
        }
        Ok(())
    }
}
