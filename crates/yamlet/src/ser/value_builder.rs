use base64::Engine as _;
use base64::engine::general_purpose;
use serde::Serialize;
use serde::ser::{self, Impossible};

use crate::error::{Error, Result};
use crate::number::{format_f32, format_f64};
use crate::options::{BinaryStrategy, NonFiniteFloatStrategy, Options};
use crate::value::Value;

impl ser::Error for Error {
    fn custom<T: core::fmt::Display>(t: T) -> Self {
        Error::Message(t.to_string())
    }
}

/// Serialize any `serde::Serialize` into a [`Value`] tree. Map keys must
/// serialize to scalars; non-finite floats follow the configured
/// substitution policy or fail.
pub fn to_value<T: Serialize + ?Sized>(value: &T, options: &Options) -> Result<Value> {
    value.serialize(ValueSerializer { options })
}

struct ValueSerializer<'a> {
    options: &'a Options,
}

impl<'a> ser::Serializer for ValueSerializer<'a> {
    type Ok = Value;
    type Error = Error;
    type SerializeSeq = SeqSerializer<'a>;
    type SerializeTuple = SeqSerializer<'a>;
    type SerializeTupleStruct = SeqSerializer<'a>;
    type SerializeTupleVariant = VariantSeqSerializer<'a>;
    type SerializeMap = MapSerializer<'a>;
    type SerializeStruct = MapSerializer<'a>;
    type SerializeStructVariant = VariantMapSerializer<'a>;

    fn serialize_bool(self, v: bool) -> Result<Value> {
        Ok(Value::Bool(v))
    }
    fn serialize_i8(self, v: i8) -> Result<Value> {
        Ok(Value::Number(v.to_string()))
    }
    fn serialize_i16(self, v: i16) -> Result<Value> {
        Ok(Value::Number(v.to_string()))
    }
    fn serialize_i32(self, v: i32) -> Result<Value> {
        Ok(Value::Number(v.to_string()))
    }
    fn serialize_i64(self, v: i64) -> Result<Value> {
        Ok(Value::Number(v.to_string()))
    }
    fn serialize_u8(self, v: u8) -> Result<Value> {
        Ok(Value::Number(v.to_string()))
    }
    fn serialize_u16(self, v: u16) -> Result<Value> {
        Ok(Value::Number(v.to_string()))
    }
    fn serialize_u32(self, v: u32) -> Result<Value> {
        Ok(Value::Number(v.to_string()))
    }
    fn serialize_u64(self, v: u64) -> Result<Value> {
        Ok(Value::Number(v.to_string()))
    }

    fn serialize_f32(self, v: f32) -> Result<Value> {
        match format_f32(v) {
            Some(literal) => Ok(Value::Number(literal)),
            None => non_finite(f64::from(v), self.options),
        }
    }

    fn serialize_f64(self, v: f64) -> Result<Value> {
        match format_f64(v) {
            Some(literal) => Ok(Value::Number(literal)),
            None => non_finite(v, self.options),
        }
    }

    fn serialize_char(self, v: char) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value> {
        match &self.options.binary_strategy {
            BinaryStrategy::Base64 => Ok(Value::String(general_purpose::STANDARD.encode(v))),
            // No scope exists during serde traversal, so a custom hook
            // cannot run here; fall back to the structural form.
            BinaryStrategy::Structural | BinaryStrategy::Custom(_) => Ok(Value::Array(
                v.iter().map(|b| Value::Number(b.to_string())).collect(),
            )),
        }
    }

    fn serialize_none(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_some<T: ?Sized + Serialize>(self, value: &T) -> Result<Value> {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Value> {
        Ok(Value::String(variant.to_string()))
    }

    fn serialize_newtype_struct<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<Value> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Value> {
        let inner = value.serialize(ValueSerializer {
            options: self.options,
        })?;
        Ok(Value::Object(vec![(variant.to_string(), inner)]))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<Self::SerializeSeq> {
        Ok(SeqSerializer {
            options: self.options,
            items: Vec::with_capacity(len.unwrap_or(0)),
        })
    }

    fn serialize_tuple(self, len: usize) -> Result<Self::SerializeTuple> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Ok(VariantSeqSerializer {
            variant,
            inner: SeqSerializer {
                options: self.options,
                items: Vec::with_capacity(len),
            },
        })
    }

    fn serialize_map(self, len: Option<usize>) -> Result<Self::SerializeMap> {
        Ok(MapSerializer {
            options: self.options,
            entries: Vec::with_capacity(len.unwrap_or(0)),
            next_key: None,
        })
    }

    fn serialize_struct(self, _name: &'static str, len: usize) -> Result<Self::SerializeStruct> {
        self.serialize_map(Some(len))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Ok(VariantMapSerializer {
            variant,
            inner: MapSerializer {
                options: self.options,
                entries: Vec::with_capacity(len),
                next_key: None,
            },
        })
    }
}

fn non_finite(value: f64, options: &Options) -> Result<Value> {
    match &options.non_finite_floats {
        NonFiniteFloatStrategy::Reject => Err(Error::Message(format!(
            "non-finite float {value} has no numeric literal"
        ))),
        NonFiniteFloatStrategy::Substitute {
            pos_inf,
            neg_inf,
            nan,
        } => Ok(Value::String(if value.is_nan() {
            nan.clone()
        } else if value.is_sign_positive() {
            pos_inf.clone()
        } else {
            neg_inf.clone()
        })),
    }
}

pub struct SeqSerializer<'a> {
    options: &'a Options,
    items: Vec<Value>,
}

impl ser::SerializeSeq for SeqSerializer<'_> {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<()> {
        self.items.push(value.serialize(ValueSerializer {
            options: self.options,
        })?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Array(self.items))
    }
}

impl ser::SerializeTuple for SeqSerializer<'_> {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<()> {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value> {
        ser::SerializeSeq::end(self)
    }
}

impl ser::SerializeTupleStruct for SeqSerializer<'_> {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<()> {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value> {
        ser::SerializeSeq::end(self)
    }
}

pub struct VariantSeqSerializer<'a> {
    variant: &'static str,
    inner: SeqSerializer<'a>,
}

impl ser::SerializeTupleVariant for VariantSeqSerializer<'_> {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<()> {
        ser::SerializeSeq::serialize_element(&mut self.inner, value)
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Object(vec![(
            self.variant.to_string(),
            Value::Array(self.inner.items),
        )]))
    }
}

pub struct MapSerializer<'a> {
    options: &'a Options,
    entries: Vec<(String, Value)>,
    next_key: Option<String>,
}

impl ser::SerializeMap for MapSerializer<'_> {
    type Ok = Value;
    type Error = Error;

    fn serialize_key<T: ?Sized + Serialize>(&mut self, key: &T) -> Result<()> {
        self.next_key = Some(key.serialize(KeySerializer)?);
        Ok(())
    }

    fn serialize_value<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<()> {
        let key = self.next_key.take().unwrap_or_default();
        let value = value.serialize(ValueSerializer {
            options: self.options,
        })?;
        self.entries.push((key, value));
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Object(self.entries))
    }
}

impl ser::SerializeStruct for MapSerializer<'_> {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T: ?Sized + Serialize>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<()> {
        ser::SerializeMap::serialize_key(self, key)?;
        ser::SerializeMap::serialize_value(self, value)
    }

    fn end(self) -> Result<Value> {
        ser::SerializeMap::end(self)
    }
}

pub struct VariantMapSerializer<'a> {
    variant: &'static str,
    inner: MapSerializer<'a>,
}

impl ser::SerializeStructVariant for VariantMapSerializer<'_> {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T: ?Sized + Serialize>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<()> {
        ser::SerializeStruct::serialize_field(&mut self.inner, key, value)
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Object(vec![(
            self.variant.to_string(),
            Value::Object(self.inner.entries),
        )]))
    }
}

/// Map keys must be scalars; anything else is rejected.
struct KeySerializer;

impl ser::Serializer for KeySerializer {
    type Ok = String;
    type Error = Error;
    type SerializeSeq = Impossible<String, Error>;
    type SerializeTuple = Impossible<String, Error>;
    type SerializeTupleStruct = Impossible<String, Error>;
    type SerializeTupleVariant = Impossible<String, Error>;
    type SerializeMap = Impossible<String, Error>;
    type SerializeStruct = Impossible<String, Error>;
    type SerializeStructVariant = Impossible<String, Error>;

    fn serialize_bool(self, v: bool) -> Result<String> {
        Ok(v.to_string())
    }
    fn serialize_i8(self, v: i8) -> Result<String> {
        Ok(v.to_string())
    }
    fn serialize_i16(self, v: i16) -> Result<String> {
        Ok(v.to_string())
    }
    fn serialize_i32(self, v: i32) -> Result<String> {
        Ok(v.to_string())
    }
    fn serialize_i64(self, v: i64) -> Result<String> {
        Ok(v.to_string())
    }
    fn serialize_u8(self, v: u8) -> Result<String> {
        Ok(v.to_string())
    }
    fn serialize_u16(self, v: u16) -> Result<String> {
        Ok(v.to_string())
    }
    fn serialize_u32(self, v: u32) -> Result<String> {
        Ok(v.to_string())
    }
    fn serialize_u64(self, v: u64) -> Result<String> {
        Ok(v.to_string())
    }
    fn serialize_f32(self, _v: f32) -> Result<String> {
        Err(ser::Error::custom("float map keys are not supported"))
    }
    fn serialize_f64(self, _v: f64) -> Result<String> {
        Err(ser::Error::custom("float map keys are not supported"))
    }
    fn serialize_char(self, v: char) -> Result<String> {
        Ok(v.to_string())
    }
    fn serialize_str(self, v: &str) -> Result<String> {
        Ok(v.to_string())
    }
    fn serialize_bytes(self, _v: &[u8]) -> Result<String> {
        Err(ser::Error::custom("byte map keys are not supported"))
    }
    fn serialize_none(self) -> Result<String> {
        Err(ser::Error::custom("null map keys are not supported"))
    }
    fn serialize_some<T: ?Sized + Serialize>(self, _value: &T) -> Result<String> {
        Err(ser::Error::custom("optional map keys are not supported"))
    }
    fn serialize_unit(self) -> Result<String> {
        Err(ser::Error::custom("unit map keys are not supported"))
    }
    fn serialize_unit_struct(self, _name: &'static str) -> Result<String> {
        Err(ser::Error::custom("unit map keys are not supported"))
    }
    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<String> {
        Ok(variant.to_string())
    }
    fn serialize_newtype_struct<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<String> {
        value.serialize(self)
    }
    fn serialize_newtype_variant<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<String> {
        Err(ser::Error::custom("variant map keys are not supported"))
    }
    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        Err(ser::Error::custom("sequence map keys are not supported"))
    }
    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple> {
        Err(ser::Error::custom("tuple map keys are not supported"))
    }
    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        Err(ser::Error::custom("tuple map keys are not supported"))
    }
    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(ser::Error::custom("tuple map keys are not supported"))
    }
    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        Err(ser::Error::custom("map map keys are not supported"))
    }
    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        Err(ser::Error::custom("struct map keys are not supported"))
    }
    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(ser::Error::custom("struct map keys are not supported"))
    }
}
