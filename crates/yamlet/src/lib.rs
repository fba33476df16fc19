#![doc = include_str!("../README.md")]

pub mod error;
pub mod options;
pub mod path;
pub mod value;

pub mod encode;
mod number;
mod render;

#[cfg(feature = "serde")]
pub mod ser;

pub use crate::encode::{ArrayBuilder, Bytes, Encodable, Encoder, ObjectBuilder, Scope};
pub use crate::error::{Error, Result};
pub use crate::number::Decimal;
pub use crate::options::{
    BinaryHook, BinaryStrategy, DateHook, DateStrategy, KeyStrategy, NonFiniteFloatStrategy,
    Options,
};
pub use crate::path::{CodingPath, Segment};
pub use crate::value::Value;

use std::io::Write;

pub fn encode_to_string<T: Encodable + ?Sized>(value: &T, options: &Options) -> Result<String> {
    Encoder::with_options(options.clone()).encode_to_string(value)
}

pub fn encode_to_vec<T: Encodable + ?Sized>(value: &T, options: &Options) -> Result<Vec<u8>> {
    Encoder::with_options(options.clone()).encode(value)
}

pub fn encode_to_writer<W: Write, T: Encodable + ?Sized>(
    mut writer: W,
    value: &T,
    options: &Options,
) -> Result<()> {
    let s = encode_to_string(value, options)?;
    writer.write_all(s.as_bytes())?;
    Ok(())
}
