//! Bridge from `serde::Serialize` into the value model. The produced
//! [`Value`](crate::Value) then goes through the standard encode pipeline,
//! so key transformation and rendering options apply as usual.

mod value_builder;

pub use value_builder::to_value;

use serde::Serialize;

use crate::encode::Encoder;
use crate::error::Result;
use crate::options::Options;

pub fn to_string<T: Serialize + ?Sized>(value: &T, options: &Options) -> Result<String> {
    let tree = value_builder::to_value(value, options)?;
    Encoder::with_options(options.clone()).encode_to_string(&tree)
}

pub fn to_vec<T: Serialize + ?Sized>(value: &T, options: &Options) -> Result<Vec<u8>> {
    Ok(to_string(value, options)?.into_bytes())
}
