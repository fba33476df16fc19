use std::io;

use thiserror::Error;

use crate::path::CodingPath;

/// Data-level encode failures. Contract violations (claiming two container
/// kinds for one slot, writing a single value twice) are programming errors
/// and panic instead of surfacing here.
#[derive(Debug, Error)]
pub enum Error {
    #[error("non-finite float {value} at {path} has no numeric literal")]
    NonFiniteFloat { path: CodingPath, value: f64 },

    #[error("top-level value did not encode any values")]
    NoValuesEncoded,

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{0}")]
    Message(String),
}

pub type Result<T> = core::result::Result<T, Error>;
