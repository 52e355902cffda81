//! JSON encoding and decoding of API objects.
//!
//! The object types implement `serde` traits themselves; these helpers only
//! pin the format to JSON and give decoding failures a single error type.

use std::io;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Errors produced while encoding or decoding JSON
#[derive(Error, Debug)]
pub enum CodecError {
    /// The input is not valid JSON, or does not match the expected type
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading or writing the underlying stream failed
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl CodecError {
    /// True when the failure came from the data rather than the stream.
    pub fn is_data(&self) -> bool {
        match self {
            Self::Json(err) => err.is_data() || err.is_syntax() || err.is_eof(),
            Self::Io(_) => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, CodecError>;

/// Write the JSON representation of `value` to `writer`.
pub fn marshal<T, W>(value: &T, writer: W) -> Result<()>
where
    T: Serialize + ?Sized,
    W: io::Write,
{
    serde_json::to_writer(writer, value).map_err(|err| {
        if err.is_io() {
            CodecError::Io(io::Error::other(err.to_string()))
        } else {
            CodecError::Json(err)
        }
    })
}

/// Read a value from the JSON in `reader`.
pub fn unmarshal<T, R>(reader: R) -> Result<T>
where
    T: DeserializeOwned,
    R: io::Read,
{
    Ok(serde_json::from_reader(reader)?)
}

/// Encode `value` into a JSON byte vector.
pub fn to_vec<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(value)?)
}

/// Encode `value` into a JSON string.
pub fn to_string<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

/// Encode `value` into an indented JSON string.
pub fn to_string_pretty<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Decode a value from JSON bytes.
pub fn from_slice<T: DeserializeOwned>(data: &[u8]) -> Result<T> {
    Ok(serde_json::from_slice(data)?)
}

/// Decode a value from a JSON string.
pub fn from_str<T: DeserializeOwned>(data: &str) -> Result<T> {
    Ok(serde_json::from_str(data)?)
}
