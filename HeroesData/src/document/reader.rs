//! Data document loading
//!
//! Reading and JSON parsing happen once, up front; everything after that is
//! in-memory.

use std::fs;
use std::io::Read;
use std::path::Path;

use serde_json::Value;

use super::{DataDocument, Entity};
use crate::error::Result;

impl<T: Entity> DataDocument<T> {
    /// Read a data document from disk.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, is not valid JSON, or its
    /// root is not an object.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Reading {} document {}", T::KIND, path.display());
        let data = fs::read(path)?;
        Self::from_bytes(&data)
    }

    /// Parse a data document from UTF-8 JSON bytes.
    ///
    /// # Errors
    /// Returns an error if the bytes are not valid JSON or the root is not an
    /// object.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(data)?;
        Self::from_value(value)
    }

    /// Parse a data document from a JSON string.
    ///
    /// # Errors
    /// Returns an error if the string is not valid JSON or the root is not an
    /// object.
    pub fn from_json(content: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(content)?;
        Self::from_value(value)
    }

    /// Parse a data document from a reader.
    ///
    /// # Errors
    /// Returns an error if reading fails, the data is not valid JSON, or the
    /// root is not an object.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let value: Value = serde_json::from_reader(reader)?;
        Self::from_value(value)
    }
}
