//! Query output parsing: raw text -> JSON -> shape check -> typed value.

use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Parse query output into `T`, keeping "not JSON" and "valid JSON, wrong
/// shape" as distinct failures.
///
/// The validator runs on the raw `Value` before any deserialization, so a
/// schema mismatch names the entity instead of surfacing as a serde error.
/// Empty input is a parse failure, never a default.
pub fn parse<T, V>(text: &str, validator: V, entity: &'static str) -> Result<T>
where
    T: DeserializeOwned,
    V: Fn(&Value) -> bool,
{
    let value: Value = serde_json::from_str(text).map_err(Error::Parse)?;
    if !validator(&value) {
        return Err(Error::SchemaMismatch { entity });
    }
    // The validator guarantees the shape; a leftover mismatch (e.g. a
    // numeric range the struct cannot hold) still reports as schema skew.
    serde_json::from_value(value).map_err(|_| Error::SchemaMismatch { entity })
}
