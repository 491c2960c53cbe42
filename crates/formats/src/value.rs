//! Value Tree access: parsing, serialization, typed field accessors,
//! and the shared date-time wire format.
//!
//! The Value Tree is `serde_json::Value` (built with `preserve_order`,
//! so object keys keep insertion order). Every accessor here follows
//! the same contract: an absent key decodes to `None`, a present key of
//! the wrong type is a [`DecodeError::TypeMismatch`]. Required-ness is
//! deliberately not checked at decode time.

use serde_json::{Map, Value};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime, UtcOffset};

use crate::error::DecodeError;

/// Wire format for all date-time fields: ISO-8601 with millisecond
/// precision and a literal UTC suffix, e.g. `2015-12-28T21:32:24.017Z`.
/// Any other layout is rejected.
const TIME_FORMAT: &[BorrowedFormatItem<'static>] = format_description!(
    "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z"
);

/// Parse JSON text into a Value Tree.
pub fn parse(text: &str) -> Result<Value, DecodeError> {
    Ok(serde_json::from_str(text)?)
}

/// Serialize a Value Tree back to JSON text. Object keys are written
/// in insertion order.
pub fn serialize(tree: &Value) -> String {
    tree.to_string()
}

/// Parse a date-time string in the fixed wire format.
pub fn parse_time(text: &str, field: &str) -> Result<OffsetDateTime, DecodeError> {
    PrimitiveDateTime::parse(text, TIME_FORMAT)
        .map(PrimitiveDateTime::assume_utc)
        .map_err(|_| DecodeError::type_mismatch(field, "a millisecond-precision UTC date-time"))
}

/// Format a date-time in the fixed wire format.
pub fn format_time(value: OffsetDateTime) -> String {
    let utc = value.to_offset(UtcOffset::UTC);
    PrimitiveDateTime::new(utc.date(), utc.time())
        .format(TIME_FORMAT)
        .expect("formatting with a complete fixed description")
}

pub(crate) fn as_object(tree: &Value) -> Result<&Map<String, Value>, DecodeError> {
    tree.as_object().ok_or_else(|| DecodeError::Parse {
        message: "expected a JSON object".to_owned(),
    })
}

pub(crate) fn opt_str(obj: &Map<String, Value>, key: &str) -> Result<Option<String>, DecodeError> {
    match obj.get(key) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(DecodeError::type_mismatch(key, "a string")),
    }
}

pub(crate) fn opt_f64(obj: &Map<String, Value>, key: &str) -> Result<Option<f64>, DecodeError> {
    match obj.get(key) {
        None => Ok(None),
        Some(v) => v
            .as_f64()
            .map(Some)
            .ok_or_else(|| DecodeError::type_mismatch(key, "a number")),
    }
}

/// Integer accessor with narrowing: a numeric value with a fractional
/// part, or one outside the i64 range, is a type mismatch.
pub(crate) fn opt_i64(obj: &Map<String, Value>, key: &str) -> Result<Option<i64>, DecodeError> {
    let v = match obj.get(key) {
        None => return Ok(None),
        Some(v) => v,
    };
    if let Some(i) = v.as_i64() {
        return Ok(Some(i));
    }
    match v.as_f64() {
        // `i64::MAX as f64` rounds up to 2^63, so the upper bound must
        // be exclusive or a saturating cast would let 2^63 through.
        Some(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 => {
            Ok(Some(f as i64))
        }
        _ => Err(DecodeError::type_mismatch(key, "an integer")),
    }
}

pub(crate) fn opt_bool(obj: &Map<String, Value>, key: &str) -> Result<Option<bool>, DecodeError> {
    match obj.get(key) {
        None => Ok(None),
        Some(Value::Bool(b)) => Ok(Some(*b)),
        Some(_) => Err(DecodeError::type_mismatch(key, "a boolean")),
    }
}

pub(crate) fn opt_time(
    obj: &Map<String, Value>,
    key: &str,
) -> Result<Option<OffsetDateTime>, DecodeError> {
    match obj.get(key) {
        None => Ok(None),
        Some(Value::String(s)) => parse_time(s, key).map(Some),
        Some(_) => Err(DecodeError::type_mismatch(key, "a date-time string")),
    }
}

pub(crate) fn opt_str_array(
    obj: &Map<String, Value>,
    key: &str,
) -> Result<Option<Vec<String>>, DecodeError> {
    let arr = match obj.get(key) {
        None => return Ok(None),
        Some(Value::Array(arr)) => arr,
        Some(_) => return Err(DecodeError::type_mismatch(key, "an array of strings")),
    };
    let mut out = Vec::with_capacity(arr.len());
    for item in arr {
        match item {
            Value::String(s) => out.push(s.clone()),
            _ => return Err(DecodeError::type_mismatch(key, "an array of strings")),
        }
    }
    Ok(Some(out))
}

/// Raw array accessor for nested entity lists; the caller decodes each
/// element through its own codec.
pub(crate) fn opt_array<'a>(
    obj: &'a Map<String, Value>,
    key: &str,
) -> Result<Option<&'a Vec<Value>>, DecodeError> {
    match obj.get(key) {
        None => Ok(None),
        Some(Value::Array(arr)) => Ok(Some(arr)),
        Some(_) => Err(DecodeError::type_mismatch(key, "an array")),
    }
}
