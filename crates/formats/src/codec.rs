//! The per-entity codec contract.

use serde_json::Value;

use crate::error::DecodeError;
use crate::value;

/// Bidirectional mapping between a typed entity and a Value Tree
/// object node.
///
/// `from_value` leaves a field unset when its key is absent, even when
/// the validator will later deem it required; it fails only when a
/// present value cannot be coerced. `to_value` omits unset optionals
/// entirely rather than writing explicit nulls, and writes keys in
/// field declaration order.
pub trait Codec: Sized {
    fn from_value(tree: &Value) -> Result<Self, DecodeError>;

    fn to_value(&self) -> Value;

    /// Parse JSON text and decode it in one step.
    fn from_json(text: &str) -> Result<Self, DecodeError> {
        let tree = value::parse(text)?;
        Self::from_value(&tree)
    }

    /// Encode and serialize to JSON text in one step.
    fn to_json(&self) -> String {
        value::serialize(&self.to_value())
    }
}

/// Decode every element of an array node through `T`'s codec.
pub(crate) fn decode_list<T: Codec>(items: &[Value]) -> Result<Vec<T>, DecodeError> {
    items.iter().map(T::from_value).collect()
}

/// Encode a slice of entities as an array node, preserving order.
pub(crate) fn encode_list<T: Codec>(items: &[T]) -> Value {
    Value::Array(items.iter().map(T::to_value).collect())
}
