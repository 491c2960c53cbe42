/// Errors raised while decoding an entity from a Value Tree.
///
/// Decode errors are terminal for the decode call: no partial entity is
/// ever returned. Missing required fields are *not* decode errors —
/// required-ness is checked separately by [`Validate`](crate::Validate).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The input text is not valid JSON, or a node that should be an
    /// object has some other shape.
    #[error("parse error: {message}")]
    Parse { message: String },

    /// A present field's value cannot be coerced to its declared type.
    #[error("type mismatch: '{field}' is not {expected}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
    },
}

impl DecodeError {
    pub(crate) fn type_mismatch(field: &str, expected: &'static str) -> DecodeError {
        DecodeError::TypeMismatch {
            field: field.to_owned(),
            expected,
        }
    }
}

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> DecodeError {
        DecodeError::Parse {
            message: err.to_string(),
        }
    }
}
