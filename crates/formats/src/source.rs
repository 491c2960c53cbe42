//! Attribution of a record to the agency and author that produced it.

use serde_json::{json, Map, Value};

use crate::codec::Codec;
use crate::error::DecodeError;
use crate::validate::{self, Validate};
use crate::value;

/// Accepted values for [`Source::source_type`].
pub const SOURCE_TYPES: [&str; 5] = [
    "Unknown",
    "LocalHuman",
    "LocalAutomatic",
    "ContributedHuman",
    "ContributedAutomatic",
];

/// Identifies who produced a pick or location.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Source {
    /// Agency identifier, e.g. "US". Wire key `AgencyID`.
    pub agency_id: Option<String>,
    /// Author of the data. Wire key `Author`.
    pub author: Option<String>,
    /// Kind of source, one of [`SOURCE_TYPES`]. Wire key `Type`.
    pub source_type: Option<String>,
}

impl Codec for Source {
    fn from_value(tree: &Value) -> Result<Source, DecodeError> {
        let obj = value::as_object(tree)?;
        Ok(Source {
            agency_id: value::opt_str(obj, "AgencyID")?,
            author: value::opt_str(obj, "Author")?,
            source_type: value::opt_str(obj, "Type")?,
        })
    }

    fn to_value(&self) -> Value {
        let mut obj = Map::new();
        if let Some(agency_id) = &self.agency_id {
            obj.insert("AgencyID".to_owned(), json!(agency_id));
        }
        if let Some(author) = &self.author {
            obj.insert("Author".to_owned(), json!(author));
        }
        if let Some(source_type) = &self.source_type {
            obj.insert("Type".to_owned(), json!(source_type));
        }
        Value::Object(obj)
    }
}

impl Validate for Source {
    fn get_errors(&self) -> Vec<String> {
        let mut errors = Vec::new();
        validate::require_string(&mut errors, "Source", "AgencyID", &self.agency_id);
        validate::require_string(&mut errors, "Source", "Author", &self.author);
        validate::require_string(&mut errors, "Source", "Type", &self.source_type);
        validate::check_one_of(&mut errors, "Source", "Type", &self.source_type, &SOURCE_TYPES);
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Source {
        Source {
            agency_id: Some("US".to_owned()),
            author: Some("TestAuthor".to_owned()),
            source_type: Some("Unknown".to_owned()),
        }
    }

    #[test]
    fn reads_documented_literal() {
        let source =
            Source::from_json(r#"{"AgencyID":"US","Author":"TestAuthor","Type":"Unknown"}"#)
                .unwrap();
        assert_eq!(source, sample());
        assert!(source.is_valid());
    }

    #[test]
    fn round_trip() {
        let source = sample();
        assert_eq!(Source::from_value(&source.to_value()).unwrap(), source);
    }

    #[test]
    fn missing_required_fields_are_all_reported() {
        let errors = Source::default().get_errors();
        assert_eq!(
            errors,
            vec![
                "No AgencyID in Source.",
                "No Author in Source.",
                "No Type in Source.",
            ]
        );
    }

    #[test]
    fn rejects_unknown_type_literal() {
        let mut source = sample();
        source.source_type = Some("Telepathy".to_owned());
        assert_eq!(source.get_errors(), vec!["Invalid Type in Source."]);
    }

    #[test]
    fn wrong_scalar_type_is_a_decode_error() {
        let err = Source::from_value(&json!({"AgencyID": 7})).unwrap_err();
        assert_eq!(
            err,
            DecodeError::TypeMismatch {
                field: "AgencyID".to_owned(),
                expected: "a string",
            }
        );
    }
}
