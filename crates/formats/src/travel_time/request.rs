//! The standard travel-time request: one source, many receivers.

use serde_json::{json, Map, Value};

use crate::codec::{self, Codec};
use crate::error::DecodeError;
use crate::travel_time::receiver::TravelTimeReceiver;
use crate::travel_time::source::TravelTimeSource;
use crate::validate::{self, Validate};
use crate::value;

/// The only accepted value of [`TravelTimeRequest::request_type`].
pub const REQUEST_TYPES: [&str; 1] = ["Standard"];

/// A request for travel times from one source to a set of receivers.
/// `response` carries the answered receivers on the return leg.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TravelTimeRequest {
    /// Request discriminator, always "Standard". Wire key `Type`.
    pub request_type: Option<String>,
    /// The source. Wire key `Source`.
    pub source: Option<TravelTimeSource>,
    /// Receivers to compute for. Wire key `Receivers`.
    pub receivers: Option<Vec<TravelTimeReceiver>>,
    /// Earth model, e.g. "AK135". Wire key `EarthModel`.
    pub earth_model: Option<String>,
    /// Phases to restrict the computation to. Wire key `PhaseTypes`.
    pub phase_types: Option<Vec<String>>,
    /// Wire key `ReturnAllPhases`.
    pub return_all_phases: Option<bool>,
    /// Wire key `ReturnBackBranches`.
    pub return_back_branches: Option<bool>,
    /// Wire key `ConvertTectonic`.
    pub convert_tectonic: Option<bool>,
    /// Answered receivers. Wire key `Response`.
    pub response: Option<Vec<TravelTimeReceiver>>,
}

impl Codec for TravelTimeRequest {
    fn from_value(tree: &Value) -> Result<TravelTimeRequest, DecodeError> {
        let obj = value::as_object(tree)?;
        Ok(TravelTimeRequest {
            request_type: value::opt_str(obj, "Type")?,
            source: obj
                .get("Source")
                .map(TravelTimeSource::from_value)
                .transpose()?,
            receivers: value::opt_array(obj, "Receivers")?
                .map(|items| codec::decode_list(items))
                .transpose()?,
            earth_model: value::opt_str(obj, "EarthModel")?,
            phase_types: value::opt_str_array(obj, "PhaseTypes")?,
            return_all_phases: value::opt_bool(obj, "ReturnAllPhases")?,
            return_back_branches: value::opt_bool(obj, "ReturnBackBranches")?,
            convert_tectonic: value::opt_bool(obj, "ConvertTectonic")?,
            response: value::opt_array(obj, "Response")?
                .map(|items| codec::decode_list(items))
                .transpose()?,
        })
    }

    fn to_value(&self) -> Value {
        let mut obj = Map::new();
        if let Some(request_type) = &self.request_type {
            obj.insert("Type".to_owned(), json!(request_type));
        }
        if let Some(source) = &self.source {
            obj.insert("Source".to_owned(), source.to_value());
        }
        if let Some(receivers) = &self.receivers {
            obj.insert("Receivers".to_owned(), codec::encode_list(receivers));
        }
        if let Some(earth_model) = &self.earth_model {
            obj.insert("EarthModel".to_owned(), json!(earth_model));
        }
        if let Some(phase_types) = &self.phase_types {
            obj.insert("PhaseTypes".to_owned(), json!(phase_types));
        }
        if let Some(b) = &self.return_all_phases {
            obj.insert("ReturnAllPhases".to_owned(), json!(b));
        }
        if let Some(b) = &self.return_back_branches {
            obj.insert("ReturnBackBranches".to_owned(), json!(b));
        }
        if let Some(b) = &self.convert_tectonic {
            obj.insert("ConvertTectonic".to_owned(), json!(b));
        }
        if let Some(response) = &self.response {
            obj.insert("Response".to_owned(), codec::encode_list(response));
        }
        Value::Object(obj)
    }
}

impl Validate for TravelTimeRequest {
    fn get_errors(&self) -> Vec<String> {
        let mut errors = Vec::new();
        validate::require_string(&mut errors, "TravelTimeRequest", "Type", &self.request_type);
        validate::check_one_of(
            &mut errors,
            "TravelTimeRequest",
            "Type",
            &self.request_type,
            &REQUEST_TYPES,
        );
        validate::require_entity(&mut errors, "TravelTimeRequest", "Source", &self.source);
        validate::require_list(
            &mut errors,
            "TravelTimeRequest",
            "Receivers",
            &self.receivers,
            false,
        );
        validate::check_list(&mut errors, "TravelTimeRequest", "Response", &self.response);
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_receiver() -> TravelTimeReceiver {
        TravelTimeReceiver {
            id: Some("12345678".to_owned()),
            distance: Some(22.123),
            elevation: Some(1.589),
            latitude: Some(45.59697),
            longitude: Some(-111.62967),
            branches: None,
        }
    }

    fn sample() -> TravelTimeRequest {
        TravelTimeRequest {
            request_type: Some("Standard".to_owned()),
            source: Some(TravelTimeSource {
                latitude: Some(39.749444),
                longitude: Some(-105.220305),
                depth: Some(15.2),
            }),
            receivers: Some(vec![sample_receiver()]),
            earth_model: Some("AK135".to_owned()),
            phase_types: Some(vec!["P".to_owned(), "S".to_owned(), "PDiff".to_owned()]),
            return_all_phases: Some(false),
            return_back_branches: Some(false),
            convert_tectonic: Some(true),
            response: Some(vec![sample_receiver()]),
        }
    }

    #[test]
    fn round_trip() {
        let request = sample();
        assert_eq!(
            TravelTimeRequest::from_value(&request.to_value()).unwrap(),
            request
        );
        assert!(request.is_valid());
    }

    #[test]
    fn only_standard_type_accepted() {
        let request = TravelTimeRequest {
            request_type: Some("Plot".to_owned()),
            ..sample()
        };
        assert_eq!(
            request.get_errors(),
            vec!["Invalid Type in TravelTimeRequest."]
        );
    }

    #[test]
    fn empty_receiver_list_is_valid() {
        let request = TravelTimeRequest {
            receivers: Some(Vec::new()),
            ..sample()
        };
        assert!(request.is_valid());
    }

    #[test]
    fn missing_receiver_list_invalidates() {
        let request = TravelTimeRequest {
            receivers: None,
            ..sample()
        };
        assert_eq!(
            request.get_errors(),
            vec!["No Receivers in TravelTimeRequest."]
        );
    }

    #[test]
    fn invalid_response_receiver_propagates() {
        let mut request = sample();
        request.response.as_mut().unwrap()[0].latitude = Some(91.0);
        assert_eq!(
            request.get_errors(),
            vec![
                "Response[0] in TravelTimeRequest: Latitude in TravelTimeReceiver not in the range of -90 to 90."
            ]
        );
    }

    #[test]
    fn phase_types_must_be_strings() {
        let mut tree = sample().to_value();
        tree["PhaseTypes"] = json!(["P", 5]);
        assert!(matches!(
            TravelTimeRequest::from_value(&tree).unwrap_err(),
            DecodeError::TypeMismatch { .. }
        ));
    }
}
