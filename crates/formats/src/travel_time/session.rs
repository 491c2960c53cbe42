//! A travel-time session: the source-side state shared by a sequence
//! of requests.

use serde_json::{json, Map, Value};

use crate::codec::Codec;
use crate::error::DecodeError;
use crate::validate::{self, Validate};
use crate::value;

/// Session setup for repeated travel-time lookups against one source
/// depth and phase selection.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TravelTimeSession {
    /// Source depth in kilometers. Wire key `SourceDepth`.
    pub source_depth: Option<f64>,
    /// Earth model, e.g. "AK135". Wire key `EarthModel`.
    pub earth_model: Option<String>,
    /// Phases to restrict lookups to. Wire key `PhaseTypes`.
    pub phase_types: Option<Vec<String>>,
    /// Geographic latitude in degrees. Wire key `SourceLatitude`.
    pub source_latitude: Option<f64>,
    /// Geographic longitude in degrees. Wire key `SourceLongitude`.
    pub source_longitude: Option<f64>,
    /// Wire key `ReturnAllPhases`.
    pub return_all_phases: Option<bool>,
    /// Wire key `ReturnBackBranches`.
    pub return_back_branches: Option<bool>,
    /// Wire key `ConvertTectonic`.
    pub convert_tectonic: Option<bool>,
    /// Whether the session serves plot data. Wire key `IsPlot`.
    pub is_plot: Option<bool>,
}

impl Codec for TravelTimeSession {
    fn from_value(tree: &Value) -> Result<TravelTimeSession, DecodeError> {
        let obj = value::as_object(tree)?;
        Ok(TravelTimeSession {
            source_depth: value::opt_f64(obj, "SourceDepth")?,
            earth_model: value::opt_str(obj, "EarthModel")?,
            phase_types: value::opt_str_array(obj, "PhaseTypes")?,
            source_latitude: value::opt_f64(obj, "SourceLatitude")?,
            source_longitude: value::opt_f64(obj, "SourceLongitude")?,
            return_all_phases: value::opt_bool(obj, "ReturnAllPhases")?,
            return_back_branches: value::opt_bool(obj, "ReturnBackBranches")?,
            convert_tectonic: value::opt_bool(obj, "ConvertTectonic")?,
            is_plot: value::opt_bool(obj, "IsPlot")?,
        })
    }

    fn to_value(&self) -> Value {
        let mut obj = Map::new();
        if let Some(source_depth) = &self.source_depth {
            obj.insert("SourceDepth".to_owned(), json!(source_depth));
        }
        if let Some(earth_model) = &self.earth_model {
            obj.insert("EarthModel".to_owned(), json!(earth_model));
        }
        if let Some(phase_types) = &self.phase_types {
            obj.insert("PhaseTypes".to_owned(), json!(phase_types));
        }
        if let Some(source_latitude) = &self.source_latitude {
            obj.insert("SourceLatitude".to_owned(), json!(source_latitude));
        }
        if let Some(source_longitude) = &self.source_longitude {
            obj.insert("SourceLongitude".to_owned(), json!(source_longitude));
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
        if let Some(is_plot) = &self.is_plot {
            obj.insert("IsPlot".to_owned(), json!(is_plot));
        }
        Value::Object(obj)
    }
}

impl Validate for TravelTimeSession {
    fn get_errors(&self) -> Vec<String> {
        let mut errors = Vec::new();
        validate::require(&mut errors, "TravelTimeSession", "SourceDepth", &self.source_depth);
        validate::check_range(
            &mut errors,
            "TravelTimeSession",
            "SourceDepth",
            &self.source_depth,
            -100.0,
            1500.0,
        );
        validate::require(&mut errors, "TravelTimeSession", "PhaseTypes", &self.phase_types);
        validate::check_range(
            &mut errors,
            "TravelTimeSession",
            "SourceLatitude",
            &self.source_latitude,
            -90.0,
            90.0,
        );
        validate::check_range(
            &mut errors,
            "TravelTimeSession",
            "SourceLongitude",
            &self.source_longitude,
            -180.0,
            180.0,
        );
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TravelTimeSession {
        TravelTimeSession {
            source_depth: Some(15.2),
            earth_model: Some("AK135".to_owned()),
            phase_types: Some(vec!["P".to_owned(), "S".to_owned(), "PDiff".to_owned()]),
            source_latitude: Some(39.749444),
            source_longitude: Some(-105.220305),
            return_all_phases: Some(false),
            return_back_branches: Some(false),
            convert_tectonic: Some(true),
            is_plot: Some(false),
        }
    }

    #[test]
    fn round_trip() {
        let session = sample();
        assert_eq!(
            TravelTimeSession::from_value(&session.to_value()).unwrap(),
            session
        );
        assert!(session.is_valid());
    }

    #[test]
    fn source_position_is_optional() {
        let session = TravelTimeSession {
            source_latitude: None,
            source_longitude: None,
            ..sample()
        };
        assert!(session.is_valid());
    }

    #[test]
    fn source_position_ranges_enforced_when_present() {
        let session = TravelTimeSession {
            source_latitude: Some(-220.0),
            ..sample()
        };
        assert_eq!(
            session.get_errors(),
            vec!["SourceLatitude in TravelTimeSession not in the range of -90 to 90."]
        );
    }

    #[test]
    fn depth_and_phases_required() {
        let session = TravelTimeSession {
            source_depth: None,
            phase_types: None,
            ..sample()
        };
        assert_eq!(
            session.get_errors(),
            vec![
                "No SourceDepth in TravelTimeSession.",
                "No PhaseTypes in TravelTimeSession.",
            ]
        );
    }
}
