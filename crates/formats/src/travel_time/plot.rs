//! Travel-time plot data: distance/time sample points grouped into
//! per-phase branches, and the request envelope that asks for them.

use serde_json::{json, Map, Value};

use crate::codec::{self, Codec};
use crate::error::DecodeError;
use crate::travel_time::source::TravelTimeSource;
use crate::validate::{self, Validate};
use crate::value;

/// One distance/time point on a plot branch.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TravelTimePlotDataSample {
    /// Source-receiver distance in degrees. Wire key `Distance`.
    pub distance: Option<f64>,
    /// Travel time in seconds. Wire key `TravelTime`.
    pub travel_time: Option<f64>,
    /// Statistical observability spread in seconds. Wire key
    /// `StatisticalSpread`.
    pub statistical_spread: Option<f64>,
    /// Relative observability. Wire key `Observability`.
    pub observability: Option<f64>,
    /// Ray parameter in seconds per degree. Wire key `RayParameter`.
    pub ray_parameter: Option<f64>,
}

impl Codec for TravelTimePlotDataSample {
    fn from_value(tree: &Value) -> Result<TravelTimePlotDataSample, DecodeError> {
        let obj = value::as_object(tree)?;
        Ok(TravelTimePlotDataSample {
            distance: value::opt_f64(obj, "Distance")?,
            travel_time: value::opt_f64(obj, "TravelTime")?,
            statistical_spread: value::opt_f64(obj, "StatisticalSpread")?,
            observability: value::opt_f64(obj, "Observability")?,
            ray_parameter: value::opt_f64(obj, "RayParameter")?,
        })
    }

    fn to_value(&self) -> Value {
        let mut obj = Map::new();
        if let Some(distance) = &self.distance {
            obj.insert("Distance".to_owned(), json!(distance));
        }
        if let Some(travel_time) = &self.travel_time {
            obj.insert("TravelTime".to_owned(), json!(travel_time));
        }
        if let Some(s) = &self.statistical_spread {
            obj.insert("StatisticalSpread".to_owned(), json!(s));
        }
        if let Some(o) = &self.observability {
            obj.insert("Observability".to_owned(), json!(o));
        }
        if let Some(r) = &self.ray_parameter {
            obj.insert("RayParameter".to_owned(), json!(r));
        }
        Value::Object(obj)
    }
}

impl Validate for TravelTimePlotDataSample {
    fn get_errors(&self) -> Vec<String> {
        let mut errors = Vec::new();
        validate::require(
            &mut errors,
            "TravelTimePlotDataSample",
            "Distance",
            &self.distance,
        );
        validate::require(
            &mut errors,
            "TravelTimePlotDataSample",
            "Observability",
            &self.observability,
        );
        errors
    }
}

/// All samples of one phase. An empty sample list is allowed; the
/// branch then carries only the phase name.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TravelTimePlotDataBranch {
    /// Seismic phase code. Wire key `Phase`.
    pub phase: Option<String>,
    /// The branch's sample points. Wire key `Samples`.
    pub samples: Option<Vec<TravelTimePlotDataSample>>,
}

impl Codec for TravelTimePlotDataBranch {
    fn from_value(tree: &Value) -> Result<TravelTimePlotDataBranch, DecodeError> {
        let obj = value::as_object(tree)?;
        Ok(TravelTimePlotDataBranch {
            phase: value::opt_str(obj, "Phase")?,
            samples: value::opt_array(obj, "Samples")?
                .map(|items| codec::decode_list(items))
                .transpose()?,
        })
    }

    fn to_value(&self) -> Value {
        let mut obj = Map::new();
        if let Some(phase) = &self.phase {
            obj.insert("Phase".to_owned(), json!(phase));
        }
        if let Some(samples) = &self.samples {
            obj.insert("Samples".to_owned(), codec::encode_list(samples));
        }
        Value::Object(obj)
    }
}

impl Validate for TravelTimePlotDataBranch {
    fn get_errors(&self) -> Vec<String> {
        let mut errors = Vec::new();
        validate::require_string(&mut errors, "TravelTimePlotDataBranch", "Phase", &self.phase);
        validate::require_list(
            &mut errors,
            "TravelTimePlotDataBranch",
            "Samples",
            &self.samples,
            false,
        );
        errors
    }
}

/// A full plot: every branch plus the maximum travel time, which sets
/// the vertical extent of the plot.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TravelTimePlotData {
    /// Largest travel time across all branches, seconds. Wire key
    /// `MaximumTravelTime`.
    pub maximum_travel_time: Option<f64>,
    /// Per-phase branches. Wire key `Branches`.
    pub branches: Option<Vec<TravelTimePlotDataBranch>>,
}

impl Codec for TravelTimePlotData {
    fn from_value(tree: &Value) -> Result<TravelTimePlotData, DecodeError> {
        let obj = value::as_object(tree)?;
        Ok(TravelTimePlotData {
            maximum_travel_time: value::opt_f64(obj, "MaximumTravelTime")?,
            branches: value::opt_array(obj, "Branches")?
                .map(|items| codec::decode_list(items))
                .transpose()?,
        })
    }

    fn to_value(&self) -> Value {
        let mut obj = Map::new();
        if let Some(m) = &self.maximum_travel_time {
            obj.insert("MaximumTravelTime".to_owned(), json!(m));
        }
        if let Some(branches) = &self.branches {
            obj.insert("Branches".to_owned(), codec::encode_list(branches));
        }
        Value::Object(obj)
    }
}

impl Validate for TravelTimePlotData {
    fn get_errors(&self) -> Vec<String> {
        let mut errors = Vec::new();
        validate::require(
            &mut errors,
            "TravelTimePlotData",
            "MaximumTravelTime",
            &self.maximum_travel_time,
        );
        validate::require_list(
            &mut errors,
            "TravelTimePlotData",
            "Branches",
            &self.branches,
            false,
        );
        errors
    }
}

/// A request for plot data over all distances from one source.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TravelTimePlotRequest {
    /// The source to plot from. Wire key `Source`.
    pub source: Option<TravelTimeSource>,
    /// Earth model, e.g. "AK135". Wire key `EarthModel`.
    pub earth_model: Option<String>,
    /// Phases to restrict the plot to. Wire key `PhaseTypes`.
    pub phase_types: Option<Vec<String>>,
    /// Wire key `ReturnAllPhases`.
    pub return_all_phases: Option<bool>,
    /// Wire key `ReturnBackBranches`.
    pub return_back_branches: Option<bool>,
    /// Wire key `ConvertTectonic`.
    pub convert_tectonic: Option<bool>,
    /// The computed branches, on the return leg. Wire key `Response`.
    pub response: Option<Vec<TravelTimePlotDataBranch>>,
}

impl Codec for TravelTimePlotRequest {
    fn from_value(tree: &Value) -> Result<TravelTimePlotRequest, DecodeError> {
        let obj = value::as_object(tree)?;
        Ok(TravelTimePlotRequest {
            source: obj
                .get("Source")
                .map(TravelTimeSource::from_value)
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
        if let Some(source) = &self.source {
            obj.insert("Source".to_owned(), source.to_value());
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

impl Validate for TravelTimePlotRequest {
    fn get_errors(&self) -> Vec<String> {
        let mut errors = Vec::new();
        validate::require_entity(&mut errors, "TravelTimePlotRequest", "Source", &self.source);
        validate::check_list(&mut errors, "TravelTimePlotRequest", "Response", &self.response);
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_point(distance: f64, time: f64) -> TravelTimePlotDataSample {
        TravelTimePlotDataSample {
            distance: Some(distance),
            travel_time: Some(time),
            statistical_spread: Some(1.5),
            observability: Some(0.34),
            ray_parameter: Some(400.0),
        }
    }

    fn sample_branch() -> TravelTimePlotDataBranch {
        TravelTimePlotDataBranch {
            phase: Some("Pg".to_owned()),
            samples: Some(vec![sample_point(1.2, 22.456), sample_point(10.5, 72.654)]),
        }
    }

    #[test]
    fn sample_round_trip() {
        let point = sample_point(1.2, 22.456);
        assert_eq!(
            TravelTimePlotDataSample::from_value(&point.to_value()).unwrap(),
            point
        );
        assert!(point.is_valid());
    }

    #[test]
    fn sample_requires_distance_and_observability() {
        let point = TravelTimePlotDataSample::default();
        assert_eq!(
            point.get_errors(),
            vec![
                "No Distance in TravelTimePlotDataSample.",
                "No Observability in TravelTimePlotDataSample.",
            ]
        );
    }

    #[test]
    fn branch_round_trip() {
        let branch = sample_branch();
        assert_eq!(
            TravelTimePlotDataBranch::from_value(&branch.to_value()).unwrap(),
            branch
        );
        assert!(branch.is_valid());
    }

    #[test]
    fn branch_allows_empty_sample_list() {
        let branch = TravelTimePlotDataBranch {
            samples: Some(Vec::new()),
            ..sample_branch()
        };
        assert!(branch.is_valid());
    }

    #[test]
    fn branch_requires_sample_list_presence() {
        let branch = TravelTimePlotDataBranch {
            samples: None,
            ..sample_branch()
        };
        assert_eq!(
            branch.get_errors(),
            vec!["No Samples in TravelTimePlotDataBranch."]
        );
    }

    #[test]
    fn invalid_sample_propagates_with_index() {
        let mut branch = sample_branch();
        branch.samples.as_mut().unwrap()[1].distance = None;
        assert_eq!(
            branch.get_errors(),
            vec![
                "Samples[1] in TravelTimePlotDataBranch: No Distance in TravelTimePlotDataSample."
            ]
        );
    }

    #[test]
    fn plot_data_round_trip() {
        let plot = TravelTimePlotData {
            maximum_travel_time: Some(72.654),
            branches: Some(vec![sample_branch()]),
        };
        assert_eq!(
            TravelTimePlotData::from_value(&plot.to_value()).unwrap(),
            plot
        );
        assert!(plot.is_valid());
    }

    #[test]
    fn plot_request_requires_source() {
        let request = TravelTimePlotRequest {
            source: None,
            earth_model: Some("AK135".to_owned()),
            ..TravelTimePlotRequest::default()
        };
        assert_eq!(
            request.get_errors(),
            vec!["No Source in TravelTimePlotRequest."]
        );
    }

    #[test]
    fn plot_request_response_validates_when_present() {
        let request = TravelTimePlotRequest {
            source: Some(TravelTimeSource {
                latitude: Some(39.749444),
                longitude: Some(-105.220305),
                depth: Some(15.2),
            }),
            response: Some(vec![TravelTimePlotDataBranch {
                phase: Some(String::new()),
                samples: Some(Vec::new()),
            }]),
            ..TravelTimePlotRequest::default()
        };
        assert_eq!(
            request.get_errors(),
            vec!["Response[0] in TravelTimePlotRequest: Empty Phase in TravelTimePlotDataBranch."]
        );
    }
}
