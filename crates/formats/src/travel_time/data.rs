//! Per-phase travel-time data for one source-receiver pair.

use serde_json::{json, Map, Value};

use crate::codec::Codec;
use crate::error::DecodeError;
use crate::validate::{self, Validate};
use crate::value;

/// One phase's travel time and the derivatives and flags that go with
/// it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TravelTimeData {
    /// Seismic phase code, e.g. "Pg". Wire key `Phase`.
    pub phase: Option<String>,
    /// Travel time in seconds. Wire key `TravelTime`.
    pub travel_time: Option<f64>,
    /// Derivative with respect to distance, seconds per degree. Wire
    /// key `DistanceDerivative`.
    pub distance_derivative: Option<f64>,
    /// Derivative with respect to depth, seconds per kilometer. Wire
    /// key `DepthDerivative`.
    pub depth_derivative: Option<f64>,
    /// Derivative with respect to ray parameter. Wire key `RayDerivative`.
    pub ray_derivative: Option<f64>,
    /// Statistical observability spread in seconds. Wire key
    /// `StatisticalSpread`.
    pub statistical_spread: Option<f64>,
    /// Relative observability. Wire key `Observability`.
    pub observability: Option<f64>,
    /// Teleseismic phase group identifier. Wire key `TeleseismicPhaseGroup`.
    pub teleseismic_phase_group: Option<i64>,
    /// Auxiliary phase group identifier. Wire key `AuxiliaryPhaseGroup`.
    pub auxiliary_phase_group: Option<i64>,
    /// Whether the phase may be used in a location. Wire key
    /// `LocationUseFlag`.
    pub location_use_flag: Option<bool>,
    /// Whether the phase should be down-weighted in association. Wire
    /// key `AssociationWeightFlag`.
    pub association_weight_flag: Option<bool>,
}

impl Codec for TravelTimeData {
    fn from_value(tree: &Value) -> Result<TravelTimeData, DecodeError> {
        let obj = value::as_object(tree)?;
        Ok(TravelTimeData {
            phase: value::opt_str(obj, "Phase")?,
            travel_time: value::opt_f64(obj, "TravelTime")?,
            distance_derivative: value::opt_f64(obj, "DistanceDerivative")?,
            depth_derivative: value::opt_f64(obj, "DepthDerivative")?,
            ray_derivative: value::opt_f64(obj, "RayDerivative")?,
            statistical_spread: value::opt_f64(obj, "StatisticalSpread")?,
            observability: value::opt_f64(obj, "Observability")?,
            teleseismic_phase_group: value::opt_i64(obj, "TeleseismicPhaseGroup")?,
            auxiliary_phase_group: value::opt_i64(obj, "AuxiliaryPhaseGroup")?,
            location_use_flag: value::opt_bool(obj, "LocationUseFlag")?,
            association_weight_flag: value::opt_bool(obj, "AssociationWeightFlag")?,
        })
    }

    fn to_value(&self) -> Value {
        let mut obj = Map::new();
        if let Some(phase) = &self.phase {
            obj.insert("Phase".to_owned(), json!(phase));
        }
        if let Some(travel_time) = &self.travel_time {
            obj.insert("TravelTime".to_owned(), json!(travel_time));
        }
        if let Some(d) = &self.distance_derivative {
            obj.insert("DistanceDerivative".to_owned(), json!(d));
        }
        if let Some(d) = &self.depth_derivative {
            obj.insert("DepthDerivative".to_owned(), json!(d));
        }
        if let Some(d) = &self.ray_derivative {
            obj.insert("RayDerivative".to_owned(), json!(d));
        }
        if let Some(s) = &self.statistical_spread {
            obj.insert("StatisticalSpread".to_owned(), json!(s));
        }
        if let Some(o) = &self.observability {
            obj.insert("Observability".to_owned(), json!(o));
        }
        if let Some(g) = &self.teleseismic_phase_group {
            obj.insert("TeleseismicPhaseGroup".to_owned(), json!(g));
        }
        if let Some(g) = &self.auxiliary_phase_group {
            obj.insert("AuxiliaryPhaseGroup".to_owned(), json!(g));
        }
        if let Some(b) = &self.location_use_flag {
            obj.insert("LocationUseFlag".to_owned(), json!(b));
        }
        if let Some(b) = &self.association_weight_flag {
            obj.insert("AssociationWeightFlag".to_owned(), json!(b));
        }
        Value::Object(obj)
    }
}

impl Validate for TravelTimeData {
    fn get_errors(&self) -> Vec<String> {
        let mut errors = Vec::new();
        validate::require_string(&mut errors, "TravelTimeData", "Phase", &self.phase);
        validate::require(&mut errors, "TravelTimeData", "TravelTime", &self.travel_time);
        validate::require(
            &mut errors,
            "TravelTimeData",
            "DistanceDerivative",
            &self.distance_derivative,
        );
        validate::require(
            &mut errors,
            "TravelTimeData",
            "Observability",
            &self.observability,
        );
        validate::require(
            &mut errors,
            "TravelTimeData",
            "AssociationWeightFlag",
            &self.association_weight_flag,
        );
        errors
    }
}
