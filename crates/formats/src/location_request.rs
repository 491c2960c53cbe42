//! A request to locate an event from a set of picks, and optionally
//! the result computed for it.

use serde_json::{json, Map, Value};
use time::OffsetDateTime;

use crate::codec::{self, Codec};
use crate::error::DecodeError;
use crate::location_result::LocationResult;
use crate::pick::Pick;
use crate::source::Source;
use crate::validate::{self, Validate};
use crate::value;

/// Input to a locator run. `output_data` is filled in when the same
/// message carries the answer back.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LocationRequest {
    /// Request identifier. Wire key `ID`.
    pub id: Option<String>,
    /// Who issued the request. Wire key `Source`.
    pub source: Option<Source>,
    /// Locator to use, e.g. "RayLoc". Wire key `Type`.
    pub locator_type: Option<String>,
    /// Earth model, e.g. "AK135". Wire key `EarthModel`.
    pub earth_model: Option<String>,
    /// Slab model resolution. Wire key `SlabResolution`.
    pub slab_resolution: Option<String>,
    /// Starting latitude in degrees. Wire key `SourceLatitude`.
    pub source_latitude: Option<f64>,
    /// Starting longitude in degrees. Wire key `SourceLongitude`.
    pub source_longitude: Option<f64>,
    /// Starting origin time. Wire key `SourceOriginTime`.
    pub source_origin_time: Option<OffsetDateTime>,
    /// Starting depth in kilometers. Wire key `SourceDepth`.
    pub source_depth: Option<f64>,
    /// Picks to locate with. Wire key `InputData`.
    pub input_data: Option<Vec<Pick>>,
    /// Whether this is a new location. Wire key `IsLocationNew`.
    pub is_location_new: Option<bool>,
    /// Whether the location is held in place. Wire key `IsLocationHeld`.
    pub is_location_held: Option<bool>,
    /// Whether the depth is held. Wire key `IsDepthHeld`.
    pub is_depth_held: Option<bool>,
    /// Whether the Bayesian depth is used. Wire key `IsBayesianDepth`.
    pub is_bayesian_depth: Option<bool>,
    /// Bayesian depth in kilometers. Wire key `BayesianDepth`.
    pub bayesian_depth: Option<f64>,
    /// Bayesian spread in kilometers. Wire key `BayesianSpread`.
    pub bayesian_spread: Option<f64>,
    /// Whether to use singular value decomposition. Wire key `UseSVD`.
    pub use_svd: Option<bool>,
    /// The computed location, on the return leg. Wire key `OutputData`.
    pub output_data: Option<LocationResult>,
}

impl Codec for LocationRequest {
    fn from_value(tree: &Value) -> Result<LocationRequest, DecodeError> {
        let obj = value::as_object(tree)?;
        Ok(LocationRequest {
            id: value::opt_str(obj, "ID")?,
            source: obj.get("Source").map(Source::from_value).transpose()?,
            locator_type: value::opt_str(obj, "Type")?,
            earth_model: value::opt_str(obj, "EarthModel")?,
            slab_resolution: value::opt_str(obj, "SlabResolution")?,
            source_latitude: value::opt_f64(obj, "SourceLatitude")?,
            source_longitude: value::opt_f64(obj, "SourceLongitude")?,
            source_origin_time: value::opt_time(obj, "SourceOriginTime")?,
            source_depth: value::opt_f64(obj, "SourceDepth")?,
            input_data: value::opt_array(obj, "InputData")?
                .map(|items| codec::decode_list(items))
                .transpose()?,
            is_location_new: value::opt_bool(obj, "IsLocationNew")?,
            is_location_held: value::opt_bool(obj, "IsLocationHeld")?,
            is_depth_held: value::opt_bool(obj, "IsDepthHeld")?,
            is_bayesian_depth: value::opt_bool(obj, "IsBayesianDepth")?,
            bayesian_depth: value::opt_f64(obj, "BayesianDepth")?,
            bayesian_spread: value::opt_f64(obj, "BayesianSpread")?,
            use_svd: value::opt_bool(obj, "UseSVD")?,
            output_data: obj
                .get("OutputData")
                .map(LocationResult::from_value)
                .transpose()?,
        })
    }

    fn to_value(&self) -> Value {
        let mut obj = Map::new();
        if let Some(id) = &self.id {
            obj.insert("ID".to_owned(), json!(id));
        }
        if let Some(source) = &self.source {
            obj.insert("Source".to_owned(), source.to_value());
        }
        if let Some(locator_type) = &self.locator_type {
            obj.insert("Type".to_owned(), json!(locator_type));
        }
        if let Some(earth_model) = &self.earth_model {
            obj.insert("EarthModel".to_owned(), json!(earth_model));
        }
        if let Some(slab_resolution) = &self.slab_resolution {
            obj.insert("SlabResolution".to_owned(), json!(slab_resolution));
        }
        if let Some(source_latitude) = &self.source_latitude {
            obj.insert("SourceLatitude".to_owned(), json!(source_latitude));
        }
        if let Some(source_longitude) = &self.source_longitude {
            obj.insert("SourceLongitude".to_owned(), json!(source_longitude));
        }
        if let Some(time) = self.source_origin_time {
            obj.insert("SourceOriginTime".to_owned(), json!(value::format_time(time)));
        }
        if let Some(source_depth) = &self.source_depth {
            obj.insert("SourceDepth".to_owned(), json!(source_depth));
        }
        if let Some(picks) = &self.input_data {
            obj.insert("InputData".to_owned(), codec::encode_list(picks));
        }
        if let Some(b) = &self.is_location_new {
            obj.insert("IsLocationNew".to_owned(), json!(b));
        }
        if let Some(b) = &self.is_location_held {
            obj.insert("IsLocationHeld".to_owned(), json!(b));
        }
        if let Some(b) = &self.is_depth_held {
            obj.insert("IsDepthHeld".to_owned(), json!(b));
        }
        if let Some(b) = &self.is_bayesian_depth {
            obj.insert("IsBayesianDepth".to_owned(), json!(b));
        }
        if let Some(bayesian_depth) = &self.bayesian_depth {
            obj.insert("BayesianDepth".to_owned(), json!(bayesian_depth));
        }
        if let Some(bayesian_spread) = &self.bayesian_spread {
            obj.insert("BayesianSpread".to_owned(), json!(bayesian_spread));
        }
        if let Some(use_svd) = &self.use_svd {
            obj.insert("UseSVD".to_owned(), json!(use_svd));
        }
        if let Some(output_data) = &self.output_data {
            obj.insert("OutputData".to_owned(), output_data.to_value());
        }
        Value::Object(obj)
    }
}

impl Validate for LocationRequest {
    fn get_errors(&self) -> Vec<String> {
        let mut errors = Vec::new();
        validate::check_entity(&mut errors, "LocationRequest", "Source", &self.source);
        validate::require_string(&mut errors, "LocationRequest", "Type", &self.locator_type);
        validate::require(
            &mut errors,
            "LocationRequest",
            "SourceLatitude",
            &self.source_latitude,
        );
        validate::check_range(
            &mut errors,
            "LocationRequest",
            "SourceLatitude",
            &self.source_latitude,
            -90.0,
            90.0,
        );
        validate::require(
            &mut errors,
            "LocationRequest",
            "SourceLongitude",
            &self.source_longitude,
        );
        validate::check_range(
            &mut errors,
            "LocationRequest",
            "SourceLongitude",
            &self.source_longitude,
            -180.0,
            180.0,
        );
        validate::require(
            &mut errors,
            "LocationRequest",
            "SourceOriginTime",
            &self.source_origin_time,
        );
        validate::require(&mut errors, "LocationRequest", "SourceDepth", &self.source_depth);
        validate::check_range(
            &mut errors,
            "LocationRequest",
            "SourceDepth",
            &self.source_depth,
            -100.0,
            1500.0,
        );
        validate::require_list(&mut errors, "LocationRequest", "InputData", &self.input_data, true);
        validate::check_entity(&mut errors, "LocationRequest", "OutputData", &self.output_data);
        errors
    }
}
