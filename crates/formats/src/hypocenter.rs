//! Earthquake hypocenter: position, origin time, and their errors.

use serde_json::{json, Map, Value};
use time::OffsetDateTime;

use crate::codec::Codec;
use crate::error::DecodeError;
use crate::validate::{self, Validate};
use crate::value;

/// A located origin. The four error fields are output-side and
/// optional; position and time are required.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Hypocenter {
    /// Geographic latitude in degrees. Wire key `Latitude`.
    pub latitude: Option<f64>,
    /// Geographic longitude in degrees. Wire key `Longitude`.
    pub longitude: Option<f64>,
    /// Origin time. Wire key `Time`.
    pub time: Option<OffsetDateTime>,
    /// Depth relative to the WGS84 datum in kilometers. Wire key `Depth`.
    pub depth: Option<f64>,
    /// Latitude error in kilometers. Wire key `LatitudeError`.
    pub latitude_error: Option<f64>,
    /// Longitude error in kilometers. Wire key `LongitudeError`.
    pub longitude_error: Option<f64>,
    /// Origin time error in seconds. Wire key `TimeError`.
    pub time_error: Option<f64>,
    /// Depth error in kilometers. Wire key `DepthError`.
    pub depth_error: Option<f64>,
}

impl Codec for Hypocenter {
    fn from_value(tree: &Value) -> Result<Hypocenter, DecodeError> {
        let obj = value::as_object(tree)?;
        Ok(Hypocenter {
            latitude: value::opt_f64(obj, "Latitude")?,
            longitude: value::opt_f64(obj, "Longitude")?,
            time: value::opt_time(obj, "Time")?,
            depth: value::opt_f64(obj, "Depth")?,
            latitude_error: value::opt_f64(obj, "LatitudeError")?,
            longitude_error: value::opt_f64(obj, "LongitudeError")?,
            time_error: value::opt_f64(obj, "TimeError")?,
            depth_error: value::opt_f64(obj, "DepthError")?,
        })
    }

    fn to_value(&self) -> Value {
        let mut obj = Map::new();
        if let Some(latitude) = &self.latitude {
            obj.insert("Latitude".to_owned(), json!(latitude));
        }
        if let Some(longitude) = &self.longitude {
            obj.insert("Longitude".to_owned(), json!(longitude));
        }
        if let Some(time) = self.time {
            obj.insert("Time".to_owned(), json!(value::format_time(time)));
        }
        if let Some(depth) = &self.depth {
            obj.insert("Depth".to_owned(), json!(depth));
        }
        if let Some(latitude_error) = &self.latitude_error {
            obj.insert("LatitudeError".to_owned(), json!(latitude_error));
        }
        if let Some(longitude_error) = &self.longitude_error {
            obj.insert("LongitudeError".to_owned(), json!(longitude_error));
        }
        if let Some(time_error) = &self.time_error {
            obj.insert("TimeError".to_owned(), json!(time_error));
        }
        if let Some(depth_error) = &self.depth_error {
            obj.insert("DepthError".to_owned(), json!(depth_error));
        }
        Value::Object(obj)
    }
}

impl Validate for Hypocenter {
    fn get_errors(&self) -> Vec<String> {
        let mut errors = Vec::new();
        validate::require(&mut errors, "Hypocenter", "Latitude", &self.latitude);
        validate::check_range(&mut errors, "Hypocenter", "Latitude", &self.latitude, -90.0, 90.0);
        validate::require(&mut errors, "Hypocenter", "Longitude", &self.longitude);
        validate::check_range(
            &mut errors,
            "Hypocenter",
            "Longitude",
            &self.longitude,
            -180.0,
            180.0,
        );
        validate::require(&mut errors, "Hypocenter", "Time", &self.time);
        validate::require(&mut errors, "Hypocenter", "Depth", &self.depth);
        validate::check_range(&mut errors, "Hypocenter", "Depth", &self.depth, -100.0, 1500.0);
        errors
    }
}
