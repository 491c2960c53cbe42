//! The seismic source a travel time is computed from.

use serde_json::{json, Map, Value};

use crate::codec::Codec;
use crate::error::DecodeError;
use crate::validate::{self, Validate};
use crate::value;

/// Geographic origin of a travel-time computation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TravelTimeSource {
    /// Geographic latitude in degrees. Wire key `Latitude`.
    pub latitude: Option<f64>,
    /// Geographic longitude in degrees. Wire key `Longitude`.
    pub longitude: Option<f64>,
    /// Depth relative to the WGS84 datum in kilometers. Wire key `Depth`.
    pub depth: Option<f64>,
}

impl Codec for TravelTimeSource {
    fn from_value(tree: &Value) -> Result<TravelTimeSource, DecodeError> {
        let obj = value::as_object(tree)?;
        Ok(TravelTimeSource {
            latitude: value::opt_f64(obj, "Latitude")?,
            longitude: value::opt_f64(obj, "Longitude")?,
            depth: value::opt_f64(obj, "Depth")?,
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
        if let Some(depth) = &self.depth {
            obj.insert("Depth".to_owned(), json!(depth));
        }
        Value::Object(obj)
    }
}

impl Validate for TravelTimeSource {
    fn get_errors(&self) -> Vec<String> {
        let mut errors = Vec::new();
        validate::require(&mut errors, "TravelTimeSource", "Latitude", &self.latitude);
        validate::check_range(
            &mut errors,
            "TravelTimeSource",
            "Latitude",
            &self.latitude,
            -90.0,
            90.0,
        );
        validate::require(&mut errors, "TravelTimeSource", "Longitude", &self.longitude);
        validate::check_range(
            &mut errors,
            "TravelTimeSource",
            "Longitude",
            &self.longitude,
            -180.0,
            180.0,
        );
        validate::require(&mut errors, "TravelTimeSource", "Depth", &self.depth);
        validate::check_range(
            &mut errors,
            "TravelTimeSource",
            "Depth",
            &self.depth,
            -100.0,
            1000.0,
        );
        errors
    }
}
