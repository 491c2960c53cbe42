//! The recording site (station) a pick was observed at.

use serde_json::{json, Map, Value};

use crate::codec::Codec;
use crate::error::DecodeError;
use crate::validate::{self, Validate};
use crate::value;

/// SCNL identifier plus optional geographic position of a station.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Site {
    /// Station code, e.g. "BOZ". Wire key `Station`.
    pub station: Option<String>,
    /// Channel code, e.g. "BHZ". Wire key `Channel`.
    pub channel: Option<String>,
    /// Network code, e.g. "US". Wire key `Network`.
    pub network: Option<String>,
    /// Location code, e.g. "00". Wire key `Location`.
    pub location: Option<String>,
    /// Geographic latitude in degrees. Wire key `Latitude`.
    pub latitude: Option<f64>,
    /// Geographic longitude in degrees. Wire key `Longitude`.
    pub longitude: Option<f64>,
    /// Elevation relative to the WGS84 datum in meters. Wire key `Elevation`.
    pub elevation: Option<f64>,
}

impl Codec for Site {
    fn from_value(tree: &Value) -> Result<Site, DecodeError> {
        let obj = value::as_object(tree)?;
        Ok(Site {
            station: value::opt_str(obj, "Station")?,
            channel: value::opt_str(obj, "Channel")?,
            network: value::opt_str(obj, "Network")?,
            location: value::opt_str(obj, "Location")?,
            latitude: value::opt_f64(obj, "Latitude")?,
            longitude: value::opt_f64(obj, "Longitude")?,
            elevation: value::opt_f64(obj, "Elevation")?,
        })
    }

    fn to_value(&self) -> Value {
        let mut obj = Map::new();
        if let Some(station) = &self.station {
            obj.insert("Station".to_owned(), json!(station));
        }
        if let Some(channel) = &self.channel {
            obj.insert("Channel".to_owned(), json!(channel));
        }
        if let Some(network) = &self.network {
            obj.insert("Network".to_owned(), json!(network));
        }
        if let Some(location) = &self.location {
            obj.insert("Location".to_owned(), json!(location));
        }
        if let Some(latitude) = &self.latitude {
            obj.insert("Latitude".to_owned(), json!(latitude));
        }
        if let Some(longitude) = &self.longitude {
            obj.insert("Longitude".to_owned(), json!(longitude));
        }
        if let Some(elevation) = &self.elevation {
            obj.insert("Elevation".to_owned(), json!(elevation));
        }
        Value::Object(obj)
    }
}

impl Validate for Site {
    fn get_errors(&self) -> Vec<String> {
        let mut errors = Vec::new();
        validate::require_string(&mut errors, "Site", "Station", &self.station);
        validate::require(&mut errors, "Site", "Channel", &self.channel);
        validate::require_string(&mut errors, "Site", "Network", &self.network);
        validate::require(&mut errors, "Site", "Location", &self.location);
        validate::check_range(&mut errors, "Site", "Latitude", &self.latitude, -90.0, 90.0);
        validate::check_range(&mut errors, "Site", "Longitude", &self.longitude, -180.0, 180.0);
        errors
    }
}
