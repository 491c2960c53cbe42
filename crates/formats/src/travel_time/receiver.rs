//! The receiver side of a travel-time computation: where the station
//! is and, once computed, the per-phase data for it.

use serde_json::{json, Map, Value};

use crate::codec::{self, Codec};
use crate::error::DecodeError;
use crate::travel_time::data::TravelTimeData;
use crate::validate::{self, Validate};
use crate::value;

/// One receiver in a travel-time request. `branches` carries the
/// per-phase answers on the return leg.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TravelTimeReceiver {
    /// Receiver identifier. Wire key `ID`.
    pub id: Option<String>,
    /// Source-receiver distance in degrees. Wire key `Distance`.
    pub distance: Option<f64>,
    /// Elevation relative to the WGS84 datum in kilometers. Wire key
    /// `Elevation`.
    pub elevation: Option<f64>,
    /// Geographic latitude in degrees. Wire key `Latitude`.
    pub latitude: Option<f64>,
    /// Geographic longitude in degrees. Wire key `Longitude`.
    pub longitude: Option<f64>,
    /// Computed per-phase data. Wire key `Branches`.
    pub branches: Option<Vec<TravelTimeData>>,
}

impl Codec for TravelTimeReceiver {
    fn from_value(tree: &Value) -> Result<TravelTimeReceiver, DecodeError> {
        let obj = value::as_object(tree)?;
        Ok(TravelTimeReceiver {
            id: value::opt_str(obj, "ID")?,
            distance: value::opt_f64(obj, "Distance")?,
            elevation: value::opt_f64(obj, "Elevation")?,
            latitude: value::opt_f64(obj, "Latitude")?,
            longitude: value::opt_f64(obj, "Longitude")?,
            branches: value::opt_array(obj, "Branches")?
                .map(|items| codec::decode_list(items))
                .transpose()?,
        })
    }

    fn to_value(&self) -> Value {
        let mut obj = Map::new();
        if let Some(id) = &self.id {
            obj.insert("ID".to_owned(), json!(id));
        }
        if let Some(distance) = &self.distance {
            obj.insert("Distance".to_owned(), json!(distance));
        }
        if let Some(elevation) = &self.elevation {
            obj.insert("Elevation".to_owned(), json!(elevation));
        }
        if let Some(latitude) = &self.latitude {
            obj.insert("Latitude".to_owned(), json!(latitude));
        }
        if let Some(longitude) = &self.longitude {
            obj.insert("Longitude".to_owned(), json!(longitude));
        }
        if let Some(branches) = &self.branches {
            obj.insert("Branches".to_owned(), codec::encode_list(branches));
        }
        Value::Object(obj)
    }
}

impl Validate for TravelTimeReceiver {
    fn get_errors(&self) -> Vec<String> {
        let mut errors = Vec::new();
        validate::require_string(&mut errors, "TravelTimeReceiver", "ID", &self.id);
        validate::require(&mut errors, "TravelTimeReceiver", "Distance", &self.distance);
        validate::check_range(
            &mut errors,
            "TravelTimeReceiver",
            "Distance",
            &self.distance,
            0.0,
            360.0,
        );
        validate::require(&mut errors, "TravelTimeReceiver", "Elevation", &self.elevation);
        validate::check_range(
            &mut errors,
            "TravelTimeReceiver",
            "Elevation",
            &self.elevation,
            -100.0,
            1000.0,
        );
        validate::require(&mut errors, "TravelTimeReceiver", "Latitude", &self.latitude);
        validate::check_range(
            &mut errors,
            "TravelTimeReceiver",
            "Latitude",
            &self.latitude,
            -90.0,
            90.0,
        );
        validate::require(&mut errors, "TravelTimeReceiver", "Longitude", &self.longitude);
        validate::check_range(
            &mut errors,
            "TravelTimeReceiver",
            "Longitude",
            &self.longitude,
            -180.0,
            180.0,
        );
        validate::check_list(&mut errors, "TravelTimeReceiver", "Branches", &self.branches);
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_data() -> TravelTimeData {
        TravelTimeData {
            phase: Some("Pg".to_owned()),
            travel_time: Some(22.456),
            distance_derivative: Some(1.2),
            depth_derivative: Some(3.45),
            ray_derivative: Some(5.67),
            statistical_spread: Some(1.5),
            observability: Some(0.34),
            teleseismic_phase_group: Some(1),
            auxiliary_phase_group: Some(1),
            location_use_flag: Some(true),
            association_weight_flag: Some(true),
        }
    }

    fn sample() -> TravelTimeReceiver {
        TravelTimeReceiver {
            id: Some("12345678".to_owned()),
            distance: Some(22.123),
            elevation: Some(1.589),
            latitude: Some(45.59697),
            longitude: Some(-111.62967),
            branches: Some(vec![sample_data()]),
        }
    }

    #[test]
    fn round_trip() {
        let receiver = sample();
        assert_eq!(
            TravelTimeReceiver::from_value(&receiver.to_value()).unwrap(),
            receiver
        );
        assert!(receiver.is_valid());
    }

    #[test]
    fn branches_are_optional() {
        let receiver = TravelTimeReceiver {
            branches: None,
            ..sample()
        };
        assert!(receiver.is_valid());
        assert!(!receiver.to_value().as_object().unwrap().contains_key("Branches"));
    }

    #[test]
    fn distance_range_enforced() {
        let receiver = TravelTimeReceiver {
            distance: Some(-1.0),
            ..sample()
        };
        assert_eq!(
            receiver.get_errors(),
            vec!["Distance in TravelTimeReceiver not in the range of 0 to 360."]
        );
    }

    #[test]
    fn invalid_branch_propagates_with_index() {
        let mut receiver = sample();
        receiver.branches.as_mut().unwrap()[0].phase = None;
        assert_eq!(
            receiver.get_errors(),
            vec!["Branches[0] in TravelTimeReceiver: No Phase in TravelTimeData."]
        );
    }
}
