//! The output of a location run: hypocenter, supporting picks, and
//! quality metrics.

use serde_json::{json, Map, Value};

use crate::codec::{self, Codec};
use crate::error::DecodeError;
use crate::error_ellipse::ErrorEllipse;
use crate::hypocenter::Hypocenter;
use crate::pick::Pick;
use crate::validate::{self, Validate};
use crate::value;

/// Accepted values for [`LocationResult::locator_exit_code`].
pub const LOCATOR_EXIT_CODES: [&str; 5] = [
    "Success",
    "DidNotMove",
    "ErrorsNotComputed",
    "Failed",
    "Unknown",
];

/// A computed location. Everything beyond the hypocenter and the
/// supporting picks is a quality metric and optional.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LocationResult {
    /// Identifier of the request this result answers. Wire key `ID`.
    pub id: Option<String>,
    /// The located origin. Wire key `Hypocenter`.
    pub hypocenter: Option<Hypocenter>,
    /// Picks that support the location. Wire key `SupportingData`.
    pub supporting_data: Option<Vec<Pick>>,
    /// Wire key `NumberOfAssociatedStations`.
    pub number_of_associated_stations: Option<i64>,
    /// Wire key `NumberOfAssociatedPhases`.
    pub number_of_associated_phases: Option<i64>,
    /// Wire key `NumberOfUsedStations`.
    pub number_of_used_stations: Option<i64>,
    /// Wire key `NumberOfUsedPhases`.
    pub number_of_used_phases: Option<i64>,
    /// Azimuthal gap in degrees. Wire key `Gap`.
    pub gap: Option<f64>,
    /// Secondary azimuthal gap in degrees. Wire key `SecondaryGap`.
    pub secondary_gap: Option<f64>,
    /// Distance to the closest station in degrees. Wire key `MinimumDistance`.
    pub minimum_distance: Option<f64>,
    /// Residual root mean square in seconds. Wire key `RMS`.
    pub rms: Option<f64>,
    /// Quality flags. Wire key `Quality`.
    pub quality: Option<String>,
    /// Wire key `BayesianDepth`, kilometers.
    pub bayesian_depth: Option<f64>,
    /// Wire key `BayesianRange`, kilometers.
    pub bayesian_range: Option<f64>,
    /// Wire key `DepthImportance`.
    pub depth_importance: Option<f64>,
    /// Locator outcome, one of [`LOCATOR_EXIT_CODES`]. Wire key `LocatorExitCode`.
    pub locator_exit_code: Option<String>,
    /// Error ellipse of the location. Wire key `ErrorEllipse`.
    pub error_ellipse: Option<ErrorEllipse>,
}

impl Codec for LocationResult {
    fn from_value(tree: &Value) -> Result<LocationResult, DecodeError> {
        let obj = value::as_object(tree)?;
        Ok(LocationResult {
            id: value::opt_str(obj, "ID")?,
            hypocenter: obj.get("Hypocenter").map(Hypocenter::from_value).transpose()?,
            supporting_data: value::opt_array(obj, "SupportingData")?
                .map(|items| codec::decode_list(items))
                .transpose()?,
            number_of_associated_stations: value::opt_i64(obj, "NumberOfAssociatedStations")?,
            number_of_associated_phases: value::opt_i64(obj, "NumberOfAssociatedPhases")?,
            number_of_used_stations: value::opt_i64(obj, "NumberOfUsedStations")?,
            number_of_used_phases: value::opt_i64(obj, "NumberOfUsedPhases")?,
            gap: value::opt_f64(obj, "Gap")?,
            secondary_gap: value::opt_f64(obj, "SecondaryGap")?,
            minimum_distance: value::opt_f64(obj, "MinimumDistance")?,
            rms: value::opt_f64(obj, "RMS")?,
            quality: value::opt_str(obj, "Quality")?,
            bayesian_depth: value::opt_f64(obj, "BayesianDepth")?,
            bayesian_range: value::opt_f64(obj, "BayesianRange")?,
            depth_importance: value::opt_f64(obj, "DepthImportance")?,
            locator_exit_code: value::opt_str(obj, "LocatorExitCode")?,
            error_ellipse: obj
                .get("ErrorEllipse")
                .map(ErrorEllipse::from_value)
                .transpose()?,
        })
    }

    fn to_value(&self) -> Value {
        let mut obj = Map::new();
        if let Some(id) = &self.id {
            obj.insert("ID".to_owned(), json!(id));
        }
        if let Some(hypocenter) = &self.hypocenter {
            obj.insert("Hypocenter".to_owned(), hypocenter.to_value());
        }
        if let Some(picks) = &self.supporting_data {
            obj.insert("SupportingData".to_owned(), codec::encode_list(picks));
        }
        if let Some(n) = &self.number_of_associated_stations {
            obj.insert("NumberOfAssociatedStations".to_owned(), json!(n));
        }
        if let Some(n) = &self.number_of_associated_phases {
            obj.insert("NumberOfAssociatedPhases".to_owned(), json!(n));
        }
        if let Some(n) = &self.number_of_used_stations {
            obj.insert("NumberOfUsedStations".to_owned(), json!(n));
        }
        if let Some(n) = &self.number_of_used_phases {
            obj.insert("NumberOfUsedPhases".to_owned(), json!(n));
        }
        if let Some(gap) = &self.gap {
            obj.insert("Gap".to_owned(), json!(gap));
        }
        if let Some(secondary_gap) = &self.secondary_gap {
            obj.insert("SecondaryGap".to_owned(), json!(secondary_gap));
        }
        if let Some(minimum_distance) = &self.minimum_distance {
            obj.insert("MinimumDistance".to_owned(), json!(minimum_distance));
        }
        if let Some(rms) = &self.rms {
            obj.insert("RMS".to_owned(), json!(rms));
        }
        if let Some(quality) = &self.quality {
            obj.insert("Quality".to_owned(), json!(quality));
        }
        if let Some(bayesian_depth) = &self.bayesian_depth {
            obj.insert("BayesianDepth".to_owned(), json!(bayesian_depth));
        }
        if let Some(bayesian_range) = &self.bayesian_range {
            obj.insert("BayesianRange".to_owned(), json!(bayesian_range));
        }
        if let Some(depth_importance) = &self.depth_importance {
            obj.insert("DepthImportance".to_owned(), json!(depth_importance));
        }
        if let Some(locator_exit_code) = &self.locator_exit_code {
            obj.insert("LocatorExitCode".to_owned(), json!(locator_exit_code));
        }
        if let Some(error_ellipse) = &self.error_ellipse {
            obj.insert("ErrorEllipse".to_owned(), error_ellipse.to_value());
        }
        Value::Object(obj)
    }
}

impl Validate for LocationResult {
    fn get_errors(&self) -> Vec<String> {
        let mut errors = Vec::new();
        validate::require_entity(&mut errors, "LocationResult", "Hypocenter", &self.hypocenter);
        validate::require_list(
            &mut errors,
            "LocationResult",
            "SupportingData",
            &self.supporting_data,
            true,
        );
        validate::check_range(&mut errors, "LocationResult", "Gap", &self.gap, 0.0, 360.0);
        validate::check_range(
            &mut errors,
            "LocationResult",
            "SecondaryGap",
            &self.secondary_gap,
            0.0,
            360.0,
        );
        validate::check_min(
            &mut errors,
            "LocationResult",
            "MinimumDistance",
            &self.minimum_distance,
            0.0,
        );
        validate::check_non_empty(
            &mut errors,
            "LocationResult",
            "LocatorExitCode",
            &self.locator_exit_code,
        );
        validate::check_one_of(
            &mut errors,
            "LocationResult",
            "LocatorExitCode",
            &self.locator_exit_code,
            &LOCATOR_EXIT_CODES,
        );
        validate::check_entity(&mut errors, "LocationResult", "ErrorEllipse", &self.error_ellipse);
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_ellipse::ErrorEllipseAxis;
    use time::macros::datetime;

    const PICK_STRING: &str = r#"{"ID":"12GFH48776857",
        "Site":{"Station":"BOZ","Channel":"BHZ","Network":"US","Location":"00",
            "Latitude":45.59697,"Longitude":-111.62967,"Elevation":1589.0},
        "Source":{"AgencyID":"US","Author":"TestAuthor","Type":"Unknown"},
        "Time":"2015-12-28T21:32:24.017Z","Affinity":1.2,"Quality":0.45,"Use":false,
        "PickedPhase":"P","AssociatedPhase":"P","LocatedPhase":"P",
        "Residual":1.05,"Distance":2.65,"Azimuth":21.5,"Weight":2.65,"Importance":3.8}"#;

    fn sample_pick() -> Pick {
        Pick::from_json(PICK_STRING).unwrap()
    }

    fn sample() -> LocationResult {
        LocationResult {
            id: Some("12345678".to_owned()),
            hypocenter: Some(Hypocenter {
                latitude: Some(40.3344),
                longitude: Some(-121.44),
                time: Some(datetime!(2015-12-28 21:32:24.017 UTC)),
                depth: Some(32.44),
                latitude_error: Some(12.5),
                longitude_error: Some(22.64),
                time_error: Some(1.984),
                depth_error: Some(2.44),
            }),
            supporting_data: Some(vec![sample_pick()]),
            number_of_associated_stations: Some(11),
            number_of_associated_phases: Some(22),
            number_of_used_stations: Some(33),
            number_of_used_phases: Some(44),
            gap: Some(33.67),
            secondary_gap: Some(33.67),
            minimum_distance: Some(2.14),
            rms: Some(3.8),
            quality: Some("A".to_owned()),
            bayesian_depth: Some(66.7),
            bayesian_range: Some(20.3),
            depth_importance: Some(1.8),
            locator_exit_code: Some("Success".to_owned()),
            error_ellipse: Some(ErrorEllipse {
                e0: Some(axis(40.3344, -121.44, 32.44)),
                e1: Some(axis(12.5, 22.64, 2.44)),
                e2: Some(axis(12.5, 22.64, 2.44)),
                maximum_horizontal_projection: Some(1.984),
                maximum_vertical_projection: Some(1.984),
                equivalent_horizontal_radius: Some(1.984),
            }),
        }
    }

    fn axis(error: f64, azimuth: f64, dip: f64) -> ErrorEllipseAxis {
        ErrorEllipseAxis {
            error: Some(error),
            azimuth: Some(azimuth),
            dip: Some(dip),
        }
    }

    #[test]
    fn round_trip() {
        let result = sample();
        assert_eq!(LocationResult::from_value(&result.to_value()).unwrap(), result);
        assert!(result.is_valid());
    }

    #[test]
    fn invalid_hypocenter_propagates() {
        let mut result = sample();
        result.hypocenter.as_mut().unwrap().latitude = None;
        assert_eq!(
            result.get_errors(),
            vec!["Hypocenter in LocationResult: No Latitude in Hypocenter."]
        );
    }

    #[test]
    fn invalid_supporting_pick_propagates() {
        let mut result = sample();
        result.supporting_data.as_mut().unwrap()[0].time = None;
        assert_eq!(
            result.get_errors(),
            vec!["SupportingData[0] in LocationResult: No Time in Pick."]
        );
    }

    #[test]
    fn empty_supporting_data_invalidates() {
        let mut result = sample();
        result.supporting_data = Some(Vec::new());
        assert_eq!(
            result.get_errors(),
            vec!["Empty SupportingData in LocationResult."]
        );
    }

    #[test]
    fn optional_error_ellipse_must_still_validate() {
        let mut result = sample();
        result.error_ellipse.as_mut().unwrap().e0 = None;
        assert_eq!(
            result.get_errors(),
            vec!["ErrorEllipse in LocationResult: No E0 in ErrorEllipse."]
        );
        result.error_ellipse = None;
        assert!(result.is_valid());
    }

    #[test]
    fn unknown_exit_code_invalidates() {
        let mut result = sample();
        result.locator_exit_code = Some("Crashed".to_owned());
        assert_eq!(
            result.get_errors(),
            vec!["Invalid LocatorExitCode in LocationResult."]
        );
    }

    #[test]
    fn empty_exit_code_invalidates() {
        let mut result = sample();
        result.locator_exit_code = Some(String::new());
        assert_eq!(
            result.get_errors(),
            vec!["Empty LocatorExitCode in LocationResult."]
        );
    }

    #[test]
    fn station_counts_decode_as_integers() {
        let mut tree = sample().to_value();
        tree["NumberOfUsedStations"] = serde_json::json!(33.5);
        assert!(LocationResult::from_value(&tree).is_err());
    }
}
