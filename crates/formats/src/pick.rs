//! A phase arrival pick: the input datum of a location request.

use serde_json::{json, Map, Value};
use time::OffsetDateTime;

use crate::codec::Codec;
use crate::error::DecodeError;
use crate::site::Site;
use crate::source::Source;
use crate::validate::{self, Validate};
use crate::value;

/// One picked phase arrival at a site. The trailing block of fields
/// (Residual through Importance) is filled in by the locator on
/// output and is optional on input.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Pick {
    /// Unique identifier for this pick. Wire key `ID`.
    pub id: Option<String>,
    /// Station the arrival was recorded at. Wire key `Site`.
    pub site: Option<Site>,
    /// Who produced the pick. Wire key `Source`.
    pub source: Option<Source>,
    /// Arrival time. Wire key `Time`.
    pub time: Option<OffsetDateTime>,
    /// Pick affinity. Wire key `Affinity`.
    pub affinity: Option<f64>,
    /// Pick quality. Wire key `Quality`.
    pub quality: Option<f64>,
    /// Whether the pick should be used. Wire key `Use`.
    pub use_flag: Option<bool>,
    /// Phase name assigned by the picker. Wire key `PickedPhase`.
    pub picked_phase: Option<String>,
    /// Phase name assigned by the associator. Wire key `AssociatedPhase`.
    pub associated_phase: Option<String>,
    /// Phase name assigned by the locator. Wire key `LocatedPhase`.
    pub located_phase: Option<String>,
    /// Travel-time residual in seconds. Wire key `Residual`.
    pub residual: Option<f64>,
    /// Source-receiver distance in degrees. Wire key `Distance`.
    pub distance: Option<f64>,
    /// Receiver azimuth in degrees. Wire key `Azimuth`.
    pub azimuth: Option<f64>,
    /// Weight the locator applied. Wire key `Weight`.
    pub weight: Option<f64>,
    /// Data importance. Wire key `Importance`.
    pub importance: Option<f64>,
}

impl Codec for Pick {
    fn from_value(tree: &Value) -> Result<Pick, DecodeError> {
        let obj = value::as_object(tree)?;
        Ok(Pick {
            id: value::opt_str(obj, "ID")?,
            site: obj.get("Site").map(Site::from_value).transpose()?,
            source: obj.get("Source").map(Source::from_value).transpose()?,
            time: value::opt_time(obj, "Time")?,
            affinity: value::opt_f64(obj, "Affinity")?,
            quality: value::opt_f64(obj, "Quality")?,
            use_flag: value::opt_bool(obj, "Use")?,
            picked_phase: value::opt_str(obj, "PickedPhase")?,
            associated_phase: value::opt_str(obj, "AssociatedPhase")?,
            located_phase: value::opt_str(obj, "LocatedPhase")?,
            residual: value::opt_f64(obj, "Residual")?,
            distance: value::opt_f64(obj, "Distance")?,
            azimuth: value::opt_f64(obj, "Azimuth")?,
            weight: value::opt_f64(obj, "Weight")?,
            importance: value::opt_f64(obj, "Importance")?,
        })
    }

    fn to_value(&self) -> Value {
        let mut obj = Map::new();
        if let Some(id) = &self.id {
            obj.insert("ID".to_owned(), json!(id));
        }
        if let Some(site) = &self.site {
            obj.insert("Site".to_owned(), site.to_value());
        }
        if let Some(source) = &self.source {
            obj.insert("Source".to_owned(), source.to_value());
        }
        if let Some(time) = self.time {
            obj.insert("Time".to_owned(), json!(value::format_time(time)));
        }
        if let Some(affinity) = &self.affinity {
            obj.insert("Affinity".to_owned(), json!(affinity));
        }
        if let Some(quality) = &self.quality {
            obj.insert("Quality".to_owned(), json!(quality));
        }
        if let Some(use_flag) = &self.use_flag {
            obj.insert("Use".to_owned(), json!(use_flag));
        }
        if let Some(picked_phase) = &self.picked_phase {
            obj.insert("PickedPhase".to_owned(), json!(picked_phase));
        }
        if let Some(associated_phase) = &self.associated_phase {
            obj.insert("AssociatedPhase".to_owned(), json!(associated_phase));
        }
        if let Some(located_phase) = &self.located_phase {
            obj.insert("LocatedPhase".to_owned(), json!(located_phase));
        }
        if let Some(residual) = &self.residual {
            obj.insert("Residual".to_owned(), json!(residual));
        }
        if let Some(distance) = &self.distance {
            obj.insert("Distance".to_owned(), json!(distance));
        }
        if let Some(azimuth) = &self.azimuth {
            obj.insert("Azimuth".to_owned(), json!(azimuth));
        }
        if let Some(weight) = &self.weight {
            obj.insert("Weight".to_owned(), json!(weight));
        }
        if let Some(importance) = &self.importance {
            obj.insert("Importance".to_owned(), json!(importance));
        }
        Value::Object(obj)
    }
}

impl Validate for Pick {
    fn get_errors(&self) -> Vec<String> {
        let mut errors = Vec::new();
        validate::require_string(&mut errors, "Pick", "ID", &self.id);
        validate::require_entity(&mut errors, "Pick", "Site", &self.site);
        validate::require_entity(&mut errors, "Pick", "Source", &self.source);
        validate::require(&mut errors, "Pick", "Time", &self.time);
        validate::require_string(&mut errors, "Pick", "PickedPhase", &self.picked_phase);
        validate::check_non_empty(&mut errors, "Pick", "AssociatedPhase", &self.associated_phase);
        validate::check_non_empty(&mut errors, "Pick", "LocatedPhase", &self.located_phase);
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use time::macros::datetime;

    fn sample() -> Pick {
        Pick {
            id: Some("12GFH48776857".to_owned()),
            site: Some(Site {
                station: Some("BOZ".to_owned()),
                channel: Some("BHZ".to_owned()),
                network: Some("US".to_owned()),
                location: Some("00".to_owned()),
                latitude: Some(45.59697),
                longitude: Some(-111.62967),
                elevation: Some(1589.0),
            }),
            source: Some(Source {
                agency_id: Some("US".to_owned()),
                author: Some("TestAuthor".to_owned()),
                source_type: Some("Unknown".to_owned()),
            }),
            time: Some(datetime!(2015-12-28 21:32:24.017 UTC)),
            affinity: Some(1.2),
            quality: Some(0.45),
            use_flag: Some(false),
            picked_phase: Some("P".to_owned()),
            associated_phase: Some("P".to_owned()),
            located_phase: Some("P".to_owned()),
            residual: Some(1.05),
            distance: Some(2.65),
            azimuth: Some(21.5),
            weight: Some(2.65),
            importance: Some(3.8),
        }
    }

    #[test]
    fn round_trip() {
        let pick = sample();
        assert_eq!(Pick::from_value(&pick.to_value()).unwrap(), pick);
        assert!(pick.is_valid());
    }

    #[test]
    fn key_order_follows_declaration() {
        let value = sample().to_value();
        let keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(
            keys,
            vec![
                "ID", "Site", "Source", "Time", "Affinity", "Quality", "Use", "PickedPhase",
                "AssociatedPhase", "LocatedPhase", "Residual", "Distance", "Azimuth", "Weight",
                "Importance",
            ]
        );
    }

    #[test]
    fn minimal_pick_is_valid() {
        let pick = Pick {
            affinity: None,
            quality: None,
            use_flag: None,
            associated_phase: None,
            located_phase: None,
            residual: None,
            distance: None,
            azimuth: None,
            weight: None,
            importance: None,
            ..sample()
        };
        assert!(pick.is_valid());
    }

    #[test]
    fn empty_id_invalidates() {
        let pick = Pick {
            id: Some(String::new()),
            ..sample()
        };
        assert_eq!(pick.get_errors(), vec!["Empty ID in Pick."]);
    }

    #[test]
    fn invalid_nested_site_propagates() {
        let mut pick = sample();
        pick.site.as_mut().unwrap().station = None;
        assert_eq!(pick.get_errors(), vec!["Site in Pick: No Station in Site."]);
    }

    #[test]
    fn missing_picked_phase_invalidates() {
        let pick = Pick {
            picked_phase: None,
            ..sample()
        };
        assert_eq!(pick.get_errors(), vec!["No PickedPhase in Pick."]);
    }

    #[test]
    fn site_must_be_an_object() {
        let err = Pick::from_value(&json!({"Site": "BOZ"})).unwrap_err();
        assert!(matches!(err, DecodeError::Parse { .. }));
    }
}
