//! Hypocenter error ellipse and its three principal axes.

use serde_json::{json, Map, Value};

use crate::codec::Codec;
use crate::error::DecodeError;
use crate::validate::{self, Validate};
use crate::value;

/// One principal axis of an error ellipse.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ErrorEllipseAxis {
    /// Length of the axis in kilometers. Wire key `Error`.
    pub error: Option<f64>,
    /// Azimuth of the axis in degrees. Wire key `Azimuth`.
    pub azimuth: Option<f64>,
    /// Dip of the axis in degrees. Wire key `Dip`.
    pub dip: Option<f64>,
}

impl Codec for ErrorEllipseAxis {
    fn from_value(tree: &Value) -> Result<ErrorEllipseAxis, DecodeError> {
        let obj = value::as_object(tree)?;
        Ok(ErrorEllipseAxis {
            error: value::opt_f64(obj, "Error")?,
            azimuth: value::opt_f64(obj, "Azimuth")?,
            dip: value::opt_f64(obj, "Dip")?,
        })
    }

    fn to_value(&self) -> Value {
        let mut obj = Map::new();
        if let Some(error) = &self.error {
            obj.insert("Error".to_owned(), json!(error));
        }
        if let Some(azimuth) = &self.azimuth {
            obj.insert("Azimuth".to_owned(), json!(azimuth));
        }
        if let Some(dip) = &self.dip {
            obj.insert("Dip".to_owned(), json!(dip));
        }
        Value::Object(obj)
    }
}

impl Validate for ErrorEllipseAxis {
    fn get_errors(&self) -> Vec<String> {
        let mut errors = Vec::new();
        validate::require(&mut errors, "ErrorEllipseAxis", "Error", &self.error);
        validate::require(&mut errors, "ErrorEllipseAxis", "Azimuth", &self.azimuth);
        validate::require(&mut errors, "ErrorEllipseAxis", "Dip", &self.dip);
        errors
    }
}

/// Full error ellipse: three axes plus projection summaries. All
/// fields are required when the ellipse is supplied at all.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ErrorEllipse {
    /// First axis. Wire key `E0`.
    pub e0: Option<ErrorEllipseAxis>,
    /// Second axis. Wire key `E1`.
    pub e1: Option<ErrorEllipseAxis>,
    /// Third axis. Wire key `E2`.
    pub e2: Option<ErrorEllipseAxis>,
    /// Wire key `MaximumHorizontalProjection`, kilometers.
    pub maximum_horizontal_projection: Option<f64>,
    /// Wire key `MaximumVerticalProjection`, kilometers.
    pub maximum_vertical_projection: Option<f64>,
    /// Wire key `EquivalentHorizontalRadius`, kilometers.
    pub equivalent_horizontal_radius: Option<f64>,
}

impl Codec for ErrorEllipse {
    fn from_value(tree: &Value) -> Result<ErrorEllipse, DecodeError> {
        let obj = value::as_object(tree)?;
        Ok(ErrorEllipse {
            e0: obj.get("E0").map(ErrorEllipseAxis::from_value).transpose()?,
            e1: obj.get("E1").map(ErrorEllipseAxis::from_value).transpose()?,
            e2: obj.get("E2").map(ErrorEllipseAxis::from_value).transpose()?,
            maximum_horizontal_projection: value::opt_f64(obj, "MaximumHorizontalProjection")?,
            maximum_vertical_projection: value::opt_f64(obj, "MaximumVerticalProjection")?,
            equivalent_horizontal_radius: value::opt_f64(obj, "EquivalentHorizontalRadius")?,
        })
    }

    fn to_value(&self) -> Value {
        let mut obj = Map::new();
        if let Some(e0) = &self.e0 {
            obj.insert("E0".to_owned(), e0.to_value());
        }
        if let Some(e1) = &self.e1 {
            obj.insert("E1".to_owned(), e1.to_value());
        }
        if let Some(e2) = &self.e2 {
            obj.insert("E2".to_owned(), e2.to_value());
        }
        if let Some(h) = &self.maximum_horizontal_projection {
            obj.insert("MaximumHorizontalProjection".to_owned(), json!(h));
        }
        if let Some(v) = &self.maximum_vertical_projection {
            obj.insert("MaximumVerticalProjection".to_owned(), json!(v));
        }
        if let Some(r) = &self.equivalent_horizontal_radius {
            obj.insert("EquivalentHorizontalRadius".to_owned(), json!(r));
        }
        Value::Object(obj)
    }
}

impl Validate for ErrorEllipse {
    fn get_errors(&self) -> Vec<String> {
        let mut errors = Vec::new();
        validate::require_entity(&mut errors, "ErrorEllipse", "E0", &self.e0);
        validate::require_entity(&mut errors, "ErrorEllipse", "E1", &self.e1);
        validate::require_entity(&mut errors, "ErrorEllipse", "E2", &self.e2);
        validate::require(
            &mut errors,
            "ErrorEllipse",
            "MaximumHorizontalProjection",
            &self.maximum_horizontal_projection,
        );
        validate::require(
            &mut errors,
            "ErrorEllipse",
            "MaximumVerticalProjection",
            &self.maximum_vertical_projection,
        );
        validate::require(
            &mut errors,
            "ErrorEllipse",
            "EquivalentHorizontalRadius",
            &self.equivalent_horizontal_radius,
        );
        errors
    }
}
