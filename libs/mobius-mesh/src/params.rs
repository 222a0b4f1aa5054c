//! # Parameter Record
//!
//! The plain record a UI collects and a URL persists, plus its mapping onto
//! [`ShapeDescriptor`] and [`SweepConfig`].
//!
//! ## Text Forms
//!
//! - Query string: `geometryType=rounded&segments=100&...`, keys in a fixed
//!   order, form-encoded with `form_urlencoded`. Missing keys keep their
//!   defaults and unknown keys are ignored. Integer fields truncate decimal
//!   text toward zero.
//! - JSON: the same camelCase field names via serde.

use crate::cross_section::ShapeDescriptor;
use crate::error::{MobiusError, Result};
use crate::sweep::SweepConfig;
use config::constants::{
    DEFAULT_COLOUR, DEFAULT_CORNER_SMOOTHING, DEFAULT_POLYGON_RADIUS, DEFAULT_RATIO,
    DEFAULT_RING_RADIUS, DEFAULT_SEGMENTS, DEFAULT_SEGMENTS_PER_CORNER, DEFAULT_SIDES,
    DEFAULT_TWIST,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Shape selector of the parameter record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeometryType {
    #[default]
    Polygon,
    Rectangular,
    Rounded,
}

impl GeometryType {
    /// Returns the selector value as written in query strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Polygon => "polygon",
            Self::Rectangular => "rectangular",
            Self::Rounded => "rounded",
        }
    }
}

impl fmt::Display for GeometryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GeometryType {
    type Err = MobiusError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "polygon" => Ok(Self::Polygon),
            "rectangular" => Ok(Self::Rectangular),
            "rounded" => Ok(Self::Rounded),
            _ => Err(MobiusError::UnknownGeometryType(s.to_string())),
        }
    }
}

/// Parameters collected from the user for one ring.
///
/// # Example
///
/// ```rust
/// use mobius_mesh::params::{GeometryType, MobiusParams};
///
/// let params = MobiusParams::from_query_string("?geometryType=rounded&sides=6").unwrap();
/// assert_eq!(params.geometry_type, GeometryType::Rounded);
/// assert_eq!(params.sides, 6);
/// assert_eq!(params.shape_descriptor().sides(), 6);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MobiusParams {
    /// Which cross-section builder to use
    pub geometry_type: GeometryType,
    /// Cross-sections around the ring
    pub segments: u32,
    /// Circumradius of the cross-section polygon
    pub polygon_radius: f64,
    /// Radius of the sweep path
    pub ring_radius: f64,
    /// Display colour, passed through to the renderer
    pub colour: String,
    /// Polygon sides
    pub sides: u32,
    /// Corner radius of the rounded shape
    pub corner_smoothing: f64,
    /// Auxiliary shape ratio, carried but not used by the geometry
    pub ratio: i32,
    /// Twist in point-index steps; truncated toward zero when swept
    pub twist: f64,
}

impl Default for MobiusParams {
    fn default() -> Self {
        Self {
            geometry_type: GeometryType::default(),
            segments: DEFAULT_SEGMENTS,
            polygon_radius: DEFAULT_POLYGON_RADIUS,
            ring_radius: DEFAULT_RING_RADIUS,
            colour: DEFAULT_COLOUR.to_string(),
            sides: DEFAULT_SIDES,
            corner_smoothing: DEFAULT_CORNER_SMOOTHING,
            ratio: DEFAULT_RATIO,
            twist: DEFAULT_TWIST,
        }
    }
}

impl MobiusParams {
    /// Parses a query string on top of the defaults.
    ///
    /// A leading `?` is accepted. Values are form-decoded (`+` and `%XX`).
    ///
    /// # Errors
    ///
    /// Fails when a known key carries a value of the wrong type.
    pub fn from_query_string(query: &str) -> Result<Self> {
        let mut params = Self::default();
        let query = query.strip_prefix('?').unwrap_or(query);

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            params.set(&key, &value)?;
        }
        Ok(params)
    }

    /// Serializes every field to a query string, without the leading `?`.
    pub fn to_query_string(&self) -> String {
        let fields = [
            ("geometryType", self.geometry_type.to_string()),
            ("segments", self.segments.to_string()),
            ("polygonRadius", self.polygon_radius.to_string()),
            ("ringRadius", self.ring_radius.to_string()),
            ("colour", self.colour.clone()),
            ("sides", self.sides.to_string()),
            ("cornerSmoothing", self.corner_smoothing.to_string()),
            ("ratio", self.ratio.to_string()),
            ("twist", self.twist.to_string()),
        ];
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in &fields {
            serializer.append_pair(key, value);
        }
        serializer.finish()
    }

    /// Parses the JSON form of the record; missing fields keep defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the record to JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Sets one field from its text form. Unknown keys are ignored.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "geometryType" => self.geometry_type = value.parse()?,
            "segments" => self.segments = parse_integer_field(key, value)?,
            "polygonRadius" => self.polygon_radius = parse_field(key, value)?,
            "ringRadius" => self.ring_radius = parse_field(key, value)?,
            "colour" => self.colour = value.to_string(),
            "sides" => self.sides = parse_integer_field(key, value)?,
            "cornerSmoothing" => self.corner_smoothing = parse_field(key, value)?,
            "ratio" => self.ratio = parse_integer_field(key, value)?,
            "twist" => self.twist = parse_field(key, value)?,
            _ => {}
        }
        Ok(())
    }

    /// Maps the record onto a cross-section shape.
    pub fn shape_descriptor(&self) -> ShapeDescriptor {
        let sides = self.sides;
        let radius = self.polygon_radius;
        match self.geometry_type {
            GeometryType::Polygon => ShapeDescriptor::Polygon { sides, radius },
            GeometryType::Rectangular => ShapeDescriptor::Rectangular { sides, radius },
            GeometryType::Rounded => ShapeDescriptor::Rounded {
                sides,
                radius,
                corner_radius: self.corner_smoothing,
                segments_per_corner: DEFAULT_SEGMENTS_PER_CORNER,
            },
        }
    }

    /// Maps the record onto a sweep, truncating the twist toward zero.
    pub fn sweep_config(&self) -> SweepConfig {
        SweepConfig::new(self.ring_radius, self.segments, self.twist.trunc() as i32)
    }
}

fn parse_field<T: FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| MobiusError::invalid_parameter(key, value))
}

/// Integer fields accept decimal text and truncate it toward zero, so
/// `sides=3.5` reads as 3.
fn parse_integer_field<T: TryFrom<i64>>(key: &str, value: &str) -> Result<T> {
    let text = value.trim();
    let whole = match text.parse::<i64>() {
        Ok(whole) => whole,
        Err(_) => {
            let number: f64 = parse_field(key, value)?;
            if !number.is_finite() {
                return Err(MobiusError::invalid_parameter(key, value));
            }
            number.trunc() as i64
        }
    };
    T::try_from(whole).map_err(|_| MobiusError::invalid_parameter(key, value))
}
