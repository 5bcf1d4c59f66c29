use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize, ser::SerializeSeq};

use crate::error::GeoJsonError;

/// Any JSON value, used for properties and foreign members
pub type JsonValue = serde_json::Value;

/// A JSON object; keys keep document order with the `preserve-order` feature
pub type JsonObject = serde_json::Map<String, JsonValue>;

/// One loop of a polygon
///
/// Closure and winding order are not checked.
pub type Ring = Vec<Position>;

/// Largest integer an `f64` holds exactly (2^53 - 1)
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// * [RFC 7946 §3.1.1](https://datatracker.ietf.org/doc/html/rfc7946#section-3.1.1)
///
/// Encoded as `[longitude, latitude]` or `[longitude, latitude, altitude]`.
/// Comparison is exact; there is no epsilon tolerance. JSON has no NaN or
/// infinity, so encoding a position holding one fails.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    /// Degrees east
    pub longitude: f64,
    /// Degrees north
    pub latitude: f64,
    pub altitude: Option<f64>,
}

impl Position {
    pub const fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
            altitude: None,
        }
    }

    pub const fn with_altitude(longitude: f64, latitude: f64, altitude: f64) -> Self {
        Self {
            longitude,
            latitude,
            altitude: Some(altitude),
        }
    }
}

impl From<[f64; 2]> for Position {
    fn from([longitude, latitude]: [f64; 2]) -> Self {
        Self::new(longitude, latitude)
    }
}

impl From<(f64, f64)> for Position {
    fn from((longitude, latitude): (f64, f64)) -> Self {
        Self::new(longitude, latitude)
    }
}

impl Serialize for Position {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let components = [Some(self.longitude), Some(self.latitude), self.altitude];
        if components.into_iter().flatten().any(|n| !n.is_finite()) {
            return Err(serde::ser::Error::custom(
                "position components must be finite numbers",
            ));
        }

        let len = if self.altitude.is_some() { 3 } else { 2 };
        let mut seq = serializer.serialize_seq(Some(len))?;
        seq.serialize_element(&self.longitude)?;
        seq.serialize_element(&self.latitude)?;
        if let Some(altitude) = &self.altitude {
            seq.serialize_element(altitude)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for Position {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let v = Vec::<f64>::deserialize(deserializer)?;
        match v.as_slice() {
            &[longitude, latitude] => Ok(Position::new(longitude, latitude)),
            &[longitude, latitude, altitude] => {
                Ok(Position::with_altitude(longitude, latitude, altitude))
            }
            _ => Err(serde::de::Error::invalid_length(
                v.len(),
                &"a position of 2 or 3 numbers",
            )),
        }
    }
}

/// * [RFC 7946 §3.2](https://datatracker.ietf.org/doc/html/rfc7946#section-3.2) `id` member
///
/// A numeric identifier never equals a string one: `4` and `"4"` differ.
/// A non-finite number cannot be encoded.
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureIdentifier {
    String(String),
    Number(f64),
}

// Decoded numbers are always finite and non-finite ones are refused on
// encode, so a NaN identifier never survives a round trip.
impl Eq for FeatureIdentifier {}

impl Hash for FeatureIdentifier {
    fn hash<H: Hasher>(&self, state: &mut H) {
        core::mem::discriminant(self).hash(state);
        match self {
            FeatureIdentifier::String(s) => s.hash(state),
            FeatureIdentifier::Number(n) => {
                // 0.0 == -0.0, so both must hash alike
                let n = if *n == 0.0 { 0.0 } else { *n };
                n.to_bits().hash(state);
            }
        }
    }
}

impl From<String> for FeatureIdentifier {
    fn from(value: String) -> Self {
        FeatureIdentifier::String(value)
    }
}

impl From<&str> for FeatureIdentifier {
    fn from(value: &str) -> Self {
        FeatureIdentifier::String(value.to_owned())
    }
}

impl From<f64> for FeatureIdentifier {
    fn from(value: f64) -> Self {
        FeatureIdentifier::Number(value)
    }
}

impl From<i64> for FeatureIdentifier {
    fn from(value: i64) -> Self {
        FeatureIdentifier::Number(value as f64)
    }
}

impl Serialize for FeatureIdentifier {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            FeatureIdentifier::String(s) => serializer.serialize_str(s),
            FeatureIdentifier::Number(n) if !n.is_finite() => Err(serde::ser::Error::custom(
                "feature identifier must be a finite number",
            )),
            // Integral ids go back out as integers: `4`, not `4.0`
            FeatureIdentifier::Number(n) if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER => {
                serializer.serialize_i64(*n as i64)
            }
            FeatureIdentifier::Number(n) => serializer.serialize_f64(*n),
        }
    }
}

impl<'de> Deserialize<'de> for FeatureIdentifier {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawIdentifier {
            String(String),
            Number(f64),
        }

        match RawIdentifier::deserialize(deserializer) {
            Ok(RawIdentifier::String(s)) => Ok(FeatureIdentifier::String(s)),
            Ok(RawIdentifier::Number(n)) => Ok(FeatureIdentifier::Number(n)),
            Err(_) => Err(serde::de::Error::custom("expected a string or a number")),
        }
    }
}

/// * [RFC 7946 §1.4](https://datatracker.ietf.org/doc/html/rfc7946#section-1.4) geometry types
///
/// The closed set of geometry discriminators. Decoding and encoding both
/// take their literals from [`GeometryKind::as_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryKind {
    Point,
    LineString,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    GeometryCollection,
}

impl GeometryKind {
    pub const ALL: [GeometryKind; 7] = [
        GeometryKind::Point,
        GeometryKind::LineString,
        GeometryKind::Polygon,
        GeometryKind::MultiPoint,
        GeometryKind::MultiLineString,
        GeometryKind::MultiPolygon,
        GeometryKind::GeometryCollection,
    ];

    /// The wire literal of this kind
    pub const fn as_str(self) -> &'static str {
        match self {
            GeometryKind::Point => "Point",
            GeometryKind::LineString => "LineString",
            GeometryKind::Polygon => "Polygon",
            GeometryKind::MultiPoint => "MultiPoint",
            GeometryKind::MultiLineString => "MultiLineString",
            GeometryKind::MultiPolygon => "MultiPolygon",
            GeometryKind::GeometryCollection => "GeometryCollection",
        }
    }
}

impl FromStr for GeometryKind {
    type Err = GeoJsonError;

    /// Matches `s` exactly (case-sensitive) against the seven literals
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GeometryKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| GeoJsonError::DiscriminatorMismatch {
                expected: "Geometry",
                found: s.to_owned(),
            })
    }
}

impl core::fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for GeometryKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// Discriminator of a top-level GeoJSON object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Geometry(GeometryKind),
    Feature,
    FeatureCollection,
}

impl Kind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Kind::Geometry(kind) => kind.as_str(),
            Kind::Feature => "Feature",
            Kind::FeatureCollection => "FeatureCollection",
        }
    }
}

impl From<GeometryKind> for Kind {
    fn from(kind: GeometryKind) -> Self {
        Kind::Geometry(kind)
    }
}

impl core::fmt::Display for Kind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Kind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
