//! Geometry objects
//!
//! Six geometry kinds wrap (nested) sequences of [`Position`]s under a
//! `coordinates` member; `GeometryCollection` wraps other geometries under
//! `geometries` and may nest itself to any depth.
//!
//! Reference: [RFC 7946 §3.1](https://datatracker.ietf.org/doc/html/rfc7946#section-3.1)

use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::{
    Result,
    codec::{
        CodingOptions, GeoJsonDecode, GeoJsonEncode, TYPE_KEY, as_object, decode_array,
        deserialize_field, discriminator, encode_array, expect_discriminator,
        foreign::ForeignMemberContainer, required, to_object,
    },
};

use super::{GeoJsonObject, GeometryKind, JsonObject, Position, Ring};

const COORDINATES: &str = "coordinates";
const GEOMETRIES: &str = "geometries";

/// A single position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub coordinates: Position,
}

/// Two or more positions, each connected to the next
#[derive(Debug, Clone, PartialEq)]
pub struct LineString {
    pub coordinates: Vec<Position>,
}

/// An exterior ring followed by any interior rings
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub coordinates: Vec<Ring>,
}

/// Positions that are disconnected but related
#[derive(Debug, Clone, PartialEq)]
pub struct MultiPoint {
    pub coordinates: Vec<Position>,
}

/// Line strings that are disconnected but related
#[derive(Debug, Clone, PartialEq)]
pub struct MultiLineString {
    pub coordinates: Vec<Vec<Position>>,
}

/// Polygons that are disconnected but related
#[derive(Debug, Clone, PartialEq)]
pub struct MultiPolygon {
    pub coordinates: Vec<Vec<Ring>>,
}

/// A heterogeneous collection of related geometries
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GeometryCollection {
    pub geometries: Vec<Geometry>,
    /// Members outside the schema, kept only when foreign member coding is enabled
    pub foreign_members: JsonObject,
}

impl Point {
    pub fn new(coordinates: impl Into<Position>) -> Self {
        Self {
            coordinates: coordinates.into(),
        }
    }
}

impl LineString {
    pub fn new(coordinates: Vec<Position>) -> Self {
        Self { coordinates }
    }
}

impl Polygon {
    pub fn new(coordinates: Vec<Ring>) -> Self {
        Self { coordinates }
    }
}

impl MultiPoint {
    pub fn new(coordinates: Vec<Position>) -> Self {
        Self { coordinates }
    }
}

impl MultiLineString {
    pub fn new(coordinates: Vec<Vec<Position>>) -> Self {
        Self { coordinates }
    }
}

impl MultiPolygon {
    pub fn new(coordinates: Vec<Vec<Ring>>) -> Self {
        Self { coordinates }
    }
}

impl GeometryCollection {
    pub fn new(geometries: Vec<Geometry>) -> Self {
        Self {
            geometries,
            foreign_members: JsonObject::new(),
        }
    }
}

/// Lowers each polygon of a multipolygon to its rings
///
/// A polygon with a single ring becomes a `LineString`; any other polygon
/// becomes a `MultiLineString` holding all of its rings.
impl From<MultiPolygon> for GeometryCollection {
    fn from(multi_polygon: MultiPolygon) -> Self {
        let geometries = multi_polygon
            .coordinates
            .into_iter()
            .map(|mut rings| {
                if rings.len() == 1 {
                    Geometry::LineString(LineString::new(rings.remove(0)))
                } else {
                    Geometry::MultiLineString(MultiLineString::new(rings))
                }
            })
            .collect();

        GeometryCollection::new(geometries)
    }
}

/// Any of the seven geometry kinds
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(Point),
    LineString(LineString),
    Polygon(Polygon),
    MultiPoint(MultiPoint),
    MultiLineString(MultiLineString),
    MultiPolygon(MultiPolygon),
    GeometryCollection(GeometryCollection),
}

impl Geometry {
    pub fn new(geometry: impl Into<Geometry>) -> Self {
        geometry.into()
    }

    pub fn kind(&self) -> GeometryKind {
        match self {
            Geometry::Point(_) => GeometryKind::Point,
            Geometry::LineString(_) => GeometryKind::LineString,
            Geometry::Polygon(_) => GeometryKind::Polygon,
            Geometry::MultiPoint(_) => GeometryKind::MultiPoint,
            Geometry::MultiLineString(_) => GeometryKind::MultiLineString,
            Geometry::MultiPolygon(_) => GeometryKind::MultiPolygon,
            Geometry::GeometryCollection(_) => GeometryKind::GeometryCollection,
        }
    }
}

/// Wires a leaf geometry into the `Geometry` and `GeoJsonObject` unions
macro_rules! geometry_variant {
    ($($variant:ident),+ $(,)?) => {
        $(
            impl From<$variant> for Geometry {
                fn from(geometry: $variant) -> Self {
                    Geometry::$variant(geometry)
                }
            }

            impl From<$variant> for GeoJsonObject {
                fn from(geometry: $variant) -> Self {
                    GeoJsonObject::Geometry(Geometry::$variant(geometry))
                }
            }

            /// Returns the geometry unchanged when it is another kind
            impl TryFrom<Geometry> for $variant {
                type Error = Geometry;

                fn try_from(geometry: Geometry) -> core::result::Result<Self, Self::Error> {
                    match geometry {
                        Geometry::$variant(geometry) => Ok(geometry),
                        other => Err(other),
                    }
                }
            }
        )+
    };
}

geometry_variant!(
    Point,
    LineString,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    GeometryCollection,
);

#[derive(Serialize)]
struct CoordinatesWire<'a, C> {
    #[serde(rename = "type")]
    kind: GeometryKind,
    coordinates: &'a C,
}

#[derive(Serialize)]
struct GeometryCollectionWire {
    #[serde(rename = "type")]
    kind: GeometryKind,
    geometries: Vec<Value>,
}

fn decode_coordinates<C>(value: &Value, kind: GeometryKind) -> Result<C>
where
    C: DeserializeOwned,
{
    let object = as_object(value, kind.as_str())?;
    expect_discriminator(object, kind.as_str())?;
    deserialize_field(required(object, COORDINATES)?, COORDINATES)
}

fn encode_coordinates<C>(kind: GeometryKind, coordinates: &C) -> Result<Value>
where
    C: Serialize,
{
    let wire = CoordinatesWire { kind, coordinates };
    to_object(&wire, kind.as_str()).map(Value::Object)
}

impl GeoJsonDecode for Point {
    fn decode(value: &Value, _options: &CodingOptions) -> Result<Self> {
        decode_coordinates::<Position>(value, GeometryKind::Point).map(Point::new)
    }
}

impl GeoJsonEncode for Point {
    fn encode(&self, _options: &CodingOptions) -> Result<Value> {
        encode_coordinates(GeometryKind::Point, &self.coordinates)
    }
}

impl GeoJsonDecode for LineString {
    fn decode(value: &Value, _options: &CodingOptions) -> Result<Self> {
        decode_coordinates(value, GeometryKind::LineString).map(LineString::new)
    }
}

impl GeoJsonEncode for LineString {
    fn encode(&self, _options: &CodingOptions) -> Result<Value> {
        encode_coordinates(GeometryKind::LineString, &self.coordinates)
    }
}

impl GeoJsonDecode for Polygon {
    fn decode(value: &Value, _options: &CodingOptions) -> Result<Self> {
        decode_coordinates(value, GeometryKind::Polygon).map(Polygon::new)
    }
}

impl GeoJsonEncode for Polygon {
    fn encode(&self, _options: &CodingOptions) -> Result<Value> {
        encode_coordinates(GeometryKind::Polygon, &self.coordinates)
    }
}

impl GeoJsonDecode for MultiPoint {
    fn decode(value: &Value, _options: &CodingOptions) -> Result<Self> {
        decode_coordinates(value, GeometryKind::MultiPoint).map(MultiPoint::new)
    }
}

impl GeoJsonEncode for MultiPoint {
    fn encode(&self, _options: &CodingOptions) -> Result<Value> {
        encode_coordinates(GeometryKind::MultiPoint, &self.coordinates)
    }
}

impl GeoJsonDecode for MultiLineString {
    fn decode(value: &Value, _options: &CodingOptions) -> Result<Self> {
        decode_coordinates(value, GeometryKind::MultiLineString).map(MultiLineString::new)
    }
}

impl GeoJsonEncode for MultiLineString {
    fn encode(&self, _options: &CodingOptions) -> Result<Value> {
        encode_coordinates(GeometryKind::MultiLineString, &self.coordinates)
    }
}

impl GeoJsonDecode for MultiPolygon {
    fn decode(value: &Value, _options: &CodingOptions) -> Result<Self> {
        decode_coordinates(value, GeometryKind::MultiPolygon).map(MultiPolygon::new)
    }
}

impl GeoJsonEncode for MultiPolygon {
    fn encode(&self, _options: &CodingOptions) -> Result<Value> {
        encode_coordinates(GeometryKind::MultiPolygon, &self.coordinates)
    }
}

impl ForeignMemberContainer for GeometryCollection {
    fn is_well_known(key: &str) -> bool {
        matches!(key, TYPE_KEY | GEOMETRIES)
    }

    fn foreign_members(&self) -> &JsonObject {
        &self.foreign_members
    }

    fn foreign_members_mut(&mut self) -> &mut JsonObject {
        &mut self.foreign_members
    }
}

impl GeoJsonDecode for GeometryCollection {
    fn decode(value: &Value, options: &CodingOptions) -> Result<Self> {
        let kind = GeometryKind::GeometryCollection;
        let object = as_object(value, kind.as_str())?;
        expect_discriminator(object, kind.as_str())?;

        let geometries = decode_array(required(object, GEOMETRIES)?, GEOMETRIES, options)?;
        let mut collection = GeometryCollection::new(geometries);
        collection.decode_foreign_members(object, options);
        Ok(collection)
    }
}

impl GeoJsonEncode for GeometryCollection {
    fn encode(&self, options: &CodingOptions) -> Result<Value> {
        let kind = GeometryKind::GeometryCollection;
        let wire = GeometryCollectionWire {
            kind,
            geometries: encode_array(&self.geometries, options)?,
        };

        let mut object = to_object(&wire, kind.as_str())?;
        self.encode_foreign_members(&mut object, options);
        Ok(Value::Object(object))
    }
}

impl GeoJsonDecode for Geometry {
    fn decode(value: &Value, options: &CodingOptions) -> Result<Self> {
        let object = as_object(value, "Geometry")?;
        let kind: GeometryKind = discriminator(object, "Geometry")?.parse()?;
        tracing::trace!(kind = kind.as_str(), "decoding geometry");

        Ok(match kind {
            GeometryKind::Point => Geometry::Point(Point::decode(value, options)?),
            GeometryKind::LineString => Geometry::LineString(LineString::decode(value, options)?),
            GeometryKind::Polygon => Geometry::Polygon(Polygon::decode(value, options)?),
            GeometryKind::MultiPoint => Geometry::MultiPoint(MultiPoint::decode(value, options)?),
            GeometryKind::MultiLineString => {
                Geometry::MultiLineString(MultiLineString::decode(value, options)?)
            }
            GeometryKind::MultiPolygon => {
                Geometry::MultiPolygon(MultiPolygon::decode(value, options)?)
            }
            GeometryKind::GeometryCollection => {
                Geometry::GeometryCollection(GeometryCollection::decode(value, options)?)
            }
        })
    }
}

impl GeoJsonEncode for Geometry {
    fn encode(&self, options: &CodingOptions) -> Result<Value> {
        match self {
            Geometry::Point(point) => point.encode(options),
            Geometry::LineString(line_string) => line_string.encode(options),
            Geometry::Polygon(polygon) => polygon.encode(options),
            Geometry::MultiPoint(multi_point) => multi_point.encode(options),
            Geometry::MultiLineString(multi_line_string) => multi_line_string.encode(options),
            Geometry::MultiPolygon(multi_polygon) => multi_polygon.encode(options),
            Geometry::GeometryCollection(collection) => collection.encode(options),
        }
    }
}
