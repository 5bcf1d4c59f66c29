//! The typed GeoJSON model
//!
//! The model mirrors the three levels of the GeoJSON grammar:
//!
//! - [`GeoJsonObject`]: anything GeoJSON, a geometry, a feature or a feature collection
//! - [`Geometry`]: one of the seven geometry kinds
//! - the leaf geometries ([`Point`], [`LineString`], ...) holding [`Position`]s
//!
//! All types are plain owned values. Anything convertible into a
//! [`Geometry`] or [`GeoJsonObject`] implements `Into` for it, so generic
//! code can accept `impl Into<GeoJsonObject>`.
//!
//! # References
//!
//! - [RFC 7946: The GeoJSON Format](https://datatracker.ietf.org/doc/html/rfc7946)

/// Feature and FeatureCollection
pub mod feature;
/// Geometry kinds and the geometry union
pub mod geometry;
/// The top-level GeoJSON union
pub mod object;
/// Positions, identifiers, discriminators and JSON values
pub mod types;

pub use feature::{Feature, FeatureCollection};
pub use geometry::{
    Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon, Point,
    Polygon,
};
pub use object::GeoJsonObject;
pub use types::{FeatureIdentifier, GeometryKind, JsonObject, JsonValue, Kind, Position, Ring};
