//! The top-level GeoJSON union
//!
//! Reference: [RFC 7946 §3](https://datatracker.ietf.org/doc/html/rfc7946#section-3)

use std::str::FromStr;

use serde_json::Value;

use crate::{
    Result,
    codec::{CodingOptions, GeoJsonDecode, GeoJsonEncode, as_object, discriminator},
    error::GeoJsonError,
};

use super::{Feature, FeatureCollection, Geometry, Kind};

/// Any GeoJSON object: a geometry, a feature or a feature collection
///
/// Decoding dispatches on the `type` member. `"Feature"` and
/// `"FeatureCollection"` select those variants; every other string is
/// handed to the geometry decoder, so an unknown type fails as a geometry
/// with [`GeoJsonError::DiscriminatorMismatch`].
#[derive(Debug, Clone, PartialEq)]
pub enum GeoJsonObject {
    Geometry(Geometry),
    Feature(Feature),
    FeatureCollection(FeatureCollection),
}

impl GeoJsonObject {
    /// Wraps anything convertible into a GeoJSON object
    pub fn new(object: impl Into<GeoJsonObject>) -> Self {
        object.into()
    }

    pub fn kind(&self) -> Kind {
        match self {
            GeoJsonObject::Geometry(geometry) => Kind::Geometry(geometry.kind()),
            GeoJsonObject::Feature(_) => Kind::Feature,
            GeoJsonObject::FeatureCollection(_) => Kind::FeatureCollection,
        }
    }
}

impl From<Geometry> for GeoJsonObject {
    fn from(geometry: Geometry) -> Self {
        GeoJsonObject::Geometry(geometry)
    }
}

impl GeoJsonDecode for GeoJsonObject {
    fn decode(value: &Value, options: &CodingOptions) -> Result<Self> {
        let object = as_object(value, "GeoJSON object")?;
        let kind = discriminator(object, "GeoJSON object")?;

        if kind == Kind::Feature.as_str() {
            tracing::trace!("decoding feature");
            Feature::decode(value, options).map(GeoJsonObject::Feature)
        } else if kind == Kind::FeatureCollection.as_str() {
            tracing::trace!("decoding feature collection");
            FeatureCollection::decode(value, options).map(GeoJsonObject::FeatureCollection)
        } else {
            Geometry::decode(value, options).map(GeoJsonObject::Geometry)
        }
    }
}

impl GeoJsonEncode for GeoJsonObject {
    fn encode(&self, options: &CodingOptions) -> Result<Value> {
        match self {
            GeoJsonObject::Geometry(geometry) => geometry.encode(options),
            GeoJsonObject::Feature(feature) => feature.encode(options),
            GeoJsonObject::FeatureCollection(collection) => collection.encode(options),
        }
    }
}

/// Parses GeoJSON text with default [`CodingOptions`]
impl FromStr for GeoJsonObject {
    type Err = GeoJsonError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_json_str(s, &CodingOptions::default())
    }
}
