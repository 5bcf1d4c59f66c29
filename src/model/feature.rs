//! Feature and FeatureCollection objects
//!
//! Reference: [RFC 7946 §3.2, §3.3](https://datatracker.ietf.org/doc/html/rfc7946#section-3.2)

use serde::Serialize;
use serde_json::Value;
use serde_with::skip_serializing_none;

use crate::{
    Result,
    codec::{
        CodingOptions, GeoJsonDecode, GeoJsonEncode, TYPE_KEY, as_object, decode_array,
        deserialize_field, encode_array, expect_discriminator, foreign::ForeignMemberContainer,
        json_type_name, optional, required, to_object,
    },
    error::GeoJsonError,
};

use super::{FeatureIdentifier, GeoJsonObject, Geometry, JsonObject, Kind};

const GEOMETRY: &str = "geometry";
const PROPERTIES: &str = "properties";
const ID: &str = "id";
const FEATURES: &str = "features";

/// A spatially bounded thing
///
/// A feature without a geometry is "unlocated"; it still encodes a
/// `"geometry": null` member.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Feature {
    /// Commonly identifies the feature within its data set; uniqueness is not checked
    pub identifier: Option<FeatureIdentifier>,
    /// Arbitrary attributes; `None` differs from an empty object
    pub properties: Option<JsonObject>,
    pub geometry: Option<Geometry>,
    /// Members outside the schema, kept only when foreign member coding is enabled
    pub foreign_members: JsonObject,
}

impl Feature {
    /// Creates a feature located at `geometry`
    pub fn new(geometry: impl Into<Geometry>) -> Self {
        Self {
            geometry: Some(geometry.into()),
            ..Default::default()
        }
    }

    /// Creates a feature without a geometry
    pub fn unlocated() -> Self {
        Self::default()
    }

    pub fn with_identifier(mut self, identifier: impl Into<FeatureIdentifier>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }

    pub fn with_properties(mut self, properties: JsonObject) -> Self {
        self.properties = Some(properties);
        self
    }
}

/// An ordered collection of features
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
    /// Members outside the schema, kept only when foreign member coding is enabled
    pub foreign_members: JsonObject,
}

impl FeatureCollection {
    pub fn new(features: Vec<Feature>) -> Self {
        Self {
            features,
            foreign_members: JsonObject::new(),
        }
    }
}

impl FromIterator<Feature> for FeatureCollection {
    fn from_iter<I: IntoIterator<Item = Feature>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl From<Feature> for GeoJsonObject {
    fn from(feature: Feature) -> Self {
        GeoJsonObject::Feature(feature)
    }
}

impl From<FeatureCollection> for GeoJsonObject {
    fn from(collection: FeatureCollection) -> Self {
        GeoJsonObject::FeatureCollection(collection)
    }
}

/// Wire layout of a feature
///
/// `geometry` is always written (as `null` when absent) while `properties`
/// and `id` are omitted entirely when absent.
#[skip_serializing_none]
#[derive(Serialize)]
struct FeatureWire<'a> {
    #[serde(rename = "type")]
    kind: Kind,
    geometry: Value,
    properties: Option<&'a JsonObject>,
    id: Option<&'a FeatureIdentifier>,
}

#[derive(Serialize)]
struct FeatureCollectionWire {
    #[serde(rename = "type")]
    kind: Kind,
    features: Vec<Value>,
}

impl ForeignMemberContainer for Feature {
    fn is_well_known(key: &str) -> bool {
        matches!(key, TYPE_KEY | GEOMETRY | PROPERTIES | ID)
    }

    fn foreign_members(&self) -> &JsonObject {
        &self.foreign_members
    }

    fn foreign_members_mut(&mut self) -> &mut JsonObject {
        &mut self.foreign_members
    }
}

impl ForeignMemberContainer for FeatureCollection {
    fn is_well_known(key: &str) -> bool {
        matches!(key, TYPE_KEY | FEATURES)
    }

    fn foreign_members(&self) -> &JsonObject {
        &self.foreign_members
    }

    fn foreign_members_mut(&mut self) -> &mut JsonObject {
        &mut self.foreign_members
    }
}

impl GeoJsonDecode for Feature {
    fn decode(value: &Value, options: &CodingOptions) -> Result<Self> {
        let kind = Kind::Feature.as_str();
        let object = as_object(value, kind)?;
        expect_discriminator(object, kind)?;

        let geometry = optional(object, GEOMETRY)
            .map(|geometry| Geometry::decode(geometry, options))
            .transpose()?;

        let properties = optional(object, PROPERTIES)
            .map(|properties| match properties {
                Value::Object(properties) => Ok(properties.clone()),
                other => Err(GeoJsonError::FieldTypeMismatch {
                    field: PROPERTIES,
                    reason: format!("expected an object, found {}", json_type_name(other)),
                }),
            })
            .transpose()?;

        let identifier = optional(object, ID)
            .map(|id| deserialize_field::<FeatureIdentifier>(id, ID))
            .transpose()?;

        let mut feature = Feature {
            identifier,
            properties,
            geometry,
            foreign_members: JsonObject::new(),
        };
        feature.decode_foreign_members(object, options);
        Ok(feature)
    }
}

impl GeoJsonEncode for Feature {
    fn encode(&self, options: &CodingOptions) -> Result<Value> {
        let geometry = match &self.geometry {
            Some(geometry) => geometry.encode(options)?,
            None => Value::Null,
        };

        let wire = FeatureWire {
            kind: Kind::Feature,
            geometry,
            properties: self.properties.as_ref(),
            id: self.identifier.as_ref(),
        };

        let mut object = to_object(&wire, Kind::Feature.as_str())?;
        self.encode_foreign_members(&mut object, options);
        Ok(Value::Object(object))
    }
}

impl GeoJsonDecode for FeatureCollection {
    fn decode(value: &Value, options: &CodingOptions) -> Result<Self> {
        let kind = Kind::FeatureCollection.as_str();
        let object = as_object(value, kind)?;
        expect_discriminator(object, kind)?;

        let features: Vec<Feature> = decode_array(required(object, FEATURES)?, FEATURES, options)?;
        tracing::trace!(features = features.len(), "decoded feature collection");

        let mut collection = FeatureCollection::new(features);
        collection.decode_foreign_members(object, options);
        Ok(collection)
    }
}

impl GeoJsonEncode for FeatureCollection {
    fn encode(&self, options: &CodingOptions) -> Result<Value> {
        let wire = FeatureCollectionWire {
            kind: Kind::FeatureCollection,
            features: encode_array(&self.features, options)?,
        };

        let mut object = to_object(&wire, Kind::FeatureCollection.as_str())?;
        self.encode_foreign_members(&mut object, options);
        Ok(Value::Object(object))
    }
}
