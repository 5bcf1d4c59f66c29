//! Discriminator dispatch and the coding traits shared by every GeoJSON type
//!
//! Decoding works on an already parsed [`serde_json::Value`] tree. Each
//! decoder reads the `"type"` member first, checks it against the literal
//! it accepts, and only then looks at the rest of the object. Encoders
//! write the same literal back, taken from
//! [`GeometryKind`](crate::model::GeometryKind) / [`Kind`](crate::model::Kind).
//!
//! Coding behavior is controlled per call through [`CodingOptions`];
//! nothing here reads process-wide state.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    Result,
    error::GeoJsonError,
    model::{
        Feature, FeatureCollection, GeoJsonObject, Geometry, GeometryCollection, JsonObject,
        LineString, MultiLineString, MultiPoint, MultiPolygon, Point, Polygon,
    },
};

/// Foreign member preservation for containers
pub mod foreign;

/// Member holding the discriminator of every GeoJSON object
pub const TYPE_KEY: &str = "type";

/// Per-call configuration of the coder
///
/// The default ignores foreign members on decode and emits none on encode.
///
/// ```
/// use geojson_codec::CodingOptions;
///
/// let options = CodingOptions::new().include_foreign_members(true);
/// assert!(options.includes_foreign_members());
/// assert!(!CodingOptions::default().includes_foreign_members());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CodingOptions {
    include_foreign_members: bool,
}

impl CodingOptions {
    /// Creates options with every optional behavior disabled
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options that round-trip foreign members
    pub fn with_foreign_members() -> Self {
        Self::new().include_foreign_members(true)
    }

    /// Enables or disables foreign member coding
    ///
    /// When enabled, members of `Feature`, `FeatureCollection` and
    /// `GeometryCollection` objects that are not part of their schema are
    /// collected on decode and written back on encode.
    pub fn include_foreign_members(mut self, enable: bool) -> Self {
        self.include_foreign_members = enable;
        self
    }

    /// Whether foreign members are decoded and encoded
    pub fn includes_foreign_members(&self) -> bool {
        self.include_foreign_members
    }
}

/// A type that can be decoded from a GeoJSON value tree
pub trait GeoJsonDecode: Sized {
    /// Decodes `value`, failing on a missing or mismatched discriminator
    /// or on a malformed known member
    fn decode(value: &Value, options: &CodingOptions) -> Result<Self>;

    /// Parses GeoJSON text and decodes it
    fn from_json_str(text: &str, options: &CodingOptions) -> Result<Self> {
        let value: Value = serde_json::from_str(text).map_err(GeoJsonError::SerdeError)?;
        Self::decode(&value, options)
    }

    /// Parses GeoJSON bytes and decodes them
    fn from_json_slice(bytes: &[u8], options: &CodingOptions) -> Result<Self> {
        let value: Value = serde_json::from_slice(bytes).map_err(GeoJsonError::SerdeError)?;
        Self::decode(&value, options)
    }
}

/// A type that can be encoded into a GeoJSON value tree
pub trait GeoJsonEncode {
    /// Encodes `self`, failing on a number JSON cannot represent
    fn encode(&self, options: &CodingOptions) -> Result<Value>;

    /// Encodes `self` as compact GeoJSON text
    fn to_json_string(&self, options: &CodingOptions) -> Result<String> {
        let value = self.encode(options)?;
        serde_json::to_string(&value).map_err(GeoJsonError::SerdeError)
    }

    /// Encodes `self` as compact GeoJSON bytes
    fn to_json_vec(&self, options: &CodingOptions) -> Result<Vec<u8>> {
        let value = self.encode(options)?;
        serde_json::to_vec(&value).map_err(GeoJsonError::SerdeError)
    }
}

/// ASCII record separator that prefixes each text in a GeoJSON text sequence
#[cfg(feature = "stream")]
const RECORD_SEPARATOR: char = '\u{1e}';

/// Reads newline-delimited GeoJSON texts
///
/// Blank lines are skipped, as is a leading record separator, so both
/// newline-delimited GeoJSON and RFC 8142 text sequences can be consumed.
#[cfg(feature = "stream")]
pub trait GeoJsonRead: std::io::BufRead {
    fn read_object<T>(&mut self, buf: &mut String, options: &CodingOptions) -> Result<Option<T>>
    where
        T: GeoJsonDecode,
    {
        loop {
            buf.clear();
            let bytes_read = self.read_line(buf).map_err(GeoJsonError::IoError)?;
            if bytes_read == 0 {
                return Ok(None); // EOF reached
            }

            let text = buf.trim_matches(|c: char| c == RECORD_SEPARATOR || c.is_whitespace());
            if text.is_empty() {
                continue;
            }

            return T::from_json_str(text, options).map(Some);
        }
    }
}

#[cfg(feature = "stream")]
impl<R: std::io::BufRead + ?Sized> GeoJsonRead for R {}

/// Writes GeoJSON texts, one per line
#[cfg(feature = "stream")]
pub trait GeoJsonWrite: std::io::Write {
    fn write_object(&mut self, object: &impl GeoJsonEncode, options: &CodingOptions) -> Result<()> {
        let mut bytes = object.to_json_vec(options)?;
        bytes.push(b'\n');
        self.write_all(&bytes).map_err(GeoJsonError::IoError)
    }
}

#[cfg(feature = "stream")]
impl<W: std::io::Write + ?Sized> GeoJsonWrite for W {}

/// Borrows `value` as a JSON object
pub(crate) fn as_object<'a>(value: &'a Value, context: &'static str) -> Result<&'a JsonObject> {
    value
        .as_object()
        .ok_or(GeoJsonError::NotAnObject { context })
}

/// Reads the discriminator without committing to a schema
pub(crate) fn discriminator<'a>(object: &'a JsonObject, context: &'static str) -> Result<&'a str> {
    match object.get(TYPE_KEY) {
        Some(Value::String(kind)) => Ok(kind),
        _ => Err(GeoJsonError::InvalidDiscriminator { context }),
    }
}

/// Requires the discriminator to be exactly `expected`
pub(crate) fn expect_discriminator(object: &JsonObject, expected: &'static str) -> Result<()> {
    let found = discriminator(object, expected)?;
    if found == expected {
        Ok(())
    } else {
        Err(GeoJsonError::DiscriminatorMismatch {
            expected,
            found: found.to_owned(),
        })
    }
}

pub(crate) fn required<'a>(object: &'a JsonObject, field: &'static str) -> Result<&'a Value> {
    object.get(field).ok_or(GeoJsonError::MissingField { field })
}

/// Looks up an optional member; explicit `null` counts as absent
pub(crate) fn optional<'a>(object: &'a JsonObject, field: &'static str) -> Option<&'a Value> {
    object.get(field).filter(|value| !value.is_null())
}

/// Deserializes a schema-typed member, reporting failures against `field`
pub(crate) fn deserialize_field<'a, T>(value: &'a Value, field: &'static str) -> Result<T>
where
    T: Deserialize<'a>,
{
    T::deserialize(value).map_err(|err| GeoJsonError::FieldTypeMismatch {
        field,
        reason: err.to_string(),
    })
}

/// Decodes every element of an array member; the first failure aborts
pub(crate) fn decode_array<T>(
    value: &Value,
    field: &'static str,
    options: &CodingOptions,
) -> Result<Vec<T>>
where
    T: GeoJsonDecode,
{
    let Value::Array(items) = value else {
        return Err(GeoJsonError::FieldTypeMismatch {
            field,
            reason: format!("expected an array, found {}", json_type_name(value)),
        });
    };

    items.iter().map(|item| T::decode(item, options)).collect()
}

pub(crate) fn encode_array<T>(items: &[T], options: &CodingOptions) -> Result<Vec<Value>>
where
    T: GeoJsonEncode,
{
    items.iter().map(|item| item.encode(options)).collect()
}

/// Serializes a wire struct into the object that foreign members are merged into
pub(crate) fn to_object(wire: &impl Serialize, context: &'static str) -> Result<JsonObject> {
    match serde_json::to_value(wire).map_err(GeoJsonError::SerdeError)? {
        Value::Object(object) => Ok(object),
        _ => Err(GeoJsonError::NotAnObject { context }),
    }
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Implements serde's traits on top of the coder with default options,
/// so model types can be embedded in other serde data structures
macro_rules! impl_serde_with_default_options {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Serialize for $ty {
                fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
                where
                    S: serde::Serializer,
                {
                    self.encode(&CodingOptions::default())
                        .map_err(serde::ser::Error::custom)?
                        .serialize(serializer)
                }
            }

            impl<'de> Deserialize<'de> for $ty {
                fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
                where
                    D: serde::Deserializer<'de>,
                {
                    let value = Value::deserialize(deserializer)?;
                    Self::decode(&value, &CodingOptions::default())
                        .map_err(serde::de::Error::custom)
                }
            }
        )+
    };
}

impl_serde_with_default_options!(
    Point,
    LineString,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    GeometryCollection,
    Geometry,
    Feature,
    FeatureCollection,
    GeoJsonObject,
);
