//! # geojson-codec
//!
//! A typed in-memory model of the GeoJSON object grammar together with an
//! exact JSON coder for it.
//!
//! ## Overview
//!
//! [RFC 7946](https://datatracker.ietf.org/doc/html/rfc7946) describes a closed
//! family of JSON objects told apart by their `"type"` member: seven geometry
//! kinds, `Feature` and `FeatureCollection`. This library decodes such JSON into
//! Rust enums and structs by peeking at that discriminator, and encodes them back
//! with the same wire layout.
//!
//! Members a type does not declare ("foreign members", RFC 7946 §6.1) are ignored
//! by default. Passing [`CodingOptions::with_foreign_members`] to a decode or
//! encode call keeps them verbatim on `Feature`, `FeatureCollection` and
//! `GeometryCollection`.
//!
//! ## Example
//!
//! ```
//! use geojson_codec::{CodingOptions, GeoJsonDecode, GeoJsonEncode};
//! use geojson_codec::model::{Geometry, GeoJsonObject};
//!
//! # fn example() -> geojson_codec::Result<()> {
//! let text = r#"{"type":"Feature","id":4,"geometry":{"type":"Point","coordinates":[27.956,-26.152]}}"#;
//! let options = CodingOptions::default();
//!
//! let object = GeoJsonObject::from_json_str(text, &options)?;
//! if let GeoJsonObject::Feature(feature) = &object {
//!     assert!(matches!(feature.geometry, Some(Geometry::Point(_))));
//! }
//!
//! let encoded = object.to_json_string(&options)?;
//! assert!(encoded.contains(r#""id":4"#));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

use crate::error::GeoJsonError;

/// Discriminator dispatch, coding traits and the foreign member engine
pub mod codec;

/// Error types used throughout the library
pub mod error;

/// The typed GeoJSON model
pub mod model;

pub use codec::{CodingOptions, GeoJsonDecode, GeoJsonEncode};

#[cfg(feature = "stream")]
pub use codec::{GeoJsonRead, GeoJsonWrite};

/// Convenience type alias for Results with GeoJsonError
pub type Result<T> = core::result::Result<T, GeoJsonError>;
