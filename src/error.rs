//! Error types for GeoJSON coding operations
//!
//! This module defines the errors that can occur while reading GeoJSON
//! text, decoding it into the typed model, or encoding the model back.

/// Main error type for GeoJSON coding operations
///
/// Every failure is terminal: a decode that fails never yields a partially
/// built object, and an error raised deep inside a nested object (one
/// feature's geometry, say) is returned unchanged to the top-level caller.
#[derive(Debug)]
pub enum GeoJsonError {
    /// I/O error while reading or writing a GeoJSON stream
    IoError(std::io::Error),

    /// JSON syntax error, or a failure serializing a value tree
    SerdeError(serde_json::Error),

    /// A GeoJSON object was expected but the JSON value is not an object
    ///
    /// `context` names the type that was being decoded.
    NotAnObject { context: &'static str },

    /// The `type` member is absent or is not a string
    InvalidDiscriminator { context: &'static str },

    /// The `type` member is a string, but not the one the active decoder accepts
    ///
    /// Top-level decoding routes any unrecognized discriminator to the
    /// geometry decoder, so unknown types surface here with `expected`
    /// set to `"Geometry"`.
    DiscriminatorMismatch {
        expected: &'static str,
        found: String,
    },

    /// A required member is absent
    MissingField { field: &'static str },

    /// A known member is present but has the wrong JSON shape
    FieldTypeMismatch { field: &'static str, reason: String },
}

impl core::fmt::Display for GeoJsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeoJsonError::IoError(err) => write!(f, "IoError: {}", err),
            GeoJsonError::SerdeError(err) => write!(f, "SerdeError: {}", err),
            GeoJsonError::NotAnObject { context } => {
                write!(f, "NotAnObject: {} must be a JSON object", context)
            }
            GeoJsonError::InvalidDiscriminator { context } => {
                write!(f, "InvalidDiscriminator: {} requires a string \"type\" member", context)
            }
            GeoJsonError::DiscriminatorMismatch { expected, found } => {
                write!(f, "DiscriminatorMismatch: expected {}, found {:?}", expected, found)
            }
            GeoJsonError::MissingField { field } => write!(f, "MissingField: {}", field),
            GeoJsonError::FieldTypeMismatch { field, reason } => {
                write!(f, "FieldTypeMismatch: {}: {}", field, reason)
            }
        }
    }
}

impl core::error::Error for GeoJsonError {}
