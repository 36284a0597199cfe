//! Error types used by the crate.

use thiserror::Error;

use crate::decoder::JsonPath;

/// Error returned when a GeoJSON document cannot be turned into a layer.
///
/// Every variant except [`Syntax`](GeoJsonError::Syntax) carries the [`JsonPath`] of the node that failed
/// validation. Decoding stops at the first problem, so there is always exactly one error per failed parse.
#[derive(Debug, Error)]
pub enum GeoJsonError {
    /// The input is not well-formed JSON.
    #[error("invalid JSON: {0}")]
    Syntax(#[from] serde_json::Error),
    /// The `"type"` member is missing, not a string or not a GeoJSON type allowed at this place.
    #[error("{path}: expected {expected}, instead saw {found}")]
    InvalidType {
        /// Location of the object.
        path: JsonPath,
        /// What types are allowed here.
        expected: &'static str,
        /// What was found instead.
        found: String,
    },
    /// Coordinates are absent, nested to a wrong depth, not numeric or not finite.
    #[error("{path}: malformed coordinates: {reason}")]
    MalformedCoordinates {
        /// Location of the offending array or value.
        path: JsonPath,
        /// Description of the problem.
        reason: String,
    },
    /// A polygon ring has fewer than 4 positions or is not closed.
    #[error("{path}: invalid polygon ring: {reason}")]
    InvalidRing {
        /// Location of the ring.
        path: JsonPath,
        /// Description of the problem.
        reason: String,
    },
    /// A structurally required member is absent.
    #[error("{path}: missing required member \"{field}\"")]
    MissingField {
        /// Location of the object.
        path: JsonPath,
        /// Name of the member.
        field: &'static str,
    },
    /// A structural member is present but has a wrong JSON type.
    #[error("{path}: member \"{field}\" must be {expected}")]
    InvalidField {
        /// Location of the object.
        path: JsonPath,
        /// Name of the member.
        field: &'static str,
        /// Expected JSON type.
        expected: &'static str,
    },
    /// An object has a member that belongs to a different GeoJSON type.
    #[error("{path}: {type_name} cannot have a \"{member}\" member")]
    ForbiddenMember {
        /// Location of the object.
        path: JsonPath,
        /// GeoJSON type of the object.
        type_name: &'static str,
        /// Name of the member.
        member: &'static str,
    },
    /// Longitude or latitude is outside of the valid range.
    #[error("{path}: {axis} must be in the range [{min}, {max}], instead saw {value}")]
    CoordinateOutOfRange {
        /// Location of the value.
        path: JsonPath,
        /// `"longitude"` or `"latitude"`.
        axis: &'static str,
        /// The value found.
        value: f64,
        /// Lower bound of the range.
        min: f64,
        /// Upper bound of the range.
        max: f64,
    },
}

/// Kind of a [`GeoJsonError`] without details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`GeoJsonError::Syntax`].
    Syntax,
    /// See [`GeoJsonError::InvalidType`].
    InvalidType,
    /// See [`GeoJsonError::MalformedCoordinates`].
    MalformedCoordinates,
    /// See [`GeoJsonError::InvalidRing`].
    InvalidRing,
    /// See [`GeoJsonError::MissingField`].
    MissingField,
    /// See [`GeoJsonError::InvalidField`].
    InvalidField,
    /// See [`GeoJsonError::ForbiddenMember`].
    ForbiddenMember,
    /// See [`GeoJsonError::CoordinateOutOfRange`].
    CoordinateOutOfRange,
}

impl GeoJsonError {
    /// Kind of the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Syntax(_) => ErrorKind::Syntax,
            Self::InvalidType { .. } => ErrorKind::InvalidType,
            Self::MalformedCoordinates { .. } => ErrorKind::MalformedCoordinates,
            Self::InvalidRing { .. } => ErrorKind::InvalidRing,
            Self::MissingField { .. } => ErrorKind::MissingField,
            Self::InvalidField { .. } => ErrorKind::InvalidField,
            Self::ForbiddenMember { .. } => ErrorKind::ForbiddenMember,
            Self::CoordinateOutOfRange { .. } => ErrorKind::CoordinateOutOfRange,
        }
    }

    /// Location of the node that failed validation. `None` for syntax errors.
    pub fn path(&self) -> Option<&JsonPath> {
        match self {
            Self::Syntax(_) => None,
            Self::InvalidType { path, .. }
            | Self::MalformedCoordinates { path, .. }
            | Self::InvalidRing { path, .. }
            | Self::MissingField { path, .. }
            | Self::InvalidField { path, .. }
            | Self::ForbiddenMember { path, .. }
            | Self::CoordinateOutOfRange { path, .. } => Some(path),
        }
    }
}
