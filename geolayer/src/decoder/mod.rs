//! Validating decoder from a generic JSON tree into the typed [`GeoJsonNode`] tree.
//!
//! The decoder is fail-fast: the first structural problem aborts decoding of the whole document and is reported
//! together with the [`JsonPath`] of the offending node. There is no partial result, so a collection with one bad
//! member never produces the other members.

use geolayer_types::{
    AltitudeReference, Feature, FeatureCollection, FeatureId, GeoJsonNode, Geometry, GeometryKind,
    LineString, LinearRing, Polygon, Position, Properties,
};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::GeoJsonError;

mod path;
use path::Scope;
pub use path::{JsonPath, PathSegment};

const GEOMETRY_FOREIGN_MEMBERS: &[&str] = &["geometry", "properties", "features"];
const FEATURE_FOREIGN_MEMBERS: &[&str] = &["features"];
const COLLECTION_FOREIGN_MEMBERS: &[&str] = &["geometry", "properties", "coordinates", "geometries"];

/// Validation settings of the [`GeoJsonDecoder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DecoderOptions {
    /// Reject longitudes outside `[-180, 180]` and latitudes outside `[-90, 90]`.
    pub validate_ranges: bool,
    /// Reject objects that carry members of another GeoJSON type, e.g. a `Polygon` with a `properties` member.
    pub reject_foreign_members: bool,
    /// Require features to have a `properties` member. When not required, a missing member is the same as `null`.
    pub require_properties: bool,
}

impl Default for DecoderOptions {
    fn default() -> Self {
        Self {
            validate_ranges: true,
            reject_foreign_members: true,
            require_properties: true,
        }
    }
}

impl DecoderOptions {
    /// Sets [`DecoderOptions::validate_ranges`].
    pub fn with_validate_ranges(self, validate_ranges: bool) -> Self {
        Self {
            validate_ranges,
            ..self
        }
    }

    /// Sets [`DecoderOptions::reject_foreign_members`].
    pub fn with_reject_foreign_members(self, reject_foreign_members: bool) -> Self {
        Self {
            reject_foreign_members,
            ..self
        }
    }

    /// Sets [`DecoderOptions::require_properties`].
    pub fn with_require_properties(self, require_properties: bool) -> Self {
        Self {
            require_properties,
            ..self
        }
    }
}

/// Decodes generic JSON values into [`GeoJsonNode`]s.
#[derive(Debug, Clone, Default)]
pub struct GeoJsonDecoder {
    options: DecoderOptions,
}

impl GeoJsonDecoder {
    /// Creates a new decoder.
    pub fn new(options: DecoderOptions) -> Self {
        Self { options }
    }

    /// Options of the decoder.
    pub fn options(&self) -> &DecoderOptions {
        &self.options
    }

    /// Decodes the root of a GeoJSON document.
    pub fn decode(&self, root: &Value) -> Result<GeoJsonNode, GeoJsonError> {
        let mut walker = Walker {
            options: &self.options,
            surface_warned: false,
        };
        walker.node(root, Scope::Root)
    }

    /// Parses the text as JSON and decodes it.
    pub fn decode_str(&self, text: &str) -> Result<GeoJsonNode, GeoJsonError> {
        let root: Value = serde_json::from_str(text)?;
        self.decode(&root)
    }
}

/// Decodes the root of a GeoJSON document with default options.
pub fn decode(root: &Value) -> Result<GeoJsonNode, GeoJsonError> {
    GeoJsonDecoder::default().decode(root)
}

struct Walker<'o> {
    options: &'o DecoderOptions,
    surface_warned: bool,
}

impl Walker<'_> {
    fn node(&mut self, value: &Value, scope: Scope) -> Result<GeoJsonNode, GeoJsonError> {
        let object = object_of(value, scope)?;
        let node = match type_name(object, scope)? {
            "Feature" => GeoJsonNode::Feature(self.feature(object, scope)?),
            "FeatureCollection" => GeoJsonNode::FeatureCollection(self.collection(object, scope)?),
            other => match GeometryKind::from_type_name(other) {
                Some(kind) => GeoJsonNode::Geometry(self.geometry_object(object, kind, scope)?),
                None => {
                    return Err(GeoJsonError::InvalidType {
                        path: scope.key("type").to_path(),
                        expected: "a GeoJSON object type",
                        found: format!("\"{other}\""),
                    })
                }
            },
        };

        Ok(node)
    }

    fn collection(
        &mut self,
        object: &Map<String, Value>,
        scope: Scope,
    ) -> Result<FeatureCollection, GeoJsonError> {
        self.check_foreign_members(object, "FeatureCollection", COLLECTION_FOREIGN_MEMBERS, scope)?;

        let members = required_array(object, "features", scope)?;
        let features_scope = scope.key("features");
        let mut features = Vec::with_capacity(members.len());
        for (index, member) in members.iter().enumerate() {
            let member_scope = features_scope.index(index);
            let member_object = object_of(member, member_scope)?;
            let name = type_name(member_object, member_scope)?;
            if name != "Feature" {
                return Err(GeoJsonError::InvalidType {
                    path: member_scope.key("type").to_path(),
                    expected: "\"Feature\"",
                    found: format!("\"{name}\""),
                });
            }

            features.push(self.feature(member_object, member_scope)?);
        }

        Ok(FeatureCollection::from(features))
    }

    fn feature(
        &mut self,
        object: &Map<String, Value>,
        scope: Scope,
    ) -> Result<Feature, GeoJsonError> {
        self.check_foreign_members(object, "Feature", FEATURE_FOREIGN_MEMBERS, scope)?;

        let geometry = match object.get("geometry") {
            None => {
                return Err(GeoJsonError::MissingField {
                    path: scope.to_path(),
                    field: "geometry",
                })
            }
            Some(Value::Null) => None,
            Some(value) => Some(self.geometry(value, scope.key("geometry"))?),
        };

        let properties = match object.get("properties") {
            None if self.options.require_properties => {
                return Err(GeoJsonError::MissingField {
                    path: scope.to_path(),
                    field: "properties",
                })
            }
            None | Some(Value::Null) => Properties::new(),
            Some(Value::Object(properties)) => properties.clone(),
            Some(_) => {
                return Err(GeoJsonError::InvalidField {
                    path: scope.to_path(),
                    field: "properties",
                    expected: "an object or null",
                })
            }
        };

        let id = match object.get("id") {
            None | Some(Value::Null) => None,
            Some(Value::String(id)) => Some(FeatureId::String(id.clone())),
            Some(Value::Number(id)) => Some(FeatureId::Number(id.clone())),
            Some(_) => {
                return Err(GeoJsonError::InvalidField {
                    path: scope.to_path(),
                    field: "id",
                    expected: "a string or a number",
                })
            }
        };

        let feature = Feature::new(geometry, properties);
        Ok(match id {
            Some(id) => feature.with_id(id),
            None => feature,
        })
    }

    fn geometry(&mut self, value: &Value, scope: Scope) -> Result<Geometry, GeoJsonError> {
        let object = object_of(value, scope)?;
        let name = type_name(object, scope)?;
        let Some(kind) = GeometryKind::from_type_name(name) else {
            return Err(GeoJsonError::InvalidType {
                path: scope.key("type").to_path(),
                expected: "a GeoJSON geometry type",
                found: format!("\"{name}\""),
            });
        };

        self.geometry_object(object, kind, scope)
    }

    fn geometry_object(
        &mut self,
        object: &Map<String, Value>,
        kind: GeometryKind,
        scope: Scope,
    ) -> Result<Geometry, GeoJsonError> {
        self.check_foreign_members(object, kind.type_name(), GEOMETRY_FOREIGN_MEMBERS, scope)?;

        let coordinates_scope = scope.key("coordinates");
        let geometry = match kind {
            GeometryKind::GeometryCollection => {
                let members = required_array(object, "geometries", scope)?;
                let geometries_scope = scope.key("geometries");
                let geometries = members
                    .iter()
                    .enumerate()
                    .map(|(index, member)| self.geometry(member, geometries_scope.index(index)))
                    .collect::<Result<Vec<_>, _>>()?;

                return Ok(Geometry::GeometryCollection(geometries));
            }
            GeometryKind::Point => self
                .position(coordinates_of(object, kind, scope)?, coordinates_scope)
                .map(Geometry::Point),
            GeometryKind::MultiPoint => self
                .positions(coordinates_of(object, kind, scope)?, coordinates_scope)
                .map(|points| Geometry::MultiPoint(points.into())),
            GeometryKind::LineString => self
                .line(coordinates_of(object, kind, scope)?, coordinates_scope)
                .map(Geometry::LineString),
            GeometryKind::MultiLineString => self
                .each(
                    coordinates_of(object, kind, scope)?,
                    coordinates_scope,
                    "an array of lines",
                    Self::line,
                )
                .map(|lines| Geometry::MultiLineString(lines.into())),
            GeometryKind::Polygon => self
                .polygon(coordinates_of(object, kind, scope)?, coordinates_scope)
                .map(Geometry::Polygon),
            GeometryKind::MultiPolygon => self
                .each(
                    coordinates_of(object, kind, scope)?,
                    coordinates_scope,
                    "an array of polygons",
                    Self::polygon,
                )
                .map(|polygons| Geometry::MultiPolygon(polygons.into())),
        }
        .map_err(|err| with_depth_hint(err, kind))?;

        Ok(self.normalize_altitudes(geometry))
    }

    fn normalize_altitudes(&mut self, geometry: Geometry) -> Geometry {
        if !self.surface_warned
            && geometry.altitude_reference() == Some(AltitudeReference::Surface)
            && geometry.iter_positions().any(Position::has_altitude)
        {
            log::warn!(
                "Not all positions of a {} have an altitude. Altitudes of the whole geometry are dropped and it is placed on the surface.",
                geometry.kind()
            );
            self.surface_warned = true;
        }

        geometry.into_normalized_altitudes()
    }

    fn polygon(&mut self, value: &Value, scope: Scope) -> Result<Polygon, GeoJsonError> {
        let rings = self.each(value, scope, "an array of rings", Self::ring)?;
        Polygon::from_rings(rings).map_err(|_| GeoJsonError::MalformedCoordinates {
            path: scope.to_path(),
            reason: "polygon must contain at least one ring".to_string(),
        })
    }

    fn ring(&mut self, value: &Value, scope: Scope) -> Result<LinearRing, GeoJsonError> {
        let positions = self.positions(value, scope)?;
        LinearRing::new(positions).map_err(|err| GeoJsonError::InvalidRing {
            path: scope.to_path(),
            reason: err.to_string(),
        })
    }

    fn line(&mut self, value: &Value, scope: Scope) -> Result<LineString, GeoJsonError> {
        let positions = self.positions(value, scope)?;
        LineString::new(positions).map_err(|err| GeoJsonError::MalformedCoordinates {
            path: scope.to_path(),
            reason: format!("line string: {err}"),
        })
    }

    fn positions(&mut self, value: &Value, scope: Scope) -> Result<Vec<Position>, GeoJsonError> {
        self.each(value, scope, "an array of positions", |walker, value, scope| {
            walker.position(value, scope)
        })
    }

    fn each<T>(
        &mut self,
        value: &Value,
        scope: Scope,
        expected: &str,
        mut decode: impl FnMut(&mut Self, &Value, Scope) -> Result<T, GeoJsonError>,
    ) -> Result<Vec<T>, GeoJsonError> {
        coordinates_array(value, scope, expected)?
            .iter()
            .enumerate()
            .map(|(index, item)| decode(self, item, scope.index(index)))
            .collect()
    }

    fn position(&mut self, value: &Value, scope: Scope) -> Result<Position, GeoJsonError> {
        let components = coordinates_array(value, scope, "a position")?;
        if components.len() < 2 {
            return Err(GeoJsonError::MalformedCoordinates {
                path: scope.to_path(),
                reason: format!(
                    "position must contain at least longitude and latitude, instead saw {value}"
                ),
            });
        }

        let numbers = components
            .iter()
            .enumerate()
            .map(|(index, component)| coordinate(component, scope.index(index)))
            .collect::<Result<Vec<_>, _>>()?;

        let (lon, lat) = (numbers[0], numbers[1]);
        if self.options.validate_ranges {
            check_range(lon, "longitude", 180.0, scope.index(0))?;
            check_range(lat, "latitude", 90.0, scope.index(1))?;
        }

        Ok(match numbers.get(2) {
            Some(&alt) => Position::with_altitude(lon, lat, alt),
            None => Position::new(lon, lat),
        })
    }

    fn check_foreign_members(
        &self,
        object: &Map<String, Value>,
        type_name: &'static str,
        forbidden: &[&'static str],
        scope: Scope,
    ) -> Result<(), GeoJsonError> {
        if !self.options.reject_foreign_members {
            return Ok(());
        }

        match forbidden.iter().find(|member| object.contains_key(**member)) {
            Some(member) => Err(GeoJsonError::ForbiddenMember {
                path: scope.to_path(),
                type_name,
                member: *member,
            }),
            None => Ok(()),
        }
    }
}

fn object_of<'v>(value: &'v Value, scope: Scope) -> Result<&'v Map<String, Value>, GeoJsonError> {
    value.as_object().ok_or_else(|| GeoJsonError::InvalidType {
        path: scope.to_path(),
        expected: "a GeoJSON object",
        found: json_type(value).to_string(),
    })
}

fn type_name<'v>(object: &'v Map<String, Value>, scope: Scope) -> Result<&'v str, GeoJsonError> {
    match object.get("type") {
        Some(Value::String(name)) => Ok(name),
        Some(other) => Err(GeoJsonError::InvalidType {
            path: scope.key("type").to_path(),
            expected: "a string \"type\" member",
            found: json_type(other).to_string(),
        }),
        None => Err(GeoJsonError::InvalidType {
            path: scope.to_path(),
            expected: "a \"type\" member",
            found: "an object without it".to_string(),
        }),
    }
}

fn required_array<'v>(
    object: &'v Map<String, Value>,
    field: &'static str,
    scope: Scope,
) -> Result<&'v Vec<Value>, GeoJsonError> {
    match object.get(field) {
        None => Err(GeoJsonError::MissingField {
            path: scope.to_path(),
            field,
        }),
        Some(Value::Array(array)) => Ok(array),
        Some(_) => Err(GeoJsonError::InvalidField {
            path: scope.to_path(),
            field,
            expected: "an array",
        }),
    }
}

fn coordinates_of<'v>(
    object: &'v Map<String, Value>,
    kind: GeometryKind,
    scope: Scope,
) -> Result<&'v Value, GeoJsonError> {
    match object.get("coordinates") {
        None | Some(Value::Null) => Err(GeoJsonError::MalformedCoordinates {
            path: scope.to_path(),
            reason: format!("{kind} must have a \"coordinates\" array"),
        }),
        Some(coordinates) => Ok(coordinates),
    }
}

/// Adds the expected nesting of the coordinates to structural coordinate errors.
fn with_depth_hint(err: GeoJsonError, kind: GeometryKind) -> GeoJsonError {
    match (err, kind.coordinates_depth()) {
        (GeoJsonError::MalformedCoordinates { path, reason }, Some(depth))
            if reason.starts_with("expected") =>
        {
            GeoJsonError::MalformedCoordinates {
                path,
                reason: format!("{reason} ({kind} coordinates have nesting depth {depth})"),
            }
        }
        (err, _) => err,
    }
}

fn coordinates_array<'v>(
    value: &'v Value,
    scope: Scope,
    expected: &str,
) -> Result<&'v Vec<Value>, GeoJsonError> {
    value
        .as_array()
        .ok_or_else(|| GeoJsonError::MalformedCoordinates {
            path: scope.to_path(),
            reason: format!("expected {expected}, instead saw {}", json_type(value)),
        })
}

fn coordinate(value: &Value, scope: Scope) -> Result<f64, GeoJsonError> {
    let Value::Number(number) = value else {
        return Err(GeoJsonError::MalformedCoordinates {
            path: scope.to_path(),
            reason: format!("expected a number, instead saw {}", json_type(value)),
        });
    };

    number
        .as_f64()
        .filter(|v| v.is_finite())
        .ok_or_else(|| GeoJsonError::MalformedCoordinates {
            path: scope.to_path(),
            reason: format!("coordinate must be a finite number, instead saw {number}"),
        })
}

fn check_range(value: f64, axis: &'static str, limit: f64, scope: Scope) -> Result<(), GeoJsonError> {
    if (-limit..=limit).contains(&value) {
        Ok(())
    } else {
        Err(GeoJsonError::CoordinateOutOfRange {
            path: scope.to_path(),
            axis,
            value,
            min: -limit,
            max: limit,
        })
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
