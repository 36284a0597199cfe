//! Features, feature collections and the root node of a GeoJSON document.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::Geometry;

/// Free-form properties of a feature.
pub type Properties = Map<String, Value>;

/// Identifier of a feature.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum FeatureId {
    /// String identifier.
    String(String),
    /// Numeric identifier.
    Number(serde_json::Number),
}

/// A geometry together with its properties.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Feature {
    /// Identifier of the feature, if the document sets one.
    pub id: Option<FeatureId>,
    /// Geometry of the feature. Features with `null` geometry are valid, but have nothing to display.
    pub geometry: Option<Geometry>,
    /// Properties of the feature. A `null` properties member is represented by an empty map.
    pub properties: Properties,
}

impl Feature {
    /// Creates a new feature without id.
    pub fn new(geometry: Option<Geometry>, properties: Properties) -> Self {
        Self {
            id: None,
            geometry,
            properties,
        }
    }

    /// Returns the feature with the given id.
    pub fn with_id(self, id: FeatureId) -> Self {
        Self {
            id: Some(id),
            ..self
        }
    }
}

/// Ordered set of features.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct FeatureCollection {
    /// Features in document order.
    pub features: Vec<Feature>,
}

impl From<Vec<Feature>> for FeatureCollection {
    fn from(features: Vec<Feature>) -> Self {
        Self { features }
    }
}

/// Root object of a GeoJSON document.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub enum GeoJsonNode {
    /// A bare geometry object.
    Geometry(Geometry),
    /// A single feature.
    Feature(Feature),
    /// A collection of features.
    FeatureCollection(FeatureCollection),
}

impl From<Geometry> for GeoJsonNode {
    fn from(value: Geometry) -> Self {
        Self::Geometry(value)
    }
}

impl From<Feature> for GeoJsonNode {
    fn from(value: Feature) -> Self {
        Self::Feature(value)
    }
}

impl From<FeatureCollection> for GeoJsonNode {
    fn from(value: FeatureCollection) -> Self {
        Self::FeatureCollection(value)
    }
}
