//! Conversion of the decoded GeoJSON tree into map primitives.
//!
//! The tree is traversed depth-first in document order, so the same document always produces the same primitives
//! in the same order.

use geolayer_types::{
    Feature, FeatureCollection, GeoJsonNode, Geometry, LineString, Polygon, Position, Properties,
};
use serde_json::Value;

use crate::primitive::{IconPrimitive, MapPrimitive, PolygonPrimitive, PolylinePrimitive};
use crate::style::{keys, StyleAttributes, StyleDefaults};

/// Maps [`GeoJsonNode`]s into [`MapPrimitive`]s, resolving the style of every feature with the given defaults.
#[derive(Debug, Clone, Default)]
pub struct PrimitiveMapper {
    defaults: StyleDefaults,
}

impl PrimitiveMapper {
    /// Creates a new mapper.
    pub fn new(defaults: StyleDefaults) -> Self {
        Self { defaults }
    }

    /// Style defaults of the mapper.
    pub fn defaults(&self) -> &StyleDefaults {
        &self.defaults
    }

    /// Maps the node into primitives.
    ///
    /// `inherited` is the property set used for bare geometries. Features always use their own properties.
    pub fn map_to_primitives(&self, node: &GeoJsonNode, inherited: &Properties) -> Vec<MapPrimitive> {
        let mut primitives = vec![];
        match node {
            GeoJsonNode::Geometry(geometry) => {
                self.map_geometry(geometry, &ActiveStyle::new(&self.defaults, inherited), &mut primitives)
            }
            GeoJsonNode::Feature(feature) => self.map_feature(feature, &mut primitives),
            GeoJsonNode::FeatureCollection(collection) => {
                self.map_collection(collection, &mut primitives)
            }
        }

        primitives
    }

    fn map_collection(&self, collection: &FeatureCollection, primitives: &mut Vec<MapPrimitive>) {
        for feature in &collection.features {
            self.map_feature(feature, primitives);
        }
    }

    fn map_feature(&self, feature: &Feature, primitives: &mut Vec<MapPrimitive>) {
        let Some(geometry) = &feature.geometry else {
            return;
        };

        let style = ActiveStyle::new(&self.defaults, &feature.properties);
        self.map_geometry(geometry, &style, primitives);
    }

    fn map_geometry(&self, geometry: &Geometry, style: &ActiveStyle, primitives: &mut Vec<MapPrimitive>) {
        match geometry {
            Geometry::Point(position) => primitives.push(style.icon(*position).into()),
            Geometry::MultiPoint(points) => {
                primitives.extend(points.iter_points().map(|p| style.icon(*p).into()))
            }
            Geometry::LineString(line) => primitives.push(style.polyline(line).into()),
            Geometry::MultiLineString(lines) => {
                primitives.extend(lines.lines().map(|line| style.polyline(line).into()))
            }
            Geometry::Polygon(polygon) => primitives.push(style.polygon(polygon).into()),
            Geometry::MultiPolygon(polygons) => primitives.extend(
                polygons
                    .polygons()
                    .map(|polygon| style.polygon(polygon).into()),
            ),
            Geometry::GeometryCollection(members) => {
                for member in members {
                    self.map_geometry(member, style, primitives);
                }
            }
        }
    }
}

/// Maps the node into primitives using the default style.
pub fn map_to_primitives(node: &GeoJsonNode, inherited: &Properties) -> Vec<MapPrimitive> {
    PrimitiveMapper::default().map_to_primitives(node, inherited)
}

/// Style of the feature being mapped, resolved once for all its primitives.
struct ActiveStyle<'a> {
    attributes: StyleAttributes,
    title: Option<&'a str>,
    subtitle: Option<&'a str>,
}

impl<'a> ActiveStyle<'a> {
    fn new(defaults: &StyleDefaults, properties: &'a Properties) -> Self {
        Self {
            attributes: defaults.resolve(properties),
            title: properties.get(keys::TITLE).and_then(Value::as_str),
            subtitle: properties.get(keys::DESCRIPTION).and_then(Value::as_str),
        }
    }

    fn icon(&self, position: Position) -> IconPrimitive {
        IconPrimitive {
            visible: self.attributes.visible,
            ..IconPrimitive::new(position, self.attributes.marker_color)
                .with_title(self.title.map(str::to_owned))
                .with_subtitle(self.subtitle.map(str::to_owned))
        }
    }

    fn polyline(&self, line: &LineString) -> PolylinePrimitive {
        PolylinePrimitive {
            visible: self.attributes.visible,
            ..PolylinePrimitive::new(line, self.attributes.stroke)
        }
    }

    fn polygon(&self, polygon: &Polygon) -> PolygonPrimitive {
        PolygonPrimitive {
            visible: self.attributes.visible,
            ..PolygonPrimitive::new(polygon, self.attributes.fill_color, self.attributes.stroke)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::decode;
    use crate::primitive::PrimitiveKind;
    use crate::tests::{FEATURE_COLLECTION, GEOMETRY_COLLECTION, MIXED_KINDS, POLYGON_WITH_HOLE};
    use crate::Color;
    use approx::assert_relative_eq;
    use geolayer_types::AltitudeReference;
    use serde_json::json;

    fn node(text: &str) -> GeoJsonNode {
        let value: Value = serde_json::from_str(text).expect("invalid test document");
        decode(&value).expect("test document must decode")
    }

    fn kinds(primitives: &[MapPrimitive]) -> Vec<PrimitiveKind> {
        primitives.iter().map(MapPrimitive::kind).collect()
    }

    #[test]
    fn primitives_follow_document_order() {
        let primitives = map_to_primitives(&node(MIXED_KINDS), &Properties::new());
        assert_eq!(
            kinds(&primitives),
            vec![
                PrimitiveKind::Polyline,
                PrimitiveKind::Icon,
                PrimitiveKind::Polyline,
                PrimitiveKind::Polyline,
                PrimitiveKind::Polygon,
                PrimitiveKind::Icon,
            ]
        );

        let second_line = primitives[3].as_polyline().expect("polyline");
        assert_relative_eq!(second_line.path[0].lon(), 5.0);
    }

    #[test]
    fn collection_is_sum_of_features() {
        let GeoJsonNode::FeatureCollection(collection) = node(MIXED_KINDS) else {
            panic!("feature collection expected");
        };

        let total = map_to_primitives(&GeoJsonNode::from(collection.clone()), &Properties::new()).len();
        let sum: usize = collection
            .features
            .into_iter()
            .map(|f| map_to_primitives(&GeoJsonNode::from(f), &Properties::new()).len())
            .sum();

        assert_eq!(total, 6);
        assert_eq!(total, sum);
    }

    #[test]
    fn feature_properties_style_primitives() {
        let primitives = map_to_primitives(&node(FEATURE_COLLECTION), &Properties::new());
        assert_eq!(primitives.len(), 3);

        let icon = primitives[0].as_icon().expect("icon");
        assert_eq!(icon.title.as_deref(), Some("Start"));
        assert_eq!(icon.subtitle.as_deref(), Some("Trail head"));
        assert_eq!(icon.color, Color::GREEN);

        let line = primitives[1].as_polyline().expect("polyline");
        assert_eq!(line.path.len(), 4);
        assert_eq!(line.stroke.color, Color::rgba(0x55, 0x55, 0x55, 255));
        assert_relative_eq!(line.stroke.width, 4.0);
        assert!(line.stroke.dashed);

        let polygon = primitives[2].as_polygon().expect("polygon");
        assert_eq!(polygon.fill_color, Color::RED.with_opacity(0.25));
        assert_eq!(polygon.stroke.color, Color::BLUE.with_opacity(0.5));
        assert!(polygon.holes.is_empty());
    }

    #[test]
    fn geometry_collection_shares_inherited_properties() {
        let inherited = match json!({"marker-color": "red", "stroke": "black", "title": "Shared"}) {
            Value::Object(map) => map,
            _ => unreachable!(),
        };
        let primitives = map_to_primitives(&node(GEOMETRY_COLLECTION), &inherited);

        assert_eq!(kinds(&primitives), vec![PrimitiveKind::Icon, PrimitiveKind::Polyline]);
        let icon = primitives[0].as_icon().expect("icon");
        assert_eq!(icon.color, Color::RED);
        assert_eq!(icon.title.as_deref(), Some("Shared"));
        assert_eq!(primitives[1].stroke().map(|s| s.color), Some(Color::BLACK));
    }

    #[test]
    fn polygon_keeps_holes_together() {
        let primitives = map_to_primitives(&node(POLYGON_WITH_HOLE), &Properties::new());
        assert_eq!(primitives.len(), 1);

        let polygon = primitives[0].as_polygon().expect("polygon");
        assert_eq!(polygon.exterior.len(), 5);
        assert_eq!(polygon.holes.len(), 1);
        assert_eq!(polygon.holes[0].len(), 4);
        assert_eq!(polygon.rings().count(), 2);
    }

    #[test]
    fn multi_geometries_produce_one_primitive_per_member() {
        let document = json!({
            "type": "GeometryCollection",
            "geometries": [
                {"type": "MultiPoint", "coordinates": [[0, 0], [1, 1], [2, 2]]},
                {"type": "MultiPolygon", "coordinates": [
                    [[[0, 0], [1, 0], [1, 1], [0, 0]]],
                    [[[5, 5], [6, 5], [6, 6], [5, 5]]]
                ]}
            ]
        });
        let primitives = map_to_primitives(&decode(&document).expect("valid"), &Properties::new());

        assert_eq!(
            kinds(&primitives),
            vec![
                PrimitiveKind::Icon,
                PrimitiveKind::Icon,
                PrimitiveKind::Icon,
                PrimitiveKind::Polygon,
                PrimitiveKind::Polygon,
            ]
        );
    }

    #[test]
    fn null_geometry_produces_nothing() {
        let document = json!({"type": "Feature", "geometry": null, "properties": {"stroke": "red"}});
        let primitives = map_to_primitives(&decode(&document).expect("valid"), &Properties::new());
        assert!(primitives.is_empty());
    }

    #[test]
    fn primitives_carry_altitude_reference_and_visibility() {
        let document = json!({
            "type": "Feature",
            "geometry": {"type": "LineString", "coordinates": [[0, 0, 10], [1, 1, 20]]},
            "properties": {"visible": false}
        });
        let primitives = map_to_primitives(&decode(&document).expect("valid"), &Properties::new());

        let line = primitives[0].as_polyline().expect("polyline");
        assert_eq!(line.altitude_reference, AltitudeReference::Ellipsoid);
        assert_eq!(line.path[1].alt(), Some(20.0));
        assert!(!line.visible);
    }

    #[test]
    fn custom_defaults_are_applied() {
        let mapper = PrimitiveMapper::new(StyleDefaults::default().with_stroke_width(7.0));
        let primitives = mapper.map_to_primitives(&node(GEOMETRY_COLLECTION), &Properties::new());
        assert_eq!(primitives[1].stroke().map(|s| s.width), Some(7.0));
    }
}
