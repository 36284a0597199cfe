//! Container of the primitives produced from a GeoJSON document.

use crate::primitive::{
    IconPrimitive, MapPrimitive, PolygonPrimitive, PolylinePrimitive, PrimitiveKind,
};
use crate::Color;

/// Ordered set of map primitives created from a GeoJSON document.
///
/// Primitives of all kinds are kept in one sequence in insertion order. A host renders the layer by iterating
/// over [`GeoJsonLayer::icons`], [`GeoJsonLayer::polylines`] and [`GeoJsonLayer::polygons`] or over all primitives
/// with [`GeoJsonLayer::iter`].
///
/// Bulk setters modify only the primitives held at the time of the call. Primitives added later keep the style
/// they were created with.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeoJsonLayer {
    primitives: Vec<MapPrimitive>,
}

impl GeoJsonLayer {
    /// Creates a new empty layer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a primitive to the end of the layer.
    pub fn add(&mut self, primitive: impl Into<MapPrimitive>) {
        self.primitives.push(primitive.into());
    }

    /// Number of primitives in the layer.
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    /// Returns true if the layer holds no primitives.
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Iterates over all primitives in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &'_ MapPrimitive> {
        self.primitives.iter()
    }

    /// Iterates over icons in insertion order.
    pub fn icons(&self) -> impl Iterator<Item = &'_ IconPrimitive> {
        self.primitives.iter().filter_map(MapPrimitive::as_icon)
    }

    /// Iterates over polylines in insertion order.
    pub fn polylines(&self) -> impl Iterator<Item = &'_ PolylinePrimitive> {
        self.primitives.iter().filter_map(MapPrimitive::as_polyline)
    }

    /// Iterates over polygons in insertion order.
    pub fn polygons(&self) -> impl Iterator<Item = &'_ PolygonPrimitive> {
        self.primitives.iter().filter_map(MapPrimitive::as_polygon)
    }

    /// Number of primitives of the given kind.
    pub fn count(&self, kind: PrimitiveKind) -> usize {
        self.primitives.iter().filter(|p| p.kind() == kind).count()
    }

    /// Consumes the layer, returning its primitives.
    pub fn into_primitives(self) -> Vec<MapPrimitive> {
        self.primitives
    }

    /// Sets fill color of all polygons.
    pub fn set_fill_color(&mut self, color: Color) {
        for fill in self.primitives.iter_mut().filter_map(MapPrimitive::fill_color_mut) {
            *fill = color;
        }
    }

    /// Sets stroke color of all polylines and polygons.
    pub fn set_stroke_color(&mut self, color: Color) {
        for stroke in self.primitives.iter_mut().filter_map(MapPrimitive::stroke_mut) {
            stroke.color = color;
        }
    }

    /// Makes strokes of all polylines and polygons dashed or solid.
    pub fn set_stroke_dashed(&mut self, dashed: bool) {
        for stroke in self.primitives.iter_mut().filter_map(MapPrimitive::stroke_mut) {
            stroke.dashed = dashed;
        }
    }

    /// Sets stroke width of all polylines and polygons. Negative and `NaN` widths are set as 0.
    pub fn set_stroke_width(&mut self, width: f64) {
        let width = if width.is_nan() { 0.0 } else { width.max(0.0) };
        for stroke in self.primitives.iter_mut().filter_map(MapPrimitive::stroke_mut) {
            stroke.width = width;
        }
    }

    /// Shows or hides all polygons.
    pub fn set_polygons_visible(&mut self, visible: bool) {
        self.set_visible(PrimitiveKind::Polygon, visible);
    }

    /// Shows or hides all polylines.
    pub fn set_polylines_visible(&mut self, visible: bool) {
        self.set_visible(PrimitiveKind::Polyline, visible);
    }

    /// Shows or hides all icons.
    pub fn set_icons_visible(&mut self, visible: bool) {
        self.set_visible(PrimitiveKind::Icon, visible);
    }

    fn set_visible(&mut self, kind: PrimitiveKind, visible: bool) {
        self.primitives
            .iter_mut()
            .filter(|p| p.kind() == kind)
            .for_each(|p| p.set_visible(visible));
    }

    /// Removes all polygons from the layer and returns them in their original order.
    pub fn remove_polygons(&mut self) -> Vec<PolygonPrimitive> {
        self.extract(|primitive| match primitive {
            MapPrimitive::Polygon(v) => Ok(v),
            other => Err(other),
        })
    }

    /// Removes all polylines from the layer and returns them in their original order.
    pub fn remove_polylines(&mut self) -> Vec<PolylinePrimitive> {
        self.extract(|primitive| match primitive {
            MapPrimitive::Polyline(v) => Ok(v),
            other => Err(other),
        })
    }

    /// Removes all icons from the layer and returns them in their original order.
    pub fn remove_icons(&mut self) -> Vec<IconPrimitive> {
        self.extract(|primitive| match primitive {
            MapPrimitive::Icon(v) => Ok(v),
            other => Err(other),
        })
    }

    /// Splits the held primitives in one pass. `Ok` values are removed and returned, `Err` values stay.
    fn extract<T>(&mut self, split: impl Fn(MapPrimitive) -> Result<T, MapPrimitive>) -> Vec<T> {
        let mut removed = vec![];
        let mut kept = Vec::with_capacity(self.primitives.len());
        for primitive in std::mem::take(&mut self.primitives) {
            match split(primitive) {
                Ok(v) => removed.push(v),
                Err(primitive) => kept.push(primitive),
            }
        }

        self.primitives = kept;
        removed
    }
}

impl From<Vec<MapPrimitive>> for GeoJsonLayer {
    fn from(primitives: Vec<MapPrimitive>) -> Self {
        Self { primitives }
    }
}

impl FromIterator<MapPrimitive> for GeoJsonLayer {
    fn from_iter<T: IntoIterator<Item = MapPrimitive>>(iter: T) -> Self {
        Self {
            primitives: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for GeoJsonLayer {
    type Item = MapPrimitive;
    type IntoIter = std::vec::IntoIter<MapPrimitive>;

    fn into_iter(self) -> Self::IntoIter {
        self.primitives.into_iter()
    }
}

impl<'a> IntoIterator for &'a GeoJsonLayer {
    type Item = &'a MapPrimitive;
    type IntoIter = std::slice::Iter<'a, MapPrimitive>;

    fn into_iter(self) -> Self::IntoIter {
        self.primitives.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::StrokeStyle;
    use crate::tests::MIXED_KINDS;
    use approx::assert_relative_eq;
    use geolayer_types::{lonlat, LineString, LinearRing, Polygon};

    fn mixed_layer() -> GeoJsonLayer {
        crate::parse(MIXED_KINDS).expect("valid document")
    }

    fn stroke() -> StrokeStyle {
        StrokeStyle {
            color: Color::BLUE,
            width: 2.0,
            dashed: false,
        }
    }

    fn line() -> PolylinePrimitive {
        let line = LineString::new(vec![lonlat!(0.0, 0.0), lonlat!(1.0, 1.0)]).expect("valid line");
        PolylinePrimitive::new(&line, stroke())
    }

    fn polygon() -> PolygonPrimitive {
        let ring = LinearRing::new(vec![
            lonlat!(0.0, 0.0),
            lonlat!(1.0, 0.0),
            lonlat!(1.0, 1.0),
            lonlat!(0.0, 0.0),
        ])
        .expect("valid ring");
        PolygonPrimitive::new(&Polygon::new(ring, vec![]), Color::BLUE, stroke())
    }

    #[test]
    fn remove_polylines_partitions_layer() {
        let mut layer = mixed_layer();
        assert_eq!(layer.count(PrimitiveKind::Icon), 2);
        assert_eq!(layer.count(PrimitiveKind::Polyline), 3);
        assert_eq!(layer.count(PrimitiveKind::Polygon), 1);

        let removed = layer.remove_polylines();
        let starts: Vec<f64> = removed.iter().map(|l| l.path[0].lon()).collect();
        assert_eq!(starts, vec![0.0, 3.0, 5.0]);

        let left: Vec<PrimitiveKind> = layer.iter().map(MapPrimitive::kind).collect();
        assert_eq!(
            left,
            vec![PrimitiveKind::Icon, PrimitiveKind::Polygon, PrimitiveKind::Icon]
        );
        let icons: Vec<f64> = layer.icons().map(|i| i.position.lon()).collect();
        assert_eq!(icons, vec![2.0, 7.0]);
    }

    #[test]
    fn remove_each_kind() {
        let mut layer = mixed_layer();
        assert_eq!(layer.remove_icons().len(), 2);
        assert_eq!(layer.remove_icons().len(), 0);
        assert_eq!(layer.remove_polygons().len(), 1);
        assert_eq!(layer.len(), 3);
        assert_eq!(layer.remove_polylines().len(), 3);
        assert!(layer.is_empty());
    }

    #[test]
    fn setters_apply_to_applicable_kinds() {
        let mut layer = mixed_layer();
        let icons_before: Vec<IconPrimitive> = layer.icons().cloned().collect();

        layer.set_fill_color(Color::RED);
        layer.set_stroke_color(Color::BLACK);
        layer.set_stroke_dashed(true);
        layer.set_stroke_width(5.0);

        assert!(layer.polygons().all(|p| p.fill_color == Color::RED));
        for stroke in layer.iter().filter_map(MapPrimitive::stroke) {
            assert_eq!(stroke.color, Color::BLACK);
            assert!(stroke.dashed);
            assert_relative_eq!(stroke.width, 5.0);
        }

        let icons_after: Vec<IconPrimitive> = layer.icons().cloned().collect();
        assert_eq!(icons_before, icons_after);
    }

    #[test]
    fn stroke_width_is_clamped() {
        let mut layer = mixed_layer();
        layer.set_stroke_width(-3.0);
        assert!(layer.polylines().all(|l| l.stroke.width == 0.0));
    }

    #[test]
    fn setters_do_not_affect_primitives_added_later() {
        let mut layer = GeoJsonLayer::new();
        layer.add(line());
        layer.set_stroke_color(Color::RED);
        layer.set_polylines_visible(false);
        layer.add(line());
        layer.add(polygon());
        layer.set_fill_color(Color::WHITE);
        layer.add(polygon());

        let lines: Vec<&PolylinePrimitive> = layer.polylines().collect();
        assert_eq!(lines[0].stroke.color, Color::RED);
        assert!(!lines[0].visible);
        assert_eq!(lines[1].stroke.color, Color::BLUE);
        assert!(lines[1].visible);

        let polygons: Vec<&PolygonPrimitive> = layer.polygons().collect();
        assert_eq!(polygons[0].fill_color, Color::WHITE);
        assert_eq!(polygons[1].fill_color, Color::BLUE);
    }

    #[test]
    fn visibility_is_per_kind() {
        let mut layer = mixed_layer();
        layer.set_icons_visible(false);

        assert!(layer.icons().all(|i| !i.visible));
        assert!(layer.polylines().all(|l| l.visible));
        assert!(layer.polygons().all(|p| p.visible));

        layer.set_icons_visible(true);
        layer.set_polygons_visible(false);
        assert!(layer.icons().all(|i| i.visible));
        assert!(layer.polygons().all(|p| !p.visible));
    }

    #[test]
    fn layer_from_primitives_keeps_order() {
        let layer = GeoJsonLayer::from(vec![MapPrimitive::from(polygon()), line().into()]);
        let kinds: Vec<PrimitiveKind> = layer.iter().map(MapPrimitive::kind).collect();
        assert_eq!(kinds, vec![PrimitiveKind::Polygon, PrimitiveKind::Polyline]);
        assert_eq!(layer.into_primitives().len(), 2);
    }
}
