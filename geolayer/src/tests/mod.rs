//! GeoJSON documents shared by the unit tests.

pub const SEATTLE_POINT: &str = r##"{
    "type": "Feature",
    "geometry": {"type": "Point", "coordinates": [-122.33, 47.60]},
    "properties": {"marker-color": "#ff0000"}
}"##;

pub const POLYGON_WITH_HOLE: &str = r#"{
    "type": "Polygon",
    "coordinates": [
        [[35, 10], [45, 45], [15, 40], [10, 20], [35, 10]],
        [[20, 30], [35, 35], [30, 20], [20, 30]]
    ]
}"#;

pub const GEOMETRY_COLLECTION: &str = r#"{
    "type": "GeometryCollection",
    "geometries": [
        {"type": "Point", "coordinates": [40, 10]},
        {"type": "LineString", "coordinates": [[10, 10], [20, 20], [10, 40]]}
    ]
}"#;

pub const FEATURE_COLLECTION: &str = r##"{
    "type": "FeatureCollection",
    "features": [
        {
            "type": "Feature",
            "geometry": {"type": "Point", "coordinates": [102.0, 0.5]},
            "properties": {"title": "Start", "description": "Trail head", "marker-color": "#00ff00"}
        },
        {
            "type": "Feature",
            "geometry": {
                "type": "LineString",
                "coordinates": [[102.0, 0.0], [103.0, 1.0], [104.0, 0.0], [105.0, 1.0]]
            },
            "properties": {"stroke": "#555555", "stroke-width": 4, "stroke-dasharray": "4 2"}
        },
        {
            "type": "Feature",
            "geometry": {
                "type": "Polygon",
                "coordinates": [
                    [[100.0, 0.0], [101.0, 0.0], [101.0, 1.0], [100.0, 1.0], [100.0, 0.0]]
                ]
            },
            "properties": {"fill": "red", "fill-opacity": 0.25, "stroke-opacity": 0.5}
        }
    ]
}"##;

/// 2 icons, 3 polylines and 1 polygon, interleaved.
pub const MIXED_KINDS: &str = r#"{
    "type": "FeatureCollection",
    "features": [
        {"type": "Feature", "properties": {"name": "line 1"},
         "geometry": {"type": "LineString", "coordinates": [[0, 0], [1, 1]]}},
        {"type": "Feature", "properties": {"name": "icon 1"},
         "geometry": {"type": "Point", "coordinates": [2, 2]}},
        {"type": "Feature", "properties": {"name": "lines 2 and 3"},
         "geometry": {"type": "MultiLineString", "coordinates": [[[3, 3], [4, 4]], [[5, 5], [6, 6]]]}},
        {"type": "Feature", "properties": {"name": "polygon"},
         "geometry": {"type": "Polygon", "coordinates": [[[0, 0], [1, 0], [1, 1], [0, 0]]]}},
        {"type": "Feature", "properties": {"name": "icon 2"},
         "geometry": {"type": "Point", "coordinates": [7, 7]}}
    ]
}"#;
