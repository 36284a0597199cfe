use std::path::PathBuf;

use anyhow::Context;
use geolayer::{GeoJsonParser, MapPrimitive, ParserOptions};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("geolayer/examples/data/trail.geojson"));
    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let parser = GeoJsonParser::with_options(ParserOptions::default());
    let layer = parser.parse(&text)?;

    println!("{}: {} primitives", path.display(), layer.len());
    for primitive in &layer {
        match primitive {
            MapPrimitive::Icon(icon) => println!(
                "  icon at ({}, {}) {} {}",
                icon.position.lon(),
                icon.position.lat(),
                icon.color.to_hex(),
                icon.title.as_deref().unwrap_or("")
            ),
            MapPrimitive::Polyline(line) => println!(
                "  polyline of {} positions, stroke {} width {}{}",
                line.path.len(),
                line.stroke.color.to_hex(),
                line.stroke.width,
                if line.stroke.dashed { " dashed" } else { "" }
            ),
            MapPrimitive::Polygon(polygon) => println!(
                "  polygon with {} holes, fill {} stroke {}",
                polygon.holes.len(),
                polygon.fill_color.to_hex(),
                polygon.stroke.color.to_hex()
            ),
        }
    }

    Ok(())
}
