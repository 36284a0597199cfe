//! Parsing entry point for hosts that expect a missing layer instead of an error.

use crate::layer::GeoJsonLayer;

/// Parses a GeoJSON document, returning `None` if it is not valid.
///
/// The error is logged with `warn` level. Use [`crate::parse`] to get it as a value.
pub fn parse(text: &str) -> Option<GeoJsonLayer> {
    match crate::parse(text) {
        Ok(layer) => Some(layer),
        Err(err) => {
            log::warn!("Failed to parse GeoJSON document: {err}");
            None
        }
    }
}
