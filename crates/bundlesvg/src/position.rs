//! Extraction of service positions from annotations.

use indexmap::IndexMap;
use log::trace;

use bundlesvg_core::geometry::Point;

use crate::{
    config::PositionConfig,
    error::{BundleSvgError, Stage},
};

/// Reads the position of service `service` from its annotations.
///
/// Both coordinates must be present and parse as finite numbers; the value is
/// taken verbatim, so surrounding whitespace is rejected.
pub(crate) fn parse_position(
    service: &str,
    annotations: &IndexMap<String, String>,
    keys: &PositionConfig,
) -> Result<Point, BundleSvgError> {
    let coordinate = |key: &str| {
        annotations
            .get(key)
            .and_then(|value| value.parse::<f64>().ok())
            .filter(|value| value.is_finite())
    };

    match (coordinate(keys.x_key()), coordinate(keys.y_key())) {
        (Some(x), Some(y)) => {
            trace!(service = service, x = x, y = y; "Parsed position");
            Ok(Point::new(x, y))
        }
        _ => Err(BundleSvgError::invalid_position(service, Stage::Parsing)),
    }
}
