//! Icon placement.

use log::debug;

use bundlesvg_core::{draw::PlacedImage, geometry::Size};

use crate::{error::BundleSvgError, icon::IconResolver, node::Node};

/// Resolves the icon of `node` and places it centered on the node.
///
/// # Errors
///
/// Returns [`BundleSvgError::IconResolutionFailed`] if the resolver fails.
pub(crate) fn place_icon<R>(
    node: &Node<'_>,
    icon: Size,
    resolver: &R,
) -> Result<PlacedImage, BundleSvgError>
where
    R: IconResolver + ?Sized,
{
    let href = resolver
        .resolve(node.icon_ref())
        .map_err(|source| BundleSvgError::IconResolutionFailed {
            service: node.name().to_string(),
            source,
        })?;

    debug!(service = node.name(), href = href.as_str(); "Icon resolved");

    Ok(PlacedImage::centered(node.center(), icon, href))
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use bundlesvg_core::geometry::Point;

    use super::*;
    use crate::{error::Stage, icon::IconError};

    #[test]
    fn test_place_icon_anchors_top_left() {
        let node = Node::new("mongodb", "cs:precise/mongodb-21", Point::new(498.0, 324.5));
        let resolver = |reference: &str| -> Result<String, IconError> {
            Ok(format!("http://0.1.2.3/{reference}"))
        };

        let image = place_icon(&node, Size::square(96.0), &resolver).unwrap();

        assert_eq!(image.top_left(), Point::new(450.0, 276.5));
        assert_eq!(image.size(), Size::square(96.0));
        assert_eq!(image.href(), "http://0.1.2.3/cs:precise/mongodb-21");
    }

    #[test]
    fn test_resolver_called_once_without_retry() {
        let calls = Cell::new(0);
        let resolver = |_: &str| -> Result<String, IconError> {
            calls.set(calls.get() + 1);
            Err(IconError::other("icon service unavailable"))
        };
        let node = Node::new("charmworld", "cs:charmworld", Point::default());

        let err = place_icon(&node, Size::square(96.0), &resolver).unwrap_err();

        assert_eq!(calls.get(), 1);
        assert_eq!(err.stage(), Some(Stage::Placing));
        assert_eq!(
            err.to_string(),
            r#"cannot resolve icon for service "charmworld": icon service unavailable"#
        );
    }
}
