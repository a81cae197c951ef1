//! Relation routing.
//!
//! Every relation becomes one straight line between the icons of its two
//! services. By default the line joins the icon centers; with
//! [`RelationEndpoints::IconBoundary`] both ends are pulled back to where the
//! line leaves each icon's square.

use log::trace;

use bundlesvg_core::{
    draw::{Line, StrokeDefinition},
    geometry::{Point, Size},
};
use bundlesvg_topology::Relation;

use crate::{
    config::RelationEndpoints,
    error::BundleSvgError,
    node::{Node, NodeSet},
};

/// Turns relations into lines between placed nodes.
#[derive(Debug, Clone)]
pub(crate) struct RelationRouter {
    icon: Size,
    policy: RelationEndpoints,
    stroke: StrokeDefinition,
}

impl RelationRouter {
    pub(crate) fn new(icon: Size, policy: RelationEndpoints, stroke: StrokeDefinition) -> Self {
        Self {
            icon,
            policy,
            stroke,
        }
    }

    /// Routes `relation` between its two nodes.
    ///
    /// # Errors
    ///
    /// Returns [`BundleSvgError::UnknownNode`] if either endpoint names a
    /// service missing from `nodes`.
    pub(crate) fn route(
        &self,
        relation: &Relation,
        nodes: &NodeSet<'_>,
    ) -> Result<Line, BundleSvgError> {
        let [first, second] = relation.endpoints();
        let center = |service: &str| {
            nodes
                .get(service)
                .map(Node::center)
                .ok_or_else(|| BundleSvgError::UnknownNode {
                    relation: relation.to_string(),
                    service: service.to_string(),
                })
        };

        let start = center(first.service())?;
        let end = center(second.service())?;

        let (start, end) = match self.policy {
            RelationEndpoints::Center => (start, end),
            RelationEndpoints::IconBoundary => self.clip_to_icons(start, end),
        };

        trace!(relation:% = relation; "Routed relation");

        Ok(Line::new(start, end, self.stroke.clone()))
    }

    /// Shortens the center-to-center segment at both ends by the part that
    /// lies inside each icon's square.
    ///
    /// Icons that touch or overlap leave nothing visible between them; the
    /// segment falls back to the centers in that case.
    fn clip_to_icons(&self, start: Point, end: Point) -> (Point, Point) {
        let delta = end.sub_point(start);
        let half = self.icon.half();

        let tx = half.x() / delta.x().abs();
        let ty = half.y() / delta.y().abs();
        let t = tx.min(ty);

        if !t.is_finite() || t >= 0.5 {
            return (start, end);
        }

        let offset = delta.scale(t);
        (start.add_point(offset), end.sub_point(offset))
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;
    use indexmap::IndexMap;

    use bundlesvg_topology::Endpoint;

    use super::*;
    use crate::error::Stage;

    fn nodes<'a>(entries: &[(&'a str, Point)]) -> NodeSet<'a> {
        entries
            .iter()
            .map(|(name, center)| (*name, Node::new(*name, *name, *center)))
            .collect::<IndexMap<_, _>>()
    }

    fn relation(a: &str, b: &str) -> Relation {
        Relation::new(a.parse::<Endpoint>().unwrap(), b.parse().unwrap())
    }

    fn router(policy: RelationEndpoints) -> RelationRouter {
        RelationRouter::new(Size::square(96.0), policy, StrokeDefinition::default())
    }

    #[test]
    fn test_center_to_center() {
        let nodes = nodes(&[
            ("charmworld", Point::new(371.0, 48.0)),
            ("elasticsearch", Point::new(48.0, 305.5)),
        ]);
        let line = router(RelationEndpoints::Center)
            .route(&relation("charmworld:essearch", "elasticsearch:essearch"), &nodes)
            .unwrap();

        assert_eq!(line.start(), Point::new(371.0, 48.0));
        assert_eq!(line.end(), Point::new(48.0, 305.5));
        assert_eq!(line.stroke().to_style(), "stroke:black");
    }

    #[test]
    fn test_endpoint_order_follows_relation() {
        let nodes = nodes(&[("a", Point::new(0.0, 0.0)), ("b", Point::new(10.0, 0.0))]);
        let line = router(RelationEndpoints::Center)
            .route(&relation("b", "a"), &nodes)
            .unwrap();

        assert_eq!(line.start(), Point::new(10.0, 0.0));
        assert_eq!(line.end(), Point::new(0.0, 0.0));
    }

    #[test]
    fn test_unknown_node() {
        let nodes = nodes(&[("a", Point::default())]);
        let err = router(RelationEndpoints::Center)
            .route(&relation("a:db", "ghost:db"), &nodes)
            .unwrap_err();

        assert!(matches!(
            &err,
            BundleSvgError::UnknownNode { service, .. } if service == "ghost"
        ));
        assert_eq!(err.stage(), Some(Stage::Routing));
        assert_eq!(
            err.to_string(),
            r#"relation [a:db ghost:db] refers to unknown service "ghost""#
        );
    }

    #[test]
    fn test_icon_boundary_horizontal() {
        let nodes = nodes(&[("a", Point::new(48.0, 48.0)), ("b", Point::new(448.0, 48.0))]);
        let line = router(RelationEndpoints::IconBoundary)
            .route(&relation("a", "b"), &nodes)
            .unwrap();

        assert_approx_eq!(f64, line.start().x(), 96.0);
        assert_approx_eq!(f64, line.start().y(), 48.0);
        assert_approx_eq!(f64, line.end().x(), 400.0);
        assert_approx_eq!(f64, line.end().y(), 48.0);
    }

    #[test]
    fn test_icon_boundary_diagonal_hits_nearer_side() {
        let nodes = nodes(&[("a", Point::new(0.0, 0.0)), ("b", Point::new(200.0, 400.0))]);
        let line = router(RelationEndpoints::IconBoundary)
            .route(&relation("a", "b"), &nodes)
            .unwrap();

        // The bottom edge of the square is crossed first.
        assert_approx_eq!(f64, line.start().x(), 24.0);
        assert_approx_eq!(f64, line.start().y(), 48.0);
        assert_approx_eq!(f64, line.end().x(), 176.0);
        assert_approx_eq!(f64, line.end().y(), 352.0);
    }

    #[test]
    fn test_icon_boundary_overlapping_icons_fall_back_to_centers() {
        let nodes = nodes(&[("a", Point::new(0.0, 0.0)), ("b", Point::new(60.0, 10.0))]);
        let line = router(RelationEndpoints::IconBoundary)
            .route(&relation("a", "b"), &nodes)
            .unwrap();

        assert_eq!(line.start(), Point::new(0.0, 0.0));
        assert_eq!(line.end(), Point::new(60.0, 10.0));
    }

    #[test]
    fn test_icon_boundary_coincident_centers() {
        let nodes = nodes(&[("a", Point::new(5.0, 5.0)), ("b", Point::new(5.0, 5.0))]);
        let line = router(RelationEndpoints::IconBoundary)
            .route(&relation("a", "b"), &nodes)
            .unwrap();

        assert_eq!(line.start(), line.end());
    }
}
