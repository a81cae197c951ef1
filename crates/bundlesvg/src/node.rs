//! Services resolved onto the canvas.

use indexmap::IndexMap;

use bundlesvg_core::geometry::Point;

/// A service with its normalized icon center.
///
/// Nodes borrow from the topology they were built from and live only for
/// the render that created them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Node<'a> {
    name: &'a str,
    icon_ref: &'a str,
    center: Point,
}

impl<'a> Node<'a> {
    pub(crate) fn new(name: &'a str, icon_ref: &'a str, center: Point) -> Self {
        Self {
            name,
            icon_ref,
            center,
        }
    }

    pub(crate) fn name(&self) -> &'a str {
        self.name
    }

    /// Opaque reference handed to the icon resolver
    pub(crate) fn icon_ref(&self) -> &'a str {
        self.icon_ref
    }

    /// Icon center in canvas coordinates
    pub(crate) fn center(&self) -> Point {
        self.center
    }
}

/// Resolved nodes keyed by service name, in topology order.
pub(crate) type NodeSet<'a> = IndexMap<&'a str, Node<'a>>;
