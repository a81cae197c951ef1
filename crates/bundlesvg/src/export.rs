//! The rendered document and its serialization.

mod svg;

use std::io;

use log::error;

use bundlesvg_core::draw::{Line, PlacedImage};

use crate::normalize::Canvas;

/// A fully laid out bundle diagram, ready to be written.
///
/// A `Diagram` is produced by [`DiagramBuilder`](crate::DiagramBuilder) and
/// holds no reference to the bundle it was built from. Serializing it any
/// number of times yields the same bytes.
#[derive(Debug, Clone)]
pub struct Diagram {
    canvas: Canvas,
    relations: Vec<Line>,
    services: Vec<PlacedImage>,
}

impl Diagram {
    pub(crate) fn new(canvas: Canvas, relations: Vec<Line>, services: Vec<PlacedImage>) -> Self {
        Self {
            canvas,
            relations,
            services,
        }
    }

    /// Writes the diagram as an SVG document.
    ///
    /// # Errors
    ///
    /// Returns any error reported by `writer`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bundlesvg::{DiagramBuilder, Topology};
    ///
    /// let topology = Topology::new([], []);
    /// let resolver = |_: &str| -> Result<String, bundlesvg::icon::IconError> {
    ///     unreachable!("no services to resolve")
    /// };
    /// let diagram = DiagramBuilder::default()
    ///     .render_topology(&topology, &resolver)
    ///     .unwrap();
    ///
    /// let mut out = Vec::new();
    /// diagram.serialize(&mut out).unwrap();
    /// assert!(String::from_utf8(out).unwrap().starts_with("<?xml"));
    /// ```
    pub fn serialize<W: io::Write>(&self, mut writer: W) -> io::Result<()> {
        self.write_document(&mut writer).inspect_err(|err| {
            error!(err:%; "Failed to write SVG document");
        })
    }
}
