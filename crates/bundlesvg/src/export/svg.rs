//! SVG document assembly.

use std::io;

use log::debug;
use svg::{
    Document,
    node::{Comment, element::Definitions},
};

use bundlesvg_core::draw::{LayeredOutput, Primitive};

use super::Diagram;

const XML_DECLARATION: &str = r#"<?xml version="1.0"?>"#;
const GENERATOR_COMMENT: &str = "Generated by bundlesvg";
const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";
const XLINK_NAMESPACE: &str = "http://www.w3.org/1999/xlink";

impl Diagram {
    /// Collects relations and services into their layers, in insertion order.
    fn render_layers(&self) -> LayeredOutput {
        let mut output = LayeredOutput::new();

        for line in &self.relations {
            Primitive::from(line.clone()).render_to_layers(&mut output);
        }
        for image in &self.services {
            Primitive::from(image.clone()).render_to_layers(&mut output);
        }

        output
    }

    fn to_document(&self) -> Document {
        let document = Document::new()
            .set("width", self.canvas.width())
            .set("height", self.canvas.height())
            .set("xmlns", SVG_NAMESPACE)
            .set("xmlns:xlink", XLINK_NAMESPACE)
            .add(Definitions::new());

        self.render_layers()
            .render()
            .into_iter()
            .fold(document, |document, group| document.add(group))
    }

    pub(super) fn write_document<W: io::Write>(&self, writer: &mut W) -> io::Result<()> {
        debug!(
            width = self.canvas.width(),
            height = self.canvas.height(),
            relations = self.relations.len(),
            services = self.services.len();
            "Writing SVG document"
        );

        writeln!(writer, "{XML_DECLARATION}")?;
        writeln!(writer, "{}", Comment::new(GENERATOR_COMMENT))?;
        writeln!(writer, "{}", self.to_document())?;
        writer.flush()
    }
}
