//! Drawing primitives: placed icon images and relation lines.
//!
//! A [`Primitive`] is one atomic drawable instruction. It knows which
//! [`RenderLayer`] it belongs to and how to turn itself into an SVG node; all
//! coordinates are converted with [`to_pixel`] on the way out.

use svg::node::element as svg_element;

use crate::{
    draw::{LayeredOutput, RenderLayer, StrokeDefinition, SvgNode},
    geometry::{Point, Size, to_pixel},
};

/// An icon image anchored at its top-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedImage {
    top_left: Point,
    size: Size,
    href: String,
}

impl PlacedImage {
    /// Creates an image placed with its top-left corner at `top_left`.
    pub fn new(top_left: Point, size: Size, href: impl Into<String>) -> Self {
        Self {
            top_left,
            size,
            href: href.into(),
        }
    }

    /// Creates an image of the given size centered on `center`.
    pub fn centered(center: Point, size: Size, href: impl Into<String>) -> Self {
        Self::new(center.sub_point(size.half()), size, href)
    }

    pub fn top_left(&self) -> Point {
        self.top_left
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn href(&self) -> &str {
        &self.href
    }

    fn to_svg(&self) -> svg_element::Image {
        svg_element::Image::new()
            .set("x", to_pixel(self.top_left.x()))
            .set("y", to_pixel(self.top_left.y()))
            .set("width", to_pixel(self.size.width()))
            .set("height", to_pixel(self.size.height()))
            .set("xlink:href", self.href.as_str())
    }
}

/// A straight relation line between two points.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    start: Point,
    end: Point,
    stroke: StrokeDefinition,
}

impl Line {
    pub fn new(start: Point, end: Point, stroke: StrokeDefinition) -> Self {
        Self { start, end, stroke }
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    pub fn stroke(&self) -> &StrokeDefinition {
        &self.stroke
    }

    fn to_svg(&self) -> svg_element::Line {
        svg_element::Line::new()
            .set("x1", to_pixel(self.start.x()))
            .set("y1", to_pixel(self.start.y()))
            .set("x2", to_pixel(self.end.x()))
            .set("y2", to_pixel(self.end.y()))
            .set("style", self.stroke.to_style())
    }
}

/// One drawable instruction of the output document.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Image(PlacedImage),
    Line(Line),
}

impl Primitive {
    /// The layer this primitive is drawn on.
    pub fn layer(&self) -> RenderLayer {
        match self {
            Self::Image(_) => RenderLayer::Services,
            Self::Line(_) => RenderLayer::Relations,
        }
    }

    /// Converts the primitive into an SVG node.
    pub fn to_svg_node(&self) -> SvgNode {
        match self {
            Self::Image(image) => Box::new(image.to_svg()),
            Self::Line(line) => Box::new(line.to_svg()),
        }
    }

    /// Adds the rendered primitive to its layer of `output`.
    pub fn render_to_layers(&self, output: &mut LayeredOutput) {
        output.add_to_layer(self.layer(), self.to_svg_node());
    }
}

impl From<PlacedImage> for Primitive {
    fn from(image: PlacedImage) -> Self {
        Self::Image(image)
    }
}

impl From<Line> for Primitive {
    fn from(line: Line) -> Self {
        Self::Line(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_image_anchor() {
        let image = PlacedImage::centered(Point::new(48.0, 305.5), Size::square(96.0), "x.svg");
        assert_eq!(image.top_left(), Point::new(0.0, 257.5));
        assert_eq!(image.href(), "x.svg");
    }

    #[test]
    fn test_image_svg_uses_truncated_pixels() {
        let image = PlacedImage::new(Point::new(450.0, 276.54), Size::square(96.0), "http://icon");
        let rendered = Primitive::from(image).to_svg_node().to_string();

        assert!(rendered.starts_with("<image"));
        assert!(rendered.contains(r#"x="450""#));
        assert!(rendered.contains(r#"y="276""#));
        assert!(rendered.contains(r#"width="96""#));
        assert!(rendered.contains(r#"height="96""#));
        assert!(rendered.contains(r#"xlink:href="http://icon""#));
    }

    #[test]
    fn test_image_svg_far_from_origin() {
        let image = PlacedImage::new(
            Point::new(20_000_000.0, 0.5),
            Size::square(96.0),
            "http://icon",
        );
        let rendered = Primitive::from(image).to_svg_node().to_string();

        assert!(rendered.contains(r#"x="20000000""#));
        assert!(rendered.contains(r#"y="0""#));
    }

    #[test]
    fn test_line_svg() {
        let line = Line::new(
            Point::new(371.0, 48.0),
            Point::new(48.0, 305.54),
            StrokeDefinition::default(),
        );
        let rendered = Primitive::from(line).to_svg_node().to_string();

        assert!(rendered.starts_with("<line"));
        assert!(rendered.contains(r#"x1="371""#));
        assert!(rendered.contains(r#"y1="48""#));
        assert!(rendered.contains(r#"x2="48""#));
        assert!(rendered.contains(r#"y2="305""#));
        assert!(rendered.contains(r#"style="stroke:black""#));
    }

    #[test]
    fn test_primitive_layers() {
        let image = Primitive::from(PlacedImage::new(Point::default(), Size::square(1.0), ""));
        let line = Primitive::from(Line::new(
            Point::default(),
            Point::default(),
            StrokeDefinition::default(),
        ));

        assert_eq!(image.layer(), RenderLayer::Services);
        assert_eq!(line.layer(), RenderLayer::Relations);

        let mut output = LayeredOutput::new();
        image.render_to_layers(&mut output);
        line.render_to_layers(&mut output);
        let groups: Vec<String> = output
            .render()
            .into_iter()
            .map(|node| node.to_string())
            .collect();
        assert!(groups[0].contains("<line"));
        assert!(!groups[0].contains("<image"));
        assert!(groups[1].contains("<image"));
        assert!(!groups[1].contains("<line"));
    }
}
