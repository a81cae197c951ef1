//! Layer-based grouping for SVG output.
//!
//! Drawing primitives say which layer they belong to; the document assembler
//! collects them into a [`LayeredOutput`] and renders one `<g>` per layer.
//!
//! # Overview
//!
//! The layer system consists of:
//! - [`RenderLayer`]: An enum defining available rendering layers in order
//! - [`LayeredOutput`]: A structure for collecting SVG nodes by layer
//!
//! # Example
//!
//! ```
//! # use bundlesvg_core::draw::{RenderLayer, LayeredOutput};
//! # use svg::node::element::{Image, Line};
//!
//! let mut output = LayeredOutput::new();
//!
//! output.add_to_layer(RenderLayer::Services, Box::new(Image::new()));
//! output.add_to_layer(RenderLayer::Relations, Box::new(Line::new()));
//!
//! // Relations are rendered beneath services
//! let groups = output.render();
//! assert_eq!(groups.len(), 2);
//! ```

use log::trace;
use svg::node::element as svg_element;

/// Type alias for boxed SVG nodes.
pub type SvgNode = Box<dyn svg::Node>;

/// Defines the rendering layers for SVG output.
///
/// Layers are rendered from bottom to top in the order defined by variant declaration.
/// The `Ord` derive uses declaration order, so the first variant renders first (bottom),
/// and the last variant renders last (top).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RenderLayer {
    /// Relation lines between services - renders first
    Relations,
    /// Service icons, drawn over the relation lines
    Services,
}

impl RenderLayer {
    /// Every layer in rendering order.
    pub const ALL: [RenderLayer; 2] = [Self::Relations, Self::Services];

    /// Returns the name used as the `id` of the layer's group.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Relations => "relations",
            Self::Services => "services",
        }
    }
}

/// Represents SVG nodes grouped by rendering layer.
///
/// Nodes keep the order in which they were added within their layer. When
/// rendered, every layer is emitted in layer order (bottom to top), even when
/// it holds no nodes, so the document always has the same shape.
#[derive(Debug, Default)]
pub struct LayeredOutput {
    items: Vec<(RenderLayer, SvgNode)>,
}

impl LayeredOutput {
    /// Creates a new empty `LayeredOutput`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a single node to the specified layer.
    ///
    /// Nodes are appended to the layer in the order they are added.
    pub fn add_to_layer(&mut self, layer: RenderLayer, node: SvgNode) {
        self.items.push((layer, node));
    }

    /// Renders all layers to SVG groups, consuming the output.
    ///
    /// Each layer becomes an SVG `<g>` element whose `id` is the layer name.
    /// The sort is stable, so insertion order survives inside each group.
    ///
    /// # Example
    ///
    /// ```
    /// use bundlesvg_core::draw::LayeredOutput;
    ///
    /// // Empty layers still produce their group
    /// let groups = LayeredOutput::new().render();
    /// assert_eq!(groups.len(), 2);
    /// ```
    pub fn render(mut self) -> Vec<SvgNode> {
        self.items.sort_by_key(|(layer, _)| *layer);

        let mut items = self.items.into_iter().peekable();
        let mut result = Vec::with_capacity(RenderLayer::ALL.len());

        for layer in RenderLayer::ALL {
            let mut group = svg_element::Group::new().set("id", layer.name());
            let mut count = 0usize;

            while let Some((_, node)) = items.next_if(|(l, _)| *l == layer) {
                group = group.add(node);
                count += 1;
            }

            trace!(layer = layer.name(), nodes = count; "Rendered layer");
            result.push(Box::new(group) as SvgNode);
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use svg::node::element::{Image, Line};

    fn render_to_strings(output: LayeredOutput) -> Vec<String> {
        output
            .render()
            .into_iter()
            .map(|node| node.to_string())
            .collect()
    }

    #[test]
    fn test_layered_output_add_to_layer() {
        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Services, Box::new(Image::new()));

        let groups = render_to_strings(output);
        assert_eq!(groups.len(), 2);
        assert!(!groups[0].contains("<image"));
        assert!(groups[1].contains("<image"));
    }

    #[test]
    fn test_relations_render_before_services() {
        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Services, Box::new(Image::new()));
        output.add_to_layer(RenderLayer::Relations, Box::new(Line::new()));

        let groups = render_to_strings(output);

        assert_eq!(groups.len(), 2);
        assert!(groups[0].contains(r#"id="relations""#));
        assert!(groups[0].contains("<line"));
        assert!(groups[1].contains(r#"id="services""#));
        assert!(groups[1].contains("<image"));
    }

    #[test]
    fn test_empty_layers_still_rendered() {
        let groups = render_to_strings(LayeredOutput::new());

        assert_eq!(groups.len(), 2);
        assert!(groups[0].contains(r#"id="relations""#));
        assert!(groups[1].contains(r#"id="services""#));
        assert!(!groups[0].contains("<line"));
    }

    #[test]
    fn test_insertion_order_kept_within_layer() {
        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Services, Box::new(Image::new().set("x", 3)));
        output.add_to_layer(RenderLayer::Relations, Box::new(Line::new()));
        output.add_to_layer(RenderLayer::Services, Box::new(Image::new().set("x", 1)));
        output.add_to_layer(RenderLayer::Services, Box::new(Image::new().set("x", 2)));

        let groups = render_to_strings(output);
        let services = &groups[1];

        let first = services.find(r#"x="3""#).unwrap();
        let second = services.find(r#"x="1""#).unwrap();
        let third = services.find(r#"x="2""#).unwrap();
        assert!(first < second && second < third);
    }
}
