//! Drawing primitives and their grouping into document layers.

mod layer;
mod primitive;
mod stroke;

pub use layer::{LayeredOutput, RenderLayer, SvgNode};
pub use primitive::{Line, PlacedImage, Primitive};
pub use stroke::StrokeDefinition;
