//! Stroke definitions for relation lines.
//!
//! A [`StrokeDefinition`] is rendered into a single inline `style` attribute
//! (`stroke:black`, optionally followed by `;stroke-width:2`), which is the
//! form relation lines carry in the output document.

use crate::color::Color;

/// Visual properties of a line stroke.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StrokeDefinition {
    color: Color,
    width: Option<f32>,
}

impl StrokeDefinition {
    /// Creates a stroke with the given color and the renderer's default width.
    pub fn new(color: Color) -> Self {
        Self { color, width: None }
    }

    /// Sets an explicit stroke width (builder style).
    pub fn with_width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    /// Returns the stroke color
    pub fn color(&self) -> &Color {
        &self.color
    }

    /// Returns the explicit stroke width, if any
    pub fn width(&self) -> Option<f32> {
        self.width
    }

    /// Returns the inline CSS used for the SVG `style` attribute.
    ///
    /// # Examples
    ///
    /// ```
    /// use bundlesvg_core::{color::Color, draw::StrokeDefinition};
    ///
    /// let stroke = StrokeDefinition::default();
    /// assert_eq!(stroke.to_style(), "stroke:black");
    ///
    /// let stroke = StrokeDefinition::new(Color::new("red").unwrap()).with_width(2.0);
    /// assert_eq!(stroke.to_style(), "stroke:red;stroke-width:2");
    /// ```
    pub fn to_style(&self) -> String {
        match self.width {
            Some(width) => format!("stroke:{};stroke-width:{width}", self.color),
            None => format!("stroke:{}", self.color),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_stroke_style() {
        let stroke = StrokeDefinition::default();
        assert_eq!(stroke.to_style(), "stroke:black");
        assert_eq!(stroke.width(), None);
    }

    #[test]
    fn test_stroke_with_fractional_width() {
        let stroke = StrokeDefinition::new(Color::new("#336699").unwrap()).with_width(1.5);
        assert_eq!(stroke.to_style(), "stroke:#336699;stroke-width:1.5");
        assert_eq!(stroke.color().to_string(), "#336699");
    }
}
