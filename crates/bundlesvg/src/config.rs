//! Configuration types for bundle rendering.
//!
//! This module provides configuration structures that control how bundles
//! are laid out and styled. All types implement [`serde::Deserialize`] for
//! flexible loading from external sources, and every section falls back to
//! its defaults when omitted.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining all sections.
//! - [`LayoutConfig`] - Icon size and how relation lines meet the icons.
//! - [`PositionConfig`] - Annotation keys holding a service's position.
//! - [`StyleConfig`] - Relation stroke styling.
//! - [`IconConfig`] - URL template for the built-in icon resolver.
//!
//! # Example
//!
//! ```
//! # use bundlesvg::config::AppConfig;
//! let config: AppConfig = toml::from_str(r#"
//!     [layout]
//!     icon_size = 64
//!     relation_endpoints = "icon-boundary"
//! "#).unwrap();
//! assert_eq!(config.layout().icon_size().get(), 64);
//! assert_eq!(config.position().x_key(), "gui-x");
//! ```

use std::num::NonZeroU32;

use serde::Deserialize;

use bundlesvg_core::{color::Color, draw::StrokeDefinition};

const DEFAULT_ICON_SIZE: NonZeroU32 = NonZeroU32::new(96).unwrap();
const DEFAULT_X_KEY: &str = "gui-x";
const DEFAULT_Y_KEY: &str = "gui-y";
const DEFAULT_URL_TEMPLATE: &str = "https://api.jujucharms.com/charmstore/v5/{path}/icon.svg";

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Position annotation section.
    #[serde(default)]
    position: PositionConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,

    /// Icon resolution section.
    #[serde(default)]
    icons: IconConfig,
}

impl AppConfig {
    /// Replaces the layout section (builder style).
    pub fn with_layout(mut self, layout: LayoutConfig) -> Self {
        self.layout = layout;
        self
    }

    /// Replaces the position section (builder style).
    pub fn with_position(mut self, position: PositionConfig) -> Self {
        self.position = position;
        self
    }

    /// Replaces the style section (builder style).
    pub fn with_style(mut self, style: StyleConfig) -> Self {
        self.style = style;
        self
    }

    /// Replaces the icons section (builder style).
    pub fn with_icons(mut self, icons: IconConfig) -> Self {
        self.icons = icons;
        self
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the position configuration.
    pub fn position(&self) -> &PositionConfig {
        &self.position
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Returns the icon configuration.
    pub fn icons(&self) -> &IconConfig {
        &self.icons
    }
}

/// Where relation lines start and end.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RelationEndpoints {
    /// Lines run from icon center to icon center.
    #[default]
    Center,
    /// Lines are cut where they cross the icon's square boundary.
    IconBoundary,
}

/// Layout configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LayoutConfig {
    /// Side length of every service icon, in pixels.
    #[serde(default = "default_icon_size")]
    icon_size: NonZeroU32,

    /// How relation lines meet the icons.
    #[serde(default)]
    relation_endpoints: RelationEndpoints,
}

fn default_icon_size() -> NonZeroU32 {
    DEFAULT_ICON_SIZE
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            icon_size: default_icon_size(),
            relation_endpoints: RelationEndpoints::default(),
        }
    }
}

impl LayoutConfig {
    /// Creates a new [`LayoutConfig`].
    ///
    /// # Arguments
    ///
    /// * `icon_size` - Side length of every service icon, in pixels.
    /// * `relation_endpoints` - How relation lines meet the icons.
    pub fn new(icon_size: NonZeroU32, relation_endpoints: RelationEndpoints) -> Self {
        Self {
            icon_size,
            relation_endpoints,
        }
    }

    pub fn icon_size(&self) -> NonZeroU32 {
        self.icon_size
    }

    pub fn relation_endpoints(&self) -> RelationEndpoints {
        self.relation_endpoints
    }
}

/// Annotation keys holding each service's canvas position.
#[derive(Debug, Clone, Deserialize)]
pub struct PositionConfig {
    #[serde(default = "default_x_key")]
    x_key: String,

    #[serde(default = "default_y_key")]
    y_key: String,
}

fn default_x_key() -> String {
    DEFAULT_X_KEY.to_string()
}

fn default_y_key() -> String {
    DEFAULT_Y_KEY.to_string()
}

impl Default for PositionConfig {
    fn default() -> Self {
        Self {
            x_key: default_x_key(),
            y_key: default_y_key(),
        }
    }
}

impl PositionConfig {
    pub fn new(x_key: impl Into<String>, y_key: impl Into<String>) -> Self {
        Self {
            x_key: x_key.into(),
            y_key: y_key.into(),
        }
    }

    /// Annotation key of the horizontal coordinate
    pub fn x_key(&self) -> &str {
        &self.x_key
    }

    /// Annotation key of the vertical coordinate
    pub fn y_key(&self) -> &str {
        &self.y_key
    }
}

/// Visual styling configuration for relation lines.
///
/// Fields that are not set fall back to a thin black stroke.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// Relation line color, as a CSS color string.
    #[serde(default)]
    relation_stroke: Option<String>,

    /// Relation line width in pixels.
    #[serde(default)]
    relation_stroke_width: Option<f32>,
}

impl StyleConfig {
    pub fn new(relation_stroke: Option<String>, relation_stroke_width: Option<f32>) -> Self {
        Self {
            relation_stroke,
            relation_stroke_width,
        }
    }

    /// Returns the stroke used for relation lines.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color cannot be parsed or the width
    /// is not a positive number.
    pub fn relation_stroke(&self) -> Result<StrokeDefinition, String> {
        let color = self
            .relation_stroke
            .as_deref()
            .map(Color::new)
            .transpose()
            .map_err(|err| format!("Invalid relation stroke in config: {err}"))?
            .unwrap_or_default();

        let stroke = StrokeDefinition::new(color);
        match self.relation_stroke_width {
            None => Ok(stroke),
            Some(width) if width.is_finite() && width > 0.0 => Ok(stroke.with_width(width)),
            Some(width) => Err(format!(
                "Invalid relation stroke width in config: {width} is not a positive number"
            )),
        }
    }
}

/// Icon resolution configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct IconConfig {
    /// URL template; `{path}` is replaced by the charm reference path.
    #[serde(default = "default_url_template")]
    url_template: String,
}

fn default_url_template() -> String {
    DEFAULT_URL_TEMPLATE.to_string()
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            url_template: default_url_template(),
        }
    }
}

impl IconConfig {
    pub fn new(url_template: impl Into<String>) -> Self {
        Self {
            url_template: url_template.into(),
        }
    }

    pub fn url_template(&self) -> &str {
        &self.url_template
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.layout().icon_size().get(), 96);
        assert_eq!(config.layout().relation_endpoints(), RelationEndpoints::Center);
        assert_eq!(config.position().x_key(), "gui-x");
        assert_eq!(config.position().y_key(), "gui-y");
        assert_eq!(
            config.style().relation_stroke().unwrap().to_style(),
            "stroke:black"
        );
        assert!(config.icons().url_template().contains("{path}"));
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.layout().icon_size().get(), 96);
    }

    #[test]
    fn test_full_toml() {
        let config: AppConfig = toml::from_str(
            r##"
            [layout]
            icon_size = 48
            relation_endpoints = "icon-boundary"

            [position]
            x_key = "x"
            y_key = "y"

            [style]
            relation_stroke = "#336699"
            relation_stroke_width = 2.0

            [icons]
            url_template = "http://icons.local/{path}.svg"
            "##,
        )
        .unwrap();

        assert_eq!(config.layout().icon_size().get(), 48);
        assert_eq!(
            config.layout().relation_endpoints(),
            RelationEndpoints::IconBoundary
        );
        assert_eq!(config.position().x_key(), "x");
        assert_eq!(
            config.style().relation_stroke().unwrap().to_style(),
            "stroke:#336699;stroke-width:2"
        );
        assert_eq!(config.icons().url_template(), "http://icons.local/{path}.svg");
    }

    #[test]
    fn test_zero_icon_size_rejected() {
        let result: Result<AppConfig, _> = toml::from_str("[layout]\nicon_size = 0\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_stroke() {
        let style = StyleConfig::new(Some("not a color".to_string()), None);
        assert!(style.relation_stroke().unwrap_err().contains("relation stroke"));

        let style = StyleConfig::new(None, Some(-1.0));
        assert!(style.relation_stroke().unwrap_err().contains("width"));
    }

    #[test]
    fn test_builders() {
        let config = AppConfig::default()
            .with_layout(LayoutConfig::new(
                NonZeroU32::new(32).unwrap(),
                RelationEndpoints::IconBoundary,
            ))
            .with_position(PositionConfig::new("left", "top"))
            .with_style(StyleConfig::new(Some("red".to_string()), None))
            .with_icons(IconConfig::new("{path}"));

        assert_eq!(config.layout().icon_size().get(), 32);
        assert_eq!(config.position().y_key(), "top");
        assert_eq!(config.style().relation_stroke().unwrap().to_style(), "stroke:red");
        assert_eq!(config.icons().url_template(), "{path}");
    }
}
