//! Color handling for relation strokes.
//!
//! This module provides the [`Color`] type which validates CSS color strings
//! through the `DynamicColor` type from the color crate while keeping the
//! original spelling, so `black` is written back as `black` rather than a
//! normalized `rgb(...)` form.

use std::{fmt, str::FromStr};

use color::DynamicColor;

/// A validated CSS color that renders as it was written.
#[derive(Clone, PartialEq, Debug)]
pub struct Color {
    css: String,
}

impl Color {
    /// Create a new `Color` from a string
    /// This will parse CSS color strings such as "#ff0000", "rgb(255, 0, 0)", "red", etc.
    ///
    /// # Examples
    ///
    /// ```
    /// use bundlesvg_core::color::Color;
    ///
    /// let red = Color::new("#ff0000").unwrap();
    /// assert_eq!(red.to_string(), "#ff0000");
    /// assert!(Color::new("not-a-color").is_err());
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        let css = color_str.trim();
        match DynamicColor::from_str(css) {
            Ok(_) => Ok(Self {
                css: css.to_string(),
            }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").expect("'black' is a valid CSS color")
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.css)
    }
}
