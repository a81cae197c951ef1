//! Basic geometric types used to place icons and route relation lines.
//!
//! All coordinates are canvas pixels stored as `f64`. Conversion to the
//! whole-pixel values written to the document goes through [`to_pixel`], which
//! is the single rounding policy of the crate.

/// Converts a canvas coordinate into the whole pixel written to the output.
///
/// The fractional part is truncated toward zero. Normalized coordinates are
/// never negative, so this is equivalent to `floor`. The result stays a float
/// so that no magnitude is clamped; it formats without a fractional part.
pub fn to_pixel(value: f64) -> f64 {
    // Adding zero turns `-0.0` into `0.0`.
    value.trunc() + 0.0
}

/// A point in 2D canvas space.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f64 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f64 {
        self.y
    }

    /// Adds another point to this point, returning a new point
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Subtracts another point from this point, returning a new point
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Multiplies both coordinates by the given factor
    pub fn scale(self, factor: f64) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    /// Component-wise minimum of two points
    pub fn min(self, other: Point) -> Self {
        Self {
            x: self.x.min(other.x),
            y: self.y.min(other.y),
        }
    }

    /// Component-wise maximum of two points
    pub fn max(self, other: Point) -> Self {
        Self {
            x: self.x.max(other.x),
            y: self.y.max(other.y),
        }
    }
}

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f64,
    height: f64,
}

impl Size {
    /// Creates a square size with equal sides
    pub fn square(side: f64) -> Self {
        Self {
            width: side,
            height: side,
        }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f64 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f64 {
        self.height
    }

    /// Returns half of this size as an offset from a center to a corner
    pub fn half(self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}
