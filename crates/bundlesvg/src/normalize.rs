//! Canvas normalization.
//!
//! Service positions are icon centers in an arbitrary coordinate space. The
//! normalizer translates them so the top-left corner of the top-most and
//! left-most icons lands on the origin, and sizes the canvas to hold every
//! icon as it will be written out (whole pixels, see
//! [`to_pixel`](bundlesvg_core::geometry::to_pixel)).

use log::debug;

use bundlesvg_core::geometry::{Point, Size, to_pixel};

/// Final drawing surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Canvas {
    width: f64,
    height: f64,
    icon: Size,
}

impl Canvas {
    /// Whole-pixel width of the document.
    pub(crate) fn width(&self) -> f64 {
        self.width
    }

    /// Whole-pixel height of the document.
    pub(crate) fn height(&self) -> f64 {
        self.height
    }

    pub(crate) fn icon(&self) -> Size {
        self.icon
    }
}

/// The translation that makes every position non-negative, plus the canvas
/// that holds the translated icons.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Normalization {
    origin: Point,
    canvas: Canvas,
}

impl Normalization {
    /// The offset (Δx, Δy) added to every raw position.
    pub(crate) fn translation(&self) -> Point {
        self.canvas.icon.half().sub_point(self.origin)
    }

    /// Maps a raw icon center onto the canvas.
    ///
    /// The minimum is subtracted before the half icon is added, so the icons
    /// on the top and left edges get exact corner coordinates.
    pub(crate) fn apply(&self, raw: Point) -> Point {
        raw.sub_point(self.origin).add_point(self.canvas.icon.half())
    }

    pub(crate) fn canvas(&self) -> Canvas {
        self.canvas
    }
}

/// Computes the [`Normalization`] for a set of named icon centers.
///
/// An empty set yields a zero-sized canvas.
pub(crate) fn normalize(positions: &[(&str, Point)], icon_size: u32) -> Normalization {
    let side = f64::from(icon_size);
    let icon = Size::square(side);

    let Some(origin) = positions
        .iter()
        .map(|(_, point)| *point)
        .reduce(Point::min)
    else {
        return Normalization {
            origin: Point::default(),
            canvas: Canvas {
                width: 0.0,
                height: 0.0,
                icon,
            },
        };
    };

    let mut normalization = Normalization {
        origin,
        canvas: Canvas {
            width: side,
            height: side,
            icon,
        },
    };

    // Same arithmetic the icon placer uses for the image corner.
    let max_corner = positions
        .iter()
        .map(|(_, raw)| normalization.apply(*raw).sub_point(icon.half()))
        .fold(Point::default(), Point::max);

    normalization.canvas.width = to_pixel(max_corner.x()) + side;
    normalization.canvas.height = to_pixel(max_corner.y()) + side;

    debug!(
        width = normalization.canvas.width,
        height = normalization.canvas.height,
        dx = normalization.translation().x(),
        dy = normalization.translation().y();
        "Canvas normalized"
    );

    normalization
}
