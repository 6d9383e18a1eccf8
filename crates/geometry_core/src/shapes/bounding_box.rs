//! Axis-aligned sampling rectangle.

use serde::Deserialize;

use super::circle::{Circle, Point};
use crate::types::GeometryError;

/// Axis-aligned rectangle `[x_min, x_max] × [y_min, y_max]`.
///
/// Instances built through [`BoundingBox::new`] always satisfy
/// `x_min <= x_max`, `y_min <= y_max` with finite bounds. Zero width or
/// height is permitted and gives a degenerate box of area zero.
///
/// # Examples
///
/// ```rust
/// use geometry_core::shapes::BoundingBox;
///
/// let tight = BoundingBox::square(0.7, 2.1).unwrap();
/// assert!((tight.area() - 1.96).abs() < 1e-12);
///
/// assert!(BoundingBox::new(1.0, 0.0, 0.0, 1.0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(try_from = "RawBounds")]
pub struct BoundingBox {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

/// Unchecked field layout; deserialised boxes go through [`BoundingBox::new`].
#[derive(Deserialize)]
struct RawBounds {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl TryFrom<RawBounds> for BoundingBox {
    type Error = GeometryError;

    fn try_from(raw: RawBounds) -> Result<Self, Self::Error> {
        Self::new(raw.x_min, raw.x_max, raw.y_min, raw.y_max)
    }
}

impl BoundingBox {
    /// Creates a bounding box, checking its invariants.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::NonFinite` if any bound is NaN or infinite, and
    /// `GeometryError::InvertedBounds` if a minimum exceeds its maximum.
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Result<Self, GeometryError> {
        for (name, value) in [
            ("x_min", x_min),
            ("x_max", x_max),
            ("y_min", y_min),
            ("y_max", y_max),
        ] {
            if !value.is_finite() {
                return Err(GeometryError::NonFinite { name, value });
            }
        }
        if x_min > x_max {
            return Err(GeometryError::InvertedBounds {
                axis: 'x',
                min: x_min,
                max: x_max,
            });
        }
        if y_min > y_max {
            return Err(GeometryError::InvertedBounds {
                axis: 'y',
                min: y_min,
                max: y_max,
            });
        }
        Ok(Self {
            x_min,
            x_max,
            y_min,
            y_max,
        })
    }

    /// Creates the square `[min, max] × [min, max]`.
    ///
    /// # Errors
    ///
    /// Same conditions as [`BoundingBox::new`].
    pub fn square(min: f64, max: f64) -> Result<Self, GeometryError> {
        Self::new(min, max, min, max)
    }

    /// Creates the tightest box covering every circle's extent.
    ///
    /// `x_min = min(x_i - r_i)`, `x_max = max(x_i + r_i)`, likewise for y.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::EmptyCircleSet` for an empty slice, or the
    /// [`BoundingBox::new`] errors when the extents are not a valid box
    /// (e.g. every radius negative).
    pub fn covering(circles: &[Circle]) -> Result<Self, GeometryError> {
        let first = circles.first().ok_or(GeometryError::EmptyCircleSet)?;
        let init = (
            first.center_x - first.radius,
            first.center_x + first.radius,
            first.center_y - first.radius,
            first.center_y + first.radius,
        );
        let (x_min, x_max, y_min, y_max) =
            circles
                .iter()
                .skip(1)
                .fold(init, |(x_lo, x_hi, y_lo, y_hi), c| {
                    (
                        x_lo.min(c.center_x - c.radius),
                        x_hi.max(c.center_x + c.radius),
                        y_lo.min(c.center_y - c.radius),
                        y_hi.max(c.center_y + c.radius),
                    )
                });
        Self::new(x_min, x_max, y_min, y_max)
    }

    /// Lower x bound.
    #[inline]
    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    /// Upper x bound.
    #[inline]
    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    /// Lower y bound.
    #[inline]
    pub fn y_min(&self) -> f64 {
        self.y_min
    }

    /// Upper y bound.
    #[inline]
    pub fn y_max(&self) -> f64 {
        self.y_max
    }

    /// Extent along x.
    #[inline]
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    /// Extent along y.
    #[inline]
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Rectangle area; zero for a degenerate box.
    #[inline]
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Returns `true` if the box has zero area.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.area() == 0.0
    }

    /// Maps unit-square coordinates `(u, v)` onto the box.
    ///
    /// `u` and `v` drawn from `U[0, 1)` give a uniform point in the box.
    #[inline]
    pub fn point_at(&self, u: f64, v: f64) -> Point {
        Point::new(
            self.x_min + self.width() * u,
            self.y_min + self.height() * v,
        )
    }

    /// Returns `true` if `point` lies in the closed rectangle.
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x_min
            && point.x <= self.x_max
            && point.y >= self.y_min
            && point.y <= self.y_max
    }
}
