//! Points, circles and the inclusion predicate.

use serde::Deserialize;

use crate::types::GeometryError;

/// A point in the plane.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Creates a point.
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A circle given by its centre and radius.
///
/// Construction is unchecked. Inclusion compares squared distances, so a
/// negative radius behaves like its absolute value and a zero radius contains
/// only the centre. Use [`Circle::validate`] when the values come from
/// untrusted input.
///
/// # Examples
///
/// ```rust
/// use geometry_core::shapes::{Circle, Point};
///
/// let c = Circle::new(1.0, 1.0, 1.0);
/// assert!(c.contains(Point::new(1.0, 0.0)));
/// assert!(!c.contains(Point::new(0.0, 0.0)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Circle {
    /// Centre x coordinate.
    #[serde(alias = "x")]
    pub center_x: f64,
    /// Centre y coordinate.
    #[serde(alias = "y")]
    pub center_y: f64,
    /// Radius.
    #[serde(alias = "r")]
    pub radius: f64,
}

impl Circle {
    /// Creates a circle from centre coordinates and radius.
    #[inline]
    pub fn new(center_x: f64, center_y: f64, radius: f64) -> Self {
        Self {
            center_x,
            center_y,
            radius,
        }
    }

    /// Returns `true` if `point` lies inside or on the boundary.
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        is_inside(point, self)
    }

    /// Checks that all fields are finite and the radius is positive.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::NonFinite` or `GeometryError::NonPositiveRadius`.
    pub fn validate(&self) -> Result<(), GeometryError> {
        for (name, value) in [
            ("center_x", self.center_x),
            ("center_y", self.center_y),
            ("radius", self.radius),
        ] {
            if !value.is_finite() {
                return Err(GeometryError::NonFinite { name, value });
            }
        }
        if self.radius <= 0.0 {
            return Err(GeometryError::NonPositiveRadius(self.radius));
        }
        Ok(())
    }
}

/// Returns `true` iff `point` is inside `circle`, boundary included.
///
/// Compares squared distances exactly; no tolerance is applied.
#[inline]
pub fn is_inside(point: Point, circle: &Circle) -> bool {
    let dx = point.x - circle.center_x;
    let dy = point.y - circle.center_y;
    dx * dx + dy * dy <= circle.radius * circle.radius
}
