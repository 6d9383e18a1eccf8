//! Disc and two-circle lens areas.

use std::f64::consts::PI;

use crate::shapes::Circle;

/// Area of a disc of radius `radius`.
#[inline]
pub fn circle_area(radius: f64) -> f64 {
    PI * radius * radius
}

/// Area of the intersection of two circles.
///
/// The lens is split along the common chord into two circular segments:
///
/// ```text
/// A = r1²·acos((d² + r1² − r2²) / (2·d·r1))
///   + r2²·acos((d² + r2² − r1²) / (2·d·r2))
///   − ½·√((−d + r1 + r2)(d + r1 − r2)(d − r1 + r2)(d + r1 + r2))
/// ```
///
/// Disjoint or tangent circles give zero; when one circle lies inside the
/// other the smaller disc is returned.
pub fn lens_area(a: &Circle, b: &Circle) -> f64 {
    let r1 = a.radius;
    let r2 = b.radius;
    let d = (a.center_x - b.center_x).hypot(a.center_y - b.center_y);

    if d >= r1 + r2 {
        return 0.0;
    }
    if d <= (r1 - r2).abs() {
        return circle_area(r1.min(r2));
    }

    // Clamp guards acos against rounding just outside [-1, 1]
    let cos1 = ((d * d + r1 * r1 - r2 * r2) / (2.0 * d * r1)).clamp(-1.0, 1.0);
    let cos2 = ((d * d + r2 * r2 - r1 * r1) / (2.0 * d * r2)).clamp(-1.0, 1.0);
    let kite = (-d + r1 + r2) * (d + r1 - r2) * (d - r1 + r2) * (d + r1 + r2);

    r1 * r1 * cos1.acos() + r2 * r2 * cos2.acos() - 0.5 * kite.max(0.0).sqrt()
}
