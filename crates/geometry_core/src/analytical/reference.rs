//! Fixed three-circle configuration used by the convergence sweep.
//!
//! The circles are
//!
//! ```text
//! C1: centre (1.0, 1.0), radius 1
//! C2: centre (1.5, 2.0), radius √5 / 2
//! C3: centre (2.0, 1.5), radius √5 / 2
//! ```
//!
//! The common region is a curvilinear triangle with corners (1, 1), (2, 1)
//! and (1, 2). Its area is the right triangle on those corners (½) plus the
//! segment of C1 over the hypotenuse (π/4 − ½) plus the segments of C2 and C3
//! over the unit legs (each 0.625·(asin(0.8) − 0.8)), which sums to
//! `π/4 + 1.25·asin(0.8) − 1`.

use std::f64::consts::PI;

use crate::shapes::Circle;

/// Returns the three reference circles in sweep order.
pub fn reference_circles() -> [Circle; 3] {
    let r = 5.0_f64.sqrt() / 2.0;
    [
        Circle::new(1.0, 1.0, 1.0),
        Circle::new(1.5, 2.0, r),
        Circle::new(2.0, 1.5, r),
    ]
}

/// Exact area common to all of [`reference_circles`].
#[inline]
pub fn reference_intersection_area() -> f64 {
    0.25 * PI + 1.25 * 0.8_f64.asin() - 1.0
}
