use crate::math::{Point, Real};
use crate::num::FromPrimitive;

/// Computes the geometric center (centroid) of a set of points.
///
/// All points are weighted equally. Returns `None` if `pts` is empty.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use armeasure3d::math::Point;
/// use armeasure3d::utils::center;
///
/// let points = [
///     Point::new(0.0, 0.0, 0.0),
///     Point::new(4.0, 0.0, 0.0),
///     Point::new(0.0, 4.0, 0.0),
/// ];
///
/// let c = center(&points).unwrap();
/// assert!((c.x - 4.0 / 3.0).abs() < 1e-6);
/// assert!((c.y - 4.0 / 3.0).abs() < 1e-6);
/// assert!(c.z.abs() < 1e-6);
/// # }
/// ```
#[inline]
pub fn center(pts: &[Point<Real>]) -> Option<Point<Real>> {
    let denom = Real::from_usize(pts.len()).filter(|n| *n > 0.0)?.recip();
    let mut piter = pts.iter();
    let mut res = *piter.next()? * denom;

    for pt in piter {
        res += pt.coords * denom;
    }

    Some(res)
}
