use crate::math::{Point, Real};

/// The raycasting primitive of an AR tracking session.
pub trait Raycaster {
    /// Casts a ray through the normalized screen point `(x, y)`, both in `[0, 1]`, and returns
    /// the world-space position of the first hit, if any.
    fn raycast(&self, x: Real, y: Real) -> Option<Point<Real>>;
}

impl<F> Raycaster for F
where
    F: Fn(Real, Real) -> Option<Point<Real>>,
{
    #[inline]
    fn raycast(&self, x: Real, y: Real) -> Option<Point<Real>> {
        self(x, y)
    }
}
