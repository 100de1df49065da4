use crate::math::{Point, Real, SymmetricMatrix};
use crate::num::FromPrimitive;

/// Computes the covariance matrix of a set of points.
pub fn cov(pts: &[Point<Real>]) -> Option<SymmetricMatrix<Real>> {
    center_cov(pts).map(|(_, cov)| cov)
}

/// Computes the center and the covariance matrix of a set of points.
///
/// The covariance is normalized by the number of points (not `N - 1`). Returns `None` if `pts`
/// is empty.
pub fn center_cov(pts: &[Point<Real>]) -> Option<(Point<Real>, SymmetricMatrix<Real>)> {
    let center = crate::utils::center(pts)?;
    let normalizer = Real::from_usize(pts.len())?.recip();
    let mut cov = SymmetricMatrix::zero();

    for p in pts {
        let cp = *p - center;
        // NOTE: scaling each term keeps the accumulator in the same range as the result.
        cov += SymmetricMatrix::outer(&cp) * normalizer;
    }

    Some((center, cov))
}
