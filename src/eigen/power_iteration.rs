use super::{EigenSolverOptions, PrincipalAxes, ThirdAxisStrategy};
use crate::math::{Real, SymmetricMatrix, Vector, DIM};
use ordered_float::OrderedFloat;

/// A Gram-Schmidt seed shorter than this after orthogonalization is replaced by a better
/// conditioned coordinate axis.
const MIN_SEED_RESIDUAL: Real = 0.5;

/// Computes the principal axes and eigenvalues of a symmetric 3x3 matrix.
///
/// The axes are extracted one at a time by power iteration, starting from the coordinate axes
/// `e1`, `e2`, `e3`, each one restricted to the orthogonal complement of the previous ones. They
/// are returned in extraction order: the first axis is the dominant one, but the result is not
/// sorted afterwards (see [`PrincipalAxes::sorted_descending`]).
///
/// This never fails. If a direction is degenerate (repeated or zero eigenvalue in the remaining
/// subspace), iteration on that axis stops, the current unit vector orthogonal to the previous
/// axes is kept, and the result is flagged as unstable.
pub fn symmetric_eigen(m: &SymmetricMatrix<Real>, options: &EigenSolverOptions) -> PrincipalAxes {
    let mut axes = [Vector::zeros(); DIM];
    let mut eigenvalues = Vector::zeros();
    let mut is_stable = true;

    for i in 0..DIM {
        let found = &axes[..i];

        let axis = if i == 2 && options.third_axis == ThirdAxisStrategy::CrossProduct {
            axes[0]
                .cross(&axes[1])
                .try_normalize(Real::EPSILON)
                .unwrap_or_else(|| orthogonal_seed(i, found))
        } else {
            let (axis, stable, steps) = power_iterate(m, orthogonal_seed(i, found), found, options);
            log::trace!("Power iteration on axis {} stopped after {} steps.", i, steps);
            is_stable &= stable;
            axis
        };

        axes[i] = axis;
        eigenvalues[i] = m.quadform(&axis);
    }

    if !is_stable {
        log::debug!(
            "Degenerate direction hit during eigen-decomposition, eigenvalues: {:?}",
            eigenvalues.as_slice()
        );
    }

    PrincipalAxes {
        axes,
        eigenvalues,
        is_stable,
    }
}

/// Removes from `v` its components along each of the (unit) `basis` vectors.
#[inline]
fn reject(v: Vector<Real>, basis: &[Vector<Real>]) -> Vector<Real> {
    basis.iter().fold(v, |acc, b| acc - b * b.dot(&acc))
}

/// A unit vector orthogonal to all the `found` axes, preferably close to the `i`-th coordinate
/// axis.
///
/// `found` must contain less than three orthonormal vectors.
fn orthogonal_seed(i: usize, found: &[Vector<Real>]) -> Vector<Real> {
    // Orthogonalizing twice keeps the result orthogonal to working precision.
    let residual = |k: usize| reject(reject(Vector::ith(k, 1.0), found), found);
    let preferred = residual(i);

    let seed = if preferred.norm() >= MIN_SEED_RESIDUAL {
        preferred
    } else {
        // The residuals' squared norms sum to `3 - found.len()` so the largest one can't vanish.
        (0..DIM)
            .map(residual)
            .max_by_key(|r| OrderedFloat(r.norm_squared()))
            .unwrap_or(preferred)
    };

    seed.normalize()
}

/// Runs power iteration on `m` from `seed`, within the orthogonal complement of `found`.
///
/// Returns the last estimate, whether no degenerate direction was detected, and the number of
/// steps performed.
fn power_iterate(
    m: &SymmetricMatrix<Real>,
    seed: Vector<Real>,
    found: &[Vector<Real>],
    options: &EigenSolverOptions,
) -> (Vector<Real>, bool, usize) {
    let mut v = seed;

    for step in 0..options.max_iterations {
        let projected = reject(*m * v, found);
        let len = projected.norm();

        // NOTE: written so that a NaN length is treated as degenerate too.
        if !(len >= options.degeneracy_epsilon) {
            return (v, false, step);
        }

        let next = projected / len;
        let delta = (next - v).norm();
        v = next;

        if delta < options.convergence_epsilon {
            return (v, true, step + 1);
        }
    }

    (v, true, options.max_iterations)
}
