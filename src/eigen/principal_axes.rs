use crate::math::{Matrix, Real, Rotation, Vector, DIM};
use na::Rotation3;
use ordered_float::OrderedFloat;

/// Three orthonormal axes and the matching eigenvalues of a symmetric 3x3 matrix.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct PrincipalAxes {
    /// The unit axes, in extraction order.
    pub axes: [Vector<Real>; DIM],
    /// `eigenvalues[i]` is the Rayleigh quotient of the decomposed matrix along `axes[i]`.
    pub eigenvalues: Vector<Real>,
    /// `false` if a degenerate direction was hit while extracting the axes.
    pub is_stable: bool,
}

impl PrincipalAxes {
    /// The matrix having the principal axes as columns.
    #[inline]
    pub fn matrix(&self) -> Matrix<Real> {
        Matrix::from_columns(&self.axes)
    }

    /// The determinant of [`Self::matrix`]: `+1` for a right-handed frame, `-1` otherwise.
    #[inline]
    pub fn determinant(&self) -> Real {
        self.axes[0].cross(&self.axes[1]).dot(&self.axes[2])
    }

    /// Is `axes[2] == axes[0] × axes[1]`, up to numerical errors?
    #[inline]
    pub fn is_right_handed(&self) -> bool {
        self.determinant() > 0.0
    }

    /// Do the axes have unit length and are they mutually orthogonal, up to `epsilon`?
    pub fn is_orthonormal(&self, epsilon: Real) -> bool {
        (0..DIM).all(|i| {
            abs_diff_eq!(self.axes[i].norm(), 1.0, epsilon = epsilon)
                && (i + 1..DIM).all(|j| abs_diff_eq!(self.axes[i].dot(&self.axes[j]), 0.0, epsilon = epsilon))
        })
    }

    /// The sum of the eigenvalues.
    ///
    /// For a covariance matrix, this is the total variance of the point cloud.
    #[inline]
    pub fn total_variance(&self) -> Real {
        self.eigenvalues.sum()
    }

    /// Negates the third axis if needed so the frame becomes right-handed.
    pub fn into_right_handed(mut self) -> Self {
        if self.determinant() < 0.0 {
            self.axes[2] = -self.axes[2];
        }
        self
    }

    /// Reorders the axes by decreasing eigenvalue.
    ///
    /// The solver returns axes in extraction order, which is usually but not necessarily sorted.
    /// The handedness of the frame is preserved.
    pub fn sorted_descending(&self) -> Self {
        let mut order = [0, 1, 2];
        order.sort_by_key(|i| core::cmp::Reverse(OrderedFloat(self.eigenvalues[*i])));

        let right_handed = self.is_right_handed();
        let mut result = Self {
            axes: order.map(|i| self.axes[i]),
            eigenvalues: Vector::new(
                self.eigenvalues[order[0]],
                self.eigenvalues[order[1]],
                self.eigenvalues[order[2]],
            ),
            is_stable: self.is_stable,
        };

        if result.is_right_handed() != right_handed {
            result.axes[2] = -result.axes[2];
        }

        result
    }

    /// The rotation mapping the canonical basis to these axes.
    ///
    /// The frame must be right-handed for the result to be meaningful, see
    /// [`Self::into_right_handed`].
    pub fn rotation(&self) -> Rotation<Real> {
        Rotation::from_rotation_matrix(&Rotation3::from_matrix_unchecked(self.matrix()))
    }
}
