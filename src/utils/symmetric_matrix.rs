use crate::math::{Matrix, Real, Vector};
use na::{Matrix3, RealField, Vector3};
use std::ops::{Add, AddAssign, Mul};

/// A 3x3 symmetric matrix.
///
/// Only the six components of the upper triangle are stored, the lower triangle mirrors them.
/// Covariance matrices of point clouds are the main instances of this type, but nothing here
/// requires the matrix to be positive-definite.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct SymmetricMatrix3<N> {
    /// The component at the first row and first column of this matrix.
    pub m11: N,
    /// The component at the first row and second column of this matrix.
    pub m12: N,
    /// The component at the first row and third column of this matrix.
    pub m13: N,
    /// The component at the second row and second column of this matrix.
    pub m22: N,
    /// The component at the second row and third column of this matrix.
    pub m23: N,
    /// The component at the third row and third column of this matrix.
    pub m33: N,
}

impl<N: RealField + Copy> SymmetricMatrix3<N> {
    /// A new symmetric 3x3 matrix with the given upper-triangle components.
    pub fn new(m11: N, m12: N, m13: N, m22: N, m23: N, m33: N) -> Self {
        Self {
            m11,
            m12,
            m13,
            m22,
            m23,
            m33,
        }
    }

    /// Build a `SymmetricMatrix3` from a plain matrix by reading its upper triangle.
    ///
    /// No check is performed to ensure `mat` is actually symmetric.
    pub fn from_upper_triangle(mat: &Matrix3<N>) -> Self {
        Self {
            m11: mat.m11,
            m12: mat.m12,
            m13: mat.m13,
            m22: mat.m22,
            m23: mat.m23,
            m33: mat.m33,
        }
    }

    /// The outer product `v * v^T`.
    pub fn outer(v: &Vector3<N>) -> Self {
        Self {
            m11: v.x * v.x,
            m12: v.x * v.y,
            m13: v.x * v.z,
            m22: v.y * v.y,
            m23: v.y * v.z,
            m33: v.z * v.z,
        }
    }

    /// Create a new symmetric matrix filled with zeros.
    pub fn zero() -> Self {
        Self {
            m11: N::zero(),
            m12: N::zero(),
            m13: N::zero(),
            m22: N::zero(),
            m23: N::zero(),
            m33: N::zero(),
        }
    }

    /// Create a new symmetric matrix with its diagonal filled with `val`, and its off-diagonal
    /// elements set to zero.
    pub fn diagonal(val: N) -> Self {
        Self {
            m11: val,
            m12: N::zero(),
            m13: N::zero(),
            m22: val,
            m23: N::zero(),
            m33: val,
        }
    }

    /// Are all components of this matrix equal to zero?
    pub fn is_zero(&self) -> bool {
        self.m11.is_zero()
            && self.m12.is_zero()
            && self.m13.is_zero()
            && self.m22.is_zero()
            && self.m23.is_zero()
            && self.m33.is_zero()
    }

    /// The sum of the diagonal components, i.e., the sum of the eigenvalues.
    pub fn trace(&self) -> N {
        self.m11 + self.m22 + self.m33
    }

    /// The determinant of this matrix.
    pub fn determinant(&self) -> N {
        let minor_m22_m33 = self.m22 * self.m33 - self.m23 * self.m23;
        let minor_m12_m33 = self.m12 * self.m33 - self.m13 * self.m23;
        let minor_m12_m23 = self.m12 * self.m23 - self.m13 * self.m22;

        self.m11 * minor_m22_m33 - self.m12 * minor_m12_m33 + self.m13 * minor_m12_m23
    }

    /// Computes the quadratic form `v^T * self * v`.
    ///
    /// For a unit vector `v` this is the Rayleigh quotient of `self` along `v`.
    pub fn quadform(&self, v: &Vector3<N>) -> N {
        v.dot(&(*self * *v))
    }

    /// Convert this symmetric matrix to a regular matrix representation.
    pub fn into_matrix(self) -> Matrix3<N> {
        Matrix3::new(
            self.m11, self.m12, self.m13, self.m12, self.m22, self.m23, self.m13, self.m23,
            self.m33,
        )
    }
}

impl<N: RealField + Copy> Add<SymmetricMatrix3<N>> for SymmetricMatrix3<N> {
    type Output = Self;

    fn add(self, rhs: SymmetricMatrix3<N>) -> Self {
        Self::new(
            self.m11 + rhs.m11,
            self.m12 + rhs.m12,
            self.m13 + rhs.m13,
            self.m22 + rhs.m22,
            self.m23 + rhs.m23,
            self.m33 + rhs.m33,
        )
    }
}

impl<N: RealField + Copy> AddAssign<SymmetricMatrix3<N>> for SymmetricMatrix3<N> {
    fn add_assign(&mut self, rhs: SymmetricMatrix3<N>) {
        self.m11 += rhs.m11;
        self.m12 += rhs.m12;
        self.m13 += rhs.m13;
        self.m22 += rhs.m22;
        self.m23 += rhs.m23;
        self.m33 += rhs.m33;
    }
}

impl Mul<Real> for SymmetricMatrix3<Real> {
    type Output = SymmetricMatrix3<Real>;

    fn mul(self, rhs: Real) -> Self::Output {
        SymmetricMatrix3 {
            m11: self.m11 * rhs,
            m12: self.m12 * rhs,
            m13: self.m13 * rhs,
            m22: self.m22 * rhs,
            m23: self.m23 * rhs,
            m33: self.m33 * rhs,
        }
    }
}

impl<N: RealField + Copy> Mul<Vector3<N>> for SymmetricMatrix3<N> {
    type Output = Vector3<N>;

    fn mul(self, rhs: Vector3<N>) -> Self::Output {
        let x = self.m11 * rhs.x + self.m12 * rhs.y + self.m13 * rhs.z;
        let y = self.m12 * rhs.x + self.m22 * rhs.y + self.m23 * rhs.z;
        let z = self.m13 * rhs.x + self.m23 * rhs.y + self.m33 * rhs.z;
        Vector3::new(x, y, z)
    }
}

impl From<SymmetricMatrix3<Real>> for Matrix<Real> {
    fn from(m: SymmetricMatrix3<Real>) -> Self {
        m.into_matrix()
    }
}

impl From<Vector<Real>> for SymmetricMatrix3<Real> {
    /// A diagonal matrix with the given diagonal.
    fn from(diag: Vector<Real>) -> Self {
        SymmetricMatrix3::new(diag.x, 0.0, 0.0, diag.y, 0.0, diag.z)
    }
}
