//! Eigen-decomposition of symmetric 3x3 matrices by power iteration with deflation.
//!
//! The solver extracts the principal axes one after the other: each axis is found by power
//! iteration restricted to the orthogonal complement of the axes already extracted
//! (Gram-Schmidt deflation). It never fails: degenerate directions are replaced by an arbitrary
//! orthogonal unit vector and reported through [`PrincipalAxes::is_stable`].

pub use self::eigen_options::{EigenSolverOptions, ThirdAxisStrategy};
pub use self::power_iteration::symmetric_eigen;
pub use self::principal_axes::PrincipalAxes;

mod eigen_options;
mod power_iteration;
mod principal_axes;
