//! Various unsorted geometrical and numerical operators.

pub use self::center::center;
pub use self::cov::{center_cov, cov};
pub use self::symmetric_matrix::SymmetricMatrix3;

mod center;
mod cov;
mod symmetric_matrix;
