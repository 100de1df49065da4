//! Bounding volumes fitted on point clouds.

#[doc(inline)]
pub use crate::bounding_volume::obb::{Obb, MIN_FIT_POINTS};

#[doc(hidden)]
pub mod obb;
