use crate::bounding_volume::Obb;
use crate::math::{Point, Real, Vector, DIM};
use crate::num::FromPrimitive;
use core::cmp::Reverse;
use ordered_float::OrderedFloat;

/// Number of points above which sample density no longer lowers the confidence.
pub const CONFIDENCE_SATURATION_POINT_COUNT: Real = 500.0;
/// Total variance (in squared meters) above which spatial spread no longer lowers the
/// confidence.
pub const CONFIDENCE_SATURATION_VARIANCE: Real = 0.1;

/// Heuristic confidence of a measurement, blending sample density and spatial spread.
///
/// This is `min(1, point_count / 500) * min(1, total_variance / 0.1)`, always within `[0, 1]`.
pub fn measurement_confidence(point_count: usize, total_variance: Real) -> Real {
    let count = Real::from_usize(point_count).unwrap_or(Real::MAX);
    let density = (count / CONFIDENCE_SATURATION_POINT_COUNT).min(1.0);
    let spread = (total_variance / CONFIDENCE_SATURATION_VARIANCE).min(1.0);
    // NOTE: `max` is applied first so a NaN variance results in zero.
    (density * spread).max(0.0).min(1.0)
}

/// The measured dimensions of a segmented object.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct ObjectMeasurement {
    /// The world-space center of the fitted box.
    pub center: Point<Real>,
    /// The largest dimension, in meters.
    pub width: Real,
    /// The intermediate dimension, in meters.
    pub height: Real,
    /// The smallest dimension, in meters.
    pub depth: Real,
    /// The unit axes along `width`, `height`, and `depth`, concatenated.
    pub axes: [Real; 9],
    /// How much the measurement can be trusted, in `[0, 1]`.
    pub confidence: Real,
    /// The number of 3D points the measurement is based on.
    pub point_count: usize,
}

impl ObjectMeasurement {
    /// Reports a fitted bounding box as an object measurement.
    ///
    /// Dimensions are sorted in decreasing order, and the axes are reordered to match them.
    pub fn from_obb(obb: &Obb) -> Self {
        let mut order = [0, 1, 2];
        order.sort_by_key(|i| Reverse(OrderedFloat(obb.extents[*i])));

        let mut axes = order.map(|i| obb.axis(i));
        if axes[0].cross(&axes[1]).dot(&axes[2]) < 0.0 {
            axes[2] = -axes[2];
        }

        let mut flat_axes = [0.0; 9];
        for (i, axis) in axes.iter().enumerate() {
            flat_axes[i * DIM..(i + 1) * DIM].copy_from_slice(axis.as_slice());
        }

        Self {
            center: obb.center,
            width: obb.extents[order[0]],
            height: obb.extents[order[1]],
            depth: obb.extents[order[2]],
            axes: flat_axes,
            confidence: measurement_confidence(obb.point_count, obb.total_variance()),
            point_count: obb.point_count,
        }
    }

    /// The `i`-th axis, i.e., the direction of the width (0), height (1), or depth (2).
    pub fn axis(&self, i: usize) -> Vector<Real> {
        Vector::from_column_slice(&self.axes[i * DIM..(i + 1) * DIM])
    }

    /// The width, height, and depth of the object.
    #[inline]
    pub fn dimensions(&self) -> Vector<Real> {
        Vector::new(self.width, self.height, self.depth)
    }
}
