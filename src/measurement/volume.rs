use crate::bounding_volume::Obb;
use crate::math::{Point, Real, Rotation, Vector};

/// A box-shaped volume spanned by a set of anchors.
///
/// The dimensions are reported literally along the principal axes of the anchors, in extraction
/// order: the first axis gives the width, the second the height, the third the depth. They are
/// not sorted.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Volume {
    /// The world-space center of the volume.
    pub center: Point<Real>,
    /// The size along the first principal axis.
    pub width: Real,
    /// The size along the second principal axis.
    pub height: Real,
    /// The size along the third principal axis.
    pub depth: Real,
    /// The orientation of the volume. Its local x, y, z axes are the principal axes.
    pub rotation: Rotation<Real>,
    /// `false` if the principal axes could not be determined reliably.
    pub is_stable: bool,
}

impl Volume {
    /// Reports a fitted bounding box as a volume.
    pub fn from_obb(obb: &Obb) -> Self {
        Self {
            center: obb.center,
            width: obb.extents.x,
            height: obb.extents.y,
            depth: obb.extents.z,
            rotation: obb.rotation(),
            is_stable: obb.is_stable,
        }
    }

    /// The width, height, and depth of this volume.
    #[inline]
    pub fn dimensions(&self) -> Vector<Real> {
        Vector::new(self.width, self.height, self.depth)
    }

    /// The enclosed volume, in cubic meters.
    #[inline]
    pub fn volume(&self) -> Real {
        self.width * self.height * self.depth
    }

    /// The orientation as a quaternion `[x, y, z, w]`.
    pub fn rotation_xyzw(&self) -> [Real; 4] {
        let q = self.rotation.coords;
        [q.x, q.y, q.z, q.w]
    }
}

impl From<Obb> for Volume {
    fn from(obb: Obb) -> Self {
        Self::from_obb(&obb)
    }
}
