use crate::math::{Isometry, Point, Real, Rotation, Translation};

/// A fixed position and orientation in world-space, placed by the user and tracked by the AR
/// session.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Anchor {
    /// A unique identifier of this anchor.
    pub identifier: String,
    /// The pose of this anchor in world-space.
    pub transform: Isometry<Real>,
    /// Whether the session still tracks this anchor.
    pub is_tracked: bool,
    /// An optional user-facing name.
    pub label: Option<String>,
}

impl Anchor {
    /// Creates a tracked anchor with the given pose.
    pub fn new(identifier: impl Into<String>, transform: Isometry<Real>) -> Self {
        Self {
            identifier: identifier.into(),
            transform,
            is_tracked: true,
            label: None,
        }
    }

    /// Creates a tracked anchor at the given position, with an identity orientation.
    pub fn at_position(identifier: impl Into<String>, position: Point<Real>) -> Self {
        Self::new(
            identifier,
            Isometry::from_parts(Translation::from(position.coords), Rotation::identity()),
        )
    }

    /// Sets the label of this anchor.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets whether this anchor is tracked.
    pub fn with_tracking(mut self, is_tracked: bool) -> Self {
        self.is_tracked = is_tracked;
        self
    }

    /// The world-space position of this anchor.
    #[inline]
    pub fn position(&self) -> Point<Real> {
        self.transform.translation.vector.into()
    }

    /// The world-space orientation of this anchor.
    #[inline]
    pub fn rotation(&self) -> Rotation<Real> {
        self.transform.rotation
    }

    /// The orientation of this anchor as a quaternion `[x, y, z, w]`.
    pub fn rotation_xyzw(&self) -> [Real; 4] {
        let q = self.transform.rotation.coords;
        [q.x, q.y, q.z, q.w]
    }

    /// The homogeneous 4x4 pose of this anchor, in column-major order.
    pub fn transform_matrix(&self) -> [Real; 16] {
        let mut result = [0.0; 16];
        result.copy_from_slice(self.transform.to_homogeneous().as_slice());
        result
    }
}
