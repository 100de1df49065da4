use super::Anchor;
use crate::math::Real;
use crate::sensing::Raycaster;

/// A tape-measure style measurement between two anchors.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct LineMeasurement {
    /// The anchor the measurement starts from.
    pub start: Anchor,
    /// The anchor the measurement ends at.
    pub end: Anchor,
}

impl LineMeasurement {
    /// Creates a measurement between two anchors.
    pub fn new(start: Anchor, end: Anchor) -> Self {
        Self { start, end }
    }

    /// Places both ends of a measurement by raycasting two normalized screen points.
    ///
    /// Returns `None` if either raycast misses.
    pub fn from_screen_points<R: Raycaster + ?Sized>(
        raycaster: &R,
        start: [Real; 2],
        end: [Real; 2],
    ) -> Option<Self> {
        let a = raycaster.raycast(start[0], start[1])?;
        let b = raycaster.raycast(end[0], end[1])?;
        Some(Self::new(
            Anchor::at_position("measurement-start", a),
            Anchor::at_position("measurement-end", b),
        ))
    }

    /// The straight-line distance between both anchors, in meters.
    #[inline]
    pub fn length(&self) -> Real {
        na::distance(&self.start.position(), &self.end.position())
    }

    /// A measurement is valid only while both its anchors are tracked.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.start.is_tracked && self.end.is_tracked
    }
}
