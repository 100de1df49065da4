use super::{Anchor, Volume};
use crate::bounding_volume::{Obb, MIN_FIT_POINTS};
use crate::eigen::EigenSolverOptions;
use crate::math::{Point, Real};
use crate::sensing::Raycaster;

/// Accumulates user-placed anchors and fits a volume on them.
#[derive(Clone, Debug, PartialEq)]
pub struct BoundingBoxBuilder {
    anchors: Vec<Anchor>,
    options: EigenSolverOptions,
}

impl Default for BoundingBoxBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoundingBoxBuilder {
    /// A builder with no anchor, using [`EigenSolverOptions::ANCHOR`].
    pub fn new() -> Self {
        Self::with_options(EigenSolverOptions::ANCHOR)
    }

    /// A builder with no anchor and custom eigensolver settings.
    pub fn with_options(options: EigenSolverOptions) -> Self {
        Self {
            anchors: Vec::new(),
            options,
        }
    }

    /// Adds an anchor to the set the volume will be fitted on.
    pub fn add_base_anchor(&mut self, anchor: Anchor) {
        self.anchors.push(anchor);
    }

    /// Raycasts a normalized screen point and adds an anchor at the hit point.
    ///
    /// Returns the new anchor, or `None` (and adds nothing) if the raycast missed.
    pub fn add_anchor_at<R: Raycaster + ?Sized>(
        &mut self,
        raycaster: &R,
        x: Real,
        y: Real,
    ) -> Option<&Anchor> {
        let hit = raycaster.raycast(x, y)?;
        let identifier = format!("base-anchor-{}", self.anchors.len());
        self.anchors.push(Anchor::at_position(identifier, hit));
        self.anchors.last()
    }

    /// The anchors added so far.
    #[inline]
    pub fn anchors(&self) -> &[Anchor] {
        &self.anchors
    }

    /// The number of anchors added so far.
    #[inline]
    pub fn anchor_count(&self) -> usize {
        self.anchors.len()
    }

    /// Whether enough anchors were added to fit a volume.
    #[inline]
    pub fn can_build(&self) -> bool {
        self.anchors.len() >= MIN_FIT_POINTS
    }

    /// Removes all the anchors.
    pub fn clear(&mut self) {
        self.anchors.clear();
    }

    /// Fits a volume on the anchor positions.
    ///
    /// Returns `None` as long as [`Self::can_build`] is `false`.
    pub fn build(&self) -> Option<Volume> {
        let positions: Vec<Point<Real>> = self.anchors.iter().map(Anchor::position).collect();
        Obb::from_points_with_options(&positions, &self.options).map(|obb| Volume::from_obb(&obb))
    }
}
