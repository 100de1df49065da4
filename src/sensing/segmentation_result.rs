use super::{
    sample_depth_points, CameraFrame, DepthMap, DepthSamplingOptions, MaskMetrics,
    SegmentationMask,
};
use crate::bounding_volume::Obb;
use crate::eigen::EigenSolverOptions;
use crate::math::{Point, Real};
use crate::measurement::ObjectMeasurement;
use core::cell::OnceCell;

/// An object segmented on one captured frame, together with the sensor data needed to measure
/// it.
///
/// The depth points of the object are extracted once, on first use, and cached for the lifetime
/// of this result so repeated measurements are cheap and return identical values.
#[derive(Clone, Debug)]
pub struct SegmentationResult {
    mask: SegmentationMask,
    depth: Option<DepthMap>,
    frame: CameraFrame,
    sampling: DepthSamplingOptions,
    solver: EigenSolverOptions,
    metrics: MaskMetrics,
    depth_points: OnceCell<Vec<Point<Real>>>,
}

impl SegmentationResult {
    /// Bundles a segmentation mask with the frame it was computed on.
    ///
    /// `depth` is `None` if the device has no depth sensor, in which case no points can be
    /// extracted and [`Self::measure`] always returns `None`.
    pub fn new(mask: SegmentationMask, depth: Option<DepthMap>, frame: CameraFrame) -> Self {
        let metrics = mask.metrics();
        Self {
            mask,
            depth,
            frame,
            sampling: DepthSamplingOptions::default(),
            solver: EigenSolverOptions::DEPTH,
            metrics,
            depth_points: OnceCell::new(),
        }
    }

    /// Changes how depth points are sampled. This discards any cached points.
    pub fn with_sampling_options(mut self, sampling: DepthSamplingOptions) -> Self {
        self.sampling = sampling;
        self.depth_points = OnceCell::new();
        self
    }

    /// Changes the eigensolver settings used by [`Self::measure`].
    pub fn with_solver_options(mut self, solver: EigenSolverOptions) -> Self {
        self.solver = solver;
        self
    }

    /// The segmentation mask.
    #[inline]
    pub fn mask(&self) -> &SegmentationMask {
        &self.mask
    }

    /// The captured frame the mask was computed on.
    #[inline]
    pub fn frame(&self) -> &CameraFrame {
        &self.frame
    }

    /// The bounding box of the mask as normalized `[x, y, width, height]`.
    #[inline]
    pub fn bounding_box(&self) -> [Real; 4] {
        self.metrics.bounding_box
    }

    /// The number of pixels inside of the mask.
    #[inline]
    pub fn mask_pixel_count(&self) -> usize {
        self.metrics.pixel_count
    }

    /// The world-space points of the segmented object, extracted from the depth map.
    ///
    /// The points are computed on the first call only.
    pub fn depth_points(&self) -> &[Point<Real>] {
        if let Some(points) = self.depth_points.get() {
            log::debug!("Returning {} cached depth points.", points.len());
            return points;
        }

        self.depth_points.get_or_init(|| match &self.depth {
            Some(depth) => sample_depth_points(&self.mask, depth, &self.frame, &self.sampling),
            None => {
                log::debug!("No depth map available, no point can be extracted.");
                Vec::new()
            }
        })
    }

    /// Fits a bounding box on the depth points of the object.
    ///
    /// Returns `None` if less than four valid depth points were found.
    pub fn measure(&self) -> Option<ObjectMeasurement> {
        let obb = Obb::from_points_with_options(self.depth_points(), &self.solver)?;
        Some(ObjectMeasurement::from_obb(&obb))
    }
}
