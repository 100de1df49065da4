use super::{CameraFrame, DepthMap, SegmentationMask};
use crate::math::{Point, Real, Vector};
use crate::num::FromPrimitive;

/// Parameters of the extraction of object points out of a depth map.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct DepthSamplingOptions {
    /// The approximate number of mask pixels to sample.
    pub target_sample_count: usize,
    /// Depths smaller than or equal to this are discarded, in meters.
    pub min_depth: Real,
    /// Depths greater than or equal to this are discarded, in meters.
    pub max_depth: Real,
}

impl Default for DepthSamplingOptions {
    fn default() -> Self {
        Self {
            target_sample_count: 1000,
            min_depth: 0.0,
            max_depth: 10.0,
        }
    }
}

/// The step, in mask pixels, between two samples along each axis so that about
/// `target_sample_count` of the `mask_pixel_count` pixels get sampled.
///
/// This is `max(1, floor(sqrt(mask_pixel_count / target_sample_count)))`.
pub fn sampling_stride(mask_pixel_count: usize, target_sample_count: usize) -> usize {
    let count = Real::from_usize(mask_pixel_count).unwrap_or(Real::MAX);
    let target = Real::from_usize(target_sample_count.max(1)).unwrap_or(1.0);
    ((count / target).sqrt() as usize).max(1)
}

/// Gathers the world-space points of the segmented object.
///
/// The mask is walked on a regular grid whose stride is given by [`sampling_stride`]. Each mask
/// pixel is mapped proportionally to the depth map (both may have different resolutions), then
/// to the captured camera image to be unprojected with the camera intrinsics and pose. Samples
/// with an invalid depth are skipped.
pub fn sample_depth_points(
    mask: &SegmentationMask,
    depth: &DepthMap,
    frame: &CameraFrame,
    options: &DepthSamplingOptions,
) -> Vec<Point<Real>> {
    let (mask_w, mask_h) = (mask.width(), mask.height());
    let (depth_w, depth_h) = (depth.width(), depth.height());
    let mask_pixel_count = mask.pixel_count();
    let stride = sampling_stride(mask_pixel_count, options.target_sample_count);

    log::debug!(
        "Sampling depth points: depth buffer {}x{}, mask {}x{}, camera image {}x{}, stride {}.",
        depth_w,
        depth_h,
        mask_w,
        mask_h,
        frame.image_width,
        frame.image_height,
        stride
    );

    let to_image_x = frame.image_width as Real / depth_w as Real;
    let to_image_y = frame.image_height as Real / depth_h as Real;
    let mut points = Vec::with_capacity(mask_pixel_count / (stride * stride) + 1);

    for mask_y in (0..mask_h).step_by(stride) {
        for mask_x in (0..mask_w).step_by(stride) {
            if !mask.contains(mask_x, mask_y) {
                continue;
            }

            let depth_x = mask_x * depth_w / mask_w;
            let depth_y = mask_y * depth_h / mask_h;

            let Some(d) = depth.get(depth_x, depth_y) else {
                continue;
            };

            // NOTE: written so that NaN depths are rejected too.
            if !(d > options.min_depth && d < options.max_depth) {
                continue;
            }

            let image_x = depth_x as Real * to_image_x;
            let image_y = depth_y as Real * to_image_y;
            points.push(frame.unproject_to_world(image_x, image_y, d));
        }
    }

    log::debug!("Extracted {} 3D points from depth data.", points.len());

    if let Some(first) = points.first() {
        let (mins, maxs) = points.iter().fold((first.coords, first.coords), |(mins, maxs), p| {
            (mins.inf(&p.coords), maxs.sup(&p.coords))
        });
        let extents: Vector<Real> = maxs - mins;
        log::debug!(
            "Point cloud bounds: mins {:?}, maxs {:?}, extents {:?}.",
            mins.as_slice(),
            maxs.as_slice(),
            extents.as_slice()
        );
    }

    points
}
