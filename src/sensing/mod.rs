//! Inputs captured from the AR session and the segmentation service, and the sampling of
//! object points out of them.
//!
//! The tracking session and the segmentation model themselves are external collaborators. This
//! module only consumes what they produce: a raycast primitive, a camera pose with its
//! intrinsics, a depth buffer, and an instance mask.

pub use self::camera::{CameraFrame, CameraIntrinsics};
pub use self::depth_map::{ConfidenceLevel, ConfidenceMap, DepthMap};
pub use self::depth_sampling::{sample_depth_points, sampling_stride, DepthSamplingOptions};
pub use self::error::SensorDataError;
pub use self::pixel_buffer::PixelBuffer;
pub use self::raycast::Raycaster;
pub use self::segmentation_mask::{MaskMetrics, SegmentationMask, DEFAULT_MASK_THRESHOLD};
pub use self::segmentation_result::SegmentationResult;

mod camera;
mod depth_map;
mod depth_sampling;
mod error;
mod pixel_buffer;
mod raycast;
mod segmentation_mask;
mod segmentation_result;
