use super::SensorDataError;
use crate::math::{Isometry, Matrix, Point, Real};

/// Pinhole camera intrinsics, in pixels of the captured camera image.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct CameraIntrinsics {
    /// Horizontal focal length.
    pub fx: Real,
    /// Vertical focal length.
    pub fy: Real,
    /// Horizontal coordinate of the principal point.
    pub cx: Real,
    /// Vertical coordinate of the principal point.
    pub cy: Real,
}

impl CameraIntrinsics {
    /// Creates intrinsics from focal lengths and principal point.
    ///
    /// Both focal lengths must be finite and strictly positive.
    pub fn new(fx: Real, fy: Real, cx: Real, cy: Real) -> Result<Self, SensorDataError> {
        if !(fx > 0.0 && fy > 0.0 && fx.is_finite() && fy.is_finite()) {
            return Err(SensorDataError::InvalidFocalLength { fx, fy });
        }

        Ok(Self { fx, fy, cx, cy })
    }

    /// Reads the intrinsics from a calibration matrix
    /// `[[fx, 0, cx], [0, fy, cy], [0, 0, 1]]`.
    pub fn from_matrix(k: &Matrix<Real>) -> Result<Self, SensorDataError> {
        Self::new(k.m11, k.m22, k.m13, k.m23)
    }

    /// The calibration matrix of these intrinsics.
    pub fn to_matrix(&self) -> Matrix<Real> {
        Matrix::new(self.fx, 0.0, self.cx, 0.0, self.fy, self.cy, 0.0, 0.0, 1.0)
    }

    /// Unprojects an image pixel with its depth into camera space.
    ///
    /// The result follows the image convention: x to the right, y down, z forward.
    #[inline]
    pub fn unproject(&self, px: Real, py: Real, depth: Real) -> Point<Real> {
        Point::new(
            (px - self.cx) * depth / self.fx,
            (py - self.cy) * depth / self.fy,
            depth,
        )
    }
}

/// The camera state of one captured AR frame.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct CameraFrame {
    /// The intrinsics of the captured image.
    pub intrinsics: CameraIntrinsics,
    /// The width of the captured image, in pixels.
    pub image_width: usize,
    /// The height of the captured image, in pixels.
    pub image_height: usize,
    /// The pose of the camera in world-space.
    ///
    /// The camera looks along its local `-z` axis, with `+y` up.
    pub camera_to_world: Isometry<Real>,
}

impl CameraFrame {
    /// Describes a captured frame.
    pub fn new(
        intrinsics: CameraIntrinsics,
        image_width: usize,
        image_height: usize,
        camera_to_world: Isometry<Real>,
    ) -> Result<Self, SensorDataError> {
        if image_width == 0 || image_height == 0 {
            return Err(SensorDataError::InvalidImageSize {
                width: image_width,
                height: image_height,
            });
        }

        Ok(Self {
            intrinsics,
            image_width,
            image_height,
            camera_to_world,
        })
    }

    /// Unprojects a pixel of the captured image with its depth into world-space.
    ///
    /// The image-space unprojection (y down, z forward) is flipped to the render convention
    /// (y up, looking along -z) before applying the camera pose.
    pub fn unproject_to_world(&self, px: Real, py: Real, depth: Real) -> Point<Real> {
        let cam = self.intrinsics.unproject(px, py, depth);
        self.camera_to_world * Point::new(cam.x, -cam.y, -cam.z)
    }
}
