use super::{PixelBuffer, SensorDataError};
use crate::math::Real;

/// A depth buffer, with the distance to the camera plane in meters for each pixel.
#[derive(Clone, Debug, PartialEq)]
pub struct DepthMap {
    buffer: PixelBuffer<Real>,
}

impl DepthMap {
    /// Wraps tightly packed rows of depth values.
    pub fn new(width: usize, height: usize, depths: Vec<Real>) -> Result<Self, SensorDataError> {
        PixelBuffer::new(width, height, depths).map(|buffer| Self { buffer })
    }

    /// Wraps rows of depth values starting every `row_stride` values.
    pub fn with_row_stride(
        width: usize,
        height: usize,
        row_stride: usize,
        depths: Vec<Real>,
    ) -> Result<Self, SensorDataError> {
        PixelBuffer::with_row_stride(width, height, row_stride, depths).map(|buffer| Self { buffer })
    }

    /// The width of this depth map, in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.buffer.width()
    }

    /// The height of this depth map, in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.buffer.height()
    }

    /// The depth at the given pixel, if it lies inside of this map.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<Real> {
        self.buffer.get(x, y)
    }

    /// The depth at the normalized screen coordinates `(x, y)`, or zero outside of the map.
    pub fn depth_at(&self, x: Real, y: Real) -> Real {
        self.buffer.get_normalized(x, y).unwrap_or(0.0)
    }

    /// All the depth values, row by row.
    pub fn to_vec(&self) -> Vec<Real> {
        self.buffer.pixels().map(|(_, _, d)| d).collect()
    }
}

/// How reliable a depth sample is, as reported by the depth sensor.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum ConfidenceLevel {
    /// The sample is likely noise.
    Low = 0,
    /// The sample is plausible.
    Medium = 1,
    /// The sample is reliable.
    High = 2,
}

impl ConfidenceLevel {
    /// Converts a raw sensor confidence value. Values above `2` are clamped to `High`.
    pub fn from_raw(raw: u8) -> Self {
        match raw {
            0 => ConfidenceLevel::Low,
            1 => ConfidenceLevel::Medium,
            _ => ConfidenceLevel::High,
        }
    }
}

/// The per-pixel confidence of a [`DepthMap`].
#[derive(Clone, Debug, PartialEq)]
pub struct ConfidenceMap {
    buffer: PixelBuffer<u8>,
}

impl ConfidenceMap {
    /// Wraps tightly packed rows of raw confidence values.
    pub fn new(width: usize, height: usize, raw: Vec<u8>) -> Result<Self, SensorDataError> {
        PixelBuffer::new(width, height, raw).map(|buffer| Self { buffer })
    }

    /// Wraps rows of raw confidence values starting every `row_stride` values.
    pub fn with_row_stride(
        width: usize,
        height: usize,
        row_stride: usize,
        raw: Vec<u8>,
    ) -> Result<Self, SensorDataError> {
        PixelBuffer::with_row_stride(width, height, row_stride, raw).map(|buffer| Self { buffer })
    }

    /// The width of this confidence map, in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.buffer.width()
    }

    /// The height of this confidence map, in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.buffer.height()
    }

    /// The confidence at the given pixel, if it lies inside of this map.
    pub fn get(&self, x: usize, y: usize) -> Option<ConfidenceLevel> {
        self.buffer.get(x, y).map(ConfidenceLevel::from_raw)
    }

    /// The confidence at the normalized screen coordinates `(x, y)`, or `Low` outside of the map.
    pub fn confidence_at(&self, x: Real, y: Real) -> ConfidenceLevel {
        self.buffer
            .get_normalized(x, y)
            .map_or(ConfidenceLevel::Low, ConfidenceLevel::from_raw)
    }
}
