use super::{PixelBuffer, SensorDataError};
use crate::math::Real;

/// Mask values strictly greater than this are considered inside of the segmented object.
pub const DEFAULT_MASK_THRESHOLD: u8 = 127;

/// Summary of a segmentation mask.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct MaskMetrics {
    /// The number of pixels inside of the mask.
    pub pixel_count: usize,
    /// The bounding box of the mask as `[x, y, width, height]`, normalized by the mask
    /// dimensions.
    ///
    /// This is `[0, 0, 1, 1]` for an empty mask.
    pub bounding_box: [Real; 4],
}

/// An instance mask produced by the object segmentation service, one byte per pixel.
#[derive(Clone, Debug, PartialEq)]
pub struct SegmentationMask {
    buffer: PixelBuffer<u8>,
    threshold: u8,
}

impl SegmentationMask {
    /// Wraps tightly packed rows of mask values.
    pub fn new(width: usize, height: usize, values: Vec<u8>) -> Result<Self, SensorDataError> {
        Self::with_row_stride(width, height, width, values)
    }

    /// Wraps rows of mask values starting every `row_stride` bytes.
    pub fn with_row_stride(
        width: usize,
        height: usize,
        row_stride: usize,
        values: Vec<u8>,
    ) -> Result<Self, SensorDataError> {
        Ok(Self {
            buffer: PixelBuffer::with_row_stride(width, height, row_stride, values)?,
            threshold: DEFAULT_MASK_THRESHOLD,
        })
    }

    /// Changes the value above which a pixel is considered inside of the mask.
    pub fn with_threshold(mut self, threshold: u8) -> Self {
        self.threshold = threshold;
        self
    }

    /// The width of this mask, in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.buffer.width()
    }

    /// The height of this mask, in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.buffer.height()
    }

    /// Is the pixel `(x, y)` inside of the mask? Pixels outside of the buffer are not.
    #[inline]
    pub fn contains(&self, x: usize, y: usize) -> bool {
        self.buffer.get(x, y).is_some_and(|v| v > self.threshold)
    }

    /// The number of pixels inside of the mask.
    pub fn pixel_count(&self) -> usize {
        self.buffer
            .pixels()
            .filter(|(_, _, v)| *v > self.threshold)
            .count()
    }

    /// Computes the pixel count and normalized bounding box of this mask.
    pub fn metrics(&self) -> MaskMetrics {
        let mut pixel_count = 0;
        let (mut min_x, mut min_y) = (usize::MAX, usize::MAX);
        let (mut max_x, mut max_y) = (0, 0);

        for (x, y, _) in self.buffer.pixels().filter(|(_, _, v)| *v > self.threshold) {
            pixel_count += 1;
            min_x = min_x.min(x);
            max_x = max_x.max(x);
            min_y = min_y.min(y);
            max_y = max_y.max(y);
        }

        let bounding_box = if pixel_count > 0 {
            let w = self.width() as Real;
            let h = self.height() as Real;
            [
                min_x as Real / w,
                min_y as Real / h,
                (max_x - min_x) as Real / w,
                (max_y - min_y) as Real / h,
            ]
        } else {
            [0.0, 0.0, 1.0, 1.0]
        };

        MaskMetrics {
            pixel_count,
            bounding_box,
        }
    }
}
