use super::SensorDataError;
use crate::math::Real;

/// A 2D row-major buffer of pixel values, possibly with padding at the end of each row.
#[derive(Clone, Debug, PartialEq)]
pub struct PixelBuffer<T> {
    width: usize,
    height: usize,
    row_stride: usize,
    data: Vec<T>,
}

impl<T: Copy> PixelBuffer<T> {
    /// Wraps tightly packed rows of `width` values.
    pub fn new(width: usize, height: usize, data: Vec<T>) -> Result<Self, SensorDataError> {
        Self::with_row_stride(width, height, width, data)
    }

    /// Wraps rows starting every `row_stride` values.
    pub fn with_row_stride(
        width: usize,
        height: usize,
        row_stride: usize,
        data: Vec<T>,
    ) -> Result<Self, SensorDataError> {
        if width == 0 || height == 0 {
            return Err(SensorDataError::EmptyBuffer);
        }

        if row_stride < width {
            return Err(SensorDataError::InvalidRowStride { row_stride, width });
        }

        let expected = (height - 1) * row_stride + width;
        if data.len() < expected {
            return Err(SensorDataError::BufferTooSmall {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            row_stride,
            data,
        })
    }

    /// The number of pixels per row.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// The number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// The value of the pixel at column `x` and row `y`, if it lies inside of this buffer.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<T> {
        if x < self.width && y < self.height {
            self.data.get(y * self.row_stride + x).copied()
        } else {
            None
        }
    }

    /// The pixel at the normalized coordinates `(x, y)`, both expected in `[0, 1]`.
    ///
    /// Coordinates are scaled by `width - 1` and `height - 1` and truncated toward zero.
    pub fn get_normalized(&self, x: Real, y: Real) -> Option<T> {
        let px = (x * (self.width - 1) as Real) as i64;
        let py = (y * (self.height - 1) as Real) as i64;

        if px < 0 || py < 0 {
            return None;
        }

        self.get(px as usize, py as usize)
    }

    /// Iterates through all the pixels, row by row, as `(x, y, value)`.
    pub fn pixels(&self) -> impl Iterator<Item = (usize, usize, T)> + '_ {
        (0..self.height).flat_map(move |y| {
            let row = &self.data[y * self.row_stride..y * self.row_stride + self.width];
            row.iter().enumerate().map(move |(x, v)| (x, y, *v))
        })
    }
}
