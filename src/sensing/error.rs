use crate::math::Real;

/// Errors raised when wrapping sensor data into the types of this crate.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum SensorDataError {
    /// A buffer has a zero width or height.
    #[error("Buffers must have a non-zero width and height.")]
    EmptyBuffer,
    /// The number of elements between two rows is smaller than a row.
    #[error("Row stride {row_stride} is smaller than the row width {width}.")]
    InvalidRowStride {
        /// The given row stride, in elements.
        row_stride: usize,
        /// The given row width, in elements.
        width: usize,
    },
    /// The data does not cover the declared buffer dimensions.
    #[error("Buffer holds {actual} elements but its layout requires {expected}.")]
    BufferTooSmall {
        /// The number of elements required by the layout.
        expected: usize,
        /// The number of elements provided.
        actual: usize,
    },
    /// A focal length is not strictly positive and finite.
    #[error("Invalid focal lengths fx = {fx}, fy = {fy}.")]
    InvalidFocalLength {
        /// The horizontal focal length, in pixels.
        fx: Real,
        /// The vertical focal length, in pixels.
        fy: Real,
    },
    /// The captured camera image has a zero width or height.
    #[error("Invalid camera image size {width}x{height}.")]
    InvalidImageSize {
        /// The image width, in pixels.
        width: usize,
        /// The image height, in pixels.
        height: usize,
    },
}
