//! Measurement results built on top of the bounding-volume fitter: point-to-point tape
//! measurements, volumes spanned by user-placed anchors, and object measurements derived from
//! depth data.

pub use self::anchor::Anchor;
pub use self::bounding_box_builder::BoundingBoxBuilder;
pub use self::line_measurement::LineMeasurement;
pub use self::object_measurement::{
    measurement_confidence, ObjectMeasurement, CONFIDENCE_SATURATION_POINT_COUNT,
    CONFIDENCE_SATURATION_VARIANCE,
};
pub use self::volume::Volume;

mod anchor;
mod bounding_box_builder;
mod line_measurement;
mod object_measurement;
mod volume;
