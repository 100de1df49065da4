use crate::common;
use approx::assert_relative_eq;
use armeasure3d::math::{Isometry, Point, Real, Vector};
use armeasure3d::sensing::{
    CameraFrame, CameraIntrinsics, DepthMap, DepthSamplingOptions, SegmentationMask,
    SegmentationResult,
};
use core::ops::Range;
use rand::Rng;

const WIDTH: usize = 64;
const HEIGHT: usize = 48;
/// One pixel at 2m spans 4cm with these intrinsics.
const FOCAL: Real = 50.0;

fn rect_mask(scale: usize, xs: Range<usize>, ys: Range<usize>) -> SegmentationMask {
    let (w, h) = (WIDTH * scale, HEIGHT * scale);
    let mut values = vec![0u8; w * h];
    for y in ys.start * scale..ys.end * scale {
        for x in xs.start * scale..xs.end * scale {
            values[y * w + x] = 255;
        }
    }
    SegmentationMask::new(w, h, values).unwrap()
}

fn flat_depth(depth: Real) -> DepthMap {
    DepthMap::new(WIDTH, HEIGHT, vec![depth; WIDTH * HEIGHT]).unwrap()
}

fn frame(scale: usize, pose: Isometry<Real>) -> CameraFrame {
    let s = scale as Real;
    let intrinsics = CameraIntrinsics::new(
        FOCAL * s,
        FOCAL * s,
        WIDTH as Real / 2.0 * s,
        HEIGHT as Real / 2.0 * s,
    )
    .unwrap();
    CameraFrame::new(intrinsics, WIDTH * scale, HEIGHT * scale, pose).unwrap()
}

fn flat_rectangle() -> SegmentationResult {
    SegmentationResult::new(
        rect_mask(1, 12..52, 14..34),
        Some(flat_depth(2.0)),
        frame(1, Isometry::identity()),
    )
}

#[test]
fn flat_rectangle_in_front_of_the_camera() {
    let result = flat_rectangle();
    let measurement = result.measure().unwrap();

    assert_eq!(result.mask_pixel_count(), 800);
    assert_eq!(measurement.point_count, 800);
    assert_relative_eq!(measurement.width, 1.56, epsilon = 1.0e-3);
    assert_relative_eq!(measurement.height, 0.76, epsilon = 1.0e-3);
    assert_relative_eq!(measurement.depth, 0.0, epsilon = 1.0e-3);
    assert_relative_eq!(measurement.center, Point::new(-0.02, 0.02, -2.0), epsilon = 1.0e-3);
    assert_relative_eq!(measurement.confidence, 1.0, epsilon = 1.0e-6);

    assert_relative_eq!(measurement.axis(0).x.abs(), 1.0, epsilon = 1.0e-3);
    assert_relative_eq!(measurement.axis(1).y.abs(), 1.0, epsilon = 1.0e-3);
    let det = measurement.axis(0).cross(&measurement.axis(1)).dot(&measurement.axis(2));
    assert_relative_eq!(det, 1.0, epsilon = 1.0e-3);

    let bbox = result.bounding_box();
    assert_relative_eq!(bbox[0], 12.0 / 64.0);
    assert_relative_eq!(bbox[1], 14.0 / 48.0);
}

#[test]
fn mask_depth_and_image_resolutions_may_differ() {
    // The mask is twice and the camera image four times the depth map resolution.
    let intrinsics = CameraIntrinsics::new(FOCAL * 4.0, FOCAL * 4.0, 128.0, 96.0).unwrap();
    let camera = CameraFrame::new(intrinsics, WIDTH * 4, HEIGHT * 4, Isometry::identity()).unwrap();
    let result =
        SegmentationResult::new(rect_mask(2, 12..52, 14..34), Some(flat_depth(2.0)), camera);

    let measurement = result.measure().unwrap();
    let reference = flat_rectangle().measure().unwrap();

    assert_eq!(measurement.point_count, 3200);
    assert_relative_eq!(measurement.dimensions(), reference.dimensions(), epsilon = 1.0e-3);
    assert_relative_eq!(measurement.center, reference.center, epsilon = 1.0e-3);
}

#[test]
fn sampling_stride_limits_the_point_count() {
    let options = DepthSamplingOptions {
        target_sample_count: 100,
        ..DepthSamplingOptions::default()
    };
    let result = flat_rectangle().with_sampling_options(options);

    // Stride 2 keeps the even pixels of the 40x20 rectangle.
    assert_eq!(result.depth_points().len(), 200);
    let measurement = result.measure().unwrap();
    assert_relative_eq!(measurement.width, 1.52, epsilon = 1.0e-3);
    assert_relative_eq!(measurement.height, 0.72, epsilon = 1.0e-3);
}

#[test]
fn depth_points_are_extracted_once() {
    let result = flat_rectangle();

    let first = result.depth_points();
    let second = result.depth_points();
    assert_eq!(first.as_ptr(), second.as_ptr());
    assert_eq!(result.measure(), result.measure());
}

#[test]
fn invalid_depths_are_skipped() {
    let mut depths = vec![2.0; WIDTH * HEIGHT];
    for y in 14..34 {
        for x in 12..22 {
            depths[y * WIDTH + x] = 0.0;
        }
        depths[y * WIDTH + 30] = Real::NAN;
        depths[y * WIDTH + 31] = 10.0;
        depths[y * WIDTH + 32] = -1.0;
    }
    let depth = DepthMap::new(WIDTH, HEIGHT, depths).unwrap();
    let result = SegmentationResult::new(
        rect_mask(1, 12..52, 14..34),
        Some(depth),
        frame(1, Isometry::identity()),
    );

    // 40 - 10 - 3 valid columns over 20 rows.
    assert_eq!(result.depth_points().len(), 27 * 20);
    assert!(result.depth_points().iter().all(|p| (p.z + 2.0).abs() < 1.0e-6));
    assert_eq!(result.measure().unwrap().point_count, 540);
}

#[test]
fn missing_or_unusable_depth_yields_no_measurement() {
    let no_depth = SegmentationResult::new(
        rect_mask(1, 12..52, 14..34),
        None,
        frame(1, Isometry::identity()),
    );
    assert!(no_depth.depth_points().is_empty());
    assert!(no_depth.measure().is_none());

    let too_far = SegmentationResult::new(
        rect_mask(1, 12..52, 14..34),
        Some(flat_depth(25.0)),
        frame(1, Isometry::identity()),
    );
    assert!(too_far.measure().is_none());

    let empty_mask = SegmentationResult::new(
        rect_mask(1, 0..0, 0..0),
        Some(flat_depth(2.0)),
        frame(1, Isometry::identity()),
    );
    assert_eq!(empty_mask.bounding_box(), [0.0, 0.0, 1.0, 1.0]);
    assert!(empty_mask.measure().is_none());

    let tiny_mask = SegmentationResult::new(
        rect_mask(1, 10..13, 10..11),
        Some(flat_depth(2.0)),
        frame(1, Isometry::identity()),
    );
    assert_eq!(tiny_mask.depth_points().len(), 3);
    assert!(tiny_mask.measure().is_none());
}

#[test]
fn points_follow_the_camera_pose() {
    // The camera at (1, 2, 3) looks along world -x.
    let pose = Isometry::new(
        Vector::new(1.0, 2.0, 3.0),
        Vector::y() * core::f64::consts::FRAC_PI_2 as Real,
    );
    let result = SegmentationResult::new(
        rect_mask(1, 30..34, 22..26),
        Some(flat_depth(2.0)),
        frame(1, pose),
    );

    let on_axis = result
        .depth_points()
        .iter()
        .find(|p| (p.y - 2.0).abs() < 1.0e-4 && (p.z - 3.0).abs() < 1.0e-4)
        .copied()
        .unwrap();
    assert_relative_eq!(on_axis, Point::new(-1.0, 2.0, 3.0), epsilon = 1.0e-4);

    let measurement = result.measure().unwrap();
    assert_relative_eq!(measurement.center.x, -1.0, epsilon = 1.0e-4);
    assert_relative_eq!(measurement.depth, 0.0, epsilon = 1.0e-4);
}

#[test]
fn confidence_is_always_within_unit_range() {
    let mut rng = common::rng();

    for _ in 0..10 {
        let depths: Vec<Real> = (0..WIDTH * HEIGHT)
            .map(|_| rng.gen_range(0.5..3.0))
            .collect();
        let x0 = rng.gen_range(0..40);
        let y0 = rng.gen_range(0..30);
        let result = SegmentationResult::new(
            rect_mask(1, x0..x0 + rng.gen_range(2..24), y0..y0 + rng.gen_range(2..18)),
            Some(DepthMap::new(WIDTH, HEIGHT, depths).unwrap()),
            frame(1, Isometry::identity()),
        );

        if let Some(measurement) = result.measure() {
            assert!((0.0..=1.0).contains(&measurement.confidence));
            assert!(measurement.width >= measurement.height);
            assert!(measurement.height >= measurement.depth);
        }
    }
}
