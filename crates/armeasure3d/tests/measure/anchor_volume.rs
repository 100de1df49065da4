use crate::common;
use approx::assert_relative_eq;
use armeasure3d::math::{Isometry, Point, Real, Vector};
use armeasure3d::measurement::{Anchor, BoundingBoxBuilder, LineMeasurement, Volume};

#[test]
fn builder_needs_four_anchors() {
    let mut builder = BoundingBoxBuilder::new();
    let corners = common::box_corners(Point::new(0.0, 0.5, -1.0), Vector::new(0.3, 0.2, 0.1));

    for (i, corner) in corners.iter().enumerate() {
        assert_eq!(builder.can_build(), i >= 4);
        assert_eq!(builder.build().is_some(), i >= 4);
        builder.add_base_anchor(Anchor::at_position(format!("corner-{}", i), *corner));
    }

    let volume = builder.build().unwrap();
    assert!(volume.is_stable);
    assert_relative_eq!(volume.center, Point::new(0.0, 0.5, -1.0), epsilon = 1.0e-3);
    assert_relative_eq!(volume.dimensions(), Vector::new(0.6, 0.4, 0.2), epsilon = 1.0e-3);
    assert_relative_eq!(volume.volume(), 0.048, epsilon = 1.0e-4);

    builder.clear();
    assert_eq!(builder.anchor_count(), 0);
    assert!(builder.build().is_none());
}

#[test]
fn volume_rotation_matches_anchor_frame() {
    let pose: Isometry<Real> = Isometry::new(Vector::new(1.0, 0.0, 2.0), Vector::new(0.0, 0.7, 0.0));
    let mut builder = BoundingBoxBuilder::default();

    for corner in common::box_corners(Point::origin(), Vector::new(0.5, 0.25, 0.1)) {
        builder.add_base_anchor(Anchor::at_position("corner", pose * corner));
    }

    let volume = builder.build().unwrap();
    let q = volume.rotation_xyzw();
    let norm = q.iter().map(|c| c * c).sum::<Real>().sqrt();

    assert_relative_eq!(norm, 1.0, epsilon = 1.0e-5);
    assert_relative_eq!(volume.center, pose * Point::origin(), epsilon = 1.0e-3);
    // The local axes of the volume are aligned with the anchor frame, up to their signs.
    for i in 0..3 {
        let axis = volume.rotation * Vector::ith(i, 1.0);
        let expected = pose.rotation * Vector::ith(i, 1.0);
        assert_relative_eq!(axis.dot(&expected).abs(), 1.0, epsilon = 1.0e-3);
    }
}

#[test]
fn volume_dimensions_are_not_sorted() {
    let mut builder = BoundingBoxBuilder::new();
    for corner in common::box_corners(Point::origin(), Vector::new(0.1, 0.3, 0.2)) {
        builder.add_base_anchor(Anchor::at_position("corner", corner));
    }

    // The coordinate axes are exact eigenvectors here, so they are extracted in seed order.
    let volume: Volume = builder.build().unwrap();
    assert_relative_eq!(volume.width, 0.2, epsilon = 1.0e-4);
    assert_relative_eq!(volume.height, 0.6, epsilon = 1.0e-4);
    assert_relative_eq!(volume.depth, 0.4, epsilon = 1.0e-4);
}

#[test]
fn anchors_are_placed_by_raycasting() {
    let floor = |x: Real, y: Real| -> Option<Point<Real>> {
        if (0.0..=1.0).contains(&x) && (0.0..=1.0).contains(&y) {
            Some(Point::new(x * 2.0, 0.0, -y * 2.0))
        } else {
            None
        }
    };

    let mut builder = BoundingBoxBuilder::new();
    assert!(builder.add_anchor_at(&floor, 1.5, 0.5).is_none());
    assert_eq!(builder.anchor_count(), 0);

    let anchor = builder.add_anchor_at(&floor, 0.5, 0.25).unwrap();
    assert_eq!(anchor.identifier, "base-anchor-0");
    assert_relative_eq!(anchor.position(), Point::new(1.0, 0.0, -0.5));

    for (x, y) in [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)] {
        assert!(builder.add_anchor_at(&floor, x, y).is_some());
    }

    assert!(builder.can_build());
    assert_eq!(builder.anchors()[3].identifier, "base-anchor-3");

    // All anchors lie on the floor: the fitted volume is flat.
    let volume = builder.build().unwrap();
    assert_relative_eq!(volume.dimensions().min(), 0.0, epsilon = 1.0e-4);
}

#[test]
fn line_measurement_length_and_tracking() {
    let wall = |x: Real, y: Real| Some(Point::new(x * 3.0, y * 4.0, -1.0));
    let line = LineMeasurement::from_screen_points(&wall, [0.0, 0.0], [1.0, 1.0]).unwrap();

    assert_relative_eq!(line.length(), 5.0, epsilon = 1.0e-5);
    assert!(line.is_valid());

    let lost = LineMeasurement::new(line.start.clone(), line.end.clone().with_tracking(false));
    assert!(!lost.is_valid());
    assert_relative_eq!(lost.length(), 5.0, epsilon = 1.0e-5);

    let miss = |_: Real, _: Real| -> Option<Point<Real>> { None };
    assert!(LineMeasurement::from_screen_points(&miss, [0.0, 0.0], [1.0, 1.0]).is_none());
}
