//! Oriented bounding box fitted by principal component analysis.

use crate::eigen::{symmetric_eigen, EigenSolverOptions, PrincipalAxes};
use crate::math::{Isometry, Matrix, Point, Real, Rotation, Translation, Vector, DIM};

/// The minimum number of points needed to fit an [`Obb`].
///
/// Three points only determine a plane, so four is the conservative floor for a volume.
pub const MIN_FIT_POINTS: usize = 4;

/// An oriented bounding box, aligned with the principal axes of the point cloud it was fitted
/// on.
///
/// This is a pure value: it keeps no reference to the points it was computed from.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Obb {
    /// The world-space center of the box.
    pub center: Point<Real>,
    /// The full size of the box along each of its axes, `extents[i]` being measured along
    /// `axes.column(i)`.
    pub extents: Vector<Real>,
    /// The box axes, as the columns of a rotation matrix. This frame is always right-handed.
    pub axes: Matrix<Real>,
    /// The variance of the point cloud along each axis.
    pub eigenvalues: Vector<Real>,
    /// `false` if the eigen-decomposition hit a degenerate direction.
    pub is_stable: bool,
    /// The number of points the box was fitted on.
    pub point_count: usize,
}

impl Obb {
    /// Fits an oriented bounding box on a set of points with the default solver settings.
    ///
    /// Returns `None` if less than [`MIN_FIT_POINTS`] points are given.
    ///
    /// The returned OBB is not guaranteed to be the smallest enclosing OBB.
    /// Though it should be a pretty good one for most purposes.
    ///
    /// # Example
    ///
    /// ```
    /// # #[cfg(feature = "f32")] {
    /// use armeasure3d::bounding_volume::Obb;
    /// use armeasure3d::math::Point;
    ///
    /// let pts = [
    ///     Point::new(0.0, 0.0, 0.0),
    ///     Point::new(2.0, 0.0, 0.0),
    ///     Point::new(0.0, 1.0, 0.0),
    ///     Point::new(0.0, 0.0, 0.5),
    /// ];
    /// assert!(Obb::from_points(&pts).is_some());
    /// assert!(Obb::from_points(&pts[..3]).is_none());
    /// # }
    /// ```
    pub fn from_points(pts: &[Point<Real>]) -> Option<Self> {
        Self::from_points_with_options(pts, &EigenSolverOptions::default())
    }

    /// Fits an oriented bounding box on a set of points.
    ///
    /// Returns `None` if less than [`MIN_FIT_POINTS`] points are given.
    pub fn from_points_with_options(
        pts: &[Point<Real>],
        options: &EigenSolverOptions,
    ) -> Option<Self> {
        if pts.len() < MIN_FIT_POINTS {
            return None;
        }

        let (centroid, cov) = crate::utils::center_cov(pts)?;
        let principal = symmetric_eigen(&cov, options).into_right_handed();

        let mut mins = Vector::repeat(Real::MAX);
        let mut maxs = Vector::repeat(-Real::MAX);

        for pt in pts {
            let centered = pt - centroid;
            for i in 0..DIM {
                let dot = principal.axes[i].dot(&centered);
                mins[i] = mins[i].min(dot);
                maxs[i] = maxs[i].max(dot);
            }
        }

        let axes = principal.matrix();
        let local_center = (maxs + mins) / 2.0;

        Some(Self {
            center: centroid + axes * local_center,
            extents: maxs - mins,
            axes,
            eigenvalues: principal.eigenvalues,
            is_stable: principal.is_stable,
            point_count: pts.len(),
        })
    }

    /// The `i`-th axis of this box.
    #[inline]
    pub fn axis(&self, i: usize) -> Vector<Real> {
        self.axes.column(i).into_owned()
    }

    /// The principal axes and eigenvalues this box is aligned with.
    pub fn principal_axes(&self) -> PrincipalAxes {
        PrincipalAxes {
            axes: [self.axis(0), self.axis(1), self.axis(2)],
            eigenvalues: self.eigenvalues,
            is_stable: self.is_stable,
        }
    }

    /// The half-size of this box along each of its axes.
    #[inline]
    pub fn half_extents(&self) -> Vector<Real> {
        self.extents / 2.0
    }

    /// The sum of the variances along each axis.
    #[inline]
    pub fn total_variance(&self) -> Real {
        self.eigenvalues.sum()
    }

    /// The volume of this box.
    #[inline]
    pub fn volume(&self) -> Real {
        self.extents.product()
    }

    /// The orientation of this box, as a unit quaternion.
    pub fn rotation(&self) -> Rotation<Real> {
        self.principal_axes().rotation()
    }

    /// The rigid transform mapping the box-local frame to world-space.
    pub fn local_to_world(&self) -> Isometry<Real> {
        Isometry::from_parts(Translation::from(self.center.coords), self.rotation())
    }

    /// Expresses a world-space point in the local frame of this box.
    #[inline]
    pub fn world_to_local_point(&self, pt: &Point<Real>) -> Point<Real> {
        Point::from(self.axes.tr_mul(&(pt - self.center)))
    }

    /// Tests if the given world-space point lies inside of this box, up to `tolerance`.
    pub fn contains_point(&self, pt: &Point<Real>, tolerance: Real) -> bool {
        let local = self.world_to_local_point(pt);
        let half = self.half_extents();
        (0..DIM).all(|i| local[i].abs() <= half[i] + tolerance)
    }

    /// Computes the world-space vertices of this box.
    ///
    /// The vertices are given in the following order, in the box-local frame:
    /// ```text
    ///    y             3 - 2
    ///    |           7 − 6 |
    ///    ___ x       |   | 1  (the zero is below 3 and on the left of 1,
    ///   /            4 - 5     hidden by the 4-5-6-7 face.)
    ///  z
    /// ```
    pub fn vertices(&self) -> [Point<Real>; 8] {
        let h = self.half_extents();
        [
            Vector::new(-h.x, -h.y, -h.z),
            Vector::new(h.x, -h.y, -h.z),
            Vector::new(h.x, h.y, -h.z),
            Vector::new(-h.x, h.y, -h.z),
            Vector::new(-h.x, -h.y, h.z),
            Vector::new(h.x, -h.y, h.z),
            Vector::new(h.x, h.y, h.z),
            Vector::new(-h.x, h.y, h.z),
        ]
        .map(|local| self.center + self.axes * local)
    }
}
