use crate::math::Real;

/// How the third principal axis is obtained once the first two are known.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum ThirdAxisStrategy {
    /// The third axis is `v1 × v2`.
    ///
    /// It is orthogonal by construction and always yields a right-handed frame, but a
    /// degenerate third direction is not detected.
    CrossProduct,
    /// The third axis is refined by power iteration like the first two.
    ///
    /// This costs a few more matrix-vector products and reports a degenerate third direction
    /// (e.g. a planar point cloud) as unstable.
    PowerIteration,
}

/// Parameters of the power-iteration eigensolver.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct EigenSolverOptions {
    /// Maximum number of power-iteration steps per extracted axis.
    pub max_iterations: usize,
    /// Iteration on an axis stops once two successive estimates are closer than this.
    pub convergence_epsilon: Real,
    /// A deflated image `M·v` shorter than this marks a degenerate direction.
    pub degeneracy_epsilon: Real,
    /// How the third axis is computed.
    pub third_axis: ThirdAxisStrategy,
}

impl EigenSolverOptions {
    /// Settings used to fit volumes on a sparse set of user-placed anchors.
    pub const ANCHOR: Self = Self {
        max_iterations: 50,
        convergence_epsilon: 1.0e-6,
        degeneracy_epsilon: 1.0e-6,
        third_axis: ThirdAxisStrategy::CrossProduct,
    };

    /// Settings used to fit volumes on point clouds sampled from a depth map.
    pub const DEPTH: Self = Self {
        max_iterations: 20,
        convergence_epsilon: 1.0e-6,
        degeneracy_epsilon: 1.0e-6,
        third_axis: ThirdAxisStrategy::PowerIteration,
    };

    /// Returns a copy of these options with a different iteration cap.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Returns a copy of these options with a different third-axis strategy.
    pub fn with_third_axis(mut self, third_axis: ThirdAxisStrategy) -> Self {
        self.third_axis = third_axis;
        self
    }
}

impl Default for EigenSolverOptions {
    fn default() -> Self {
        Self::ANCHOR
    }
}
