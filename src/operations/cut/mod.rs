mod apply_cut;
mod cap;
mod cut_spec;
mod make_cut_plane;
mod make_cut_preview;
mod replay;

pub use apply_cut::ApplyCut;
pub use cut_spec::{CutSide, CutSpec};
pub use make_cut_plane::{plane_up, MakeCutPlane};
pub use make_cut_preview::MakeCutPreview;
pub use replay::ReplayCuts;

use crate::math::TOLERANCE;

/// Parameters controlling numeric behaviour of cuts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CutParams {
    /// On-plane tolerance as a fraction of the mesh bounding-box diagonal.
    pub relative_tolerance: f64,
}

impl Default for CutParams {
    fn default() -> Self {
        Self {
            relative_tolerance: 1e-6,
        }
    }
}

impl CutParams {
    /// Sets the relative on-plane tolerance.
    #[must_use]
    pub fn with_relative_tolerance(mut self, relative_tolerance: f64) -> Self {
        self.relative_tolerance = relative_tolerance;
        self
    }

    /// Absolute on-plane tolerance for a mesh with the given diagonal.
    #[must_use]
    pub fn tolerance_for(&self, diagonal: f64) -> f64 {
        (self.relative_tolerance.abs() * diagonal).max(TOLERANCE)
    }
}
