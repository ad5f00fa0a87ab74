use tracing::debug;

use crate::error::Result;
use crate::math::{Point3, Vector3};
use crate::mesh::Solid;
use crate::operations::creation::MakeBox;
use crate::operations::query::Aabb;
use crate::operations::transform::{Rotate, Translate};

use super::CutSpec;

const DEFAULT_SPAN: f64 = 50.0;
const DEFAULT_DEPTH: f64 = 20.0;
const DEFAULT_THICKNESS: f64 = 1.0;

/// Margin added around a fitted slab so it visibly overhangs the solid.
const FIT_MARGIN: f64 = 1.1;

/// Builds a thin slab visualising where a cut will land.
///
/// The slab is a box of `span` along X, `thickness` along Y and `depth`
/// along Z, tilted about Z by the cut angle and lifted to the cut position.
/// Its mid-plane coincides with the cutting plane.
pub struct MakeCutPreview {
    spec: CutSpec,
    span: f64,
    depth: f64,
    thickness: f64,
}

impl MakeCutPreview {
    /// Creates a new `MakeCutPreview` operation with the default slab size.
    #[must_use]
    pub fn new(spec: CutSpec) -> Self {
        Self {
            spec,
            span: DEFAULT_SPAN,
            depth: DEFAULT_DEPTH,
            thickness: DEFAULT_THICKNESS,
        }
    }

    /// Sets the slab extent explicitly.
    #[must_use]
    pub fn with_extent(mut self, span: f64, depth: f64, thickness: f64) -> Self {
        self.span = span;
        self.depth = depth;
        self.thickness = thickness;
        self
    }

    /// Sizes the slab so it covers the given bounds at any angle.
    #[must_use]
    pub fn fit_to(mut self, bounds: &Aabb) -> Self {
        let size = bounds.size();
        let reach = size.x.hypot(size.y) + 2.0 * self.spec.position().abs();
        self.span = reach * FIT_MARGIN;
        self.depth = size.z * FIT_MARGIN;
        self
    }

    /// Executes the operation, returning the slab mesh.
    ///
    /// # Errors
    ///
    /// Returns an error if the cut is invalid or the slab extent is not a
    /// finite positive size.
    pub fn execute(&self) -> Result<Solid> {
        self.spec.validate()?;
        debug!(
            spec = %self.spec,
            span = self.span,
            depth = self.depth,
            thickness = self.thickness,
            "building cut preview"
        );

        let slab = MakeBox::new(self.span, self.depth, self.thickness).execute()?;
        let tilted = Rotate::new(
            &slab,
            Point3::origin(),
            Vector3::z(),
            self.spec.angle().to_radians(),
        )
        .execute()?;
        Translate::new(&tilted, Vector3::new(0.0, self.spec.position(), 0.0)).execute()
    }
}
