use crate::error::Result;
use crate::geometry::Plane;
use crate::math::{Point3, Vector3};

use super::{CutSide, CutSpec};

/// Turns a [`CutSpec`] into the half-space to discard.
///
/// Every cut plane contains the Z direction: at angle 0 the plane is
/// horizontal, and the angle tilts it about Z. The plane passes through
/// `(0, position, 0)` on the vertical centre line. The returned normal points
/// at the material that the cut removes, so `KeepAbove` gives a downward
/// normal at angle 0 and `KeepBelow` an upward one.
pub struct MakeCutPlane {
    spec: CutSpec,
}

impl MakeCutPlane {
    /// Creates a new `MakeCutPlane` operation.
    #[must_use]
    pub fn new(spec: CutSpec) -> Self {
        Self { spec }
    }

    /// Executes the operation, returning the oriented cutting plane.
    ///
    /// # Errors
    ///
    /// Returns an error if the angle is outside `(-180, 180]` or the
    /// position is not finite.
    pub fn execute(&self) -> Result<Plane> {
        self.spec.validate()?;
        let up = plane_up(self.spec.angle());
        let normal = match self.spec.side() {
            CutSide::KeepAbove => -up,
            CutSide::KeepBelow => up,
        };
        Plane::from_normal(Point3::new(0.0, self.spec.position(), 0.0), normal)
    }
}

/// The plane's "up" direction: +Y rotated about +Z by `angle_deg`.
#[must_use]
pub fn plane_up(angle_deg: f64) -> Vector3 {
    let (s, c) = angle_deg.to_radians().sin_cos();
    Vector3::new(-s, c, 0.0)
}
