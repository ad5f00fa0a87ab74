use crate::geometry::Plane;

use super::Point3;

/// Classification of a point relative to a plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointPlaneClassification {
    /// Point is on the positive side (in the direction of the normal).
    Front,
    /// Point is on the negative side (opposite the normal).
    Back,
    /// Point lies on the plane (within tolerance).
    On,
}

impl PointPlaneClassification {
    /// Classifies a signed distance with the given tolerance.
    #[must_use]
    pub fn from_distance(distance: f64, tolerance: f64) -> Self {
        if distance > tolerance {
            Self::Front
        } else if distance < -tolerance {
            Self::Back
        } else {
            Self::On
        }
    }
}

/// Signed distance from a point to a plane.
/// Positive = on the normal side, negative = opposite.
#[must_use]
pub fn signed_distance_to_plane(point: &Point3, plane: &Plane) -> f64 {
    let diff = point - plane.origin();
    plane.plane_normal().dot(&diff)
}

/// Point where the segment `a -> b` crosses the plane, given the signed
/// distances of both endpoints.
///
/// The endpoints must lie on opposite sides (`da * db < 0`). The result is
/// symmetric: swapping the endpoints yields the same point up to rounding,
/// so callers that need bit-identical points should pass a canonical order.
#[must_use]
pub fn segment_plane_point(a: &Point3, da: f64, b: &Point3, db: f64) -> Point3 {
    let t = da / (da - db);
    a + (b - a) * t
}
