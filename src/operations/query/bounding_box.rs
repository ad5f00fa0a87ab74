use crate::error::{MeshError, Result};
use crate::geometry::Plane;
use crate::math::intersect_3d::signed_distance_to_plane;
use crate::math::{Point3, Vector3};
use crate::mesh::Solid;

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner of the bounding box.
    pub min: Point3,
    /// Maximum corner of the bounding box.
    pub max: Point3,
}

/// Where a plane sits relative to a bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AabbPlaneRelation {
    /// The whole box is on the side the normal points to.
    Front,
    /// The whole box is on the side opposite the normal.
    Back,
    /// The plane passes through the box.
    Crossing,
}

impl Aabb {
    /// Smallest box containing all the points, or `None` for an empty slice.
    #[must_use]
    pub fn from_points(points: &[Point3]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut min = *first;
        let mut max = *first;
        for p in rest {
            min = min.inf(p);
            max = max.sup(p);
        }
        Some(Self { min, max })
    }

    /// Edge lengths along X, Y and Z.
    #[must_use]
    pub fn size(&self) -> Vector3 {
        self.max - self.min
    }

    #[must_use]
    pub fn center(&self) -> Point3 {
        nalgebra::center(&self.min, &self.max)
    }

    /// Length of the main diagonal.
    #[must_use]
    pub fn diagonal(&self) -> f64 {
        self.size().norm()
    }

    /// Returns `true` if the point is inside the box or on its boundary.
    #[must_use]
    pub fn contains(&self, point: &Point3) -> bool {
        (0..3).all(|i| point[i] >= self.min[i] && point[i] <= self.max[i])
    }

    /// Classifies the box against a plane, treating anything within
    /// `tolerance` of the plane as crossing.
    #[must_use]
    pub fn plane_relation(&self, plane: &Plane, tolerance: f64) -> AabbPlaneRelation {
        let half = self.size() * 0.5;
        let normal = plane.plane_normal();
        let radius = normal.abs().dot(&half);
        let distance = signed_distance_to_plane(&self.center(), plane);

        if distance - radius > tolerance {
            AabbPlaneRelation::Front
        } else if distance + radius < -tolerance {
            AabbPlaneRelation::Back
        } else {
            AabbPlaneRelation::Crossing
        }
    }
}

/// Computes the axis-aligned bounding box of a solid.
pub struct BoundingBox<'a> {
    solid: &'a Solid,
}

impl<'a> BoundingBox<'a> {
    /// Creates a new `BoundingBox` query.
    #[must_use]
    pub fn new(solid: &'a Solid) -> Self {
        Self { solid }
    }

    /// Executes the query, returning the AABB of the solid's vertices.
    ///
    /// # Errors
    ///
    /// Returns an error if the solid has no vertices.
    pub fn execute(&self) -> Result<Aabb> {
        Aabb::from_points(self.solid.vertices()).ok_or_else(|| MeshError::Empty.into())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::operations::creation::{MakeBox, MakeCylinder};
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn box_bounds_match_dimensions() {
        let solid = MakeBox::new(50.0, 30.0, 20.0).execute().unwrap();
        let aabb = BoundingBox::new(&solid).execute().unwrap();
        assert_relative_eq!(aabb.min, p(-25.0, -10.0, -15.0));
        assert_relative_eq!(aabb.max, p(25.0, 10.0, 15.0));
        assert_relative_eq!(aabb.center(), p(0.0, 0.0, 0.0));
    }

    #[test]
    fn cylinder_bounds_span_height_along_y() {
        let solid = MakeCylinder::new(20.0, 50.0).execute().unwrap();
        let size = BoundingBox::new(&solid).execute().unwrap().size();
        assert_relative_eq!(size.y, 50.0, epsilon = 1e-9);
        assert_relative_eq!(size.x, 20.0, epsilon = 1e-9);
        assert!((size.z - 20.0).abs() < 0.1);
    }

    #[test]
    fn contains_includes_boundary() {
        let aabb = Aabb::from_points(&[p(0.0, 0.0, 0.0), p(1.0, 2.0, 3.0)]).unwrap();
        assert!(aabb.contains(&p(1.0, 2.0, 3.0)));
        assert!(aabb.contains(&p(0.5, 0.5, 0.5)));
        assert!(!aabb.contains(&p(1.5, 0.5, 0.5)));
    }

    #[test]
    fn empty_points_have_no_box() {
        assert!(Aabb::from_points(&[]).is_none());
    }

    #[test]
    fn plane_relation_detects_all_sides() {
        let aabb = Aabb::from_points(&[p(-1.0, -1.0, -1.0), p(1.0, 1.0, 1.0)]).unwrap();
        let above = Plane::from_normal(p(0.0, 5.0, 0.0), Vector3::y()).unwrap();
        let through = Plane::from_normal(p(0.0, 0.5, 0.0), Vector3::new(1.0, 1.0, 0.0)).unwrap();
        let below = Plane::from_normal(p(0.0, -5.0, 0.0), Vector3::y()).unwrap();

        assert_eq!(aabb.plane_relation(&above, 1e-9), AabbPlaneRelation::Back);
        assert_eq!(aabb.plane_relation(&through, 1e-9), AabbPlaneRelation::Crossing);
        assert_eq!(aabb.plane_relation(&below, 1e-9), AabbPlaneRelation::Front);
    }

    #[test]
    fn touching_plane_counts_as_crossing() {
        let aabb = Aabb::from_points(&[p(-1.0, -1.0, -1.0), p(1.0, 1.0, 1.0)]).unwrap();
        let touching = Plane::from_normal(p(0.0, 1.0, 0.0), Vector3::y()).unwrap();
        assert_eq!(aabb.plane_relation(&touching, 1e-9), AabbPlaneRelation::Crossing);
    }
}
