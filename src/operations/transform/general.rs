use crate::error::{GeometryError, Result};
use crate::math::{Matrix4, Point3};
use crate::mesh::Solid;

/// Applies an arbitrary affine 4x4 matrix to a solid, returning a new one.
///
/// Matrices with a negative determinant (mirrors) reverse the winding of
/// every triangle so the result stays outward-facing.
pub struct GeneralTransform<'a> {
    solid: &'a Solid,
    matrix: Matrix4,
}

impl<'a> GeneralTransform<'a> {
    /// Creates a new `GeneralTransform` operation.
    #[must_use]
    pub fn new(solid: &'a Solid, matrix: Matrix4) -> Self {
        Self { solid, matrix }
    }

    /// Executes the transformation.
    ///
    /// # Errors
    ///
    /// Returns an error if the matrix is singular or not finite.
    pub fn execute(&self) -> Result<Solid> {
        let det = self.matrix.fixed_view::<3, 3>(0, 0).determinant();
        if !det.is_finite() || det.abs() < f64::EPSILON {
            return Err(GeometryError::Degenerate("transform matrix is singular".into()).into());
        }

        let vertices = self
            .solid
            .vertices()
            .iter()
            .map(|p| self.matrix.transform_point(p))
            .collect::<Vec<Point3>>();

        let triangles = if det < 0.0 {
            self.solid
                .triangles()
                .iter()
                .map(|&[a, b, c]| [a, c, b])
                .collect()
        } else {
            self.solid.triangles().to_vec()
        };

        Ok(Solid::from_parts(vertices, triangles))
    }
}
