use crate::error::Result;
use crate::math::Point3;
use crate::mesh::Solid;

use super::shape_spec::validate_dimension;

/// Two triangles per face over the corners built in [`MakeBox::execute`],
/// counter-clockwise seen from outside.
const BOX_TRIANGLES: [[u32; 3]; 12] = [
    // -Z
    [0, 3, 2],
    [0, 2, 1],
    // +Z
    [4, 5, 6],
    [4, 6, 7],
    // -Y
    [0, 1, 5],
    [0, 5, 4],
    // +Y
    [3, 7, 6],
    [3, 6, 2],
    // -X
    [0, 4, 7],
    [0, 7, 3],
    // +X
    [1, 2, 6],
    [1, 6, 5],
];

/// Creates a rectangular prism centred at the origin.
///
/// Edge lengths: `length` along X, `height` along Y, `width` along Z.
pub struct MakeBox {
    length: f64,
    width: f64,
    height: f64,
}

impl MakeBox {
    /// Creates a new `MakeBox` operation.
    #[must_use]
    pub fn new(length: f64, width: f64, height: f64) -> Self {
        Self {
            length,
            width,
            height,
        }
    }

    /// Executes the operation, returning the box mesh.
    ///
    /// # Errors
    ///
    /// Returns an error if any dimension is not a finite positive value.
    pub fn execute(&self) -> Result<Solid> {
        let hx = validate_dimension("length", self.length)? / 2.0;
        let hz = validate_dimension("width", self.width)? / 2.0;
        let hy = validate_dimension("height", self.height)? / 2.0;

        let vertices = vec![
            Point3::new(-hx, -hy, -hz),
            Point3::new(hx, -hy, -hz),
            Point3::new(hx, hy, -hz),
            Point3::new(-hx, hy, -hz),
            Point3::new(-hx, -hy, hz),
            Point3::new(hx, -hy, hz),
            Point3::new(hx, hy, hz),
            Point3::new(-hx, hy, hz),
        ];

        Ok(Solid::from_parts(vertices, BOX_TRIANGLES.to_vec()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::operations::query::{BoundingBox, IsClosed, Volume};
    use approx::assert_relative_eq;

    #[test]
    fn box_has_8_vertices_and_12_triangles() {
        let solid = MakeBox::new(1.0, 2.0, 3.0).execute().unwrap();
        assert_eq!(solid.vertex_count(), 8);
        assert_eq!(solid.triangle_count(), 12);
        assert!(IsClosed::new(&solid).execute());
    }

    #[test]
    fn bounding_box_equals_dimensions() {
        for (l, w, h) in [(50.0, 30.0, 20.0), (0.5, 7.25, 1e3), (1.0, 1.0, 1.0)] {
            let solid = MakeBox::new(l, w, h).execute().unwrap();
            let size = BoundingBox::new(&solid).execute().unwrap().size();
            assert_relative_eq!(size.x, l);
            assert_relative_eq!(size.y, h);
            assert_relative_eq!(size.z, w);
        }
    }

    #[test]
    fn winding_is_outward() {
        let solid = MakeBox::new(2.0, 2.0, 2.0).execute().unwrap();
        assert!(Volume::new(&solid).signed() > 0.0);
        for (tri, normal) in solid.triangles().iter().zip(solid.face_normals()) {
            let [a, b, c] = solid.triangle_points(*tri);
            let centroid = Point3::from((a.coords + b.coords + c.coords) / 3.0);
            assert!(centroid.coords.dot(&normal) > 0.0);
        }
    }

    #[test]
    fn zero_dimension_fails() {
        assert!(MakeBox::new(1.0, 0.0, 1.0).execute().is_err());
        assert!(MakeBox::new(-1.0, 1.0, 1.0).execute().is_err());
        assert!(MakeBox::new(1.0, 1.0, f64::INFINITY).execute().is_err());
    }
}
