use crate::error::{MeshError, Result};
use crate::math::{Point3, Vector3};

/// A closed boundary mesh made of triangles.
///
/// Triangles are wound counter-clockwise when seen from outside the solid.
/// The mesh is immutable once built: every operation in this crate returns
/// a new `Solid` instead of editing one in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Solid {
    vertices: Vec<Point3>,
    triangles: Vec<[u32; 3]>,
}

impl Solid {
    /// Creates a solid from raw vertex and triangle buffers.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no triangles or a triangle references
    /// a vertex that does not exist.
    pub fn new(vertices: Vec<Point3>, triangles: Vec<[u32; 3]>) -> Result<Self> {
        if triangles.is_empty() {
            return Err(MeshError::Empty.into());
        }
        let len = vertices.len();
        for &index in triangles.iter().flatten() {
            if index as usize >= len {
                return Err(MeshError::IndexOutOfRange { index, len }.into());
            }
        }
        Ok(Self {
            vertices,
            triangles,
        })
    }

    /// Builds a solid whose indices are known to be valid.
    pub(crate) fn from_parts(vertices: Vec<Point3>, triangles: Vec<[u32; 3]>) -> Self {
        debug_assert!(triangles
            .iter()
            .flatten()
            .all(|&i| (i as usize) < vertices.len()));
        Self {
            vertices,
            triangles,
        }
    }

    /// Vertex positions.
    #[must_use]
    pub fn vertices(&self) -> &[Point3] {
        &self.vertices
    }

    /// Triangle indices (each triple defines a triangle).
    #[must_use]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns the three corner positions of a triangle.
    #[must_use]
    pub fn triangle_points(&self, tri: [u32; 3]) -> [Point3; 3] {
        tri.map(|i| self.vertices[i as usize])
    }

    /// Iterates over the corner positions of every triangle.
    pub fn triangle_iter(&self) -> impl Iterator<Item = [Point3; 3]> + '_ {
        self.triangles.iter().map(|&tri| self.triangle_points(tri))
    }

    /// Per-triangle unit normals, derived from the winding.
    ///
    /// Degenerate triangles yield a zero vector.
    #[must_use]
    pub fn face_normals(&self) -> Vec<Vector3> {
        self.triangle_iter()
            .map(|[a, b, c]| {
                let n = (b - a).cross(&(c - a));
                n.try_normalize(0.0).unwrap_or_else(Vector3::zeros)
            })
            .collect()
    }

    /// Flattened vertex buffer (`x, y, z` per vertex) for renderers.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn position_buffer(&self) -> Vec<f32> {
        self.vertices
            .iter()
            .flat_map(|p| [p.x as f32, p.y as f32, p.z as f32])
            .collect()
    }

    /// Flattened index buffer (three indices per triangle) for renderers.
    #[must_use]
    pub fn index_buffer(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }
}
