use crate::mesh::Solid;

/// Computes the volume enclosed by a closed solid.
///
/// Uses the signed tetrahedron method: for each triangle, computes
/// `(1/6) * v0 . (v1 x v2)` and sums over all triangles. Triangles must be
/// wound counter-clockwise seen from outside.
pub struct Volume<'a> {
    solid: &'a Solid,
}

impl<'a> Volume<'a> {
    /// Creates a new `Volume` query.
    #[must_use]
    pub fn new(solid: &'a Solid) -> Self {
        Self { solid }
    }

    /// Executes the query, returning the signed volume.
    ///
    /// Positive for outward winding, negative for inverted meshes.
    #[must_use]
    pub fn signed(&self) -> f64 {
        // Offsetting by the first vertex keeps the terms small for meshes
        // far from the origin.
        let Some(&anchor) = self.solid.vertices().first() else {
            return 0.0;
        };
        let sum: f64 = self
            .solid
            .triangle_iter()
            .map(|[v0, v1, v2]| {
                let a = v0 - anchor;
                let b = v1 - anchor;
                let c = v2 - anchor;
                a.dot(&b.cross(&c))
            })
            .sum();
        sum / 6.0
    }

    /// Executes the query, returning the volume (absolute value).
    #[must_use]
    pub fn execute(&self) -> f64 {
        self.signed().abs()
    }
}
