use crate::mesh::Solid;

/// Computes the total surface area of a solid by summing triangle areas.
pub struct Area<'a> {
    solid: &'a Solid,
}

impl<'a> Area<'a> {
    /// Creates a new `Area` query.
    #[must_use]
    pub fn new(solid: &'a Solid) -> Self {
        Self { solid }
    }

    /// Executes the query, returning the total surface area.
    #[must_use]
    pub fn execute(&self) -> f64 {
        self.solid
            .triangle_iter()
            .map(|[v0, v1, v2]| (v1 - v0).cross(&(v2 - v0)).norm() * 0.5)
            .sum()
    }
}
