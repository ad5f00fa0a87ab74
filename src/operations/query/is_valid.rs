use std::collections::HashMap;

use crate::mesh::Solid;

/// Checks that a solid is a closed, consistently oriented surface.
///
/// Every undirected edge must be used by exactly two triangles, once in
/// each direction, and no triangle may repeat a vertex index.
pub struct IsClosed<'a> {
    solid: &'a Solid,
}

impl<'a> IsClosed<'a> {
    /// Creates a new `IsClosed` query.
    #[must_use]
    pub fn new(solid: &'a Solid) -> Self {
        Self { solid }
    }

    /// Executes the check, returning `true` if the solid is closed.
    #[must_use]
    pub fn execute(&self) -> bool {
        self.open_edge_count() == Some(0)
    }

    /// Number of directed edges without a matching opposite edge, or
    /// `None` if the mesh has a degenerate or non-manifold edge.
    #[must_use]
    pub fn open_edge_count(&self) -> Option<usize> {
        let mut directed: HashMap<(u32, u32), usize> = HashMap::new();
        for &[a, b, c] in self.solid.triangles() {
            if a == b || b == c || c == a {
                return None;
            }
            for edge in [(a, b), (b, c), (c, a)] {
                *directed.entry(edge).or_insert(0) += 1;
            }
        }

        let mut open = 0;
        for (&(a, b), &count) in &directed {
            if count > 1 {
                return None;
            }
            if !directed.contains_key(&(b, a)) {
                open += 1;
            }
        }
        Some(open)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point3;
    use crate::operations::creation::{MakeBox, MakeCylinder, MakeEllipsoid};

    #[test]
    fn primitives_are_closed() {
        let solids = [
            MakeBox::new(1.0, 2.0, 3.0).execute().unwrap(),
            MakeCylinder::new(2.0, 3.0).execute().unwrap(),
            MakeEllipsoid::new(3.0, 2.0, 1.0).execute().unwrap(),
        ];
        for solid in &solids {
            assert!(IsClosed::new(solid).execute());
        }
    }

    #[test]
    fn single_triangle_is_open() {
        let solid = Solid::new(
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
            ],
            vec![[0, 1, 2]],
        )
        .unwrap();
        let check = IsClosed::new(&solid);
        assert_eq!(check.open_edge_count(), Some(3));
        assert!(!check.execute());
    }

    #[test]
    fn duplicated_triangle_is_not_manifold() {
        let solid = Solid::new(
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
            ],
            vec![[0, 1, 2], [0, 1, 2]],
        )
        .unwrap();
        assert_eq!(IsClosed::new(&solid).open_edge_count(), None);
    }
}
