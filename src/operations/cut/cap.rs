use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet, VecDeque};

use spade::handles::{FixedFaceHandle, FixedVertexHandle, InnerTag};
use spade::{ConstrainedDelaunayTriangulation, InsertionError, Point2 as SpadePoint2, Triangulation};

use crate::error::{MeshError, Result};
use crate::geometry::Plane;
use crate::math::Point3;

type Cdt = ConstrainedDelaunayTriangulation<SpadePoint2<f64>>;

/// The open contour a cut leaves on the cutting plane, and the triangles
/// that close it.
///
/// Edges are stored reversed relative to the clipped mesh, so a cap built
/// from them winds along the plane normal and matches the mesh's outward
/// orientation.
pub(crate) struct CapContour<'a> {
    vertices: &'a [Point3],
    plane: &'a Plane,
    edges: Vec<(u32, u32)>,
}

impl<'a> CapContour<'a> {
    /// Collects the boundary edges of a clipped mesh whose endpoints both
    /// lie on the cutting plane.
    pub(crate) fn from_clipped(
        vertices: &'a [Point3],
        triangles: &[[u32; 3]],
        on_plane: &[bool],
        plane: &'a Plane,
    ) -> Self {
        let directed: HashSet<(u32, u32)> = triangles.iter().flat_map(|&t| tri_edges(t)).collect();

        let edges = triangles
            .iter()
            .flat_map(|&t| tri_edges(t))
            .filter(|&(a, b)| {
                !directed.contains(&(b, a)) && on_plane[a as usize] && on_plane[b as usize]
            })
            .map(|(a, b)| (b, a))
            .collect();

        Self {
            vertices,
            plane,
            edges,
        }
    }

    #[must_use]
    pub(crate) fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Triangulates the region enclosed by the contour.
    ///
    /// Uses a constrained Delaunay triangulation in the plane's `(u, v)`
    /// frame. Regions are chosen by even-odd parity, so several disjoint
    /// loops and loops nested inside each other (holes) are handled.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::DegenerateCap`] if the contour is not closed,
    /// crosses itself, or encloses no area.
    pub(crate) fn triangulate(&self) -> Result<Vec<[u32; 3]>> {
        if self.edges.is_empty() {
            return Ok(Vec::new());
        }
        self.check_closed()?;

        let mut cdt = Cdt::new();
        let mut handles: HashMap<u32, FixedVertexHandle> = HashMap::new();
        let mut owners: HashMap<usize, u32> = HashMap::new();

        for &(a, b) in &self.edges {
            for v in [a, b] {
                if let Entry::Vacant(slot) = handles.entry(v) {
                    let (u, w) = self.plane.project_uv(&self.vertices[v as usize]);
                    let handle = cdt.insert(SpadePoint2::new(u, w)).map_err(|e: InsertionError| {
                        MeshError::DegenerateCap(format!("CDT insert: {e}"))
                    })?;
                    slot.insert(handle);
                    owners.entry(handle.index()).or_insert(v);
                }
            }
        }

        for &(a, b) in &self.edges {
            let (from, to) = (handles[&a], handles[&b]);
            if from == to {
                continue;
            }
            if !cdt.can_add_constraint(from, to) {
                return Err(MeshError::DegenerateCap("contour crosses itself".into()).into());
            }
            cdt.add_constraint(from, to);
        }

        let interior = classify_interior_faces(&cdt);
        let normal = self.plane.plane_normal();

        let mut triangles = Vec::with_capacity(interior.len());
        for face in cdt.inner_faces() {
            if !interior.contains(&face.fix().index()) {
                continue;
            }
            let mut tri = [0u32; 3];
            for (slot, vh) in tri.iter_mut().zip(face.vertices()) {
                *slot = *owners.get(&vh.fix().index()).ok_or_else(|| {
                    MeshError::DegenerateCap("triangulation introduced a vertex".into())
                })?;
            }

            let [p0, p1, p2] = tri.map(|i| self.vertices[i as usize]);
            if (p1 - p0).cross(&(p2 - p0)).dot(normal) < 0.0 {
                tri.swap(1, 2);
            }
            triangles.push(tri);
        }

        if triangles.is_empty() {
            return Err(MeshError::DegenerateCap("contour encloses no area".into()).into());
        }
        Ok(triangles)
    }

    /// Every contour vertex must be entered as often as it is left.
    fn check_closed(&self) -> Result<()> {
        let mut balance: HashMap<u32, i64> = HashMap::new();
        for &(a, b) in &self.edges {
            *balance.entry(a).or_insert(0) += 1;
            *balance.entry(b).or_insert(0) -= 1;
        }
        match balance.iter().find(|(_, &d)| d != 0) {
            Some((v, _)) => {
                Err(MeshError::DegenerateCap(format!("contour is open at vertex {v}")).into())
            }
            None => Ok(()),
        }
    }
}

fn tri_edges([a, b, c]: [u32; 3]) -> [(u32, u32); 3] {
    [(a, b), (b, c), (c, a)]
}

/// Marks the inner faces of the CDT that lie inside the contour.
///
/// Flood-fills from the faces bordering the outer face at depth 0, adding
/// one each time a constraint edge is crossed. Odd depth is interior.
fn classify_interior_faces(cdt: &Cdt) -> HashSet<usize> {
    let mut depth: HashMap<usize, u32> = HashMap::new();
    let mut queue: VecDeque<(FixedFaceHandle<InnerTag>, u32)> = VecDeque::new();

    let outer = cdt.outer_face().fix();
    for edge in cdt.directed_edges() {
        if edge.face().fix() != outer {
            continue;
        }
        if let Some(inner) = edge.rev().face().as_inner() {
            let d = u32::from(cdt.is_constraint_edge(edge.as_undirected().fix()));
            if let Entry::Vacant(slot) = depth.entry(inner.fix().index()) {
                slot.insert(d);
                queue.push_back((inner.fix(), d));
            }
        }
    }

    while let Some((face, d)) = queue.pop_front() {
        for edge in cdt.face(face).adjacent_edges() {
            let Some(neighbor) = edge.rev().face().as_inner() else {
                continue;
            };
            let crossed = cdt.is_constraint_edge(edge.as_undirected().fix());
            let nd = d + u32::from(crossed);
            if let Entry::Vacant(slot) = depth.entry(neighbor.fix().index()) {
                slot.insert(nd);
                queue.push_back((neighbor.fix(), nd));
            }
        }
    }

    depth
        .into_iter()
        .filter(|&(_, d)| d % 2 == 1)
        .map(|(index, _)| index)
        .collect()
}
