use std::collections::HashMap;

use tracing::debug;

use crate::error::{CutError, Result};
use crate::geometry::Plane;
use crate::math::intersect_3d::{
    segment_plane_point, signed_distance_to_plane, PointPlaneClassification,
};
use crate::math::Point3;
use crate::mesh::Solid;
use crate::operations::query::{AabbPlaneRelation, BoundingBox};

use super::cap::CapContour;
use super::CutParams;

/// Cuts a solid with a plane, discarding the side the normal points to.
///
/// Vertices within the tolerance of the plane are treated as lying on it
/// and kept.
/// Triangles crossing the plane are clipped, and the opening left behind is
/// closed with a planar cap so the result stays a closed solid.
///
/// * A plane that removes nothing (including one outside the solid's
///   bounding box) returns an exact copy of the input.
/// * A plane that would remove everything fails with
///   [`CutError::EmptyResult`].
pub struct ApplyCut<'a> {
    solid: &'a Solid,
    plane: &'a Plane,
    params: CutParams,
}

impl<'a> ApplyCut<'a> {
    /// Creates a new `ApplyCut` operation with default parameters.
    #[must_use]
    pub fn new(solid: &'a Solid, plane: &'a Plane) -> Self {
        Self {
            solid,
            plane,
            params: CutParams::default(),
        }
    }

    /// Sets custom cut parameters.
    #[must_use]
    pub fn with_params(mut self, params: CutParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the cut, returning the trimmed and capped solid.
    ///
    /// # Errors
    ///
    /// Returns [`CutError::EmptyResult`] if no material would remain, or a
    /// mesh error if the cut contour cannot be closed.
    pub fn execute(&self) -> Result<Solid> {
        let aabb = BoundingBox::new(self.solid).execute()?;
        let tolerance = self.params.tolerance_for(aabb.diagonal());

        match aabb.plane_relation(self.plane, tolerance) {
            AabbPlaneRelation::Back => {
                debug!("cut plane misses the solid, nothing removed");
                return Ok(self.solid.clone());
            }
            AabbPlaneRelation::Front => return Err(CutError::EmptyResult.into()),
            AabbPlaneRelation::Crossing => {}
        }

        let distances: Vec<f64> = self
            .solid
            .vertices()
            .iter()
            .map(|p| {
                let d = signed_distance_to_plane(p, self.plane);
                match PointPlaneClassification::from_distance(d, tolerance) {
                    PointPlaneClassification::On => 0.0,
                    PointPlaneClassification::Front | PointPlaneClassification::Back => d,
                }
            })
            .collect();

        let sides: Vec<PointPlaneClassification> = distances
            .iter()
            .map(|&d| PointPlaneClassification::from_distance(d, 0.0))
            .collect();
        let discarded = sides
            .iter()
            .filter(|&&s| s == PointPlaneClassification::Front)
            .count();
        let kept = sides
            .iter()
            .filter(|&&s| s == PointPlaneClassification::Back)
            .count();
        if discarded == 0 {
            debug!("all vertices on the kept side, nothing removed");
            return Ok(self.solid.clone());
        }
        if kept == 0 {
            return Err(CutError::EmptyResult.into());
        }

        let mut clipper = Clipper::new(self.solid.vertices(), &distances);
        for &tri in self.solid.triangles() {
            clipper.clip(tri);
        }
        let Clipper {
            vertices,
            mut triangles,
            on_plane,
            ..
        } = clipper;

        let contour = CapContour::from_clipped(&vertices, &triangles, &on_plane, self.plane);
        let cap = contour.triangulate()?;
        debug!(
            kept,
            discarded,
            contour_edges = contour.edge_count(),
            cap_triangles = cap.len(),
            "applied cut"
        );
        triangles.extend(cap);

        Ok(Solid::from_parts(vertices, triangles))
    }
}

/// Clips triangles against the kept half-space (`distance <= 0`),
/// building a compacted output mesh.
struct Clipper<'a> {
    source: &'a [Point3],
    distances: &'a [f64],
    /// Output index of each kept source vertex, assigned on first use.
    remap: Vec<Option<u32>>,
    /// Output index of the crossing point on each cut edge, keyed by
    /// `(min, max)` source index so neighbouring triangles share it.
    crossings: HashMap<(u32, u32), u32>,
    vertices: Vec<Point3>,
    triangles: Vec<[u32; 3]>,
    on_plane: Vec<bool>,
}

impl<'a> Clipper<'a> {
    fn new(source: &'a [Point3], distances: &'a [f64]) -> Self {
        Self {
            source,
            distances,
            remap: vec![None; source.len()],
            crossings: HashMap::new(),
            vertices: Vec::new(),
            triangles: Vec::new(),
            on_plane: Vec::new(),
        }
    }

    fn clip(&mut self, tri: [u32; 3]) {
        let d = tri.map(|i| self.distances[i as usize]);
        if d.iter().all(|&x| x > 0.0) {
            return;
        }
        if d.iter().all(|&x| x <= 0.0) {
            let out = tri.map(|i| self.keep(i));
            self.triangles.push(out);
            return;
        }

        // Sutherland-Hodgman against a single plane; the result is convex
        let mut polygon: Vec<u32> = Vec::with_capacity(4);
        for k in 0..3 {
            let (a, b) = (tri[k], tri[(k + 1) % 3]);
            let (da, db) = (d[k], d[(k + 1) % 3]);
            if da <= 0.0 {
                polygon.push(self.keep(a));
            }
            if (da < 0.0 && db > 0.0) || (da > 0.0 && db < 0.0) {
                polygon.push(self.crossing(a, b));
            }
        }

        for k in 1..polygon.len().saturating_sub(1) {
            self.triangles.push([polygon[0], polygon[k], polygon[k + 1]]);
        }
    }

    #[allow(clippy::float_cmp)]
    fn keep(&mut self, source: u32) -> u32 {
        if let Some(out) = self.remap[source as usize] {
            return out;
        }
        let out = self.push(
            self.source[source as usize],
            self.distances[source as usize] == 0.0,
        );
        self.remap[source as usize] = Some(out);
        out
    }

    fn crossing(&mut self, a: u32, b: u32) -> u32 {
        let key = (a.min(b), a.max(b));
        if let Some(&out) = self.crossings.get(&key) {
            return out;
        }
        let (lo, hi) = (key.0 as usize, key.1 as usize);
        let point = segment_plane_point(
            &self.source[lo],
            self.distances[lo],
            &self.source[hi],
            self.distances[hi],
        );
        let out = self.push(point, true);
        self.crossings.insert(key, out);
        out
    }

    #[allow(clippy::cast_possible_truncation)]
    fn push(&mut self, point: Point3, on_plane: bool) -> u32 {
        // Output never holds more than the source vertices plus one point
        // per source edge, which already fit in u32 indices.
        let index = self.vertices.len() as u32;
        self.vertices.push(point);
        self.on_plane.push(on_plane);
        index
    }
}
