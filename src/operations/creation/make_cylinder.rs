use std::f64::consts::TAU;

use crate::error::Result;
use crate::math::Point3;
use crate::mesh::Solid;

use super::shape_spec::validate_dimension;
use super::{vertex_index, BuildParams};

/// Creates a right circular cylinder centred at the origin.
///
/// The axis runs along Y from `-height/2` to `height/2`. The side is
/// approximated by `segments` flat facets and each end by a triangle fan.
pub struct MakeCylinder {
    diameter: f64,
    height: f64,
    params: BuildParams,
}

impl MakeCylinder {
    /// Creates a new `MakeCylinder` operation with default resolution.
    #[must_use]
    pub fn new(diameter: f64, height: f64) -> Self {
        Self {
            diameter,
            height,
            params: BuildParams::default(),
        }
    }

    /// Sets custom resolution parameters.
    #[must_use]
    pub fn with_params(mut self, params: BuildParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the operation, returning the cylinder mesh.
    ///
    /// # Errors
    ///
    /// Returns an error if the diameter or height is not a finite positive
    /// value, or the resolution is out of range.
    #[allow(clippy::cast_precision_loss)]
    pub fn execute(&self) -> Result<Solid> {
        let r = validate_dimension("diameter", self.diameter)? / 2.0;
        let hy = validate_dimension("height", self.height)? / 2.0;
        self.params.validate()?;
        let n = self.params.segments;

        // Layout: bottom ring [0, n), top ring [n, 2n), bottom centre, top centre
        let mut vertices = Vec::with_capacity(2 * n + 2);
        for y in [-hy, hy] {
            for k in 0..n {
                let theta = k as f64 * TAU / n as f64;
                vertices.push(Point3::new(r * theta.cos(), y, r * theta.sin()));
            }
        }
        vertices.push(Point3::new(0.0, -hy, 0.0));
        vertices.push(Point3::new(0.0, hy, 0.0));

        let bottom_centre = vertex_index(2 * n);
        let top_centre = vertex_index(2 * n + 1);

        let mut triangles = Vec::with_capacity(4 * n);
        for k in 0..n {
            let b0 = vertex_index(k);
            let b1 = vertex_index((k + 1) % n);
            let t0 = vertex_index(n + k);
            let t1 = vertex_index(n + (k + 1) % n);

            triangles.push([b0, t0, b1]);
            triangles.push([b1, t0, t1]);
            triangles.push([bottom_centre, b0, b1]);
            triangles.push([top_centre, t1, t0]);
        }

        Ok(Solid::from_parts(vertices, triangles))
    }
}
