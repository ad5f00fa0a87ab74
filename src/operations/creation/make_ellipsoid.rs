use std::f64::consts::{PI, TAU};

use crate::error::Result;
use crate::math::Point3;
use crate::mesh::Solid;

use super::shape_spec::validate_dimension;
use super::{vertex_index, BuildParams};

/// Creates the oval blank: an ellipsoid revolved about Y.
///
/// A UV sphere with its poles on the Y axis is sampled with `segments`
/// meridians and `rings` latitude bands, then scaled so the semi-axes are
/// `length/2` (X), `height/2` (Y) and `width/2` (Z). The facets sit inside
/// the true ellipsoid, so the X and Z extents can fall short of the
/// requested dimensions by a factor of at most `cos(pi / segments)`.
pub struct MakeEllipsoid {
    length: f64,
    width: f64,
    height: f64,
    params: BuildParams,
}

impl MakeEllipsoid {
    /// Creates a new `MakeEllipsoid` operation with default resolution.
    #[must_use]
    pub fn new(length: f64, width: f64, height: f64) -> Self {
        Self {
            length,
            width,
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

    /// Executes the operation, returning the ellipsoid mesh.
    ///
    /// # Errors
    ///
    /// Returns an error if any dimension is not a finite positive value, or
    /// the resolution is out of range.
    #[allow(clippy::cast_precision_loss)]
    pub fn execute(&self) -> Result<Solid> {
        let a = validate_dimension("length", self.length)? / 2.0;
        let c = validate_dimension("width", self.width)? / 2.0;
        let b = validate_dimension("height", self.height)? / 2.0;
        self.params.validate()?;
        let n = self.params.segments;
        let rings = self.params.rings;

        // Layout: north pole, (rings - 1) latitude rings of n vertices, south pole
        let mut vertices = Vec::with_capacity(n * (rings - 1) + 2);
        vertices.push(Point3::new(0.0, b, 0.0));
        for i in 1..rings {
            let phi = i as f64 * PI / rings as f64;
            let (s, y) = (phi.sin(), phi.cos());
            for k in 0..n {
                let theta = k as f64 * TAU / n as f64;
                vertices.push(Point3::new(
                    a * s * theta.cos(),
                    b * y,
                    c * s * theta.sin(),
                ));
            }
        }
        vertices.push(Point3::new(0.0, -b, 0.0));

        let north = 0;
        let south = vertex_index(vertices.len() - 1);
        let ring = |i: usize, k: usize| vertex_index(1 + (i - 1) * n + k % n);

        let mut triangles = Vec::with_capacity(2 * n * (rings - 1));
        for k in 0..n {
            triangles.push([north, ring(1, k + 1), ring(1, k)]);
        }
        for i in 1..rings - 1 {
            for k in 0..n {
                let (u0, u1) = (ring(i, k), ring(i, k + 1));
                let (l0, l1) = (ring(i + 1, k), ring(i + 1, k + 1));
                triangles.push([l0, u0, l1]);
                triangles.push([l1, u0, u1]);
            }
        }
        for k in 0..n {
            triangles.push([south, ring(rings - 1, k), ring(rings - 1, k + 1)]);
        }

        Ok(Solid::from_parts(vertices, triangles))
    }
}
