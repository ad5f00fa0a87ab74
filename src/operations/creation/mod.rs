mod make_box;
mod make_cylinder;
mod make_ellipsoid;
mod make_primitive;
mod shape_spec;

pub use make_box::MakeBox;
pub use make_cylinder::MakeCylinder;
pub use make_ellipsoid::MakeEllipsoid;
pub use make_primitive::MakePrimitive;
pub use shape_spec::ShapeSpec;

use crate::error::{Result, ShapeError};

/// Upper bound on angular resolution, keeping vertex indices well inside `u32`.
pub const MAX_SEGMENTS: usize = 4096;

/// Parameters controlling the resolution of curved primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildParams {
    /// Number of segments around the vertical axis.
    pub segments: usize,
    /// Number of latitude bands from pole to pole on revolved shapes.
    pub rings: usize,
}

impl Default for BuildParams {
    fn default() -> Self {
        Self {
            segments: 50,
            rings: 50,
        }
    }
}

impl BuildParams {
    /// Sets the number of segments around the vertical axis.
    #[must_use]
    pub fn with_segments(mut self, segments: usize) -> Self {
        self.segments = segments;
        self
    }

    /// Sets the number of latitude bands.
    #[must_use]
    pub fn with_rings(mut self, rings: usize) -> Self {
        self.rings = rings;
        self
    }

    /// Checks the resolution bounds.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::InvalidResolution`] if `segments` is outside
    /// `3..=MAX_SEGMENTS` or `rings` is outside `2..=MAX_SEGMENTS`.
    pub fn validate(&self) -> Result<()> {
        check_resolution("segments", self.segments, 3)?;
        check_resolution("rings", self.rings, 2)
    }
}

fn check_resolution(name: &'static str, value: usize, min: usize) -> Result<()> {
    if (min..=MAX_SEGMENTS).contains(&value) {
        Ok(())
    } else {
        Err(ShapeError::InvalidResolution { name, value, min }.into())
    }
}

/// Converts a vertex position in a generated mesh into a triangle index.
#[allow(clippy::cast_possible_truncation)]
fn vertex_index(index: usize) -> u32 {
    // Resolution is capped by MAX_SEGMENTS, so generated meshes stay far
    // below u32::MAX vertices.
    index as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_resolution_is_valid() {
        assert!(BuildParams::default().validate().is_ok());
    }

    #[test]
    fn too_few_segments_is_rejected() {
        assert!(BuildParams::default().with_segments(2).validate().is_err());
        assert!(BuildParams::default().with_rings(1).validate().is_err());
        assert!(BuildParams::default()
            .with_segments(MAX_SEGMENTS + 1)
            .validate()
            .is_err());
    }
}
