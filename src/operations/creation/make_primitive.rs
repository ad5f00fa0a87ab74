use crate::error::Result;
use crate::mesh::Solid;

use super::{BuildParams, MakeBox, MakeCylinder, MakeEllipsoid, ShapeSpec};

/// Builds the boundary mesh for any [`ShapeSpec`].
///
/// Deterministic: the same spec and parameters always give the same mesh.
pub struct MakePrimitive {
    spec: ShapeSpec,
    params: BuildParams,
}

impl MakePrimitive {
    /// Creates a new `MakePrimitive` operation with default resolution.
    #[must_use]
    pub fn new(spec: ShapeSpec) -> Self {
        Self {
            spec,
            params: BuildParams::default(),
        }
    }

    /// Sets custom resolution parameters for curved shapes.
    #[must_use]
    pub fn with_params(mut self, params: BuildParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the operation, returning the primitive's mesh.
    ///
    /// # Errors
    ///
    /// Returns an error if the spec has a non-positive dimension or the
    /// resolution is out of range.
    pub fn execute(&self) -> Result<Solid> {
        self.spec.validate()?;
        match self.spec {
            ShapeSpec::Box {
                length,
                width,
                height,
            } => MakeBox::new(length, width, height).execute(),
            ShapeSpec::Revolved {
                length,
                width,
                height,
            } => MakeEllipsoid::new(length, width, height)
                .with_params(self.params)
                .execute(),
            ShapeSpec::Cylinder { diameter, height } => MakeCylinder::new(diameter, height)
                .with_params(self.params)
                .execute(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{OpalcutError, ShapeError};
    use crate::operations::query::IsClosed;

    #[test]
    fn every_shape_builds_closed() {
        let specs = [
            ShapeSpec::Box {
                length: 50.0,
                width: 30.0,
                height: 20.0,
            },
            ShapeSpec::Revolved {
                length: 50.0,
                width: 30.0,
                height: 20.0,
            },
            ShapeSpec::round(50.0, 30.0, 20.0).unwrap(),
        ];
        for spec in specs {
            let solid = MakePrimitive::new(spec).execute().unwrap();
            assert!(IsClosed::new(&solid).execute(), "{spec} is not closed");
        }
    }

    #[test]
    fn build_is_deterministic() {
        let spec = ShapeSpec::Revolved {
            length: 7.0,
            width: 3.0,
            height: 5.0,
        };
        let a = MakePrimitive::new(spec).execute().unwrap();
        let b = MakePrimitive::new(spec).execute().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn invalid_dimension_is_reported() {
        let spec = ShapeSpec::Cylinder {
            diameter: 20.0,
            height: -1.0,
        };
        let err = MakePrimitive::new(spec).execute().unwrap_err();
        assert!(matches!(
            err,
            OpalcutError::Shape(ShapeError::InvalidDimension { name: "height", .. })
        ));
    }
}
