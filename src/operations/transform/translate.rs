use crate::error::Result;
use crate::math::{Matrix4, Vector3};
use crate::mesh::Solid;

use super::GeneralTransform;

/// Translates a solid by a displacement vector.
pub struct Translate<'a> {
    solid: &'a Solid,
    displacement: Vector3,
}

impl<'a> Translate<'a> {
    /// Creates a new `Translate` operation.
    #[must_use]
    pub fn new(solid: &'a Solid, displacement: Vector3) -> Self {
        Self {
            solid,
            displacement,
        }
    }

    /// Executes the translation, returning the moved solid.
    ///
    /// # Errors
    ///
    /// Returns an error if the displacement is not finite.
    pub fn execute(&self) -> Result<Solid> {
        GeneralTransform::new(self.solid, Matrix4::new_translation(&self.displacement)).execute()
    }
}
