use tracing::warn;

use crate::error::{Result, SessionError};
use crate::mesh::Solid;

use super::{ApplyCut, CutParams, CutSpec, MakeCutPlane};

/// Re-applies an ordered list of cuts to a base solid.
///
/// Cuts are applied in order, each against the result of the previous one,
/// exactly as they would be applied one at a time.
pub struct ReplayCuts<'a> {
    base: &'a Solid,
    cuts: &'a [CutSpec],
    params: CutParams,
}

impl<'a> ReplayCuts<'a> {
    /// Creates a new `ReplayCuts` operation with default parameters.
    #[must_use]
    pub fn new(base: &'a Solid, cuts: &'a [CutSpec]) -> Self {
        Self {
            base,
            cuts,
            params: CutParams::default(),
        }
    }

    /// Sets custom cut parameters.
    #[must_use]
    pub fn with_params(mut self, params: CutParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the replay, returning the final solid.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::ReplayFailure`] carrying the index of the
    /// first cut that could not be applied and the underlying error.
    pub fn execute(&self) -> Result<Solid> {
        let mut current = self.base.clone();
        for (step, spec) in self.cuts.iter().enumerate() {
            current = apply_one(&current, spec, self.params).map_err(|source| {
                warn!(step, %spec, error = %source, "replay stopped");
                SessionError::ReplayFailure {
                    step,
                    source: Box::new(source),
                }
            })?;
        }
        Ok(current)
    }
}

/// Builds the plane for `spec` and cuts `solid` with it.
pub(crate) fn apply_one(solid: &Solid, spec: &CutSpec, params: CutParams) -> Result<Solid> {
    let plane = MakeCutPlane::new(*spec).execute()?;
    ApplyCut::new(solid, &plane).with_params(params).execute()
}
