//! Cut session: one base solid, its cut history and the derived mesh.

use tracing::{info, warn};

use crate::error::{OpalcutError, Result, SessionError};
use crate::mesh::Solid;
use crate::operations::creation::{BuildParams, MakePrimitive, ShapeSpec};
use crate::operations::cut::{ApplyCut, CutParams, CutSpec, MakeCutPlane, ReplayCuts};
use crate::operations::query::{Aabb, BoundingBox};

/// Tunables for a [`CutSession`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SessionConfig {
    /// Resolution used by [`CutSession::generate`].
    pub build: BuildParams,
    /// Numeric settings used for every cut and replay.
    pub cut: CutParams,
}

impl SessionConfig {
    /// Sets the primitive build parameters.
    #[must_use]
    pub fn with_build(mut self, build: BuildParams) -> Self {
        self.build = build;
        self
    }

    /// Sets the cut parameters.
    #[must_use]
    pub fn with_cut(mut self, cut: CutParams) -> Self {
        self.cut = cut;
        self
    }
}

/// Lifecycle of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Nothing generated yet.
    Empty,
    /// A base solid exists and no cut is applied.
    BaseGenerated,
    /// At least one cut is applied.
    Cutting,
}

#[derive(Debug, Clone)]
struct Workpiece {
    base: Solid,
    current: Solid,
    history: Vec<CutSpec>,
}

/// Owns the base solid, the ordered cut history and the current mesh.
///
/// Every mutating call either succeeds completely or leaves the session as
/// it was. Meshes are replaced wholesale, never edited in place.
#[derive(Debug, Clone, Default)]
pub struct CutSession {
    config: SessionConfig,
    workpiece: Option<Workpiece>,
}

impl CutSession {
    /// Creates an empty session with default parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty session with the given configuration.
    #[must_use]
    pub fn with_config(config: SessionConfig) -> Self {
        Self {
            config,
            workpiece: None,
        }
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Builds a new base solid, discarding any previous solid and history.
    ///
    /// # Errors
    ///
    /// Returns the build error if the shape is invalid; the session is left
    /// unchanged in that case.
    pub fn generate(&mut self, spec: ShapeSpec) -> Result<&Solid> {
        let base = MakePrimitive::new(spec)
            .with_params(self.config.build)
            .execute()
            .inspect_err(|e| warn!(%spec, error = %e, "generate rejected"))?;
        info!(
            %spec,
            vertices = base.vertex_count(),
            triangles = base.triangle_count(),
            "generated base solid"
        );

        let workpiece = self.workpiece.insert(Workpiece {
            current: base.clone(),
            base,
            history: Vec::new(),
        });
        Ok(&workpiece.current)
    }

    /// Applies a cut to the current mesh and appends it to the history.
    ///
    /// A cut that misses the solid still succeeds and is recorded, leaving
    /// the mesh unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoSolid`] before the first `generate`, or the
    /// cut error (invalid spec, empty result, degenerate cap). The current
    /// mesh and history are unchanged on error.
    pub fn add_cut(&mut self, spec: CutSpec) -> Result<&Solid> {
        let params = self.config.cut;
        let workpiece = self.workpiece.as_mut().ok_or(SessionError::NoSolid)?;

        let next = MakeCutPlane::new(spec)
            .execute()
            .and_then(|plane| {
                ApplyCut::new(&workpiece.current, &plane)
                    .with_params(params)
                    .execute()
            })
            .inspect_err(|e| warn!(%spec, error = %e, "cut rejected"))?;

        workpiece.history.push(spec);
        workpiece.current = next;
        info!(%spec, cuts = workpiece.history.len(), "cut applied");
        Ok(&workpiece.current)
    }

    /// Removes the cut at `index` and rebuilds the mesh from the base solid.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoSolid`], [`SessionError::CutIndexOutOfRange`],
    /// or [`SessionError::ReplayFailure`] if a remaining cut no longer
    /// applies. The failing step is reported as its index in
    /// [`history`](Self::history), which is unchanged on error along with
    /// the rest of the session.
    pub fn remove_cut(&mut self, index: usize) -> Result<&Solid> {
        let params = self.config.cut;
        let workpiece = self.workpiece.as_mut().ok_or(SessionError::NoSolid)?;
        let len = workpiece.history.len();
        if index >= len {
            return Err(SessionError::CutIndexOutOfRange { index, len }.into());
        }

        let mut remaining = workpiece.history.clone();
        let removed = remaining.remove(index);
        let rebuilt = ReplayCuts::new(&workpiece.base, &remaining)
            .with_params(params)
            .execute()
            .map_err(|e| match e {
                OpalcutError::Session(SessionError::ReplayFailure { step, source }) => {
                    // Steps after the removed cut sit one further along in the history.
                    let step = if step >= index { step + 1 } else { step };
                    SessionError::ReplayFailure { step, source }.into()
                }
                other => other,
            })?;

        workpiece.history = remaining;
        workpiece.current = rebuilt;
        info!(index, %removed, cuts = workpiece.history.len(), "cut removed");
        Ok(&workpiece.current)
    }

    /// Drops every cut and restores the base solid.
    ///
    /// Does nothing on an empty session.
    pub fn clear(&mut self) {
        if let Some(workpiece) = self.workpiece.as_mut() {
            workpiece.history.clear();
            workpiece.current = workpiece.base.clone();
            info!("cut history cleared");
        }
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        match &self.workpiece {
            None => SessionState::Empty,
            Some(w) if w.history.is_empty() => SessionState::BaseGenerated,
            Some(_) => SessionState::Cutting,
        }
    }

    /// The mesh with every cut applied, if a solid exists.
    #[must_use]
    pub fn current_mesh(&self) -> Option<&Solid> {
        self.workpiece.as_ref().map(|w| &w.current)
    }

    /// The uncut primitive, if a solid exists.
    #[must_use]
    pub fn base_mesh(&self) -> Option<&Solid> {
        self.workpiece.as_ref().map(|w| &w.base)
    }

    /// Applied cuts, oldest first.
    #[must_use]
    pub fn history(&self) -> &[CutSpec] {
        self.workpiece.as_ref().map_or(&[][..], |w| w.history.as_slice())
    }

    /// One display line per applied cut, in history order.
    #[must_use]
    pub fn history_labels(&self) -> Vec<String> {
        self.history().iter().map(ToString::to_string).collect()
    }

    /// Bounds of the current mesh.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoSolid`] before the first `generate`.
    pub fn bounding_box(&self) -> Result<Aabb> {
        let current = self.current_mesh().ok_or(SessionError::NoSolid)?;
        BoundingBox::new(current).execute()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{CutError, ShapeError};
    use crate::operations::cut::CutSide;
    use crate::operations::query::{IsClosed, Volume};
    use approx::assert_relative_eq;

    fn box_session() -> CutSession {
        let mut session = CutSession::new();
        session
            .generate(ShapeSpec::Box {
                length: 50.0,
                width: 30.0,
                height: 20.0,
            })
            .unwrap();
        session
    }

    fn cut(angle: f64, position: f64, side: CutSide) -> CutSpec {
        CutSpec::new(angle, position, side)
    }

    #[test]
    fn new_session_is_empty() {
        let session = CutSession::new();
        assert_eq!(session.state(), SessionState::Empty);
        assert!(session.current_mesh().is_none());
        assert!(session.history().is_empty());
        assert!(matches!(
            session.bounding_box().unwrap_err(),
            OpalcutError::Session(SessionError::NoSolid)
        ));
    }

    #[test]
    fn cut_before_generate_fails() {
        let mut session = CutSession::new();
        let err = session
            .add_cut(cut(0.0, 0.0, CutSide::KeepAbove))
            .unwrap_err();
        assert!(matches!(err, OpalcutError::Session(SessionError::NoSolid)));
        assert_eq!(session.state(), SessionState::Empty);
    }

    #[test]
    fn cylinder_halved_by_horizontal_cut() {
        let mut session = CutSession::new();
        session
            .generate(ShapeSpec::Cylinder {
                diameter: 20.0,
                height: 50.0,
            })
            .unwrap();
        session.add_cut(cut(0.0, 0.0, CutSide::KeepBelow)).unwrap();

        let size = session.bounding_box().unwrap().size();
        assert_relative_eq!(size.y, 25.0, epsilon = 1e-9);
        assert_relative_eq!(size.x, 20.0, epsilon = 1e-9);
        assert_relative_eq!(size.z, 20.0, epsilon = 0.1);
        assert_eq!(session.state(), SessionState::Cutting);
    }

    #[test]
    fn keep_above_on_box_removes_lower_half() {
        let mut session = box_session();
        let before = Volume::new(session.current_mesh().unwrap()).execute();
        session.add_cut(cut(0.0, 0.0, CutSide::KeepAbove)).unwrap();

        let aabb = session.bounding_box().unwrap();
        assert!(aabb.size().y <= 10.0 + 1e-9);
        let after = Volume::new(session.current_mesh().unwrap()).execute();
        assert!(after < before);
        assert!(IsClosed::new(session.current_mesh().unwrap()).execute());
    }

    #[test]
    fn rejected_cut_keeps_state() {
        let mut session = box_session();
        session.add_cut(cut(0.0, 5.0, CutSide::KeepBelow)).unwrap();
        let snapshot = session.current_mesh().unwrap().clone();

        let err = session
            .add_cut(cut(0.0, 500.0, CutSide::KeepAbove))
            .unwrap_err();
        assert!(matches!(err, OpalcutError::Cut(CutError::EmptyResult)));
        let err = session
            .add_cut(cut(200.0, 0.0, CutSide::KeepAbove))
            .unwrap_err();
        assert!(matches!(err, OpalcutError::Cut(CutError::InvalidAngle(_))));

        assert_eq!(session.current_mesh().unwrap(), &snapshot);
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn missing_cut_is_recorded_without_changing_the_mesh() {
        let mut session = box_session();
        let base = session.current_mesh().unwrap().clone();
        session.add_cut(cut(0.0, 500.0, CutSide::KeepBelow)).unwrap();
        assert_eq!(session.current_mesh().unwrap(), &base);
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn remove_cut_matches_direct_application() {
        let mut session = box_session();
        let cuts = [
            cut(0.0, 6.0, CutSide::KeepBelow),
            cut(30.0, -3.0, CutSide::KeepAbove),
            cut(-60.0, 8.0, CutSide::KeepBelow),
        ];
        for c in cuts {
            session.add_cut(c).unwrap();
        }
        session.remove_cut(1).unwrap();

        let mut direct = box_session();
        direct.add_cut(cuts[0]).unwrap();
        direct.add_cut(cuts[2]).unwrap();

        assert_eq!(session.current_mesh(), direct.current_mesh());
        assert_eq!(session.history(), direct.history());
        assert_eq!(session.state(), SessionState::Cutting);
    }

    #[test]
    fn remove_cut_out_of_range() {
        let mut session = box_session();
        session.add_cut(cut(0.0, 1.0, CutSide::KeepBelow)).unwrap();
        let err = session.remove_cut(3).unwrap_err();
        assert!(matches!(
            err,
            OpalcutError::Session(SessionError::CutIndexOutOfRange { index: 3, len: 1 })
        ));
    }

    #[test]
    fn failed_replay_leaves_session_unchanged() {
        let mut session = box_session();
        session.add_cut(cut(0.0, 5.0, CutSide::KeepBelow)).unwrap();
        // A cut that never went through add_cut, so replay trips over it.
        let bogus = cut(270.0, 0.0, CutSide::KeepAbove);
        session.workpiece.as_mut().unwrap().history.push(bogus);
        let snapshot = session.current_mesh().unwrap().clone();

        let err = session.remove_cut(0).unwrap_err();
        match err {
            OpalcutError::Session(SessionError::ReplayFailure { step, source }) => {
                assert_eq!(step, 1);
                assert_eq!(session.history()[step], bogus);
                assert!(matches!(*source, OpalcutError::Cut(CutError::InvalidAngle(_))));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(session.history().len(), 2);
        assert_eq!(session.current_mesh().unwrap(), &snapshot);
    }

    #[test]
    fn clear_restores_base() {
        let mut session = box_session();
        session.add_cut(cut(45.0, 0.0, CutSide::KeepAbove)).unwrap();
        session.clear();
        assert_eq!(session.state(), SessionState::BaseGenerated);
        assert_eq!(session.current_mesh(), session.base_mesh());
        assert!(session.history_labels().is_empty());
    }

    #[test]
    fn generate_resets_history_and_failure_keeps_it() {
        let mut session = box_session();
        session.add_cut(cut(0.0, 0.0, CutSide::KeepBelow)).unwrap();

        let err = session
            .generate(ShapeSpec::Box {
                length: -1.0,
                width: 1.0,
                height: 1.0,
            })
            .unwrap_err();
        assert!(matches!(
            err,
            OpalcutError::Shape(ShapeError::InvalidDimension { .. })
        ));
        assert_eq!(session.history().len(), 1);

        session
            .generate(ShapeSpec::round(20.0, 30.0, 10.0).unwrap())
            .unwrap();
        assert_eq!(session.state(), SessionState::BaseGenerated);
        assert!(session.history().is_empty());
    }

    #[test]
    fn labels_follow_history_order() {
        let mut session = box_session();
        session.add_cut(cut(30.0, -2.5, CutSide::KeepBelow)).unwrap();
        session.add_cut(cut(0.0, 4.0, CutSide::KeepAbove)).unwrap();
        assert_eq!(
            session.history_labels(),
            vec![
                "angle: 30\u{b0}, position: -2.5 mm, direction: Below".to_string(),
                "angle: 0\u{b0}, position: 4 mm, direction: Above".to_string(),
            ]
        );
    }
}
