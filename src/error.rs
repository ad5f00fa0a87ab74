use thiserror::Error;

/// Top-level error type for the opalcut cutting core.
#[derive(Debug, Error)]
pub enum OpalcutError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error(transparent)]
    Cut(#[from] CutError),

    #[error(transparent)]
    Mesh(#[from] MeshError),

    #[error(transparent)]
    Session(#[from] SessionError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("zero-length vector")]
    ZeroVector,

    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Errors raised while building a primitive blank.
#[derive(Debug, Error)]
pub enum ShapeError {
    #[error("invalid dimension: {name} = {value} (must be a finite value > 0)")]
    InvalidDimension { name: &'static str, value: f64 },

    #[error("invalid resolution: {name} = {value} (minimum {min})")]
    InvalidResolution {
        name: &'static str,
        value: usize,
        min: usize,
    },
}

/// Errors raised while defining or applying a cut.
#[derive(Debug, Error)]
pub enum CutError {
    #[error("cut angle {0} is outside (-180, 180]")]
    InvalidAngle(f64),

    #[error("cut position {0} is not a finite value")]
    InvalidPosition(f64),

    #[error("cut would remove the entire solid")]
    EmptyResult,
}

/// Errors related to boundary mesh consistency.
#[derive(Debug, Error)]
pub enum MeshError {
    #[error("mesh has no triangles")]
    Empty,

    #[error("face index {index} is out of range (vertex count = {len})")]
    IndexOutOfRange { index: u32, len: usize },

    #[error("cannot close cut contour: {0}")]
    DegenerateCap(String),
}

/// Errors raised by the cut session.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("no solid has been generated")]
    NoSolid,

    #[error("cut index {index} is out of range (history length = {len})")]
    CutIndexOutOfRange { index: usize, len: usize },

    #[error("replay failed at step {step}: {source}")]
    ReplayFailure {
        step: usize,
        #[source]
        source: Box<OpalcutError>,
    },
}

/// Convenience type alias for results using [`OpalcutError`].
pub type Result<T> = std::result::Result<T, OpalcutError>;
