pub mod error;
pub mod geometry;
pub mod math;
pub mod mesh;
pub mod operations;
pub mod session;

pub use error::{OpalcutError, Result};
pub use mesh::Solid;
pub use session::{CutSession, SessionConfig, SessionState};
