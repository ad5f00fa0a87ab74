use std::fmt;

use crate::error::{CutError, Result};

/// Which half of the solid survives a cut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CutSide {
    /// Keep material above the cutting plane.
    KeepAbove,
    /// Keep material below the cutting plane.
    KeepBelow,
}

impl fmt::Display for CutSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::KeepAbove => f.write_str("Above"),
            Self::KeepBelow => f.write_str("Below"),
        }
    }
}

/// One planar cut as entered by the user.
///
/// `angle` is in degrees and tilts the plane about the Z axis; `position`
/// is the plane's offset along the vertical (Y) axis in millimetres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CutSpec {
    angle: f64,
    position: f64,
    side: CutSide,
}

impl CutSpec {
    /// Creates a cut. Values are checked when the cutting plane is built.
    #[must_use]
    pub fn new(angle: f64, position: f64, side: CutSide) -> Self {
        Self {
            angle,
            position,
            side,
        }
    }

    /// Tilt of the plane in degrees.
    #[must_use]
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Offset of the plane along Y in millimetres.
    #[must_use]
    pub fn position(&self) -> f64 {
        self.position
    }

    #[must_use]
    pub fn side(&self) -> CutSide {
        self.side
    }

    /// Checks that the angle lies in `(-180, 180]` and the position is finite.
    ///
    /// # Errors
    ///
    /// Returns [`CutError::InvalidAngle`] or [`CutError::InvalidPosition`].
    pub fn validate(&self) -> Result<()> {
        if !(self.angle.is_finite() && self.angle > -180.0 && self.angle <= 180.0) {
            return Err(CutError::InvalidAngle(self.angle).into());
        }
        if !self.position.is_finite() {
            return Err(CutError::InvalidPosition(self.position).into());
        }
        Ok(())
    }
}

impl fmt::Display for CutSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "angle: {}\u{b0}, position: {} mm, direction: {}",
            self.angle, self.position, self.side
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OpalcutError;

    #[test]
    fn angle_range_is_half_open() {
        assert!(CutSpec::new(180.0, 0.0, CutSide::KeepAbove).validate().is_ok());
        assert!(CutSpec::new(-179.9, 0.0, CutSide::KeepAbove).validate().is_ok());
        assert!(matches!(
            CutSpec::new(-180.0, 0.0, CutSide::KeepAbove).validate(),
            Err(OpalcutError::Cut(CutError::InvalidAngle(_)))
        ));
        assert!(CutSpec::new(180.5, 0.0, CutSide::KeepAbove).validate().is_err());
        assert!(CutSpec::new(f64::NAN, 0.0, CutSide::KeepAbove).validate().is_err());
    }

    #[test]
    fn infinite_position_is_rejected() {
        assert!(matches!(
            CutSpec::new(0.0, f64::INFINITY, CutSide::KeepBelow).validate(),
            Err(OpalcutError::Cut(CutError::InvalidPosition(_)))
        ));
    }

    #[test]
    fn display_lists_angle_position_direction() {
        let spec = CutSpec::new(30.0, -2.5, CutSide::KeepBelow);
        assert_eq!(
            spec.to_string(),
            "angle: 30\u{b0}, position: -2.5 mm, direction: Below"
        );
    }
}
