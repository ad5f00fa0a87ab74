use std::fmt;

use crate::error::{Result, ShapeError};

/// Dimensions of a blank, in millimetres.
///
/// Axis convention for every shape: length along X, height along Y
/// (vertical), width along Z, centred at the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeSpec {
    /// Rectangular prism.
    Box { length: f64, width: f64, height: f64 },
    /// Ellipsoid revolved about Y whose extents equal the given dimensions.
    Revolved { length: f64, width: f64, height: f64 },
    /// Right circular cylinder with its axis along Y.
    Cylinder { diameter: f64, height: f64 },
}

impl ShapeSpec {
    /// Round blank described by three dimensions: the diameter is the
    /// smaller of `length` and `width`.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::InvalidDimension`] if any input is not a finite
    /// positive value.
    pub fn round(length: f64, width: f64, height: f64) -> Result<Self> {
        let length = validate_dimension("length", length)?;
        let width = validate_dimension("width", width)?;
        let height = validate_dimension("height", height)?;
        Ok(Self::Cylinder {
            diameter: length.min(width),
            height,
        })
    }

    /// Checks that every dimension is finite and strictly positive.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::InvalidDimension`] naming the first offending
    /// dimension.
    pub fn validate(&self) -> Result<()> {
        match *self {
            Self::Box {
                length,
                width,
                height,
            }
            | Self::Revolved {
                length,
                width,
                height,
            } => {
                validate_dimension("length", length)?;
                validate_dimension("width", width)?;
                validate_dimension("height", height)?;
            }
            Self::Cylinder { diameter, height } => {
                validate_dimension("diameter", diameter)?;
                validate_dimension("height", height)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for ShapeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Box {
                length,
                width,
                height,
            } => write!(f, "rectangle {length} x {width} x {height} mm"),
            Self::Revolved {
                length,
                width,
                height,
            } => write!(f, "oval {length} x {width} x {height} mm"),
            Self::Cylinder { diameter, height } => {
                write!(f, "round \u{2300}{diameter} x {height} mm")
            }
        }
    }
}

/// Rejects non-finite and non-positive dimensions.
pub(crate) fn validate_dimension(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ShapeError::InvalidDimension { name, value }.into())
    }
}
