// SPDX: CC0-1.0

pub mod config;
pub mod geometry;
pub mod record;
pub mod report;
pub mod session;
pub mod shell;
pub mod style;

use core::{fmt, num::ParseFloatError, str::FromStr};

pub type Number = f64;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point<T> {
    pub x: T,
    pub y: T,
}

impl<T> Point<T> {
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

/// Coordinates are shown the way they were typed, with a trailing `.0` for
/// whole numbers, e.g. `(3.0, 4.5)`.
impl fmt::Display for Point<Number> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {:?})", self.x, self.y)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PointParseError {
    Arity(usize),
    Number(ParseFloatError),
    NonFinite,
}

impl fmt::Display for PointParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Arity(n) => write!(f, "expected 2 comma separated values, found {n}"),
            Self::Number(err) => write!(f, "{err}"),
            Self::NonFinite => f.write_str("coordinates must be finite"),
        }
    }
}

impl std::error::Error for PointParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Number(err) => Some(err),
            Self::Arity(_) | Self::NonFinite => None,
        }
    }
}

impl FromStr for Point<Number> {
    type Err = PointParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').collect();
        let [x, y] = parts.as_slice() else {
            return Err(PointParseError::Arity(parts.len()));
        };
        let x: Number = x.trim().parse().map_err(PointParseError::Number)?;
        let y: Number = y.trim().parse().map_err(PointParseError::Number)?;
        if !(x.is_finite() && y.is_finite()) {
            return Err(PointParseError::NonFinite);
        }
        Ok(Self { x, y })
    }
}
