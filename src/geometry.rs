// SPDX: CC0-1.0

use crate::{Number, Point};
use core::fmt;

pub fn distance(p1: Point<Number>, p2: Point<Number>) -> Number {
    ((p2.x - p1.x).powi(2) + (p2.y - p1.y).powi(2)).sqrt()
}

pub fn midpoint(p1: Point<Number>, p2: Point<Number>) -> Point<Number> {
    Point {
        x: (p1.x + p2.x) / 2.0,
        y: (p1.y + p2.y) / 2.0,
    }
}

/// Slope of the line through both points, or `None` for a vertical line.
///
/// Verticality is exact equality of the x coordinates; there is no tolerance.
pub fn gradient(p1: Point<Number>, p2: Point<Number>) -> Option<Number> {
    if p1.x == p2.x {
        None
    } else {
        Some((p2.y - p1.y) / (p2.x - p1.x))
    }
}

/// Shoelace formula, never negative.
pub fn triangle_area(p1: Point<Number>, p2: Point<Number>, p3: Point<Number>) -> Number {
    (0.5 * (p1.x * (p2.y - p3.y) + p2.x * (p3.y - p1.y) + p3.x * (p1.y - p2.y))).abs()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    Distance,
    Midpoint,
    Gradient,
    Area,
}

impl Operation {
    pub const fn exhaustive() -> &'static [Operation] {
        &[Self::Distance, Self::Midpoint, Self::Gradient, Self::Area]
    }

    /// Menu key the user types to pick this operation.
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Distance => "1",
            Self::Midpoint => "2",
            Self::Gradient => "3",
            Self::Area => "4",
        }
    }

    /// Short label, stored in the `DMGE` column.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Distance => "Distance",
            Self::Midpoint => "Midpoint",
            Self::Gradient => "Gradient",
            Self::Area => "Area",
        }
    }

    pub const fn help(&self) -> &'static str {
        match self {
            Self::Distance => "Distance between two points",
            Self::Midpoint => "Midpoint of two points",
            Self::Gradient => "Gradient between two points",
            Self::Area => "Area of a triangle given its vertices",
        }
    }

    pub const fn arity(&self) -> usize {
        match self {
            Self::Distance | Self::Midpoint | Self::Gradient => 2,
            Self::Area => 3,
        }
    }

    /// Noun used when prompting for each coordinate.
    pub const fn vertex_name(&self) -> &'static str {
        match self {
            Self::Area => "vertex",
            _ => "point",
        }
    }

    pub const fn heading(&self) -> &'static str {
        match self {
            Self::Distance | Self::Midpoint => "Enter coordinates of the two points:",
            Self::Gradient => "Enter coordinates of two points on the line:",
            Self::Area => "Enter coordinates of the three vertices of the triangle:",
        }
    }

    /// # Panics
    ///
    /// Panics if `points` does not hold exactly [`Operation::arity`] points.
    pub fn evaluate(&self, points: &[Point<Number>]) -> Answer {
        assert_eq!(points.len(), self.arity());
        match *self {
            Self::Distance => Answer::Scalar(distance(points[0], points[1])),
            Self::Midpoint => Answer::Point(midpoint(points[0], points[1])),
            Self::Gradient => match gradient(points[0], points[1]) {
                Some(m) => Answer::Scalar(m),
                None => Answer::Undefined,
            },
            Self::Area => Answer::Scalar(triangle_area(points[0], points[1], points[2])),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl core::str::FromStr for Operation {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        for op in Self::exhaustive() {
            if s == op.key() {
                return Ok(*op);
            }
        }
        Err(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Answer {
    Scalar(Number),
    Point(Point<Number>),
    Undefined,
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(n) => write!(f, "{n:.2}"),
            Self::Point(p) => write!(f, "({:.2}, {:.2})", p.x, p.y),
            Self::Undefined => f.write_str("Undefined"),
        }
    }
}
