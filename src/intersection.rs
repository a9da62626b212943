//--------------------------------------------------------------------
// intersection.rs
//--------------------------------------------------------------------
// The Intersection result type shared by the line/line fast path, the
// general subdivision engine, and the self-intersection driver, plus
// the Indeterminate/Finite sum type every public entry point returns.
//--------------------------------------------------------------------

use crate::geometry::Point;
use crate::scalar::Coord;

/// One intersection between two edges (or a curve and itself).
///
/// `point` is the midpoint-averaged evaluation of both edges at
/// `(t1, t2)` (see DESIGN notes on the "midpoint-averaged output points"
/// convention); `err` is zero for exact results and the current
/// subdivision error radius for inexact ones produced by budget
/// exhaustion.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Intersection {
    pub t1: Coord,
    pub t2: Coord,
    pub point: Point,
    pub err: Coord,
}

impl Intersection {
    pub fn exact(t1: Coord, t2: Coord, point: Point) -> Intersection {
        Intersection { t1, t2, point, err: 0.0 }
    }

    pub fn inexact(t1: Coord, t2: Coord, point: Point, err: Coord) -> Intersection {
        Intersection { t1, t2, point, err }
    }

    /// The same intersection, viewed with the two edges swapped.
    pub fn swapped(&self) -> Intersection {
        Intersection { t1: self.t2, t2: self.t1, point: self.point, err: self.err }
    }

    pub fn is_exact(&self) -> bool {
        self.err == 0.0
    }
}

/// The distinguished "infinitely many solutions" sentinel, kept separate
/// from an empty result list so callers can tell "no intersections" apart
/// from "the edges overlap/are collinear".
#[derive(Clone, Debug, PartialEq)]
pub enum IntersectionResult {
    Indeterminate,
    Finite(Vec<Intersection>),
}

impl IntersectionResult {
    pub fn is_indeterminate(&self) -> bool {
        matches!(self, IntersectionResult::Indeterminate)
    }

    pub fn finite(&self) -> Option<&[Intersection]> {
        match self {
            IntersectionResult::Indeterminate => None,
            IntersectionResult::Finite(v) => Some(v),
        }
    }

    pub fn into_finite(self) -> Option<Vec<Intersection>> {
        match self {
            IntersectionResult::Indeterminate => None,
            IntersectionResult::Finite(v) => Some(v),
        }
    }
}
