//--------------------------------------------------------------------
// task.rs
//--------------------------------------------------------------------
// The tagged SubdivisionTask sum type: point/point, point/edge,
// edge/point, edge/edge. Kept as a discriminated union (per SPEC_FULL
// §9 design notes) so the payload shape is type-safe and dispatch in
// the engine's main loop is exhaustive.
//--------------------------------------------------------------------

use crate::edge::Edge;
use crate::geometry::Point;
use crate::scalar::Coord;

#[derive(Clone, Debug)]
pub enum TaskKind {
    /// Two fully-resolved points, compared directly for approximate equality.
    Pp { p1: Point, p2: Point },
    /// A fixed point from edge1 against the current subdivision interval of edge2.
    Pe { point: Point, edge2: Edge },
    /// The current subdivision interval of edge1 against a fixed point from edge2.
    Ep { edge1: Edge, point: Point },
    /// The current subdivision intervals of both edges.
    Ee { edge1: Edge, edge2: Edge },
}

/// One entry in the engine's FIFO queue. `t1`/`t2` are the centers of the
/// current interval for each side (a fixed, already-resolved parameter for
/// the "point" side of PE/EP), at a half-width of `2^-(depth+1)`.
#[derive(Clone, Debug)]
pub struct Task {
    pub depth: u32,
    pub t1: Coord,
    pub t2: Coord,
    pub kind: TaskKind,
}

impl Task {
    pub fn pp(t1: Coord, p1: Point, t2: Coord, p2: Point) -> Task {
        Task { depth: 0, t1, t2, kind: TaskKind::Pp { p1, p2 } }
    }

    pub fn pe(depth: u32, t1: Coord, point: Point, t2: Coord, edge2: Edge) -> Task {
        Task { depth, t1, t2, kind: TaskKind::Pe { point, edge2 } }
    }

    pub fn ep(depth: u32, t1: Coord, edge1: Edge, t2: Coord, point: Point) -> Task {
        Task { depth, t1, t2, kind: TaskKind::Ep { edge1, point } }
    }

    pub fn ee(depth: u32, t1: Coord, edge1: Edge, t2: Coord, edge2: Edge) -> Task {
        Task { depth, t1, t2, kind: TaskKind::Ee { edge1, edge2 } }
    }
}

/// Full width of the current interval at depth `i`: `2^-i`.
pub fn full_width(depth: u32) -> Coord {
    2f64.powi(-(depth as i32))
}

/// Half width of the current interval at depth `i`: `2^-(i+1)`.
pub fn half_width(depth: u32) -> Coord {
    2f64.powi(-(depth as i32 + 1))
}

/// The error radius reported for an inexact result produced at depth `i`.
pub fn error_radius(depth: u32) -> Coord {
    full_width(depth).max(Coord::EPSILON)
}

/// `max_dev(i) = min(5e-5 * 2^i, 0.1)`, disabled (0) at the root.
pub fn max_dev(depth: u32) -> Coord {
    if depth == 0 {
        0.0
    } else {
        (5e-5 * 2f64.powi(depth as i32)).min(0.1)
    }
}
