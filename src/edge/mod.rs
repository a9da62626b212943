//--------------------------------------------------------------------
// mod.rs
//--------------------------------------------------------------------
// Provides the Edge enum, which dispatches between the three edge
// variants the kernel supports (Line, QuadraticBezier, CubicBezier).
// Grounded on the teacher's Curve enum and its forward_to_curves!
// macro (curve/mod.rs), trimmed to the spec's three variants (no
// elliptic arcs).
//--------------------------------------------------------------------

pub mod cubic;
pub mod line;
pub mod quadratic;

use arrayvec::ArrayVec;

use crate::geometry::{Point, Rect};
use crate::poly::{RootResult, Roots};
use crate::scalar::{snap_to_integer, Coord};

pub use cubic::CubicBezier;
pub use line::Line;
pub use quadratic::QuadraticBezier;

pub const MAX_EXTREME_POINTS: usize = 6;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ExtremePoint {
    pub t: Coord,
    pub point: Point,
}

pub type ExtremePoints = ArrayVec<[ExtremePoint; MAX_EXTREME_POINTS]>;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Edge {
    Line(Line),
    QuadraticBezier(QuadraticBezier),
    CubicBezier(CubicBezier),
}

// Forward the operations that share a signature across all three variants.
// Idea kept from the teacher's forward_to_curves! macro in curve/mod.rs.
macro_rules! forward_to_edges {
    ($($i:ident ( $($arg:ident : $arg_ty:ty),* ) -> $result:ty);* $(;)?) => {
        $(
            pub fn $i(&self, $($arg : $arg_ty,)*) -> $result {
                match self {
                    Edge::Line(l) => l.$i($($arg,)*),
                    Edge::QuadraticBezier(q) => q.$i($($arg,)*),
                    Edge::CubicBezier(c) => c.$i($($arg,)*),
                }
            }
        )*
    }
}

impl Edge {
    forward_to_edges! {
        point_at(t: Coord) -> Point;
        extreme_points() -> ExtremePoints;
        bounding_box() -> Rect;
        deviation_from_line() -> Coord
    }

    pub fn degree(&self) -> u8 {
        match self {
            Edge::Line(_) => 1,
            Edge::QuadraticBezier(_) => 2,
            Edge::CubicBezier(_) => 3,
        }
    }

    pub fn split_at(&self, t: Coord) -> (Edge, Edge) {
        match self {
            Edge::Line(l) => {
                let (a, b) = l.split_at(t);
                (Edge::Line(a), Edge::Line(b))
            }
            Edge::QuadraticBezier(q) => {
                let (a, b) = q.split_at(t);
                (Edge::QuadraticBezier(a), Edge::QuadraticBezier(b))
            }
            Edge::CubicBezier(c) => {
                let (a, b) = c.split_at(t);
                (Edge::CubicBezier(a), Edge::CubicBezier(b))
            }
        }
    }

    pub fn params_for_point(&self, p: Point, eps: Coord) -> RootResult {
        match self {
            Edge::Line(l) => l.params_for_point(p, eps),
            Edge::QuadraticBezier(q) => q.params_for_point(p, eps),
            Edge::CubicBezier(c) => c.params_for_point(p, eps),
        }
    }

    pub fn start(&self) -> Point {
        self.point_at(0.0)
    }

    pub fn end(&self) -> Point {
        self.point_at(1.0)
    }

    pub fn line(start: Point, end: Point) -> Edge {
        Edge::Line(Line::new(start, end))
    }

    pub fn quadratic_bezier(start: Point, control: Point, end: Point) -> Edge {
        Edge::QuadraticBezier(QuadraticBezier::new(start, control, end))
    }

    pub fn cubic_bezier(start: Point, control1: Point, control2: Point, end: Point) -> Edge {
        Edge::CubicBezier(CubicBezier::new(start, control1, control2, end))
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Edge::Line(l) => write!(f, "{}", l),
            Edge::QuadraticBezier(q) => write!(f, "{}", q),
            Edge::CubicBezier(c) => write!(f, "{}", c),
        }
    }
}

/// Intersect two per-axis root sets (as produced by solving `x(t) = p.x` and
/// `y(t) = p.y` independently), pairing roots within `eps` of each other and
/// snapping the survivors to integers. If exactly one axis is Indeterminate,
/// the other axis's in-range roots are returned as-is (documented Open
/// Question resolution, see DESIGN.md). If both are Indeterminate, the curve
/// is point-degenerate at `p` and the whole call is Indeterminate.
pub fn intersect_axis_roots(rx: RootResult, ry: RootResult, eps: Coord) -> RootResult {
    match (rx, ry) {
        (RootResult::Indeterminate, RootResult::Indeterminate) => RootResult::Indeterminate,
        (RootResult::Indeterminate, RootResult::Finite(ry)) => RootResult::Finite(snap_in_range(ry, eps)),
        (RootResult::Finite(rx), RootResult::Indeterminate) => RootResult::Finite(snap_in_range(rx, eps)),
        (RootResult::Finite(rx), RootResult::Finite(ry)) => {
            let mut out = Roots::new();
            for &tx in rx.iter() {
                for &ty in ry.iter() {
                    if (tx - ty).abs() < eps && tx >= -eps && tx <= 1.0 + eps {
                        let t = snap_to_integer((tx + ty) / 2.0, eps);
                        if !out.iter().any(|&u| (u - t).abs() < eps) {
                            out.push(t);
                        }
                    }
                }
            }
            RootResult::Finite(out)
        }
    }
}

fn snap_in_range(roots: Roots, eps: Coord) -> Roots {
    let mut out = Roots::new();
    for t in roots {
        if t >= -eps && t <= 1.0 + eps {
            out.push(snap_to_integer(t, eps));
        }
    }
    out
}
