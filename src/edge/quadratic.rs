//--------------------------------------------------------------------
// quadratic.rs
//--------------------------------------------------------------------
// A degree-2 edge (quadratic Bezier). Grounded on the teacher's
// QuadraticBezier (curve/quadratic_bezier.rs): same Bernstein `at`,
// same de Casteljau `subcurve`, same per-axis critical-point formula
// `tx = (s-c)/(s-2c+e)`, generalized to produce the spec's richer
// capability set (deviation from line, params for point).
//--------------------------------------------------------------------

use arrayvec::ArrayVec;

use crate::edge::line::Line;
use crate::edge::{ExtremePoint, ExtremePoints};
use crate::geometry::{Point, Rect};
use crate::poly::{solve_linear, solve_quadratic, RootResult};
use crate::scalar::{approx_zero, Coord};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct QuadraticBezier {
    pub start: Point,
    pub control: Point,
    pub end: Point,
}

impl QuadraticBezier {
    pub fn new(start: Point, control: Point, end: Point) -> QuadraticBezier {
        QuadraticBezier { start, control, end }
    }

    pub fn degree(&self) -> u8 {
        2
    }

    pub fn point_at(&self, t: Coord) -> Point {
        let ct = 1.0 - t;
        ct * ct * self.start + 2.0 * ct * t * self.control + t * t * self.end
    }

    /// The derivative is a line (in the Bernstein-derivative sense, i.e. not
    /// itself parametrized the same way as a geometric line, but the same
    /// `Line` shape is reused because it only needs two control points).
    pub fn derivative(&self) -> Line {
        Line::new(2.0 * (self.control - self.start), 2.0 * (self.end - self.control))
    }

    pub fn split_at(&self, t: Coord) -> (QuadraticBezier, QuadraticBezier) {
        let a = self.start;
        let c = self.end;
        let ct = 1.0 - t;

        let mid_ac = ct * self.start + t * self.control;
        let mid_cb = ct * self.control + t * self.end;
        let mid = ct * mid_ac + t * mid_cb;

        (
            QuadraticBezier::new(a, mid_ac, mid),
            QuadraticBezier::new(mid, mid_cb, c),
        )
    }

    pub fn extreme_points(&self) -> ExtremePoints {
        let d = self.derivative();
        let mut ts: ArrayVec<[Coord; 4]> = ArrayVec::new();
        ts.push(0.0);
        ts.push(1.0);
        for &t in &[axis_root(d.start.x, d.end.x), axis_root(d.start.y, d.end.y)] {
            if let Some(t) = t {
                if t > 0.0 && t < 1.0 {
                    ts.push(t);
                }
            }
        }
        ts.sort_by(|a, b| a.partial_cmp(b).unwrap());
        dedup_sorted(&mut ts);

        let mut v = ExtremePoints::new();
        for t in ts {
            v.push(ExtremePoint { t, point: self.point_at(t) });
        }
        v
    }

    pub fn bounding_box(&self) -> Rect {
        Rect::enclosing(self.extreme_points().iter().map(|ep| ep.point)).unwrap()
    }

    /// Max perpendicular distance from the curve to its chord, normalized by
    /// the squared chord length; +infinity if the control point's projection
    /// onto the chord overshoots the endpoints.
    pub fn deviation_from_line(&self) -> Coord {
        let chord = self.end - self.start;
        let len_sq = chord.length_sq();
        if len_sq == 0.0 {
            return Coord::INFINITY;
        }
        let proj = chord.dot(self.control - self.start);
        if proj < 0.0 || proj > len_sq {
            return Coord::INFINITY;
        }
        (chord.cross(self.control - self.start) / len_sq).abs()
    }

    fn axis_roots(&self, s: Coord, c: Coord, e: Coord, value: Coord) -> RootResult {
        solve_quadratic(s - value, 2.0 * (c - s), s - 2.0 * c + e)
    }

    pub fn params_for_point(&self, p: Point, eps: Coord) -> RootResult {
        let rx = self.axis_roots(self.start.x, self.control.x, self.end.x, p.x);
        let ry = self.axis_roots(self.start.y, self.control.y, self.end.y, p.y);
        crate::edge::intersect_axis_roots(rx, ry, eps)
    }
}

fn axis_root(derivative_start: Coord, derivative_end: Coord) -> Option<Coord> {
    match solve_linear(derivative_start, derivative_end - derivative_start) {
        RootResult::Indeterminate => None,
        RootResult::Finite(r) => r.into_iter().next(),
    }
}

fn dedup_sorted(v: &mut ArrayVec<[Coord; 4]>) {
    if v.len() < 2 {
        return;
    }
    let mut j = 0;
    for i in 0..v.len() - 1 {
        if !approx_zero(v[i] - v[i + 1], 1e-12) {
            v[j] = v[i];
            j += 1;
        }
    }
    v[j] = v[v.len() - 1];
    v.truncate(j + 1);
}

impl std::fmt::Display for QuadraticBezier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "QuadraticBezier({}, {}, {})", self.start, self.control, self.end)
    }
}
