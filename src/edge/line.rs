//--------------------------------------------------------------------
// line.rs
//--------------------------------------------------------------------
// A degree-1 edge: a straight segment from `start` to `end`. Grounded
// on the teacher's Line (curve/line.rs): same at/derivative/subcurve
// shape, generalized to the spec's capability set (extreme points,
// bounding box, deviation from line, params for point).
//--------------------------------------------------------------------

use crate::edge::{ExtremePoint, ExtremePoints};
use crate::geometry::{Point, Rect};
use crate::poly::{solve_linear, RootResult};
use crate::scalar::Coord;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Line {
    pub start: Point,
    pub end: Point,
}

impl Line {
    pub fn new(start: Point, end: Point) -> Line {
        Line { start, end }
    }

    pub fn degree(&self) -> u8 {
        1
    }

    pub fn point_at(&self, t: Coord) -> Point {
        (1.0 - t) * self.start + t * self.end
    }

    pub fn split_at(&self, t: Coord) -> (Line, Line) {
        let mid = self.point_at(t);
        (Line::new(self.start, mid), Line::new(mid, self.end))
    }

    pub fn chord(&self) -> Point {
        self.end - self.start
    }

    pub fn extreme_points(&self) -> ExtremePoints {
        let mut v = ExtremePoints::new();
        v.push(ExtremePoint { t: 0.0, point: self.start });
        v.push(ExtremePoint { t: 1.0, point: self.end });
        v
    }

    pub fn bounding_box(&self) -> Rect {
        Rect::enclosing(self.extreme_points().iter().map(|ep| ep.point)).unwrap()
    }

    /// A line has no deviation from its own chord.
    pub fn deviation_from_line(&self) -> Coord {
        0.0
    }

    /// Roots of `x(t) - x0 = 0` along this edge's parametrization.
    fn axis_roots(&self, axis_start: Coord, axis_end: Coord, value: Coord) -> RootResult {
        solve_linear(axis_start - value, axis_end - axis_start)
    }

    pub fn params_for_point(&self, p: Point, eps: Coord) -> RootResult {
        let rx = self.axis_roots(self.start.x, self.end.x, p.x);
        let ry = self.axis_roots(self.start.y, self.end.y, p.y);
        crate::edge::intersect_axis_roots(rx, ry, eps)
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Line({}, {})", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_agreement() {
        let l = Line::new(Point::new(1.0, 2.0), Point::new(3.0, 4.0));
        assert_eq!(l.point_at(0.0), l.start);
        assert_eq!(l.point_at(1.0), l.end);
    }

    #[test]
    fn split_consistency() {
        let l = Line::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
        let t = 0.3;
        let (a, b) = l.split_at(t);
        for i in 0..=10 {
            let u = i as Coord / 10.0;
            assert!(a.point_at(u).approx_equals(l.point_at(t * u), 1e-8));
            assert!(b.point_at(u).approx_equals(l.point_at(t + (1.0 - t) * u), 1e-8));
        }
    }

    #[test]
    fn params_for_point_round_trip() {
        let l = Line::new(Point::new(0.0, 0.0), Point::new(4.0, 2.0));
        let t_star = 0.37;
        let p = l.point_at(t_star);
        let roots = l.params_for_point(p, 1e-9);
        let found = roots.finite_roots().unwrap().iter().any(|&t| (t - t_star).abs() < 1e-6);
        assert!(found);
    }

    #[test]
    fn degenerate_point_line_is_indeterminate_on_its_own_point() {
        let p = Point::new(2.0, 2.0);
        let l = Line::new(p, p);
        assert_eq!(l.params_for_point(p, 1e-9), RootResult::Indeterminate);
    }
}
