//--------------------------------------------------------------------
// cubic.rs
//--------------------------------------------------------------------
// A degree-3 edge (cubic Bezier). Grounded on the teacher's
// CubicBezier (curve/cubic_bezier.rs): same Bernstein `at`, same
// de Casteljau split, same per-axis quadratic critical-point formula,
// generalized to the spec's deviation-from-line and params-for-point.
//--------------------------------------------------------------------

use arrayvec::ArrayVec;

use crate::edge::quadratic::QuadraticBezier;
use crate::edge::{ExtremePoint, ExtremePoints};
use crate::geometry::{Point, Rect};
use crate::poly::{solve_cubic, solve_quadratic, RootResult};
use crate::scalar::{approx_zero, Coord};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CubicBezier {
    pub start: Point,
    pub control1: Point,
    pub control2: Point,
    pub end: Point,
}

impl CubicBezier {
    pub fn new(start: Point, control1: Point, control2: Point, end: Point) -> CubicBezier {
        CubicBezier { start, control1, control2, end }
    }

    pub fn degree(&self) -> u8 {
        3
    }

    pub fn point_at(&self, t: Coord) -> Point {
        let ct = 1.0 - t;
        ct * ct * ct * self.start
            + 3.0 * ct * ct * t * self.control1
            + 3.0 * ct * t * t * self.control2
            + t * t * t * self.end
    }

    pub fn derivative(&self) -> QuadraticBezier {
        QuadraticBezier::new(
            3.0 * (self.control1 - self.start),
            3.0 * (self.control2 - self.control1),
            3.0 * (self.end - self.control2),
        )
    }

    /// de Casteljau split at `t`. The shared midpoint is constructed once
    /// and handed to both halves by value.
    pub fn split_at(&self, t: Coord) -> (CubicBezier, CubicBezier) {
        let p01 = lerp(self.start, self.control1, t);
        let p12 = lerp(self.control1, self.control2, t);
        let p23 = lerp(self.control2, self.end, t);

        let p012 = lerp(p01, p12, t);
        let p123 = lerp(p12, p23, t);

        let mid = lerp(p012, p123, t);

        (
            CubicBezier::new(self.start, p01, p012, mid),
            CubicBezier::new(mid, p123, p23, self.end),
        )
    }

    pub fn extreme_points(&self) -> ExtremePoints {
        let mut ts: ArrayVec<[Coord; 6]> = ArrayVec::new();
        ts.push(0.0);
        ts.push(1.0);

        for axis_ts in &[
            axis_critical_ts(self.start.x, self.control1.x, self.control2.x, self.end.x),
            axis_critical_ts(self.start.y, self.control1.y, self.control2.y, self.end.y),
        ] {
            for &t in axis_ts.iter() {
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

    /// Perpendicular signed distance from the curve to its chord is itself a
    /// cubic in t; its derivative (quadratic) is reduced here to a linear
    /// function of the two outer-product projections. We evaluate the (up
    /// to two) interior candidates directly and take the largest absolute
    /// deviation.
    pub fn deviation_from_line(&self) -> Coord {
        let chord = self.end - self.start;
        let len_sq = chord.length_sq();
        if len_sq == 0.0 {
            return Coord::INFINITY;
        }

        let proj1 = chord.dot(self.control1 - self.start);
        let proj2 = chord.dot(self.control2 - self.start);
        if proj1 < 0.0 || proj1 > len_sq || proj2 < 0.0 || proj2 > len_sq {
            return Coord::INFINITY;
        }

        let d1 = chord.cross(self.control1 - self.start) / len_sq;
        let d2 = chord.cross(self.control2 - self.start) / len_sq;

        if approx_zero(d1 - d2, 1e-12) {
            // Already linear in chord coordinates; the extremum of the
            // (now constant) perpendicular distance is at the midpoint.
            let dt_mid = self.point_at(0.5);
            return (chord.cross(dt_mid - self.start) / len_sq).abs();
        }

        // The perpendicular distance along the curve, in chord-normalized
        // coordinates, is the cubic Bezier interpolation of 0, d1, d2, 0; its
        // derivative is a quadratic whose two roots are the interior
        // extrema. Evaluate the underlying cubic deviation at those roots
        // (and fall back to the endpoints, which are always zero).
        let deviation_at = |t: Coord| -> Coord {
            let ct = 1.0 - t;
            (3.0 * ct * ct * t * d1 + 3.0 * ct * t * t * d2).abs()
        };

        // d(t) = 3*ct^2*t*d1 + 3*ct*t^2*d2, d'(t) = 0 gives a quadratic in t:
        // (3d1 - 3d2)*t^2 + (2d2 - 4d1)*t + d1 = 0.
        let c2 = 3.0 * d1 - 3.0 * d2;
        let c1 = 2.0 * d2 - 4.0 * d1;
        let c0 = d1;
        let roots = solve_quadratic(c0, c1, c2);
        let mut max_dev = 0.0_f64;
        if let RootResult::Finite(rs) = roots {
            for t in rs {
                if t > 0.0 && t < 1.0 {
                    max_dev = max_dev.max(deviation_at(t));
                }
            }
        }
        max_dev
    }

    fn axis_roots(&self, s: Coord, c1: Coord, c2: Coord, e: Coord, value: Coord) -> RootResult {
        solve_cubic(
            s - value,
            3.0 * (c1 - s),
            3.0 * (s - 2.0 * c1 + c2),
            -s + 3.0 * c1 - 3.0 * c2 + e,
        )
    }

    pub fn params_for_point(&self, p: Point, eps: Coord) -> RootResult {
        let rx = self.axis_roots(self.start.x, self.control1.x, self.control2.x, self.end.x, p.x);
        let ry = self.axis_roots(self.start.y, self.control1.y, self.control2.y, self.end.y, p.y);
        crate::edge::intersect_axis_roots(rx, ry, eps)
    }
}

fn lerp(a: Point, b: Point, t: Coord) -> Point {
    (1.0 - t) * a + t * b
}

/// Interior t-values where x'(t)=0 or y'(t)=0 for one axis, via the
/// quadratic `a*t^2 + 2b*t + c = 0` with
/// `a = -s + 3c1 - 3c2 + e`, `b = s - 2c1 + c2`, `c = -s + c1`.
fn axis_critical_ts(s: Coord, c1: Coord, c2: Coord, e: Coord) -> ArrayVec<[Coord; 2]> {
    let a = -s + 3.0 * c1 - 3.0 * c2 + e;
    let b = s - 2.0 * c1 + c2;
    let c = -s + c1;

    let mut out = ArrayVec::new();
    if let RootResult::Finite(rs) = solve_quadratic(c, 2.0 * b, a) {
        for t in rs {
            out.push(t);
        }
    }
    out
}

fn dedup_sorted(v: &mut ArrayVec<[Coord; 6]>) {
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

impl std::fmt::Display for CubicBezier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CubicBezier({}, {}, {}, {})", self.start, self.control1, self.control2, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CubicBezier {
        CubicBezier::new(
            Point::new(0.0, 0.0),
            Point::new(1.0, 30.0),
            Point::new(2.0, -27.0),
            Point::new(3.0, 3.0),
        )
    }

    #[test]
    fn endpoint_agreement() {
        let c = sample();
        assert_eq!(c.point_at(0.0), c.start);
        assert_eq!(c.point_at(1.0), c.end);
    }

    #[test]
    fn split_consistency() {
        let c = sample();
        let t = 0.25;
        let (a, b) = c.split_at(t);
        for i in 0..=10 {
            let u = i as Coord / 10.0;
            assert!(a.point_at(u).approx_equals(c.point_at(t * u), 1e-8));
            assert!(b.point_at(u).approx_equals(c.point_at(t + (1.0 - t) * u), 1e-8));
        }
    }

    #[test]
    fn bounding_box_contains_samples() {
        let c = sample();
        let bb = c.bounding_box();
        for i in 0..=100 {
            let t = i as Coord / 100.0;
            assert!(bb.contains_closed(c.point_at(t)));
        }
    }

    #[test]
    fn extreme_point_completeness() {
        let c = sample();
        let ext = c.extreme_points();
        let max_y_ext = ext.iter().map(|ep| ep.point.y).fold(Coord::NEG_INFINITY, Coord::max);
        let mut max_y_sample = Coord::NEG_INFINITY;
        for i in 0..=1000 {
            let t = i as Coord / 1000.0;
            max_y_sample = max_y_sample.max(c.point_at(t).y);
        }
        assert!(max_y_sample <= max_y_ext + 1e-6);
    }

    #[test]
    fn params_for_point_round_trip() {
        let c = sample();
        let t_star = 0.73;
        let p = c.point_at(t_star);
        let roots = c.params_for_point(p, 1e-9);
        let found = roots.finite_roots().unwrap().iter().any(|&t| (t - t_star).abs() < 1e-6);
        assert!(found, "{:?}", roots);
    }

    #[test]
    fn degenerate_constant_x_axis_is_indeterminate_on_x() {
        // x(t) is constant: the x-axis solver is Indeterminate, but y still
        // pins down a unique root in [0, 1] (falls back to the other axis).
        let c = CubicBezier::new(
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(1.0, 2.0),
            Point::new(1.0, 3.0),
        );
        let p = Point::new(1.0, 1.5);
        let roots = c.params_for_point(p, 1e-9);
        assert!(roots.finite_roots().is_some());
    }

    #[test]
    fn deviation_from_line_zero_when_collinear() {
        let c = CubicBezier::new(Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(2.0, 0.0), Point::new(3.0, 0.0));
        assert!(c.deviation_from_line() < 1e-12);
    }
}
