//--------------------------------------------------------------------
// self_intersection.rs
//--------------------------------------------------------------------
// Finds where a single edge crosses itself, by partitioning it into
// monotone-ish sub-curves at its own interior extreme points and
// running the subdivision engine on every disjoint pair. Grounded on
// the teacher's approach of treating self-intersection as pairwise
// intersection over a monotonic decomposition (curve/cubic_bezier.rs's
// extreme-point splitting, reused by path/splitting.rs).
//--------------------------------------------------------------------

use ordered_float::OrderedFloat;

use crate::edge::{Edge, ExtremePoint, ExtremePoints};
use crate::intersection::{Intersection, IntersectionResult};
use crate::scalar::Coord;
use crate::subdivision;

struct Segment {
    edge: Edge,
    start_t: Coord,
    ratio: Coord,
}

impl Segment {
    fn to_global(&self, local: Coord) -> Coord {
        self.start_t + self.ratio * local
    }
}

/// `selfIntersections` from §6: partitions `edge` at its interior extreme
/// points and runs the general intersector on every disjoint pair of
/// sub-curves, mapping local parameters back to the original edge's
/// parametrization.
pub fn self_intersections(edge: &Edge, depth: u32, epsilon: Coord, max_iter: i64) -> IntersectionResult {
    let mut cuts: Vec<Coord> = edge
        .extreme_points()
        .iter()
        .map(|ep| ep.t)
        .filter(|&t| t > 0.0 && t < 1.0)
        .collect();
    cuts.sort_by_key(|&t| OrderedFloat(t));
    cuts.dedup_by(|a, b| (*a - *b).abs() < 1e-12);

    let mut bounds = vec![0.0];
    bounds.extend(cuts);
    bounds.push(1.0);

    let segments: Vec<Segment> = bounds
        .windows(2)
        .map(|w| {
            let (lo, hi) = (w[0], w[1]);
            Segment { edge: sub_edge(edge, lo, hi), start_t: lo, ratio: hi - lo }
        })
        .collect();

    if segments.len() < 2 {
        return IntersectionResult::Finite(Vec::new());
    }

    let cap = subdivision::resolve_max_iter(max_iter);
    let mut out = Vec::new();

    for i in 0..segments.len() {
        for j in (i + 1)..segments.len() {
            let si = &segments[i];
            let sj = &segments[j];

            let sp_i = special_points(si, i == 0, j != i + 1);
            let sp_j = special_points_end_only(sj);

            match subdivision::run(&si.edge, &sp_i, &sj.edge, &sp_j, depth, epsilon, cap) {
                IntersectionResult::Indeterminate => return IntersectionResult::Indeterminate,
                IntersectionResult::Finite(results) => {
                    for r in results {
                        out.push(Intersection {
                            t1: si.to_global(r.t1),
                            t2: sj.to_global(r.t2),
                            point: r.point,
                            err: r.err,
                        });
                    }
                }
            }
        }
    }

    IntersectionResult::Finite(crate::dedup::dedup(out, epsilon))
}

/// `s_i`'s special-point set: `{t=0, start}` only for the first segment,
/// `{t=1, end}` only when `s_i` and `s_j` are not adjacent, per §4.7.
fn special_points(seg: &Segment, include_start: bool, include_end: bool) -> ExtremePoints {
    let mut v = ExtremePoints::new();
    if include_start {
        v.push(ExtremePoint { t: 0.0, point: seg.edge.point_at(0.0) });
    }
    if include_end {
        v.push(ExtremePoint { t: 1.0, point: seg.edge.point_at(1.0) });
    }
    v
}

/// `s_j`'s special-point set: always just `{t=1, end}`, per §4.7.
fn special_points_end_only(seg: &Segment) -> ExtremePoints {
    let mut v = ExtremePoints::new();
    v.push(ExtremePoint { t: 1.0, point: seg.edge.point_at(1.0) });
    v
}

/// The portion of `edge` over global `[lo, hi]`, reparametrized to local
/// `[0, 1]`, via two de Casteljau splits.
fn sub_edge(edge: &Edge, lo: Coord, hi: Coord) -> Edge {
    let (_, right) = edge.split_at(lo);
    if hi >= 1.0 {
        return right;
    }
    let local_hi = (hi - lo) / (1.0 - lo);
    let (left, _) = right.split_at(local_hi);
    left
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    #[test]
    fn straight_cubic_has_no_self_intersection() {
        let c = Edge::cubic_bezier(
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(3.0, 0.0),
        );
        let r = self_intersections(&c, 20, 1e-9, 10_000);
        assert_eq!(r.finite().unwrap().len(), 0);
    }

    #[test]
    fn seed_scenario_6_looping_cubic() {
        // selfIntersections(C((0,0),(8,0),(1,-7),(1,1)), depth=20) -> exactly
        // one self-intersection.
        let c = Edge::cubic_bezier(
            Point::new(0.0, 0.0),
            Point::new(8.0, 0.0),
            Point::new(1.0, -7.0),
            Point::new(1.0, 1.0),
        );
        let r = self_intersections(&c, 20, 1e-9, 10_000);
        let v = r.finite().unwrap();
        assert_eq!(v.len(), 1, "{:?}", v);
    }
}
