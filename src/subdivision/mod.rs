//--------------------------------------------------------------------
// subdivision/mod.rs
//--------------------------------------------------------------------
// The general-purpose intersector: recursive interval subdivision
// driven by a FIFO queue of tagged tasks (PP/PE/EP/EE) instead of the
// call stack, so recursion depth never outgrows the queue. Grounded on
// the teacher's intersection_generic / intersection_generic_monotonous
// (curve/intersection.rs) for the overall split-and-recurse shape, and
// on the bezier-clipping fat-line/chord early exit used by
// other_examples/…nical-lyon__geom-src-cubic_bezier_intersections.rs
// for the deviation-from-line pruning heuristic.
//--------------------------------------------------------------------

pub mod task;

use std::collections::VecDeque;

use crate::edge::{Edge, ExtremePoints};
use crate::geometry::Point;
use crate::intersection::{Intersection, IntersectionResult};
use crate::line_intersection::intersections_ll;
use crate::poly::RootResult;
use crate::scalar::Coord;

pub use task::Task;
use task::{error_radius, half_width, max_dev, TaskKind};

/// `intersections` from §6: the general subdivision intersector.
///
/// `depth` bounds how many times any single branch may bisect; `max_iter`
/// bounds the total number of tasks dequeued across the whole call, with
/// negative values meaning unlimited.
pub fn intersections(edge1: &Edge, edge2: &Edge, depth: u32, epsilon: Coord, max_iter: i64) -> IntersectionResult {
    if edge1.degree() == 1 && edge2.degree() == 1 {
        if let (Edge::Line(l1), Edge::Line(l2)) = (edge1, edge2) {
            return intersections_ll(l1, l2);
        }
    }

    let cap = resolve_max_iter(max_iter);
    match run(edge1, &edge1.extreme_points(), edge2, &edge2.extreme_points(), depth, epsilon, cap) {
        IntersectionResult::Indeterminate => IntersectionResult::Indeterminate,
        IntersectionResult::Finite(results) => IntersectionResult::Finite(crate::dedup::dedup(results, epsilon)),
    }
}

/// Maps a caller-facing `maxIter` (negative meaning unlimited, per §6's
/// cancellation model) to an already-resolved task-count cap for `run`.
pub fn resolve_max_iter(max_iter: i64) -> usize {
    if max_iter < 0 {
        usize::MAX
    } else {
        max_iter as usize
    }
}

/// The engine entry point used both by `intersections` (with the default
/// special-point sets, each edge's own extreme points) and by the
/// self-intersection driver (with the tailored special-point sets from
/// §4.7, which deliberately omit some split-boundary endpoints to avoid
/// double-counting). `max_iter` here is an already-resolved task-count cap
/// (see `resolve_max_iter`), not the raw caller-facing signed value.
pub fn run(
    edge1: &Edge,
    sp1: &ExtremePoints,
    edge2: &Edge,
    sp2: &ExtremePoints,
    depth: u32,
    epsilon: Coord,
    max_iter: usize,
) -> IntersectionResult {
    let bezout_bound = (edge1.degree() as usize) * (edge2.degree() as usize);
    let mut engine = Engine { epsilon, max_depth: depth, max_iter, results: Vec::new(), exact_count: 0 };

    let mut queue: VecDeque<Task> = VecDeque::new();
    seed(edge1, sp1, edge2, sp2, &mut queue);

    let mut iterations = 0usize;
    while let Some(t) = queue.pop_front() {
        if iterations >= engine.max_iter {
            engine.emit_budget_exhausted(&t);
            while let Some(rest) = queue.pop_front() {
                engine.emit_budget_exhausted(&rest);
            }
            break;
        }
        iterations += 1;

        match engine.process(t, &mut queue) {
            Control::Continue => {}
            Control::Indeterminate => return IntersectionResult::Indeterminate,
        }

        if engine.exact_count > bezout_bound {
            return IntersectionResult::Indeterminate;
        }
    }

    IntersectionResult::Finite(engine.results)
}

/// Seed the queue per §4.6: a PP task for every pair of special points, a
/// PE task per special point of `edge1` against the whole of `edge2`, an EP
/// task per special point of `edge2` against the whole of `edge1`, and one
/// root EE task for the whole pair.
fn seed(edge1: &Edge, sp1: &ExtremePoints, edge2: &Edge, sp2: &ExtremePoints, queue: &mut VecDeque<Task>) {
    for ep1 in sp1.iter() {
        for ep2 in sp2.iter() {
            queue.push_back(Task::pp(ep1.t, ep1.point, ep2.t, ep2.point));
        }
    }

    for ep1 in sp1.iter() {
        queue.push_back(Task::pe(0, ep1.t, ep1.point, 0.5, *edge2));
    }

    for ep2 in sp2.iter() {
        queue.push_back(Task::ep(0, 0.5, *edge1, ep2.t, ep2.point));
    }

    queue.push_back(Task::ee(0, 0.5, *edge1, 0.5, *edge2));
}

enum Control {
    Continue,
    Indeterminate,
}

struct Engine {
    epsilon: Coord,
    max_depth: u32,
    max_iter: usize,
    results: Vec<Intersection>,
    exact_count: usize,
}

impl Engine {
    fn emit_exact(&mut self, t1: Coord, t2: Coord, point: Point) {
        if self.already_recorded(t1, t2) {
            return;
        }
        self.results.push(Intersection::exact(t1, t2, point));
        self.exact_count += 1;
    }

    fn already_recorded(&self, t1: Coord, t2: Coord) -> bool {
        self.results
            .iter()
            .any(|r| r.is_exact() && (r.t1 - t1).abs() < self.epsilon && (r.t2 - t2).abs() < self.epsilon)
    }

    fn emit_budget_exhausted(&mut self, t: &Task) {
        match &t.kind {
            TaskKind::Pp { .. } => {}
            TaskKind::Pe { point, edge2 } => {
                let p = point.midpoint(edge2.point_at(0.5));
                self.results.push(Intersection::inexact(t.t1, t.t2, p, error_radius(t.depth)));
            }
            TaskKind::Ep { edge1, point } => {
                let p = edge1.point_at(0.5).midpoint(*point);
                self.results.push(Intersection::inexact(t.t1, t.t2, p, error_radius(t.depth)));
            }
            TaskKind::Ee { edge1, edge2 } => {
                let p = edge1.point_at(0.5).midpoint(edge2.point_at(0.5));
                self.results.push(Intersection::inexact(t.t1, t.t2, p, error_radius(t.depth)));
            }
        }
    }

    fn process(&mut self, t: Task, queue: &mut VecDeque<Task>) -> Control {
        match t.kind {
            TaskKind::Pp { p1, p2 } => {
                self.process_pp(t.t1, p1, t.t2, p2);
                Control::Continue
            }
            TaskKind::Pe { point, edge2 } => self.process_pe(t.depth, t.t1, point, t.t2, edge2, queue),
            TaskKind::Ep { edge1, point } => self.process_ep(t.depth, t.t1, edge1, t.t2, point, queue),
            TaskKind::Ee { edge1, edge2 } => self.process_ee(t.depth, t.t1, edge1, t.t2, edge2, queue),
        }
    }

    fn process_pp(&mut self, t1: Coord, p1: Point, t2: Coord, p2: Point) {
        if p1.approx_equals(p2, self.epsilon) {
            self.emit_exact(t1, t2, p1.midpoint(p2));
        }
    }

    fn process_pe(
        &mut self,
        depth: u32,
        t1: Coord,
        point: Point,
        t2: Coord,
        edge2: Edge,
        queue: &mut VecDeque<Task>,
    ) -> Control {
        let bb = edge2.bounding_box();

        if bb.is_point() {
            self.process_pp(t1, point, t2, edge2.point_at(0.5));
            return Control::Continue;
        }

        if !bb.contains_closed(point) {
            return Control::Continue;
        }

        if bb.has_on_edge(point) {
            let width = task::full_width(depth);
            for ep in edge2.extreme_points().iter() {
                let t2_ep = t2 + (ep.t - 0.5) * width;
                self.process_pp(t1, point, t2_ep, ep.point);
            }
        }

        if depth >= self.max_depth {
            let p = point.midpoint(edge2.point_at(0.5));
            self.results.push(Intersection::inexact(t1, t2, p, error_radius(depth)));
            return Control::Continue;
        }

        match edge2.params_for_point(point, self.epsilon) {
            RootResult::Indeterminate => return Control::Indeterminate,
            RootResult::Finite(roots) => {
                let width = task::full_width(depth);
                for r in roots.iter().copied().filter(|&u| u > 0.0 && u < 1.0) {
                    let t2_r = t2 + (r - 0.5) * width;
                    self.emit_exact(t1, t2_r, point);
                }
            }
        }

        let (e2l, e2r) = edge2.split_at(0.5);
        let delta = half_width(depth + 1);
        self.process_pp(t1, point, t2, edge2.point_at(0.5));
        queue.push_back(Task::pe(depth + 1, t1, point, t2 - delta, e2l));
        queue.push_back(Task::pe(depth + 1, t1, point, t2 + delta, e2r));

        Control::Continue
    }

    fn process_ep(
        &mut self,
        depth: u32,
        t1: Coord,
        edge1: Edge,
        t2: Coord,
        point: Point,
        queue: &mut VecDeque<Task>,
    ) -> Control {
        let bb = edge1.bounding_box();

        if bb.is_point() {
            self.process_pp(t1, edge1.point_at(0.5), t2, point);
            return Control::Continue;
        }

        if !bb.contains_closed(point) {
            return Control::Continue;
        }

        if bb.has_on_edge(point) {
            let width = task::full_width(depth);
            for ep in edge1.extreme_points().iter() {
                let t1_ep = t1 + (ep.t - 0.5) * width;
                self.process_pp(t1_ep, ep.point, t2, point);
            }
        }

        if depth >= self.max_depth {
            let p = edge1.point_at(0.5).midpoint(point);
            self.results.push(Intersection::inexact(t1, t2, p, error_radius(depth)));
            return Control::Continue;
        }

        match edge1.params_for_point(point, self.epsilon) {
            RootResult::Indeterminate => return Control::Indeterminate,
            RootResult::Finite(roots) => {
                let width = task::full_width(depth);
                for r in roots.iter().copied().filter(|&u| u > 0.0 && u < 1.0) {
                    let t1_r = t1 + (r - 0.5) * width;
                    self.emit_exact(t1_r, t2, point);
                }
            }
        }

        let (e1l, e1r) = edge1.split_at(0.5);
        let delta = half_width(depth + 1);
        self.process_pp(t1, edge1.point_at(0.5), t2, point);
        queue.push_back(Task::ep(depth + 1, t1 - delta, e1l, t2, point));
        queue.push_back(Task::ep(depth + 1, t1 + delta, e1r, t2, point));

        Control::Continue
    }

    fn process_ee(
        &mut self,
        depth: u32,
        t1: Coord,
        edge1: Edge,
        t2: Coord,
        edge2: Edge,
        queue: &mut VecDeque<Task>,
    ) -> Control {
        let bb1 = edge1.bounding_box();
        let bb2 = edge2.bounding_box();

        if bb1.is_point() {
            return self.process_pe(depth, t1, edge1.point_at(0.5), t2, edge2, queue);
        }
        if bb2.is_point() {
            return self.process_ep(depth, t1, edge1, t2, edge2.point_at(0.5), queue);
        }

        if !bb1.overlaps(bb2) {
            return Control::Continue;
        }

        if depth >= self.max_depth {
            let p = edge1.point_at(0.5).midpoint(edge2.point_at(0.5));
            self.results.push(Intersection::inexact(t1, t2, p, error_radius(depth)));
            return Control::Continue;
        }

        if depth > 0 {
            let dev1 = edge1.deviation_from_line();
            let dev2 = edge2.deviation_from_line();
            let threshold = max_dev(depth);
            if dev1 < threshold && dev2 < threshold {
                let chord1 = crate::edge::Line::new(edge1.start(), edge1.end());
                let chord2 = crate::edge::Line::new(edge2.start(), edge2.end());
                match chord_check(&chord1, &chord2) {
                    ChordCheck::Indeterminate => {
                        if dev1 == 0.0 && dev2 == 0.0 {
                            return Control::Indeterminate;
                        }
                    }
                    ChordCheck::Empty => return Control::Continue,
                    ChordCheck::Hit => {}
                }
            }
        }

        let (e1l, e1r) = edge1.split_at(0.5);
        let (e2l, e2r) = edge2.split_at(0.5);
        let delta = half_width(depth + 1);

        self.process_pp(t1, edge1.point_at(0.5), t2, edge2.point_at(0.5));

        queue.push_back(Task::pe(depth + 1, t1, edge1.point_at(0.5), t2 - delta, e2l));
        queue.push_back(Task::pe(depth + 1, t1, edge1.point_at(0.5), t2 + delta, e2r));
        queue.push_back(Task::ep(depth + 1, t1 - delta, e1l, t2, edge2.point_at(0.5)));
        queue.push_back(Task::ep(depth + 1, t1 + delta, e1r, t2, edge2.point_at(0.5)));
        queue.push_back(Task::ee(depth + 1, t1 - delta, e1l, t2 - delta, e2l));
        queue.push_back(Task::ee(depth + 1, t1 - delta, e1l, t2 + delta, e2r));
        queue.push_back(Task::ee(depth + 1, t1 + delta, e1r, t2 - delta, e2l));
        queue.push_back(Task::ee(depth + 1, t1 + delta, e1r, t2 + delta, e2r));

        Control::Continue
    }
}

enum ChordCheck {
    Indeterminate,
    Empty,
    Hit,
}

/// The chord heuristic's cheap line/line test, restricted to the open
/// interval on both sides: unlike `intersections_ll` it has no use for the
/// boundary-contact shortcut, since chord endpoints are shared with
/// neighboring subdivision intervals and would otherwise always "touch".
fn chord_check(l1: &crate::edge::Line, l2: &crate::edge::Line) -> ChordCheck {
    let p = l1.start;
    let q = l2.start;
    let d1 = l1.end - l1.start;
    let d2 = l2.end - l2.start;

    let a = d1.x * d2.y - d2.x * d1.y;
    let pq = p - q;

    if a == 0.0 {
        let b1 = d2.x * pq.y - d2.y * pq.x;
        return if b1 == 0.0 { ChordCheck::Indeterminate } else { ChordCheck::Empty };
    }

    let b1 = d2.x * pq.y - d2.y * pq.x;
    let b2 = d1.x * pq.y - d1.y * pq.x;
    let t1 = b1 / a;
    let t2 = b2 / a;

    if t1 > 0.0 && t1 < 1.0 && t2 > 0.0 && t2 < 1.0 {
        ChordCheck::Hit
    } else {
        ChordCheck::Empty
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    #[test]
    fn crossing_lines_dispatch_to_fast_path() {
        let e1 = Edge::line(Point::new(0.0, 0.0), Point::new(2.0, 2.0));
        let e2 = Edge::line(Point::new(0.0, 2.0), Point::new(2.0, 0.0));
        let r = intersections(&e1, &e2, 20, 1e-9, 10_000);
        let v = r.finite().unwrap();
        assert_eq!(v.len(), 1);
        assert!(v[0].point.approx_equals(Point::new(1.0, 1.0), 1e-6));
    }

    #[test]
    fn negative_max_iter_means_unlimited() {
        assert_eq!(resolve_max_iter(-1), usize::MAX);
        assert_eq!(resolve_max_iter(-100), usize::MAX);
        assert_eq!(resolve_max_iter(0), 0);
        assert_eq!(resolve_max_iter(500), 500);

        let e1 = Edge::quadratic_bezier(Point::new(0.0, 0.0), Point::new(1.0, 2.0), Point::new(2.0, 0.0));
        let e2 = Edge::quadratic_bezier(Point::new(0.0, 0.5), Point::new(1.0, -1.5), Point::new(2.0, 0.5));
        let r = intersections(&e1, &e2, 24, 1e-9, -1);
        let v = r.finite().unwrap();
        assert!(v.len() >= 2, "{:?}", v);
    }

    #[test]
    fn line_crosses_quadratic_once() {
        // A vertical line x=1 crossing an upward-opening parabola-like
        // quadratic Bezier from (0,0) to (2,0) bulging up through (1,2).
        let e1 = Edge::line(Point::new(1.0, -1.0), Point::new(1.0, 3.0));
        let e2 = Edge::quadratic_bezier(Point::new(0.0, 0.0), Point::new(1.0, 2.0), Point::new(2.0, 0.0));
        let r = intersections(&e1, &e2, 24, 1e-9, 10_000);
        let v = r.finite().unwrap();
        assert_eq!(v.len(), 1);
        assert!(v[0].point.approx_equals(Point::new(1.0, 1.0), 1e-4));
    }

    #[test]
    fn disjoint_edges_yield_no_intersections() {
        let e1 = Edge::line(Point::new(0.0, 0.0), Point::new(1.0, 1.0));
        let e2 = Edge::line(Point::new(10.0, 10.0), Point::new(11.0, 11.0));
        let r = intersections(&e1, &e2, 20, 1e-9, 10_000);
        assert_eq!(r.finite().unwrap().len(), 0);
    }

    #[test]
    fn two_quadratics_cross_twice() {
        // Two "smile"/"frown" parabola-shaped quadratics sharing the same
        // chord endpoints, bulging in opposite directions: they cross once
        // strictly inside in addition to sharing both endpoints, so with
        // distinct endpoints they give exactly two interior-ish crossings.
        let e1 = Edge::quadratic_bezier(Point::new(0.0, 0.0), Point::new(1.0, 2.0), Point::new(2.0, 0.0));
        let e2 = Edge::quadratic_bezier(Point::new(0.0, 0.5), Point::new(1.0, -1.5), Point::new(2.0, 0.5));
        let r = intersections(&e1, &e2, 24, 1e-9, 10_000);
        let v = r.finite().unwrap();
        assert!(v.len() >= 2, "{:?}", v);
    }

    #[test]
    fn seed_scenario_3_line_crosses_quadratic_twice() {
        // intersections(L((1,0),(1,2)), Q((0,0),(3,1),(0,2)), depth=20) ->
        // exactly two intersections.
        let l = Edge::line(Point::new(1.0, 0.0), Point::new(1.0, 2.0));
        let q = Edge::quadratic_bezier(Point::new(0.0, 0.0), Point::new(3.0, 1.0), Point::new(0.0, 2.0));
        let r = intersections(&l, &q, 20, 1e-9, 10_000);
        let v = r.finite().unwrap();
        assert_eq!(v.len(), 2, "{:?}", v);
    }

    #[test]
    fn seed_scenario_4_two_quadratics_cross_four_times() {
        // intersections(Q((0,1),(6,2),(0,3)), Q((1,0),(2,6),(3,0)), depth=20)
        // -> exactly four intersections.
        let q1 = Edge::quadratic_bezier(Point::new(0.0, 1.0), Point::new(6.0, 2.0), Point::new(0.0, 3.0));
        let q2 = Edge::quadratic_bezier(Point::new(1.0, 0.0), Point::new(2.0, 6.0), Point::new(3.0, 0.0));
        let r = intersections(&q1, &q2, 20, 1e-9, 10_000);
        let v = r.finite().unwrap();
        assert_eq!(v.len(), 4, "{:?}", v);
    }

    #[test]
    fn seed_scenario_5_two_cubics_cross_nine_times() {
        // intersections(C((0,0),(1,30),(2,-27),(3,3)), C((0,0),(30,1),(-27,2),(3,3)),
        // depth=20) -> exactly nine intersections.
        let c1 = Edge::cubic_bezier(
            Point::new(0.0, 0.0),
            Point::new(1.0, 30.0),
            Point::new(2.0, -27.0),
            Point::new(3.0, 3.0),
        );
        let c2 = Edge::cubic_bezier(
            Point::new(0.0, 0.0),
            Point::new(30.0, 1.0),
            Point::new(-27.0, 2.0),
            Point::new(3.0, 3.0),
        );
        let r = intersections(&c1, &c2, 20, 1e-9, 10_000);
        let v = r.finite().unwrap();
        assert_eq!(v.len(), 9, "{:?}", v);
    }

    #[test]
    fn intersection_symmetry() {
        // The unordered multiset of (point, err) returned by
        // intersections(e1, e2) equals that of intersections(e2, e1) with
        // (t1, t2) swapped.
        let e1 = Edge::quadratic_bezier(Point::new(0.0, 0.0), Point::new(1.0, 2.0), Point::new(2.0, 0.0));
        let e2 = Edge::quadratic_bezier(Point::new(0.0, 0.5), Point::new(1.0, -1.5), Point::new(2.0, 0.5));

        let forward = intersections(&e1, &e2, 24, 1e-9, 10_000).finite().unwrap();
        let backward = intersections(&e2, &e1, 24, 1e-9, 10_000).finite().unwrap();

        assert_eq!(forward.len(), backward.len());
        for f in &forward {
            let has_match = backward.iter().any(|b| {
                f.point.approx_equals(b.point, 1e-6)
                    && (f.t1 - b.t2).abs() < 1e-6
                    && (f.t2 - b.t1).abs() < 1e-6
            });
            assert!(has_match, "no symmetric match for {:?} in {:?}", f, backward);
        }
    }
}
