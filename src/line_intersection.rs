//--------------------------------------------------------------------
// line_intersection.rs
//--------------------------------------------------------------------
// Closed-form segment/segment intersection with degeneracy detection.
// Grounded on the teacher's intersection_line_line (curve/intersection.rs),
// reworked to the spec's contact-prefilter + single-Indeterminate-marker
// contract: the teacher instead emits the whole span of overlap when the
// segments are collinear, which this crate's caller can't distinguish from
// "finitely many" without the distinguished sentinel.
//--------------------------------------------------------------------

use crate::edge::Line;
use crate::geometry::Point;
use crate::intersection::{Intersection, IntersectionResult};

/// `intersectionsLL` from §6: pre-filtered segment/segment intersection.
pub fn intersections_ll(line1: &Line, line2: &Line) -> IntersectionResult {
    let bb1 = line1.bounding_box();
    let bb2 = line2.bounding_box();

    if !bb1.overlaps(bb2) {
        if bb1.contacts(bb2) {
            return IntersectionResult::Finite(shared_endpoints(line1, line2));
        }
        return IntersectionResult::Finite(Vec::new());
    }

    let p = line1.start;
    let q = line2.start;
    let d1 = line1.end - line1.start;
    let d2 = line2.end - line2.start;

    let a = d1.x * d2.y - d2.x * d1.y;

    if a == 0.0 {
        let pq = p - q;
        let b1 = d2.x * pq.y - d2.y * pq.x;
        let b2 = d1.x * pq.y - d1.y * pq.x;

        return if b1 == 0.0 || b2 == 0.0 {
            IntersectionResult::Indeterminate
        } else {
            IntersectionResult::Finite(Vec::new())
        };
    }

    let pq = p - q;
    let b1 = d2.x * pq.y - d2.y * pq.x;
    let b2 = d1.x * pq.y - d1.y * pq.x;

    let t1 = b1 / a;
    let t2 = b2 / a;

    if (0.0..=1.0).contains(&t1) && (0.0..=1.0).contains(&t2) {
        // Midpoint-averaged output point: halves the coordinate error when
        // t1, t2 are only approximately converged.
        let point = line1.point_at(t1).midpoint(line2.point_at(t2));
        IntersectionResult::Finite(vec![Intersection::exact(t1, t2, point)])
    } else {
        IntersectionResult::Finite(Vec::new())
    }
}

fn shared_endpoints(line1: &Line, line2: &Line) -> Vec<Intersection> {
    let mut out = Vec::new();
    let ends = [
        (0.0, line1.start, 0.0, line2.start),
        (0.0, line1.start, 1.0, line2.end),
        (1.0, line1.end, 0.0, line2.start),
        (1.0, line1.end, 1.0, line2.end),
    ];
    for (t1, p1, t2, p2) in ends {
        if p1.equals(p2) {
            out.push(Intersection::exact(t1, t2, p1));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_scenario_1() {
        // intersectionsLL(L((0,0),(3,3)), L((0,2),(2,2))) -> one intersection
        // at (2,2), t1=2/3, t2=1.
        let l1 = Line::new(Point::new(0.0, 0.0), Point::new(3.0, 3.0));
        let l2 = Line::new(Point::new(0.0, 2.0), Point::new(2.0, 2.0));
        let r = intersections_ll(&l1, &l2);
        let v = r.finite().unwrap();
        assert_eq!(v.len(), 1);
        assert!((v[0].t1 - 2.0 / 3.0).abs() < 1e-8);
        assert!((v[0].t2 - 1.0).abs() < 1e-8);
        assert!(v[0].point.approx_equals(Point::new(2.0, 2.0), 1e-8));
    }

    #[test]
    fn seed_scenario_2() {
        // intersectionsLL(L((0,0),(3,3)), L((0,0),(2,2))) -> Indeterminate.
        let l1 = Line::new(Point::new(0.0, 0.0), Point::new(3.0, 3.0));
        let l2 = Line::new(Point::new(0.0, 0.0), Point::new(2.0, 2.0));
        let r = intersections_ll(&l1, &l2);
        assert!(r.is_indeterminate());
    }

    #[test]
    fn parallel_non_collinear_is_empty() {
        let l1 = Line::new(Point::new(0.0, 0.0), Point::new(1.0, 0.0));
        let l2 = Line::new(Point::new(0.0, 1.0), Point::new(1.0, 1.0));
        let r = intersections_ll(&l1, &l2);
        assert_eq!(r.finite().unwrap().len(), 0);
    }

    #[test]
    fn disjoint_boxes_return_empty() {
        let l1 = Line::new(Point::new(0.0, 0.0), Point::new(1.0, 1.0));
        let l2 = Line::new(Point::new(10.0, 10.0), Point::new(11.0, 11.0));
        let r = intersections_ll(&l1, &l2);
        assert_eq!(r.finite().unwrap().len(), 0);
    }

    #[test]
    fn touching_endpoints_report_via_contact_prefilter() {
        let l1 = Line::new(Point::new(0.0, 0.0), Point::new(1.0, 0.0));
        let l2 = Line::new(Point::new(1.0, 0.0), Point::new(2.0, 1.0));
        let r = intersections_ll(&l1, &l2);
        let v = r.finite().unwrap();
        assert_eq!(v.len(), 1);
        assert_eq!(v[0].t1, 1.0);
        assert_eq!(v[0].t2, 0.0);
    }

    #[test]
    fn crossing_segments() {
        let l1 = Line::new(Point::new(0.0, 0.0), Point::new(2.0, 2.0));
        let l2 = Line::new(Point::new(0.0, 2.0), Point::new(2.0, 0.0));
        let r = intersections_ll(&l1, &l2);
        let v = r.finite().unwrap();
        assert_eq!(v.len(), 1);
        assert!(v[0].point.approx_equals(Point::new(1.0, 1.0), 1e-8));
    }
}
