//--------------------------------------------------------------------
// dedup.rs
//--------------------------------------------------------------------
// Post-processing pass merging near-duplicate intersections: results
// whose (t1, t2) lie within their combined error radius are the same
// geometric crossing seen twice (once per subdivision branch, or once
// per side of a self-intersection split boundary). Grounded on the
// teacher's merge.rs dedup-by-union-find shape, simplified to the
// spec's single O(n^2) sidecar-marking pass (no union-find needed since
// "close" here is an equivalence relation in practice: two results
// within epsilon of a third are almost always within range of each
// other too, and retaining only the best of each close PAIR, repeated
// to a fixed point via the sidecar scan, is what the spec calls for).
//--------------------------------------------------------------------

use crate::intersection::Intersection;
use crate::scalar::Coord;

/// Merge intersections whose `(t1, t2)` lie within `max(sqrt(2)*(err+err'), eps)`
/// of each other, keeping the lower-`err` member of each close pair (ties
/// broken by lower index).
pub fn dedup(mut results: Vec<Intersection>, epsilon: Coord) -> Vec<Intersection> {
    let n = results.len();
    let mut removed = vec![false; n];

    for i in 0..n {
        if removed[i] {
            continue;
        }
        for j in (i + 1)..n {
            if removed[j] {
                continue;
            }
            if !close(&results[i], &results[j], epsilon) {
                continue;
            }
            if results[j].err < results[i].err {
                removed[i] = true;
                break;
            } else {
                removed[j] = true;
            }
        }
    }

    let mut out = Vec::with_capacity(n);
    for (idx, r) in results.drain(..).enumerate() {
        if !removed[idx] {
            out.push(r);
        }
    }
    out
}

fn close(a: &Intersection, b: &Intersection, epsilon: Coord) -> bool {
    let radius = (2f64.sqrt() * (a.err + b.err)).max(epsilon);
    (a.t1 - b.t1).abs() < radius && (a.t2 - b.t2).abs() < radius
}
