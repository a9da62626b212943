//--------------------------------------------------------------------
// poly.rs
//--------------------------------------------------------------------
// Closed-form roots of degree-1/2/3 polynomials over the reals, with a
// distinguished "identically zero" sentinel kept separate from "no
// roots". The teacher crate delegates this job to the external `roots`
// crate; that crate's `Roots<T>` has no such sentinel, so it cannot
// carry the Indeterminate-propagation contract the rest of this crate
// depends on. Hand-rolled here instead (see DESIGN.md).
//--------------------------------------------------------------------

use arrayvec::ArrayVec;

use crate::scalar::Coord;

pub const MAX_ROOTS: usize = 3;

/// A small fixed-capacity buffer of real roots, at most `MAX_ROOTS` of them.
pub type Roots = ArrayVec<[Coord; MAX_ROOTS]>;

/// The tri-state result of a polynomial solve: either the polynomial is
/// identically zero (every coefficient supplied was zero), or it has some
/// finite (possibly empty) set of real roots.
#[derive(Debug, Clone, PartialEq)]
pub enum RootResult {
    /// The polynomial is identically zero; every real number is a root.
    Indeterminate,
    /// Finitely many real roots (possibly none), multiplicities collapsed.
    Finite(Roots),
}

impl RootResult {
    pub fn is_indeterminate(&self) -> bool {
        matches!(self, RootResult::Indeterminate)
    }

    pub fn finite_roots(&self) -> Option<&Roots> {
        match self {
            RootResult::Indeterminate => None,
            RootResult::Finite(r) => Some(r),
        }
    }

    fn one(r: Coord) -> RootResult {
        let mut v = Roots::new();
        v.push(r);
        RootResult::Finite(v)
    }

    fn two(r1: Coord, r2: Coord) -> RootResult {
        let mut v = Roots::new();
        v.push(r1);
        v.push(r2);
        RootResult::Finite(v)
    }

    fn three(r1: Coord, r2: Coord, r3: Coord) -> RootResult {
        let mut v = Roots::new();
        v.push(r1);
        v.push(r2);
        v.push(r3);
        RootResult::Finite(v)
    }

    fn none() -> RootResult {
        RootResult::Finite(Roots::new())
    }
}

/// Solve `c1*x + c0 = 0`.
pub fn solve_linear(c0: Coord, c1: Coord) -> RootResult {
    if c1 == 0.0 {
        if c0 == 0.0 {
            RootResult::Indeterminate
        } else {
            RootResult::none()
        }
    } else {
        RootResult::one(-c0 / c1)
    }
}

/// Solve `c2*x^2 + c1*x + c0 = 0`.
pub fn solve_quadratic(c0: Coord, c1: Coord, c2: Coord) -> RootResult {
    if c2 == 0.0 {
        return solve_linear(c0, c1);
    }

    let d = c1 * c1 - 4.0 * c2 * c0;
    if d < 0.0 {
        RootResult::none()
    } else if d == 0.0 {
        RootResult::one(-c1 / (2.0 * c2))
    } else {
        // Numerically stable pairing: compute the root that doesn't suffer
        // catastrophic cancellation directly, get the other from the
        // product-of-roots identity (r1 * r2 = c0 / c2).
        let sqrt_d = d.sqrt();
        let q = if c1 >= 0.0 {
            -0.5 * (c1 + sqrt_d)
        } else {
            -0.5 * (c1 - sqrt_d)
        };
        let r1 = q / c2;
        let r2 = c0 / q;
        RootResult::two(r1, r2)
    }
}

/// Solve `c3*x^3 + c2*x^2 + c1*x + c0 = 0`.
pub fn solve_cubic(c0: Coord, c1: Coord, c2: Coord, c3: Coord) -> RootResult {
    if c3 == 0.0 {
        return solve_quadratic(c0, c1, c2);
    }

    // Depress to a monic cubic using the coefficient names a0/a1/a2:
    // a0 = c0/c3, a1 = c1/c3, a2 = c2/c3.
    let a0 = c0 / c3;
    let a1 = c1 / c3;
    let a2 = c2 / c3;

    let p = 3.0 * a1 - a2 * a2;
    let q = 27.0 * a0 - 9.0 * a1 * a2 + 2.0 * a2 * a2 * a2;
    let delta = q * q + 4.0 * p * p * p;

    if delta < 0.0 {
        // Three distinct real roots, trigonometric form.
        let rc = ((q / 2.0).powi(2) + ((-delta).sqrt() / 2.0).powi(2)).powf(1.0 / 6.0);
        let phi = (-delta).sqrt().atan2(-q);
        let root_k = |k: Coord| (2.0 * rc * ((phi + 2.0 * k * std::f64::consts::PI) / 3.0).cos() - a2) / 3.0;
        RootResult::three(root_k(0.0), root_k(1.0), root_k(-1.0))
    } else if delta == 0.0 {
        if q == 0.0 {
            RootResult::one(-a2 / 3.0)
        } else {
            let rc = cbrt(-q / 2.0);
            RootResult::two((2.0 * rc - a2) / 3.0, (-rc - a2) / 3.0)
        }
    } else {
        // One real root; pick the cube-root branch that avoids subtractive
        // cancellation based on the sign of q.
        let sqrt_delta = delta.sqrt();
        let (rc1, rc2) = if q >= 0.0 {
            let rc2 = cbrt((-q - sqrt_delta) / 2.0);
            (-p / rc2, rc2)
        } else {
            let rc1 = cbrt((-q + sqrt_delta) / 2.0);
            (rc1, -p / rc1)
        };
        RootResult::one((rc1 + rc2 - a2) / 3.0)
    }
}

fn cbrt(x: Coord) -> Coord {
    x.cbrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(r: &RootResult) -> Vec<Coord> {
        let mut v: Vec<Coord> = r.finite_roots().unwrap().iter().copied().collect();
        v.sort_by(|a, b| a.partial_cmp(b).unwrap());
        v
    }

    #[test]
    fn linear_indeterminate() {
        assert_eq!(solve_linear(0.0, 0.0), RootResult::Indeterminate);
    }

    #[test]
    fn linear_no_roots_when_slope_zero_and_intercept_nonzero() {
        assert_eq!(sorted(&solve_linear(5.0, 0.0)), Vec::<Coord>::new());
    }

    #[test]
    fn linear_single_root() {
        assert_eq!(sorted(&solve_linear(-4.0, 2.0)), vec![2.0]);
    }

    #[test]
    fn quadratic_degrades_to_linear() {
        assert_eq!(sorted(&solve_quadratic(-6.0, 2.0, 0.0)), vec![3.0]);
    }

    #[test]
    fn quadratic_no_real_roots() {
        assert_eq!(sorted(&solve_quadratic(1.0, 0.0, 1.0)), Vec::<Coord>::new());
    }

    #[test]
    fn quadratic_double_root() {
        // x^2 - 2x + 1 = (x-1)^2
        assert_eq!(sorted(&solve_quadratic(1.0, -2.0, 1.0)), vec![1.0]);
    }

    #[test]
    fn quadratic_two_roots() {
        // x^2 - 5x + 6 = (x-2)(x-3)
        let r = sorted(&solve_quadratic(6.0, -5.0, 1.0));
        assert!((r[0] - 2.0).abs() < 1e-9);
        assert!((r[1] - 3.0).abs() < 1e-9);
    }

    #[test]
    fn cubic_seed_scenario() {
        // solveCubic(-6,-5,2,1) -> {-3, -1, 2}
        let r = sorted(&solve_cubic(-6.0, -5.0, 2.0, 1.0));
        assert_eq!(r.len(), 3);
        assert!((r[0] - -3.0).abs() < 1e-8, "{:?}", r);
        assert!((r[1] - -1.0).abs() < 1e-8, "{:?}", r);
        assert!((r[2] - 2.0).abs() < 1e-8, "{:?}", r);
    }

    #[test]
    fn cubic_triple_root() {
        // (x - 1)^3 = x^3 - 3x^2 + 3x - 1
        let r = sorted(&solve_cubic(-1.0, 3.0, -3.0, 1.0));
        for root in r {
            assert!((root - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn cubic_one_real_root() {
        // x^3 + x + 1 = 0 has one real root near -0.6823278
        let r = sorted(&solve_cubic(1.0, 1.0, 0.0, 1.0));
        assert_eq!(r.len(), 1);
        assert!((r[0] - -0.6823278).abs() < 1e-6, "{:?}", r);
    }

    #[test]
    fn cubic_degrades_to_quadratic() {
        let r = sorted(&solve_cubic(6.0, -5.0, 1.0, 0.0));
        assert!((r[0] - 2.0).abs() < 1e-9);
        assert!((r[1] - 3.0).abs() < 1e-9);
    }

    #[test]
    fn solver_correctness_property() {
        // For each returned root of a handful of polynomials, the evaluated
        // residual is small relative to the coefficient norm.
        let cases: &[(Coord, Coord, Coord, Coord)] =
            &[(-6.0, -5.0, 2.0, 1.0), (-1.0, 3.0, -3.0, 1.0), (1.0, 1.0, 0.0, 1.0)];
        for &(c0, c1, c2, c3) in cases {
            let roots = solve_cubic(c0, c1, c2, c3);
            let norm = c0.abs() + c1.abs() + c2.abs() + c3.abs();
            for &r in roots.finite_roots().unwrap() {
                let residual = c3 * r * r * r + c2 * r * r + c1 * r + c0;
                assert!(residual.abs() <= 1e-8 * norm, "residual {} too large for root {}", residual, r);
            }
        }
    }
}
