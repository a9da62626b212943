//--------------------------------------------------------------------
// lib.rs
//--------------------------------------------------------------------
// Declaration of all modules occurs here
//--------------------------------------------------------------------

extern crate arrayvec;
extern crate derive_more;
extern crate ordered_float;

mod dedup;
mod edge;
mod error;
mod geometry;
mod intersection;
mod line_intersection;
mod poly;
mod scalar;
mod self_intersection;
mod subdivision;

pub use edge::{CubicBezier, Edge, ExtremePoint, ExtremePoints, Line, QuadraticBezier};
pub use error::{GeometryError, GeometryResult};
pub use geometry::{Point, Rect};
pub use intersection::{Intersection, IntersectionResult};
pub use line_intersection::intersections_ll;
pub use poly::{solve_cubic, solve_linear, solve_quadratic, RootResult, Roots};
pub use scalar::{approx, approx_zero, snap_to_integer, Coord, DEFAULT_EPSILON};
pub use self_intersection::self_intersections;
pub use subdivision::intersections;
