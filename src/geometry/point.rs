//--------------------------------------------------------------------
// point.rs
//--------------------------------------------------------------------
// A two-element vector / point class. Grounded on the teacher's Vec2
// (geometry/vec2.rs): same derive-heavy operator set, same dot/cross
// naming, same "rot_scale" rotate-by-complex-number trick.
//--------------------------------------------------------------------

use derive_more::{Add, Constructor, Display, Div, From, Into, Mul, Neg, Sub};

use crate::error::{GeometryError, GeometryResult};
use crate::scalar::{approx, Coord};

#[derive(
    Copy, Clone, Add, Sub, Mul, Div, Neg, PartialEq, From, Into, Display, Constructor,
)]
#[display(fmt = "({},{})", x, y)]
pub struct Point {
    pub x: Coord,
    pub y: Coord,
}

impl Point {
    pub fn zero() -> Point {
        Point { x: 0.0, y: 0.0 }
    }

    /// Fallible construction for callers that accept externally-sourced
    /// coordinates: rejects NaN/infinite values instead of propagating them
    /// silently through downstream geometry.
    pub fn checked(x: Coord, y: Coord) -> GeometryResult<Point> {
        if x.is_finite() && y.is_finite() {
            Ok(Point { x, y })
        } else {
            Err(GeometryError::InvalidArgument(x, y))
        }
    }

    pub fn dot(&self, other: Point) -> Coord {
        self.x * other.x + self.y * other.y
    }

    /// Scalar z-component of the 3D cross product.
    pub fn cross(&self, other: Point) -> Coord {
        self.x * other.y - self.y * other.x
    }

    pub fn length_sq(&self) -> Coord {
        self.dot(*self)
    }

    pub fn length(&self) -> Coord {
        self.length_sq().sqrt()
    }

    pub fn normalized(&self) -> Point {
        *self / self.length()
    }

    /// Rotate `self` about `center` by `angle` radians.
    pub fn rotate_about(&self, center: Point, angle: Coord) -> Point {
        let (s, c) = angle.sin_cos();
        let d = *self - center;
        let rotated = Point { x: d.x * c - d.y * s, y: d.x * s + d.y * c };
        center + rotated
    }

    /// Component-wise scale of `self` about `center`.
    pub fn scale_about(&self, center: Point, factor: Point) -> Point {
        let d = *self - center;
        center + Point { x: d.x * factor.x, y: d.y * factor.y }
    }

    pub fn equals(&self, other: Point) -> bool {
        self.x == other.x && self.y == other.y
    }

    pub fn approx_equals(&self, other: Point, eps: Coord) -> bool {
        approx(self.x, other.x, eps) && approx(self.y, other.y, eps)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub fn midpoint(&self, other: Point) -> Point {
        (*self + other) / 2.0
    }
}

impl core::ops::Mul<Point> for Coord {
    type Output = Point;
    fn mul(self, rhs: Point) -> Point {
        Point::new(self * rhs.x, self * rhs.y)
    }
}

impl std::fmt::Debug for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}
