//--------------------------------------------------------------------
// rect.rs
//--------------------------------------------------------------------
// Axis-aligned rectangle with open-interior overlap, closed-boundary
// edge tests, and point containment. Grounded on the teacher's Rect
// (geometry/rect.rs), extended with the spec's contacts/has_on_edge/
// is_point predicates, which the teacher's Rect did not need (it only
// ever asked "do these overlap", never "do they just touch").
//--------------------------------------------------------------------

use derive_more::{Constructor, Display};

use crate::geometry::point::Point;
use crate::scalar::Coord;

#[derive(Copy, Clone, Debug, Display, Constructor)]
#[display(fmt = "(x={}, y={}, width={}, height={})", x, y, width, height)]
pub struct Rect {
    pub x: Coord,
    pub y: Coord,
    pub width: Coord,
    pub height: Coord,
}

impl Rect {
    pub fn right(&self) -> Coord {
        self.x + self.width
    }

    pub fn bottom(&self) -> Coord {
        self.y + self.height
    }

    pub fn is_point(&self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }

    /// Strict interior containment on all four sides.
    pub fn contains(&self, p: Point) -> bool {
        p.x > self.x && p.x < self.right() && p.y > self.y && p.y < self.bottom()
    }

    /// `p` lies on one of the four sides, corners included.
    pub fn has_on_edge(&self, p: Point) -> bool {
        let in_x_closure = p.x >= self.x && p.x <= self.right();
        let in_y_closure = p.y >= self.y && p.y <= self.bottom();
        let on_vertical_edge = (p.x == self.x || p.x == self.right()) && in_y_closure;
        let on_horizontal_edge = (p.y == self.y || p.y == self.bottom()) && in_x_closure;
        on_vertical_edge || on_horizontal_edge
    }

    /// `p` lies in the closed rectangle (interior or boundary).
    pub fn contains_closed(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
    }

    /// Strict interior overlap on both axes: the open interiors intersect.
    pub fn overlaps(&self, other: Rect) -> bool {
        self.x < other.right() && other.x < self.right() && self.y < other.bottom() && other.y < self.bottom()
    }

    /// The closures intersect but the interiors do not: the rectangles
    /// touch along an edge or at a corner without overlapping.
    pub fn contacts(&self, other: Rect) -> bool {
        let closures_intersect =
            self.x <= other.right() && other.x <= self.right() && self.y <= other.bottom() && other.y <= self.bottom();
        closures_intersect && !self.overlaps(other)
    }

    pub fn intersection(&self, other: Rect) -> Option<Rect> {
        if !self.contacts(other) && !self.overlaps(other) {
            return None;
        }
        let x1 = self.x.max(other.x);
        let x2 = self.right().min(other.right());
        let y1 = self.y.max(other.y);
        let y2 = self.bottom().min(other.bottom());
        Some(Rect::new(x1, y1, x2 - x1, y2 - y1))
    }

    pub fn enclosing(pts: impl Iterator<Item = Point>) -> Option<Rect> {
        let mut x1 = Coord::INFINITY;
        let mut x2 = Coord::NEG_INFINITY;
        let mut y1 = Coord::INFINITY;
        let mut y2 = Coord::NEG_INFINITY;

        let mut empty = true;
        for pt in pts {
            empty = false;
            x1 = x1.min(pt.x);
            x2 = x2.max(pt.x);
            y1 = y1.min(pt.y);
            y2 = y2.max(pt.y);
        }

        if empty {
            None
        } else {
            Some(Rect::new(x1, y1, x2 - x1, y2 - y1))
        }
    }

    pub fn enclosing_two(p1: Point, p2: Point) -> Rect {
        let x1 = p1.x.min(p2.x);
        let x2 = p1.x.max(p2.x);
        let y1 = p1.y.min(p2.y);
        let y2 = p1.y.max(p2.y);
        Rect::new(x1, y1, x2 - x1, y2 - y1)
    }
}
