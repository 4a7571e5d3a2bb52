//! Geometry primitives: [`Point`] and [`Range`].
//!
//! Map coordinates grow right (x) and down (y). The coarse map used by the
//! mini search is addressed through [`Point::half`] and [`Point::doubled`].

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A 2D integer map coordinate.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return a point shifted by (dx, dy).
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// The four cardinal neighbours in the order north, east, south, west.
    #[inline]
    pub fn neighbors_4(self) -> [Point; 4] {
        [
            Self::new(self.x, self.y - 1),
            Self::new(self.x + 1, self.y),
            Self::new(self.x, self.y + 1),
            Self::new(self.x - 1, self.y),
        ]
    }

    /// The coordinate of this point on a map of half the resolution,
    /// `(⌊x/2⌋, ⌊y/2⌋)`.
    #[inline]
    pub const fn half(self) -> Self {
        Self::new(self.x.div_euclid(2), self.y.div_euclid(2))
    }

    /// The coordinate of this point on a map of double the resolution.
    ///
    /// `p.half().doubled()` is `p` only when both coordinates are even.
    #[inline]
    pub const fn doubled(self) -> Self {
        Self::new(self.x * 2, self.y * 2)
    }

    /// Taxicab distance to `other`.
    #[inline]
    pub const fn manhattan(self, other: Self) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// Chessboard distance to `other`: a diagonal step counts as one.
    #[inline]
    pub const fn chebyshev(self, other: Self) -> i32 {
        let dx = (self.x - other.x).abs();
        let dy = (self.y - other.y).abs();
        if dx > dy { dx } else { dy }
    }

    /// Component-wise sign, i.e. the unit direction towards `self` from the
    /// origin.
    #[inline]
    pub const fn signum(self) -> Self {
        Self::new(self.x.signum(), self.y.signum())
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

// ---------------------------------------------------------------------------
// Range
// ---------------------------------------------------------------------------

/// A half-open rectangle: `min` is inclusive, `max` is exclusive.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Range {
    pub min: Point,
    pub max: Point,
}

impl Range {
    #[inline]
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            min: Point::new(x0, y0),
            max: Point::new(x1, y1),
        }
    }

    #[inline]
    pub const fn width(self) -> i32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub const fn height(self) -> i32 {
        self.max.y - self.min.y
    }

    /// Number of points in the range; zero when either side is empty.
    #[inline]
    pub fn len(self) -> usize {
        self.width().max(0) as usize * self.height().max(0) as usize
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn contains(self, p: Point) -> bool {
        (self.min.x..self.max.x).contains(&p.x) && (self.min.y..self.max.y).contains(&p.y)
    }

    /// Every point of the range in row-major order.
    pub fn iter(self) -> impl Iterator<Item = Point> + Clone {
        let (min, max) = (self.min, self.max);
        (min.y..max.y).flat_map(move |y| (min.x..max.x).map(move |x| Point::new(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_arithmetic() {
        let a = Point::new(1, 2);
        let b = Point::new(3, 4);
        assert_eq!(a + b, Point::new(4, 6));
        assert_eq!(b - a, Point::new(2, 2));
        assert_eq!(a.shift(-1, 1), Point::new(0, 3));
    }

    #[test]
    fn half_floors_each_axis() {
        assert_eq!(Point::new(5, 4).half(), Point::new(2, 2));
        assert_eq!(Point::new(0, 1).half(), Point::ZERO);
        assert_eq!(Point::new(9, 9).half(), Point::new(4, 4));
    }

    #[test]
    fn doubled_is_inexact_inverse_of_half() {
        let even = Point::new(4, 6);
        assert_eq!(even.half().doubled(), even);
        let odd = Point::new(5, 7);
        assert_eq!(odd.half().doubled(), Point::new(4, 6));
    }

    #[test]
    fn distances() {
        let a = Point::new(1, 5);
        let b = Point::new(4, 3);
        assert_eq!(a.manhattan(b), 5);
        assert_eq!(a.chebyshev(b), 3);
        assert_eq!(b.manhattan(b), 0);
    }

    #[test]
    fn signum_gives_unit_direction() {
        assert_eq!((Point::new(7, 3) - Point::new(2, 3)).signum(), Point::new(1, 0));
        assert_eq!((Point::new(2, 0) - Point::new(2, 3)).signum(), Point::new(0, -1));
    }

    #[test]
    fn neighbors_order_is_north_east_south_west() {
        let n = Point::new(3, 3).neighbors_4();
        assert_eq!(
            n,
            [
                Point::new(3, 2),
                Point::new(4, 3),
                Point::new(3, 4),
                Point::new(2, 3),
            ]
        );
    }

    #[test]
    fn range_contains_is_half_open() {
        let r = Range::new(0, 0, 3, 2);
        assert_eq!(r.len(), 6);
        assert!(r.contains(Point::ZERO));
        assert!(r.contains(Point::new(2, 1)));
        assert!(!r.contains(Point::new(3, 0)));
        assert!(!r.contains(Point::new(0, 2)));
        assert!(!r.contains(Point::new(-1, 0)));
    }

    #[test]
    fn range_iter_is_row_major() {
        let pts: Vec<_> = Range::new(1, 0, 3, 2).iter().collect();
        assert_eq!(
            pts,
            vec![
                Point::new(1, 0),
                Point::new(2, 0),
                Point::new(1, 1),
                Point::new(2, 1),
            ]
        );
    }

    #[test]
    fn inverted_range_is_empty() {
        let r = Range::new(3, 3, 0, 0);
        assert!(r.is_empty());
        assert_eq!(r.iter().count(), 0);
    }
}
