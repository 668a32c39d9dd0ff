//! Geometry helpers shared by the layout types and policies.
//!
//! Coordinates follow PDF user space: origin at the bottom-left of the page,
//! `y` grows upward, so `y1 > y0` for any non-degenerate box.

/// A 2D point (x, y).
pub type Point = (f64, f64);

/// A rectangle defined by (x0, y0, x1, y1) where (x0, y0) is the bottom-left
/// and (x1, y1) the top-right corner.
pub type Rect = (f64, f64, f64, f64);

/// Floating-point infinity for bounding box accumulation.
const INF_F64: f64 = f64::MAX;

/// Trait for objects that have a bounding box.
pub trait HasBBox {
    fn x0(&self) -> f64;
    fn y0(&self) -> f64;
    fn x1(&self) -> f64;
    fn y1(&self) -> f64;

    fn bbox(&self) -> Rect {
        (self.x0(), self.y0(), self.x1(), self.y1())
    }

    fn width(&self) -> f64 {
        self.x1() - self.x0()
    }

    fn height(&self) -> f64 {
        self.y1() - self.y0()
    }

    /// Returns true unless the two boxes are separated on at least one axis.
    ///
    /// Touching edges count as overlap.
    fn overlaps(&self, other: &dyn HasBBox) -> bool {
        !(self.y0() > other.y1()
            || self.y1() < other.y0()
            || self.x0() > other.x1()
            || self.x1() < other.x0())
    }
}

impl HasBBox for Rect {
    fn x0(&self) -> f64 {
        self.0
    }
    fn y0(&self) -> f64 {
        self.1
    }
    fn x1(&self) -> f64 {
        self.2
    }
    fn y1(&self) -> f64 {
        self.3
    }
}

impl<T: HasBBox + ?Sized> HasBBox for &T {
    fn x0(&self) -> f64 {
        (**self).x0()
    }
    fn y0(&self) -> f64 {
        (**self).y0()
    }
    fn x1(&self) -> f64 {
        (**self).x1()
    }
    fn y1(&self) -> f64 {
        (**self).y1()
    }
}

/// Returns the bounding rectangle of a set of points.
pub fn get_bound<I>(pts: I) -> Rect
where
    I: IntoIterator<Item = Point>,
{
    let mut x0 = INF_F64;
    let mut y0 = INF_F64;
    let mut x1 = -INF_F64;
    let mut y1 = -INF_F64;
    for (x, y) in pts {
        x0 = x0.min(x);
        y0 = y0.min(y);
        x1 = x1.max(x);
        y1 = y1.max(y);
    }
    (x0, y0, x1, y1)
}

/// Quantizes a coordinate to an integer bucket of the given width.
///
/// Ties round to even, so `bucket(15.0, 10.0) == 2` and `bucket(25.0, 10.0) == 2`.
#[inline]
pub fn bucket(v: f64, width: f64) -> i64 {
    (v / width).round_ties_even() as i64
}

/// Quantizes a coordinate to tenths of a unit, used to compare rule geometry.
#[inline]
pub fn tenths(v: f64) -> i64 {
    (v * 10.0).round_ties_even() as i64
}

/// Returns true if the rectangle is well-formed (non-negative extent on both axes).
pub fn is_valid_rect(r: Rect) -> bool {
    let (x0, y0, x1, y1) = r;
    x0.is_finite() && y0.is_finite() && x1.is_finite() && y1.is_finite() && x0 <= x1 && y0 <= y1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlap_requires_both_axes() {
        let a: Rect = (0.0, 0.0, 10.0, 10.0);
        assert!(a.overlaps(&(5.0, 5.0, 15.0, 15.0)));
        assert!(a.overlaps(&(10.0, 0.0, 20.0, 10.0)));
        assert!(!a.overlaps(&(11.0, 0.0, 20.0, 10.0)));
        assert!(!a.overlaps(&(0.0, 11.0, 10.0, 20.0)));
    }

    #[test]
    fn bucket_rounds_half_to_even() {
        assert_eq!(bucket(44.0, 10.0), 4);
        assert_eq!(bucket(46.0, 10.0), 5);
        assert_eq!(bucket(15.0, 10.0), 2);
        assert_eq!(bucket(25.0, 10.0), 2);
        assert_eq!(tenths(100.04), 1000);
    }

    #[test]
    fn bound_of_points() {
        let r = get_bound([(3.0, 4.0), (1.0, 9.0), (5.0, -1.0)]);
        assert_eq!(r, (1.0, -1.0, 5.0, 9.0));
    }
}
