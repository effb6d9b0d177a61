//! Geometric primitives for rink diagrams.
//!
//! This module provides the small set of geometric types used throughout
//! Rinkdraw, both in the logical rink coordinate space and in surface pixels.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate
//! - [`Size`] - Width and height dimensions
//! - [`Bounds`] - An axis-aligned rectangle defined by minimum and maximum coordinates
//!
//! # Coordinate System
//!
//! Rinkdraw uses a coordinate system consistent with SVG:
//!
//! ```text
//!   (0,0) ────────► +X   (along the rink length)
//!     │
//!     │
//!     ▼
//!    +Y                  (across the rink width)
//! ```

/// A 2D point.
///
/// # Examples
///
/// ```
/// # use rinkdraw_core::geometry::Point;
/// let p1 = Point::new(10.0, 20.0);
/// let p2 = Point::new(5.0, 5.0);
///
/// let sum = p1.add_point(p2);
/// assert_eq!(sum.x(), 15.0);
/// assert_eq!(sum.y(), 25.0);
///
/// assert_eq!(p1.sub_point(p2), Point::new(5.0, 15.0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Adds another point to this point, returning a new point.
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Subtracts another point from this point, returning a new point
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Calculates the hypotenuse (Euclidean distance from origin)
    pub fn hypot(self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Euclidean distance to another point
    pub fn distance(self, other: Point) -> f32 {
        other.sub_point(self).hypot()
    }

    /// Multiplies both coordinates by the given factor.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rinkdraw_core::geometry::Point;
    /// let point = Point::new(10.0, 20.0);
    ///
    /// let doubled = point.scale(2.0);
    /// assert_eq!(doubled.x(), 20.0);
    /// assert_eq!(doubled.y(), 40.0);
    /// ```
    pub fn scale(self, factor: f32) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    /// Clamps both coordinates into the given bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rinkdraw_core::geometry::{Bounds, Point, Size};
    /// let area = Bounds::new_from_top_left(Point::default(), Size::new(200.0, 100.0));
    ///
    /// let clamped = Point::new(250.0, -4.0).clamp_to(area);
    /// assert_eq!(clamped, Point::new(200.0, 0.0));
    /// ```
    pub fn clamp_to(self, bounds: Bounds) -> Self {
        Self {
            x: self.x.clamp(bounds.min_x, bounds.max_x),
            y: self.y.clamp(bounds.min_y, bounds.max_y),
        }
    }

    /// Converts a point and size into a bounds rectangle
    ///
    /// The point is treated as the center of the bounds.
    pub fn to_bounds(self, size: Size) -> Bounds {
        Bounds::new_from_center(self, size)
    }
}

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns true if either dimension is zero or negative, or not finite.
    ///
    /// Nothing can be drawn into an empty size.
    pub fn is_empty(self) -> bool {
        !(self.width.is_finite() && self.height.is_finite())
            || self.width <= 0.0
            || self.height <= 0.0
    }
}

/// An axis-aligned rectangle with minimum and maximum coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Creates a new bounds from a center point and a size
    pub fn new_from_center(center: Point, size: Size) -> Self {
        let half_width = size.width / 2.0;
        let half_height = size.height / 2.0;
        Self {
            min_x: center.x - half_width,
            min_y: center.y - half_height,
            max_x: center.x + half_width,
            max_y: center.y + half_height,
        }
    }

    /// Creates a new bounds from a top-left point and a size
    pub fn new_from_top_left(top_left: Point, size: Size) -> Self {
        Self {
            min_x: top_left.x,
            min_y: top_left.y,
            max_x: top_left.x + size.width,
            max_y: top_left.y + size.height,
        }
    }

    /// Creates the smallest bounds containing both corner points.
    ///
    /// The corners may be given in any order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rinkdraw_core::geometry::{Bounds, Point};
    /// let bounds = Bounds::from_corners(Point::new(80.0, 60.0), Point::new(60.0, 40.0));
    /// assert_eq!(bounds.min_x(), 60.0);
    /// assert_eq!(bounds.min_y(), 40.0);
    /// assert_eq!(bounds.width(), 20.0);
    /// assert_eq!(bounds.height(), 20.0);
    /// ```
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            min_x: a.x.min(b.x),
            min_y: a.y.min(b.y),
            max_x: a.x.max(b.x),
            max_y: a.y.max(b.y),
        }
    }

    /// Returns the minimum x-coordinate of the bounds
    pub fn min_x(self) -> f32 {
        self.min_x
    }

    /// Returns the minimum y-coordinate of the bounds
    pub fn min_y(self) -> f32 {
        self.min_y
    }

    /// Returns the maximum x-coordinate of the bounds
    pub fn max_x(self) -> f32 {
        self.max_x
    }

    /// Returns the maximum y-coordinate of the bounds
    pub fn max_y(self) -> f32 {
        self.max_y
    }

    /// Returns the center point of the bounds
    pub fn center(self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// Returns the top-left corner as a Point
    pub fn min_point(self) -> Point {
        Point {
            x: self.min_x,
            y: self.min_y,
        }
    }

    /// Returns the bottom-right corner as a Point
    pub fn max_point(self) -> Point {
        Point {
            x: self.max_x,
            y: self.max_y,
        }
    }

    /// Merges two bounds to create a larger bounds that contains both.
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_new() {
        let point = Point::new(3.5, 4.2);
        assert_eq!(point.x(), 3.5);
        assert_eq!(point.y(), 4.2);
    }

    #[test]
    fn test_point_default() {
        assert_eq!(Point::default(), Point::new(0.0, 0.0));
    }

    #[test]
    fn test_point_add_sub() {
        let p1 = Point::new(5.0, 8.0);
        let p2 = Point::new(2.0, 3.0);
        assert_eq!(p1.add_point(p2), Point::new(7.0, 11.0));
        assert_eq!(p1.sub_point(p2), Point::new(3.0, 5.0));
    }

    #[test]
    fn test_point_distance() {
        let p1 = Point::new(1.0, 1.0);
        let p2 = Point::new(4.0, 5.0);
        assert_eq!(p1.distance(p2), 5.0);
        assert_eq!(p2.distance(p1), 5.0);
    }

    #[test]
    fn test_point_clamp_infinite() {
        let area = Bounds::new_from_top_left(Point::default(), Size::new(200.0, 100.0));
        let p = Point::new(f32::INFINITY, f32::NEG_INFINITY);
        assert_eq!(p.clamp_to(area), Point::new(200.0, 0.0));
    }

    #[test]
    fn test_point_clamp_inside_is_unchanged() {
        let area = Bounds::new_from_top_left(Point::default(), Size::new(200.0, 100.0));
        let p = Point::new(20.0, 50.0);
        assert_eq!(p.clamp_to(area), p);
    }

    #[test]
    fn test_size_is_empty() {
        assert!(Size::new(0.0, 100.0).is_empty());
        assert!(Size::new(100.0, 0.0).is_empty());
        assert!(Size::new(-5.0, 10.0).is_empty());
        assert!(Size::new(f32::NAN, 10.0).is_empty());
        assert!(Size::new(f32::INFINITY, 10.0).is_empty());
        assert!(!Size::new(1.0, 1.0).is_empty());
    }

    #[test]
    fn test_bounds_from_center() {
        let bounds = Bounds::new_from_center(Point::new(10.0, 10.0), Size::new(4.0, 6.0));
        assert_eq!(bounds.min_x(), 8.0);
        assert_eq!(bounds.min_y(), 7.0);
        assert_eq!(bounds.max_x(), 12.0);
        assert_eq!(bounds.max_y(), 13.0);
        assert_eq!(bounds.center(), Point::new(10.0, 10.0));
    }

    #[test]
    fn test_bounds_merge() {
        let a = Bounds::from_corners(Point::new(0.0, 0.0), Point::new(10.0, 10.0));
        let b = Bounds::from_corners(Point::new(5.0, -5.0), Point::new(20.0, 5.0));
        let merged = a.merge(&b);
        assert_eq!(merged.min_point(), Point::new(0.0, -5.0));
        assert_eq!(merged.max_point(), Point::new(20.0, 10.0));
    }
}
