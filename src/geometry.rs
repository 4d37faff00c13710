//! 2D point math shared by the bolt and curve generators

use std::ops::{Add, Div, Mul, Sub};

/// Vectors shorter than this normalize to zero instead of dividing by ~0
const NORMALIZE_EPSILON: f32 = 0.0001;

/// A point (or vector) in 2D space
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Halfway point between `a` and `b`
    #[inline]
    pub fn midpoint(a: Point, b: Point) -> Point {
        (a + b) / 2.0
    }

    #[inline]
    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Unit vector in the same direction, or `Point::ZERO` if the vector is too short
    #[inline]
    pub fn normalized(self) -> Point {
        let len = self.length();
        if len > NORMALIZE_EPSILON {
            self / len
        } else {
            Point::ZERO
        }
    }

    /// Rotated by +90 degrees
    #[inline]
    pub fn perpendicular(self) -> Point {
        Point::new(-self.y, self.x)
    }

    /// Rotated counter-clockwise by `angle` radians
    #[inline]
    pub fn rotated(self, angle: f32) -> Point {
        let (sin, cos) = angle.sin_cos();
        Point::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Point {
    type Output = Point;

    fn mul(self, rhs: f32) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f32> for Point {
    type Output = Point;

    fn div(self, rhs: f32) -> Point {
        Point::new(self.x / rhs, self.y / rhs)
    }
}
