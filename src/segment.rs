//! Stroked line segments, the unit both generators produce and the renderer draws

use crate::geometry::Point;

/// 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Multiply the color channels by `factor`, clamped to 0..=255.
    /// Alpha is left as is.
    pub fn scaled(self, factor: f32) -> Color {
        let scale = |c: u8| -> u8 { (c as f32 * factor).round().clamp(0.0, 255.0) as u8 };
        Color {
            r: scale(self.r),
            g: scale(self.g),
            b: scale(self.b),
            a: self.a,
        }
    }
}

/// A straight stroke from `start` to `end`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
    /// Stroke width in pixels, always >= 1
    pub width: u32,
    pub color: Color,
}

impl Segment {
    pub fn new(start: Point, end: Point, width: u32, color: Color) -> Self {
        Self {
            start,
            end,
            width: width.max(1),
            color,
        }
    }
}

/// Segments in draw order; later entries paint over earlier ones
pub type SegmentList = Vec<Segment>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaled_darkens_white() {
        let c = Color::WHITE.scaled(0.8);
        assert_eq!(c, Color::rgb(204, 204, 204));
    }

    #[test]
    fn test_scaled_saturates() {
        assert_eq!(Color::WHITE.scaled(2.0), Color::WHITE);
        assert_eq!(Color::rgb(10, 20, 30).scaled(-1.0), Color::BLACK);
        assert_eq!(Color::rgb(10, 20, 30).scaled(f32::NAN).r, 0);
    }

    #[test]
    fn test_scaled_keeps_alpha() {
        let c = Color {
            r: 100,
            g: 100,
            b: 100,
            a: 77,
        };
        assert_eq!(c.scaled(0.5).a, 77);
    }

    #[test]
    fn test_segment_width_never_zero() {
        let s = Segment::new(Point::ZERO, Point::new(1.0, 1.0), 0, Color::WHITE);
        assert_eq!(s.width, 1);
    }
}
