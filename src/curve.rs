//! Quadratic Bezier "spark" lead-in, flattened into straight segments

use crate::geometry::Point;
use crate::segment::{Color, Segment, SegmentList};

/// Samples per unit of t; the polyline has this many points
pub const CURVE_STEPS: u32 = 100;
pub const CURVE_WIDTH: u32 = 3;

/// Evaluate `p0·(1−t)² + 2·p1·t·(1−t) + p2·t²`.
///
/// The doubled middle term makes `p1` the true control point of a standard
/// quadratic Bezier.
#[inline]
pub fn quadratic_point(p0: Point, p1: Point, p2: Point, t: f32) -> Point {
    let control = p1 * 2.0;
    let u = 1.0 - t;
    p0 * (u * u) + control * (t * u) + p2 * (t * t)
}

/// Flatten the curve into `CURVE_STEPS - 1` white segments of width 3.
///
/// Sampling is half-open: t runs 0.00, 0.01, ..., 0.99, so the last segment
/// ends just short of `p2`. Use [`render_quadratic_closed`] to reach it.
pub fn render_quadratic(p0: Point, p1: Point, p2: Point) -> SegmentList {
    let mut segments = Vec::with_capacity(CURVE_STEPS as usize);
    let mut prev = p0;

    for step in 1..CURVE_STEPS {
        let t = step as f32 / CURVE_STEPS as f32;
        let pos = quadratic_point(p0, p1, p2, t);
        segments.push(Segment::new(prev, pos, CURVE_WIDTH, Color::WHITE));
        prev = pos;
    }

    segments
}

/// Like [`render_quadratic`] plus a closing segment that ends exactly on `p2`
pub fn render_quadratic_closed(p0: Point, p1: Point, p2: Point) -> SegmentList {
    let mut segments = render_quadratic(p0, p1, p2);
    let prev = segments.last().map_or(p0, |s| s.end);
    segments.push(Segment::new(prev, p2, CURVE_WIDTH, Color::WHITE));
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spark() -> (Point, Point, Point) {
        (
            Point::new(0.0, 500.0),
            Point::new(0.8 * 600.0, 500.0),
            Point::new(600.0, 400.0),
        )
    }

    #[test]
    fn test_segment_count_and_style() {
        let (p0, p1, p2) = spark();
        let curve = render_quadratic(p0, p1, p2);
        assert_eq!(curve.len(), 99);
        for segment in &curve {
            assert_eq!(segment.width, 3);
            assert_eq!(segment.color, Color::WHITE);
        }
    }

    #[test]
    fn test_first_sample_is_p0() {
        let points = [
            Point::new(0.0, 500.0),
            Point::new(-13.25, 7.5),
            Point::new(1e6, -1e6),
            Point::new(0.1, 0.2),
        ];
        for &p0 in &points {
            let curve = render_quadratic(p0, Point::new(300.0, 20.0), Point::new(50.0, 60.0));
            assert_eq!(curve[0].start, p0);
        }
    }

    #[test]
    fn test_polyline_is_connected() {
        let (p0, p1, p2) = spark();
        let curve = render_quadratic(p0, p1, p2);
        for pair in curve.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
    }

    #[test]
    fn test_stops_short_of_p2() {
        let (p0, p1, p2) = spark();
        let curve = render_quadratic(p0, p1, p2);
        let last = curve[curve.len() - 1].end;
        assert_ne!(last, p2);
        assert!((p2 - last).length() < 15.0);
        assert_eq!(last, quadratic_point(p0, p1, p2, 0.99));
    }

    #[test]
    fn test_closed_reaches_p2() {
        let (p0, p1, p2) = spark();
        let curve = render_quadratic_closed(p0, p1, p2);
        assert_eq!(curve.len(), 100);
        assert_eq!(curve[curve.len() - 1].end, p2);
        assert_eq!(curve[98].end, curve[99].start);
    }

    #[test]
    fn test_quadratic_point_endpoints() {
        let (p0, p1, p2) = spark();
        assert_eq!(quadratic_point(p0, p1, p2, 0.0), p0);
        assert_eq!(quadratic_point(p0, p1, p2, 1.0), p2);
    }

    #[test]
    fn test_control_point_pulls_curve() {
        // With p1 as the control point, the t=0.5 sample is (p0 + 2·p1 + p2) / 4
        let (p0, p1, p2) = spark();
        let mid = quadratic_point(p0, p1, p2, 0.5);
        let expected = (p0 + p1 * 2.0 + p2) / 4.0;
        assert!((mid.x - expected.x).abs() < 1e-3);
        assert!((mid.y - expected.y).abs() < 1e-3);
    }
}
