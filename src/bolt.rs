//! Fractal lightning path generator
//!
//! A bolt starts as one straight segment. Each round replaces every segment
//! with three: the two halves either side of a jittered midpoint, plus a short
//! darker spur branching off that midpoint. The jitter halves every round, so
//! after K rounds the bolt has 3^K segments and a self-similar jagged outline.

use crate::geometry::Point;
use crate::segment::{Color, Segment, SegmentList};
use rand::Rng;

/// Tuning for [`generate_with`]. `Default` is the classic look.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoltParams {
    /// Number of subdivision rounds (K)
    pub rounds: u32,
    /// Maximum perpendicular jitter in the first round, in pixels
    pub initial_offset: f32,
    /// Branch length relative to the half segment it grows from
    pub length_scale: f32,
    /// Branches deviate from the half segment by up to this many radians
    pub max_branch_angle: f32,
    /// Color multiplier applied to the base color for every branch
    pub branch_darken: f32,
    pub trunk_width: u32,
    pub branch_width: u32,
    pub base_color: Color,
}

impl Default for BoltParams {
    fn default() -> Self {
        Self {
            rounds: 4,
            initial_offset: 50.0,
            length_scale: 0.7,
            max_branch_angle: 0.8,
            branch_darken: 0.8,
            trunk_width: 2,
            branch_width: 1,
            base_color: Color::WHITE,
        }
    }
}

impl BoltParams {
    /// Number of segments a bolt built with these params contains
    pub fn segment_count(&self) -> usize {
        3usize.pow(self.rounds)
    }
}

/// Generate a bolt from `from` to `to` with the default params
pub fn generate<R: Rng + ?Sized>(from: Point, to: Point, rng: &mut R) -> SegmentList {
    generate_with(&BoltParams::default(), from, to, rng)
}

/// Generate a bolt from `from` to `to`
pub fn generate_with<R: Rng + ?Sized>(
    params: &BoltParams,
    from: Point,
    to: Point,
    rng: &mut R,
) -> SegmentList {
    let mut segments = vec![Segment::new(
        from,
        to,
        params.trunk_width,
        params.base_color,
    )];
    let mut offset = params.initial_offset;

    for _ in 0..params.rounds {
        segments = subdivide(&segments, offset, params, rng);
        offset /= 2.0;
    }

    segments
}

/// Run a single subdivision round, returning a new list three times as long.
///
/// For each input segment the output holds, in order: the first half, the
/// second half, then the branch. The halves meet exactly at the displaced
/// midpoint. Halves always take the base color and branches the base color
/// darkened once, whatever the input segment's own color.
pub fn subdivide<R: Rng + ?Sized>(
    segments: &[Segment],
    offset: f32,
    params: &BoltParams,
    rng: &mut R,
) -> SegmentList {
    let mut next = Vec::with_capacity(segments.len() * 3);

    for segment in segments {
        let (start, end) = (segment.start, segment.end);

        // Zero-length segments normalize to zero, so they get no jitter
        let normal = (end - start).normalized().perpendicular();
        let mid = Point::midpoint(start, end) + normal * symmetric(rng, offset);

        next.push(Segment::new(start, mid, params.trunk_width, params.base_color));
        next.push(Segment::new(mid, end, params.trunk_width, params.base_color));

        let angle = symmetric(rng, params.max_branch_angle);
        let branch_end = mid + (mid - start).rotated(angle) * params.length_scale;
        next.push(Segment::new(
            mid,
            branch_end,
            params.branch_width,
            params.base_color.scaled(params.branch_darken),
        ));
    }

    next
}

/// Uniform sample in `[-bound, bound]`
fn symmetric<R: Rng + ?Sized>(rng: &mut R, bound: f32) -> f32 {
    let bound = bound.abs();
    if bound.is_finite() {
        rng.gen_range(-bound..=bound)
    } else {
        0.0
    }
}
