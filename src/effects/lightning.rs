//! Lightning Arc — a jagged bolt from the mouse cursor to a fixed anchor
//!
//! A curved white spark sweeps in from the left edge to the cursor, and a
//! fresh fractal bolt jumps from the cursor to the anchor. Every frame is
//! built from scratch; nothing but the cursor position carries over.

use super::{draw_segments, Effect};
use crate::bolt::{self, BoltParams};
use crate::curve;
use crate::display::PixelBuffer;
use crate::geometry::Point;
use crate::segment::SegmentList;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Where every bolt ends
pub const ANCHOR: Point = Point::new(100.0, 100.0);
/// Where the spark curve starts
pub const SPARK_ORIGIN: Point = Point::new(0.0, 500.0);
/// Spark control point sits on the origin's row at this fraction of the cursor's x
const SPARK_CONTROL_RATIO: f32 = 0.8;
/// Cursor position assumed before the first pointer event
pub const INITIAL_TARGET: Point = Point::new(600.0, 400.0);

pub struct LightningArc {
    target: Point,
    params: BoltParams,
    rng: ChaCha8Rng,
    frames: u64,
}

impl LightningArc {
    pub fn new(seed: u64) -> Self {
        Self::with_params(seed, BoltParams::default())
    }

    pub fn with_params(seed: u64, params: BoltParams) -> Self {
        Self {
            target: INITIAL_TARGET,
            params,
            rng: ChaCha8Rng::seed_from_u64(seed),
            frames: 0,
        }
    }

    pub fn target(&self) -> Point {
        self.target
    }

    /// Frames drawn so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Everything drawn in one frame, spark first then bolt
    pub fn frame_segments(&mut self) -> SegmentList {
        let control = Point::new(SPARK_CONTROL_RATIO * self.target.x, SPARK_ORIGIN.y);
        let mut segments = curve::render_quadratic(SPARK_ORIGIN, control, self.target);
        segments.extend(bolt::generate_with(
            &self.params,
            self.target,
            ANCHOR,
            &mut self.rng,
        ));
        segments
    }
}

impl Effect for LightningArc {
    fn pointer_moved(&mut self, p: Point) {
        if !p.is_finite() {
            log::trace!("ignoring non-finite pointer position {:?}", p);
            return;
        }
        self.target = p;
    }

    fn redraw(&mut self, buffer: &mut PixelBuffer) {
        buffer.clear(0, 0, 0);
        let segments = self.frame_segments();
        draw_segments(buffer, &segments);
        self.frames += 1;
    }

    fn name(&self) -> &str {
        "Lightning Arc"
    }
}
