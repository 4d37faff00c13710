mod lightning;

pub use lightning::LightningArc;

use crate::display::PixelBuffer;
use crate::geometry::Point;
use crate::segment::Segment;

/// Host interface for anything driven by the frame timer
pub trait Effect {
    /// Pointer moved to `p` (window coordinates). Read by the next redraw.
    fn pointer_moved(&mut self, p: Point);

    /// Draw one complete frame into the buffer (called once per tick)
    fn redraw(&mut self, buffer: &mut PixelBuffer);

    /// Effect name for UI/debugging
    fn name(&self) -> &str;
}

/// Stroke every segment in order, so later segments paint over earlier ones
pub fn draw_segments(buffer: &mut PixelBuffer, segments: &[Segment]) {
    for segment in segments {
        let c = segment.color;
        buffer.line_aa_wide(
            segment.start.x,
            segment.start.y,
            segment.end.x,
            segment.end.y,
            segment.width,
            c.r,
            c.g,
            c.b,
        );
    }
}
