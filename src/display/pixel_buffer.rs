use super::{DEFAULT_HEIGHT, DEFAULT_WIDTH};

// ============================================================================
// Utility Functions
// ============================================================================

/// Alpha blend a single color channel
/// Uses fast approximation: (x + 1 + (x >> 8)) >> 8 instead of x / 255
#[inline]
fn blend_channel(src: u8, dst: u8, alpha: u16) -> u8 {
    let result = src as u16 * alpha + dst as u16 * (255 - alpha);
    ((result + 1 + (result >> 8)) >> 8) as u8
}

/// Write ABGR pixel to slice (RGBA8888 little-endian byte order)
#[inline]
fn write_pixel(dest: &mut [u8], r: u8, g: u8, b: u8) {
    dest[0] = 255; // A
    dest[1] = b; // B
    dest[2] = g; // G
    dest[3] = r; // R
}

/// Coverage (0..=1) to an 8-bit alpha
#[inline]
fn coverage(c: f32) -> u8 {
    (c * 255.0).clamp(0.0, 255.0) as u8
}

/// Bytes needed for a `width` x `height` RGBA buffer
#[inline]
fn byte_len(width: u32, height: u32) -> usize {
    width as usize * height as usize * 4
}

// ============================================================================
// PixelBuffer
// ============================================================================

/// RGBA8888 pixel buffer for software rendering
/// Everything is drawn here first, then uploaded to the window texture
pub struct PixelBuffer {
    pixels: Vec<u8>,
    width: u32,
    height: u32,
}

impl PixelBuffer {
    /// Create a new pixel buffer with default resolution (1280x800)
    pub fn new() -> Self {
        Self::with_size(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }

    /// Create a new pixel buffer with custom resolution
    pub fn with_size(width: u32, height: u32) -> Self {
        Self {
            pixels: vec![0; byte_len(width, height)],
            width,
            height,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Check if coordinates are within bounds
    #[inline]
    fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32
    }

    /// Calculate byte offset for pixel at (x, y)
    #[inline]
    fn pixel_index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }

    /// Clear to an opaque solid color
    pub fn clear(&mut self, r: u8, g: u8, b: u8) {
        for chunk in self.pixels.chunks_exact_mut(4) {
            write_pixel(chunk, r, g, b);
        }
    }

    /// Set a single pixel (bounds checked)
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, r: u8, g: u8, b: u8) {
        if self.in_bounds(x, y) {
            let idx = self.pixel_index(x as u32, y as u32);
            write_pixel(&mut self.pixels[idx..idx + 4], r, g, b);
        }
    }

    /// Set pixel with alpha blending
    #[inline]
    pub fn blend_pixel(&mut self, x: i32, y: i32, r: u8, g: u8, b: u8, a: u8) {
        if self.in_bounds(x, y) {
            let idx = self.pixel_index(x as u32, y as u32);
            let alpha = a as u16;
            self.pixels[idx] = 255; // A - always opaque
            self.pixels[idx + 1] = blend_channel(b, self.pixels[idx + 1], alpha);
            self.pixels[idx + 2] = blend_channel(g, self.pixels[idx + 2], alpha);
            self.pixels[idx + 3] = blend_channel(r, self.pixels[idx + 3], alpha);
        }
    }

    /// Read a pixel from the buffer (bounds checked)
    /// Returns None if coordinates are out of bounds
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<(u8, u8, u8)> {
        if self.in_bounds(x, y) {
            let idx = self.pixel_index(x as u32, y as u32);
            Some((
                self.pixels[idx + 3], // R
                self.pixels[idx + 2], // G
                self.pixels[idx + 1], // B
            ))
        } else {
            None
        }
    }

    /// Get raw bytes for texture upload
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    // ========================================================================
    // Anti-aliased Drawing
    // Composes: blend_pixel
    // ========================================================================

    /// Plot with x/y swapped back for steep lines
    #[inline]
    fn plot_aa(&mut self, steep: bool, x: i32, y: i32, r: u8, g: u8, b: u8, c: f32) {
        if steep {
            self.blend_pixel(y, x, r, g, b, coverage(c));
        } else {
            self.blend_pixel(x, y, r, g, b, coverage(c));
        }
    }

    /// Anti-aliased line using Xiaolin Wu's algorithm.
    /// Accepts f32 endpoints for subpixel precision.
    pub fn line_aa(
        &mut self,
        mut x0: f32,
        mut y0: f32,
        mut x1: f32,
        mut y1: f32,
        r: u8,
        g: u8,
        b: u8,
    ) {
        if !(x0.is_finite() && y0.is_finite() && x1.is_finite() && y1.is_finite()) {
            return;
        }

        let steep = (y1 - y0).abs() > (x1 - x0).abs();
        if steep {
            std::mem::swap(&mut x0, &mut y0);
            std::mem::swap(&mut x1, &mut y1);
        }
        if x0 > x1 {
            std::mem::swap(&mut x0, &mut x1);
            std::mem::swap(&mut y0, &mut y1);
        }

        let dx = x1 - x0;
        let dy = y1 - y0;
        let gradient = if dx.abs() < 0.001 { 1.0 } else { dy / dx };

        // First endpoint
        let xend = x0.round();
        let yend = y0 + gradient * (xend - x0);
        let xgap = 1.0 - (x0 + 0.5).fract();
        let xpxl1 = xend as i32;
        let ypxl1 = yend.floor() as i32;
        let fpart = yend - yend.floor();
        self.plot_aa(steep, xpxl1, ypxl1, r, g, b, (1.0 - fpart) * xgap);
        self.plot_aa(steep, xpxl1, ypxl1.saturating_add(1), r, g, b, fpart * xgap);
        let intery = yend + gradient;

        // Second endpoint
        let xend = x1.round();
        let yend = y1 + gradient * (xend - x1);
        let xgap = (x1 + 0.5).fract();
        let xpxl2 = xend as i32;
        let ypxl2 = yend.floor() as i32;
        let fpart = yend - yend.floor();
        self.plot_aa(steep, xpxl2, ypxl2, r, g, b, (1.0 - fpart) * xgap);
        self.plot_aa(steep, xpxl2, ypxl2.saturating_add(1), r, g, b, fpart * xgap);

        // Main line body, clipped to the major axis of the buffer
        let major_len = (if steep { self.height } else { self.width }) as i32;
        let first = xpxl1.saturating_add(1).max(0);
        let last = xpxl2.min(major_len);
        let mut intery = intery + gradient * first.saturating_sub(xpxl1.saturating_add(1)) as f32;
        for x in first..last {
            let ipart = intery.floor();
            let fpart = intery - ipart;
            self.plot_aa(steep, x, ipart as i32, r, g, b, 1.0 - fpart);
            self.plot_aa(steep, x, (ipart as i32).saturating_add(1), r, g, b, fpart);
            intery += gradient;
        }
    }

    /// Anti-aliased line with a stroke width, drawn as `width` parallel
    /// Wu lines spaced one pixel apart across the line's normal.
    pub fn line_aa_wide(
        &mut self,
        x0: f32,
        y0: f32,
        x1: f32,
        y1: f32,
        width: u32,
        r: u8,
        g: u8,
        b: u8,
    ) {
        let dx = x1 - x0;
        let dy = y1 - y0;
        let len = (dx * dx + dy * dy).sqrt();

        if width <= 1 || len < 0.001 || !len.is_finite() {
            self.line_aa(x0, y0, x1, y1, r, g, b);
            return;
        }

        // Perpendicular unit vector
        let nx = -dy / len;
        let ny = dx / len;

        let half = (width - 1) as f32 / 2.0;
        for i in 0..width {
            let offset = i as f32 - half;
            let ox = nx * offset;
            let oy = ny * offset;
            self.line_aa(x0 + ox, y0 + oy, x1 + ox, y1 + oy, r, g, b);
        }
    }
}

impl Default for PixelBuffer {
    fn default() -> Self {
        Self::new()
    }
}
