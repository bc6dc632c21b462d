//! Freehand drawing surface
//!
//! A fixed-size raster that pointer gestures are traced into. Between a
//! pointer-down and the matching pointer-up, each new position is joined to
//! the previous one with a straight segment.

use super::payload::ImagePayload;
use crate::error::Result;
use image::{ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;

pub const SURFACE_WIDTH: u32 = 400;
pub const SURFACE_HEIGHT: u32 = 200;

const PEN: Rgba<u8> = Rgba([33, 33, 33, 255]);

/// A pointer position in surface coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }
}

#[derive(Debug, Clone)]
pub struct DrawingSurface {
    raster: RgbaImage,
    last: Option<Point>,
    dirty: bool,
}

impl Default for DrawingSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawingSurface {
    pub fn new() -> Self {
        DrawingSurface {
            raster: RgbaImage::new(SURFACE_WIDTH, SURFACE_HEIGHT),
            last: None,
            dirty: false,
        }
    }

    /// Start a gesture at `point`
    pub fn pointer_down(&mut self, point: Point) {
        self.stamp(point.x as i64, point.y as i64);
        self.last = Some(point);
    }

    /// Continue the active gesture. Ignored when no gesture is active.
    pub fn pointer_move(&mut self, point: Point) {
        let Some(from) = self.last else {
            return;
        };
        self.trace(from, point);
        self.last = Some(point);
    }

    /// End the active gesture
    pub fn pointer_up(&mut self) {
        self.last = None;
    }

    /// Nothing has been drawn since creation or the last clear
    pub fn is_blank(&self) -> bool {
        !self.dirty
    }

    pub fn clear(&mut self) {
        *self = DrawingSurface::new();
    }

    /// PNG snapshot of the raster, or `None` when nothing has been drawn
    pub fn snapshot(&self) -> Result<Option<ImagePayload>> {
        if self.is_blank() {
            return Ok(None);
        }

        let mut bytes = Cursor::new(Vec::new());
        self.raster.write_to(&mut bytes, ImageFormat::Png)?;
        Ok(Some(ImagePayload::from_bytes(
            ImageFormat::Png.to_mime_type(),
            bytes.get_ref(),
        )))
    }

    #[cfg(test)]
    fn is_inked(&self, x: u32, y: u32) -> bool {
        *self.raster.get_pixel(x, y) == PEN
    }

    // Bresenham over the part of the segment that lies on the surface
    fn trace(&mut self, from: Point, to: Point) {
        let Some(((x0, y0), (x1, y1))) = clip_to_surface(from, to) else {
            return;
        };

        let (mut x, mut y) = (x0, y0);
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.stamp(x, y);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    fn stamp(&mut self, x: i64, y: i64) {
        if x < 0 || y < 0 || x >= SURFACE_WIDTH as i64 || y >= SURFACE_HEIGHT as i64 {
            return;
        }
        self.raster.put_pixel(x as u32, y as u32, PEN);
        self.dirty = true;
    }
}

/// Liang-Barsky clip of a segment to the pixel rectangle.
/// Returns `None` when no part of the segment lies on the surface.
fn clip_to_surface(from: Point, to: Point) -> Option<((i64, i64), (i64, i64))> {
    let (x0, y0) = (from.x as f64, from.y as f64);
    let (dx, dy) = (to.x as f64 - x0, to.y as f64 - y0);
    let max_x = (SURFACE_WIDTH - 1) as f64;
    let max_y = (SURFACE_HEIGHT - 1) as f64;

    let mut t0 = 0.0_f64;
    let mut t1 = 1.0_f64;
    for (p, q) in [(-dx, x0), (dx, max_x - x0), (-dy, y0), (dy, max_y - y0)] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }

    let at = |t: f64| ((x0 + t * dx).round() as i64, (y0 + t * dy).round() as i64);
    Some((at(t0), at(t1)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::{engine::general_purpose::STANDARD, Engine as _};

    #[test]
    fn test_new_surface_is_blank() {
        let surface = DrawingSurface::new();
        assert!(surface.is_blank());
        assert!(surface.snapshot().unwrap().is_none());
    }

    #[test]
    fn test_stroke_traces_segment() {
        let mut surface = DrawingSurface::new();
        surface.pointer_down(Point::new(10, 10));
        surface.pointer_move(Point::new(20, 10));
        surface.pointer_up();

        for x in 10..=20 {
            assert!(surface.is_inked(x, 10), "pixel {} not inked", x);
        }
        assert!(!surface.is_inked(21, 10));
        assert!(!surface.is_blank());
    }

    #[test]
    fn test_diagonal_stroke_is_continuous() {
        let mut surface = DrawingSurface::new();
        surface.pointer_down(Point::new(0, 0));
        surface.pointer_move(Point::new(5, 5));
        for i in 0..=5 {
            assert!(surface.is_inked(i, i));
        }
    }

    #[test]
    fn test_move_without_gesture_is_ignored() {
        let mut surface = DrawingSurface::new();
        surface.pointer_move(Point::new(50, 50));
        assert!(surface.is_blank());

        surface.pointer_down(Point::new(1, 1));
        surface.pointer_up();
        surface.pointer_move(Point::new(30, 30));
        assert!(!surface.is_inked(30, 30));
    }

    #[test]
    fn test_points_outside_are_clipped() {
        let mut surface = DrawingSurface::new();
        surface.pointer_down(Point::new(-5, 100));
        assert!(surface.is_blank());
        surface.pointer_move(Point::new(5, 100));
        assert!(surface.is_inked(0, 100));
        assert!(surface.is_inked(5, 100));

        surface.pointer_down(Point::new(500, 500));
        surface.pointer_move(Point::new(600, 500));
    }

    #[test]
    fn test_far_off_endpoints_are_clipped() {
        let mut surface = DrawingSurface::new();
        surface.pointer_down(Point::new(0, 0));
        surface.pointer_move(Point::new(1_100_000_000, 0));
        surface.pointer_up();
        for x in 0..SURFACE_WIDTH {
            assert!(surface.is_inked(x, 0), "pixel {} not inked", x);
        }

        surface.pointer_down(Point::new(i32::MIN, 100));
        surface.pointer_move(Point::new(i32::MAX, 100));
        surface.pointer_up();
        for x in 0..SURFACE_WIDTH {
            assert!(surface.is_inked(x, 100));
        }

        surface.pointer_down(Point::new(50, i32::MAX));
        surface.pointer_move(Point::new(50, i32::MIN));
        for y in 0..SURFACE_HEIGHT {
            assert!(surface.is_inked(50, y));
        }
    }

    #[test]
    fn test_segment_missing_the_surface_draws_nothing() {
        let mut surface = DrawingSurface::new();
        surface.pointer_down(Point::new(i32::MIN, -10));
        surface.pointer_move(Point::new(i32::MAX, -10));
        assert!(surface.is_blank());

        surface.pointer_move(Point::new(i32::MAX, i32::MAX));
        assert!(surface.is_blank());
    }

    #[test]
    fn test_snapshot_is_png_of_surface_size() {
        let mut surface = DrawingSurface::new();
        surface.pointer_down(Point::new(100, 50));
        surface.pointer_move(Point::new(300, 150));
        surface.pointer_up();

        let payload = surface.snapshot().unwrap().unwrap();
        assert_eq!(payload.mime(), Some("image/png"));

        let (_, data) = payload.as_data_uri().split_once(',').unwrap();
        let bytes = STANDARD.decode(data).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!(decoded.width(), SURFACE_WIDTH);
        assert_eq!(decoded.height(), SURFACE_HEIGHT);
    }

    #[test]
    fn test_clear_resets() {
        let mut surface = DrawingSurface::new();
        surface.pointer_down(Point::new(1, 1));
        surface.clear();
        assert!(surface.is_blank());
        assert!(!surface.is_inked(1, 1));
    }
}
