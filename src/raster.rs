//! Pixel-level drawing primitives on an RGBA canvas
//!
//! Coordinates are in image space: x grows right, y grows down, and pixel
//! `(x, y)` is sampled at its integer position. Anything outside the canvas is
//! clipped, so callers can pass shapes that overhang the edges.

use image::{Rgba, RgbaImage};
use std::ops::Range;

/// Pixel indices along one axis covered by `[min, max]`, clipped to `0..limit`
fn clip_range(min: f32, max: f32, limit: u32) -> Range<u32> {
    let start = min.floor().max(0.0) as u32;
    let end = (max.ceil() + 1.0).clamp(0.0, limit as f32) as u32;
    start.min(end)..end
}

/// Angle of `(dx, dy)` in degrees, clockwise from +x, normalized to `[0, 360)`
fn angle_degrees(dx: f32, dy: f32) -> f32 {
    let angle = dy.atan2(dx).to_degrees();
    if angle < 0.0 {
        angle + 360.0
    } else {
        angle
    }
}

/// Stroke a circular arc of `radius` around `(cx, cy)` between two angles.
///
/// The stroke grows inward from the nominal radius by `width` pixels. Angles
/// are in degrees, clockwise from +x, so 270 is straight up.
#[allow(clippy::too_many_arguments)]
pub fn draw_arc(
    img: &mut RgbaImage,
    cx: f32,
    cy: f32,
    radius: f32,
    start_degrees: f32,
    end_degrees: f32,
    width: u32,
    color: Rgba<u8>,
) {
    if radius <= 0.0 || width == 0 {
        return;
    }

    let inner = radius - width as f32;
    let xs = clip_range(cx - radius, cx + radius, img.width());
    let ys = clip_range(cy - radius, cy + radius, img.height());

    for py in ys {
        for px in xs.clone() {
            let dx = px as f32 - cx;
            let dy = py as f32 - cy;
            let dist = (dx * dx + dy * dy).sqrt();
            if dist > radius || dist <= inner {
                continue;
            }

            let angle = angle_degrees(dx, dy);
            if angle >= start_degrees && angle <= end_degrees {
                img.put_pixel(px, py, color);
            }
        }
    }
}

/// Fill the circle inscribed in the box `[cx - radius, cy - radius, cx + radius, cy + radius]`
pub fn fill_circle(img: &mut RgbaImage, cx: f32, cy: f32, radius: f32, color: Rgba<u8>) {
    if radius < 0.0 {
        return;
    }

    let r_sq = radius * radius;
    let xs = clip_range(cx - radius, cx + radius, img.width());
    let ys = clip_range(cy - radius, cy + radius, img.height());

    for py in ys {
        for px in xs.clone() {
            let dx = px as f32 - cx;
            let dy = py as f32 - cy;
            if dx * dx + dy * dy <= r_sq {
                img.put_pixel(px, py, color);
            }
        }
    }
}

/// Stroke the segment from `from` to `to` with a line `width` pixels wide
pub fn draw_line(
    img: &mut RgbaImage,
    from: (f32, f32),
    to: (f32, f32),
    width: u32,
    color: Rgba<u8>,
) {
    if width == 0 {
        return;
    }

    let half = (width as f32 / 2.0).max(0.5);
    let (x0, y0) = from;
    let (x1, y1) = to;
    let xs = clip_range(x0.min(x1) - half, x0.max(x1) + half, img.width());
    let ys = clip_range(y0.min(y1) - half, y0.max(y1) + half, img.height());

    let seg_x = x1 - x0;
    let seg_y = y1 - y0;
    let len_sq = seg_x * seg_x + seg_y * seg_y;

    for py in ys {
        for px in xs.clone() {
            let (qx, qy) = (px as f32, py as f32);

            // Closest point on the segment
            let t = if len_sq > 0.0 {
                (((qx - x0) * seg_x + (qy - y0) * seg_y) / len_sq).clamp(0.0, 1.0)
            } else {
                0.0
            };
            let dx = qx - (x0 + t * seg_x);
            let dy = qy - (y0 + t * seg_y);

            if dx * dx + dy * dy <= half * half {
                img.put_pixel(px, py, color);
            }
        }
    }
}
