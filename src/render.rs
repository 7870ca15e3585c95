//! Wifi glyph renderer
//!
//! Draws a fan of concentric arcs over a center dot, colored by status, with a
//! red X badge in the upper right for the error status.

use crate::constants::{geometry, palette};
use crate::raster::{draw_arc, draw_line, fill_circle};
use crate::status::Status;
use anyhow::{Context, Result};
use image::{ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;

/// Everything needed to render one icon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderRequest {
    pub base_size: u32,
    pub status: Status,
    pub scale: u32,
}

impl RenderRequest {
    pub fn new(base_size: u32, status: Status, scale: u32) -> Self {
        RenderRequest {
            base_size,
            status,
            scale,
        }
    }

    /// Edge length of the rendered bitmap in pixels.
    ///
    /// # Panics
    ///
    /// If `base_size * scale` overflows `u32`; see [`Self::checked_actual_size`].
    pub fn actual_size(&self) -> u32 {
        actual_size(self.base_size, self.scale)
    }

    /// Edge length of the rendered bitmap, or `None` if it does not fit in a `u32`
    pub fn checked_actual_size(&self) -> Option<u32> {
        self.base_size.checked_mul(self.scale)
    }

    pub fn render(&self) -> RgbaImage {
        render(self.base_size, self.status, self.scale)
    }
}

fn actual_size(base_size: u32, scale: u32) -> u32 {
    match base_size.checked_mul(scale) {
        Some(size) => size,
        None => panic!("icon size {} x {} overflows u32", base_size, scale),
    }
}

/// Render a `base_size * scale` square icon for `status` on a transparent canvas.
///
/// # Panics
///
/// If `base_size * scale` overflows `u32`. Callers with untrusted sizes should
/// check [`RenderRequest::checked_actual_size`] first.
pub fn render(base_size: u32, status: Status, scale: u32) -> RgbaImage {
    let size = actual_size(base_size, scale);
    let mut img = RgbaImage::from_pixel(size, size, Rgba([0, 0, 0, 0]));

    let center = (size / 2) as f32;
    let radius = size as f32 * geometry::OUTER_RADIUS_RATIO;
    let style = status.style();
    let stroke_width = (size / geometry::STROKE_DIVISOR).max(1);

    for i in 1..=style.arc_count {
        let arc_radius = radius * i as f32 / geometry::ARC_DIVISIONS;
        draw_arc(
            &mut img,
            center,
            center,
            arc_radius,
            geometry::ARC_START_DEGREES,
            geometry::ARC_END_DEGREES,
            stroke_width,
            style.color,
        );
    }

    if status.draws_dot() {
        let dot_radius = (size / geometry::DOT_DIVISOR).max(geometry::MIN_DOT_RADIUS);
        fill_circle(&mut img, center, center, dot_radius as f32, style.color);
    }

    if status.has_error_badge() {
        draw_error_badge(&mut img, center, size, stroke_width);
    }

    img
}

fn draw_error_badge(img: &mut RgbaImage, center: f32, size: u32, stroke_width: u32) {
    let red = Rgba(palette::RED);
    let offset = size as f32 * geometry::BADGE_OFFSET_RATIO;
    let half = size as f32 * geometry::BADGE_SIZE_RATIO / 2.0;
    let (bx, by) = (center + offset, center - offset);

    draw_line(img, (bx - half, by - half), (bx + half, by + half), stroke_width, red);
    draw_line(img, (bx + half, by - half), (bx - half, by + half), stroke_width, red);
}

/// Encode an icon as PNG bytes
pub fn encode_png(img: &RgbaImage) -> Result<Vec<u8>> {
    let mut bytes = Cursor::new(Vec::new());
    img.write_to(&mut bytes, ImageFormat::Png)
        .context("Failed to encode icon as PNG")?;
    Ok(bytes.into_inner())
}

/// Whether the imaging backend was built with PNG encoding
pub fn png_backend_available() -> bool {
    ImageFormat::Png.writing_enabled()
}
