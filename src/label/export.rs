//! Rasterization of drawing instructions into PNG files

use std::path::{Path, PathBuf};

use image::{Rgba, RgbaImage};

use super::font;
use super::render::{Color, DrawOp};
use super::{LabelData, LabelSize, render};

const fn pixel(color: Color) -> Rgba<u8> {
    Rgba([color.0, color.1, color.2, 255])
}

fn fill_rect(image: &mut RgbaImage, x: u32, y: u32, w: u32, h: u32, color: Color) {
    let px = pixel(color);
    let x_end = (x + w).min(image.width());
    let y_end = (y + h).min(image.height());
    for yy in y..y_end {
        for xx in x..x_end {
            image.put_pixel(xx, yy, px);
        }
    }
}

fn stroke_rect(image: &mut RgbaImage, x: u32, y: u32, w: u32, h: u32, weight: u32, color: Color) {
    let weight = weight.max(1);
    // Four edge bands
    fill_rect(image, x, y, w, weight, color);
    fill_rect(image, x, (y + h).saturating_sub(weight), w, weight, color);
    fill_rect(image, x, y, weight, h, color);
    fill_rect(image, (x + w).saturating_sub(weight), y, weight, h, color);
}

fn draw_text(image: &mut RgbaImage, x: u32, y: u32, scale: u32, color: Color, text: &str) {
    let scale = scale.max(1);
    let mut cursor = x;
    for c in text.chars() {
        let rows = font::glyph(c);
        for (row, bits) in rows.iter().enumerate() {
            for col in 0..font::GLYPH_WIDTH {
                if bits & (1 << (font::GLYPH_WIDTH - 1 - col)) != 0 {
                    let px = cursor + col * scale;
                    let py = y + u32::try_from(row).unwrap_or(0) * scale;
                    fill_rect(image, px, py, scale, scale, color);
                }
            }
        }
        cursor += font::ADVANCE * scale;
    }
}

/// Execute drawing instructions into an RGBA raster
#[must_use]
pub fn rasterize(ops: &[DrawOp], width: u32, height: u32) -> RgbaImage {
    let mut image = RgbaImage::from_pixel(width, height, Rgba([255, 255, 255, 255]));

    for op in ops {
        match op {
            DrawOp::FillRect { x, y, w, h, color } => {
                fill_rect(&mut image, *x, *y, *w, *h, *color);
            },
            DrawOp::StrokeRect {
                x,
                y,
                w,
                h,
                weight,
                color,
            } => {
                stroke_rect(&mut image, *x, *y, *w, *h, *weight, *color);
            },
            DrawOp::Text {
                x,
                y,
                scale,
                color,
                text,
            } => {
                draw_text(&mut image, *x, *y, *scale, *color, text);
            },
        }
    }

    image
}

/// Render a label and write it as a PNG into `dir`.
///
/// Returns the written path, named
/// `label-limbah-<permohonan>-wadah-<n>-<w>x<h>.png`.
pub fn write_png(label: &LabelData, size: LabelSize, dir: &Path) -> anyhow::Result<PathBuf> {
    let ops = render(label, size);
    let image = rasterize(&ops, size.width(), size.height());

    std::fs::create_dir_all(dir)?;
    let path = dir.join(label.filename(size));
    image.save(&path)?;
    Ok(path)
}
