//! Label layout: pure mapping from label data to drawing instructions
//!
//! The layout is expressed on a logical 800x480 canvas and scaled to the
//! requested output size. The function has no side effects; rasterization
//! happens in `export`.

use super::font;
use super::{LabelData, LabelSize};

/// Logical canvas width in pixels
pub const LOGICAL_WIDTH: u32 = 800;

/// Logical canvas height in pixels
pub const LOGICAL_HEIGHT: u32 = 480;

/// Solid RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub u8, pub u8, pub u8);

/// White background
pub const WHITE: Color = Color(255, 255, 255);
/// Ink
pub const BLACK: Color = Color(20, 20, 20);
/// Hazard-band yellow
pub const YELLOW: Color = Color(255, 204, 0);
/// Footer red
pub const RED: Color = Color(190, 30, 30);

/// One drawing instruction, in device pixels
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawOp {
    /// Filled rectangle
    FillRect {
        /// Left edge
        x: u32,
        /// Top edge
        y: u32,
        /// Width
        w: u32,
        /// Height
        h: u32,
        /// Fill color
        color: Color,
    },
    /// Rectangle outline
    StrokeRect {
        /// Left edge
        x: u32,
        /// Top edge
        y: u32,
        /// Width
        w: u32,
        /// Height
        h: u32,
        /// Stroke weight
        weight: u32,
        /// Stroke color
        color: Color,
    },
    /// Text run in the embedded 5x7 font
    Text {
        /// Left edge of the first glyph
        x: u32,
        /// Top edge of the glyph row
        y: u32,
        /// Integer glyph scale
        scale: u32,
        /// Text color
        color: Color,
        /// The text (rendered uppercase)
        text: String,
    },
}

/// Scaling helper from logical to device pixels
#[derive(Debug, Clone, Copy)]
struct Scaler(f32);

impl Scaler {
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn px(self, logical: u32) -> u32 {
        (logical as f32 * self.0).round() as u32
    }
}

/// Render the label as a list of drawing instructions.
///
/// Pure: the same data and size always produce the same list.
#[must_use]
pub fn render(label: &LabelData, size: LabelSize) -> Vec<DrawOp> {
    let s = Scaler(size.factor());
    let glyph = s.px(1).max(1);
    let mut ops = Vec::new();

    // Background and outer border
    ops.push(DrawOp::FillRect {
        x: 0,
        y: 0,
        w: size.width(),
        h: size.height(),
        color: WHITE,
    });
    ops.push(DrawOp::StrokeRect {
        x: 0,
        y: 0,
        w: size.width(),
        h: size.height(),
        weight: s.px(4),
        color: BLACK,
    });

    // Hazard header band
    ops.push(DrawOp::FillRect {
        x: 0,
        y: 0,
        w: size.width(),
        h: s.px(72),
        color: YELLOW,
    });
    let title = format!("LABEL LIMBAH {}", label.waste_category);
    let title_w = font::text_width(&title, 4 * glyph);
    ops.push(DrawOp::Text {
        x: size.width().saturating_sub(title_w) / 2,
        y: s.px(22),
        scale: 4 * glyph,
        color: BLACK,
        text: title,
    });

    // Wadah counter box, top-right under the band
    let wadah = format!("WADAH {}/{}", label.container_index, label.container_count);
    ops.push(DrawOp::StrokeRect {
        x: s.px(592),
        y: s.px(92),
        w: s.px(184),
        h: s.px(48),
        weight: s.px(2),
        color: BLACK,
    });
    ops.push(DrawOp::Text {
        x: s.px(608),
        y: s.px(106),
        scale: 3 * glyph,
        color: BLACK,
        text: wadah,
    });

    // Field rows
    let quantity = format!("{} {}", trim_quantity(label.quantity), label.unit);
    let rows: [(&str, &str); 6] = [
        ("PERMOHONAN", label.approval_number.as_str()),
        ("JENIS LIMBAH", label.waste_name.as_str()),
        ("KATEGORI", label.waste_category.as_str()),
        ("JUMLAH", quantity.as_str()),
        ("ASAL", label.department.as_str()),
        ("TANGGAL", label.destruction_date.as_str()),
    ];
    let mut y = 100;
    for (name, value) in rows {
        ops.push(DrawOp::Text {
            x: s.px(24),
            y: s.px(y),
            scale: 3 * glyph,
            color: BLACK,
            text: name.to_string(),
        });
        ops.push(DrawOp::Text {
            x: s.px(260),
            y: s.px(y),
            scale: 3 * glyph,
            color: BLACK,
            text: format!(": {value}"),
        });
        y += 44;
    }

    if let Some(notes) = &label.notes {
        ops.push(DrawOp::Text {
            x: s.px(24),
            y: s.px(y),
            scale: 2 * glyph,
            color: BLACK,
            text: format!("CATATAN: {notes}"),
        });
    }

    // Footer band
    let footer_h = 56;
    ops.push(DrawOp::FillRect {
        x: 0,
        y: s.px(LOGICAL_HEIGHT - footer_h),
        w: size.width(),
        h: s.px(footer_h),
        color: RED,
    });
    let footer = "UNTUK DIMUSNAHKAN - BERITA ACARA PEMUSNAHAN";
    let footer_w = font::text_width(footer, 2 * glyph);
    ops.push(DrawOp::Text {
        x: size.width().saturating_sub(footer_w) / 2,
        y: s.px(LOGICAL_HEIGHT - footer_h + 20),
        scale: 2 * glyph,
        color: WHITE,
        text: footer.to_string(),
    });

    ops
}

/// Format a quantity without a trailing ".0"
fn trim_quantity(quantity: f64) -> String {
    if (quantity.fract()).abs() < f64::EPSILON {
        #[allow(clippy::cast_possible_truncation)]
        let whole = quantity as i64;
        whole.to_string()
    } else {
        format!("{quantity}")
    }
}
