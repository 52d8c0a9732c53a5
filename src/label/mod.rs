//! Container label generation
//!
//! A label is rendered in two stages: [`render`] is a pure function mapping a
//! [`LabelData`] record plus an output size to a list of drawing
//! instructions in device pixels, and [`export`] rasterizes that list into a
//! PNG. Keeping the renderer pure makes the layout testable without touching
//! pixels.

mod export;
mod font;
mod render;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use export::{rasterize, write_png};
pub use render::{Color, DrawOp, LOGICAL_HEIGHT, LOGICAL_WIDTH, render};

/// Data printed on one container label, fetched by permohonan number
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelData {
    /// Approval (permohonan) number
    pub approval_number: String,
    /// 1-based container index
    pub container_index: u32,
    /// Total containers in the request
    pub container_count: u32,
    /// Waste name
    pub waste_name: String,
    /// Hazard category (e.g. "B3")
    pub waste_category: String,
    /// Quantity in this container
    pub quantity: f64,
    /// Quantity unit (e.g. "kg")
    pub unit: String,
    /// Originating department
    pub department: String,
    /// Planned destruction date
    pub destruction_date: String,
    /// Free-form notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl LabelData {
    /// Output filename for this label at a given size:
    /// `label-limbah-<permohonan>-wadah-<n>-<w>x<h>.png`
    #[must_use]
    pub fn filename(&self, size: LabelSize) -> String {
        format!(
            "label-limbah-{}-wadah-{}-{}x{}.png",
            self.approval_number,
            self.container_index,
            size.width(),
            size.height()
        )
    }
}

/// Error for unparseable size strings
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid label size '{0}'; expected one of 800x480, 1200x720, 1600x960")]
pub struct ParseSizeError(String);

/// Selectable output sizes, all the same 5:3 aspect as the logical canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelSize {
    /// 800x480 (logical size)
    #[default]
    Small,
    /// 1200x720
    Medium,
    /// 1600x960
    Large,
}

impl LabelSize {
    /// All selectable sizes
    pub const ALL: [Self; 3] = [Self::Small, Self::Medium, Self::Large];

    /// Output width in pixels
    #[must_use]
    pub const fn width(self) -> u32 {
        match self {
            Self::Small => 800,
            Self::Medium => 1200,
            Self::Large => 1600,
        }
    }

    /// Output height in pixels
    #[must_use]
    pub const fn height(self) -> u32 {
        match self {
            Self::Small => 480,
            Self::Medium => 720,
            Self::Large => 960,
        }
    }

    /// Scale factor relative to the logical canvas
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub const fn factor(self) -> f32 {
        self.width() as f32 / LOGICAL_WIDTH as f32
    }
}

impl std::fmt::Display for LabelSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width(), self.height())
    }
}

impl std::str::FromStr for LabelSize {
    type Err = ParseSizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "800x480" => Ok(Self::Small),
            "1200x720" => Ok(Self::Medium),
            "1600x960" => Ok(Self::Large),
            other => Err(ParseSizeError(other.to_string())),
        }
    }
}
