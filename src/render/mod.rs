// src/render/mod.rs
use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::error::ChartResult;
use crate::strategy::StrategyKind;

pub mod chart;
pub mod recorder;
pub mod svg;

pub use chart::{ChartLayout, PayoffChart};
pub use recorder::{DrawCommand, RecordingTarget};
pub use svg::{render_svg, SvgTarget};

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ChartLayers: u32 {
        const NONE    = 0;
        const TITLE   = 1 << 0;
        const AXES    = 1 << 1;
        const TICKS   = 1 << 2;
        const REGIONS = 1 << 3;
        const CURVE   = 1 << 4;
        const MARKERS = 1 << 5;
        const ALL = Self::TITLE.bits()
            | Self::AXES.bits()
            | Self::TICKS.bits()
            | Self::REGIONS.bits()
            | Self::CURVE.bits()
            | Self::MARKERS.bits();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// 8-bit RGBA colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn alpha(&self) -> f64 {
        self.a as f64 / 255.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub color: Rgba,
    pub width: u32,
}

impl Stroke {
    pub fn new(color: Rgba, width: u32) -> Self {
        Self { color, width }
    }
}

/// Colours used for each chart element
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    pub background: Rgba,
    pub axes: Rgba,
    pub text: Rgba,
    pub profit_fill: Rgba,
    pub loss_fill: Rgba,
    pub strike: Rgba,
    pub break_even: Rgba,
    pub call_curve: Rgba,
    pub put_curve: Rgba,
    pub straddle_curve: Rgba,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgba::rgb(255, 255, 255),
            axes: Rgba::rgb(0, 0, 0),
            text: Rgba::rgb(0, 0, 0),
            profit_fill: Rgba::rgba(0, 255, 0, 100),
            loss_fill: Rgba::rgba(255, 0, 0, 100),
            strike: Rgba::rgb(128, 128, 128),
            break_even: Rgba::rgb(0, 0, 255),
            call_curve: Rgba::rgb(0, 0, 255),
            put_curve: Rgba::rgb(255, 0, 0),
            straddle_curve: Rgba::rgb(0, 255, 0),
        }
    }
}

impl Palette {
    pub fn curve(&self, kind: StrategyKind) -> Rgba {
        match kind {
            StrategyKind::LongCall => self.call_curve,
            StrategyKind::LongPut => self.put_curve,
            StrategyKind::LongStraddle => self.straddle_curve,
        }
    }
}

/// A host drawing surface. Pixels, origin top-left, y growing downward.
pub trait RenderTarget {
    /// Paint the whole surface.
    fn clear(&mut self, color: Rgba) -> ChartResult<()>;

    fn line(&mut self, from: Point, to: Point, stroke: Stroke) -> ChartResult<()>;

    fn polyline(&mut self, points: &[Point], stroke: Stroke) -> ChartResult<()>;

    /// Filled axis-aligned rectangle given two opposite corners
    fn fill_rect(&mut self, corner: Point, opposite: Point, color: Rgba) -> ChartResult<()>;

    /// Filled circle
    fn dot(&mut self, center: Point, radius: f64, color: Rgba) -> ChartResult<()>;

    /// Text with its baseline-left anchor at `at`
    fn text(&mut self, text: &str, at: Point, color: Rgba) -> ChartResult<()>;
}
