// src/render/recorder.rs
use serde::{Deserialize, Serialize};

use super::{Point, RenderTarget, Rgba, Stroke};
use crate::error::ChartResult;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    Clear { color: Rgba },
    Line { from: Point, to: Point, stroke: Stroke },
    Polyline { points: Vec<Point>, stroke: Stroke },
    FillRect { corner: Point, opposite: Point, color: Rgba },
    Dot { center: Point, radius: f64, color: Rgba },
    Text { text: String, at: Point, color: Rgba },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordingTarget {
    pub commands: Vec<DrawCommand>,
}

impl RecordingTarget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn fill_rects(&self) -> impl Iterator<Item = (&Point, &Point, &Rgba)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::FillRect {
                corner,
                opposite,
                color,
            } => Some((corner, opposite, color)),
            _ => None,
        })
    }

    pub fn dots(&self) -> impl Iterator<Item = &Point> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Dot { center, .. } => Some(center),
            _ => None,
        })
    }

    pub fn polylines(&self) -> impl Iterator<Item = &[Point]> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Polyline { points, .. } => Some(points.as_slice()),
            _ => None,
        })
    }

    pub fn to_json(&self) -> ChartResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl RenderTarget for RecordingTarget {
    fn clear(&mut self, color: Rgba) -> ChartResult<()> {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear { color });
        Ok(())
    }

    fn line(&mut self, from: Point, to: Point, stroke: Stroke) -> ChartResult<()> {
        self.commands.push(DrawCommand::Line { from, to, stroke });
        Ok(())
    }

    fn polyline(&mut self, points: &[Point], stroke: Stroke) -> ChartResult<()> {
        self.commands.push(DrawCommand::Polyline {
            points: points.to_vec(),
            stroke,
        });
        Ok(())
    }

    fn fill_rect(&mut self, corner: Point, opposite: Point, color: Rgba) -> ChartResult<()> {
        self.commands.push(DrawCommand::FillRect {
            corner,
            opposite,
            color,
        });
        Ok(())
    }

    fn dot(&mut self, center: Point, radius: f64, color: Rgba) -> ChartResult<()> {
        self.commands.push(DrawCommand::Dot {
            center,
            radius,
            color,
        });
        Ok(())
    }

    fn text(&mut self, text: &str, at: Point, color: Rgba) -> ChartResult<()> {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            at,
            color,
        });
        Ok(())
    }
}
