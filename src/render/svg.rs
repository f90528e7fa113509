// src/render/svg.rs
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::chart::PayoffChart;
use super::{ChartLayers, Point, RenderTarget, Rgba, Stroke};
use crate::error::{ChartError, ChartResult};

const FONT_FAMILY: &str = "sans-serif";
const FONT_SIZE: u32 = 12;

/// Renders primitives into an SVG document held in a caller-owned string
pub struct SvgTarget<'a> {
    area: DrawingArea<SVGBackend<'a>, Shift>,
}

impl<'a> SvgTarget<'a> {
    pub fn new(buffer: &'a mut String, width: u32, height: u32) -> Self {
        Self {
            area: SVGBackend::with_string(buffer, (width, height)).into_drawing_area(),
        }
    }

    /// Flush the document into the buffer.
    pub fn finish(self) -> ChartResult<()> {
        self.area.present().map_err(ChartError::render)
    }
}

fn color(c: Rgba) -> RGBAColor {
    RGBAColor(c.r, c.g, c.b, c.alpha())
}

fn px(p: Point) -> (i32, i32) {
    (p.x.round() as i32, p.y.round() as i32)
}

fn outline(stroke: Stroke) -> ShapeStyle {
    ShapeStyle {
        color: color(stroke.color),
        filled: false,
        stroke_width: stroke.width,
    }
}

fn solid(c: Rgba) -> ShapeStyle {
    ShapeStyle {
        color: color(c),
        filled: true,
        stroke_width: 0,
    }
}

impl RenderTarget for SvgTarget<'_> {
    fn clear(&mut self, c: Rgba) -> ChartResult<()> {
        self.area.fill(&color(c)).map_err(ChartError::render)
    }

    fn line(&mut self, from: Point, to: Point, stroke: Stroke) -> ChartResult<()> {
        self.area
            .draw(&PathElement::new(vec![px(from), px(to)], outline(stroke)))
            .map_err(ChartError::render)
    }

    fn polyline(&mut self, points: &[Point], stroke: Stroke) -> ChartResult<()> {
        let coords: Vec<(i32, i32)> = points.iter().copied().map(px).collect();
        self.area
            .draw(&PathElement::new(coords, outline(stroke)))
            .map_err(ChartError::render)
    }

    fn fill_rect(&mut self, corner: Point, opposite: Point, c: Rgba) -> ChartResult<()> {
        self.area
            .draw(&Rectangle::new([px(corner), px(opposite)], solid(c)))
            .map_err(ChartError::render)
    }

    fn dot(&mut self, center: Point, radius: f64, c: Rgba) -> ChartResult<()> {
        self.area
            .draw(&Circle::new(px(center), radius.round() as i32, solid(c)))
            .map_err(ChartError::render)
    }

    fn text(&mut self, text: &str, at: Point, c: Rgba) -> ChartResult<()> {
        let style = (FONT_FAMILY, FONT_SIZE)
            .into_font()
            .color(&color(c))
            .pos(Pos::new(HPos::Left, VPos::Bottom));
        self.area
            .draw(&Text::new(text.to_string(), px(at), style))
            .map_err(ChartError::render)
    }
}

/// Draw `chart` as a standalone SVG document.
pub fn render_svg(chart: &PayoffChart, layers: ChartLayers) -> ChartResult<String> {
    let layout = chart.layout();
    let mut svg = String::new();
    {
        let mut target = SvgTarget::new(&mut svg, layout.width as u32, layout.height as u32);
        chart.draw(&mut target, layers)?;
        target.finish()?;
    }
    Ok(svg)
}
