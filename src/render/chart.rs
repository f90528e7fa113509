// src/render/chart.rs
use tracing::{debug, warn};

use super::{ChartLayers, Palette, Point, RenderTarget, Stroke};
use crate::chart::labels::{self, PAYOFF_AXIS_CAPTION, PRICE_AXIS_CAPTION};
use crate::chart::{CurveSampler, PayoffCurve, PayoffSample, Region, ScaleMapper};
use crate::config::ChartConfig;
use crate::error::{ChartError, ChartResult};
use crate::strategy::OptionStrategy;

const TITLE_ORIGIN: (f64, f64) = (10.0, 20.0);
const TICK_LENGTH: f64 = 5.0;
const BREAK_EVEN_RADIUS: f64 = 3.0;

/// Surface size and the inset of the plot area on every side
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl ChartLayout {
    pub fn new(width: f64, height: f64, padding: f64) -> ChartResult<Self> {
        if !(width > 2.0 * padding) {
            return Err(ChartError::InvalidConfiguration {
                field: "width".to_string(),
                reason: format!("{} leaves no room inside padding {}", width, padding),
            });
        }
        if !(height > 2.0 * padding) {
            return Err(ChartError::InvalidConfiguration {
                field: "height".to_string(),
                reason: format!("{} leaves no room inside padding {}", height, padding),
            });
        }
        Ok(Self {
            width,
            height,
            padding,
        })
    }

    pub fn plot_width(&self) -> f64 {
        self.width - 2.0 * self.padding
    }

    pub fn plot_height(&self) -> f64 {
        self.height - 2.0 * self.padding
    }

    /// Unit-square plot coordinates to surface pixels
    pub fn to_screen(&self, unit_x: f64, unit_y: f64) -> Point {
        Point::new(
            self.padding + unit_x * self.plot_width(),
            self.padding + unit_y * self.plot_height(),
        )
    }
}

/// A strategy's payoff chart, ready to draw
#[derive(Debug, Clone)]
pub struct PayoffChart {
    strategy: OptionStrategy,
    mapper: ScaleMapper,
    curve: PayoffCurve,
    layout: ChartLayout,
    tick_count: usize,
    palette: Palette,
}

impl PayoffChart {
    pub fn new(strategy: &OptionStrategy, config: &ChartConfig) -> ChartResult<Self> {
        let layout = config.layout()?;
        let mapper = ScaleMapper::new(&strategy.params)?;
        let curve = CurveSampler::new(config.sample_count)?.curve(&strategy.params)?;

        Ok(Self {
            strategy: strategy.clone(),
            mapper,
            curve,
            layout,
            tick_count: config.tick_count,
            palette: Palette::default(),
        })
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn strategy(&self) -> &OptionStrategy {
        &self.strategy
    }

    pub fn mapper(&self) -> &ScaleMapper {
        &self.mapper
    }

    pub fn curve(&self) -> &PayoffCurve {
        &self.curve
    }

    pub fn layout(&self) -> &ChartLayout {
        &self.layout
    }

    pub fn title(&self) -> String {
        labels::title(&self.strategy)
    }

    /// Screen y of the zero-payoff line
    pub fn zero_y(&self) -> f64 {
        self.layout.to_screen(0.0, self.mapper.payoff_to_unit(0.0)).y
    }

    pub fn screen_x(&self, price: f64) -> f64 {
        self.layout.to_screen(self.mapper.price_to_unit(price), 0.0).x
    }

    pub fn screen_point(&self, sample: &PayoffSample) -> Point {
        self.layout.to_screen(
            self.mapper.price_to_unit(sample.price),
            self.mapper.payoff_to_unit(sample.payoff),
        )
    }

    pub fn draw<T: RenderTarget + ?Sized>(
        &self,
        target: &mut T,
        layers: ChartLayers,
    ) -> ChartResult<()> {
        debug!(
            kind = %self.strategy.kind(),
            samples = self.curve.samples.len(),
            ?layers,
            "drawing payoff chart"
        );

        target.clear(self.palette.background)?;

        if layers.contains(ChartLayers::AXES) {
            self.draw_axes(target)?;
        }
        if layers.contains(ChartLayers::TITLE) {
            target.text(
                &self.title(),
                Point::new(TITLE_ORIGIN.0, TITLE_ORIGIN.1),
                self.palette.text,
            )?;
        }
        if layers.contains(ChartLayers::REGIONS) {
            self.draw_regions(target)?;
        }
        if layers.contains(ChartLayers::CURVE) {
            let points: Vec<Point> = self
                .curve
                .samples
                .iter()
                .map(|s| self.screen_point(s))
                .collect();
            let color = self.palette.curve(self.strategy.kind());
            target.polyline(&points, Stroke::new(color, 2))?;
        }
        if layers.contains(ChartLayers::MARKERS) {
            self.draw_markers(target)?;
        }
        if layers.contains(ChartLayers::TICKS) {
            self.draw_ticks(target)?;
        }
        Ok(())
    }

    fn draw_axes<T: RenderTarget + ?Sized>(&self, target: &mut T) -> ChartResult<()> {
        let l = &self.layout;
        let zero_y = self.zero_y();
        let stroke = Stroke::new(self.palette.axes, 1);

        target.line(
            Point::new(l.padding, zero_y),
            Point::new(l.width - l.padding, zero_y),
            stroke,
        )?;
        target.line(
            Point::new(l.padding, l.padding),
            Point::new(l.padding, l.height - l.padding),
            stroke,
        )?;

        target.text(
            PRICE_AXIS_CAPTION,
            Point::new(l.width / 2.0 - 60.0, zero_y + 20.0),
            self.palette.text,
        )?;
        target.text(
            PAYOFF_AXIS_CAPTION,
            Point::new(l.padding - 35.0, l.height / 2.0),
            self.palette.text,
        )
    }

    /// One column per pair of neighbouring samples, from the curve to the zero
    /// line, coloured by the sign of the left sample.
    fn draw_regions<T: RenderTarget + ?Sized>(&self, target: &mut T) -> ChartResult<()> {
        let zero_y = self.zero_y();
        for pair in self.curve.samples.windows(2) {
            let left = self.screen_point(&pair[0]);
            let right_x = self.screen_x(pair[1].price);
            let color = match pair[0].region() {
                Region::Profit => self.palette.profit_fill,
                Region::Loss => self.palette.loss_fill,
            };
            target.fill_rect(
                Point::new(left.x, left.y.min(zero_y)),
                Point::new(right_x, left.y.max(zero_y)),
                color,
            )?;
        }
        Ok(())
    }

    fn draw_markers<T: RenderTarget + ?Sized>(&self, target: &mut T) -> ChartResult<()> {
        let l = &self.layout;
        let zero_y = self.zero_y();
        let kind = self.strategy.kind();
        let domain = self.mapper.domain();
        let mut break_even_row = 0;

        for marker in &self.curve.markers {
            let price = marker.price();
            if !domain.contains(price) {
                warn!(
                    kind = %kind,
                    price,
                    max_price = domain.max_price,
                    "marker outside visible price range, skipped"
                );
                continue;
            }

            let x = self.screen_x(price);
            let label = labels::marker_label(marker, kind);
            if marker.is_break_even() {
                break_even_row += 1;
                target.dot(Point::new(x, zero_y), BREAK_EVEN_RADIUS, self.palette.break_even)?;
                target.text(
                    &label,
                    Point::new(x + 5.0, zero_y + 15.0 * break_even_row as f64),
                    self.palette.break_even,
                )?;
            } else {
                target.line(
                    Point::new(x, l.padding),
                    Point::new(x, l.height - l.padding),
                    Stroke::new(self.palette.strike, 1),
                )?;
                target.text(&label, Point::new(x - 25.0, zero_y - 15.0), self.palette.strike)?;
            }
        }
        Ok(())
    }

    fn draw_ticks<T: RenderTarget + ?Sized>(&self, target: &mut T) -> ChartResult<()> {
        let l = &self.layout;
        let zero_y = self.zero_y();
        let stroke = Stroke::new(self.palette.axes, 1);

        for tick in self.mapper.payoff_ticks(self.tick_count) {
            let y = l.to_screen(0.0, tick.unit).y;
            if let Some(label) = labels::payoff_tick_label(tick.value) {
                target.text(&label, Point::new(l.padding - 40.0, y + 5.0), self.palette.text)?;
            }
            target.line(
                Point::new(l.padding - TICK_LENGTH, y),
                Point::new(l.padding, y),
                stroke,
            )?;
        }

        for tick in self.mapper.price_ticks(self.tick_count) {
            let x = l.to_screen(tick.unit, 0.0).x;
            target.text(
                &labels::currency(tick.value),
                Point::new(x - 15.0, zero_y + 35.0),
                self.palette.text,
            )?;
            target.line(
                Point::new(x, zero_y),
                Point::new(x, zero_y + TICK_LENGTH),
                stroke,
            )?;
        }
        Ok(())
    }
}
