// src/chart/scale.rs
use crate::error::{ChartError, ChartResult};
use crate::strategy::StrategyParameters;

/// Head-room added above the larger of strike and scaled premium
pub const PAYOFF_MARGIN: f64 = 10.0;

/// Weight applied to the total premium when sizing the payoff axis
pub const PREMIUM_SCALE: f64 = 2.0;

/// Visible range of underlying prices
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotDomain {
    pub min_price: f64,
    pub max_price: f64,
}

impl PlotDomain {
    /// `[0, 2 * strike]`. Fails unless the strike is positive and `2 * strike` is finite.
    pub fn for_strike(strike: f64) -> ChartResult<Self> {
        if !(strike > 0.0 && (2.0 * strike).is_finite()) {
            return Err(ChartError::DegenerateDomain { strike });
        }
        Ok(Self {
            min_price: 0.0,
            max_price: 2.0 * strike,
        })
    }

    pub fn width(&self) -> f64 {
        self.max_price - self.min_price
    }

    pub fn contains(&self, price: f64) -> bool {
        price >= self.min_price && price <= self.max_price
    }
}

/// Maps prices and payoffs of one strategy onto plot space
///
/// The price axis spans `[0, 2K]` for strike `K`. The payoff axis is
/// symmetric, `[-M, +M]`, with
///
/// ```text
/// M = max(K, PREMIUM_SCALE * total_premium) + PAYOFF_MARGIN
/// ```
///
/// The payoff axis is inverted so profit sits toward the top of a screen whose
/// y grows downward. Zero payoff always lands on the vertical midpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleMapper {
    domain: PlotDomain,
    max_abs_payoff: f64,
}

impl ScaleMapper {
    pub fn new(params: &StrategyParameters) -> ChartResult<Self> {
        Self::from_parts(params.strike(), params.total_premium())
    }

    pub fn from_parts(strike: f64, total_premium: f64) -> ChartResult<Self> {
        let domain = PlotDomain::for_strike(strike)?;
        let max_abs_payoff = max_abs_payoff(strike, total_premium);
        // payoff_to_unit divides by 2M
        if !(2.0 * max_abs_payoff).is_finite() {
            return Err(ChartError::UnboundedPayoffAxis { total_premium });
        }
        Ok(Self {
            domain,
            max_abs_payoff,
        })
    }

    pub fn domain(&self) -> PlotDomain {
        self.domain
    }

    pub fn max_abs_payoff(&self) -> f64 {
        self.max_abs_payoff
    }

    /// Price to `[0, 1]`, left to right
    pub fn price_to_unit(&self, price: f64) -> f64 {
        (price - self.domain.min_price) / self.domain.width()
    }

    pub fn unit_to_price(&self, unit: f64) -> f64 {
        self.domain.min_price + unit * self.domain.width()
    }

    /// Payoff to `[0, 1]`, top (`+M`) to bottom (`-M`)
    pub fn payoff_to_unit(&self, payoff: f64) -> f64 {
        (self.max_abs_payoff - payoff) / (2.0 * self.max_abs_payoff)
    }

    pub fn unit_to_payoff(&self, unit: f64) -> f64 {
        self.max_abs_payoff - unit * 2.0 * self.max_abs_payoff
    }

    pub fn price_to_x(&self, price: f64, plot_width: f64) -> f64 {
        self.price_to_unit(price) * plot_width
    }

    pub fn x_to_price(&self, x: f64, plot_width: f64) -> f64 {
        self.unit_to_price(x / plot_width)
    }

    pub fn payoff_to_y(&self, payoff: f64, plot_height: f64) -> f64 {
        self.payoff_to_unit(payoff) * plot_height
    }

    pub fn y_to_payoff(&self, y: f64, plot_height: f64) -> f64 {
        self.unit_to_payoff(y / plot_height)
    }

    /// Price tick values at `i / count` of the domain, `i` in `0..=count`
    pub fn price_ticks(&self, count: usize) -> Vec<Tick> {
        unit_steps(count)
            .map(|unit| Tick {
                unit,
                value: self.unit_to_price(unit),
            })
            .collect()
    }

    /// Payoff tick values at `i / count` down the axis, `i` in `0..=count`
    pub fn payoff_ticks(&self, count: usize) -> Vec<Tick> {
        unit_steps(count)
            .map(|unit| Tick {
                unit,
                value: self.unit_to_payoff(unit),
            })
            .collect()
    }
}

/// Axis tick: position along the axis in `[0, 1]` and the value it labels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    pub unit: f64,
    pub value: f64,
}

/// Half-height of the payoff axis
pub fn max_abs_payoff(strike: f64, total_premium: f64) -> f64 {
    strike.max(total_premium.abs() * PREMIUM_SCALE) + PAYOFF_MARGIN
}

fn unit_steps(count: usize) -> impl Iterator<Item = f64> {
    let count = count.max(1);
    (0..=count).map(move |i| i as f64 / count as f64)
}
