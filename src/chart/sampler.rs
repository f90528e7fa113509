// src/chart/sampler.rs
use ndarray::Array1;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::scale::PlotDomain;
use crate::error::{ChartError, ChartResult};
use crate::strategy::{PayoffModel, StrategyParameters};

/// Default number of samples across the price domain
pub const DEFAULT_SAMPLE_COUNT: usize = 512;

/// Which side of the zero line a sample falls on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    /// payoff >= 0
    Profit,
    /// payoff < 0
    Loss,
}

/// One point of the payoff curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayoffSample {
    pub price: f64,
    pub payoff: f64,
}

impl PayoffSample {
    pub fn region(&self) -> Region {
        if self.payoff >= 0.0 {
            Region::Profit
        } else {
            Region::Loss
        }
    }

    pub fn is_profit(&self) -> bool {
        self.region() == Region::Profit
    }
}

/// Annotated feature of a chart, derived from the parameters rather than sampled
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "marker", content = "price", rename_all = "snake_case")]
pub enum Marker {
    Strike(f64),
    BreakEvenUp(f64),
    BreakEvenDown(f64),
}

impl Marker {
    pub fn price(&self) -> f64 {
        match *self {
            Marker::Strike(p) | Marker::BreakEvenUp(p) | Marker::BreakEvenDown(p) => p,
        }
    }

    pub fn is_break_even(&self) -> bool {
        !matches!(self, Marker::Strike(_))
    }
}

/// Strike marker first, then break-evens (upper before lower).
pub fn markers(params: &StrategyParameters) -> Vec<Marker> {
    let break_evens = params.break_evens();
    let mut out = vec![Marker::Strike(params.strike())];
    out.extend(break_evens.upper.map(Marker::BreakEvenUp));
    out.extend(break_evens.lower.map(Marker::BreakEvenDown));
    out
}

/// Sampled curve plus its markers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoffCurve {
    pub samples: Vec<PayoffSample>,
    pub markers: Vec<Marker>,
}

impl PayoffCurve {
    /// Maximal runs of consecutive samples on the same side of zero
    pub fn regions(&self) -> Vec<(Region, &[PayoffSample])> {
        let mut runs = Vec::new();
        let mut start = 0;
        for i in 1..=self.samples.len() {
            let boundary = i == self.samples.len()
                || self.samples[i].region() != self.samples[start].region();
            if boundary {
                runs.push((self.samples[start].region(), &self.samples[start..i]));
                start = i;
            }
        }
        runs
    }
}

/// Walks `[0, 2 * strike]` in equal steps, evaluating the payoff at each one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurveSampler {
    sample_count: usize,
}

impl Default for CurveSampler {
    fn default() -> Self {
        Self {
            sample_count: DEFAULT_SAMPLE_COUNT,
        }
    }
}

impl CurveSampler {
    /// At least two samples are needed to span the domain.
    pub fn new(sample_count: usize) -> ChartResult<Self> {
        if sample_count < 2 {
            return Err(ChartError::InvalidConfiguration {
                field: "sample_count".to_string(),
                reason: format!("must be at least 2, got {}", sample_count),
            });
        }
        Ok(Self { sample_count })
    }

    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    /// Samples at evenly spaced prices, both domain endpoints included.
    pub fn sample(&self, params: &StrategyParameters) -> ChartResult<Vec<PayoffSample>> {
        let domain = PlotDomain::for_strike(params.strike())?;
        let prices = Array1::linspace(domain.min_price, domain.max_price, self.sample_count);

        let samples: Vec<PayoffSample> = prices
            .iter()
            .map(|&price| PayoffSample {
                price,
                payoff: params.payoff(price),
            })
            .collect();

        debug!(
            kind = %params.kind(),
            samples = samples.len(),
            max_price = domain.max_price,
            "sampled payoff curve"
        );
        Ok(samples)
    }

    pub fn curve(&self, params: &StrategyParameters) -> ChartResult<PayoffCurve> {
        Ok(PayoffCurve {
            samples: self.sample(params)?,
            markers: markers(params),
        })
    }
}
