// src/chart/mod.rs
pub mod labels;
pub mod sampler;
pub mod scale;

pub use sampler::{markers, CurveSampler, Marker, PayoffCurve, PayoffSample, Region, DEFAULT_SAMPLE_COUNT};
pub use scale::{PlotDomain, ScaleMapper, Tick, PAYOFF_MARGIN, PREMIUM_SCALE};
