//! # payoff-chart: Expiration Payoff Diagrams for Option Strategies
//!
//! Computes everything a host needs to draw a profit/loss diagram for a long
//! call, long put or long straddle, and emits it to a drawing surface the host
//! owns.
//!
//! ## Key Features
//!
//! - **Payoff model**: intrinsic value at expiration minus premium, one model
//!   over all three strategies
//! - **Scale mapping**: price axis `[0, 2K]`, symmetric payoff axis, affine maps
//!   to plot space and back
//! - **Curve sampling**: deterministic, resolution-independent samples plus
//!   strike and break-even markers
//! - **Rendering**: title, axes, ticks, profit/loss regions, curve and markers
//!   onto any [`render::RenderTarget`]; SVG via plotters, JSON display lists
//!
//! ## Quick Start
//!
//! ```rust
//! use payoff_chart::config::ChartConfig;
//! use payoff_chart::render::{ChartLayers, PayoffChart, RecordingTarget};
//! use payoff_chart::strategy::{StrategyForm, StrategyKind};
//!
//! let form = StrategyForm::straddle("150", "5", "3", "2024-12-20");
//! let strategy = form.parse(StrategyKind::LongStraddle).expect("valid input");
//!
//! let chart = PayoffChart::new(&strategy, &ChartConfig::default()).expect("valid chart");
//! let mut target = RecordingTarget::new();
//! chart.draw(&mut target, ChartLayers::ALL).expect("recording never fails");
//!
//! assert!(target.texts().any(|t| t == "BE Up: $158.00"));
//! ```
//!
//! ## Scope
//!
//! Payoff is expiration-only. There is no volatility, time value or Greeks,
//! and no market data.

// Module declarations
pub mod chart;
pub mod config;
pub mod error;
pub mod output;
pub mod render;
pub mod session;
pub mod strategy;

// Re-export commonly used types for convenience
pub use error::{ChartError, ChartResult};
pub use strategy::{OptionStrategy, PayoffModel, StrategyKind, StrategyParameters};
