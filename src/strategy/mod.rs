// src/strategy/mod.rs
pub mod form;
pub mod params;
pub mod payoffs;

pub use form::StrategyForm;
pub use params::{Expiration, OptionStrategy, OptionType, StrategyKind, StrategyParameters};
pub use payoffs::{payoff, BreakEvens, PayoffModel};
