//! Expiration Payoff Functions
//!
//! # Mathematical Definitions
//!
//! Payoff is intrinsic value at expiration minus the premium paid. There is
//! no time value, volatility or discounting.
//!
//! ## Single-leg
//! - **Long call**: max(S - K, 0) - c
//! - **Long put**: max(K - S, 0) - p
//!
//! ## Combination
//! - **Long straddle**: a long call and a long put at the same strike,
//!   max(S - K, 0) - c + max(K - S, 0) - p
//!
//! All three are piecewise linear with a single kink at the strike, so the
//! break-even prices follow algebraically and never need a root search.

use super::params::{OptionType, StrategyParameters};

/// Maps an underlying price at expiration to a signed profit/loss
pub trait PayoffModel {
    fn payoff(&self, underlying: f64) -> f64;
}

impl PayoffModel for StrategyParameters {
    fn payoff(&self, underlying: f64) -> f64 {
        match *self {
            StrategyParameters::LongCall { strike, premium } => {
                OptionType::Call.intrinsic(underlying, strike) - premium
            }
            StrategyParameters::LongPut { strike, premium } => {
                OptionType::Put.intrinsic(underlying, strike) - premium
            }
            StrategyParameters::LongStraddle {
                strike,
                call_premium,
                put_premium,
            } => {
                OptionType::Call.intrinsic(underlying, strike) - call_premium
                    + OptionType::Put.intrinsic(underlying, strike)
                    - put_premium
            }
        }
    }
}

/// Payoff of `params` at `underlying`
pub fn payoff(params: &StrategyParameters, underlying: f64) -> f64 {
    params.payoff(underlying)
}

/// Break-even prices
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BreakEvens {
    /// Break-even above the strike (calls, straddle)
    pub upper: Option<f64>,
    /// Break-even below the strike (puts, straddle)
    pub lower: Option<f64>,
}

impl StrategyParameters {
    pub fn break_evens(&self) -> BreakEvens {
        match *self {
            StrategyParameters::LongCall { strike, premium } => BreakEvens {
                upper: Some(strike + premium),
                lower: None,
            },
            StrategyParameters::LongPut { strike, premium } => BreakEvens {
                upper: None,
                lower: Some(strike - premium),
            },
            StrategyParameters::LongStraddle {
                strike,
                call_premium,
                put_premium,
            } => BreakEvens {
                upper: Some(strike + call_premium + put_premium),
                lower: Some(strike - (call_premium + put_premium)),
            },
        }
    }

    /// Worst outcome: the whole premium, lost at the strike
    pub fn max_loss(&self) -> f64 {
        self.total_premium()
    }

    /// Best outcome, `None` when unbounded.
    ///
    /// A long put peaks when the underlying goes to zero.
    pub fn max_profit(&self) -> Option<f64> {
        match *self {
            StrategyParameters::LongCall { .. } | StrategyParameters::LongStraddle { .. } => None,
            StrategyParameters::LongPut { strike, premium } => Some(strike - premium),
        }
    }
}
