// src/strategy/params.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::validation::{validate_non_empty, validate_non_negative, validate_positive};
use crate::error::{ChartError, ChartResult, ParameterIssue};

/// Option type (Call or Put)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionType {
    Call,
    Put,
}

impl OptionType {
    /// Intrinsic value at expiration for an underlying price
    pub fn intrinsic(&self, underlying: f64, strike: f64) -> f64 {
        match self {
            OptionType::Call => (underlying - strike).max(0.0),
            OptionType::Put => (strike - underlying).max(0.0),
        }
    }
}

/// Strategy tag, without parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrategyKind {
    LongCall,
    LongPut,
    LongStraddle,
}

impl StrategyKind {
    /// Order in which strategies are offered to the user.
    pub const SELECTOR_ORDER: [StrategyKind; 3] = [
        StrategyKind::LongCall,
        StrategyKind::LongStraddle,
        StrategyKind::LongPut,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            StrategyKind::LongCall => "Long Call",
            StrategyKind::LongPut => "Long Put",
            StrategyKind::LongStraddle => "Long Straddle",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for StrategyKind {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', '_'], " ");
        match normalized.as_str() {
            "long call" | "call" => Ok(StrategyKind::LongCall),
            "long put" | "put" => Ok(StrategyKind::LongPut),
            "long straddle" | "straddle" => Ok(StrategyKind::LongStraddle),
            _ => Err(ChartError::InvalidParameter {
                parameter: "strategy".to_string(),
                value: s.to_string(),
                issue: ParameterIssue::Unrecognized,
            }),
        }
    }
}

/// Strike and premium(s) of a strategy
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StrategyParameters {
    LongCall {
        strike: f64,
        premium: f64,
    },
    LongPut {
        strike: f64,
        premium: f64,
    },
    LongStraddle {
        strike: f64,
        call_premium: f64,
        put_premium: f64,
    },
}

impl StrategyParameters {
    pub fn long_call(strike: f64, premium: f64) -> ChartResult<Self> {
        let params = StrategyParameters::LongCall { strike, premium };
        params.validate()?;
        Ok(params)
    }

    pub fn long_put(strike: f64, premium: f64) -> ChartResult<Self> {
        let params = StrategyParameters::LongPut { strike, premium };
        params.validate()?;
        Ok(params)
    }

    pub fn long_straddle(strike: f64, call_premium: f64, put_premium: f64) -> ChartResult<Self> {
        let params = StrategyParameters::LongStraddle {
            strike,
            call_premium,
            put_premium,
        };
        params.validate()?;
        Ok(params)
    }

    /// Strike must be positive, premiums non-negative, everything finite.
    pub fn validate(&self) -> ChartResult<()> {
        validate_positive("strike", self.strike())?;
        match *self {
            StrategyParameters::LongCall { premium, .. }
            | StrategyParameters::LongPut { premium, .. } => {
                validate_non_negative("premium", premium)
            }
            StrategyParameters::LongStraddle {
                call_premium,
                put_premium,
                ..
            } => {
                validate_non_negative("call premium", call_premium)?;
                validate_non_negative("put premium", put_premium)
            }
        }
    }

    pub fn kind(&self) -> StrategyKind {
        match self {
            StrategyParameters::LongCall { .. } => StrategyKind::LongCall,
            StrategyParameters::LongPut { .. } => StrategyKind::LongPut,
            StrategyParameters::LongStraddle { .. } => StrategyKind::LongStraddle,
        }
    }

    pub fn strike(&self) -> f64 {
        match *self {
            StrategyParameters::LongCall { strike, .. }
            | StrategyParameters::LongPut { strike, .. }
            | StrategyParameters::LongStraddle { strike, .. } => strike,
        }
    }

    /// Premium for single-leg strategies, call + put premium for the straddle
    pub fn total_premium(&self) -> f64 {
        match *self {
            StrategyParameters::LongCall { premium, .. }
            | StrategyParameters::LongPut { premium, .. } => premium,
            StrategyParameters::LongStraddle {
                call_premium,
                put_premium,
                ..
            } => call_premium + put_premium,
        }
    }
}

/// Expiration as typed by the user.
///
/// Only the label is required; it is shown verbatim in the chart title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expiration {
    label: String,
}

impl Expiration {
    pub fn new(label: impl Into<String>) -> ChartResult<Self> {
        let label = label.into();
        validate_non_empty("expiration", &label)?;
        Ok(Self {
            label: label.trim().to_string(),
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// The label as a calendar date, when it is written `YYYY-MM-DD`
    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.label, "%Y-%m-%d").ok()
    }

    /// Calendar days from `from` to expiration; negative once expired
    pub fn days_until(&self, from: NaiveDate) -> Option<i64> {
        self.date().map(|expiry| (expiry - from).num_days())
    }
}

impl fmt::Display for Expiration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Everything needed to draw one payoff chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionStrategy {
    pub params: StrategyParameters,
    pub expiration: Expiration,
}

impl OptionStrategy {
    pub fn new(params: StrategyParameters, expiration: Expiration) -> ChartResult<Self> {
        params.validate()?;
        Ok(Self { params, expiration })
    }

    pub fn kind(&self) -> StrategyKind {
        self.params.kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_str() {
        assert_eq!("Long Call".parse::<StrategyKind>().unwrap(), StrategyKind::LongCall);
        assert_eq!("put".parse::<StrategyKind>().unwrap(), StrategyKind::LongPut);
        assert_eq!(
            "long-straddle".parse::<StrategyKind>().unwrap(),
            StrategyKind::LongStraddle
        );
        assert!("iron condor".parse::<StrategyKind>().is_err());
    }

    #[test]
    fn test_labels_round_trip() {
        for kind in StrategyKind::SELECTOR_ORDER {
            assert_eq!(kind.label().parse::<StrategyKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_validation() {
        assert!(StrategyParameters::long_call(150.0, 5.0).is_ok());
        assert!(StrategyParameters::long_call(0.0, 5.0).is_err());
        assert!(StrategyParameters::long_put(150.0, -1.0).is_err());
        assert!(StrategyParameters::long_straddle(150.0, 5.0, -3.0).is_err());
        assert!(StrategyParameters::long_straddle(150.0, 0.0, 0.0).is_ok());
    }

    #[test]
    fn test_total_premium() {
        let straddle = StrategyParameters::long_straddle(150.0, 5.0, 3.0).unwrap();
        assert_eq!(straddle.total_premium(), 8.0);
        assert_eq!(straddle.strike(), 150.0);
        assert_eq!(straddle.kind(), StrategyKind::LongStraddle);
    }

    #[test]
    fn test_expiration() {
        let exp = Expiration::new(" 2024-12-20 ").unwrap();
        assert_eq!(exp.label(), "2024-12-20");
        let from = NaiveDate::from_ymd_opt(2024, 12, 10).unwrap();
        assert_eq!(exp.days_until(from), Some(10));

        let free_text = Expiration::new("Dec monthly").unwrap();
        assert!(free_text.date().is_none());

        assert!(Expiration::new("").is_err());
    }

    #[test]
    fn test_serde_tagging() {
        let params = StrategyParameters::long_put(150.0, 3.0).unwrap();
        let json = serde_json::to_string(&params).unwrap();
        assert!(json.contains("\"kind\":\"long_put\""));
        let back: StrategyParameters = serde_json::from_str(&json).unwrap();
        assert_eq!(back, params);
    }
}
