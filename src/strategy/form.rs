// src/strategy/form.rs
use serde::{Deserialize, Serialize};

use super::params::{Expiration, OptionStrategy, StrategyKind, StrategyParameters};
use crate::error::validation::parse_price;
use crate::error::{ChartError, ChartResult, ParameterIssue};

/// Raw field text for one strategy's parameter form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyForm {
    pub strike: String,
    /// Premium of a single-leg strategy, or the call premium of a straddle
    pub premium: String,
    /// Put premium, straddle only
    pub put_premium: Option<String>,
    pub expiration: String,
}

impl StrategyForm {
    pub fn single_leg(
        strike: impl Into<String>,
        premium: impl Into<String>,
        expiration: impl Into<String>,
    ) -> Self {
        Self {
            strike: strike.into(),
            premium: premium.into(),
            put_premium: None,
            expiration: expiration.into(),
        }
    }

    pub fn straddle(
        strike: impl Into<String>,
        call_premium: impl Into<String>,
        put_premium: impl Into<String>,
        expiration: impl Into<String>,
    ) -> Self {
        Self {
            strike: strike.into(),
            premium: call_premium.into(),
            put_premium: Some(put_premium.into()),
            expiration: expiration.into(),
        }
    }

    /// Parse the form as parameters for `kind`.
    ///
    /// Numbers are parsed first, in field order, so non-numeric text is
    /// reported ahead of range problems.
    pub fn parse(&self, kind: StrategyKind) -> ChartResult<OptionStrategy> {
        let strike = parse_price("strike", &self.strike)?;

        let params = match kind {
            StrategyKind::LongCall => StrategyParameters::LongCall {
                strike,
                premium: parse_price("premium", &self.premium)?,
            },
            StrategyKind::LongPut => StrategyParameters::LongPut {
                strike,
                premium: parse_price("premium", &self.premium)?,
            },
            StrategyKind::LongStraddle => {
                let call_premium = parse_price("call premium", &self.premium)?;
                let put_text = self.put_premium.as_deref().ok_or_else(|| {
                    ChartError::invalid_parameter("put premium", "", ParameterIssue::NotANumber)
                })?;
                StrategyParameters::LongStraddle {
                    strike,
                    call_premium,
                    put_premium: parse_price("put premium", put_text)?,
                }
            }
        };

        let expiration = Expiration::new(self.expiration.as_str())?;
        OptionStrategy::new(params, expiration)
    }
}
