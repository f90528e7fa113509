// src/session.rs
use tracing::{info, warn};

use crate::config::ChartConfig;
use crate::error::ChartResult;
use crate::render::PayoffChart;
use crate::strategy::{OptionStrategy, StrategyForm, StrategyKind};

/// One strategy per kind plus the current selection
#[derive(Debug, Clone)]
pub struct ChartSession {
    selected: StrategyKind,
    long_call: Option<OptionStrategy>,
    long_put: Option<OptionStrategy>,
    long_straddle: Option<OptionStrategy>,
}

impl Default for ChartSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartSession {
    /// New session with the first selector entry chosen and nothing entered yet
    pub fn new() -> Self {
        Self {
            selected: StrategyKind::SELECTOR_ORDER[0],
            long_call: None,
            long_put: None,
            long_straddle: None,
        }
    }

    pub fn selected(&self) -> StrategyKind {
        self.selected
    }

    pub fn select(&mut self, kind: StrategyKind) {
        self.selected = kind;
    }

    fn slot(&self, kind: StrategyKind) -> &Option<OptionStrategy> {
        match kind {
            StrategyKind::LongCall => &self.long_call,
            StrategyKind::LongPut => &self.long_put,
            StrategyKind::LongStraddle => &self.long_straddle,
        }
    }

    fn slot_mut(&mut self, kind: StrategyKind) -> &mut Option<OptionStrategy> {
        match kind {
            StrategyKind::LongCall => &mut self.long_call,
            StrategyKind::LongPut => &mut self.long_put,
            StrategyKind::LongStraddle => &mut self.long_straddle,
        }
    }

    pub fn strategy(&self, kind: StrategyKind) -> Option<&OptionStrategy> {
        self.slot(kind).as_ref()
    }

    /// Strategy for the selected kind, if one has been entered
    pub fn current(&self) -> Option<&OptionStrategy> {
        self.strategy(self.selected())
    }

    /// Parse `form` for the selected kind and store it.
    pub fn update(&mut self, form: &StrategyForm) -> ChartResult<&OptionStrategy> {
        let kind = self.selected();
        let strategy = form.parse(kind).map_err(|e| {
            warn!(kind = %kind, error = %e, "rejected strategy input");
            e
        })?;

        info!(
            kind = %kind,
            strike = strategy.params.strike(),
            premium = strategy.params.total_premium(),
            expiration = %strategy.expiration,
            "strategy updated"
        );
        let stored: &OptionStrategy = self.slot_mut(kind).insert(strategy);
        Ok(stored)
    }

    /// Chart for the selected strategy; `None` until parameters are entered.
    pub fn chart(&self, config: &ChartConfig) -> ChartResult<Option<PayoffChart>> {
        self.current()
            .map(|strategy| PayoffChart::new(strategy, config))
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::INVALID_NUMBER_MESSAGE;

    #[test]
    fn test_starts_on_long_call_with_nothing_to_draw() {
        let session = ChartSession::new();
        assert_eq!(session.selected(), StrategyKind::LongCall);
        assert!(session.current().is_none());
        assert!(session.chart(&ChartConfig::default()).unwrap().is_none());
    }

    #[test]
    fn test_failed_update_keeps_previous_strategy() {
        let mut session = ChartSession::new();
        session
            .update(&StrategyForm::single_leg("150", "5", "2024-12-20"))
            .unwrap();
        let before = session.current().cloned();

        let err = session
            .update(&StrategyForm::single_leg("abc", "5", "2025-01-17"))
            .unwrap_err();
        assert_eq!(err.user_message(), INVALID_NUMBER_MESSAGE);
        assert_eq!(session.current().cloned(), before);
    }

    #[test]
    fn test_each_kind_keeps_its_own_parameters() {
        let mut session = ChartSession::new();
        session
            .update(&StrategyForm::single_leg("150", "5", "2024-12-20"))
            .unwrap();

        session.select(StrategyKind::LongStraddle);
        assert!(session.current().is_none());
        session
            .update(&StrategyForm::straddle("100", "4", "2", "2024-12-20"))
            .unwrap();

        session.select(StrategyKind::LongCall);
        assert_eq!(session.current().unwrap().params.strike(), 150.0);
        assert_eq!(
            session
                .strategy(StrategyKind::LongStraddle)
                .unwrap()
                .params
                .total_premium(),
            6.0
        );
    }
}
