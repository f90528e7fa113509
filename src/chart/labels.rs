// src/chart/labels.rs
use super::sampler::Marker;
use crate::strategy::{OptionStrategy, StrategyKind, StrategyParameters};

pub const PRICE_AXIS_CAPTION: &str = "Underlying Price";
pub const PAYOFF_AXIS_CAPTION: &str = "Profit/Loss";

/// Payoff tick labels at or below this magnitude are left off; the price axis
/// already runs through zero.
pub const ZERO_LABEL_THRESHOLD: f64 = 0.01;

/// `$` followed by the value to two decimal places
pub fn currency(value: f64) -> String {
    // avoid "$-0.00"
    let value = if value.abs() < 0.005 { 0.0 } else { value };
    format!("${:.2}", value)
}

pub fn title(strategy: &OptionStrategy) -> String {
    let head = format!(
        "{} - Expiration: {}, Strike: {}",
        strategy.kind().label(),
        strategy.expiration.label(),
        currency(strategy.params.strike())
    );
    match strategy.params {
        StrategyParameters::LongCall { premium, .. } | StrategyParameters::LongPut { premium, .. } => {
            format!("{}, Premium: {}", head, currency(premium))
        }
        StrategyParameters::LongStraddle {
            call_premium,
            put_premium,
            ..
        } => format!(
            "{}, Call: {}, Put: {}",
            head,
            currency(call_premium),
            currency(put_premium)
        ),
    }
}

/// Single-leg strategies have one break-even and label it plainly.
pub fn marker_label(marker: &Marker, kind: StrategyKind) -> String {
    let price = currency(marker.price());
    match (marker, kind) {
        (Marker::Strike(_), _) => format!("Strike: {}", price),
        (_, StrategyKind::LongCall | StrategyKind::LongPut) => format!("BE: {}", price),
        (Marker::BreakEvenUp(_), StrategyKind::LongStraddle) => format!("BE Up: {}", price),
        (Marker::BreakEvenDown(_), StrategyKind::LongStraddle) => format!("BE Down: {}", price),
    }
}

/// `None` for values close enough to zero to be skipped
pub fn payoff_tick_label(value: f64) -> Option<String> {
    (value.abs() > ZERO_LABEL_THRESHOLD).then(|| currency(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::Expiration;

    fn strategy(params: StrategyParameters) -> OptionStrategy {
        OptionStrategy::new(params, Expiration::new("2024-12-20").unwrap()).unwrap()
    }

    #[test]
    fn test_currency() {
        assert_eq!(currency(150.0), "$150.00");
        assert_eq!(currency(7.456), "$7.46");
        assert_eq!(currency(-32.0), "$-32.00");
        assert_eq!(currency(-0.001), "$0.00");
    }

    #[test]
    fn test_titles() {
        let call = strategy(StrategyParameters::long_call(150.0, 5.0).unwrap());
        assert_eq!(
            title(&call),
            "Long Call - Expiration: 2024-12-20, Strike: $150.00, Premium: $5.00"
        );

        let straddle = strategy(StrategyParameters::long_straddle(150.0, 5.0, 3.0).unwrap());
        assert_eq!(
            title(&straddle),
            "Long Straddle - Expiration: 2024-12-20, Strike: $150.00, Call: $5.00, Put: $3.00"
        );
    }

    #[test]
    fn test_marker_labels() {
        assert_eq!(
            marker_label(&Marker::BreakEvenUp(155.0), StrategyKind::LongCall),
            "BE: $155.00"
        );
        assert_eq!(
            marker_label(&Marker::BreakEvenDown(142.0), StrategyKind::LongStraddle),
            "BE Down: $142.00"
        );
        assert_eq!(
            marker_label(&Marker::Strike(150.0), StrategyKind::LongPut),
            "Strike: $150.00"
        );
    }

    #[test]
    fn test_zero_tick_suppressed() {
        assert_eq!(payoff_tick_label(0.0), None);
        assert_eq!(payoff_tick_label(-0.005), None);
        assert_eq!(payoff_tick_label(32.0).as_deref(), Some("$32.00"));
    }
}
