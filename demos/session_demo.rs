// demos/session_demo.rs
use payoff_chart::config::ChartConfig;
use payoff_chart::render::{ChartLayers, RecordingTarget};
use payoff_chart::session::ChartSession;
use payoff_chart::strategy::{StrategyForm, StrategyKind};

fn main() {
    println!("Session Demo for payoff-chart");
    println!("=============================\n");

    let config = ChartConfig::default();
    let mut session = ChartSession::new();

    // 1. Valid long call
    println!("1. Entering a long call...");
    match session.update(&StrategyForm::single_leg("150", "5", "2024-12-20")) {
        Ok(strategy) => println!("   ✓ Stored {:?}", strategy.params),
        Err(e) => println!("   Unexpected: {}", e.user_message()),
    }

    // 2. Non-numeric strike: rejected, previous call kept
    println!("\n2. Entering a strike that is not a number...");
    match session.update(&StrategyForm::single_leg("one fifty", "5", "2024-12-20")) {
        Ok(_) => println!("   Unexpected: should have failed!"),
        Err(e) => println!("   ✓ Input Error: {}", e.user_message()),
    }
    if let Some(current) = session.current() {
        println!("   Chart still shows strike {}", current.params.strike());
    }

    // 3. Switch to the straddle, which has nothing entered yet
    println!("\n3. Selecting {}...", StrategyKind::LongStraddle);
    session.select(StrategyKind::LongStraddle);
    match session.chart(&config) {
        Ok(None) => println!("   ✓ Nothing to draw yet"),
        Ok(Some(_)) => println!("   Unexpected: chart without parameters"),
        Err(e) => println!("   Error: {}", e),
    }

    // 4. Straddle parameters and a recorded render
    println!("\n4. Entering straddle parameters...");
    if let Err(e) = session.update(&StrategyForm::straddle("150", "5", "3", "2024-12-20")) {
        println!("   Unexpected: {}", e.user_message());
        return;
    }
    match session.chart(&config) {
        Ok(Some(chart)) => {
            let mut target = RecordingTarget::new();
            match chart.draw(&mut target, ChartLayers::ALL) {
                Ok(()) => {
                    println!("   ✓ {} drawing commands", target.commands.len());
                    for text in target.texts() {
                        println!("     {}", text);
                    }
                }
                Err(e) => println!("   Error: {}", e),
            }
        }
        Ok(None) => println!("   Unexpected: no chart"),
        Err(e) => println!("   Error: {}", e),
    }

    println!("\n=== Session demo complete ===");
}
