// demos/demo.rs
use payoff_chart::chart::labels;
use payoff_chart::config::ChartConfig;
use payoff_chart::output;
use payoff_chart::render::{render_svg, ChartLayers, PayoffChart};
use payoff_chart::strategy::{Expiration, OptionStrategy, PayoffModel, StrategyParameters};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Running payoff-chart demo\n");

    let config = ChartConfig::default();
    let results = std::env::current_dir()?.join("results");
    std::fs::create_dir_all(&results)?;

    let expiration = Expiration::new("2024-12-20")?;
    let strategies = [
        ("long_call", StrategyParameters::long_call(150.0, 5.0)?),
        ("long_put", StrategyParameters::long_put(150.0, 3.0)?),
        ("long_straddle", StrategyParameters::long_straddle(150.0, 5.0, 3.0)?),
    ];

    for (name, params) in strategies {
        let strategy = OptionStrategy::new(params, expiration.clone())?;
        let chart = PayoffChart::new(&strategy, &config)?;

        println!("{}", labels::title(&strategy));
        for price in [100.0, 142.0, 150.0, 158.0, 200.0] {
            println!("  payoff at ${:>6.2}: {:>8.2}", price, params.payoff(price));
        }
        for marker in &chart.curve().markers {
            println!("  {}", labels::marker_label(marker, strategy.kind()));
        }

        let svg_path = results.join(format!("{}.svg", name));
        std::fs::write(&svg_path, render_svg(&chart, ChartLayers::ALL)?)?;
        let csv_path = results.join(format!("{}.csv", name));
        output::write_samples_to_csv(&csv_path, &chart.curve().samples)?;
        let markers_path = results.join(format!("{}_markers.csv", name));
        output::write_markers_to_csv(&markers_path, &chart.curve().markers)?;
        println!(
            "  wrote {}, {} and {}\n",
            svg_path.display(),
            csv_path.display(),
            markers_path.display()
        );
    }

    Ok(())
}
