// tests/chart_test.rs
use payoff_chart::chart::{ScaleMapper, PAYOFF_MARGIN, PREMIUM_SCALE};
use payoff_chart::config::ChartConfig;
use payoff_chart::output;
use payoff_chart::render::{
    render_svg, ChartLayers, DrawCommand, Palette, PayoffChart, RecordingTarget, Rgba,
};
use payoff_chart::strategy::{Expiration, OptionStrategy, StrategyForm, StrategyKind, StrategyParameters};
use payoff_chart::ChartError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn strategy(params: StrategyParameters) -> OptionStrategy {
    OptionStrategy::new(params, Expiration::new("2024-12-20").unwrap()).unwrap()
}

#[test]
fn test_price_map_round_trip() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..1_000 {
        let strike = rng.gen_range(0.5..5_000.0);
        let mapper = ScaleMapper::from_parts(strike, rng.gen_range(0.0..50.0)).unwrap();
        let plot_width = rng.gen_range(10.0..4_000.0);
        let price = rng.gen_range(0.0..=2.0 * strike);

        let x = mapper.price_to_x(price, plot_width);
        let back = mapper.x_to_price(x, plot_width);
        let tol = 1e-9 * strike.max(1.0);
        assert!(
            (back - price).abs() < tol,
            "price {} -> x {} -> {} (strike {})",
            price,
            x,
            back,
            strike
        );
        assert!((0.0..=plot_width * (1.0 + 1e-12)).contains(&x));
    }
}

#[test]
fn test_payoff_map_round_trip_and_midpoint() {
    let mut rng = StdRng::seed_from_u64(11);

    for _ in 0..1_000 {
        let mapper = ScaleMapper::from_parts(rng.gen_range(0.5..5_000.0), rng.gen_range(0.0..500.0))
            .unwrap();
        let plot_height = rng.gen_range(10.0..4_000.0);
        let m = mapper.max_abs_payoff();

        let mid = mapper.payoff_to_y(0.0, plot_height);
        assert!((mid - plot_height / 2.0).abs() < 1e-9 * plot_height);

        let payoff = rng.gen_range(-m..m);
        let back = mapper.y_to_payoff(mapper.payoff_to_y(payoff, plot_height), plot_height);
        assert!((back - payoff).abs() < 1e-9 * m, "{} vs {}", back, payoff);
    }
}

#[test]
fn test_maps_are_monotonic() {
    let mapper = ScaleMapper::from_parts(150.0, 8.0).unwrap();
    let prices: Vec<f64> = (0..=300).map(|p| p as f64).collect();
    for pair in prices.windows(2) {
        assert!(mapper.price_to_x(pair[1], 700.0) > mapper.price_to_x(pair[0], 700.0));
        // higher payoff sits higher on screen
        assert!(mapper.payoff_to_y(pair[1], 500.0) < mapper.payoff_to_y(pair[0], 500.0));
    }
}

#[test]
fn test_axis_scaling_constants() {
    assert_eq!(PAYOFF_MARGIN, 10.0);
    assert_eq!(PREMIUM_SCALE, 2.0);

    // single leg: max(strike, premium * 2) + 10
    let put = StrategyParameters::long_put(20.0, 15.0).unwrap();
    assert_eq!(ScaleMapper::new(&put).unwrap().max_abs_payoff(), 40.0);

    // straddle: max(strike, (call + put) * 2) + 10
    let straddle = StrategyParameters::long_straddle(20.0, 8.0, 7.0).unwrap();
    assert_eq!(ScaleMapper::new(&straddle).unwrap().max_abs_payoff(), 40.0);
}

#[test]
fn test_zero_strike_is_degenerate() {
    let err = ScaleMapper::from_parts(0.0, 5.0).unwrap_err();
    assert_eq!(err, ChartError::DegenerateDomain { strike: 0.0 });
}

#[test]
fn test_huge_but_numeric_input_is_not_charted() {
    // parses cleanly, but the axes would not fit in an f64
    let call = StrategyForm::single_leg("1e308", "5", "2024-12-20")
        .parse(StrategyKind::LongCall)
        .unwrap();
    let err = PayoffChart::new(&call, &ChartConfig::default()).unwrap_err();
    assert_eq!(err, ChartError::DegenerateDomain { strike: 1e308 });

    let put = StrategyForm::single_leg("150", "1e308", "2024-12-20")
        .parse(StrategyKind::LongPut)
        .unwrap();
    let err = PayoffChart::new(&put, &ChartConfig::default()).unwrap_err();
    assert_eq!(err, ChartError::UnboundedPayoffAxis { total_premium: 1e308 });
}

#[test]
fn test_large_strike_gives_finite_coordinates() {
    let call = strategy(StrategyParameters::long_call(1e307, 5.0).unwrap());
    let chart = PayoffChart::new(&call, &ChartConfig::default()).unwrap();
    let mut target = RecordingTarget::new();
    chart.draw(&mut target, ChartLayers::CURVE).unwrap();

    for p in target.polylines().next().unwrap() {
        assert!(p.x.is_finite() && p.y.is_finite(), "{:?}", p);
    }
}

#[test]
fn test_custom_palette_colours_curve() {
    let call = strategy(StrategyParameters::long_call(150.0, 5.0).unwrap());
    let purple = Rgba::rgb(128, 0, 128);
    let palette = Palette {
        call_curve: purple,
        ..Palette::default()
    };
    let chart = PayoffChart::new(&call, &ChartConfig::default())
        .unwrap()
        .with_palette(palette);

    let mut target = RecordingTarget::new();
    chart.draw(&mut target, ChartLayers::CURVE).unwrap();
    match &target.commands[1] {
        DrawCommand::Polyline { stroke, .. } => assert_eq!(stroke.color, purple),
        other => panic!("expected polyline, got {:?}", other),
    }
}

#[test]
fn test_recorded_chart_contents() {
    let straddle = strategy(StrategyParameters::long_straddle(150.0, 5.0, 3.0).unwrap());
    let chart = PayoffChart::new(&straddle, &ChartConfig::default()).unwrap();
    let mut target = RecordingTarget::new();
    chart.draw(&mut target, ChartLayers::ALL).unwrap();

    let texts: Vec<&str> = target.texts().collect();
    println!("\nChart texts: {:?}", texts);
    for expected in [
        "Long Straddle - Expiration: 2024-12-20, Strike: $150.00, Call: $5.00, Put: $3.00",
        "Underlying Price",
        "Profit/Loss",
        "Strike: $150.00",
        "BE Up: $158.00",
        "BE Down: $142.00",
        "$160.00",
        "$-160.00",
        "$300.00",
    ] {
        assert!(texts.contains(&expected), "missing label {:?}", expected);
    }

    assert_eq!(target.dots().count(), 2);
    assert_eq!(target.polylines().count(), 1);
    assert_eq!(target.polylines().next().unwrap().len(), 512);
    // one column between each pair of samples
    assert_eq!(target.fill_rects().count(), 511);
}

#[test]
fn test_zero_line_sits_mid_surface() {
    let call = strategy(StrategyParameters::long_call(150.0, 5.0).unwrap());
    let config = ChartConfig::default();
    let chart = PayoffChart::new(&call, &config).unwrap();
    assert_eq!(chart.zero_y(), config.height as f64 / 2.0);
    assert_eq!(chart.screen_x(150.0), config.width as f64 / 2.0);
}

#[test]
fn test_region_colours_follow_sign() {
    let call = strategy(StrategyParameters::long_call(150.0, 5.0).unwrap());
    let mut config = ChartConfig::default();
    config.sample_count = 7;
    let chart = PayoffChart::new(&call, &config).unwrap();

    let mut target = RecordingTarget::new();
    chart.draw(&mut target, ChartLayers::REGIONS).unwrap();

    // prices 0, 50, ..., 300: four loss columns start below 155, two profit columns above
    let colours: Vec<(u8, u8)> = target.fill_rects().map(|(_, _, c)| (c.r, c.g)).collect();
    assert_eq!(
        colours,
        vec![(255, 0), (255, 0), (255, 0), (255, 0), (0, 255), (0, 255)]
    );
}

#[test]
fn test_layers_select_what_is_drawn() {
    let put = strategy(StrategyParameters::long_put(150.0, 3.0).unwrap());
    let chart = PayoffChart::new(&put, &ChartConfig::default()).unwrap();

    let mut target = RecordingTarget::new();
    chart.draw(&mut target, ChartLayers::CURVE).unwrap();
    assert!(matches!(target.commands[0], DrawCommand::Clear { .. }));
    assert_eq!(target.commands.len(), 2);
    assert_eq!(target.texts().count(), 0);

    chart.draw(&mut target, ChartLayers::TITLE).unwrap();
    assert_eq!(
        target.texts().collect::<Vec<_>>(),
        vec!["Long Put - Expiration: 2024-12-20, Strike: $150.00, Premium: $3.00"]
    );
}

#[test]
fn test_out_of_range_break_even_is_skipped() {
    // break-even at 150 - 200 < 0, off the left edge
    let put = strategy(StrategyParameters::long_put(150.0, 200.0).unwrap());
    let chart = PayoffChart::new(&put, &ChartConfig::default()).unwrap();
    let mut target = RecordingTarget::new();
    chart.draw(&mut target, ChartLayers::MARKERS).unwrap();

    assert_eq!(target.dots().count(), 0);
    assert!(target.texts().any(|t| t == "Strike: $150.00"));
}

#[test]
fn test_form_to_svg() {
    let form = StrategyForm::single_leg("150", "5", "2024-12-20");
    let call = form.parse(StrategyKind::LongCall).unwrap();
    let chart = PayoffChart::new(&call, &ChartConfig::default()).unwrap();

    let svg = render_svg(&chart, ChartLayers::ALL).unwrap();
    assert!(svg.contains("<svg"));
    assert!(svg.contains("</svg>"));
    assert!(svg.contains("BE: $155.00"));
}

#[test]
fn test_display_list_json() {
    let call = strategy(StrategyParameters::long_call(150.0, 5.0).unwrap());
    let mut config = ChartConfig::default();
    config.sample_count = 16;
    let chart = PayoffChart::new(&call, &config).unwrap();

    let mut target = RecordingTarget::new();
    chart.draw(&mut target, ChartLayers::ALL).unwrap();
    let json = target.to_json().unwrap();
    let back: RecordingTarget = serde_json::from_str(&json).unwrap();
    assert_eq!(back.commands.len(), target.commands.len());
    assert!(json.contains("\"op\": \"polyline\""));
}

#[test]
fn test_chart_markers_export() {
    let straddle = strategy(StrategyParameters::long_straddle(150.0, 5.0, 3.0).unwrap());
    let chart = PayoffChart::new(&straddle, &ChartConfig::default()).unwrap();

    let path = std::env::temp_dir().join(format!("payoff_markers_{}.csv", std::process::id()));
    output::write_markers_to_csv(&path, &chart.curve().markers).unwrap();
    let csv = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    println!("\nMarkers CSV:\n{}", csv);
    assert_eq!(
        csv,
        "marker,price\nstrike,150\nbreak_even_up,158\nbreak_even_down,142\n"
    );
}
