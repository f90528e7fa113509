// scripts/payoff_chart.rs
//! Draw a payoff chart from the command line.
//!
//! ```text
//! payoff-chart call --strike 150 --premium 5 --expiration 2024-12-20 --svg call.svg
//! payoff-chart straddle --strike 150 --call-premium 5 --put-premium 3 \
//!     --expiration 2024-12-20 --csv straddle.csv --markers-csv markers.csv --json straddle.json
//! ```
//!
//! Chart size and sampling come from `CHART_*` environment variables (or a
//! `.env` file). Relative output paths land in `CHART_OUTPUT_DIR`.

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use payoff_chart::config::ChartConfig;
use payoff_chart::output;
use payoff_chart::render::{render_svg, ChartLayers, PayoffChart, RecordingTarget};
use payoff_chart::session::ChartSession;
use payoff_chart::strategy::{StrategyForm, StrategyKind};
use payoff_chart::ChartResult;

#[derive(Parser)]
#[command(name = "payoff-chart")]
#[command(about = "Expiration payoff diagrams for basic option strategies")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    outputs: Outputs,
}

#[derive(Subcommand)]
enum Commands {
    /// Long call
    Call {
        #[arg(long)]
        strike: String,
        #[arg(long)]
        premium: String,
        /// Expiration label, e.g. 2024-12-20
        #[arg(long)]
        expiration: String,
    },

    /// Long put
    Put {
        #[arg(long)]
        strike: String,
        #[arg(long)]
        premium: String,
        #[arg(long)]
        expiration: String,
    },

    /// Long straddle: call and put at the same strike
    Straddle {
        #[arg(long)]
        strike: String,
        #[arg(long)]
        call_premium: String,
        #[arg(long)]
        put_premium: String,
        #[arg(long)]
        expiration: String,
    },
}

#[derive(Args)]
struct Outputs {
    /// Write the chart as SVG
    #[arg(long, global = true)]
    svg: Option<PathBuf>,

    /// Write the sampled curve as CSV
    #[arg(long, global = true)]
    csv: Option<PathBuf>,

    /// Write the strike and break-even markers as CSV
    #[arg(long, global = true)]
    markers_csv: Option<PathBuf>,

    /// Write the drawing commands as JSON
    #[arg(long, global = true)]
    json: Option<PathBuf>,
}

impl Commands {
    fn into_form(self) -> (StrategyKind, StrategyForm) {
        match self {
            Commands::Call {
                strike,
                premium,
                expiration,
            } => (
                StrategyKind::LongCall,
                StrategyForm::single_leg(strike, premium, expiration),
            ),
            Commands::Put {
                strike,
                premium,
                expiration,
            } => (
                StrategyKind::LongPut,
                StrategyForm::single_leg(strike, premium, expiration),
            ),
            Commands::Straddle {
                strike,
                call_premium,
                put_premium,
                expiration,
            } => (
                StrategyKind::LongStraddle,
                StrategyForm::straddle(strike, call_premium, put_premium, expiration),
            ),
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "payoff chart failed");
            eprintln!("{}", e.user_message());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> ChartResult<()> {
    let config = ChartConfig::from_env()?;
    let (kind, form) = cli.command.into_form();

    let mut session = ChartSession::new();
    session.select(kind);
    let strategy = session.update(&form)?.clone();

    let params = &strategy.params;
    let break_evens = params.break_evens();
    println!("{}", payoff_chart::chart::labels::title(&strategy));
    println!("  Max loss: ${:.2}", params.max_loss());
    match params.max_profit() {
        Some(p) => println!("  Max profit: ${:.2}", p),
        None => println!("  Max profit: unlimited"),
    }
    for be in [break_evens.upper, break_evens.lower].into_iter().flatten() {
        println!("  Break-even: ${:.2}", be);
    }
    if let Some(days) = strategy
        .expiration
        .days_until(chrono::Local::now().date_naive())
    {
        if days < 0 {
            tracing::warn!(days, "expiration is in the past");
        } else {
            println!("  Days to expiration: {}", days);
        }
    }

    let chart = PayoffChart::new(&strategy, &config)?;

    let outputs = &cli.outputs;
    if let Some(path) = &outputs.svg {
        let path = resolve(&config, path);
        fs::write(&path, render_svg(&chart, ChartLayers::ALL)?)?;
        tracing::info!(path = %path.display(), "wrote svg");
    }
    if let Some(path) = &outputs.csv {
        let path = resolve(&config, path);
        output::write_samples_csv(File::create(&path)?, &chart.curve().samples)?;
        tracing::info!(path = %path.display(), samples = chart.curve().samples.len(), "wrote csv");
    }
    if let Some(path) = &outputs.markers_csv {
        let path = resolve(&config, path);
        output::write_markers_csv(File::create(&path)?, &chart.curve().markers)?;
        tracing::info!(path = %path.display(), markers = chart.curve().markers.len(), "wrote markers csv");
    }
    if let Some(path) = &outputs.json {
        let path = resolve(&config, path);
        let mut target = RecordingTarget::new();
        chart.draw(&mut target, ChartLayers::ALL)?;
        fs::write(&path, target.to_json()?)?;
        tracing::info!(path = %path.display(), commands = target.commands.len(), "wrote json");
    }
    Ok(())
}

fn resolve(config: &ChartConfig, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        config.output_dir.join(path)
    }
}
