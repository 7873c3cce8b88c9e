use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use slopecheck::sweep::{halving_steps, SweepTable};
use slopecheck::{compare, render, step_sweep, x_range, ChartSpec, Settings};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Compare analytic and finite-difference slopes of y = x^2",
    long_about = None
)]
struct Cli {
    /// TOML settings file; command-line values override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Point at which to take the derivative
    #[arg(long, allow_negative_numbers = true)]
    x0: Option<f64>,

    /// Finite-difference step size h
    #[arg(long, allow_negative_numbers = true)]
    step: Option<f64>,

    /// Chart output path (.svg or .png)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Also print forward/backward/central errors for a halving sequence of h
    #[arg(long)]
    sweep: bool,

    /// Skip chart rendering
    #[arg(long)]
    no_plot: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let mut settings = match &cli.config {
        Some(path) => Settings::load(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => Settings::default(),
    };
    if let Some(x0) = cli.x0 {
        settings.x0 = x0;
    }
    if let Some(h) = cli.step {
        settings.h = h;
    }
    if let Some(output) = cli.output {
        settings.plot.output = output;
    }
    if cli.sweep && settings.sweep.is_empty() {
        settings.sweep = halving_steps(settings.h, 8);
    }
    settings.validate()?;
    tracing::debug!(?settings, "resolved settings");

    let cmp = compare(settings.x0, settings.h);
    println!("{cmp}");

    if !settings.sweep.is_empty() {
        let rows = step_sweep(settings.x0, &settings.sweep);
        println!();
        print!("{}", SweepTable(&rows));
    }

    if !cli.no_plot {
        let xs = x_range(&settings.domain);
        let spec = ChartSpec::build(&cmp, &xs, settings.plot.y_range)?;
        render(&spec, &settings.plot.output, settings.plot.size)?;
        println!("chart written to {}", settings.plot.output.display());
    }

    Ok(())
}
