use clap::Parser;

use nagiosstatus::{safe_run, Bound, State, StatusAggregator};

// Usage: cargo run --example cli_bounds -- --value 91 --max 200 --warning 40 --critical none

#[derive(clap::Parser)]
struct Cli {
    /// Measured value
    #[clap(long)]
    value: f64,
    /// Check value/max as a percentage instead of the raw value
    #[clap(long)]
    max: Option<f64>,
    /// Warning threshold, empty or "none" to disable
    #[clap(long, default_value = "none")]
    warning: Bound,
    /// Critical threshold, empty or "none" to disable
    #[clap(long, default_value = "none")]
    critical: Bound,
    /// Leave the perfdata section out of the output
    #[clap(long)]
    no_perfdata: bool,
}

fn main() {
    let cli = Cli::parse();
    safe_run(|| do_check(&cli), State::Unknown).print_and_exit()
}

fn do_check(cli: &Cli) -> Result<StatusAggregator, anyhow::Error> {
    let mut status = StatusAggregator::new().with_show_perfdata(!cli.no_perfdata);

    match cli.max {
        Some(max) if max <= 0.0 => anyhow::bail!("max must be positive, got {max}"),
        Some(max) => {
            status.check_percentage_threshold("value", cli.value, max, cli.warning, cli.critical)
        }
        None => status.check_threshold("value", cli.value, cli.warning, cli.critical),
    }

    Ok(status)
}
