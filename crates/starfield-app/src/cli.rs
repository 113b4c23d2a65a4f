use clap::Parser;

/// Starfield: an interactive particle field that scatters away from the
/// pointer and drifts back home.
#[derive(Parser, Debug)]
#[command(name = "starfield", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log filter override, e.g. `starfield=debug` or `debug`.
    #[arg(long)]
    pub log_level: Option<String>,

    /// Print the effective config as JSON and exit.
    #[arg(long)]
    pub print_config: bool,

    /// Run TICKS simulation steps without a window and log a summary.
    #[arg(long, value_name = "TICKS")]
    pub headless: Option<u64>,

    /// Seed for the particle spawn layout (overrides `particles.seed`).
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn parse() -> Args {
    Args::parse()
}
