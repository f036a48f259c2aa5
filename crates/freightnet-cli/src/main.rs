use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod commands;
mod output;

use output::OutputFormat;

#[derive(Parser, Debug)]
#[command(author, version, about = "Distribution-network route planning utilities")]
struct Cli {
    /// Path to a network scenario file (JSON). Defaults to the built-in
    /// sample network.
    #[arg(long, global = true)]
    network: Option<PathBuf>,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the minimum-cost route between two nodes.
    Route {
        /// Origin node name.
        #[arg(long = "from")]
        from: String,
        /// Destination node name.
        #[arg(long = "to")]
        to: String,
        /// Stop enumerating after this many paths.
        #[arg(long)]
        max_paths: Option<usize>,
    },
    /// Enumerate every route between two nodes, ranked by cost.
    Compare {
        /// Origin node name.
        #[arg(long = "from")]
        from: String,
        /// Destination node name.
        #[arg(long = "to")]
        to: String,
        /// Show at most this many routes.
        #[arg(long, default_value_t = 5)]
        top: usize,
        /// Stop enumerating after this many paths.
        #[arg(long)]
        max_paths: Option<usize>,
    },
    /// Simulate the failure of one road and report fallback routes.
    Simulate {
        /// Origin of the failing road.
        #[arg(long = "from")]
        from: String,
        /// Destination of the failing road.
        #[arg(long = "to")]
        to: String,
    },
    /// Classify every road as critical, important, or neutral and flag
    /// cut-risk nodes.
    Robustness,
    /// Print statistics about the network topology.
    Stats,
    /// Write the sample scenario file to disk.
    Init {
        /// Destination file.
        #[arg(long, default_value = "network.json")]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let scenario = cli.network.as_deref();
    let format = cli.format;

    match cli.command {
        Command::Route {
            from,
            to,
            max_paths,
        } => commands::route::run(scenario, &from, &to, max_paths, format),
        Command::Compare {
            from,
            to,
            top,
            max_paths,
        } => commands::compare::run(scenario, &from, &to, top, max_paths, format),
        Command::Simulate { from, to } => commands::simulate::run(scenario, &from, &to, format),
        Command::Robustness => commands::robustness::run(scenario, format),
        Command::Stats => commands::stats::run(scenario, format),
        Command::Init { output } => commands::init::run(&output),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
