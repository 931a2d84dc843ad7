use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use squallywood_cli::output::OutputFormat;

mod commands;

#[derive(Parser, Debug)]
#[command(author, version, about = "Squallywood ski trail route finder")]
struct Cli {
    /// Override the trail snapshot directory or file path.
    #[arg(long, global = true, env = "SQUALLYWOOD_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Read trails live from the hosted table instead of the local snapshot.
    #[arg(long, global = true)]
    backend: bool,

    /// Output format for command results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the route with the fewest trail changes between two trails.
    Route {
        /// Starting trail name.
        #[arg(long = "from")]
        from: String,
        /// Destination trail name.
        #[arg(long = "to")]
        to: String,
    },
    /// List every known trail name in alphabetical order.
    Trails,
    /// Download the hosted trail table into the local snapshot.
    Sync,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let source = commands::DataSource::new(cli.data_dir.as_deref(), cli.backend);

    match cli.command {
        Command::Route { from, to } => {
            commands::route::handle_route_command(&source, cli.format, &from, &to)
        }
        Command::Trails => commands::trails::handle_trails_command(&source, cli.format),
        Command::Sync => commands::sync::handle_sync_command(cli.data_dir.as_deref()),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
