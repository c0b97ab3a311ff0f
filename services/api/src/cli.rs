use crate::console::{run_calculate, run_compare, run_paths, CalculateArgs, CompareArgs, PathsArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use scam_score::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Scam Score",
    about = "Score the return on an education path from the command line or over HTTP",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Calculate ROI and Scam Score for one set of selections
    Calculate(CalculateArgs),
    /// Compare two education paths side by side
    Compare(CompareArgs),
    /// List the identifiers available in the reference catalog
    Paths(PathsArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Calculate(args) => run_calculate(args),
        Command::Compare(args) => run_compare(args),
        Command::Paths(args) => run_paths(args),
    }
}
