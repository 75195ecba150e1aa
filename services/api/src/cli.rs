use crate::report::{run_check, run_rules, CheckArgs, RulesArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use risk_checker::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Risk Checker",
    about = "Infrastructure safety check for your next project",
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
    /// Check a project setup and explain what is likely to break
    Check(CheckArgs),
    /// List every rule the checker evaluates
    Rules(RulesArgs),
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
        Command::Check(args) => run_check(args),
        Command::Rules(args) => run_rules(args),
    }
}
