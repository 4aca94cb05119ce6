use crate::quiz::{run_plans, run_recommend, PlansArgs, RecommendArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use plan_advisor::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Health Plan Advisor",
    about = "Serve health plan recommendations or run the questionnaire from the command line",
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
    /// Rank the plan catalog for one set of questionnaire answers
    Recommend(RecommendArgs),
    /// Print the side-by-side plan comparison table
    Plans(PlansArgs),
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
        Command::Recommend(args) => run_recommend(args),
        Command::Plans(args) => run_plans(args),
    }
}
