use crate::infra::parse_date;
use crate::server;
use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use loan_decision::config::AppConfig;
use loan_decision::decision::{DecisionEngine, DecisionResponse};
use loan_decision::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Loan Decision Engine",
    about = "Serve or evaluate loan decisions from the command line",
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
    /// Evaluate a single loan request and print the decision as JSON
    Decide(DecideArgs),
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

#[derive(Args, Debug)]
pub(crate) struct DecideArgs {
    /// Estonian personal identity code of the applicant
    #[arg(long)]
    pub(crate) personal_code: String,
    /// Requested loan amount in whole euros
    #[arg(long)]
    pub(crate) amount: i64,
    /// Requested loan period in months
    #[arg(long)]
    pub(crate) period: i32,
    /// Evaluation date used for the age lookup (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Decide(args) => run_decide(args),
    }
}

fn run_decide(args: DecideArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let engine = DecisionEngine::new(config.decision);
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());

    let result =
        engine.calculate_approved_loan_on(&args.personal_code, args.amount, args.period, today);
    let response = match &result {
        Ok(decision) => DecisionResponse::approved(*decision),
        Err(err) => DecisionResponse::rejected(err.to_string()),
    };
    println!("{}", serde_json::to_string_pretty(&response)?);

    result.map(|_| ()).map_err(AppError::from)
}
