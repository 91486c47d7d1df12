use crate::demo::{run_demo, run_evaluate, DemoArgs, EvaluateArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use purchase_advisor::error::AppError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Purchase Advisor",
    about = "Decide whether to buy, wait, or skip a purchase",
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
    /// Score a single purchase from command-line answers
    Evaluate(EvaluateArgs),
    /// Score a handful of sample purchases
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// JSON scoring policy (overrides APP_SCORING_CONFIG)
    #[arg(long)]
    pub(crate) scoring_config: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Evaluate(args) => run_evaluate(args),
        Command::Demo(args) => run_demo(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_serve_without_subcommand() {
        let cli = Cli::try_parse_from(["purchase-advisor"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_evaluate_answers() {
        let cli = Cli::try_parse_from([
            "purchase-advisor",
            "evaluate",
            "--item-type",
            "Producto",
            "--item-name",
            "Kettle",
            "--cost",
            "45",
            "--necessity",
            "Necesidad",
            "--payment",
            "Al contado",
            "--monthly-income",
            "2000",
            "--weekly-work-hours",
            "40",
            "--cheaper-alternative",
            "No",
            "--can-wait",
            "Tal vez",
            "--expected-lifespan",
            "Más de 1 año",
            "--json",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Evaluate(args)) => {
                assert!(args.json);
                assert_eq!(args.can_wait, "Tal vez");
                assert!(args.installment_interest.is_none());
            }
            other => panic!("expected evaluate command, got {other:?}"),
        }
    }
}
