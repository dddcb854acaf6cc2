use clap::Parser;
use serverless_demos::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Users(args) => cli::users::run(args).await,
        Command::Routing(args) => cli::routing::run(args).await,
    }
}
