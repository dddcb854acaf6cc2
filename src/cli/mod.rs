//! CLI module
//!
//! One subcommand per demo service:
//! - `users`: in-memory users API
//! - `routing`: routing demo

pub mod routing;
pub mod server;
pub mod users;

use clap::{Args, Parser, Subcommand};

/// Serverless HTTP demos: a users API and a request-routing showcase
#[derive(Parser)]
#[command(name = "serverless-demos")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the in-memory users API
    Users(ServeArgs),

    /// Run the routing demo
    Routing(ServeArgs),
}

/// Listen address overrides; unset values come from configuration
#[derive(Args, Debug, Clone, Default)]
pub struct ServeArgs {
    /// Host to bind to
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    pub port: Option<u16>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_users_with_port() {
        let cli = Cli::try_parse_from(["serverless-demos", "users", "--port", "9000"]).unwrap();

        match cli.command {
            Command::Users(args) => {
                assert_eq!(args.port, Some(9000));
                assert!(args.host.is_none());
            }
            Command::Routing(_) => panic!("expected users"),
        }
    }

    #[test]
    fn test_parse_routing_with_host() {
        let cli =
            Cli::try_parse_from(["serverless-demos", "routing", "--host", "127.0.0.1"]).unwrap();

        assert!(matches!(
            cli.command,
            Command::Routing(ServeArgs { host: Some(ref h), port: None }) if h == "127.0.0.1"
        ));
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["serverless-demos"]).is_err());
    }
}
