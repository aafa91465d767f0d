#[macro_use]
mod macros;
mod cmd;
mod core;
mod resources;
mod settings;
use std::fmt;

use clap::{Parser, Subcommand};
use env_logger::Env;
use thiserror::Error;

#[derive(Parser)]
#[command(author, version)]
#[command(about = "Resolve the contract configuration of the CryptoDevs DAO frontend")]
struct Cli {
    #[command(flatten)]
    global: cmd::GlobalArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    Config(cmd::Config),
    Abi(cmd::Abi),
    Check(cmd::Check),
}

/// Represents an error that can occur while running the CLI tool
#[derive(Error, Debug)]
enum CliError {
    /// Error related to the config command
    ConfigError(cmd::config::InitError),
    /// Error related to the abi command
    AbiError(cmd::abi::InitError),
    /// Error related to the check command
    CheckError(cmd::check::InitError),
    /// No command was given
    NoCommand,
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CliError::ConfigError(err) => write!(f, "Config error: {}", err),
            CliError::AbiError(err) => write!(f, "Abi error: {}", err),
            CliError::CheckError(err) => write!(f, "Check error: {}", err),
            CliError::NoCommand => write!(f, "No command given, run `dao --help` for usage."),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Config(config)) => {
            config
                .run(&cli.global)
                .await
                .map_err(CliError::ConfigError)?;
            Ok(())
        }
        Some(Commands::Abi(abi)) => {
            abi.run(&cli.global).await.map_err(CliError::AbiError)?;
            Ok(())
        }
        Some(Commands::Check(check)) => {
            check.run(&cli.global).await.map_err(CliError::CheckError)?;
            Ok(())
        }
        None => Err(CliError::NoCommand),
    }
}

#[cfg(test)]
mod tests {
    use super::{Cli, Commands};
    use crate::core::contracts::ContractName;
    use clap::{CommandFactory, Parser};
    use std::path::PathBuf;

    #[test]
    fn can_parse_abi_command() {
        let cli = Cli::try_parse_from([
            "dao",
            "abi",
            "CryptoDevsDAO",
            "--signatures",
            "--artifacts-dir",
            "/srv/artifacts",
        ])
        .unwrap();
        assert_eq!(cli.global.artifacts_dir, Some(PathBuf::from("/srv/artifacts")));
        match cli.command {
            Some(Commands::Abi(abi)) => {
                assert_eq!(abi.contract, ContractName::CryptoDevsDAO);
                assert!(abi.signatures);
            }
            _ => panic!("expected the abi command"),
        }
    }

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn subcommands_have_help() {
        let cli = Cli::command();
        for (name, about) in [
            ("config", "Print the resolved application configuration as JSON"),
            ("abi", "Print the ABI of a deployed contract"),
            ("check", "Check that every contract artifact can be read"),
        ] {
            let subcommand = cli.find_subcommand(name).unwrap();
            let help = subcommand.get_about().unwrap().to_string();
            assert!(help.starts_with(about), "{}: {}", name, help);
        }
    }

    #[test]
    fn rejects_unknown_contract() {
        assert!(Cli::try_parse_from(["dao", "abi", "../CryptoDevsDAO"]).is_err());
    }
}
