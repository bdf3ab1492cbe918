pub mod commands;
pub mod utils;

use clap::{Parser, Subcommand};

use crate::types::Role;

#[derive(Parser)]
#[command(name = "meat-freshness-api")]
#[command(about = "Meat Freshness API - impedance-based freshness tracking service")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Run the HTTP server (default)")]
    Serve,

    #[command(about = "Create the database schema and exit")]
    Migrate,

    #[command(about = "Create an account directly in the database")]
    CreateUser {
        #[arg(long, help = "Unique username")]
        username: String,
        #[arg(long, help = "Plain-text password (hashed before storage)")]
        password: String,
        #[arg(long, help = "Role: manager, customer or admin")]
        role: Role,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => commands::serve::handle().await,
        Commands::Migrate => commands::migrate::handle(output_format).await,
        Commands::CreateUser { username, password, role } => {
            commands::user::create(username, password, role, output_format).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_serve() {
        let cli = Cli::try_parse_from(["meat-freshness-api"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(OutputFormat::from_cli(&cli), OutputFormat::Text);
    }

    #[test]
    fn create_user_parses_role() {
        let cli = Cli::try_parse_from([
            "meat-freshness-api",
            "--json",
            "create-user",
            "--username",
            "root",
            "--password",
            "rootpass",
            "--role",
            "admin",
        ])
        .unwrap();
        assert_eq!(OutputFormat::from_cli(&cli), OutputFormat::Json);
        match cli.command {
            Some(Commands::CreateUser { username, role, .. }) => {
                assert_eq!(username, "root");
                assert_eq!(role, Role::Admin);
            }
            _ => panic!("expected create-user"),
        }
    }

    #[test]
    fn create_user_rejects_unknown_role() {
        let result = Cli::try_parse_from([
            "meat-freshness-api",
            "create-user",
            "--username",
            "root",
            "--password",
            "rootpass",
            "--role",
            "butcher",
        ]);
        assert!(result.is_err());
    }
}
