use clap::{Parser, Subcommand};
use colored::*;
use std::process;

mod cmd;

use cmd::generate::GenerateArgs;
use prdkit_cli::config::Config;

#[derive(Parser)]
#[command(name = "prdkit")]
#[command(about = "prdkit - product requirement document authoring")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP API server
    Serve {
        /// Listen port (overrides PORT)
        #[arg(long)]
        port: Option<u16>,
        /// Bind address (overrides HOST)
        #[arg(long)]
        host: Option<String>,
    },
    /// List the built-in PRD templates
    Templates,
    /// Assemble a PRD locally and print it as markdown
    Generate(GenerateArgs),
}

#[tokio::main]
async fn main() {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if let Err(e) = handle_command(cli.command).await {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

async fn handle_command(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Serve { port, host } => {
            prdkit_cli::init_tracing();
            let config = Config::from_env()?.with_overrides(port, host.as_deref())?;

            println!("{}", "Starting prdkit server...".green().bold());
            println!(
                "{} http://{}",
                "Server will run on".cyan(),
                config.socket_addr()
            );
            println!("{} {}", "Database:".cyan(), config.database_path.display());

            prdkit_cli::run_server(config).await
        }
        Commands::Templates => {
            cmd::templates::list_templates();
            Ok(())
        }
        Commands::Generate(args) => cmd::generate::generate(args),
    }
}
