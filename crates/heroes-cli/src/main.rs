use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::heroes::HeroCommand;
use std::net::SocketAddr;
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "heroes")]
#[command(about = "Heroes CLI - fetch and edit the api/heroes collection", long_about = None)]
struct Cli {
    /// Path to a TOML config file (defaults to <config_dir>/heroes/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Base URL of the backend, overriding config and environment
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Hero(HeroCommand),
    /// Run the in-memory mock backend
    Serve {
        #[arg(long, default_value = "127.0.0.1:8080")]
        addr: SocketAddr,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    commands::logging::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Hero(command) => {
            let config = commands::heroes::load_config(cli.config, cli.base_url)?;
            let service = commands::heroes::build_service(&config)?;
            commands::heroes::run(&service, command).await?;
        }
        Commands::Serve { addr } => commands::serve::run(addr).await?,
    }

    Ok(())
}
