use anyhow::{Context, Result};
use clap::Subcommand;
use heroes_application::HeroService;
use heroes_core::{ClientConfig, Hero, HeroId, MessageLog, NewHero};
use heroes_infrastructure::{ConfigService, HttpHeroRepository};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum HeroCommand {
    /// List every hero
    List,
    /// Fetch one hero by id
    Get { id: i64 },
    /// Look a hero up by id without treating a miss as an error
    Find { id: i64 },
    /// Create a hero
    Add { name: String },
    /// Rename an existing hero
    Update { id: i64, name: String },
    /// Delete a hero by id
    Delete { id: i64 },
    /// Search heroes by name
    Search { term: String },
}

/// Resolves the client config: file, then environment, then `--base-url`.
pub fn load_config(config_path: Option<PathBuf>, base_url: Option<String>) -> Result<ClientConfig> {
    let config_service = match config_path {
        Some(path) => ConfigService::with_path(path),
        None => ConfigService::new(),
    };
    let mut config = config_service.load().context("failed to load client config")?;
    if let Some(base_url) = base_url {
        config = config.with_base_url(base_url);
    }
    Ok(config)
}

pub fn build_service(config: &ClientConfig) -> Result<HeroService> {
    let repository = HttpHeroRepository::new(config).context("failed to build hero repository")?;
    tracing::debug!(url = repository.heroes_url(), "using heroes endpoint");
    Ok(HeroService::new(Arc::new(repository), MessageLog::new()))
}

/// Runs one command, prints its result as JSON, then the message log.
pub async fn run(service: &HeroService, command: HeroCommand) -> Result<()> {
    match command {
        HeroCommand::List => print_json(&service.list_heroes().await)?,
        HeroCommand::Get { id } => print_json(&service.get_hero(HeroId(id)).await)?,
        HeroCommand::Find { id } => print_json(&service.get_hero_no_404(HeroId(id)).await)?,
        HeroCommand::Add { name } => print_json(&service.add_hero(&NewHero::new(name)).await)?,
        HeroCommand::Update { id, name } => {
            let hero = Hero::new(id, name);
            let updated = service.update_hero(&hero).await.map(|()| hero);
            print_json(&updated)?
        }
        HeroCommand::Delete { id } => print_json(&service.delete_hero(HeroId(id)).await)?,
        HeroCommand::Search { term } => print_json(&service.search_heroes(&term).await)?,
    }

    print_messages(service.messages()).await;
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn print_messages(log: &MessageLog) {
    let messages = log.messages().await;
    if messages.is_empty() {
        return;
    }
    println!();
    println!("Messages");
    for message in messages {
        println!("  {}", message);
    }
}
