use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use escala_cli::commands::{
    archive, create, delete, edit, list, lock, show, unlock, volunteer, withdraw,
};
use escala_cli::{Cli, Commands, Config};
use escala_db::Registry;

fn open_registry(config_path: Option<&Path>) -> Result<(Registry, Config)> {
    let config = Config::load_from(config_path).context("failed to load configuration")?;
    tracing::debug!(?config.database_path, "loaded configuration");
    if let Some(parent) = config.database_path.parent() {
        std::fs::create_dir_all(parent).context("failed to create data directory")?;
    }
    let registry = Registry::open(&config.database_path)
        .with_context(|| format!("failed to open registry at {}", config.database_path.display()))?;
    Ok((registry, config))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let Some(command) = &cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    // Sampled once so every time-sensitive step in this run agrees on "today".
    let reference = cli.date.unwrap_or_else(|| Local::now().date_naive());
    let (mut registry, config) = open_registry(cli.config.as_deref())?;
    let mut stdout = std::io::stdout();

    match command {
        Commands::Create(args) => create::run(&mut stdout, &mut registry, args)?,
        Commands::Edit(args) => edit::run(&mut stdout, &mut registry, args)?,
        Commands::List { all, json } => {
            list::run(&mut stdout, &registry, reference, *all, *json)?;
        }
        Commands::Show { id, json } => {
            show::run(&mut stdout, &registry, id, reference, &config.rank_table(), *json)?;
        }
        Commands::Volunteer { id, name } => {
            volunteer::run(&mut stdout, &mut registry, id, name, reference)?;
        }
        Commands::Withdraw { id, name } => withdraw::run(&mut stdout, &mut registry, id, name)?,
        Commands::Lock { id } => {
            lock::run(&mut stdout, &mut registry, id, reference, &config.rank_table())?;
        }
        Commands::Unlock { id } => unlock::run(&mut stdout, &mut registry, id)?,
        Commands::Archive { id } => archive::run(&mut stdout, &mut registry, id, true)?,
        Commands::Unarchive { id } => archive::run(&mut stdout, &mut registry, id, false)?,
        Commands::Delete { id } => delete::run(&mut stdout, &mut registry, id)?,
    }
    Ok(())
}
