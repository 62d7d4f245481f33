use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use inventory_editor::config::Config;
use inventory_editor::inventory::{seed_items, ViewQuery, ALL_CATEGORIES};
use inventory_editor::logging::init_tracing;
use inventory_editor::report::render_listing;
use inventory_editor::storage::{InventoryStorage, JsonFileStorage};
use inventory_editor::ui::app::load_items;
use inventory_editor::ui::runtime;

#[derive(Parser)]
#[command(name = "inventory-editor")]
#[command(about = "Terminal inventory list editor with local persistence", long_about = None)]
#[command(version)]
struct Cli {
    /// Config file (default: <config_dir>/inventory-editor/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Storage file, overriding the config
    #[arg(long)]
    storage: Option<PathBuf>,

    /// Log filter directive, overriding the config (RUST_LOG still wins)
    #[arg(long)]
    log_level: Option<String>,

    /// Overwrite the stored collection with the seed items before starting
    #[arg(long)]
    reset: bool,

    /// Print the inventory as plain text and exit
    #[arg(long)]
    list: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("loading configuration")?;

    let level = cli.log_level.as_deref().unwrap_or(&config.logging.level);
    init_tracing(level, &config.log_path())?;

    let storage_path = cli.storage.clone().unwrap_or_else(|| config.storage_path());
    let storage = JsonFileStorage::new(storage_path, config.storage.key.clone());
    tracing::info!(
        "Starting with storage {} (slot {:?})",
        storage.path().display(),
        storage.slot()
    );

    if cli.reset {
        storage
            .save(&seed_items())
            .context("writing seed collection")?;
        tracing::info!("Storage reset to seed collection");
    }

    if cli.list {
        let items = load_items(&storage);
        let query = ViewQuery {
            sort: config.view.into(),
            category: ALL_CATEGORIES,
            search: "",
        };
        print!("{}", render_listing(&items, query, &config.display));
        return Ok(());
    }

    runtime::run(&config, Box::new(storage)).context("running terminal UI")?;
    Ok(())
}
