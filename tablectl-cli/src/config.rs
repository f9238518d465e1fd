use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use tablectl_core::config::{self, mask_database_url, DATABASE_URL_ENV};
use tablectl_core::TablectlConfig;
use tracing::info;

use crate::commands::CommandContext;

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Write a starter config file
    Init(InitArgs),
    /// Show the effective configuration (password masked)
    Show,
    /// Show config file paths
    Path,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Write ./tablectl.toml instead of ~/.tablectl/config.toml
    #[arg(long)]
    pub local: bool,

    /// Force overwrite existing config
    #[arg(long, short)]
    pub force: bool,
}

pub fn run_config(args: ConfigArgs, ctx: &CommandContext) -> Result<()> {
    match args.command {
        ConfigCommands::Init(args) => run_init(args),
        ConfigCommands::Show => run_show(ctx),
        ConfigCommands::Path => run_path(),
    }
}

fn run_init(args: InitArgs) -> Result<()> {
    let path = if args.local {
        config::local_config_path()
    } else {
        config::global_config_path().context("Could not determine home directory")?
    };

    if path.exists() && !args.force {
        return Err(anyhow!(
            "Config already exists at {}\n\nUse --force to overwrite",
            path.display()
        ));
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    // The URL stays out of the starter file; credentials belong in DATABASE_URL or .env
    let contents = toml::to_string_pretty(&TablectlConfig::default())
        .context("Failed to serialize default config")?;
    std::fs::write(&path, contents)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    info!("Wrote config to {}", path.display());
    println!("{}", path.display());
    Ok(())
}

fn run_show(ctx: &CommandContext) -> Result<()> {
    let mut shown = ctx.config.clone();
    shown.database.url = match ctx.database_url() {
        Ok(url) => Some(mask_database_url(&url)),
        Err(_) => None,
    };

    print!("{}", toml::to_string_pretty(&shown)?);
    if shown.database.url.is_none() {
        println!("\n# no database URL configured (set {})", DATABASE_URL_ENV);
    }
    Ok(())
}

fn run_path() -> Result<()> {
    let global = config::global_config_path().context("Could not determine home directory")?;
    let local = config::local_config_path();

    for (label, path) in [("global", global), ("local", local)] {
        let state = if path.exists() { "found" } else { "missing" };
        println!("{:<6}  {}  ({})", label, path.display(), state);
    }
    Ok(())
}
