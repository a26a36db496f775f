mod config;
mod context;
mod errors;
mod logging;
mod security;
mod shell;
mod tools;


use crate::config::Config;
use crate::context::DirectoryContext;
use crate::shell::{Screen, Shell};
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "lockedme")]
#[command(about = "Browse, create, delete and search files in one directory")]
#[command(version)]
struct Cli {
    /// Config file (TOML, or JSON with a .json extension)
    #[arg(long = "config")]
    config: Option<PathBuf>,

    /// Start in this directory instead of asking
    #[arg(long = "dir")]
    dir: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let explicit = cli.config.is_some();
    let config_path = cli.config.unwrap_or_else(|| PathBuf::from("lockedme.toml"));
    let cfg = Config::load_or_default(&config_path, explicit).context("loading config")?;
    cfg.validate().context("validating config")?;

    logging::init(&cfg.logging);

    let mut ctx = match &cfg.root.root_dir {
        Some(dir) => DirectoryContext::new(dir),
        None => DirectoryContext::from_cwd(),
    }
    .context("resolving start directory")?;

    let start = match &cli.dir {
        Some(dir) => {
            ctx.set_root(dir).with_context(|| format!("--dir {}", dir.display()))?;
            Screen::MainMenu
        }
        None => Screen::ChooseDirectory,
    };

    info!(root = %ctx.current().display(), app = %cfg.app.name, "lockedme ready");

    let stdin = std::io::stdin();
    let mut shell = Shell::new(&cfg, ctx, stdin.lock(), std::io::stdout());
    shell.run(start).context("terminal i/o")?;
    Ok(())
}
