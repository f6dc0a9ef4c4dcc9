//! # CLI Layer
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdin, stdout, stderr)
//! - Installs the tracing subscriber
//! - Handles argument parsing
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `setup`: clap argument definitions
//! - `menu`: the numbered menu loop and its prompts
//! - `render`: colored output for results and errors

mod menu;
mod render;
mod setup;

use agenda::api::{AgendaApi, CmdMessage};
use agenda::config::AgendaConfig;
use agenda::error::{AgendaError, Result};
use agenda::store::fs::FileSink;
use clap::Parser;
use directories::ProjectDirs;
use menu::{run_menu, Console};
use render::print_messages;
use setup::{Cli, Commands};
use std::io;
use std::path::PathBuf;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "AGENDA_LOG";

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Some(Commands::Config { ref key, ref value }) => {
            handle_config(&cli, key.as_deref(), value.as_deref())
        }
        Some(Commands::Menu) | None => handle_menu(&cli),
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn config_dir(cli: &Cli) -> Option<PathBuf> {
    cli.config_dir.clone().or_else(|| {
        ProjectDirs::from("com", "agenda", "agenda").map(|dirs| dirs.config_dir().to_path_buf())
    })
}

fn load_config(cli: &Cli) -> AgendaConfig {
    let Some(dir) = config_dir(cli) else {
        return AgendaConfig::default();
    };
    match AgendaConfig::load(&dir) {
        Ok(config) => config,
        Err(e) => {
            warn!(dir = %dir.display(), error = %e, "ignoring unreadable config");
            AgendaConfig::default()
        }
    }
}

fn handle_menu(cli: &Cli) -> Result<()> {
    let config = load_config(cli);
    let dump_file = cli.output.clone().unwrap_or(config.dump_file);
    debug!(dump_file = %dump_file.display(), "starting menu");

    let mut api = AgendaApi::new(FileSink::new(dump_file));
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());
    run_menu(&mut api, &mut console)
}

fn handle_config(cli: &Cli, key: Option<&str>, value: Option<&str>) -> Result<()> {
    let dir = config_dir(cli)
        .ok_or_else(|| AgendaError::Config("Could not determine config dir".into()))?;
    let mut config = AgendaConfig::load(&dir)?;
    let mut out = io::stdout().lock();

    let messages = match (key, value) {
        (None, _) => vec![CmdMessage::info(format!(
            "dump-file = {}",
            config.dump_file.display()
        ))],
        (Some(key), None) => match config.get(key) {
            Some(val) => vec![CmdMessage::info(val)],
            None => vec![CmdMessage::error(format!("Unknown config key: {}", key))],
        },
        (Some(key), Some(value)) => {
            config.set(key, value)?;
            config.save(&dir)?;
            vec![CmdMessage::success(format!("{} set to {}", key, value))]
        }
    };

    print_messages(&mut out, &messages)?;
    Ok(())
}
