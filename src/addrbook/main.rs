use addrbook::api::{AddressBookApi, ConfigAction};
use addrbook::config::BookConfig;
use addrbook::error::{AddrBookError, Result};
use clap::Parser;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

mod args;
mod print;

use args::{Cli, Commands};
use print::{print_config, print_messages};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    // Logs go to stderr so stdout stays clean for command output
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

struct AppContext {
    api: AddressBookApi,
    config_dir: PathBuf,
}

fn run(cli: Cli) -> Result<()> {
    let mut ctx = init_context(cli.config_dir)?;

    match cli.command {
        Some(Commands::Demo) | None => handle_demo(&mut ctx),
        Some(Commands::Validate { phones }) => handle_validate(&ctx, phones),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
    }
}

fn init_context(config_dir: Option<PathBuf>) -> Result<AppContext> {
    let config_dir = match config_dir {
        Some(dir) => dir,
        None => default_config_dir()?,
    };

    let config = load_config(&config_dir);
    tracing::debug!(dir = %config_dir.display(), phone_check = %config.phone_check, "config loaded");

    Ok(AppContext {
        api: AddressBookApi::new(config),
        config_dir,
    })
}

fn default_config_dir() -> Result<PathBuf> {
    ProjectDirs::from("com", "addrbook", "addrbook")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| AddrBookError::Config("Could not determine config dir".into()))
}

fn load_config(dir: &Path) -> BookConfig {
    BookConfig::load(dir).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "falling back to default config");
        BookConfig::default()
    })
}

fn handle_demo(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.demo()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_validate(ctx: &AppContext, phones: Vec<String>) -> Result<()> {
    let result = ctx.api.validate_phones(phones.as_slice())?;
    print_messages(&result.messages);
    if result.has_errors() {
        std::process::exit(1);
    }
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let show_all = matches!(action, ConfigAction::ShowAll);
    let result = ctx.api.config(&ctx.config_dir, action)?;
    if show_all {
        if let Some(config) = &result.config {
            print_config(config);
        }
    }
    print_messages(&result.messages);
    Ok(())
}
