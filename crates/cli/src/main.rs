use std::{env, path::PathBuf, str::FromStr};

use clap::Parser;
use web3dapp_core::{LevelFilter, load_env_from_project_path, setup_info_logger, setup_logger};

use crate::project_location::ProjectLocation;
use crate::{
    cli_interface::{Cli, Commands},
    commands::{init, network},
    error::CliError,
};

mod cli_interface;
mod commands;
mod console;
pub use console::{print_error_message, print_success_message};

mod error;
mod project_location;

fn resolve_path(override_path: &Option<String>) -> Result<PathBuf, String> {
    let path = match override_path {
        Some(path) => {
            PathBuf::from_str(path).map_err(|_| format!("Invalid path provided: '{}'", path))?
        }
        None => env::current_dir().map_err(|_| "Failed to get current directory.".to_string())?,
    };

    path.canonicalize().map_err(|e| format!("Failed to resolve path '{}': {}", path.display(), e))
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Init { path, name } => {
            setup_info_logger();
            let resolved_path = resolve_path(path).inspect_err(|e| print_error_message(e))?;

            init::handle_init(&resolved_path, name.as_deref())
                .inspect_err(|e| print_error_message(&e.to_string()))?;
        }
        Commands::Network { path, command } => {
            let resolved_path = resolve_path(path).inspect_err(|e| print_error_message(e))?;
            load_env_from_project_path(&resolved_path);

            let project_location = ProjectLocation::new(resolved_path);
            let setup_config = project_location
                .setup_config()
                .inspect_err(|e| print_error_message(&e.to_string()))?;

            match &setup_config {
                Some(config) => setup_logger(config.level_filter().unwrap_or(LevelFilter::INFO)),
                None => setup_info_logger(),
            }

            let registry = project_location
                .registry(setup_config.as_ref())
                .inspect_err(|e| print_error_message(&e.to_string()))?;

            network::handle_network(command, &registry)?;
        }
    }

    Ok(())
}
