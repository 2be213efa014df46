mod config;
mod constants;
mod core_cli;
mod core_ftpcommand;
mod core_git;
mod core_log;
mod core_network;
mod server;
mod session;

use crate::config::Config;
use crate::constants::DEFAULT_CONFIG_PATH;
use crate::core_cli::Cli;
use crate::core_log::logger::init_logger;
use anyhow::Result;
use clap::Parser;
use log::info;
use std::path::Path;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let args = Cli::parse();

    init_logger(args.verbose);

    // An explicit --config must load; the default location is optional
    let mut config = match &args.config {
        Some(path) => Config::load_from_file(path)?,
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
            Config::load_from_file(Path::new(DEFAULT_CONFIG_PATH))?
        }
        None => {
            info!("No configuration file, using defaults");
            Config::default()
        }
    };

    // Command-line values win over the configuration file
    if let Some(repository) = args.repository {
        config.server.repository = repository;
    }
    if let Some(port) = args.port {
        config.server.listen_port = port;
    }
    if let Some(pasv_address) = args.pasv_address {
        config.server.pasv_address = pasv_address;
    }

    server::run(config).await
}
