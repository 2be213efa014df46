use crate::core_git::{GitTreeProvider, TreeProvider};
use crate::core_network::network;
use crate::Config;
use anyhow::Result;
use log::{error, info, warn};
use std::sync::Arc;

/// Runs the FTP server with the provided configuration.
///
/// The repository is probed once so a misconfigured path shows up in the log at
/// startup; sessions still resolve the tree themselves and report failures with 451.
///
/// # Arguments
///
/// * `config` - The server configuration.
///
/// # Returns
///
/// Result<(), anyhow::Error> indicating the success or failure of the operation.
pub async fn run(config: Config) -> Result<()> {
    log_config(&config);

    let provider: Arc<dyn TreeProvider> =
        Arc::new(GitTreeProvider::new(config.server.repository.clone()));

    let probe = Arc::clone(&provider);
    match tokio::task::spawn_blocking(move || probe.snapshot()).await? {
        Ok(snapshot) => info!(
            "Serving tree {} ({} root entries)",
            snapshot.identity,
            snapshot.entries.len()
        ),
        Err(e) => warn!(
            "Repository {} is not browsable yet: {}",
            config.server.repository.display(),
            e
        ),
    }

    match network::start_server(Arc::new(config), provider).await {
        Ok(_) => info!("Server stopped."),
        Err(e) => {
            error!("Failed to start server: {}", e);
            return Err(e);
        }
    }

    Ok(())
}

// Helper function to log configuration options
fn log_config(config: &Config) {
    info!("  Listen Address: {}", config.server.listen_address);
    info!("  Listen Port: {}", config.server.listen_port);
    info!("  PASV Address: {}", config.server.pasv_address);
    info!("  Repository: {}", config.server.repository.display());
    if let Some(secs) = config.server.idle_timeout_secs {
        info!("  Idle Timeout: {}s", secs);
    }
    if let Some(secs) = config.server.pasv_accept_timeout_secs {
        info!("  PASV Accept Timeout: {}s", secs);
    }
}
