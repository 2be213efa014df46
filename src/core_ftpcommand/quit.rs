use crate::core_ftpcommand::utils::{send_response, ControlWriter};
use crate::session::Session;
use crate::Config;
use log::{error, info};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Handles the QUIT FTP command.
///
/// Sends the farewell reply. The command loop stops reading after QUIT and
/// closes the control connection itself.
///
/// # Arguments
///
/// * `writer` - The shared write half of the control connection.
/// * `_config` - A shared server configuration (not used in this command).
/// * `_session` - The client session (not used in this command).
/// * `_arg` - The argument for the QUIT command (not used in this command).
///
/// # Returns
///
/// Result<(), std::io::Error> indicating the success or failure of the operation.
pub async fn handle_quit_command(
    writer: ControlWriter,
    _config: Arc<Config>,
    _session: Arc<Mutex<Session>>,
    _arg: String,
) -> Result<(), std::io::Error> {
    info!("Received QUIT command. Closing connection.");

    if let Err(e) = send_response(&writer, "250 Bye").await {
        error!("Failed to send QUIT response: {}", e);
        return Err(e);
    }

    Ok(())
}
