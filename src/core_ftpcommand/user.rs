use crate::core_ftpcommand::utils::{send_response, ControlWriter};
use crate::session::Session;
use crate::Config;
use log::info;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Handles the USER FTP command.
///
/// Any username is accepted; the client is asked for a password it is free to make up.
///
/// # Arguments
///
/// * `writer` - The shared write half of the control connection.
/// * `_config` - A shared server configuration (not used in this command).
/// * `_session` - The client session (not used in this command).
/// * `username` - The username provided by the client.
///
/// # Returns
///
/// Result<(), std::io::Error> indicating the success or failure of the operation.
pub async fn handle_user_command(
    writer: ControlWriter,
    _config: Arc<Config>,
    _session: Arc<Mutex<Session>>,
    username: String,
) -> Result<(), std::io::Error> {
    info!("Received USER command with username: {}", username);
    send_response(&writer, "331 Username OK, supply any pass").await
}
