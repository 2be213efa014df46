use crate::core_ftpcommand::utils::{send_response, ControlWriter};
use crate::session::Session;
use crate::Config;
use log::info;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Handles the SYST (System) FTP command.
///
/// This function sends a response to the client indicating the system type of the server.
///
/// # Arguments
///
/// * `writer` - The shared write half of the control connection.
///
/// # Returns
///
/// Result<(), std::io::Error> indicating the success or failure of the operation.
pub async fn handle_syst_command(
    writer: ControlWriter,
    _config: Arc<Config>,
    _session: Arc<Mutex<Session>>,
    _arg: String,
) -> Result<(), std::io::Error> {
    info!("Responding to SYST command with system type.");
    send_response(&writer, "215 git").await
}
