use crate::core_ftpcommand::utils::{send_response, ControlWriter};
use crate::session::Session;
use crate::Config;
use log::debug;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Handles the TYPE FTP command.
///
/// Listings are always sent as plain text, so the requested representation
/// type is acknowledged and otherwise ignored.
pub async fn handle_type_command(
    writer: ControlWriter,
    _config: Arc<Config>,
    _session: Arc<Mutex<Session>>,
    arg: String,
) -> Result<(), std::io::Error> {
    debug!("TYPE {:?} acknowledged without effect", arg);
    send_response(&writer, "200 Sure whatever").await
}
