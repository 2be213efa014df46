use crate::core_ftpcommand::utils::{send_response, ControlWriter};
use crate::session::Session;
use crate::Config;
use log::debug;
use std::sync::Arc;
use tokio::sync::Mutex;

pub async fn handle_cwd_command(
    writer: ControlWriter,
    _config: Arc<Config>,
    _session: Arc<Mutex<Session>>,
    arg: String,
) -> Result<(), std::io::Error> {
    // Acknowledged, the session stays at the root.
    debug!("Ignoring CWD to {:?}", arg);
    send_response(&writer, "250 Smile and nod").await
}
