use crate::core_ftpcommand::utils::{send_response, ControlWriter};
use crate::session::Session;
use crate::Config;
use std::sync::Arc;
use tokio::sync::Mutex;

pub async fn handle_pass_command(
    writer: ControlWriter,
    _config: Arc<Config>,
    _session: Arc<Mutex<Session>>,
    _password: String,
) -> Result<(), std::io::Error> {
    send_response(&writer, "230 Logged in").await
}
