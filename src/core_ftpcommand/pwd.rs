// src/core_ftpcommand/pwd.rs
use crate::core_ftpcommand::utils::{send_response, ControlWriter};
use crate::session::Session;
use crate::Config;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Only the root of the tree is ever browsed, so the working directory is always `/`.
pub async fn handle_pwd_command(
    writer: ControlWriter,
    _config: Arc<Config>,
    _session: Arc<Mutex<Session>>,
    _arg: String,
) -> std::io::Result<()> {
    send_response(&writer, "257 \"/\"").await
}
