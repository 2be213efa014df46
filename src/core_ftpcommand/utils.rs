use std::sync::Arc;
use tokio::io::AsyncWriteExt;
use tokio::net::tcp::OwnedWriteHalf;
use tokio::sync::Mutex;

/// Write half of the control connection, shared with the command handlers.
pub type ControlWriter = Arc<Mutex<OwnedWriteHalf>>;

/// Sends one reply line to the client and flushes it.
pub async fn send_response(writer: &ControlWriter, message: &str) -> Result<(), std::io::Error> {
    let mut writer = writer.lock().await;
    writer.write_all(format!("{}\n", message).as_bytes()).await?;
    writer.flush().await?;
    Ok(())
}
