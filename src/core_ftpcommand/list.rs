use crate::core_ftpcommand::utils::{send_response, ControlWriter};
use crate::core_network::pasv::accept_pasv_connection;
use crate::session::Session;
use crate::Config;
use log::{error, info, warn};
use std::io;
use std::sync::Arc;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::Mutex;

/// Handles the LIST FTP command.
///
/// Consumes the listener of the preceding PASV: one data connection is
/// accepted, the root entry names are written to it and it is closed before
/// the 226 reply goes out, so 226 marks the end of the listing. The pending
/// listener is gone afterwards whatever the outcome.
pub async fn handle_list_command(
    writer: ControlWriter,
    config: Arc<Config>,
    session: Arc<Mutex<Session>>,
    _arg: String,
) -> Result<(), io::Error> {
    let mut session = session.lock().await;

    let listener = match session.take_pasv_listener() {
        Some(listener) => listener,
        None => return send_response(&writer, "425 Use PASV first").await,
    };

    info!("Listing requested, accepting");
    let mut data_stream =
        match accept_pasv_connection(listener, config.server.pasv_accept_timeout()).await {
            Ok(stream) => stream,
            Err(e) => {
                error!("LIST aborted: {}", e);
                return send_response(&writer, e.to_ftp_response()).await;
            }
        };

    send_response(&writer, "150 Opening ASCII mode data connection for file list").await?;

    if let Err(e) = write_listing(&mut data_stream, &session.root_entries).await {
        warn!("Listing transfer interrupted: {}", e);
    }
    if let Err(e) = data_stream.shutdown().await {
        warn!("Failed to close data connection: {}", e);
    }
    drop(data_stream);

    send_response(&writer, "226 Directory finished").await
}

/// Writes one entry name per line, in the given order.
pub async fn write_listing<W>(stream: &mut W, entries: &[String]) -> Result<(), io::Error>
where
    W: AsyncWrite + Unpin,
{
    let mut payload = String::new();
    for name in entries {
        payload.push_str(name);
        payload.push('\n');
    }
    stream.write_all(payload.as_bytes()).await?;
    stream.flush().await
}
