use crate::core_ftpcommand::utils::{send_response, ControlWriter};
use crate::core_network::error::PasvError;
use crate::{session::Session, Config};
use log::{debug, error, info};
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::Mutex;

/// Handles the PASV command.
///
/// The new listener is bound while any listener left over from an earlier
/// PASV is still open, so every 227 announces a fresh port. The stale one is
/// closed right after, whether or not the new bind succeeded.
pub async fn handle_pasv_command(
    writer: ControlWriter,
    _config: Arc<Config>,
    session: Arc<Mutex<Session>>,
    _arg: String,
) -> Result<(), std::io::Error> {
    let mut session = session.lock().await;
    if session.has_pasv_listener() {
        info!("PASV supersedes an unused passive listener");
    }

    match open_pasv_listener(session.bind_address).await {
        Ok((listener, port)) => {
            let pasv_desc = format_pasv_address(session.pasv_address, port);
            info!("Opening passive socket on {}", pasv_desc);
            session.set_pasv_listener(listener);
            send_response(&writer, &format!("227 Entering Passive Mode {}", pasv_desc)).await
        }
        Err(e) => {
            error!("PASV failed: {}", e);
            session.close_pasv_listener();
            send_response(&writer, e.to_ftp_response()).await
        }
    }
}

/// Formats an address as the `(h1,h2,h3,h4,p1,p2)` tuple of a 227 reply.
pub fn format_pasv_address(ip: Ipv4Addr, port: u16) -> String {
    let [h1, h2, h3, h4] = ip.octets();
    format!(
        "({},{},{},{},{},{})",
        h1,
        h2,
        h3,
        h4,
        port / 256,
        port % 256
    )
}

/// Binds a listener on a fresh ephemeral port.
/// Returns the listener and the port it is bound to.
pub async fn open_pasv_listener(bind_ip: IpAddr) -> Result<(TcpListener, u16), PasvError> {
    let listener = TcpListener::bind((bind_ip, 0))
        .await
        .map_err(PasvError::PortUnavailable)?;

    let port = match listener.local_addr() {
        Ok(addr) => addr.port(),
        Err(e) => {
            drop(listener);
            return Err(PasvError::AddressQueryFailed(e));
        }
    };

    debug!("PASV listener set up on IP: {}, Port: {}", bind_ip, port);
    Ok((listener, port))
}

/// Accepts exactly one data connection, consuming the listener.
pub async fn accept_pasv_connection(
    listener: TcpListener,
    accept_timeout: Option<Duration>,
) -> Result<TcpStream, PasvError> {
    let accepted = match accept_timeout {
        Some(limit) => tokio::time::timeout(limit, listener.accept())
            .await
            .map_err(|_| PasvError::AcceptTimedOut)?,
        None => listener.accept().await,
    };

    let (data_stream, addr) = accepted.map_err(PasvError::AcceptFailed)?;
    debug!("Accepted data connection from: {}", addr);
    Ok(data_stream)
}
