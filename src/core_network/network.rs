use crate::constants::MAX_COMMAND_LINE;
use crate::core_ftpcommand::ftpcommand::FtpCommand;
use crate::core_ftpcommand::handlers::initialize_command_handlers;
use crate::core_ftpcommand::utils::{send_response, ControlWriter};
use crate::core_git::{load_snapshot, TreeProvider};
use crate::session::Session;
use crate::Config;
use anyhow::{Context, Result};
use log::{error, info, warn};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt, BufReader};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::Mutex;

pub async fn start_server(config: Arc<Config>, provider: Arc<dyn TreeProvider>) -> Result<()> {
    let listen_addr = (config.server.listen_address, config.server.listen_port);
    let listener = TcpListener::bind(listen_addr)
        .await
        .with_context(|| format!("Failed to bind control port {:?}", listen_addr))?;
    info!("Server listening on {}", listener.local_addr()?);

    serve(listener, config, provider).await
}

/// Accepts control connections forever, one task per client.
pub async fn serve(
    listener: TcpListener,
    config: Arc<Config>,
    provider: Arc<dyn TreeProvider>,
) -> Result<()> {
    loop {
        let (socket, addr) = listener.accept().await?;
        info!("New connection from {:?}", addr);

        let config = Arc::clone(&config);
        let provider = Arc::clone(&provider);

        tokio::spawn(async move {
            if let Err(e) = handle_connection(socket, config, provider).await {
                warn!("Connection error: {:?}", e);
            }
            info!("Connection closed for {:?}", addr);
        });
    }
}

/// Runs one session: greeting, then the command loop until QUIT or disconnect.
///
/// A tree that cannot be resolved is reported with a single 451 reply and the
/// connection is dropped before any command is read.
pub async fn handle_connection(
    socket: TcpStream,
    config: Arc<Config>,
    provider: Arc<dyn TreeProvider>,
) -> Result<()> {
    let (reader, writer) = socket.into_split();
    let writer: ControlWriter = Arc::new(Mutex::new(writer));

    let snapshot = match load_snapshot(provider).await {
        Ok(snapshot) => snapshot,
        Err(e) => {
            error!("Session setup failed: {}", e);
            send_response(&writer, &e.to_ftp_response()).await?;
            return Ok(());
        }
    };

    let session = Arc::new(Mutex::new(Session::new(&config, snapshot)));
    let greeting = session.lock().await.greeting();
    send_response(&writer, &greeting).await?;

    let result = command_loop(reader, &writer, &config, &session).await;

    session.lock().await.terminate();
    result
}

async fn command_loop<R>(
    reader: R,
    writer: &ControlWriter,
    config: &Arc<Config>,
    session: &Arc<Mutex<Session>>,
) -> Result<()>
where
    R: tokio::io::AsyncRead + Unpin,
{
    let handlers = initialize_command_handlers();
    let mut reader = BufReader::new(reader);
    let mut buffer = Vec::with_capacity(MAX_COMMAND_LINE);

    loop {
        buffer.clear();
        match read_command_line(&mut reader, &mut buffer, config.server.idle_timeout()).await {
            Ok(0) => {
                info!("Client disconnected");
                break;
            }
            Ok(_) => {}
            Err(e) => {
                warn!("Control connection lost: {}", e);
                break;
            }
        }

        let line = String::from_utf8_lossy(&buffer);
        let command = line.trim_end_matches(['\r', '\n']);
        info!("<< {}", command);

        let (cmd, arg) = match FtpCommand::parse(command) {
            Some(parsed) => parsed,
            None => {
                send_response(writer, "502 Unimplemented").await?;
                continue;
            }
        };

        // Every verb `parse` can return is registered.
        let handler = &handlers[&cmd];

        if let Err(e) = handler(
            Arc::clone(writer),
            Arc::clone(config),
            Arc::clone(session),
            arg.to_string(),
        )
        .await
        {
            error!("Error handling command {:?}: {:?}", cmd, e);
            break;
        }

        if cmd == FtpCommand::QUIT {
            break;
        }
    }

    Ok(())
}

/// Reads up to one line, never more than `MAX_COMMAND_LINE` bytes.
/// Returns 0 at end of stream.
async fn read_command_line<R>(
    reader: &mut R,
    buffer: &mut Vec<u8>,
    idle_timeout: Option<Duration>,
) -> io::Result<usize>
where
    R: AsyncBufRead + Unpin,
{
    let mut limited = (&mut *reader).take(MAX_COMMAND_LINE as u64);
    let read = limited.read_until(b'\n', buffer);

    match idle_timeout {
        Some(limit) => tokio::time::timeout(limit, read)
            .await
            .map_err(|_| io::Error::new(io::ErrorKind::TimedOut, "control connection idle"))?,
        None => read.await,
    }
}
