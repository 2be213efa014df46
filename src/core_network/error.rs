// Errors of the passive data channel
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PasvError {
    #[error("no passive port could be bound: {0}")]
    PortUnavailable(#[source] io::Error),

    #[error("passive listener address unavailable: {0}")]
    AddressQueryFailed(#[source] io::Error),

    #[error("accept on passive listener failed: {0}")]
    AcceptFailed(#[source] io::Error),

    #[error("no data connection arrived before the accept timeout")]
    AcceptTimedOut,
}

impl PasvError {
    pub fn to_ftp_response(&self) -> &'static str {
        match self {
            PasvError::PortUnavailable(_) => "452 Passive mode port unavailable",
            PasvError::AddressQueryFailed(_) => "452 Passive socket incorrect",
            PasvError::AcceptFailed(_) | PasvError::AcceptTimedOut => {
                "452 Failed to accept() pasv sock"
            }
        }
    }
}
