use crate::core_git::TreeSnapshot;
use crate::Config;
use log::debug;
use std::net::{IpAddr, Ipv4Addr};
use tokio::net::TcpListener;

/// Per-connection state.
///
/// The root listing is captured once when the session starts and never
/// refreshed, so every LIST of a session shows the same tree.
#[derive(Debug)]
pub struct Session {
    pub identity_label: String,
    pub root_entries: Vec<String>,
    pub pasv_address: Ipv4Addr, // Advertised in 227 replies
    pub bind_address: IpAddr,   // Local interface passive listeners bind to
    pasv_listener: Option<TcpListener>,
}

impl Session {
    pub fn new(config: &Config, snapshot: TreeSnapshot) -> Self {
        Self {
            identity_label: snapshot.identity,
            root_entries: snapshot.entries,
            pasv_address: config.server.pasv_address,
            bind_address: config.server.listen_address,
            pasv_listener: None,
        }
    }

    pub fn greeting(&self) -> String {
        format!("220 Browsing at SHA ({})", self.identity_label)
    }

    pub fn has_pasv_listener(&self) -> bool {
        self.pasv_listener.is_some()
    }

    /// Stores the listener of a successful PASV, closing any unused one.
    pub fn set_pasv_listener(&mut self, listener: TcpListener) {
        self.close_pasv_listener();
        self.pasv_listener = Some(listener);
    }

    /// Hands the pending listener to LIST; the slot is empty afterwards.
    pub fn take_pasv_listener(&mut self) -> Option<TcpListener> {
        self.pasv_listener.take()
    }

    pub fn close_pasv_listener(&mut self) {
        if let Some(stale) = self.pasv_listener.take() {
            debug!("Closing unused passive listener {:?}", stale.local_addr());
            drop(stale);
        }
    }

    /// Closes a passive listener still pending when the command loop ends.
    pub fn terminate(&mut self) {
        self.close_pasv_listener();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        let snapshot = TreeSnapshot {
            identity: "abc1234".to_string(),
            entries: vec!["a.txt".to_string(), "b.txt".to_string()],
        };
        Session::new(&Config::default(), snapshot)
    }

    #[test]
    fn test_greeting_shows_identity() {
        assert_eq!(session().greeting(), "220 Browsing at SHA (abc1234)");
    }

    #[tokio::test]
    async fn test_take_clears_slot() {
        let mut session = session();
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        session.set_pasv_listener(listener);
        assert!(session.has_pasv_listener());

        assert!(session.take_pasv_listener().is_some());
        assert!(!session.has_pasv_listener());
        assert!(session.take_pasv_listener().is_none());
    }

    #[tokio::test]
    async fn test_set_supersedes_pending_listener() {
        let mut session = session();
        let first = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let first_addr = first.local_addr().unwrap();
        session.set_pasv_listener(first);

        let second = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let second_addr = second.local_addr().unwrap();
        assert_ne!(first_addr, second_addr);
        session.set_pasv_listener(second);

        assert!(tokio::net::TcpStream::connect(first_addr).await.is_err());
        let pending = session.take_pasv_listener().unwrap();
        assert_eq!(pending.local_addr().unwrap(), second_addr);
    }

    #[tokio::test]
    async fn test_terminate_closes_listener() {
        let mut session = session();
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        session.set_pasv_listener(listener);

        session.terminate();
        assert!(!session.has_pasv_listener());
        assert!(tokio::net::TcpStream::connect(addr).await.is_err());
    }
}
