use clap::Parser;
use std::net::Ipv4Addr;
use std::path::PathBuf;

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(
    name = "gitftpd",
    about = "A read-only FTP server browsing the HEAD tree of a git repository."
)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Git repository to browse (overrides the configuration file)
    #[arg(short, long)]
    pub repository: Option<PathBuf>,

    /// Control port to listen on
    #[arg(short, long)]
    pub port: Option<u16>,

    /// IPv4 address advertised to clients in PASV replies
    #[arg(long)]
    pub pasv_address: Option<Ipv4Addr>,

    /// Enable verbose mode
    #[arg(short, long)]
    pub verbose: bool,
}
