mod core_cli;

pub use self::core_cli::Cli;
