pub mod error;
pub mod provider;

pub use self::error::TreeError;
pub use self::provider::{load_snapshot, GitTreeProvider, TreeProvider, TreeSnapshot};
