use crate::constants::{HEAD_TREE_SPEC, IDENTITY_LABEL_LEN};
use crate::core_git::error::TreeError;
use git2::{Oid, Repository};
use log::debug;
use std::path::PathBuf;
use std::sync::Arc;

/// Point-in-time view of the browsed root tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeSnapshot {
    /// Abbreviated id of the root tree, shown in the greeting.
    pub identity: String,
    /// Root entry names in the provider's enumeration order.
    pub entries: Vec<String>,
}

/// Source of the root listing served to a session.
///
/// Implementations are called from a blocking context and may do synchronous I/O.
pub trait TreeProvider: Send + Sync {
    fn snapshot(&self) -> Result<TreeSnapshot, TreeError>;
}

/// Reads the tree at `HEAD^{tree}` of an on-disk git repository.
#[derive(Debug, Clone)]
pub struct GitTreeProvider {
    repository: PathBuf,
}

impl GitTreeProvider {
    pub fn new(repository: PathBuf) -> Self {
        Self { repository }
    }
}

impl TreeProvider for GitTreeProvider {
    fn snapshot(&self) -> Result<TreeSnapshot, TreeError> {
        // The repository handle lives only for this call.
        let repo = Repository::open(&self.repository).map_err(TreeError::Open)?;
        let object = repo
            .revparse_single(HEAD_TREE_SPEC)
            .map_err(TreeError::Resolve)?;
        let tree = object.into_tree().map_err(|_| TreeError::NotATree)?;

        let entries = tree
            .iter()
            .map(|entry| String::from_utf8_lossy(entry.name_bytes()).into_owned())
            .collect();
        let identity = identity_label(tree.id());

        debug!(
            "Resolved {} in {} to tree {}",
            HEAD_TREE_SPEC,
            self.repository.display(),
            identity
        );

        Ok(TreeSnapshot { identity, entries })
    }
}

fn identity_label(id: Oid) -> String {
    let mut label = id.to_string();
    label.truncate(IDENTITY_LABEL_LEN);
    label
}

/// Takes a snapshot on the blocking thread pool.
pub async fn load_snapshot(provider: Arc<dyn TreeProvider>) -> Result<TreeSnapshot, TreeError> {
    tokio::task::spawn_blocking(move || provider.snapshot())
        .await
        .map_err(|e| TreeError::Join(e.to_string()))?
}
