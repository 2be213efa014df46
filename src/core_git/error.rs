// Errors raised while resolving the browsed tree
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TreeError {
    #[error("{}", .0.message())]
    Open(git2::Error),

    #[error("{}", .0.message())]
    Resolve(git2::Error),

    #[error("HEAD does not point to a tree")]
    NotATree,

    #[error("tree provider task failed: {0}")]
    Join(String),
}

impl TreeError {
    pub fn to_ftp_response(&self) -> String {
        format!("451 libgit2 error: {}", self)
    }
}
