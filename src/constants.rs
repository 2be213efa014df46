// src/constants.rs

/// Longest command line read in one go (verb, separator and a PATH_MAX argument).
pub const MAX_COMMAND_LINE: usize = 10 + 4096;
pub const HEAD_TREE_SPEC: &str = "HEAD^{tree}";
pub const IDENTITY_LABEL_LEN: usize = 7;
pub const DEFAULT_CONFIG_PATH: &str = "/etc/gitftpd.conf";
