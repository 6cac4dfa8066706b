use std::{collections::BTreeMap, path::PathBuf};

// ChainBridge identifies chains with a single byte
pub type ChainId = u8;

// Free-form chain options, keyed by option name
pub type ChainOpts = BTreeMap<String, String>;

// Define error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("unable to parse {option}: {value:?}")]
    InvalidOption { option: String, value: String },

    #[error("unknown options encountered: {0:?}")]
    UnknownOptions(ChainOpts),

    #[error("chain {chain} has unsupported type {kind:?}")]
    UnsupportedChainType { chain: String, kind: String },

    #[error("failed to read chain file {}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed chain file: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("invalid configuration for chain {chain}")]
    Chain {
        chain: String,
        source: Box<ConfigError>,
    },
}
