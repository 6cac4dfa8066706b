use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::types::{ChainId, ChainOpts, ConfigError};

/// Connector kind handled by this crate.
pub const ALEO_CHAIN_TYPE: &str = "aleo";

/// Chain configuration shared by every connector type.
///
/// Well-known fields are typed; anything connector specific travels in `opts`
/// and is interpreted by the connector's own builder.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct GenericChainConfig {
    pub name: String,
    pub id: ChainId,
    pub endpoint: String,
    pub from: String,
    pub keystore_path: String,
    pub blockstore_path: String,
    pub fresh_start: bool,
    #[serde(default)]
    pub opts: ChainOpts,
}

// Config structures
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RawChainConfig {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub id: ChainId,
    pub endpoint: String,
    #[serde(default)]
    pub from: String,
    #[serde(default)]
    pub opts: ChainOpts,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct ChainsFile {
    pub chains: Vec<RawChainConfig>,
}

/// Process-wide settings supplied on the command line rather than per chain.
#[derive(Debug, Clone, Default)]
pub struct PathSettings {
    pub keystore_path: String,
    pub blockstore_path: String,
    pub fresh_start: bool,
}

impl ChainsFile {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: PathBuf::from(path),
            source,
        })?;
        Self::from_json_str(&json)
    }
}

impl RawChainConfig {
    pub fn into_generic(self, paths: &PathSettings) -> Result<GenericChainConfig, ConfigError> {
        if self.kind != ALEO_CHAIN_TYPE {
            return Err(ConfigError::UnsupportedChainType {
                chain: self.name,
                kind: self.kind,
            });
        }

        Ok(GenericChainConfig {
            name: self.name,
            id: self.id,
            endpoint: self.endpoint,
            from: self.from,
            keystore_path: paths.keystore_path.clone(),
            blockstore_path: paths.blockstore_path.clone(),
            fresh_start: paths.fresh_start,
            opts: self.opts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHAINS_JSON: &str = r#"{
        "chains": [
            {
                "name": "aleo-testnet",
                "type": "aleo",
                "id": 3,
                "endpoint": "https://custodian.example.com",
                "from": "aleo1custodian",
                "opts": { "http": "true", "startBlock": "1200" }
            },
            {
                "name": "aleo-devnet",
                "type": "aleo",
                "id": 4,
                "endpoint": "http://localhost:3030"
            }
        ]
    }"#;

    fn paths() -> PathSettings {
        PathSettings {
            keystore_path: "./keys".to_string(),
            blockstore_path: "./blockstore".to_string(),
            fresh_start: true,
        }
    }

    #[test]
    fn parses_chains_file_with_optional_fields() {
        let file = ChainsFile::from_json_str(CHAINS_JSON).unwrap();

        assert_eq!(file.chains.len(), 2);
        assert_eq!(file.chains[0].opts.get("startBlock").map(String::as_str), Some("1200"));
        assert!(file.chains[1].from.is_empty());
        assert!(file.chains[1].opts.is_empty());
    }

    #[test]
    fn into_generic_merges_path_settings() {
        let raw = ChainsFile::from_json_str(CHAINS_JSON).unwrap().chains.remove(0);
        let generic = raw.into_generic(&paths()).unwrap();

        assert_eq!(generic.name, "aleo-testnet");
        assert_eq!(generic.id, 3);
        assert_eq!(generic.from, "aleo1custodian");
        assert_eq!(generic.keystore_path, "./keys");
        assert_eq!(generic.blockstore_path, "./blockstore");
        assert!(generic.fresh_start);
        assert_eq!(generic.opts.len(), 2);
    }

    #[test]
    fn rejects_other_chain_types() {
        let raw = RawChainConfig {
            name: "goerli".to_string(),
            kind: "ethereum".to_string(),
            id: 1,
            endpoint: "ws://localhost:8546".to_string(),
            from: String::new(),
            opts: ChainOpts::new(),
        };

        let err = raw.into_generic(&paths()).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::UnsupportedChainType { ref chain, ref kind } if chain == "goerli" && kind == "ethereum"
        ));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = ChainsFile::from_json_str(r#"{ "chains": [ { "name": 1 } ] }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Malformed(_)));
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");

        let err = ChainsFile::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Io { path: ref p, .. } if p == &path));
    }
}
