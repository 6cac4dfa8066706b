mod app;
mod builder;
mod config;
pub mod logger;
mod types;

pub use app::ConnectorApp;
pub use builder::{
    parse_chain_config, ConfigBuilder, ConnectorConfig, ParsedConfig, DEFAULT_RELAYER_ID,
    HTTP_OPT, RELAYER_ID_OPT, START_BLOCK_OPT,
};
pub use config::{ChainsFile, GenericChainConfig, PathSettings, RawChainConfig, ALEO_CHAIN_TYPE};
pub use types::{ChainId, ChainOpts, ConfigError};
