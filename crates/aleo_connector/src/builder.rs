use num_bigint::BigUint;
use tracing::{debug, instrument, warn};

use crate::config::GenericChainConfig;
use crate::types::{ChainId, ChainOpts, ConfigError};

// Chain specific options
pub const HTTP_OPT: &str = "http";
pub const START_BLOCK_OPT: &str = "startBlock";
pub const RELAYER_ID_OPT: &str = "relayerId";

/// Relayer identifier used when the chain config does not name one.
pub const DEFAULT_RELAYER_ID: &str = "ab8f33ee-1f93-4cca-a104-a545ec6bec92";

/// Typed configuration for one Aleo custodian connector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectorConfig {
    pub name: String,
    pub id: ChainId,
    /// URL of the custodian's endpoint.
    pub endpoint: String,
    /// Signing key address; not used by the custodian.
    pub from: String,
    /// Location of key files; not used by the custodian.
    pub keystore_path: String,
    /// Location of the blockstore; not used by the custodian.
    pub blockstore_path: String,
    /// Skip the blockstore at start and load every transaction from the custodian.
    pub fresh_start: bool,
    pub http: bool,
    pub start_block: BigUint,
    pub block_confirmations: BigUint,
    pub relayer_id: String,
}

/// Result of [`ConfigBuilder::parse`]: the config plus every option it did not recognize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedConfig {
    pub config: ConnectorConfig,
    pub unrecognized: ChainOpts,
}

impl ParsedConfig {
    /// Accept the config only if every option was recognized.
    pub fn into_config(self) -> Result<ConnectorConfig, ConfigError> {
        if !self.unrecognized.is_empty() {
            return Err(ConfigError::UnknownOptions(self.unrecognized));
        }
        Ok(self.config)
    }
}

#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    default_relayer_id: String,
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self {
            default_relayer_id: DEFAULT_RELAYER_ID.to_string(),
        }
    }
}

impl ConfigBuilder {
    pub fn with_default_relayer_id(mut self, relayer_id: impl Into<String>) -> Self {
        self.default_relayer_id = relayer_id.into();
        self
    }

    /// Build a connector config, draining recognized options from `chain_cfg.opts`.
    ///
    /// Consumption is not rolled back on failure: options handled before the
    /// failing one stay removed, and whatever is left in the map is exactly what
    /// was not consumed.
    #[instrument(skip_all, fields(chain = %chain_cfg.name))]
    pub fn build(
        &self,
        chain_cfg: &mut GenericChainConfig,
    ) -> Result<ConnectorConfig, ConfigError> {
        let mut config = self.defaults(chain_cfg);
        apply_options(&mut config, &mut chain_cfg.opts)?;

        if !chain_cfg.opts.is_empty() {
            return Err(ConfigError::UnknownOptions(chain_cfg.opts.clone()));
        }

        debug!(http = config.http, start_block = %config.start_block, "Connector config built");
        Ok(config)
    }

    /// Build a connector config from a copy of the options, leaving `chain_cfg` untouched.
    ///
    /// Leftover options are returned rather than rejected so the caller can
    /// decide what to do with them.
    #[instrument(skip_all, fields(chain = %chain_cfg.name))]
    pub fn parse(&self, chain_cfg: &GenericChainConfig) -> Result<ParsedConfig, ConfigError> {
        let mut opts = chain_cfg.opts.clone();
        let mut config = self.defaults(chain_cfg);
        apply_options(&mut config, &mut opts)?;

        Ok(ParsedConfig {
            config,
            unrecognized: opts,
        })
    }

    fn defaults(&self, chain_cfg: &GenericChainConfig) -> ConnectorConfig {
        ConnectorConfig {
            name: chain_cfg.name.clone(),
            id: chain_cfg.id,
            endpoint: chain_cfg.endpoint.clone(),
            from: chain_cfg.from.clone(),
            keystore_path: chain_cfg.keystore_path.clone(),
            blockstore_path: chain_cfg.blockstore_path.clone(),
            fresh_start: chain_cfg.fresh_start,
            http: false,
            start_block: BigUint::default(),
            block_confirmations: BigUint::default(),
            relayer_id: self.default_relayer_id.clone(),
        }
    }
}

/// Build a connector config with the default relayer id. See [`ConfigBuilder::build`].
pub fn parse_chain_config(
    chain_cfg: &mut GenericChainConfig,
) -> Result<ConnectorConfig, ConfigError> {
    ConfigBuilder::default().build(chain_cfg)
}

fn apply_options(config: &mut ConnectorConfig, opts: &mut ChainOpts) -> Result<(), ConfigError> {
    let http = opts.get(HTTP_OPT).cloned();
    match http.as_deref() {
        Some("true") => {
            config.http = true;
            opts.remove(HTTP_OPT);
        }
        Some("false") => {
            config.http = false;
            opts.remove(HTTP_OPT);
        }
        // Left in place so it is reported with the other unknown options
        Some(value) => warn!(option = HTTP_OPT, value, "Unexpected http option value"),
        None => {}
    }

    if let Some(start_block) = opts.get(START_BLOCK_OPT).filter(|v| !v.is_empty()) {
        config.start_block =
            parse_block_number(start_block).ok_or_else(|| ConfigError::InvalidOption {
                option: START_BLOCK_OPT.to_string(),
                value: start_block.clone(),
            })?;
        opts.remove(START_BLOCK_OPT);
    }

    if let Some(relayer_id) = opts.get(RELAYER_ID_OPT).filter(|v| !v.is_empty()) {
        config.relayer_id = relayer_id.clone();
        opts.remove(RELAYER_ID_OPT);
    }

    Ok(())
}

// Optional '+' then decimal digits only; heights are never negative.
fn parse_block_number(value: &str) -> Option<BigUint> {
    let digits = value.strip_prefix('+').unwrap_or(value);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    BigUint::parse_bytes(digits.as_bytes(), 10)
}
