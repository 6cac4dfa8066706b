use tracing::{error, info, instrument};

use crate::{ChainsFile, ConfigBuilder, ConfigError, ConnectorConfig, PathSettings};

pub struct ConnectorApp {
    chains_file: ChainsFile,
    paths: PathSettings,
    builder: ConfigBuilder,
}

impl ConnectorApp {
    #[instrument(skip_all, fields(config.chains_count = chains_file.chains.len()))]
    pub fn new(chains_file: ChainsFile, paths: PathSettings) -> Self {
        info!("Initializing connector application");

        Self {
            chains_file,
            paths,
            builder: ConfigBuilder::default(),
        }
    }

    pub fn with_builder(mut self, builder: ConfigBuilder) -> Self {
        self.builder = builder;
        self
    }

    /// Build a connector config for every chain, in file order.
    ///
    /// Stops at the first chain that fails; the error carries that chain's name.
    #[instrument(skip(self), fields(fresh_start = self.paths.fresh_start))]
    pub fn build_all(&self) -> Result<Vec<ConnectorConfig>, ConfigError> {
        let mut configs = Vec::with_capacity(self.chains_file.chains.len());

        for raw in &self.chains_file.chains {
            let chain = raw.name.clone();
            let built = raw
                .clone()
                .into_generic(&self.paths)
                .and_then(|mut generic| self.builder.build(&mut generic));

            match built {
                Ok(config) => {
                    info!(
                        chain = %config.name,
                        chain_id = config.id,
                        endpoint = %config.endpoint,
                        http = config.http,
                        start_block = %config.start_block,
                        relayer_id = %config.relayer_id,
                        "Connector config ready"
                    );
                    configs.push(config);
                }
                Err(e) => {
                    error!(chain = %chain, error = %e, "Invalid chain configuration");
                    return Err(ConfigError::Chain {
                        chain,
                        source: Box::new(e),
                    });
                }
            }
        }

        Ok(configs)
    }
}
