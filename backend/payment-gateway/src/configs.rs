use std::path::PathBuf;

use common_utils::consts;
use domain_types::{
    router_data::ConnectorAuthType,
    types::{Connectors, Proxy},
};

use crate::logger::config::Log;

#[derive(Clone, serde::Deserialize, Debug)]
pub struct Config {
    pub common: Common,
    #[serde(default)]
    pub log: Log,
    #[serde(default)]
    pub proxy: Proxy,
    pub connectors: Connectors,
    /// Web service credentials, see [`ConnectorAuthType::SignatureKey`].
    pub credentials: ConnectorAuthType,
}

#[derive(Clone, serde::Deserialize, Debug)]
pub struct Common {
    pub environment: String,
}

impl Common {
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        match self.environment.as_str() {
            "development" | "production" => Ok(()),
            _ => Err(config::ConfigError::Message(format!(
                "Invalid environment '{}'. Must be 'development' or 'production'",
                self.environment
            ))),
        }
    }
}

impl Config {
    /// Function to build the configuration by picking it from default locations
    pub fn new() -> Result<Self, config::ConfigError> {
        Self::new_with_config_path(None)
    }

    /// Function to build the configuration by picking it from default locations
    pub fn new_with_config_path(
        explicit_config_path: Option<PathBuf>,
    ) -> Result<Self, config::ConfigError> {
        let env = consts::Env::current_env();
        let config_path = Self::config_path(&env, explicit_config_path);

        let config = Self::builder(&env)?
            .add_source(config::File::from(config_path).required(false))
            .add_source(
                config::Environment::with_prefix(consts::NAME)
                    .try_parsing(true)
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("proxy.bypass_proxy_urls"),
            )
            .build()?;

        #[allow(clippy::print_stderr)]
        let config: Self = serde_path_to_error::deserialize(config).map_err(|error| {
            eprintln!("Unable to deserialize application configuration: {error}");
            error.into_inner()
        })?;

        // Validate the environment field
        config.common.validate()?;

        Ok(config)
    }

    pub fn builder(
        environment: &consts::Env,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, config::ConfigError> {
        config::Config::builder()
            // Here, it should be `set_override()` not `set_default()`.
            // "env" can't be altered by config field.
            // Should be single source of truth.
            .set_override("env", environment.to_string())
    }

    /// Config path.
    pub fn config_path(
        environment: &consts::Env,
        explicit_config_path: Option<PathBuf>,
    ) -> PathBuf {
        let mut config_path = PathBuf::new();
        if let Some(explicit_config_path_val) = explicit_config_path {
            config_path.push(explicit_config_path_val);
        } else {
            let config_directory: String = "config".into();
            let config_file_name = environment.config_path();

            config_path.push(workspace_path());
            config_path.push(config_directory);
            config_path.push(config_file_name);
        }
        config_path
    }
}

pub fn workspace_path() -> PathBuf {
    if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
        let mut path = PathBuf::from(manifest_dir);
        path.pop();
        path.pop();
        path
    } else {
        PathBuf::from(".")
    }
}
