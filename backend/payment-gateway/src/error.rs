#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("Invalid configuration: {0}")]
    ConfigError(#[from] config::ConfigError),
    #[error("Failed to set up logging: {0}")]
    LoggerError(#[from] crate::logger::setup::LoggerError),
    #[error("Failed to construct the HTTP transport")]
    TransportSetupFailed,
}

#[derive(Debug, thiserror::Error, PartialEq, Clone)]
pub enum InputError {
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}
