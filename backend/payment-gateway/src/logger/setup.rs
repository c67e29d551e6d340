//! Setup logging subsystem.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use super::config;

/// Crates of this workspace, logged at the configured level rather than the default one.
const WORKSPACE_MEMBERS: [&str; 7] = [
    "pg_common_enums",
    "pg_common_utils",
    "domain_types",
    "interfaces",
    "connector_integration",
    "external_services",
    "payment_gateway",
];

/// Contains guards necessary for logging
#[derive(Debug)]
pub struct TelemetryGuard {
    _log_guards: Vec<WorkerGuard>,
}

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    #[error("Unable to install the global subscriber: {0}")]
    SubscriberInit(#[from] tracing_subscriber::util::TryInitError),
}

/// Setup logging sub-system specifying the logging configuration, service (binary) name, and a
/// list of external crates for which a more verbose logging must be enabled. All crates within the
/// current cargo workspace are automatically considered for verbose logging.
///
/// Logs are written to stderr, stdout is left to the command output.
pub fn setup(
    config: &config::Log,
    service_name: &str,
    crates_to_filter: impl AsRef<[&'static str]>,
) -> Result<TelemetryGuard, LoggerError> {
    let mut guards = Vec::new();
    let mut subscriber_layers = Vec::new();

    if config.console.enabled {
        let console_filter_directive =
            config
                .console
                .filtering_directive
                .clone()
                .unwrap_or_else(|| {
                    get_envfilter_directive(
                        tracing::Level::WARN,
                        config.console.level.into_level(),
                        crates_to_filter.as_ref(),
                    )
                });
        let console_filter = EnvFilter::builder()
            .with_default_directive(config.console.level.into_level().into())
            .parse_lossy(console_filter_directive);

        let (writer, guard) = tracing_appender::non_blocking(std::io::stderr());
        guards.push(guard);

        let console_layer = match config.console.log_format {
            config::LogFormat::Default => tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_target(true)
                .boxed(),
            config::LogFormat::Json => {
                // Disable color or emphasis related ANSI escape codes for JSON formats
                error_stack::Report::set_color_mode(error_stack::fmt::ColorMode::None);

                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_writer(writer)
                    .boxed()
            }
        };
        subscriber_layers.push(console_layer.with_filter(console_filter).boxed());
    }

    tracing_subscriber::registry()
        .with(subscriber_layers)
        .try_init()?;

    tracing::info!(
        service_name,
        build_version = env!("CARGO_PKG_VERSION"),
        "Logging subsystem initialized"
    );

    // Returning the TelemetryGuard for logs to be printed until it is dropped
    Ok(TelemetryGuard {
        _log_guards: guards,
    })
}

fn get_envfilter_directive(
    default_log_level: tracing::Level,
    filter_log_level: tracing::Level,
    crates_to_filter: impl AsRef<[&'static str]>,
) -> String {
    let mut explicitly_handled_targets = WORKSPACE_MEMBERS.to_vec();
    explicitly_handled_targets.extend(crates_to_filter.as_ref());

    // +1 for the default log level added as a directive
    let num_directives = explicitly_handled_targets.len() + 1;

    explicitly_handled_targets
        .into_iter()
        .map(|crate_name| crate_name.replace('-', "_"))
        .zip(std::iter::repeat(filter_log_level))
        .fold(
            {
                let mut directives = Vec::with_capacity(num_directives);
                directives.push(default_log_level.to_string());
                directives
            },
            |mut directives, (target, level)| {
                directives.push(format!("{target}={level}"));
                directives
            },
        )
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workspace_crates_get_the_configured_level() {
        let directive =
            get_envfilter_directive(tracing::Level::WARN, tracing::Level::DEBUG, ["payment-gateway"]);

        assert!(directive.starts_with("WARN,"));
        assert!(directive.contains("connector_integration=DEBUG"));
        assert!(directive.ends_with("payment_gateway=DEBUG"));
    }
}
