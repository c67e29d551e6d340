use std::io::Write;

use domain_types::router_data::ConnectorAuthType;
use hyperswitch_masking::PeekInterface;
use payment_gateway::{configs::Config, logger::config::LogFormat};

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_explicit_config_file() {
    let file = write_config(
        r#"
        [common]
        environment = "production"

        [log.console]
        enabled = false
        level = "WARN"
        log_format = "json"

        [proxy]
        request_timeout = 15

        [connectors.adyen]
        base_url = "http://127.0.0.1:9000/pal/adapter/httppost"

        [credentials]
        auth_type = "SignatureKey"
        api_key = "s3cret"
        key1 = "M1"
        api_secret = "Acme"
        "#,
    );

    let config = Config::new_with_config_path(Some(file.path().to_path_buf())).unwrap();

    assert_eq!(config.common.environment, "production");
    assert!(!config.log.console.enabled);
    assert_eq!(config.log.console.log_format, LogFormat::Json);
    assert_eq!(config.proxy.request_timeout, Some(15));
    assert!(!config.connectors.adyen.test_mode);
    assert_eq!(
        config.connectors.adyen.base_url.as_deref(),
        Some("http://127.0.0.1:9000/pal/adapter/httppost")
    );
    assert!(matches!(
        config.credentials,
        ConnectorAuthType::SignatureKey { ref key1, ref api_secret, .. }
            if key1.peek() == "M1" && api_secret.peek() == "Acme"
    ));
}

#[test]
fn test_invalid_environment_is_rejected() {
    let file = write_config(
        r#"
        [common]
        environment = "staging"

        [connectors.adyen]
        test_mode = true

        [credentials]
        auth_type = "NoKey"
        "#,
    );

    let error = Config::new_with_config_path(Some(file.path().to_path_buf())).unwrap_err();
    assert!(error.to_string().contains("staging"));
}

#[test]
fn test_default_development_config() {
    let config = Config::new().unwrap();

    assert_eq!(config.common.environment, "development");
    assert!(config.connectors.adyen.test_mode);
    assert!(matches!(
        config.credentials,
        ConnectorAuthType::SignatureKey { .. }
    ));
}
