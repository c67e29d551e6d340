#[derive(Clone, serde::Deserialize, Debug, Default)]
pub struct Connectors {
    pub adyen: ConnectorParams,
}

#[derive(Clone, serde::Deserialize, Debug, Default)]
pub struct ConnectorParams {
    /// base url, defaults to the connector's test or live endpoint
    pub base_url: Option<String>,
    /// send traffic to the connector's test environment
    #[serde(default)]
    pub test_mode: bool,
}

#[derive(Debug, serde::Deserialize, Clone, Default)]
pub struct Proxy {
    pub http_url: Option<String>,
    pub https_url: Option<String>,
    pub idle_pool_connection_timeout: Option<u64>,
    pub request_timeout: Option<u64>,
    #[serde(default)]
    pub bypass_proxy_urls: Vec<String>,
}
