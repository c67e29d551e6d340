#[derive(Debug, thiserror::Error, PartialEq, Clone)]
pub enum ApiClientError {
    #[error("Header map construction failed")]
    HeaderMapConstructionFailed,
    #[error("Invalid proxy configuration")]
    InvalidProxyConfiguration,
    #[error("Client construction failed")]
    ClientConstructionFailed,
    #[error("URL encoding of request payload failed")]
    UrlEncodingFailed,
    #[error("Failed to send request to connector {0}")]
    RequestNotSent(String),
    #[error("Failed to decode response")]
    ResponseDecodingFailed,
    #[error("Server responded with Request Timeout")]
    RequestTimeoutReceived,
}

#[derive(Debug, thiserror::Error, PartialEq, Clone)]
pub enum ConnectorError {
    #[error("Failed to obtain authentication type")]
    FailedToObtainAuthType,
    #[error("Missing required field: {field_name}")]
    MissingRequiredField { field_name: &'static str },
    #[error("Invalid data format for field: {field_name}")]
    InvalidDataFormat { field_name: &'static str },
    #[error("Failed to convert amount to the connector's format")]
    AmountConversionFailed,
    #[error("Failed to encode connector request")]
    RequestEncodingFailed,
    #[error("Request encoding failed: {0}")]
    RequestEncodingFailedWithReason(String),
    #[error("Failed to deserialize connector response")]
    ResponseDeserializationFailed,
    #[error("{message} is not supported by {connector}")]
    NotSupported {
        message: String,
        connector: &'static str,
    },
    #[error("A transaction sequence needs at least one step")]
    EmptyStepSequence,
}
