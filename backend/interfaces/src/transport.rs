use common_utils::{request::Request, CustomResult};
use domain_types::{errors::ApiClientError, router_response_types::Response};

/// Sends a fully built request to the connector.
///
/// `Ok(Ok(_))` carries a 2xx response, `Ok(Err(_))` any other HTTP status, and `Err(_)` a
/// failure to get a response at all. Timeouts are the transport's responsibility.
pub trait ConnectorTransport {
    fn call_connector_api(
        &self,
        request: Request,
    ) -> CustomResult<Result<Response, Response>, ApiClientError>;
}

impl<T: ConnectorTransport + ?Sized> ConnectorTransport for &T {
    fn call_connector_api(
        &self,
        request: Request,
    ) -> CustomResult<Result<Response, Response>, ApiClientError> {
        (**self).call_connector_api(request)
    }
}
