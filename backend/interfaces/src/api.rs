use common_utils::{consts, request::Headers, CustomResult};
use domain_types::{
    router_data::ConnectorAuthType,
    router_response_types::{Outcome, Response},
    types::Connectors,
};

pub trait ConnectorCommon {
    /// Name of the connector (in lowercase).
    fn id(&self) -> &'static str;

    /// HTTP header used for authorization.
    fn get_auth_header(
        &self,
        _auth_type: &ConnectorAuthType,
    ) -> CustomResult<Headers, domain_types::errors::ConnectorError> {
        Ok(Vec::new())
    }

    /// HTTP `Content-Type` to be used for POST requests.
    fn common_get_content_type(&self) -> &'static str {
        consts::FORM_URL_ENCODED
    }

    /// The base URL for interacting with the connector's API.
    fn base_url<'a>(&self, connectors: &'a Connectors) -> &'a str;

    /// Whether traffic goes to the connector's test environment.
    fn is_test_mode(&self, _connectors: &Connectors) -> bool {
        false
    }

    /// Outcome for a non-2xx response.
    fn build_error_response(&self, res: Response, test: bool) -> Outcome {
        let body = res.body_text();
        let message = if body.is_empty() {
            consts::NO_ERROR_MESSAGE.to_string()
        } else {
            body
        };
        Outcome::failure(message, test)
    }
}
