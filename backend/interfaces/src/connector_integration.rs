use common_utils::{
    request::{Headers, Method, Request, RequestBuilder, RequestContent},
    CustomResult,
};
use domain_types::{
    errors::ConnectorError,
    router_data_v2::RouterDataV2,
    router_response_types::{Outcome, Response},
};

use crate::api::ConnectorCommon;

/// Request building and response handling of one flow `F` for a connector.
pub trait ConnectorIntegration<F, Req>: ConnectorCommon + Sync {
    fn get_headers(&self, req: &RouterDataV2<F, Req>) -> CustomResult<Headers, ConnectorError>;

    fn get_url(&self, req: &RouterDataV2<F, Req>) -> CustomResult<String, ConnectorError>;

    /// Wire body of the request. Failing here aborts the flow before anything is sent.
    fn get_request_body(
        &self,
        req: &RouterDataV2<F, Req>,
    ) -> CustomResult<RequestContent, ConnectorError>;

    fn build_request(&self, req: &RouterDataV2<F, Req>) -> CustomResult<Request, ConnectorError> {
        Ok(RequestBuilder::new()
            .method(Method::Post)
            .url(&self.get_url(req)?)
            .headers(self.get_headers(req)?)
            .set_body(self.get_request_body(req)?)
            .build())
    }

    /// Outcome for a 2xx response. Unreadable bodies become failed outcomes.
    fn handle_response(&self, req: &RouterDataV2<F, Req>, res: Response) -> Outcome;

    fn get_error_response(&self, req: &RouterDataV2<F, Req>, res: Response) -> Outcome {
        self.build_error_response(res, self.is_test_mode(&req.connectors))
    }
}
