/// Implements `ConnectorIntegration` for a flow of a flat-form connector.
///
/// The connector must provide `build_auth_headers`, `encode_action` and
/// `handle_flat_response`; `$body` is the connector method producing the flow's nested
/// request.
macro_rules! impl_flat_form_integration {
    (
        connector: $connector:ty,
        flow: $flow:ty,
        request: $request:ty,
        action: $action:expr,
        body: $body:ident
    ) => {
        impl interfaces::connector_integration::ConnectorIntegration<$flow, $request>
            for $connector
        {
            fn get_headers(
                &self,
                req: &domain_types::router_data_v2::RouterDataV2<$flow, $request>,
            ) -> common_utils::CustomResult<
                common_utils::request::Headers,
                domain_types::errors::ConnectorError,
            > {
                self.build_auth_headers(&req.connector_auth_type)
            }

            fn get_url(
                &self,
                req: &domain_types::router_data_v2::RouterDataV2<$flow, $request>,
            ) -> common_utils::CustomResult<String, domain_types::errors::ConnectorError> {
                Ok(interfaces::api::ConnectorCommon::base_url(self, &req.connectors).to_string())
            }

            fn get_request_body(
                &self,
                req: &domain_types::router_data_v2::RouterDataV2<$flow, $request>,
            ) -> common_utils::CustomResult<
                common_utils::request::RequestContent,
                domain_types::errors::ConnectorError,
            > {
                let connector_req = self.$body(req)?;
                self.encode_action($action, &connector_req)
            }

            fn handle_response(
                &self,
                req: &domain_types::router_data_v2::RouterDataV2<$flow, $request>,
                res: domain_types::router_response_types::Response,
            ) -> domain_types::router_response_types::Outcome {
                self.handle_flat_response(
                    res,
                    interfaces::api::ConnectorCommon::is_test_mode(self, &req.connectors),
                )
            }
        }
    };
}

pub(crate) use impl_flat_form_integration;
