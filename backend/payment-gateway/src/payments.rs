use common_utils::CustomResult;
use connector_integration::connectors::Adyen;
use domain_types::{
    connector_flow::{Authorize, Capture, FlowName, Refund, Void},
    connector_types::{PaymentVoidData, PaymentsAuthorizeData, PaymentsCaptureData, RefundsData},
    errors::ConnectorError,
    router_data::ConnectorAuthType,
    router_data_v2::RouterDataV2,
    router_response_types::Outcome,
    types::Connectors,
};
use error_stack::ResultExt;
use external_services::{
    sequence::MultiStepRun,
    service::{execute_connector_processing_step, HttpClient},
};
use interfaces::{connector_integration::ConnectorIntegration, transport::ConnectorTransport};

use crate::{configs::Config, error::ConfigurationError, logger::instrument};

/// Capture was skipped because the authorization came back without a processor reference.
pub const MISSING_AUTHORIZATION_REFERENCE: &str = "Authorization returned no pspReference to capture";

/// Entry point for every payment operation against the configured connector.
#[derive(Debug, Clone)]
pub struct PaymentGateway<T> {
    transport: T,
    connector: &'static Adyen,
    auth: ConnectorAuthType,
    connectors: Connectors,
}

impl PaymentGateway<HttpClient> {
    pub fn from_config(config: &Config) -> CustomResult<Self, ConfigurationError> {
        let transport = HttpClient::new(config.proxy.clone())
            .change_context(ConfigurationError::TransportSetupFailed)?;
        Ok(Self::new(
            transport,
            config.credentials.clone(),
            config.connectors.clone(),
        ))
    }
}

impl<T: ConnectorTransport> PaymentGateway<T> {
    pub fn new(transport: T, auth: ConnectorAuthType, connectors: Connectors) -> Self {
        Self {
            transport,
            connector: Adyen::new(),
            auth,
            connectors,
        }
    }

    fn execute<F, Req>(&self, request: Req) -> CustomResult<Outcome, ConnectorError>
    where
        Adyen: ConnectorIntegration<F, Req>,
    {
        let router_data =
            RouterDataV2::<F, Req>::new(self.auth.clone(), self.connectors.clone(), request);
        execute_connector_processing_step(&self.transport, self.connector, &router_data)
    }

    #[instrument(skip_all, fields(flow = %FlowName::Authorize, order_id = %request.order_id))]
    pub fn authorize(&self, request: PaymentsAuthorizeData) -> CustomResult<Outcome, ConnectorError> {
        self.execute::<Authorize, _>(request)
    }

    #[instrument(skip_all, fields(flow = %FlowName::Capture, order_id = %request.order_id))]
    pub fn capture(&self, request: PaymentsCaptureData) -> CustomResult<Outcome, ConnectorError> {
        self.execute::<Capture, _>(request)
    }

    #[instrument(skip_all, fields(flow = %FlowName::Refund, order_id = %request.order_id))]
    pub fn refund(&self, request: RefundsData) -> CustomResult<Outcome, ConnectorError> {
        self.execute::<Refund, _>(request)
    }

    #[instrument(skip_all, fields(flow = %FlowName::Void, order_id = %request.order_id))]
    pub fn void(&self, request: PaymentVoidData) -> CustomResult<Outcome, ConnectorError> {
        self.execute::<Void, _>(request)
    }

    /// Authorize, then capture the full amount against the new authorization.
    ///
    /// A failed authorization is returned as is and nothing is captured. An authorization
    /// without a processor reference is not captured either and yields a failed outcome.
    #[instrument(skip_all, fields(flow = %FlowName::Purchase, order_id = %request.order_id))]
    pub fn purchase(&self, request: PaymentsAuthorizeData) -> CustomResult<Outcome, ConnectorError> {
        let capture = request.clone();
        MultiStepRun::new()
            .step(|_| self.authorize(request))
            .step(move |prior| {
                match prior.and_then(|authorization| authorization.authorization.clone()) {
                    Some(reference) => self.capture(capture.to_capture_data(reference)),
                    None => Ok(Outcome::failure(
                        MISSING_AUTHORIZATION_REFERENCE,
                        prior.is_some_and(|authorization| authorization.test),
                    )),
                }
            })
            .run()
    }
}
