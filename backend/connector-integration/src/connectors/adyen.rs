pub mod transformers;

use base64::Engine;
use common_enums::{CardNetwork, Currency};
use common_utils::{
    consts,
    request::{Headers, RequestContent},
    types::{AmountConvertor, MinorUnit, MinorUnitForConnector},
    CustomResult,
};
use domain_types::{
    connector_flow::{Authorize, Capture, Refund, Void},
    connector_types::{PaymentVoidData, PaymentsAuthorizeData, PaymentsCaptureData, RefundsData},
    errors::ConnectorError,
    router_data::ConnectorAuthType,
    router_data_v2::RouterDataV2,
    router_response_types::{Outcome, Response},
    types::Connectors,
};
use error_stack::{report, ResultExt};
use hyperswitch_masking::{Maskable, Secret};
use interfaces::api::ConnectorCommon;
use serde::Serialize;
use transformers::{self as adyen, AdyenAction};

use super::macros::impl_flat_form_integration;
use crate::utils::{flat_form, require_non_blank};

pub const TEST_BASE_URL: &str = "https://pal-test.adyen.com/pal/adapter/httppost";
pub const LIVE_BASE_URL: &str = "https://pal-live.adyen.com/pal/adapter/httppost";

/// Static facts about the connector.
#[derive(Debug, Clone, Copy)]
pub struct ConnectorInfo {
    pub display_name: &'static str,
    pub homepage: &'static str,
    pub supported_countries: &'static [&'static str],
    pub default_currency: Currency,
    pub supported_card_networks: &'static [CardNetwork],
}

pub const ADYEN_CONNECTOR_INFO: ConnectorInfo = ConnectorInfo {
    display_name: "Adyen",
    homepage: "https://www.adyen.com/",
    supported_countries: &["US"],
    default_currency: Currency::EUR,
    supported_card_networks: &[
        CardNetwork::Visa,
        CardNetwork::Mastercard,
        CardNetwork::AmericanExpress,
        CardNetwork::Discover,
        CardNetwork::DinersClub,
        CardNetwork::JCB,
        CardNetwork::Dankort,
        CardNetwork::Maestro,
    ],
};

#[derive(Clone)]
pub struct Adyen {
    amount_converter: &'static (dyn AmountConvertor<Output = MinorUnit> + Sync),
}

impl std::fmt::Debug for Adyen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Adyen").finish_non_exhaustive()
    }
}

impl Adyen {
    pub fn new() -> &'static Self {
        &Self {
            amount_converter: &MinorUnitForConnector,
        }
    }

    pub fn info(&self) -> &'static ConnectorInfo {
        &ADYEN_CONNECTOR_INFO
    }

    fn convert_amount(
        &self,
        amount: MinorUnit,
        currency: Option<Currency>,
    ) -> CustomResult<(MinorUnit, Currency), ConnectorError> {
        let currency = currency.unwrap_or(ADYEN_CONNECTOR_INFO.default_currency);
        let amount = self
            .amount_converter
            .convert(amount, currency)
            .change_context(ConnectorError::AmountConversionFailed)?;
        Ok((amount, currency))
    }

    pub(crate) fn build_auth_headers(
        &self,
        auth_type: &ConnectorAuthType,
    ) -> CustomResult<Headers, ConnectorError> {
        let mut headers = vec![(
            consts::CONTENT_TYPE.to_string(),
            Maskable::new_normal(self.common_get_content_type().to_string()),
        )];
        headers.extend(self.get_auth_header(auth_type)?);
        Ok(headers)
    }

    /// Puts `action` in front of the nested request and renders the flat form body.
    pub(crate) fn encode_action<T: Serialize>(
        &self,
        action: AdyenAction,
        connector_req: &T,
    ) -> CustomResult<RequestContent, ConnectorError> {
        let nested = match serde_json::to_value(connector_req)
            .change_context(ConnectorError::RequestEncodingFailed)?
        {
            serde_json::Value::Object(nested) => nested,
            other => {
                return Err(report!(ConnectorError::RequestEncodingFailed)
                    .attach_printable(format!("expected a nested request, found {other}")))
            }
        };

        let mut tree = flat_form::FormTree::new();
        tree.insert(
            "action".to_string(),
            serde_json::Value::String(action.to_string()),
        );
        tree.extend(nested);

        let body = flat_form::encode(&tree)?;
        tracing::debug!(%action, "encoded flat form request");
        Ok(RequestContent::FormUrlEncoded(body))
    }

    pub(crate) fn handle_flat_response(&self, res: Response, test: bool) -> Outcome {
        let body = res.body_text();
        match flat_form::decode(&body) {
            Ok(fields) => {
                let outcome = adyen::AdyenResponse::from(fields).into_outcome(test);
                tracing::info!(
                    success = outcome.success,
                    message = ?outcome.message,
                    psp_reference = ?outcome.authorization,
                    "connector response classified"
                );
                outcome
            }
            Err(error) => {
                tracing::warn!(?error, "unable to decode connector response");
                Outcome::failure(body, test)
            }
        }
    }

    fn authorise_request(
        &self,
        req: &RouterDataV2<Authorize, PaymentsAuthorizeData>,
    ) -> CustomResult<adyen::AdyenAuthoriseRequest, ConnectorError> {
        let request = &req.request;
        require_non_blank(&request.order_id, "order_id")?;
        if let Some(network) = request.payment_method_data.card_network {
            if !ADYEN_CONNECTOR_INFO.supported_card_networks.contains(&network) {
                return Err(report!(ConnectorError::NotSupported {
                    message: format!("card network {network}"),
                    connector: self.id(),
                }));
            }
        }
        let auth = adyen::AdyenAuthType::try_from(&req.connector_auth_type)?;
        let (amount, currency) = self.convert_amount(request.minor_amount, request.currency)?;
        let router_data = adyen::AdyenRouterData::from((amount, currency, req));
        adyen::AdyenAuthoriseRequest::try_from((&router_data, &auth))
    }

    fn capture_request(
        &self,
        req: &RouterDataV2<Capture, PaymentsCaptureData>,
    ) -> CustomResult<adyen::AdyenModificationEnvelope, ConnectorError> {
        let request = &req.request;
        require_non_blank(&request.order_id, "order_id")?;
        require_non_blank(&request.connector_transaction_id, "connector_transaction_id")?;
        let auth = adyen::AdyenAuthType::try_from(&req.connector_auth_type)?;
        let (amount, currency) =
            self.convert_amount(request.minor_amount_to_capture, request.currency)?;
        let router_data = adyen::AdyenRouterData::from((amount, currency, req));
        Ok(adyen::AdyenModificationEnvelope::from((&router_data, &auth)))
    }

    fn refund_request(
        &self,
        req: &RouterDataV2<Refund, RefundsData>,
    ) -> CustomResult<adyen::AdyenModificationEnvelope, ConnectorError> {
        let request = &req.request;
        require_non_blank(&request.order_id, "order_id")?;
        require_non_blank(&request.connector_transaction_id, "connector_transaction_id")?;
        let auth = adyen::AdyenAuthType::try_from(&req.connector_auth_type)?;
        let (amount, currency) =
            self.convert_amount(request.minor_refund_amount, request.currency)?;
        let router_data = adyen::AdyenRouterData::from((amount, currency, req));
        Ok(adyen::AdyenModificationEnvelope::from((&router_data, &auth)))
    }

    fn cancel_request(
        &self,
        req: &RouterDataV2<Void, PaymentVoidData>,
    ) -> CustomResult<adyen::AdyenModificationEnvelope, ConnectorError> {
        let request = &req.request;
        require_non_blank(&request.order_id, "order_id")?;
        require_non_blank(&request.connector_transaction_id, "connector_transaction_id")?;
        let auth = adyen::AdyenAuthType::try_from(&req.connector_auth_type)?;
        Ok(adyen::AdyenModificationEnvelope::from((req, &auth)))
    }
}

impl ConnectorCommon for Adyen {
    fn id(&self) -> &'static str {
        "adyen"
    }

    fn get_auth_header(
        &self,
        auth_type: &ConnectorAuthType,
    ) -> CustomResult<Headers, ConnectorError> {
        let auth = adyen::AdyenAuthType::try_from(auth_type)
            .change_context(ConnectorError::FailedToObtainAuthType)?;
        let encoded = consts::BASE64_ENGINE.encode(auth.basic_auth_credentials());
        Ok(vec![(
            consts::AUTHORIZATION.to_string(),
            Maskable::new_masked(Secret::new(format!("Basic {encoded}"))),
        )])
    }

    fn base_url<'a>(&self, connectors: &'a Connectors) -> &'a str {
        match connectors.adyen.base_url.as_deref() {
            Some(base_url) => base_url,
            None if connectors.adyen.test_mode => TEST_BASE_URL,
            None => LIVE_BASE_URL,
        }
    }

    fn is_test_mode(&self, connectors: &Connectors) -> bool {
        connectors.adyen.test_mode
    }

    fn build_error_response(&self, res: Response, test: bool) -> Outcome {
        if res.status_code == 401 {
            tracing::warn!("connector rejected the web service credentials");
            return Outcome::failure("Invalid credentials.", test);
        }
        tracing::warn!(status_code = res.status_code, "connector returned an error status");
        Outcome::failure(res.body_text(), test)
    }
}

impl_flat_form_integration!(
    connector: Adyen,
    flow: Authorize,
    request: PaymentsAuthorizeData,
    action: AdyenAction::Authorise,
    body: authorise_request
);

impl_flat_form_integration!(
    connector: Adyen,
    flow: Capture,
    request: PaymentsCaptureData,
    action: AdyenAction::Capture,
    body: capture_request
);

impl_flat_form_integration!(
    connector: Adyen,
    flow: Refund,
    request: RefundsData,
    action: AdyenAction::Refund,
    body: refund_request
);

impl_flat_form_integration!(
    connector: Adyen,
    flow: Void,
    request: PaymentVoidData,
    action: AdyenAction::Cancel,
    body: cancel_request
);
