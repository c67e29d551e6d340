use std::{collections::HashMap, str::FromStr};

use common_enums::Currency;
use common_utils::{
    pii::{self, Email},
    types::MinorUnit,
};
use domain_types::{
    connector_flow::{Authorize, Capture, Refund, Void},
    connector_types::{PaymentVoidData, PaymentsAuthorizeData, PaymentsCaptureData, RefundsData},
    errors::ConnectorError,
    payment_address::Address,
    payment_method_data::Card,
    router_data::ConnectorAuthType,
    router_data_v2::RouterDataV2,
    router_response_types::Outcome,
};
use hyperswitch_masking::{PeekInterface, Secret};
use serde::Serialize;

use crate::utils::flat_form::FlatFields;

type Error = error_stack::Report<ConnectorError>;

/// Remote operation named in the `action` field of every request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumString)]
pub enum AdyenAction {
    #[strum(serialize = "Payment.authorise")]
    Authorise,
    #[strum(serialize = "Payment.capture")]
    Capture,
    #[strum(serialize = "Payment.refund")]
    Refund,
    #[strum(serialize = "Payment.cancel")]
    Cancel,
}

/// Web service user credentials.
///
/// Carried in [`ConnectorAuthType::SignatureKey`] as `api_key` = password,
/// `key1` = merchant account, `api_secret` = company account.
#[derive(Debug, Clone)]
pub struct AdyenAuthType {
    pub(super) company: Secret<String>,
    pub(super) merchant_account: Secret<String>,
    pub(super) password: Secret<String>,
}

impl TryFrom<&ConnectorAuthType> for AdyenAuthType {
    type Error = Error;
    fn try_from(auth_type: &ConnectorAuthType) -> Result<Self, Self::Error> {
        match auth_type {
            ConnectorAuthType::SignatureKey {
                api_key,
                key1,
                api_secret,
            } if [api_key, key1, api_secret]
                .iter()
                .all(|value| !value.peek().trim().is_empty()) =>
            {
                Ok(Self {
                    company: api_secret.to_owned(),
                    merchant_account: key1.to_owned(),
                    password: api_key.to_owned(),
                })
            }
            _ => Err(ConnectorError::FailedToObtainAuthType.into()),
        }
    }
}

impl AdyenAuthType {
    /// `ws@Company.<company>:<password>`, the user:password pair of the basic auth header.
    pub fn basic_auth_credentials(&self) -> String {
        format!(
            "ws@Company.{}:{}",
            self.company.peek(),
            self.password.peek()
        )
    }
}

/// Request data paired with the amount already converted for the connector.
pub struct AdyenRouterData<T> {
    pub amount: MinorUnit,
    pub currency: Currency,
    pub router_data: T,
}

impl<T> From<(MinorUnit, Currency, T)> for AdyenRouterData<T> {
    fn from((amount, currency, router_data): (MinorUnit, Currency, T)) -> Self {
        Self {
            amount,
            currency,
            router_data,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Amount {
    pub currency: Currency,
    pub value: MinorUnit,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdyenCard {
    cvc: Option<Secret<String>>,
    expiry_month: Secret<String>,
    expiry_year: Secret<String>,
    holder_name: Option<Secret<String>>,
    number: Secret<String>,
}

impl TryFrom<&Card> for AdyenCard {
    type Error = Error;
    fn try_from(card: &Card) -> Result<Self, Self::Error> {
        Ok(Self {
            cvc: card.card_cvc.clone(),
            expiry_month: card.get_card_expiry_month_2_digit()?,
            expiry_year: card.get_expiry_year_4_digit()?,
            holder_name: card.card_holder_name.clone(),
            number: card.card_number.clone(),
        })
    }
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdyenAddress {
    city: Option<String>,
    street: Option<Secret<String>>,
    house_number_or_name: Option<Secret<String>>,
    postal_code: Option<Secret<String>>,
    state_or_province: Option<Secret<String>>,
    country: Option<String>,
}

impl From<&Address> for AdyenAddress {
    fn from(address: &Address) -> Self {
        Self {
            city: address.city.clone(),
            street: address.line1.clone(),
            house_number_or_name: address.line2.clone(),
            postal_code: address.zip.clone(),
            state_or_province: address.state.clone(),
            country: address.country.clone(),
        }
    }
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdyenPaymentRequest {
    merchant_account: Secret<String>,
    reference: String,
    shopper_email: Option<Email>,
    #[serde(rename = "shopperIP")]
    shopper_ip: Option<Secret<String, pii::IpAddress>>,
    shopper_reference: Option<String>,
    amount: Amount,
    card: AdyenCard,
    billing_address: Option<AdyenAddress>,
    delivery_address: Option<AdyenAddress>,
}

/// Body of `Payment.authorise`, nested under `paymentRequest`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdyenAuthoriseRequest {
    payment_request: AdyenPaymentRequest,
}

impl
    TryFrom<(
        &AdyenRouterData<&RouterDataV2<Authorize, PaymentsAuthorizeData>>,
        &AdyenAuthType,
    )> for AdyenAuthoriseRequest
{
    type Error = Error;
    fn try_from(
        (item, auth): (
            &AdyenRouterData<&RouterDataV2<Authorize, PaymentsAuthorizeData>>,
            &AdyenAuthType,
        ),
    ) -> Result<Self, Self::Error> {
        let request = &item.router_data.request;
        Ok(Self {
            payment_request: AdyenPaymentRequest {
                merchant_account: auth.merchant_account.clone(),
                reference: request.order_id.clone(),
                shopper_email: request.email.clone(),
                shopper_ip: request.ip_address.clone(),
                shopper_reference: request.customer_id.clone(),
                amount: Amount {
                    currency: item.currency,
                    value: item.amount,
                },
                card: AdyenCard::try_from(&request.payment_method_data)?,
                billing_address: request.address.get_payment_billing().map(AdyenAddress::from),
                delivery_address: request.address.get_shipping().map(AdyenAddress::from),
            },
        })
    }
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdyenModificationRequest {
    merchant_account: Secret<String>,
    original_reference: String,
    modification_amount: Option<Amount>,
}

/// Body of capture, refund and cancel, nested under `modificationRequest`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdyenModificationEnvelope {
    modification_request: AdyenModificationRequest,
}

impl AdyenModificationEnvelope {
    fn new(auth: &AdyenAuthType, original_reference: &str, amount: Option<Amount>) -> Self {
        Self {
            modification_request: AdyenModificationRequest {
                merchant_account: auth.merchant_account.clone(),
                original_reference: original_reference.to_string(),
                modification_amount: amount,
            },
        }
    }
}

impl
    From<(
        &AdyenRouterData<&RouterDataV2<Capture, PaymentsCaptureData>>,
        &AdyenAuthType,
    )> for AdyenModificationEnvelope
{
    fn from(
        (item, auth): (
            &AdyenRouterData<&RouterDataV2<Capture, PaymentsCaptureData>>,
            &AdyenAuthType,
        ),
    ) -> Self {
        Self::new(
            auth,
            &item.router_data.request.connector_transaction_id,
            Some(Amount {
                currency: item.currency,
                value: item.amount,
            }),
        )
    }
}

impl
    From<(
        &AdyenRouterData<&RouterDataV2<Refund, RefundsData>>,
        &AdyenAuthType,
    )> for AdyenModificationEnvelope
{
    fn from(
        (item, auth): (
            &AdyenRouterData<&RouterDataV2<Refund, RefundsData>>,
            &AdyenAuthType,
        ),
    ) -> Self {
        Self::new(
            auth,
            &item.router_data.request.connector_transaction_id,
            Some(Amount {
                currency: item.currency,
                value: item.amount,
            }),
        )
    }
}

impl From<(&RouterDataV2<Void, PaymentVoidData>, &AdyenAuthType)> for AdyenModificationEnvelope {
    fn from((item, auth): (&RouterDataV2<Void, PaymentVoidData>, &AdyenAuthType)) -> Self {
        Self::new(auth, &item.request.connector_transaction_id, None)
    }
}

pub(crate) const AUTH_CODE: &str = "authCode";
pub(crate) const RESPONSE: &str = "response";
pub(crate) const RESULT_CODE: &str = "resultCode";
pub(crate) const PSP_REFERENCE: &str = "pspReference";

/// Acknowledgement a modification request answers with once it has been queued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumString)]
pub enum ModificationAck {
    #[strum(serialize = "[capture-received]")]
    CaptureReceived,
    #[strum(serialize = "[cancel-received]")]
    CancelReceived,
    #[strum(serialize = "[refund-received]")]
    RefundReceived,
}

/// A response shape that counts as success.
///
/// Payment results carry `resultCode`/`authCode`/`pspReference` and modification results carry
/// `response`. There is no field naming the shape, so key presence decides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuccessRule {
    AuthCodePresent,
    ModificationAcknowledged,
}

impl SuccessRule {
    /// Evaluated in order, the first rule that matches wins.
    pub const ORDERED: [Self; 2] = [Self::AuthCodePresent, Self::ModificationAcknowledged];

    pub fn matches(self, fields: &FlatFields) -> bool {
        match self {
            Self::AuthCodePresent => fields.contains_key(AUTH_CODE),
            Self::ModificationAcknowledged => fields
                .get(RESPONSE)
                .is_some_and(|response| ModificationAck::from_str(response).is_ok()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub success: bool,
    pub message: Option<String>,
    /// `None` for failures, including responses matching no known shape.
    pub matched_rule: Option<SuccessRule>,
}

pub fn classify(fields: &FlatFields) -> Classification {
    let matched_rule = SuccessRule::ORDERED
        .into_iter()
        .find(|rule| rule.matches(fields));
    Classification {
        success: matched_rule.is_some(),
        message: message_from(fields),
        matched_rule,
    }
}

fn message_from(fields: &FlatFields) -> Option<String> {
    fields
        .get(RESULT_CODE)
        .or_else(|| fields.get(RESPONSE))
        .cloned()
}

/// Decoded flat response of any action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdyenResponse {
    pub fields: HashMap<String, String>,
}

impl AdyenResponse {
    pub fn into_outcome(self, test: bool) -> Outcome {
        let Classification {
            success, message, ..
        } = classify(&self.fields);
        let authorization = self.fields.get(PSP_REFERENCE).cloned();
        Outcome {
            success,
            message,
            params: self.fields,
            authorization,
            test,
        }
    }
}

impl From<FlatFields> for AdyenResponse {
    fn from(fields: FlatFields) -> Self {
        Self { fields }
    }
}
