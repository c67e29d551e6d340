use common_enums::Currency;
use common_utils::{pii, types::MinorUnit};
use hyperswitch_masking::Secret;

use crate::{payment_address::PaymentAddress, payment_method_data::Card};

/// Data required to authorise a card payment.
#[derive(Debug, Clone)]
pub struct PaymentsAuthorizeData {
    pub minor_amount: MinorUnit,
    /// Falls back to the connector's default currency when absent.
    pub currency: Option<Currency>,
    pub payment_method_data: Card,
    pub order_id: String,
    pub email: Option<pii::Email>,
    pub ip_address: Option<Secret<String, pii::IpAddress>>,
    pub customer_id: Option<String>,
    pub address: PaymentAddress,
}

#[derive(Debug, Clone)]
pub struct PaymentsCaptureData {
    pub minor_amount_to_capture: MinorUnit,
    pub currency: Option<Currency>,
    pub connector_transaction_id: String,
    pub order_id: String,
}

#[derive(Debug, Clone)]
pub struct RefundsData {
    pub minor_refund_amount: MinorUnit,
    pub currency: Option<Currency>,
    pub connector_transaction_id: String,
    pub order_id: String,
}

#[derive(Debug, Clone)]
pub struct PaymentVoidData {
    pub connector_transaction_id: String,
    pub order_id: String,
}

impl PaymentsAuthorizeData {
    /// Capture request settling the full authorised amount against `connector_transaction_id`.
    pub fn to_capture_data(&self, connector_transaction_id: String) -> PaymentsCaptureData {
        PaymentsCaptureData {
            minor_amount_to_capture: self.minor_amount,
            currency: self.currency,
            connector_transaction_id,
            order_id: self.order_id.clone(),
        }
    }
}
