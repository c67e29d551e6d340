//! Command line surface of the gateway binary.

use std::path::PathBuf;

use common_enums::{CardNetwork, Currency};
use common_utils::{pii, types::MinorUnit, CustomResult};
use domain_types::{
    connector_types::{PaymentVoidData, PaymentsAuthorizeData, PaymentsCaptureData, RefundsData},
    payment_address::PaymentAddress,
    payment_method_data::Card,
};
use error_stack::{report, ResultExt};
use hyperswitch_masking::Secret;

use crate::error::InputError;

#[derive(Debug, clap::Parser)]
#[command(name = "payment-gateway", version, about = "Card payments over the Adyen HTTP-post adapter")]
pub struct Cli {
    /// Configuration file, defaults to `config/<environment>.toml`.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Reserve funds on a card.
    Authorize(PaymentArgs),
    /// Settle a previous authorization.
    Capture(ModificationArgs),
    /// Return funds of a settled payment.
    Refund(ModificationArgs),
    /// Release a previous authorization.
    Void(VoidArgs),
    /// Authorize and capture in one go.
    Purchase(PaymentArgs),
}

#[derive(Debug, clap::Args)]
pub struct PaymentArgs {
    /// Amount in minor units.
    #[arg(long)]
    pub amount: i64,
    #[arg(long)]
    pub currency: Option<Currency>,
    #[arg(long)]
    pub order_id: String,
    #[arg(long)]
    pub card_number: String,
    #[arg(long)]
    pub exp_month: String,
    #[arg(long)]
    pub exp_year: String,
    #[arg(long)]
    pub cvc: Option<String>,
    #[arg(long)]
    pub holder_name: Option<String>,
    #[arg(long)]
    pub card_network: Option<CardNetwork>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub ip: Option<String>,
    #[arg(long)]
    pub customer_id: Option<String>,
}

#[derive(Debug, clap::Args)]
pub struct ModificationArgs {
    /// Amount in minor units.
    #[arg(long)]
    pub amount: i64,
    #[arg(long)]
    pub currency: Option<Currency>,
    /// Processor reference of the original payment.
    #[arg(long)]
    pub reference: String,
    #[arg(long)]
    pub order_id: String,
}

#[derive(Debug, clap::Args)]
pub struct VoidArgs {
    /// Processor reference of the original payment.
    #[arg(long)]
    pub reference: String,
    #[arg(long)]
    pub order_id: String,
}

impl PaymentArgs {
    pub fn into_request(self) -> CustomResult<PaymentsAuthorizeData, InputError> {
        let email = self
            .email
            .map(pii::Email::try_from)
            .transpose()
            .change_context(InputError::InvalidValue {
                field: "email",
                reason: "not an email address".to_string(),
            })?;
        let ip_address = self
            .ip
            .map(|ip| {
                ip.parse::<std::net::IpAddr>()
                    .map(|_| Secret::new(ip))
                    .map_err(|error| {
                        report!(InputError::InvalidValue {
                            field: "ip",
                            reason: error.to_string(),
                        })
                    })
            })
            .transpose()?;

        Ok(PaymentsAuthorizeData {
            minor_amount: MinorUnit::new(self.amount),
            currency: self.currency,
            payment_method_data: Card {
                card_number: Secret::new(self.card_number),
                card_exp_month: Secret::new(self.exp_month),
                card_exp_year: Secret::new(self.exp_year),
                card_cvc: self.cvc.map(Secret::new),
                card_holder_name: self.holder_name.map(Secret::new),
                card_network: self.card_network,
            },
            order_id: self.order_id,
            email,
            ip_address,
            customer_id: self.customer_id,
            address: PaymentAddress::default(),
        })
    }
}

impl From<ModificationArgs> for PaymentsCaptureData {
    fn from(args: ModificationArgs) -> Self {
        Self {
            minor_amount_to_capture: MinorUnit::new(args.amount),
            currency: args.currency,
            connector_transaction_id: args.reference,
            order_id: args.order_id,
        }
    }
}

impl From<ModificationArgs> for RefundsData {
    fn from(args: ModificationArgs) -> Self {
        Self {
            minor_refund_amount: MinorUnit::new(args.amount),
            currency: args.currency,
            connector_transaction_id: args.reference,
            order_id: args.order_id,
        }
    }
}

impl From<VoidArgs> for PaymentVoidData {
    fn from(args: VoidArgs) -> Self {
        Self {
            connector_transaction_id: args.reference,
            order_id: args.order_id,
        }
    }
}
