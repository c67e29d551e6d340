use std::{cell::RefCell, collections::VecDeque};

use common_enums::Currency;
use common_utils::{request::Request, types::MinorUnit, CustomResult};
use domain_types::{
    connector_types::{PaymentVoidData, PaymentsAuthorizeData, RefundsData},
    errors::{ApiClientError, ConnectorError},
    payment_address::{Address, PaymentAddress},
    payment_method_data::Card,
    router_data::ConnectorAuthType,
    router_response_types::Response,
    types::{ConnectorParams, Connectors},
};
use hyperswitch_masking::Secret;
use interfaces::transport::ConnectorTransport;
use payment_gateway::payments::{PaymentGateway, MISSING_AUTHORIZATION_REFERENCE};

type Reply = CustomResult<Result<Response, Response>, ApiClientError>;

/// Replays canned replies in order and keeps every request it was handed.
#[derive(Default)]
struct ScriptedTransport {
    replies: RefCell<VecDeque<Reply>>,
    sent: RefCell<Vec<Request>>,
}

impl ScriptedTransport {
    fn replying(replies: impl IntoIterator<Item = Reply>) -> Self {
        Self {
            replies: RefCell::new(replies.into_iter().collect()),
            sent: RefCell::default(),
        }
    }

    fn sent_bodies(&self) -> Vec<String> {
        self.sent
            .borrow()
            .iter()
            .filter_map(|request| request.body.as_ref())
            .map(|body| body.get_inner_value().to_string())
            .collect()
    }
}

impl ConnectorTransport for ScriptedTransport {
    fn call_connector_api(&self, request: Request) -> Reply {
        self.sent.borrow_mut().push(request);
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(Err(respond(500, ""))))
    }
}

fn respond(status_code: u16, body: &str) -> Response {
    Response {
        status_code,
        response: bytes::Bytes::from(body.to_string()),
    }
}

fn gateway(transport: &ScriptedTransport) -> PaymentGateway<&ScriptedTransport> {
    PaymentGateway::new(
        transport,
        ConnectorAuthType::SignatureKey {
            api_key: Secret::new("s3cret".to_string()),
            key1: Secret::new("M1".to_string()),
            api_secret: Secret::new("Acme".to_string()),
        },
        Connectors {
            adyen: ConnectorParams {
                base_url: None,
                test_mode: true,
            },
        },
    )
}

fn purchase_request() -> PaymentsAuthorizeData {
    PaymentsAuthorizeData {
        minor_amount: MinorUnit::new(1000),
        currency: Some(Currency::USD),
        payment_method_data: Card {
            card_number: Secret::new("4111111111111111".to_string()),
            card_exp_month: Secret::new("8".to_string()),
            card_exp_year: Secret::new("2031".to_string()),
            card_cvc: Some(Secret::new("737".to_string())),
            card_holder_name: Some(Secret::new("Longbob Longsen".to_string())),
            card_network: None,
        },
        order_id: "order-42".to_string(),
        email: None,
        ip_address: None,
        customer_id: Some("shopper-7".to_string()),
        address: PaymentAddress::new(
            None,
            Some(Address {
                city: Some("Ottawa".to_string()),
                country: Some("CA".to_string()),
                line1: Some(Secret::new("456 My Street".to_string())),
                line2: Some(Secret::new("Apt 1".to_string())),
                zip: Some(Secret::new("K1C2N6".to_string())),
                state: Some(Secret::new("ON".to_string())),
            }),
            None,
        ),
    }
}

const AUTHORISED: &str = "paymentResult.pspReference=7914775043909934\
    &paymentResult.resultCode=Authorised&paymentResult.authCode=50055";
const CAPTURE_RECEIVED: &str =
    "modificationResult.pspReference=8814775564188305&modificationResult.response=%5Bcapture-received%5D";

#[test]
fn test_purchase_authorizes_then_captures() {
    let transport =
        ScriptedTransport::replying([Ok(Ok(respond(200, AUTHORISED))), Ok(Ok(respond(200, CAPTURE_RECEIVED)))]);

    let outcome = gateway(&transport).purchase(purchase_request()).unwrap();

    assert!(outcome.success);
    assert_eq!(outcome.message.as_deref(), Some("[capture-received]"));
    assert_eq!(outcome.authorization.as_deref(), Some("8814775564188305"));
    assert!(outcome.test);

    let bodies = transport.sent_bodies();
    assert_eq!(bodies.len(), 2);
    assert!(bodies[0].starts_with("action=Payment.authorise&paymentRequest.merchantAccount=M1"));
    assert!(bodies[0].contains("paymentRequest.shopperReference=shopper-7"));
    assert!(bodies[0].contains("paymentRequest.billingAddress.city=Ottawa"));
    assert!(bodies[0].contains("paymentRequest.card.expiryMonth=08"));
    assert_eq!(
        bodies[1],
        "action=Payment.capture&modificationRequest.merchantAccount=M1\
         &modificationRequest.originalReference=7914775043909934\
         &modificationRequest.modificationAmount.currency=USD\
         &modificationRequest.modificationAmount.value=1000"
    );
}

#[test]
fn test_refused_authorization_is_never_captured() {
    let refused = "paymentResult.pspReference=7914775043909935\
        &paymentResult.resultCode=Refused&paymentResult.refusalReason=Refused";
    let authorize_transport = ScriptedTransport::replying([Ok(Ok(respond(200, refused)))]);
    let purchase_transport = ScriptedTransport::replying([
        Ok(Ok(respond(200, refused))),
        Ok(Ok(respond(200, CAPTURE_RECEIVED))),
    ]);

    let authorization = gateway(&authorize_transport)
        .authorize(purchase_request())
        .unwrap();
    let purchase = gateway(&purchase_transport)
        .purchase(purchase_request())
        .unwrap();

    assert_eq!(purchase, authorization);
    assert!(!purchase.success);
    assert_eq!(purchase.message.as_deref(), Some("Refused"));
    assert_eq!(purchase_transport.sent.borrow().len(), 1);
}

#[test]
fn test_rejected_credentials_stop_the_purchase() {
    let transport = ScriptedTransport::replying([Ok(Err(respond(401, "<html>401</html>")))]);

    let outcome = gateway(&transport).purchase(purchase_request()).unwrap();

    assert!(!outcome.success);
    assert_eq!(outcome.message.as_deref(), Some("Invalid credentials."));
    assert_eq!(transport.sent.borrow().len(), 1);
}

#[test]
fn test_authorization_without_reference_is_not_captured() {
    let transport = ScriptedTransport::replying([Ok(Ok(respond(
        200,
        "paymentResult.resultCode=Authorised&paymentResult.authCode=50055",
    )))]);

    let outcome = gateway(&transport).purchase(purchase_request()).unwrap();

    assert!(!outcome.success);
    assert_eq!(
        outcome.message.as_deref(),
        Some(MISSING_AUTHORIZATION_REFERENCE)
    );
    assert_eq!(outcome.authorization, None);
    assert!(outcome.test);
    assert_eq!(transport.sent.borrow().len(), 1);
}

#[test]
fn test_network_failure_is_a_failed_outcome() {
    let transport = ScriptedTransport::replying([Err(error_stack::report!(
        ApiClientError::RequestTimeoutReceived
    ))]);

    let outcome = gateway(&transport).purchase(purchase_request()).unwrap();

    assert!(!outcome.success);
    assert_eq!(
        outcome.message.as_deref(),
        Some("Server responded with Request Timeout")
    );
    assert_eq!(transport.sent.borrow().len(), 1);
}

#[test]
fn test_refund_and_void() {
    let transport = ScriptedTransport::replying([
        Ok(Ok(respond(
            200,
            "modificationResult.pspReference=8814775564188306&modificationResult.response=%5Brefund-received%5D",
        ))),
        Ok(Ok(respond(
            200,
            "modificationResult.pspReference=8814775564188307&modificationResult.response=%5Bcancel-received%5D",
        ))),
    ]);
    let gateway = gateway(&transport);

    let refund = gateway
        .refund(RefundsData {
            minor_refund_amount: MinorUnit::new(250),
            currency: None,
            connector_transaction_id: "7914775043909934".to_string(),
            order_id: "order-42".to_string(),
        })
        .unwrap();
    let void = gateway
        .void(PaymentVoidData {
            connector_transaction_id: "7914775043909934".to_string(),
            order_id: "order-42".to_string(),
        })
        .unwrap();

    assert!(refund.success);
    assert_eq!(refund.message.as_deref(), Some("[refund-received]"));
    assert!(void.success);
    assert_eq!(void.message.as_deref(), Some("[cancel-received]"));

    let bodies = transport.sent_bodies();
    assert_eq!(
        bodies[0],
        "action=Payment.refund&modificationRequest.merchantAccount=M1\
         &modificationRequest.originalReference=7914775043909934\
         &modificationRequest.modificationAmount.currency=EUR\
         &modificationRequest.modificationAmount.value=250"
    );
    assert_eq!(
        bodies[1],
        "action=Payment.cancel&modificationRequest.merchantAccount=M1\
         &modificationRequest.originalReference=7914775043909934"
    );
}

#[test]
fn test_missing_order_id_sends_nothing() {
    let transport = ScriptedTransport::default();
    let mut request = purchase_request();
    request.order_id = String::new();

    let error = gateway(&transport).authorize(request).unwrap_err();

    assert_eq!(
        error.current_context(),
        &ConnectorError::MissingRequiredField {
            field_name: "order_id"
        }
    );
    assert!(transport.sent.borrow().is_empty());
}
