use std::{str::FromStr, time::Duration};

use common_utils::{
    request::{Headers, Method, Request},
    CustomResult,
};
use domain_types::{
    errors::{ApiClientError, ConnectorError},
    router_data_v2::RouterDataV2,
    router_response_types::{Outcome, Response},
    types::Proxy,
};
use error_stack::{report, ResultExt};
use interfaces::{connector_integration::ConnectorIntegration, transport::ConnectorTransport};
use reqwest::blocking::Client;
use serde_json::{json, Value};
use tracing::field::Empty;

/// Runs one connector action: build the request, send it and turn the reply into an [`Outcome`].
///
/// Only request construction fails the call. Anything that happens after the request has been
/// built, network errors included, is reported as a failed `Outcome`.
pub fn execute_connector_processing_step<T, C, F, Req>(
    transport: &T,
    connector: &C,
    router_data: &RouterDataV2<F, Req>,
) -> CustomResult<Outcome, ConnectorError>
where
    T: ConnectorTransport + ?Sized,
    C: ConnectorIntegration<F, Req> + ?Sized,
{
    let span = tracing::info_span!(
        "pg_outgoing_app_data",
        connector = connector.id(),
        request_headers = Empty,
        request_keys = Empty,
        status_code = Empty,
        latency = Empty,
        url = Empty,
    );
    let _enter = span.enter();
    let start = std::time::Instant::now();

    let request = connector.build_request(router_data)?;
    let test = connector.is_test_mode(&router_data.connectors);

    let headers = request.loggable_headers().into_iter().fold(
        serde_json::Map::new(),
        |mut acc, (key, value)| {
            acc.insert(key, Value::String(value));
            acc
        },
    );
    let request_keys = request
        .body
        .as_ref()
        .map(|body| flat_keys(body.get_inner_value()))
        .unwrap_or_default();
    tracing::Span::current().record("url", tracing::field::display(&request.url));
    tracing::Span::current().record("request_headers", tracing::field::display(Value::Object(headers)));
    tracing::Span::current().record("request_keys", tracing::field::debug(&request_keys));
    tracing::info!(tag = ?Tag::InitiatedToConnector, "Request initiated to connector");

    let outcome = match transport.call_connector_api(request) {
        Ok(Ok(body)) => {
            tracing::Span::current().record("status_code", body.status_code);
            connector.handle_response(router_data, body)
        }
        Ok(Err(body)) => {
            tracing::Span::current().record("status_code", body.status_code);
            connector.get_error_response(router_data, body)
        }
        Err(err) => {
            info_log(
                "NETWORK_ERROR",
                &json!(format!(
                    "Failed getting response from connector. Error: {:?}",
                    err
                )),
            );
            Outcome::failure(err.current_context().to_string(), test)
        }
    };

    tracing::Span::current().record("latency", start.elapsed().as_millis());
    tracing::info!(tag = ?Tag::OutgoingApi, log_type = "api", success = outcome.success, "Outgoing Request completed");
    Ok(outcome)
}

/// Dotted keys of a form body, in body order. Values are never logged.
fn flat_keys(body: &str) -> Vec<&str> {
    body.split('&')
        .filter_map(|pair| pair.split_once('=').map(|(key, _)| key))
        .collect()
}

/// Blocking HTTP transport honouring the configured proxy and timeouts.
#[derive(Debug, Clone)]
pub struct HttpClient {
    proxy: Proxy,
    proxied: Client,
    direct: Client,
}

impl HttpClient {
    pub fn new(proxy: Proxy) -> CustomResult<Self, ApiClientError> {
        let proxied = build_client(&proxy, false)?;
        let direct = build_client(&proxy, true)?;
        Ok(Self {
            proxy,
            proxied,
            direct,
        })
    }

    fn client_for(&self, url: &reqwest::Url) -> &Client {
        let should_bypass_proxy = self.proxy.bypass_proxy_urls.contains(&url.to_string());
        if should_bypass_proxy {
            &self.direct
        } else {
            &self.proxied
        }
    }
}

impl ConnectorTransport for HttpClient {
    fn call_connector_api(
        &self,
        request: Request,
    ) -> CustomResult<Result<Response, Response>, ApiClientError> {
        let url =
            reqwest::Url::parse(&request.url).change_context(ApiClientError::UrlEncodingFailed)?;
        let client = self.client_for(&url);

        let headers = request.headers.construct_header_map()?;

        let request = {
            match request.method {
                Method::Post => {
                    let client = client.post(url);
                    match request.body {
                        Some(body) => client.body(body.get_inner_value().to_owned()),
                        None => client,
                    }
                }
            }
            .add_headers(headers)
        };

        let response = request.send().map_err(|error| {
            let api_error = match error {
                error if error.is_timeout() => ApiClientError::RequestTimeoutReceived,
                _ => ApiClientError::RequestNotSent(error.to_string()),
            };
            info_log(
                "REQUEST_FAILURE",
                &json!(format!("Unable to send request to connector.",)),
            );
            report!(api_error)
        })?;

        handle_response(response)
    }
}

fn build_client(
    proxy_config: &Proxy,
    should_bypass_proxy: bool,
) -> CustomResult<Client, ApiClientError> {
    get_client_builder(proxy_config, should_bypass_proxy)?
        .build()
        .change_context(ApiClientError::ClientConstructionFailed)
        .inspect_err(|err| {
            info_log(
                "ERROR",
                &json!(format!("Failed to construct base client. Error: {:?}", err)),
            );
        })
}

fn get_client_builder(
    proxy_config: &Proxy,
    should_bypass_proxy: bool,
) -> CustomResult<reqwest::blocking::ClientBuilder, ApiClientError> {
    let mut client_builder = Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .pool_idle_timeout(
            proxy_config
                .idle_pool_connection_timeout
                .map(Duration::from_secs),
        );

    if let Some(timeout) = proxy_config.request_timeout {
        client_builder = client_builder.timeout(Duration::from_secs(timeout));
    }

    if should_bypass_proxy {
        return Ok(client_builder);
    }

    // Proxy all HTTPS traffic through the configured HTTPS proxy
    if let Some(url) = proxy_config.https_url.as_ref() {
        client_builder = client_builder.proxy(
            reqwest::Proxy::https(url)
                .change_context(ApiClientError::InvalidProxyConfiguration)
                .inspect_err(|err| {
                    info_log(
                        "PROXY_ERROR",
                        &json!(format!("HTTPS proxy configuration error. Error: {:?}", err)),
                    );
                })?,
        );
    }

    // Proxy all HTTP traffic through the configured HTTP proxy
    if let Some(url) = proxy_config.http_url.as_ref() {
        client_builder = client_builder.proxy(
            reqwest::Proxy::http(url)
                .change_context(ApiClientError::InvalidProxyConfiguration)
                .inspect_err(|err| {
                    info_log(
                        "PROXY_ERROR",
                        &json!(format!("HTTP proxy configuration error. Error: {:?}", err)),
                    );
                })?,
        );
    }

    Ok(client_builder)
}

fn handle_response(
    resp: reqwest::blocking::Response,
) -> CustomResult<Result<Response, Response>, ApiClientError> {
    let status_code = resp.status().as_u16();
    let response = resp
        .bytes()
        .change_context(ApiClientError::ResponseDecodingFailed)?;
    let response = Response {
        status_code,
        response,
    };
    match status_code {
        200..=299 => Ok(Ok(response)),
        _ => Ok(Err(response)),
    }
}

pub(super) trait HeaderExt {
    fn construct_header_map(self) -> CustomResult<reqwest::header::HeaderMap, ApiClientError>;
}

impl HeaderExt for Headers {
    fn construct_header_map(self) -> CustomResult<reqwest::header::HeaderMap, ApiClientError> {
        use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

        self.into_iter().try_fold(
            HeaderMap::new(),
            |mut header_map, (header_name, header_value)| {
                let header_name = HeaderName::from_str(&header_name)
                    .change_context(ApiClientError::HeaderMapConstructionFailed)?;
                let header_value = header_value.into_inner();
                let header_value = HeaderValue::from_str(&header_value)
                    .change_context(ApiClientError::HeaderMapConstructionFailed)?;
                header_map.append(header_name, header_value);
                Ok(header_map)
            },
        )
    }
}

pub(super) trait RequestBuilderExt {
    fn add_headers(self, headers: reqwest::header::HeaderMap) -> Self;
}

impl RequestBuilderExt for reqwest::blocking::RequestBuilder {
    fn add_headers(mut self, headers: reqwest::header::HeaderMap) -> Self {
        self = self.headers(headers);
        self
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Tag {
    /// Call initiated to connector.
    InitiatedToConnector,
    /// Api Outgoing Request
    OutgoingApi,
}

#[inline]
pub fn info_log(action: &str, message: &Value) {
    tracing::info!(tags = %action, json_value= %message);
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use common_utils::types::MinorUnit;
    use connector_integration::connectors::Adyen;
    use domain_types::{
        connector_flow::Authorize,
        connector_types::PaymentsAuthorizeData,
        payment_address::PaymentAddress,
        payment_method_data::Card,
        router_data::ConnectorAuthType,
        types::{ConnectorParams, Connectors},
    };
    use hyperswitch_masking::Secret;

    use super::*;

    type Reply = CustomResult<Result<Response, Response>, ApiClientError>;

    struct RecordingTransport {
        reply: fn() -> Reply,
        sent: RefCell<Vec<Request>>,
    }

    impl RecordingTransport {
        fn new(reply: fn() -> Reply) -> Self {
            Self {
                reply,
                sent: RefCell::new(Vec::new()),
            }
        }
    }

    impl ConnectorTransport for RecordingTransport {
        fn call_connector_api(&self, request: Request) -> Reply {
            self.sent.borrow_mut().push(request);
            (self.reply)()
        }
    }

    fn authorize_router_data(order_id: &str) -> RouterDataV2<Authorize, PaymentsAuthorizeData> {
        RouterDataV2::new(
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
            PaymentsAuthorizeData {
                minor_amount: MinorUnit::new(500),
                currency: Some(common_enums::Currency::EUR),
                payment_method_data: Card {
                    card_number: Secret::new("4111111111111111".to_string()),
                    card_exp_month: Secret::new("03".to_string()),
                    card_exp_year: Secret::new("2030".to_string()),
                    card_cvc: Some(Secret::new("737".to_string())),
                    card_holder_name: None,
                    card_network: None,
                },
                order_id: order_id.to_string(),
                email: None,
                ip_address: None,
                customer_id: None,
                address: PaymentAddress::default(),
            },
        )
    }

    fn status(status_code: u16, body: &'static str) -> Response {
        Response {
            status_code,
            response: bytes::Bytes::from_static(body.as_bytes()),
        }
    }

    #[test]
    fn successful_reply_is_classified() {
        let transport = RecordingTransport::new(|| {
            Ok(Ok(status(
                200,
                "paymentResult.pspReference=8815&paymentResult.resultCode=Authorised&paymentResult.authCode=1234",
            )))
        });

        let outcome =
            execute_connector_processing_step(&transport, Adyen::new(), &authorize_router_data("order-1"))
                .unwrap();

        assert!(outcome.success);
        assert_eq!(outcome.authorization.as_deref(), Some("8815"));
        let sent = transport.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert!(sent
            .first()
            .and_then(|request| request.body.as_ref())
            .is_some_and(|body| body.get_inner_value().starts_with("action=Payment.authorise&")));
    }

    #[test]
    fn unauthorized_reply_ignores_body() {
        let transport = RecordingTransport::new(|| Ok(Err(status(401, "<html>denied</html>"))));

        let outcome =
            execute_connector_processing_step(&transport, Adyen::new(), &authorize_router_data("order-1"))
                .unwrap();

        assert!(!outcome.success);
        assert_eq!(outcome.message.as_deref(), Some("Invalid credentials."));
        assert!(outcome.params.is_empty());
    }

    #[test]
    fn other_error_status_carries_raw_body() {
        let transport = RecordingTransport::new(|| Ok(Err(status(500, "Internal error"))));

        let outcome =
            execute_connector_processing_step(&transport, Adyen::new(), &authorize_router_data("order-1"))
                .unwrap();

        assert!(!outcome.success);
        assert_eq!(outcome.message.as_deref(), Some("Internal error"));
    }

    #[test]
    fn network_error_becomes_failed_outcome() {
        let transport = RecordingTransport::new(|| {
            Err(report!(ApiClientError::RequestNotSent(
                "connection refused".to_string()
            )))
        });

        let outcome =
            execute_connector_processing_step(&transport, Adyen::new(), &authorize_router_data("order-1"))
                .unwrap();

        assert!(!outcome.success);
        assert!(outcome
            .message
            .is_some_and(|message| message.contains("connection refused")));
        assert!(outcome.test);
    }

    #[test]
    fn request_errors_never_reach_the_transport() {
        let transport = RecordingTransport::new(|| Ok(Ok(status(200, ""))));

        let error =
            execute_connector_processing_step(&transport, Adyen::new(), &authorize_router_data(""))
                .unwrap_err();

        assert_eq!(
            error.current_context(),
            &ConnectorError::MissingRequiredField {
                field_name: "order_id"
            }
        );
        assert!(transport.sent.borrow().is_empty());
    }

    #[test]
    fn flat_keys_skip_values() {
        assert_eq!(
            flat_keys("action=Payment.capture&modificationRequest.originalReference=8815"),
            vec!["action", "modificationRequest.originalReference"]
        );
    }
}
