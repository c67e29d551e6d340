//! Outgoing connector request representation.

use hyperswitch_masking::Maskable;
use serde::{Deserialize, Serialize};

use crate::consts;

pub type Headers = Vec<(String, Maskable<String>)>;

#[derive(
    Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Method {
    Post,
}

/// Body of an outgoing request, already rendered to its wire form.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RequestContent {
    FormUrlEncoded(String),
}

impl RequestContent {
    pub fn content_type(&self) -> &'static str {
        match self {
            Self::FormUrlEncoded(_) => consts::FORM_URL_ENCODED,
        }
    }

    pub fn get_inner_value(&self) -> &str {
        match self {
            Self::FormUrlEncoded(body) => body,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Request {
    pub url: String,
    pub headers: Headers,
    pub method: Method,
    pub body: Option<RequestContent>,
}

impl Request {
    /// Header values with masked entries replaced, safe to log.
    pub fn loggable_headers(&self) -> Vec<(String, String)> {
        self.headers
            .iter()
            .map(|(key, value)| {
                let value = match value {
                    Maskable::Masked(_) => consts::REDACTED.to_string(),
                    Maskable::Normal(value) => value.clone(),
                };
                (key.clone(), value)
            })
            .collect()
    }
}

#[derive(Debug)]
pub struct RequestBuilder {
    url: String,
    headers: Headers,
    method: Method,
    body: Option<RequestContent>,
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self {
            url: String::new(),
            headers: Vec::new(),
            method: Method::Post,
            body: None,
        }
    }

    pub fn url(mut self, url: &str) -> Self {
        self.url = url.into();
        self
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    pub fn headers(mut self, headers: Headers) -> Self {
        self.headers.extend(headers);
        self
    }

    pub fn set_body(mut self, body: RequestContent) -> Self {
        self.body = Some(body);
        self
    }

    pub fn build(self) -> Request {
        Request {
            url: self.url,
            headers: self.headers,
            method: self.method,
            body: self.body,
        }
    }
}

#[cfg(test)]
mod tests {
    use hyperswitch_masking::{Maskable, Secret};

    use super::*;

    #[test]
    fn masked_headers_are_redacted_for_logging() {
        let request = RequestBuilder::new()
            .method(Method::Post)
            .url("https://example.com")
            .headers(vec![
                (
                    consts::CONTENT_TYPE.to_string(),
                    Maskable::new_normal(consts::FORM_URL_ENCODED.to_string()),
                ),
                (
                    consts::AUTHORIZATION.to_string(),
                    Maskable::new_masked(Secret::new("Basic abc".to_string())),
                ),
            ])
            .set_body(RequestContent::FormUrlEncoded("a=b".to_string()))
            .build();

        assert_eq!(request.method, Method::Post);
        assert_eq!(RequestBuilder::default().build().method, Method::Post);
        assert_eq!(
            request.loggable_headers(),
            vec![
                (
                    consts::CONTENT_TYPE.to_string(),
                    consts::FORM_URL_ENCODED.to_string()
                ),
                (
                    consts::AUTHORIZATION.to_string(),
                    consts::REDACTED.to_string()
                ),
            ]
        );
    }
}
