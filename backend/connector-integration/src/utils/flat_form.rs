//! Flat, dot-namespaced form encoding.
//!
//! Nested request trees are sent as `outer.inner.leaf=value` pairs joined by `&`, and
//! responses come back in the same shape. Responses are regrouped by the last segment of
//! each dotted key, so `paymentResult.pspReference` is read as `pspReference`.

use std::collections::HashMap;

use common_utils::CustomResult;
use domain_types::errors::ConnectorError;
use error_stack::report;
use serde_json::{Map, Value};
use url::form_urlencoded;

/// Nested request tree. Every level keeps insertion order.
pub type FormTree = Map<String, Value>;

/// Response fields keyed by the last segment of their dotted name.
pub type FlatFields = HashMap<String, String>;

/// Flattens `tree` depth-first into `(dotted path, value)` pairs.
///
/// Null and empty string leaves are dropped. Arrays have no flat representation and fail
/// the whole encoding.
pub fn flatten(tree: &FormTree) -> CustomResult<Vec<(String, String)>, ConnectorError> {
    let mut pairs = Vec::new();
    flatten_into(None, tree, &mut pairs)?;
    Ok(pairs)
}

fn flatten_into(
    prefix: Option<&str>,
    tree: &FormTree,
    pairs: &mut Vec<(String, String)>,
) -> CustomResult<(), ConnectorError> {
    for (key, value) in tree {
        let path = match prefix {
            Some(prefix) => format!("{prefix}.{key}"),
            None => key.clone(),
        };
        match value {
            Value::Object(inner) => flatten_into(Some(&path), inner, pairs)?,
            Value::Null => {}
            Value::String(text) if text.is_empty() => {}
            Value::String(text) => pairs.push((path, text.clone())),
            Value::Number(number) => pairs.push((path, number.to_string())),
            Value::Bool(flag) => pairs.push((path, flag.to_string())),
            Value::Array(_) => {
                return Err(report!(ConnectorError::RequestEncodingFailedWithReason(
                    format!("`{path}` holds a list, which has no flat form")
                )))
            }
        }
    }
    Ok(())
}

/// Renders `tree` as a form body. Keys are written verbatim, values form-encoded.
pub fn encode(tree: &FormTree) -> CustomResult<String, ConnectorError> {
    let body = flatten(tree)?
        .into_iter()
        .map(|(key, value)| {
            let value: String = form_urlencoded::byte_serialize(value.as_bytes()).collect();
            format!("{key}={value}")
        })
        .collect::<Vec<_>>()
        .join("&");
    Ok(body)
}

/// Splits a form body into `(dotted key, decoded value)` pairs, in body order.
pub fn parse_pairs(body: &str) -> CustomResult<Vec<(String, String)>, ConnectorError> {
    body.split('&')
        .filter(|token| !token.is_empty())
        .map(|token| {
            if !token.contains('=') {
                return Err(report!(ConnectorError::ResponseDeserializationFailed)
                    .attach_printable(format!("pair without `=`: {token}")));
            }
            form_urlencoded::parse(token.as_bytes())
                .next()
                .map(|(key, value)| (key.into_owned(), value.into_owned()))
                .ok_or_else(|| report!(ConnectorError::ResponseDeserializationFailed))
        })
        .collect()
}

/// Keys each pair by the segment after its last `.`. On collisions the later pair wins.
pub fn regroup<I>(pairs: I) -> FlatFields
where
    I: IntoIterator<Item = (String, String)>,
{
    pairs
        .into_iter()
        .map(|(key, value)| {
            let symbol = match key.rsplit_once('.') {
                Some((_, last)) => last.to_string(),
                None => key,
            };
            (symbol, value)
        })
        .collect()
}

pub fn decode(body: &str) -> CustomResult<FlatFields, ConnectorError> {
    parse_pairs(body).map(regroup)
}
