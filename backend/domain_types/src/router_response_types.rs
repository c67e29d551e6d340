use std::collections::HashMap;

use serde::Serialize;

/// Raw HTTP response handed back by a transport.
#[derive(Clone, Debug)]
pub struct Response {
    pub status_code: u16,
    pub response: bytes::Bytes,
}

impl Response {
    /// Body as text, invalid UTF-8 sequences replaced.
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.response).into_owned()
    }
}

/// Normalized result of a single connector action, or of a whole transaction sequence.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Outcome {
    pub success: bool,
    pub message: Option<String>,
    /// Response fields keyed by the last segment of their dotted name.
    pub params: HashMap<String, String>,
    /// Reference the processor assigned to the payment, used by later modifications.
    pub authorization: Option<String>,
    pub test: bool,
}

impl Outcome {
    /// Failed outcome carrying only a message, used when no response fields could be read.
    pub fn failure(message: impl Into<String>, test: bool) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            params: HashMap::new(),
            authorization: None,
            test,
        }
    }
}
