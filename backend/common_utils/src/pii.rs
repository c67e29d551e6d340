//! Personal Identifiable Information protection.

use std::{convert::AsRef, fmt, ops, str::FromStr};

use error_stack::ResultExt;
use hyperswitch_masking::{ExposeInterface, Secret, Strategy, WithType};
use serde::Deserialize;

use crate::{
    consts::REDACTED,
    errors::{self, ValidationError},
};

/// Strategy for masking Email
#[derive(Debug, Copy, Clone, Deserialize)]
pub enum EmailStrategy {}

impl<T> Strategy<T> for EmailStrategy
where
    T: AsRef<str> + fmt::Debug,
{
    fn fmt(val: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let val_str: &str = val.as_ref();
        match val_str.split_once('@') {
            Some((a, b)) => write!(f, "{}@{}", "*".repeat(a.len()), b),
            None => WithType::fmt(val, f),
        }
    }
}

/// Email address
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(try_from = "String")]
pub struct Email(Secret<String, EmailStrategy>);

impl ExposeInterface<Secret<String, EmailStrategy>> for Email {
    fn expose(self) -> Secret<String, EmailStrategy> {
        self.0
    }
}

impl TryFrom<String> for Email {
    type Error = error_stack::Report<errors::ParsingError>;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_str(&value).change_context(errors::ParsingError::EmailParsingError)
    }
}

impl ops::Deref for Email {
    type Target = Secret<String, EmailStrategy>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromStr for Email {
    type Err = error_stack::Report<ValidationError>;
    fn from_str(email: &str) -> Result<Self, Self::Err> {
        if email.eq(REDACTED) {
            return Ok(Self(Secret::new(email.to_string())));
        }
        if email.contains('@') && email.len() > 3 {
            let secret = Secret::<String, EmailStrategy>::new(email.to_string());
            Ok(Self(secret))
        } else {
            Err(ValidationError::InvalidValue {
                message: "Invalid email address format".into(),
            }
            .into())
        }
    }
}

/// IP address strategy
#[derive(Debug)]
pub enum IpAddress {}

impl<T> Strategy<T> for IpAddress
where
    T: AsRef<str>,
{
    fn fmt(val: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let val_str: &str = val.as_ref();
        let segments: Vec<&str> = val_str.split('.').collect();

        if segments.len() != 4 {
            return WithType::fmt(val, f);
        }

        for seg in segments.iter() {
            if seg.is_empty() || seg.len() > 3 {
                return WithType::fmt(val, f);
            }
        }

        if let Some(segments) = segments.first() {
            write!(f, "{segments}.**.**.**")
        } else {
            WithType::fmt(val, f)
        }
    }
}

#[cfg(test)]
mod tests {
    use hyperswitch_masking::{PeekInterface, Secret};

    use super::*;

    #[test]
    fn email_is_masked_in_debug_output() {
        let email = Email::from_str("shopper@example.com").unwrap();
        assert_eq!(format!("{:?}", *email), "*******@example.com");
        assert_eq!(email.peek(), "shopper@example.com");
    }

    #[test]
    fn email_without_at_sign_is_rejected() {
        assert!(Email::from_str("shopper").is_err());
    }

    #[test]
    fn ip_address_keeps_only_the_first_octet() {
        let ip: Secret<String, IpAddress> = Secret::new("192.168.0.12".to_string());
        assert_eq!(format!("{ip:?}"), "192.**.**.**");
    }
}
