use serde::{Deserialize, Serialize};

/// ISO 4217 currency codes accepted by the processor.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum Currency {
    AUD,
    BRL,
    CAD,
    CHF,
    CNY,
    CZK,
    DKK,
    EUR,
    GBP,
    HKD,
    HUF,
    INR,
    JPY,
    MXN,
    NOK,
    NZD,
    PLN,
    SEK,
    SGD,
    USD,
    ZAR,
}

/// Card schemes the connector can route.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum CardNetwork {
    Visa,
    Mastercard,
    AmericanExpress,
    Discover,
    DinersClub,
    #[serde(rename = "jcb")]
    #[strum(serialize = "jcb")]
    JCB,
    Dankort,
    Maestro,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn currency_parses_case_insensitively() {
        assert_eq!(Currency::from_str("eur").ok(), Some(Currency::EUR));
        assert_eq!(Currency::USD.to_string(), "USD");
    }

    #[test]
    fn card_network_renders_snake_case() {
        assert_eq!(CardNetwork::AmericanExpress.to_string(), "american_express");
        assert_eq!(CardNetwork::JCB.to_string(), "jcb");
    }
}
