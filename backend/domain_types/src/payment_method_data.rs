use common_enums::CardNetwork;
use hyperswitch_masking::{PeekInterface, Secret};
use serde::{Deserialize, Serialize};

use crate::errors::ConnectorError;

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub card_number: Secret<String>,
    pub card_exp_month: Secret<String>,
    pub card_exp_year: Secret<String>,
    pub card_cvc: Option<Secret<String>>,
    pub card_holder_name: Option<Secret<String>>,
    pub card_network: Option<CardNetwork>,
}

impl Card {
    /// Expiry month as two digits, `3` becoming `03`.
    pub fn get_card_expiry_month_2_digit(&self) -> Result<Secret<String>, ConnectorError> {
        let month = self
            .card_exp_month
            .peek()
            .trim()
            .parse::<u8>()
            .ok()
            .filter(|month| (1..=12).contains(month))
            .ok_or(ConnectorError::InvalidDataFormat {
                field_name: "card_exp_month",
            })?;
        Ok(Secret::new(format!("{month:02}")))
    }

    /// Expiry year as four digits, two-digit years are taken to be in the 2000s.
    pub fn get_expiry_year_4_digit(&self) -> Result<Secret<String>, ConnectorError> {
        let year = self.card_exp_year.peek().trim();
        let invalid = ConnectorError::InvalidDataFormat {
            field_name: "card_exp_year",
        };
        if year.is_empty() || !year.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid);
        }
        match year.len() {
            2 => Ok(Secret::new(format!("20{year}"))),
            4 => Ok(Secret::new(year.to_string())),
            _ => Err(invalid),
        }
    }
}
