use hyperswitch_masking::Secret;
use serde::{Deserialize, Serialize};

#[derive(Clone, Default, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PaymentAddress {
    shipping: Option<Address>,
    billing: Option<Address>,
    payment_method_billing: Option<Address>,
}

impl PaymentAddress {
    pub fn new(
        shipping: Option<Address>,
        billing: Option<Address>,
        payment_method_billing: Option<Address>,
    ) -> Self {
        Self {
            shipping,
            billing,
            payment_method_billing,
        }
    }

    pub fn get_shipping(&self) -> Option<&Address> {
        self.shipping.as_ref()
    }

    /// Billing address of the payment, falling back to the one attached to the payment method.
    pub fn get_payment_billing(&self) -> Option<&Address> {
        self.billing.as_ref().or(self.payment_method_billing.as_ref())
    }
}

#[derive(Clone, Default, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Address {
    /// The city, district, suburb, town, or village of the address.
    pub city: Option<String>,

    /// The two-letter ISO 3166-1 alpha-2 country code (e.g., US, GB).
    pub country: Option<String>,

    /// The first line of the street address or P.O. Box.
    pub line1: Option<Secret<String>>,

    /// The second line of the street address or P.O. Box (e.g., apartment, suite, unit, or building).
    pub line2: Option<Secret<String>>,

    /// The zip/postal code for the address
    pub zip: Option<Secret<String>>,

    /// The address state
    pub state: Option<Secret<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn address(city: &str) -> Address {
        Address {
            city: Some(city.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn billing_takes_priority_over_payment_method_billing() {
        let addresses = PaymentAddress::new(None, Some(address("Amsterdam")), Some(address("Paris")));
        assert_eq!(
            addresses.get_payment_billing().and_then(|a| a.city.as_deref()),
            Some("Amsterdam")
        );
    }

    #[test]
    fn payment_method_billing_is_used_as_fallback() {
        let addresses = PaymentAddress::new(Some(address("Berlin")), None, Some(address("Paris")));
        assert_eq!(
            addresses.get_payment_billing().and_then(|a| a.city.as_deref()),
            Some("Paris")
        );
        assert_eq!(
            addresses.get_shipping().and_then(|a| a.city.as_deref()),
            Some("Berlin")
        );
    }
}
