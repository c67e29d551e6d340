use hyperswitch_masking::Secret;

#[derive(Default, Debug, Clone, serde::Deserialize, serde::Serialize)]
#[serde(tag = "auth_type")]
pub enum ConnectorAuthType {
    HeaderKey {
        api_key: Secret<String>,
    },
    BodyKey {
        api_key: Secret<String>,
        key1: Secret<String>,
    },
    SignatureKey {
        api_key: Secret<String>,
        key1: Secret<String>,
        api_secret: Secret<String>,
    },
    #[default]
    NoKey,
}

#[cfg(test)]
mod tests {
    use hyperswitch_masking::PeekInterface;

    use super::*;

    #[test]
    fn auth_type_is_read_from_tag() {
        let auth: ConnectorAuthType = serde_json::from_value(serde_json::json!({
            "auth_type": "SignatureKey",
            "api_key": "password",
            "key1": "MerchantAccount",
            "api_secret": "Company",
        }))
        .unwrap();

        assert!(matches!(
            auth,
            ConnectorAuthType::SignatureKey { ref key1, .. } if key1.peek() == "MerchantAccount"
        ));
    }
}
