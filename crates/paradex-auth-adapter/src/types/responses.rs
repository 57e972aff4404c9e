/*
[INPUT]:  Remote JSON bodies
[OUTPUT]: Deserialized response types
[POS]:    Data layer - inbound wire types
[UPDATE]: When response schemas change
*/

use serde::Deserialize;

/// Subset of GET /system/config we consume; other fields are ignored
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SystemConfigResponse {
    pub starknet_chain_id: String,
}

/// Success body of POST /auth
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthResponse {
    pub jwt_token: String,
}

/// Error body shape shared by the onboarding and auth endpoints
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiErrorBody {
    /// Collapse the body into a single diagnostic string, if it carries one
    pub fn into_message(self) -> Option<String> {
        match (self.error, self.message) {
            (Some(error), Some(message)) => Some(format!("{error}: {message}")),
            (Some(error), None) => Some(error),
            (None, Some(message)) => Some(message),
            (None, None) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_body_message_combinations() {
        let both: ApiErrorBody =
            serde_json::from_str(r#"{"error":"NOT_ONBOARDED","message":"account not onboarded"}"#)
                .unwrap();
        assert_eq!(
            both.into_message(),
            Some("NOT_ONBOARDED: account not onboarded".to_string())
        );

        let only_error: ApiErrorBody = serde_json::from_str(r#"{"error":"BAD_SIGNATURE"}"#).unwrap();
        assert_eq!(only_error.into_message(), Some("BAD_SIGNATURE".to_string()));

        let empty: ApiErrorBody = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.into_message(), None);
    }

    #[test]
    fn test_system_config_ignores_extra_fields() {
        let response: SystemConfigResponse = serde_json::from_str(
            r#"{"starknet_chain_id":"SN_SEPOLIA","starknet_gateway_url":"https://example"}"#,
        )
        .unwrap();
        assert_eq!(response.starknet_chain_id, "SN_SEPOLIA");
    }
}
