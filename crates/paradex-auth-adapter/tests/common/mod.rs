/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for paradex-auth-adapter tests

use paradex_auth_adapter::{AuthFlow, ClientConfig, ParadexAccount, ParadexClient};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_ETH_ADDRESS: &str = "0x90f79bf6eb2c4f870365e785982e1f101e93b906";
pub const TEST_PRIVATE_KEY: &str =
    "0x139fe4d6f02e666e86a6f58e65060f115cd3c185bd9e98bd829636931458f79";
pub const TEST_PARADEX_ADDRESS: &str =
    "0x35a473ab93b52f15848d39a17a139517023bb6a2296f6713b67d83f633ee49b";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Build an account from the fixed test credentials
pub fn test_account() -> ParadexAccount {
    ParadexAccount::new(TEST_ETH_ADDRESS, TEST_PRIVATE_KEY, TEST_PARADEX_ADDRESS)
        .expect("test account")
}

/// Build a flow pointed at the mock server
pub fn flow_for(server: &MockServer) -> AuthFlow {
    let client = ParadexClient::with_config_and_base_url(ClientConfig::default(), &server.uri())
        .expect("client init");
    AuthFlow::new(client, test_account())
}

/// Mount a healthy GET /system/config mock
pub async fn mount_system_config(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/system/config"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "starknet_chain_id": "PRIVATE_SN_POTC_SEPOLIA",
        })))
        .mount(server)
        .await;
}
