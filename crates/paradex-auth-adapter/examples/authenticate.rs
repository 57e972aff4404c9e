/*
[INPUT]:  Account credentials from the process environment
[OUTPUT]: Authenticated session token for API access
[POS]:    Examples - authentication flow demonstration
[UPDATE]: When auth flow changes
*/

use paradex_auth_adapter::{AuthFlow, AuthOutcome, ParadexAccount, ParadexClient};

/// Example: Paradex authentication flow
///
/// 1. Build the account from configured credentials
/// 2. Create the HTTP client (testnet base URL, 10s timeout)
/// 3. Run the handshake: onboard if needed, then request a session token
///
/// Required environment:
///   PARADEX_ETH_ADDRESS, PARADEX_PRIVATE_KEY, PARADEX_ADDRESS
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "paradex_auth_adapter=info".into()),
        )
        .init();

    let (eth_address, private_key, paradex_address) = match (
        std::env::var("PARADEX_ETH_ADDRESS"),
        std::env::var("PARADEX_PRIVATE_KEY"),
        std::env::var("PARADEX_ADDRESS"),
    ) {
        (Ok(eth), Ok(key), Ok(address)) => (eth, key, address),
        _ => {
            eprintln!(
                "Set PARADEX_ETH_ADDRESS, PARADEX_PRIVATE_KEY and PARADEX_ADDRESS to run this example"
            );
            return;
        }
    };

    let account = match ParadexAccount::new(&eth_address, &private_key, &paradex_address) {
        Ok(account) => account,
        Err(e) => {
            eprintln!("Invalid credentials: {e}");
            return;
        }
    };
    println!("✓ Account ready, public key {}", account.public_key());

    let client = match ParadexClient::new() {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Failed to create client: {e}");
            return;
        }
    };
    println!("✓ HTTP client created");

    let flow = AuthFlow::new(client, account);
    match flow.authenticate().await {
        Ok(AuthOutcome::Success(session)) => {
            println!("✓ Session token obtained");
            println!("  Usable until: {}", session.usable_until);
            println!("  Use it as: Authorization: Bearer <token>");
        }
        Ok(AuthOutcome::NeedsOnboarding) => {
            println!("Account is not onboarded yet; re-run to retry the handshake");
        }
        Err(e) => {
            eprintln!("Authentication failed: {e}");
        }
    }
}
