//! Issue several pending calls before awaiting any, then gather them.
//!
//! The responses come back in issue order regardless of which network
//! round trip finishes first.
//!
//! ```sh
//! cargo run --example gather
//! ```

use ethrpc_client::{join_all, AsyncClient};

#[tokio::main]
async fn main() -> ethrpc_client::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let client = AsyncClient::localhost()?;

    let addresses = [
        "0x407d73d8a49eeb85d32cf465507dd71d507100c1",
        "0xde0b295669a9fd93d5f28d9ec85e40f4cb697bae",
        "0x8543d04b5dc1ba6579132b143087c68db903239f",
    ];
    let pending = addresses.iter().map(|a| client.eth_get_balance(a, None));

    for (address, response) in addresses.iter().zip(join_all(pending).await) {
        let body: serde_json::Value = response?
            .json()
            .await
            .map_err(|e| ethrpc_client::Error::Http(e.to_string()))?;
        println!("{address}: {}", body["result"]);
    }

    Ok(())
}
