//! Stream new block headers from a node's WebSocket listener.
//!
//! ```sh
//! cargo run --example subscribe
//! ```

use ethrpc_client::{WsClient, LOCALHOST_WS_ENDPOINT};
use ethrpc_core::params::SubscriptionKind;

#[tokio::main]
async fn main() -> ethrpc_client::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let client = WsClient::connect(LOCALHOST_WS_ENDPOINT).await?;

    let subscription = client
        .eth_subscribe(SubscriptionKind::NewHeads, None, |head| async move {
            println!("new head: {} ({})", head["number"], head["hash"]);
        })
        .await?;
    println!("subscribed as {}", subscription.id());

    tokio::time::sleep(std::time::Duration::from_secs(60)).await;

    client.eth_unsubscribe(&subscription).await?;
    client.close().await
}
