//! Query basic chain state from a local node over blocking HTTP.
//!
//! Run a node with its HTTP RPC listener on the default port, then:
//!
//! ```sh
//! cargo run --example blocking
//! ```

use ethrpc_client::Client;

fn body(response: reqwest::blocking::Response) -> ethrpc_client::Result<serde_json::Value> {
    response
        .json()
        .map_err(|e| ethrpc_client::Error::Http(e.to_string()))
}

fn main() -> ethrpc_client::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let client = Client::localhost()?;

    let version = body(client.web3_client_version()?)?;
    println!("client version: {}", version["result"]);

    let network = body(client.net_version()?)?;
    println!("network id:     {}", network["result"]);

    let head = body(client.eth_block_number()?)?;
    println!("block number:   {}", head["result"]);

    Ok(())
}
