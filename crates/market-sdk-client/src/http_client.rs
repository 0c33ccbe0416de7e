use std::sync::atomic::{AtomicU64, Ordering};

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::{EthRpcClient, Network, RpcResponse};

/// A JSON-RPC client backed by an HTTP node endpoint.
#[derive(Debug)]
pub struct HttpRpcClient {
    base_url: String,
    client: Client,
    next_id: AtomicU64,
}

impl HttpRpcClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            client: Client::new(),
            next_id: AtomicU64::new(1),
        }
    }

    pub fn base_mainnet() -> Self {
        Self::new(Network::base_mainnet().rpc_url)
    }

    pub fn base_sepolia() -> Self {
        Self::new(Network::base_sepolia().rpc_url)
    }
}

impl EthRpcClient for HttpRpcClient {
    type Error = reqwest::Error;

    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn request<R>(&self, method: &'static str, params: Value) -> Result<RpcResponse<R>, Self::Error>
    where
        R: DeserializeOwned + Send,
    {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        debug!("sending `{method}` to {}", self.base_url);

        let body = serde_json::json!({
            "jsonrpc": "2.0",
            "id": id,
            "method": method,
            "params": params,
        });

        let res = self.client.post(&self.base_url).json(&body).send().await?;
        res.json::<RpcResponse<R>>().await
    }
}
