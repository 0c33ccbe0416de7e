use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{ClientError, EthRpcClient, RpcResponse};

/// An RPC client for tests, answering each method from canned JSON
/// responses and recording every request it receives.
///
/// Queued responses (from [`push_response`]) are consumed in order before
/// the sticky response (from [`mock_response`]) takes over, so a sequence
/// of `eth_call`s against different contract functions can be scripted.
///
/// [`push_response`]: MockRpcClient::push_response
/// [`mock_response`]: MockRpcClient::mock_response
#[derive(Debug, Default)]
pub struct MockRpcClient {
    requests: Mutex<Vec<(String, Value)>>,
    queued: Mutex<HashMap<String, VecDeque<String>>>,
    responses: HashMap<String, String>,
}

impl MockRpcClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answers every request for `method` with `response`.
    pub fn mock_response(&mut self, method: &str, response: &str) {
        self.responses
            .insert(method.to_string(), response.to_string());
    }

    /// Queues a one-shot response for `method`.
    pub fn push_response(&mut self, method: &str, response: &str) {
        self.queued
            .lock()
            .unwrap()
            .entry(method.to_string())
            .or_default()
            .push_back(response.to_string());
    }

    pub fn requests(&self) -> Vec<(String, Value)> {
        self.requests.lock().unwrap().clone()
    }
}

impl EthRpcClient for MockRpcClient {
    type Error = ClientError;

    fn base_url(&self) -> &str {
        "http://rpc.example.com"
    }

    async fn request<R>(&self, method: &'static str, params: Value) -> Result<RpcResponse<R>, Self::Error>
    where
        R: DeserializeOwned + Send,
    {
        self.requests
            .lock()
            .unwrap()
            .push((method.to_string(), params));

        if let Some(response) = self
            .queued
            .lock()
            .unwrap()
            .get_mut(method)
            .and_then(VecDeque::pop_front)
        {
            return Ok(serde_json::from_str(&response)?);
        }

        match self.responses.get(method) {
            Some(response) => Ok(serde_json::from_str(response)?),
            None => Err(ClientError::NoMockResponse(method.to_string())),
        }
    }
}
