use std::future::Future;

use ethers_core::types::{Address, Bytes, H256, U64};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{RpcResponse, TransactionReceipt};

/// Read-only JSON-RPC access to an Ethereum-compatible node.
///
/// Implementations provide the transport; the typed methods on top of it
/// are side-effect-free and may be retried freely, with no ordering
/// guarantee between independent reads.
pub trait EthRpcClient {
    type Error;

    fn base_url(&self) -> &str;

    fn request<R>(
        &self,
        method: &'static str,
        params: Value,
    ) -> impl Future<Output = Result<RpcResponse<R>, Self::Error>>
    where
        R: DeserializeOwned + Send;

    fn call(
        &self,
        to: Address,
        data: Bytes,
    ) -> impl Future<Output = Result<RpcResponse<Bytes>, Self::Error>> {
        self.request(
            "eth_call",
            serde_json::json!([{ "to": to, "data": data }, "latest"]),
        )
    }

    fn get_transaction_receipt(
        &self,
        hash: H256,
    ) -> impl Future<Output = Result<RpcResponse<TransactionReceipt>, Self::Error>> {
        self.request("eth_getTransactionReceipt", serde_json::json!([hash]))
    }

    fn block_number(&self) -> impl Future<Output = Result<RpcResponse<U64>, Self::Error>> {
        self.request("eth_blockNumber", serde_json::json!([]))
    }
}
