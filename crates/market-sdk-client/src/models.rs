use ethers_core::types::{H256, U64};
use serde::Deserialize;

/// A JSON-RPC 2.0 response envelope. Exactly one of `result` and `error`
/// is populated by a well-behaved node; `eth_getTransactionReceipt`
/// additionally returns a `null` result while the transaction is pending.
#[derive(Deserialize, Debug, Clone)]
pub struct RpcResponse<T> {
    pub result: Option<T>,
    pub error: Option<RpcErrorObject>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct RpcErrorObject {
    pub code: i64,
    pub message: String,
}

#[derive(Deserialize, Debug, Clone, Copy)]
pub struct TransactionReceipt {
    #[serde(rename = "transactionHash")]
    pub transaction_hash: H256,
    #[serde(rename = "blockNumber")]
    pub block_number: Option<U64>,
    /// `0x1` for success, `0x0` for a reverted transaction.
    pub status: Option<U64>,
}
