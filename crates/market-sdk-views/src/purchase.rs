use std::future::Future;
use std::time::Duration;

use ethers_core::types::{H256, U256, U64};
use market_sdk_client::{ClientError, EthRpcClient};
use market_sdk_types::TokenId;
use tracing::{info, warn};

/// How long a rejection message is allowed to get before truncation.
const MAX_MESSAGE_LEN: usize = 120;

/// Submits the value-carrying buy transaction through a connected wallet.
///
/// This is the seam the signing provider plugs into: the SDK never holds
/// keys. The exact listed price must be attached as the call value.
pub trait BuySubmitter {
    type Error: std::fmt::Display;

    fn submit_buy(
        &self,
        token_id: TokenId,
        value: U256,
    ) -> impl Future<Output = Result<H256, Self::Error>>;
}

/// Lifecycle of one purchase attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PurchaseState {
    Idle,
    Submitting,
    /// The network accepted the transaction and returned its hash; the
    /// receipt has not been observed yet.
    Confirming { hash: H256 },
    Confirmed { hash: H256 },
    /// The transaction made it on chain and reverted. Terminal: the hash
    /// exists, so retrying from this instance is off the table.
    Reverted { hash: H256 },
    /// The submission was rejected before a hash was returned.
    Failed { message: String },
}

/// Drives one purchase from user action to receipt.
///
/// Once a transaction hash is observed the buy action is permanently
/// disabled for this instance, so a confirming purchase cannot be
/// double-submitted. After a rejection the user may retry manually; there
/// is no automatic retry. Dropping the flow abandons receipt observation
/// without affecting on-chain state.
#[derive(Debug)]
pub struct PurchaseFlow {
    state: PurchaseState,
    poll_interval: Duration,
    max_poll_attempts: u32,
}

impl Default for PurchaseFlow {
    fn default() -> Self {
        Self {
            state: PurchaseState::Idle,
            poll_interval: Duration::from_secs(2),
            max_poll_attempts: 150,
        }
    }
}

impl PurchaseFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_polling(poll_interval: Duration, max_poll_attempts: u32) -> Self {
        Self {
            state: PurchaseState::Idle,
            poll_interval,
            max_poll_attempts,
        }
    }

    pub fn state(&self) -> &PurchaseState {
        &self.state
    }

    /// Whether the buy action is still available. False forever once a
    /// hash has been observed.
    pub fn can_buy(&self) -> bool {
        matches!(
            self.state,
            PurchaseState::Idle | PurchaseState::Failed { .. }
        )
    }

    /// The user pressed buy. Moves to `Submitting` immediately; a no-op
    /// when the action is disabled.
    pub fn begin(&mut self) -> bool {
        if !self.can_buy() {
            return false;
        }
        self.state = PurchaseState::Submitting;
        true
    }

    /// The network accepted the transaction.
    pub fn transaction_sent(&mut self, hash: H256) {
        info!("buy transaction accepted: {hash:?}");
        self.state = PurchaseState::Confirming { hash };
    }

    /// The submission was rejected before a hash was returned.
    pub fn submission_failed(&mut self, message: impl AsRef<str>) {
        self.state = PurchaseState::Failed {
            message: short_message(message.as_ref()),
        };
    }

    /// The transaction receipt was observed.
    pub fn receipt_observed(&mut self, reverted: bool) {
        let PurchaseState::Confirming { hash } = &self.state else {
            return;
        };
        let hash = *hash;
        if reverted {
            warn!("buy transaction reverted: {hash:?}");
            self.state = PurchaseState::Reverted { hash };
        } else {
            self.state = PurchaseState::Confirmed { hash };
        }
    }

    /// Submits the purchase and observes its outcome. `price` is attached
    /// as the exact transaction value. Returns the final state reached.
    pub async fn buy<S, C>(
        &mut self,
        submitter: &S,
        client: &C,
        token_id: TokenId,
        price: U256,
    ) -> &PurchaseState
    where
        S: BuySubmitter,
        C: EthRpcClient,
        ClientError: From<C::Error>,
    {
        if !self.begin() {
            return &self.state;
        }

        match submitter.submit_buy(token_id, price).await {
            Ok(hash) => self.transaction_sent(hash),
            Err(error) => {
                self.submission_failed(error.to_string());
                return &self.state;
            }
        }

        self.await_receipt(client).await;
        &self.state
    }

    /// Polls for the receipt at a fixed interval. Exhausting the attempt
    /// bound leaves the flow in `Confirming`: the outcome is unknown, but
    /// the on-chain state is whatever it is.
    async fn await_receipt<C>(&mut self, client: &C)
    where
        C: EthRpcClient,
        ClientError: From<C::Error>,
    {
        let PurchaseState::Confirming { hash } = &self.state else {
            return;
        };
        let hash = *hash;

        for attempt in 0..self.max_poll_attempts {
            if attempt > 0 {
                tokio::time::sleep(self.poll_interval).await;
            }

            match client.get_transaction_receipt(hash).await {
                Ok(response) => {
                    if let Some(receipt) = response.result {
                        self.receipt_observed(receipt.status == Some(U64::zero()));
                        return;
                    }
                    if let Some(error) = response.error {
                        warn!("receipt lookup failed: {} ({})", error.message, error.code);
                    }
                }
                Err(error) => {
                    let error = ClientError::from(error);
                    warn!("receipt lookup failed: {error}");
                }
            }
        }
    }
}

/// Rejection messages are surfaced verbatim but kept short: first line
/// only, truncated at a char boundary.
fn short_message(message: &str) -> String {
    let line = message.lines().next().unwrap_or("transaction rejected");
    let line = if line.is_empty() {
        "transaction rejected"
    } else {
        line
    };
    match line.char_indices().nth(MAX_MESSAGE_LEN) {
        Some((index, _)) => format!("{}...", &line[..index]),
        None => line.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use market_sdk_client::MockRpcClient;

    struct StaticSubmitter {
        outcome: Result<H256, String>,
    }

    impl BuySubmitter for StaticSubmitter {
        type Error = String;

        async fn submit_buy(&self, _token_id: TokenId, _value: U256) -> Result<H256, String> {
            self.outcome.clone()
        }
    }

    fn token_id() -> TokenId {
        TokenId::new(U256::from(3))
    }

    fn receipt_response(status: &str) -> String {
        format!(
            r#"{{
                "jsonrpc": "2.0",
                "id": 1,
                "result": {{
                    "transactionHash": "0x0000000000000000000000000000000000000000000000000000000000000077",
                    "blockNumber": "0x10",
                    "status": "{status}"
                }}
            }}"#
        )
    }

    #[test]
    fn test_begin_moves_to_submitting_immediately() {
        let mut flow = PurchaseFlow::new();
        assert_eq!(*flow.state(), PurchaseState::Idle);

        assert!(flow.begin());
        assert_eq!(*flow.state(), PurchaseState::Submitting);
    }

    #[test]
    fn test_hash_disables_buying_permanently() {
        let mut flow = PurchaseFlow::new();
        flow.begin();
        flow.transaction_sent(H256::from_low_u64_be(0x77));

        assert!(!flow.can_buy());
        assert!(!flow.begin());
        assert_eq!(
            *flow.state(),
            PurchaseState::Confirming {
                hash: H256::from_low_u64_be(0x77)
            }
        );

        flow.receipt_observed(false);
        assert!(!flow.can_buy());
        assert!(!flow.begin());
    }

    #[test]
    fn test_failure_allows_manual_retry() {
        let mut flow = PurchaseFlow::new();
        flow.begin();
        flow.submission_failed("user rejected the request");

        assert!(flow.can_buy());
        assert!(flow.begin());
    }

    #[tokio::test]
    async fn test_rejection_before_hash_never_confirms() {
        let mut flow = PurchaseFlow::new();
        let submitter = StaticSubmitter {
            outcome: Err("user rejected the request".to_string()),
        };
        let client = MockRpcClient::new();

        let state = flow
            .buy(&submitter, &client, token_id(), U256::exp10(18))
            .await;

        let PurchaseState::Failed { message } = state else {
            panic!("expected a failed purchase, got {state:?}");
        };
        assert!(!message.is_empty());
        assert_eq!(message, "user rejected the request");
        // The receipt was never looked up.
        assert!(client.requests().is_empty());
    }

    #[tokio::test]
    async fn test_successful_purchase_confirms() {
        let mut flow = PurchaseFlow::new();
        let submitter = StaticSubmitter {
            outcome: Ok(H256::from_low_u64_be(0x77)),
        };
        let mut client = MockRpcClient::new();
        client.mock_response("eth_getTransactionReceipt", &receipt_response("0x1"));

        let state = flow
            .buy(&submitter, &client, token_id(), U256::exp10(18))
            .await;

        assert_eq!(
            *state,
            PurchaseState::Confirmed {
                hash: H256::from_low_u64_be(0x77)
            }
        );
        assert!(!flow.can_buy());
    }

    #[tokio::test]
    async fn test_reverted_purchase_stays_disabled() {
        let mut flow = PurchaseFlow::new();
        let submitter = StaticSubmitter {
            outcome: Ok(H256::from_low_u64_be(0x77)),
        };
        let mut client = MockRpcClient::new();
        client.mock_response("eth_getTransactionReceipt", &receipt_response("0x0"));

        let state = flow
            .buy(&submitter, &client, token_id(), U256::exp10(18))
            .await;

        assert_eq!(
            *state,
            PurchaseState::Reverted {
                hash: H256::from_low_u64_be(0x77)
            }
        );
        // A hash was observed, so a revert must not re-open the action.
        assert!(!flow.can_buy());
        assert!(!flow.begin());
        assert_eq!(
            *flow.state(),
            PurchaseState::Reverted {
                hash: H256::from_low_u64_be(0x77)
            }
        );
    }

    #[test]
    fn test_reverted_receipt_keeps_buying_disabled() {
        let mut flow = PurchaseFlow::new();
        flow.begin();
        flow.transaction_sent(H256::from_low_u64_be(0x77));
        flow.receipt_observed(true);

        assert!(!flow.can_buy());
        assert!(!flow.begin());
    }

    #[tokio::test]
    async fn test_pending_receipt_stays_confirming() {
        let mut flow = PurchaseFlow::with_polling(Duration::from_millis(1), 3);
        let submitter = StaticSubmitter {
            outcome: Ok(H256::from_low_u64_be(0x77)),
        };
        let mut client = MockRpcClient::new();
        client.mock_response(
            "eth_getTransactionReceipt",
            r#"{ "jsonrpc": "2.0", "id": 1, "result": null }"#,
        );

        let state = flow
            .buy(&submitter, &client, token_id(), U256::exp10(18))
            .await;

        assert_eq!(
            *state,
            PurchaseState::Confirming {
                hash: H256::from_low_u64_be(0x77)
            }
        );
        assert_eq!(client.requests().len(), 3);
        assert!(!flow.can_buy());
    }

    #[test]
    fn test_short_message() {
        assert_eq!(short_message("nope"), "nope");
        assert_eq!(short_message("first line\nsecond line"), "first line");
        assert_eq!(short_message(""), "transaction rejected");

        let long = "x".repeat(200);
        let shortened = short_message(&long);
        assert_eq!(shortened.len(), MAX_MESSAGE_LEN + 3);
        assert!(shortened.ends_with("..."));
    }
}
