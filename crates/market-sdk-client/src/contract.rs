use ethers_core::types::{Address, Bytes, U256};
use market_sdk_types::{MarketItem, TokenId};

use crate::{abi, ClientError, EthRpcClient, Network};

/// A binding over the market contract at its fixed deployment address.
///
/// All methods are read-only `eth_call`s except [`buy_call_data`], which
/// builds the call data for the value-carrying purchase function; signing
/// and submitting that transaction belongs to the wallet.
///
/// [`buy_call_data`]: MarketContract::buy_call_data
#[derive(Debug)]
pub struct MarketContract<'a, C> {
    client: &'a C,
    address: Address,
}

impl<'a, C> MarketContract<'a, C>
where
    C: EthRpcClient,
    ClientError: From<C::Error>,
{
    pub fn new(client: &'a C, address: Address) -> Self {
        Self { client, address }
    }

    pub fn for_network(client: &'a C, network: &Network) -> Self {
        Self::new(client, network.contract_address)
    }

    pub fn address(&self) -> Address {
        self.address
    }

    /// The total number of tokens minted so far.
    pub async fn token_count(&self) -> Result<U256, ClientError> {
        let data = self.call(abi::token_count_call()).await?;
        abi::decode_uint(&data)
    }

    /// The market-item record for one token.
    pub async fn market_item(&self, token_id: TokenId) -> Result<MarketItem, ClientError> {
        let data = self.call(abi::market_item_call(token_id.value())).await?;
        abi::decode_market_item(&data)
    }

    /// The metadata URI (a content identifier) for one token.
    pub async fn token_uri(&self, token_id: TokenId) -> Result<String, ClientError> {
        let data = self.call(abi::token_uri_call(token_id.value())).await?;
        abi::decode_string(&data)
    }

    /// Every item currently listed for sale.
    pub async fn all_listed_items(&self) -> Result<Vec<MarketItem>, ClientError> {
        let data = self.call(abi::all_listed_call()).await?;
        abi::decode_market_items(&data)
    }

    /// Call data for the purchase function. The listed price must be
    /// attached as the transaction value, exactly.
    pub fn buy_call_data(&self, token_id: TokenId) -> Bytes {
        abi::buy_call(token_id.value())
    }

    async fn call(&self, data: Bytes) -> Result<Bytes, ClientError> {
        let response = self.client.call(self.address, data).await?;

        if let Some(error) = response.error {
            return Err(ClientError::Rpc {
                code: error.code,
                message: error.message,
            });
        }

        response.result.ok_or(ClientError::MissingResult("eth_call"))
    }
}
