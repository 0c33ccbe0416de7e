use ethers_core::types::U256;
use market_sdk_client::{ClientError, EthRpcClient, MarketContract};
use market_sdk_metadata::{MetadataError, MetadataFetcher};
use market_sdk_types::{format_price, shrink_address, MarketItem, NftMetadata, TokenId};
use tracing::warn;

/// The per-token detail page.
///
/// Token count, item data, and metadata are three independent reads that
/// may resolve in any order; the view tolerates partial data and renders
/// placeholders for whatever is still outstanding. The item read is
/// suppressed until the identifier is proven to be within
/// `[1, token_count]`.
#[derive(Debug, Default)]
pub struct DetailView {
    token_id: Option<TokenId>,
    token_count: Option<U256>,
    item: Option<MarketItem>,
    metadata: Option<NftMetadata>,
}

impl DetailView {
    /// Builds the view from the route segment naming the token. A
    /// malformed segment marks the view invalid immediately.
    pub fn new(route_id: &str) -> Self {
        Self {
            token_id: route_id.parse().ok(),
            token_count: None,
            item: None,
            metadata: None,
        }
    }

    pub fn token_id(&self) -> Option<TokenId> {
        self.token_id
    }

    pub fn apply_token_count(&mut self, count: U256) {
        self.token_count = Some(count);
    }

    /// Whether the identifier is valid as far as we can tell. Malformed
    /// identifiers are invalid outright; well-formed ones become invalid
    /// once the token count proves them out of range.
    pub fn is_token_id_valid(&self) -> bool {
        match (self.token_id, self.token_count) {
            (None, _) => false,
            (Some(id), Some(count)) => id.in_range(count),
            (Some(_), None) => true,
        }
    }

    /// The item read stays suppressed until the count resolves and the
    /// identifier is in range.
    pub fn item_read_enabled(&self) -> bool {
        matches!(
            (self.token_id, self.token_count),
            (Some(id), Some(count)) if id.in_range(count)
        )
    }

    pub fn apply_item(&mut self, item: MarketItem) {
        self.item = Some(item);
    }

    /// Applies a metadata fetch result. Failures are logged and leave the
    /// prior fields unchanged.
    pub fn apply_metadata(&mut self, result: Result<NftMetadata, MetadataError>) {
        match result {
            Ok(metadata) => self.metadata = Some(metadata),
            Err(error) => warn!("failed to fetch metadata: {error}"),
        }
    }

    /// Whether the item data is still outstanding.
    pub fn is_loading(&self) -> bool {
        self.item.is_none()
    }

    pub fn item(&self) -> Option<&MarketItem> {
        self.item.as_ref()
    }

    pub fn name(&self) -> Option<&str> {
        self.metadata.as_ref().map(|m| m.name.as_str())
    }

    pub fn description(&self) -> Option<&str> {
        self.metadata.as_ref().map(|m| m.description.as_str())
    }

    pub fn file_url(&self) -> Option<&str> {
        self.metadata.as_ref().and_then(|m| m.file_url.as_deref())
    }

    /// "Name #id", once both the metadata and the item have resolved.
    pub fn title(&self) -> Option<String> {
        let name = self.name()?;
        let item = self.item.as_ref()?;
        Some(format!("{name} #{}", item.token_id))
    }

    pub fn price_display(&self) -> Option<String> {
        self.item.map(|item| format_price(item.price))
    }

    pub fn creator_display(&self) -> Option<String> {
        self.item.map(|item| shrink_address(item.creator))
    }

    pub fn owner_display(&self) -> Option<String> {
        self.item.map(|item| shrink_address(item.current_owner))
    }

    /// Runs the read sequence against the contract: count, then (if the
    /// identifier is in range) item data and metadata. Metadata and
    /// token-URI failures degrade to placeholders; count and item read
    /// errors propagate, since both reads are side-effect-free and freely
    /// retryable.
    pub async fn load<C, F>(
        &mut self,
        contract: &MarketContract<'_, C>,
        fetcher: &F,
    ) -> Result<(), ClientError>
    where
        C: EthRpcClient,
        ClientError: From<C::Error>,
        F: MetadataFetcher,
    {
        let count = contract.token_count().await?;
        self.apply_token_count(count);

        if !self.item_read_enabled() {
            return Ok(());
        }
        let Some(token_id) = self.token_id else {
            return Ok(());
        };

        let item = contract.market_item(token_id).await?;
        self.apply_item(item);

        match contract.token_uri(token_id).await {
            Ok(uri) => {
                let result = fetcher.fetch(&uri).await;
                self.apply_metadata(result);
            }
            Err(error) => warn!("failed to read token URI for {token_id}: {error}"),
        }

        Ok(())
    }
}
