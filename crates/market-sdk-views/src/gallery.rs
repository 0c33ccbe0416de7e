use std::collections::HashMap;

use ethers_core::types::Address;
use market_sdk_client::{ClientError, EthRpcClient, MarketContract};
use market_sdk_metadata::{MetadataError, MetadataFetcher};
use market_sdk_types::{format_price, MarketItem, NftMetadata, TokenId};
use tracing::warn;

/// Listed items split by who owns them. The split is total: every listed
/// item lands in exactly one side.
#[derive(Debug, Clone, Default)]
pub struct Partition {
    pub mine: Vec<MarketItem>,
    pub others: Vec<MarketItem>,
}

/// One gallery card: the on-chain item plus whatever metadata has
/// resolved so far. `metadata` of `None` renders as a placeholder.
#[derive(Debug, Clone, Copy)]
pub struct GalleryEntry<'a> {
    pub item: &'a MarketItem,
    pub metadata: Option<&'a NftMetadata>,
}

impl GalleryEntry<'_> {
    pub fn price_display(&self) -> String {
        format_price(self.item.price)
    }
}

/// The listing page: the aggregate listed-item read plus per-token
/// metadata, each arriving independently.
#[derive(Debug, Default)]
pub struct GalleryView {
    listed: Option<Vec<MarketItem>>,
    metadata: HashMap<TokenId, NftMetadata>,
}

impl GalleryView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the listed-item read is still outstanding.
    pub fn is_loading(&self) -> bool {
        self.listed.is_none()
    }

    pub fn apply_listed(&mut self, items: Vec<MarketItem>) {
        self.listed = Some(items);
    }

    /// Applies a metadata fetch result. Failures are logged and leave the
    /// prior entry unchanged.
    pub fn apply_metadata(
        &mut self,
        token_id: TokenId,
        result: Result<NftMetadata, MetadataError>,
    ) {
        match result {
            Ok(metadata) => {
                self.metadata.insert(token_id, metadata);
            }
            Err(error) => warn!("failed to fetch metadata for token {token_id}: {error}"),
        }
    }

    pub fn entries(&self) -> Vec<GalleryEntry<'_>> {
        self.listed
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|item| GalleryEntry {
                item,
                metadata: self.metadata.get(&TokenId::new(item.token_id)),
            })
            .collect()
    }

    /// Splits the listed items into those owned by the connected account
    /// and everyone else's. With no account connected, everything is
    /// someone else's.
    pub fn partition(&self, account: Option<Address>) -> Partition {
        let mut partition = Partition::default();

        for item in self.listed.as_deref().unwrap_or_default() {
            if account == Some(item.current_owner) {
                partition.mine.push(*item);
            } else {
                partition.others.push(*item);
            }
        }

        partition
    }

    /// Fetches the listing and each listed token's metadata. Metadata and
    /// token-URI failures degrade to placeholders; only the aggregate
    /// listing read propagates its error, since nothing can render
    /// without it.
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
        let items = contract.all_listed_items().await?;
        self.apply_listed(items.clone());

        for item in items {
            let token_id = TokenId::new(item.token_id);
            match contract.token_uri(token_id).await {
                Ok(uri) => {
                    let result = fetcher.fetch(&uri).await;
                    self.apply_metadata(token_id, result);
                }
                Err(error) => warn!("failed to read token URI for {token_id}: {error}"),
            }
        }

        Ok(())
    }
}
