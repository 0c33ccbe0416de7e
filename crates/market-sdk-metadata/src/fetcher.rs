use std::collections::HashMap;
use std::future::Future;

use market_sdk_types::NftMetadata;
use reqwest::Client;
use serde::Deserialize;
use tracing::warn;

use crate::{Gateway, MetadataError, IPFS_SCHEME};

/// The JSON document a token's metadata URI points at.
#[derive(Deserialize, Debug, Clone)]
struct RawMetadata {
    #[serde(default)]
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    image: Option<String>,
}

fn resolve(gateway: &Gateway, raw: RawMetadata) -> NftMetadata {
    let file_url = match raw.image.as_deref() {
        Some(image) => {
            let resolved = gateway.resolve_image(image);
            if resolved.is_none() {
                warn!("image `{image}` does not use the `{IPFS_SCHEME}` scheme, leaving it unresolved");
            }
            resolved
        }
        None => {
            warn!("metadata document carries no image field");
            None
        }
    };

    NftMetadata {
        name: raw.name,
        description: raw.description,
        file_url,
    }
}

/// Fetches and resolves the metadata document behind a token URI.
///
/// The trait is the seam view composition mocks in tests; failures are
/// returned for the caller to log and swallow, never retried here.
pub trait MetadataFetcher {
    fn fetch(
        &self,
        token_uri: &str,
    ) -> impl Future<Output = Result<NftMetadata, MetadataError>>;
}

/// Fetches metadata documents through an IPFS gateway over HTTP.
#[derive(Debug)]
pub struct IpfsGatewayFetcher {
    gateway: Gateway,
    client: Client,
}

impl IpfsGatewayFetcher {
    pub fn new(gateway: Gateway) -> Self {
        Self {
            gateway,
            client: Client::new(),
        }
    }

    pub fn gateway(&self) -> &Gateway {
        &self.gateway
    }
}

impl MetadataFetcher for IpfsGatewayFetcher {
    async fn fetch(&self, token_uri: &str) -> Result<NftMetadata, MetadataError> {
        let url = self.gateway.ipfs_url(token_uri);
        let raw = self.client.get(&url).send().await?.json::<RawMetadata>().await?;
        Ok(resolve(&self.gateway, raw))
    }
}

/// A fetcher for tests, answering each token URI from a canned JSON body.
#[derive(Debug)]
pub struct MockMetadataFetcher {
    gateway: Gateway,
    responses: HashMap<String, String>,
}

impl MockMetadataFetcher {
    pub fn new(gateway: Gateway) -> Self {
        Self {
            gateway,
            responses: HashMap::new(),
        }
    }

    pub fn mock_response(&mut self, token_uri: &str, body: &str) {
        self.responses
            .insert(token_uri.to_string(), body.to_string());
    }
}

impl MetadataFetcher for MockMetadataFetcher {
    async fn fetch(&self, token_uri: &str) -> Result<NftMetadata, MetadataError> {
        let Some(body) = self.responses.get(token_uri) else {
            return Err(MetadataError::NoMockMetadata(token_uri.to_string()));
        };
        let raw = serde_json::from_str::<RawMetadata>(body)?;
        Ok(resolve(&self.gateway, raw))
    }
}
