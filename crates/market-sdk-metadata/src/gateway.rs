/// The scheme prefix of a content-addressed media reference.
pub const IPFS_SCHEME: &str = "ipfs://";

/// Environment variable naming the gateway host.
pub const GATEWAY_HOST_ENV: &str = "NFT_MARKET_GATEWAY_HOST";

/// An HTTP gateway translating content identifiers into fetchable URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gateway {
    host: String,
}

impl Gateway {
    pub fn new(host: impl Into<String>) -> Self {
        Self { host: host.into() }
    }

    /// Reads the gateway host from [`GATEWAY_HOST_ENV`].
    pub fn from_env() -> Result<Self, std::env::VarError> {
        Ok(Self::new(std::env::var(GATEWAY_HOST_ENV)?))
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// The gateway URL for a content identifier.
    pub fn ipfs_url(&self, cid: &str) -> String {
        format!("https://{}/ipfs/{}", self.host, cid)
    }

    /// Rewrites an `ipfs://` media reference into a gateway URL. Returns
    /// `None` when the reference does not use the `ipfs://` scheme.
    pub fn resolve_image(&self, image: &str) -> Option<String> {
        image
            .strip_prefix(IPFS_SCHEME)
            .map(|cid| self.ipfs_url(cid))
    }
}
