/// Descriptive metadata for a token, derived from the JSON document its
/// metadata URI points at.
///
/// `file_url` is the gateway-resolved media URL. It stays `None` when the
/// document carries no `image` field or when that field does not use the
/// `ipfs://` scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NftMetadata {
    pub name: String,
    pub description: String,
    pub file_url: Option<String>,
}
