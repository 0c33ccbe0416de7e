use std::fmt;
use std::str::FromStr;

use ethers_core::types::U256;
use thiserror::Error;

/// The route segment did not parse as a decimal token identifier.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid token identifier `{0}`")]
pub struct ParseTokenIdError(pub String);

/// Unique unsigned integer naming one token within the contract.
///
/// Parsing only checks the shape; whether the identifier actually names a
/// minted token depends on the contract's token count and is checked with
/// [`TokenId::in_range`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TokenId(U256);

impl TokenId {
    pub fn new(value: U256) -> Self {
        Self(value)
    }

    pub fn value(self) -> U256 {
        self.0
    }

    /// Whether this identifier falls within `[1, token_count]`.
    pub fn in_range(self, token_count: U256) -> bool {
        !self.0.is_zero() && self.0 <= token_count
    }
}

impl FromStr for TokenId {
    type Err = ParseTokenIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        U256::from_dec_str(s)
            .map(Self)
            .map_err(|_| ParseTokenIdError(s.to_string()))
    }
}

impl From<U256> for TokenId {
    fn from(value: U256) -> Self {
        Self(value)
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
