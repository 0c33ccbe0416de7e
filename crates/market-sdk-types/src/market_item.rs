use ethers_core::abi::Token;
use ethers_core::types::{Address, U256};
use thiserror::Error;

/// Errors you can get while decoding a market item from ABI tokens.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("expected 6 fields, found {0}")]
    WrongArity(usize),

    #[error("field `{0}` has an unexpected ABI type")]
    UnexpectedType(&'static str),

    #[error("royalty fee percent {0} does not fit in a u32")]
    RoyaltyOverflow(U256),
}

/// The on-chain record describing a token's creator, owner, price,
/// royalty, and listing status. Sourced verbatim from a contract read
/// and replaced wholesale on re-fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarketItem {
    pub token_id: U256,
    pub creator: Address,
    pub current_owner: Address,
    /// Price in wei.
    pub price: U256,
    pub royalty_fee_percent: u32,
    pub is_listed: bool,
}

impl MarketItem {
    /// Decodes a market item from the ABI tokens of a contract read.
    ///
    /// Tuples are validated field by field rather than trusted by
    /// position: wrong arity, wrong token kinds, and royalty values
    /// outside `u32` are all rejected.
    pub fn from_tokens(tokens: &[Token]) -> Result<Self, DecodeError> {
        let [token_id, creator, current_owner, price, royalty, is_listed] = tokens else {
            return Err(DecodeError::WrongArity(tokens.len()));
        };

        let Token::Uint(token_id) = token_id else {
            return Err(DecodeError::UnexpectedType("tokenId"));
        };
        let Token::Address(creator) = creator else {
            return Err(DecodeError::UnexpectedType("creator"));
        };
        let Token::Address(current_owner) = current_owner else {
            return Err(DecodeError::UnexpectedType("currentOwner"));
        };
        let Token::Uint(price) = price else {
            return Err(DecodeError::UnexpectedType("price"));
        };
        let Token::Uint(royalty) = royalty else {
            return Err(DecodeError::UnexpectedType("royaltyFeePercent"));
        };
        let Token::Bool(is_listed) = is_listed else {
            return Err(DecodeError::UnexpectedType("isListed"));
        };

        if *royalty > U256::from(u32::MAX) {
            return Err(DecodeError::RoyaltyOverflow(*royalty));
        }

        Ok(Self {
            token_id: *token_id,
            creator: *creator,
            current_owner: *current_owner,
            price: *price,
            royalty_fee_percent: royalty.as_u32(),
            is_listed: *is_listed,
        })
    }
}
