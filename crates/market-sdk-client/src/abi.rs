use ethers_core::abi::{decode, encode, AbiError, ParamType, Token};
use ethers_core::types::{Bytes, U256};
use ethers_core::utils::id;
use market_sdk_types::MarketItem;

use crate::ClientError;

fn call_data(signature: &str, args: &[Token]) -> Bytes {
    let mut data = id(signature).to_vec();
    data.extend(encode(args));
    Bytes::from(data)
}

pub fn token_count_call() -> Bytes {
    call_data("tokenCount()", &[])
}

pub fn market_item_call(token_id: U256) -> Bytes {
    call_data("tokenIdToMarketItem(uint256)", &[Token::Uint(token_id)])
}

pub fn token_uri_call(token_id: U256) -> Bytes {
    call_data("tokenURI(uint256)", &[Token::Uint(token_id)])
}

pub fn all_listed_call() -> Bytes {
    call_data("getAllListedNFTs()", &[])
}

pub fn buy_call(token_id: U256) -> Bytes {
    call_data("buyNFT(uint256)", &[Token::Uint(token_id)])
}

fn market_item_fields() -> Vec<ParamType> {
    vec![
        ParamType::Uint(256),
        ParamType::Address,
        ParamType::Address,
        ParamType::Uint(256),
        ParamType::Uint(256),
        ParamType::Bool,
    ]
}

pub fn decode_uint(data: &[u8]) -> Result<U256, ClientError> {
    let tokens = decode(&[ParamType::Uint(256)], data).map_err(AbiError::from)?;
    match tokens.as_slice() {
        [Token::Uint(value)] => Ok(*value),
        _ => Err(ClientError::UnexpectedAbi("uint256")),
    }
}

pub fn decode_string(data: &[u8]) -> Result<String, ClientError> {
    let tokens = decode(&[ParamType::String], data).map_err(AbiError::from)?;
    match tokens.into_iter().next() {
        Some(Token::String(value)) => Ok(value),
        _ => Err(ClientError::UnexpectedAbi("string")),
    }
}

/// Decodes the six return values of the per-token market-item getter.
pub fn decode_market_item(data: &[u8]) -> Result<MarketItem, ClientError> {
    let tokens = decode(&market_item_fields(), data).map_err(AbiError::from)?;
    Ok(MarketItem::from_tokens(&tokens)?)
}

/// Decodes the `MarketItem[]` returned by the aggregate listing getter.
pub fn decode_market_items(data: &[u8]) -> Result<Vec<MarketItem>, ClientError> {
    let array = ParamType::Array(Box::new(ParamType::Tuple(market_item_fields())));
    let tokens = decode(&[array], data).map_err(AbiError::from)?;

    let Some(Token::Array(entries)) = tokens.into_iter().next() else {
        return Err(ClientError::UnexpectedAbi("MarketItem[]"));
    };

    entries
        .into_iter()
        .map(|entry| {
            let Token::Tuple(fields) = entry else {
                return Err(ClientError::UnexpectedAbi("MarketItem"));
            };
            Ok(MarketItem::from_tokens(&fields)?)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use ethers_core::types::Address;
    use hex_literal::hex;

    #[test]
    fn test_selectors() {
        // keccak256("tokenURI(uint256)")[..4]
        assert_eq!(&token_uri_call(U256::zero())[..4], hex!("c87b56dd"));
        assert_eq!(token_count_call().len(), 4);
        assert_eq!(buy_call(U256::one()).len(), 4 + 32);
    }

    #[test]
    fn test_market_item_round_trip() {
        let encoded = encode(&[
            Token::Uint(U256::from(3)),
            Token::Address(Address::from_low_u64_be(0xA)),
            Token::Address(Address::from_low_u64_be(0xB)),
            Token::Uint(U256::exp10(18)),
            Token::Uint(U256::from(5)),
            Token::Bool(true),
        ]);

        let item = decode_market_item(&encoded).unwrap();
        assert_eq!(item.token_id, U256::from(3));
        assert_eq!(item.royalty_fee_percent, 5);
        assert!(item.is_listed);
    }

    #[test]
    fn test_market_item_array() {
        let entry = |token_id: u64, listed: bool| {
            Token::Tuple(vec![
                Token::Uint(U256::from(token_id)),
                Token::Address(Address::from_low_u64_be(0xA)),
                Token::Address(Address::from_low_u64_be(0xB)),
                Token::Uint(U256::exp10(17)),
                Token::Uint(U256::from(2)),
                Token::Bool(listed),
            ])
        };
        let encoded = encode(&[Token::Array(vec![entry(1, true), entry(2, true)])]);

        let items = decode_market_items(&encoded).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].token_id, U256::one());
        assert_eq!(items[1].token_id, U256::from(2));
    }

    #[test]
    fn test_empty_listing() {
        let encoded = encode(&[Token::Array(Vec::new())]);
        assert!(decode_market_items(&encoded).unwrap().is_empty());
    }
}
