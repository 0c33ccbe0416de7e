use ethers_core::types::Address;

/// Chain configuration: the chain id, a public RPC endpoint, and the fixed
/// deployment address of the market contract on that chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Network {
    pub chain_id: u64,
    pub rpc_url: String,
    pub contract_address: Address,
}

impl Network {
    pub fn base_mainnet() -> Self {
        Self {
            chain_id: 8453,
            rpc_url: "https://mainnet.base.org".to_string(),
            contract_address: Address::from([
                0x4b, 0xf2, 0x5b, 0xdc, 0xe3, 0xdb, 0xba, 0x25, 0xc4, 0x0d, 0x3e, 0x84, 0x6a,
                0x5a, 0x32, 0xa2, 0xe2, 0x0e, 0x6a, 0x4e,
            ]),
        }
    }

    pub fn base_sepolia() -> Self {
        Self {
            chain_id: 84_532,
            rpc_url: "https://sepolia.base.org".to_string(),
            contract_address: Address::from([
                0x1f, 0x9a, 0x3c, 0x51, 0x0b, 0x7c, 0x42, 0xef, 0x9c, 0x6e, 0x63, 0xd4, 0x5a,
                0xe6, 0xb5, 0x8c, 0x26, 0xba, 0x6f, 0xd0,
            ]),
        }
    }
}
