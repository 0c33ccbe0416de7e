mod abi;
mod contract;
mod error;
mod eth_rpc_client;
mod http_client;
mod mock_client;
mod models;
mod network;

pub use abi::*;
pub use contract::*;
pub use error::*;
pub use eth_rpc_client::*;
pub use http_client::*;
pub use mock_client::*;
pub use models::*;
pub use network::*;
