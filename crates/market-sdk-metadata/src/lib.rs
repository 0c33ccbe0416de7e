mod error;
mod fetcher;
mod gateway;

pub use error::*;
pub use fetcher::*;
pub use gateway::*;
