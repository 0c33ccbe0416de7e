pub use market_sdk_client::*;
pub use market_sdk_metadata::*;
pub use market_sdk_types::*;
pub use market_sdk_views::*;
