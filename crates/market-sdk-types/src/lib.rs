mod format;
mod market_item;
mod metadata;
mod token_id;

pub use format::*;
pub use market_item::*;
pub use metadata::*;
pub use token_id::*;
