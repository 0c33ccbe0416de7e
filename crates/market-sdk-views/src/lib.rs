mod detail;
mod gallery;
mod purchase;

pub use detail::*;
pub use gallery::*;
pub use purchase::*;
