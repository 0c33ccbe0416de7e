use ethers_core::types::{Address, U256};
use ethers_core::utils::format_ether;

/// Renders a wei amount in ether with trailing zeros trimmed, so a price
/// of `10^18` wei renders as `"1"`.
pub fn format_price(wei: U256) -> String {
    let formatted = format_ether(wei);
    match formatted.split_once('.') {
        Some((integer, fraction)) => {
            let fraction = fraction.trim_end_matches('0');
            if fraction.is_empty() {
                integer.to_string()
            } else {
                format!("{integer}.{fraction}")
            }
        }
        None => formatted,
    }
}

/// Contracts an address to its leading and trailing hex digits, the form
/// shown next to avatars.
pub fn shrink_address(address: Address) -> String {
    let full = format!("{address:?}");
    format!("{}...{}", &full[..6], &full[full.len() - 4..])
}
