//! Hardware description tables for Linux driver support code
//!
//! [chiptables] bundles two sets of constant hardware data together with the
//! small amount of logic needed to use them:
//!
//! - [efuse]: efuse mask tables of Realtek Wi-Fi chips, which decide the
//!   efuse offsets that are reserved and hidden from the user.
//! - [pmic]: registers, regulators and interrupts of the X-Powers AXP20x
//!   power management IC family.
//!
//! ## As an application
//!
//! With the `cli` feature (enabled by default) the `chiptables` binary can
//! query mask tables, apply them to efuse map dumps, and decode PMIC register
//! dumps.
//!
//! ## As a library
//!
//! ```toml
//! chiptables = { version = "0.1", default-features = false }
//! ```
//!
//! [chiptables]: https://crates.io/crates/chiptables

#![cfg_attr(docsrs, feature(doc_cfg))]

pub use self::error::Error;

#[cfg(feature = "cli")]
#[cfg_attr(docsrs, doc(cfg(feature = "cli")))]
pub mod cli;
pub mod efuse;
mod error;
#[cfg(feature = "cli")]
#[cfg_attr(docsrs, doc(cfg(feature = "cli")))]
pub mod logging;
pub mod pmic;

/// Parses a single hex byte such as `f3`, `0xF3` or `0XF3`.
pub(crate) fn parse_hex_byte(token: &str) -> Option<u8> {
    let digits = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
        .unwrap_or(token);

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    u8::from_str_radix(digits, 16).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_bytes() {
        assert_eq!(parse_hex_byte("f3"), Some(0xF3));
        assert_eq!(parse_hex_byte("0xF3"), Some(0xF3));
        assert_eq!(parse_hex_byte("0X0c"), Some(0x0C));
        assert_eq!(parse_hex_byte("00f3"), Some(0xF3));

        for token in ["+f3", "0x+f3", "-1", "0x", "", "100", "0xg0"] {
            assert_eq!(parse_hex_byte(token), None, "{token:?}");
        }
    }
}
