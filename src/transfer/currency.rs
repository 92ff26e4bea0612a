// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use crate::blockchain::{NATIVE_TOKEN_PLACEHOLDER, NATIVE_TOKEN_ZERO};

/// Whether `currency` names the chain's native asset rather than a token
/// contract.
///
/// Total and pure: anything that is not one of the native sentinels,
/// including malformed input, is treated as a token address and left to
/// the contract path to validate.
pub fn is_native(currency: &str) -> bool {
    let currency = currency.trim();
    currency.eq_ignore_ascii_case(NATIVE_TOKEN_ZERO)
        || currency.eq_ignore_ascii_case(NATIVE_TOKEN_PLACEHOLDER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognises_native_sentinels() {
        assert!(is_native("0x0000000000000000000000000000000000000000"));
        assert!(is_native("0xeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeee"));
        assert!(is_native(" 0xEEEEEEEEEEEEEEEEEEEEEEEEEEEEEEEEEEEEEEEE "));
    }

    #[test]
    fn everything_else_is_a_token() {
        for currency in [
            "0x5425890298aed601595a70AB815c96711a31Bc65",
            "",
            "native",
            "0x0",
            "0x00000000000000000000000000000000000000000",
            "not an address",
        ] {
            assert!(!is_native(currency), "{currency:?}");
        }
    }

    #[test]
    fn deterministic_across_threads() {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                std::thread::spawn(move || {
                    let input = if i % 2 == 0 { NATIVE_TOKEN_ZERO } else { "0xabc" };
                    (i, is_native(input))
                })
            })
            .collect();

        for handle in handles {
            let (i, native) = handle.join().unwrap();
            assert_eq!(native, i % 2 == 0);
        }
    }
}
