// Copyright 2025 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use crate::error::GovSpamError;
use cosmrs::proto::cosmos::base::v1beta1::Coin as ProtoCoin;
use cosmwasm_std::Uint256;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Normalised set of coins, keyed (and sorted) by denomination.
///
/// Mirrors the invariants of the cosmos-sdk `Coins` type: at most one entry per denom,
/// no zero amounts and amounts of up to 256 bits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Coins(BTreeMap<String, Uint256>);

impl Coins {
    pub fn new() -> Self {
        Coins::default()
    }

    /// Builds the set out of raw protobuf coins, summing up any duplicate denoms.
    pub fn try_from_proto(coins: &[ProtoCoin]) -> Result<Self, GovSpamError> {
        let mut normalised = Coins::new();
        for coin in coins {
            let amount = parse_amount(&coin.amount).ok_or_else(|| GovSpamError::InvalidCoin {
                denom: coin.denom.clone(),
                amount: coin.amount.clone(),
            })?;
            normalised.try_add(&coin.denom, amount)?;
        }
        Ok(normalised)
    }

    pub fn try_add(&mut self, denom: &str, amount: Uint256) -> Result<(), GovSpamError> {
        if amount.is_zero() {
            return Ok(());
        }
        let current = self.amount_of(denom);
        let total = current
            .checked_add(amount)
            .map_err(|_| GovSpamError::InvalidCoin {
                denom: denom.to_string(),
                amount: format!("{current} + {amount}"),
            })?;
        self.0.insert(denom.to_string(), total);
        Ok(())
    }

    pub fn amount_of(&self, denom: &str) -> Uint256 {
        self.0.get(denom).copied().unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Uint256)> {
        self.0.iter().map(|(denom, amount)| (denom.as_str(), *amount))
    }

    /// Returns true if `self` holds strictly less than `other` in every denom of `other`.
    /// Denoms missing from `self` count as zero, and an empty `other` is never undercut.
    pub fn is_all_lt(&self, other: &Coins) -> bool {
        if other.is_empty() {
            return false;
        }
        other
            .iter()
            .all(|(denom, required)| self.amount_of(denom) < required)
    }
}

fn parse_amount(raw: &str) -> Option<Uint256> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Uint256::from_str(raw).ok()
}

impl fmt::Display for Coins {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (denom, amount) in self.iter() {
            if !first {
                write!(f, ",")?;
            }
            write!(f, "{amount}{denom}")?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) fn coins(entries: &[(&str, u128)]) -> Coins {
    let mut coins = Coins::new();
    for (denom, amount) in entries {
        coins.try_add(denom, Uint256::from(*amount)).unwrap();
    }
    coins
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2^128, just past what fits into 128 bits
    const BEYOND_U128: &str = "340282366920938463463374607431768211456";

    fn proto_coin(amount: &str, denom: &str) -> ProtoCoin {
        ProtoCoin {
            denom: denom.to_string(),
            amount: amount.to_string(),
        }
    }

    #[test]
    fn duplicate_denoms_are_summed_and_zeros_dropped() {
        let coins = Coins::try_from_proto(&[
            proto_coin("100", "stake"),
            proto_coin("0", "unym"),
            proto_coin("50", "stake"),
        ])
        .unwrap();

        assert_eq!(coins.len(), 1);
        assert_eq!(coins.amount_of("stake"), Uint256::from(150u128));
        assert_eq!(coins.amount_of("unym"), Uint256::zero());
    }

    #[test]
    fn amounts_beyond_128_bits_are_supported() {
        let coins = Coins::try_from_proto(&[proto_coin(BEYOND_U128, "stake")]).unwrap();
        assert_eq!(coins.amount_of("stake").to_string(), BEYOND_U128);
    }

    #[test]
    fn unparsable_amounts_are_rejected() {
        // 2^256
        let beyond_u256 =
            "115792089237316195423570985008687907853269984665640564039457584007913129639936";
        for bad in ["", "-5", "+5", "1.5", "abc", " 1", beyond_u256] {
            let res = Coins::try_from_proto(&[proto_coin(bad, "stake")]);
            assert!(matches!(res, Err(GovSpamError::InvalidCoin { .. })), "{bad}");
        }
    }

    #[test]
    fn overflowing_sum_is_rejected() {
        let max = Uint256::MAX.to_string();
        let res = Coins::try_from_proto(&[proto_coin(&max, "stake"), proto_coin("1", "stake")]);
        assert!(matches!(res, Err(GovSpamError::InvalidCoin { .. })));
    }

    #[test]
    fn display_matches_sdk_format() {
        assert_eq!(
            coins(&[("unym", 10), ("stake", 200)]).to_string(),
            "200stake,10unym"
        );
        assert_eq!(Coins::new().to_string(), "");
    }

    #[test]
    fn all_less_than() {
        let required = coins(&[("stake", 200), ("unym", 50)]);

        assert!(coins(&[("stake", 199), ("unym", 49)]).is_all_lt(&required));

        // meeting a single denom is sufficient
        assert!(!coins(&[("stake", 1), ("unym", 50)]).is_all_lt(&required));

        // missing denoms count as zero
        let unrelated = coins(&[("uatom", 1_000_000)]);
        assert!(unrelated.is_all_lt(&required));
        assert!(Coins::new().is_all_lt(&required));

        assert!(!Coins::new().is_all_lt(&Coins::new()));
        assert!(!unrelated.is_all_lt(&Coins::new()));
    }
}
