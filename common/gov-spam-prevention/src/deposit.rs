// Copyright 2025 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use crate::coins::Coins;
use crate::error::GovSpamError;
use cosmwasm_std::{Decimal, Uint256, Uint512};
use std::fmt;

/// Minimum initial deposit a proposal has to carry in order to be admitted into the mempool.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DepositRequirement(Coins);

impl DepositRequirement {
    /// Scales every denom of the chain's `min_deposit` by `rate`, rounding to the nearest integer.
    pub fn new(min_deposit: &Coins, rate: Decimal) -> Result<Self, GovSpamError> {
        let mut required = Coins::new();
        for (denom, amount) in min_deposit.iter() {
            let scaled = mul_round_half_even(amount, rate).ok_or_else(|| {
                GovSpamError::RequirementOverflow {
                    denom: denom.to_string(),
                }
            })?;
            required.try_add(denom, scaled)?;
        }
        Ok(DepositRequirement(required))
    }

    pub fn coins(&self) -> &Coins {
        &self.0
    }

    /// The deposit is insufficient only if it falls short in every required denom.
    pub fn is_met_by(&self, deposit: &Coins) -> bool {
        !deposit.is_all_lt(&self.0)
    }
}

impl fmt::Display for DepositRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

// multiplication is done on the raw 18-decimal atomics in 512 bits so that it's exact,
// the same way cosmos-sdk's `Dec.MulInt(..).RoundInt()` behaves (ties go to the even integer)
fn mul_round_half_even(amount: Uint256, rate: Decimal) -> Option<Uint256> {
    let precision = Uint512::from(10u128.pow(Decimal::DECIMAL_PLACES));
    let product = amount.full_mul(Uint256::from(rate.atomics()));

    let mut quotient = product.checked_div(precision).ok()?;
    let remainder = product.checked_rem(precision).ok()?;

    let doubled = remainder.checked_add(remainder).ok()?;
    let is_odd = !quotient.checked_rem(Uint512::from(2u128)).ok()?.is_zero();
    if doubled > precision || (doubled == precision && is_odd) {
        quotient = quotient.checked_add(Uint512::one()).ok()?;
    }

    Uint256::try_from(quotient).ok()
}
