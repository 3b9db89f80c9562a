// Copyright 2025 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use crate::context::Context;
use cosmrs::proto::cosmos::base::v1beta1::Coin as ProtoCoin;
use cosmrs::proto::cosmos::gov::v1beta1::DepositParams;
use std::sync::Arc;

/// Read-only access to the governance module parameters.
pub trait GovKeeper {
    /// Minimum deposit a proposal needs to enter its voting period.
    fn min_deposit(&self, ctx: &Context) -> Vec<ProtoCoin>;
}

// static parameters, for example for light nodes or tests
impl GovKeeper for DepositParams {
    fn min_deposit(&self, _ctx: &Context) -> Vec<ProtoCoin> {
        self.min_deposit.clone()
    }
}

impl<K: GovKeeper + ?Sized> GovKeeper for &K {
    fn min_deposit(&self, ctx: &Context) -> Vec<ProtoCoin> {
        (**self).min_deposit(ctx)
    }
}

impl<K: GovKeeper + ?Sized> GovKeeper for Arc<K> {
    fn min_deposit(&self, ctx: &Context) -> Vec<ProtoCoin> {
        (**self).min_deposit(ctx)
    }
}
