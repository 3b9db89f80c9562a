// Copyright 2025 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

//! Mempool admission gate protecting nyxd governance from proposal spam.
//!
//! [`GovPreventSpamDecorator`] runs as part of the ante handler chain during `CheckTx` and rejects
//! the following messages, including when they are wrapped inside an authz `MsgExec`:
//! - gov v1beta1 proposals whose initial deposit is below a configured fraction
//!   (20% by default) of the chain's `min_deposit`
//! - any gov v1 proposal

pub mod ante;
pub mod coins;
pub mod config;
pub mod context;
pub mod decorator;
pub mod deposit;
pub mod error;
pub mod keeper;
pub mod msg;

pub use ante::{AnteChain, AnteDecorator, AnteHandler, AnteResult, AnteTx};
pub use coins::Coins;
pub use config::Config;
pub use context::{Context, ExecMode};
pub use decorator::GovPreventSpamDecorator;
pub use deposit::DepositRequirement;
pub use error::{AnteError, ConfigError, GovSpamError};
pub use keeper::GovKeeper;
pub use msg::{GovMsg, MessageRegistry, MsgDecoder};
