// Copyright 2025 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

/// The phase a transaction is being processed in.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExecMode {
    /// Initial validation before the tx is admitted into the local mempool.
    #[default]
    Check,

    /// Re-validation of a tx that's already sitting in the mempool after a new block got committed.
    ReCheck,

    Simulate,

    /// Execution of a tx included in a block.
    Finalize,
}

impl fmt::Display for ExecMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecMode::Check => write!(f, "check"),
            ExecMode::ReCheck => write!(f, "recheck"),
            ExecMode::Simulate => write!(f, "simulate"),
            ExecMode::Finalize => write!(f, "finalize"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Context {
    pub mode: ExecMode,
    pub block_height: u64,
    pub chain_id: String,
}

impl Context {
    pub fn new<S: Into<String>>(mode: ExecMode, block_height: u64, chain_id: S) -> Self {
        Context {
            mode,
            block_height,
            chain_id: chain_id.into(),
        }
    }

    #[must_use]
    pub fn with_mode(mut self, mode: ExecMode) -> Self {
        self.mode = mode;
        self
    }

    /// Whether this is a local, mempool-only validation (including rechecks).
    pub fn is_check_tx(&self) -> bool {
        matches!(self.mode, ExecMode::Check | ExecMode::ReCheck)
    }
}
