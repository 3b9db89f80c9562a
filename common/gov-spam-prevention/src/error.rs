// Copyright 2025 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use crate::coins::Coins;
use cosmrs::proto::prost::DecodeError;
use cosmwasm_std::Decimal;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GovSpamError {
    #[error("not enough initial deposit. required: {required}: insufficient funds")]
    InsufficientDeposit { required: Coins },

    #[error("failed to send a new proposal: '{type_url}' proposals are not accepted, please use '/cosmos.gov.v1beta1.MsgSubmitProposal' instead: not allowed")]
    DeprecatedProposalFormat { type_url: String },

    #[error("could not decode message {index} ('{type_url}') wrapped in an authz exec: {source}")]
    MalformedBatchMessage {
        index: usize,
        type_url: String,
        #[source]
        source: DecodeError,
    },

    #[error("could not decode tx message {index} ('{type_url}'): {source}")]
    MalformedMessage {
        index: usize,
        type_url: String,
        #[source]
        source: DecodeError,
    },

    #[error("authz exec messages must not be nested more than {max_depth} level(s) deep")]
    ExecNestingTooDeep { max_depth: usize },

    #[error("'{amount}' is not a valid amount of '{denom}'")]
    InvalidCoin { denom: String, amount: String },

    #[error("the required initial deposit of '{denom}' does not fit into 256 bits")]
    RequirementOverflow { denom: String },
}

#[derive(Debug, Error)]
pub enum AnteError {
    #[error(transparent)]
    GovSpam(#[from] GovSpamError),

    #[error("ante handler failure: {0}")]
    Other(Box<dyn std::error::Error + Send + Sync>),
}

impl AnteError {
    pub fn other<E>(error: E) -> AnteError
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        AnteError::Other(Box::new(error))
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(
        "failed to load config file using path '{}'. detailed message: {source}", path.display()
    )]
    ConfigLoadFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("the provided config is malformed: {source}")]
    MalformedConfig {
        #[from]
        source: toml::de::Error,
    },

    #[error("min_initial_deposit_rate must be within [0, 1]. got: {rate}")]
    InvalidDepositRate { rate: Decimal },

    #[error("max_exec_depth must not be set to 0. authz exec messages always have to be unwrapped at least once")]
    ZeroExecDepth,
}
