// Copyright 2025 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use crate::ante::{AnteDecorator, AnteHandler, AnteResult, AnteTx};
use crate::coins::Coins;
use crate::config::Config;
use crate::context::Context;
use crate::deposit::DepositRequirement;
use crate::error::GovSpamError;
use crate::keeper::GovKeeper;
use crate::msg::{GovMsg, MessageRegistry, MsgDecoder};
use cosmrs::proto::cosmos::authz::v1beta1::MsgExec;
use cosmrs::proto::cosmos::gov::v1;
use cosmrs::proto::cosmos::gov::v1beta1::MsgSubmitProposal;
use cosmrs::proto::prost::Name;
use cosmrs::Any;
use tracing::{debug, trace};

/// Rejects governance proposals submitted with an insufficient initial deposit,
/// as well as any gov v1 proposals, before they make it into the mempool.
/// Proposals wrapped in authz `MsgExec` are subject to the same rules.
pub struct GovPreventSpamDecorator<K, D = MessageRegistry> {
    config: Config,
    gov_keeper: K,
    decoder: D,
}

impl<K> GovPreventSpamDecorator<K, MessageRegistry>
where
    K: GovKeeper,
{
    pub fn new(config: Config, gov_keeper: K) -> Self {
        GovPreventSpamDecorator::new_with_decoder(config, gov_keeper, MessageRegistry::default())
    }
}

impl<K, D> GovPreventSpamDecorator<K, D>
where
    K: GovKeeper,
    D: MsgDecoder,
{
    pub fn new_with_decoder(config: Config, gov_keeper: K, decoder: D) -> Self {
        GovPreventSpamDecorator {
            config,
            gov_keeper,
            decoder,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Initial deposit currently required from every new proposal.
    pub fn min_initial_deposit(&self, ctx: &Context) -> Result<DepositRequirement, GovSpamError> {
        let min_deposit = Coins::try_from_proto(&self.gov_keeper.min_deposit(ctx))?;
        DepositRequirement::new(&min_deposit, self.config.min_initial_deposit_rate)
    }

    /// Checks all tx messages in order, returning the first violation.
    ///
    /// The chain's deposit parameters are only read once a v1beta1 proposal is encountered,
    /// so txs without any proposal never depend on them.
    pub fn check_spam_submit_proposal_msgs(
        &self,
        ctx: &Context,
        msgs: &[Any],
    ) -> Result<(), GovSpamError> {
        let mut required = None;

        for (index, raw) in msgs.iter().enumerate() {
            let msg = self
                .decoder
                .decode(raw)
                .map_err(|source| GovSpamError::MalformedMessage {
                    index,
                    type_url: raw.type_url.clone(),
                    source,
                })?;
            self.check_msg(ctx, &mut required, msg, 0)?;
        }

        Ok(())
    }

    fn required_deposit<'a>(
        &self,
        ctx: &Context,
        cached: &'a mut Option<DepositRequirement>,
    ) -> Result<&'a DepositRequirement, GovSpamError> {
        let required = match cached.take() {
            Some(required) => required,
            None => self.min_initial_deposit(ctx)?,
        };
        Ok(cached.insert(required))
    }

    fn check_msg(
        &self,
        ctx: &Context,
        required: &mut Option<DepositRequirement>,
        msg: GovMsg,
        depth: usize,
    ) -> Result<(), GovSpamError> {
        match msg {
            GovMsg::SubmitProposalV1Beta1(proposal) => {
                let required = self.required_deposit(ctx, required)?;
                check_proposal(required, &proposal)
            }
            GovMsg::SubmitProposalV1(_) => Err(GovSpamError::DeprecatedProposalFormat {
                type_url: v1::MsgSubmitProposal::type_url(),
            }),
            GovMsg::Exec(exec) => self.check_exec(ctx, required, exec, depth + 1),
            GovMsg::Other { .. } => Ok(()),
        }
    }

    fn check_exec(
        &self,
        ctx: &Context,
        required: &mut Option<DepositRequirement>,
        exec: MsgExec,
        depth: usize,
    ) -> Result<(), GovSpamError> {
        if depth > self.config.max_exec_depth {
            return Err(GovSpamError::ExecNestingTooDeep {
                max_depth: self.config.max_exec_depth,
            });
        }

        trace!(
            "unwrapping {} message(s) executed on behalf of {}",
            exec.msgs.len(),
            exec.grantee
        );
        for (index, inner) in exec.msgs.iter().enumerate() {
            let inner_msg =
                self.decoder
                    .decode(inner)
                    .map_err(|source| GovSpamError::MalformedBatchMessage {
                        index,
                        type_url: inner.type_url.clone(),
                        source,
                    })?;
            self.check_msg(ctx, required, inner_msg, depth)?;
        }

        Ok(())
    }
}

fn check_proposal(
    required: &DepositRequirement,
    proposal: &MsgSubmitProposal,
) -> Result<(), GovSpamError> {
    let deposit = Coins::try_from_proto(&proposal.initial_deposit)?;
    if !required.is_met_by(&deposit) {
        return Err(GovSpamError::InsufficientDeposit {
            required: required.coins().clone(),
        });
    }
    Ok(())
}

impl<T, K, D> AnteDecorator<T> for GovPreventSpamDecorator<K, D>
where
    T: AnteTx + ?Sized,
    K: GovKeeper,
    D: MsgDecoder,
{
    fn ante_handle(
        &self,
        ctx: &Context,
        tx: &T,
        simulate: bool,
        next: &dyn AnteHandler<T>,
    ) -> AnteResult {
        // run checks only on CheckTx and never when simulating
        if !ctx.is_check_tx() || simulate {
            return next.handle(ctx, tx, simulate);
        }

        if let Err(err) = self.check_spam_submit_proposal_msgs(ctx, tx.msgs()) {
            debug!(
                height = ctx.block_height,
                mode = %ctx.mode,
                "rejecting tx from the mempool: {err}"
            );
            return Err(err.into());
        }

        next.handle(ctx, tx, simulate)
    }
}
