// Copyright 2025 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use cosmrs::proto::cosmos::authz::v1beta1::MsgExec;
use cosmrs::proto::cosmos::gov::{v1, v1beta1};
use cosmrs::proto::prost::{DecodeError, Message, Name};
use cosmrs::Any;
use std::collections::HashMap;
use tracing::trace;

/// Messages the spam prevention cares about. Anything else is carried as [`GovMsg::Other`].
#[derive(Debug, Clone, PartialEq)]
pub enum GovMsg {
    /// The supported proposal format.
    SubmitProposalV1Beta1(v1beta1::MsgSubmitProposal),

    /// Gov v1 proposals are banned from the mempool altogether.
    SubmitProposalV1(v1::MsgSubmitProposal),

    /// authz exec, wrapping further (still encoded) messages.
    Exec(MsgExec),

    Other { type_url: String },
}

impl GovMsg {
    pub fn type_url(&self) -> String {
        match self {
            GovMsg::SubmitProposalV1Beta1(_) => v1beta1::MsgSubmitProposal::type_url(),
            GovMsg::SubmitProposalV1(_) => v1::MsgSubmitProposal::type_url(),
            GovMsg::Exec(_) => MsgExec::type_url(),
            GovMsg::Other { type_url } => type_url.clone(),
        }
    }
}

impl From<v1beta1::MsgSubmitProposal> for GovMsg {
    fn from(msg: v1beta1::MsgSubmitProposal) -> Self {
        GovMsg::SubmitProposalV1Beta1(msg)
    }
}

impl From<v1::MsgSubmitProposal> for GovMsg {
    fn from(msg: v1::MsgSubmitProposal) -> Self {
        GovMsg::SubmitProposalV1(msg)
    }
}

impl From<MsgExec> for GovMsg {
    fn from(msg: MsgExec) -> Self {
        GovMsg::Exec(msg)
    }
}

pub trait MsgDecoder {
    fn decode(&self, msg: &Any) -> Result<GovMsg, DecodeError>;
}

impl<D: MsgDecoder + ?Sized> MsgDecoder for &D {
    fn decode(&self, msg: &Any) -> Result<GovMsg, DecodeError> {
        (**self).decode(msg)
    }
}

type DecodeFn = fn(&[u8]) -> Result<GovMsg, DecodeError>;

fn decode_into<M>(raw: &[u8]) -> Result<GovMsg, DecodeError>
where
    M: Message + Default + Into<GovMsg>,
{
    M::decode(raw).map(Into::into)
}

/// Maps type urls onto the decoders of the messages we know about.
#[derive(Clone)]
pub struct MessageRegistry {
    decoders: HashMap<String, DecodeFn>,
}

impl Default for MessageRegistry {
    fn default() -> Self {
        let mut registry = MessageRegistry::new_empty();
        registry.register::<v1beta1::MsgSubmitProposal>();
        registry.register::<v1::MsgSubmitProposal>();
        registry.register::<MsgExec>();
        registry
    }
}

impl MessageRegistry {
    pub fn new_empty() -> Self {
        MessageRegistry {
            decoders: HashMap::new(),
        }
    }

    pub fn register<M>(&mut self)
    where
        M: Message + Name + Default + Into<GovMsg>,
    {
        self.decoders.insert(M::type_url(), decode_into::<M>);
    }

    pub fn is_registered(&self, type_url: &str) -> bool {
        self.decoders.contains_key(type_url)
    }
}

impl MsgDecoder for MessageRegistry {
    fn decode(&self, msg: &Any) -> Result<GovMsg, DecodeError> {
        if msg.type_url.is_empty() {
            return Err(DecodeError::new("missing message type url"));
        }

        match self.decoders.get(&msg.type_url) {
            Some(decode) => decode(&msg.value),
            None => {
                trace!("'{}' is not a governance message", msg.type_url);
                Ok(GovMsg::Other {
                    type_url: msg.type_url.clone(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmrs::proto::cosmos::bank::v1beta1::MsgSend;
    use cosmrs::proto::cosmos::base::v1beta1::Coin as ProtoCoin;

    fn any<M: Message + Name>(msg: &M) -> Any {
        Any {
            type_url: M::type_url(),
            value: msg.encode_to_vec(),
        }
    }

    #[test]
    fn type_urls_use_sdk_naming() {
        assert_eq!(
            v1beta1::MsgSubmitProposal::type_url(),
            "/cosmos.gov.v1beta1.MsgSubmitProposal"
        );
        assert_eq!(
            v1::MsgSubmitProposal::type_url(),
            "/cosmos.gov.v1.MsgSubmitProposal"
        );
        assert_eq!(MsgExec::type_url(), "/cosmos.authz.v1beta1.MsgExec");
    }

    #[test]
    fn decodes_registered_messages() {
        let registry = MessageRegistry::default();

        let proposal = v1beta1::MsgSubmitProposal {
            initial_deposit: vec![ProtoCoin {
                denom: "stake".to_string(),
                amount: "200".to_string(),
            }],
            proposer: "n1proposer".to_string(),
            ..Default::default()
        };
        assert_eq!(
            registry.decode(&any(&proposal)).unwrap(),
            GovMsg::SubmitProposalV1Beta1(proposal)
        );

        let v1_proposal = v1::MsgSubmitProposal::default();
        assert_eq!(
            registry.decode(&any(&v1_proposal)).unwrap(),
            GovMsg::SubmitProposalV1(v1_proposal)
        );

        let exec = MsgExec {
            grantee: "n1grantee".to_string(),
            msgs: vec![],
        };
        assert_eq!(registry.decode(&any(&exec)).unwrap(), GovMsg::Exec(exec));
    }

    #[test]
    fn unknown_messages_are_passed_through() {
        let registry = MessageRegistry::default();
        let send = MsgSend::default();
        let decoded = registry.decode(&any(&send)).unwrap();
        assert_eq!(
            decoded,
            GovMsg::Other {
                type_url: "/cosmos.bank.v1beta1.MsgSend".to_string()
            }
        );
    }

    #[test]
    fn empty_registry_knows_nothing() {
        let registry = MessageRegistry::new_empty();
        assert!(!registry.is_registered(&MsgExec::type_url()));
        assert!(matches!(
            registry.decode(&any(&MsgExec::default())).unwrap(),
            GovMsg::Other { .. }
        ));
    }

    #[test]
    fn malformed_payloads_fail_to_decode() {
        let registry = MessageRegistry::default();
        let garbage = Any {
            type_url: MsgExec::type_url(),
            value: vec![0xff, 0xff, 0xff],
        };
        assert!(registry.decode(&garbage).is_err());

        let untyped = Any {
            type_url: String::new(),
            value: vec![],
        };
        assert!(registry.decode(&untyped).is_err());
    }
}
