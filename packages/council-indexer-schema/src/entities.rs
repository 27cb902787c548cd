use crate::Entity;
use council_indexer_types::scalar::{AccountId, Balance, BlockNumber, Hash};
use council_indexer_types::{type_id, TypeId, COUNCIL_TYPES_NAMESPACE};
use serde::{Deserialize, Serialize};

/// An address seen as the recipient of at least one balance transfer.
///
/// Created at most once per address and never mutated afterwards. The sender
/// side of a transfer is deliberately not materialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
}

impl Account {
    pub fn new(id: AccountId) -> Self {
        Self { id }
    }
}

impl TypeId for Account {
    fn type_id() -> i64 {
        type_id(COUNCIL_TYPES_NAMESPACE, "Account")
    }
}

impl Entity for Account {
    fn id(&self) -> String {
        self.id.clone()
    }
}

/// One balance transfer, keyed by the event occurrence that carried it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    pub id: String,
    pub block_number: BlockNumber,
    pub recipient: AccountId,
    pub amount: Balance,
}

impl Transfer {
    pub fn new(id: String, block_number: BlockNumber, recipient: AccountId, amount: Balance) -> Self {
        Self {
            id,
            block_number,
            recipient,
            amount,
        }
    }
}

impl TypeId for Transfer {
    fn type_id() -> i64 {
        type_id(COUNCIL_TYPES_NAMESPACE, "Transfer")
    }
}

impl Entity for Transfer {
    fn id(&self) -> String {
        self.id.clone()
    }
}

/// A council proposal, keyed by its hash. A repeat `council.Proposed` event
/// carrying the same hash overwrites the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proposal {
    pub id: Hash,
    pub index: String,
    pub account: AccountId,
    pub hash: Hash,
    pub vote_threshold: String,
    pub block: BlockNumber,
}

impl TypeId for Proposal {
    fn type_id() -> i64 {
        type_id(COUNCIL_TYPES_NAMESPACE, "Proposal")
    }
}

impl Entity for Proposal {
    fn id(&self) -> String {
        self.id.clone()
    }
}

/// One council vote, keyed by the event occurrence that carried it.
///
/// `proposal_hash` and `councillor` are soft references; neither is checked
/// against an existing Proposal or Councillor record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteHistory {
    pub id: String,
    pub proposal_hash: Hash,
    pub approved_vote: bool,
    pub councillor: AccountId,
    pub voted_yes: u32,
    pub voted_no: u32,
    pub block: BlockNumber,
}

impl TypeId for VoteHistory {
    fn type_id() -> i64 {
        type_id(COUNCIL_TYPES_NAMESPACE, "VoteHistory")
    }
}

impl Entity for VoteHistory {
    fn id(&self) -> String {
        self.id.clone()
    }
}

/// An address that has cast at least one recorded council vote, tracked via
/// a running vote count. The only mutable entity in the schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Councillor {
    pub id: AccountId,
    pub number_of_votes: u64,
}

impl Councillor {
    pub fn new(id: AccountId) -> Self {
        Self {
            id,
            number_of_votes: 0,
        }
    }
}

impl TypeId for Councillor {
    fn type_id() -> i64 {
        type_id(COUNCIL_TYPES_NAMESPACE, "Councillor")
    }
}

impl Entity for Councillor {
    fn id(&self) -> String {
        self.id.clone()
    }
}
